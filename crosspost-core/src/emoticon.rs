//! Weibo emoticon substitution
//!
//! Weibo renders bracket codes like `[微笑]` as platform-specific images;
//! other platforms show the raw code. The table below maps each code to
//! the closest standard Unicode emoji.

/// Weibo bracket-code to Unicode emoji mapping.
pub const EMOTICON_TABLE: &[(&str, &str)] = &[
    ("[微笑]", "😊"),
    ("[嘻嘻]", "😁"),
    ("[哈哈]", "😄"),
    ("[爱你]", "❤️"),
    ("[挖鼻]", "👃"),
    ("[吃惊]", "😲"),
    ("[晕]", "😵"),
    ("[泪]", "😢"),
    ("[馋嘴]", "😋"),
    ("[抓狂]", "😫"),
    ("[哼]", "😤"),
    ("[可爱]", "😊"),
    ("[怒]", "😠"),
    ("[汗]", "😓"),
    ("[害羞]", "😳"),
    ("[睡]", "😴"),
    ("[钱]", "💰"),
    ("[偷笑]", "😏"),
    ("[笑cry]", "😂"),
    ("[doge]", "🐶"),
    ("[喵喵]", "🐱"),
    ("[二哈]", "🐺"),
    ("[酷]", "😎"),
    ("[衰]", "😩"),
    ("[思考]", "🤔"),
    ("[疑问]", "❓"),
    ("[拜拜]", "👋"),
    ("[鼓掌]", "👏"),
    ("[握手]", "🤝"),
    ("[赞]", "👍"),
    ("[心]", "❤️"),
    ("[伤心]", "💔"),
    ("[鲜花]", "🌹"),
    ("[太阳]", "☀️"),
    ("[月亮]", "🌙"),
    ("[威武]", "💪"),
    ("[给力]", "👍"),
    ("[可怜]", "🥺"),
    ("[右哼哼]", "😤"),
    ("[左哼哼]", "😤"),
    ("[嘘]", "🤫"),
    ("[委屈]", "😢"),
];

/// Replace every known Weibo emoticon code with its Unicode equivalent.
///
/// Codes are literal strings, so this is a plain table-driven replace
/// pass. Unknown bracket text is left untouched.
pub fn convert_emoticons(text: &str) -> String {
    let mut converted = text.to_string();
    for (code, emoji) in EMOTICON_TABLE {
        if converted.contains(code) {
            converted = converted.replace(code, emoji);
        }
    }
    converted
}
