//! Paragraph marker decoration

use std::fmt;

/// Marker glyph prefixed to each paragraph when decoration is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MarkerStyle {
    /// ➤
    #[default]
    Arrow,
    /// 🔹
    SmallDiamond,
    /// 🌸
    Blossom,
    /// ✨
    Sparkles,
    /// 💠
    Diamond,
    /// 🍀
    Clover,
}

impl MarkerStyle {
    /// The glyph for this marker.
    pub fn glyph(self) -> &'static str {
        match self {
            MarkerStyle::Arrow => "➤",
            MarkerStyle::SmallDiamond => "🔹",
            MarkerStyle::Blossom => "🌸",
            MarkerStyle::Sparkles => "✨",
            MarkerStyle::Diamond => "💠",
            MarkerStyle::Clover => "🍀",
        }
    }

    /// All marker styles, for listings.
    pub fn all() -> &'static [MarkerStyle] {
        &[
            MarkerStyle::Arrow,
            MarkerStyle::SmallDiamond,
            MarkerStyle::Blossom,
            MarkerStyle::Sparkles,
            MarkerStyle::Diamond,
            MarkerStyle::Clover,
        ]
    }
}

impl fmt::Display for MarkerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Prefix every non-blank line of `text` with the marker glyph.
///
/// Blank lines and the line structure itself are preserved; the line
/// content after the marker is kept verbatim, including leading
/// whitespace.
pub fn add_paragraph_markers(text: &str, style: MarkerStyle) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{} {}", style.glyph(), line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_marker_each_paragraph() {
        assert_eq!(
            add_paragraph_markers("第一段\n第二段\n第三段", MarkerStyle::Arrow),
            "➤ 第一段\n➤ 第二段\n➤ 第三段"
        );
    }

    #[test]
    fn test_custom_markers() {
        for style in MarkerStyle::all() {
            let expected = format!("{style} 第一段\n{style} 第二段");
            assert_eq!(add_paragraph_markers("第一段\n第二段", *style), expected);
        }
    }

    #[test]
    fn test_blank_lines_kept() {
        assert_eq!(
            add_paragraph_markers("第一段\n\n第二段", MarkerStyle::Arrow),
            "➤ 第一段\n\n➤ 第二段"
        );
    }

    #[test]
    fn test_single_line() {
        assert_eq!(
            add_paragraph_markers("这是一段没有换行的文本", MarkerStyle::Arrow),
            "➤ 这是一段没有换行的文本"
        );
    }

    #[test]
    fn test_display_matches_glyph() {
        assert_eq!(MarkerStyle::Clover.to_string(), "🍀");
    }
}
