use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Absolute URL check. Site-relative paths ("/images/...") are accepted
/// because bundled content links into the site's own asset tree.
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok() || value.starts_with('/')
}

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("static pattern"));

static FUNCTIONAL_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)^(?:
            rgb\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*\)
          | rgba\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*,\s*[\d.]+\s*\)
          | hsl\(\s*\d+\s*,\s*[\d.]+%?\s*,\s*[\d.]+%?\s*\)
          | hsla\(\s*\d+\s*,\s*[\d.]+%?\s*,\s*[\d.]+%?\s*,\s*[\d.]+\s*\)
        )$",
    )
    .expect("static pattern")
});

// Common CSS named colors; there is no style engine here to defer to.
const NAMED_COLORS: &[&str] = &[
    "black", "silver", "gray", "grey", "white", "maroon", "red", "purple", "fuchsia", "green",
    "lime", "olive", "yellow", "navy", "blue", "teal", "aqua", "orange", "cyan", "magenta",
    "transparent", "currentcolor",
];

/// Strict `#RGB`/`#RRGGBB` check, for fields that only allow hex.
pub fn is_valid_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Accepts hex, `rgb[a]()`, `hsl[a]()`, or a common named color.
pub fn is_valid_css_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
        || FUNCTIONAL_COLOR.is_match(value)
        || NAMED_COLORS.contains(&value.to_ascii_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_accept_absolute_and_site_relative() {
        assert!(is_valid_url("https://example.com/page"));
        assert!(is_valid_url("/images/projects/hero.webp"));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn hex_colors() {
        assert!(is_valid_hex_color("#61DAFB"));
        assert!(is_valid_hex_color("#fff"));
        assert!(!is_valid_hex_color("#1234"));
        assert!(!is_valid_hex_color("blue"));
    }

    #[test]
    fn css_colors_cover_functional_and_named_forms() {
        assert!(is_valid_css_color("rgb(10, 20, 30)"));
        assert!(is_valid_css_color("rgba(10, 20, 30, 0.5)"));
        assert!(is_valid_css_color("hsl(120, 50%, 50%)"));
        assert!(is_valid_css_color("teal"));
        assert!(!is_valid_css_color("rgb(10, 20)"));
        assert!(!is_valid_css_color("blurple"));
    }
}
