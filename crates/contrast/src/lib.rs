pub mod color;
pub mod ratio;

pub use color::{ColorParseError, Rgb};
pub use ratio::{contrast_ratio, relative_luminance, round_ratio};

use serde::{Deserialize, Serialize};

/// External rendering widget that previews the two colors side by side.
pub const WIDGET_BASE_URL: &str = "https://widget-color-accessibility-checker.onrender.com";

/// Minimum contrast for WCAG AA normal text.
pub const AA_THRESHOLD: f64 = 4.5;
/// Minimum contrast for WCAG AAA normal text.
pub const AAA_THRESHOLD: f64 = 7.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContrastResult {
    #[serde(rename = "contrastRatio")]
    pub ratio: f64,
    #[serde(rename = "passesAA")]
    pub passes_aa: bool,
    #[serde(rename = "passesAAA")]
    pub passes_aaa: bool,
    pub message: String,
    #[serde(rename = "widgetUrl")]
    pub widget_url: String,
}

/// Analyze the WCAG contrast of a foreground/background color pair.
///
/// Total over arbitrary input: an unparsable color on either side yields the
/// 0.0 sentinel ratio (valid ratios are always >= 1.0) and both tiers fail.
/// Callers that need to distinguish bad input from genuinely low contrast
/// should go through [`Rgb::parse`] directly.
pub fn analyze_contrast(foreground: &str, background: &str) -> ContrastResult {
    let ratio = match (Rgb::parse(foreground), Rgb::parse(background)) {
        (Ok(fg), Ok(bg)) => contrast_ratio(fg, bg),
        _ => 0.0,
    };
    let rounded = round_ratio(ratio);
    let passes_aa = rounded >= AA_THRESHOLD;
    let passes_aaa = rounded >= AAA_THRESHOLD;

    let verdict = if passes_aa { "Passes AA." } else { "Does not pass AA." };
    let message = format!(
        "Contrast between {} and {} is {}:1. {}",
        foreground, background, rounded, verdict
    );

    let widget_url = format!(
        "{}?fg={}&bg={}",
        WIDGET_BASE_URL,
        foreground.trim_start_matches('#'),
        background.trim_start_matches('#'),
    );

    ContrastResult {
        ratio: rounded,
        passes_aa,
        passes_aaa,
        message,
        widget_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_on_white_passes_both_tiers() {
        let result = analyze_contrast("#000000", "#FFFFFF");
        assert_eq!(result.ratio, 21.0);
        assert!(result.passes_aa);
        assert!(result.passes_aaa);
    }

    #[test]
    fn identical_colors_fail_both_tiers() {
        let result = analyze_contrast("#123456", "#123456");
        assert_eq!(result.ratio, 1.0);
        assert!(!result.passes_aa);
        assert!(!result.passes_aaa);
    }

    #[test]
    fn shorthand_matches_full_form() {
        let short = analyze_contrast("#abc", "#000");
        let full = analyze_contrast("#aabbcc", "#000000");
        assert_eq!(short.ratio, full.ratio);
    }

    #[test]
    fn malformed_color_yields_sentinel() {
        for (fg, bg) in [("notacolor", "#FFFFFF"), ("#FFFFFF", "nope"), ("", "")] {
            let result = analyze_contrast(fg, bg);
            assert_eq!(result.ratio, 0.0);
            assert!(!result.passes_aa);
            assert!(!result.passes_aaa);
        }
    }

    #[test]
    fn ratio_is_symmetric_and_bounded() {
        let colors = ["#000000", "#FFFFFF", "#ff0000", "#00ff00", "#0000ff", "#808080"];
        for a in colors {
            for b in colors {
                let forward = analyze_contrast(a, b);
                let reverse = analyze_contrast(b, a);
                assert_eq!(forward.ratio, reverse.ratio);
                assert!(forward.ratio >= 1.0 && forward.ratio <= 21.0);
            }
        }
    }

    #[test]
    fn message_names_both_colors_and_verdict() {
        let result = analyze_contrast("#000000", "#FFFFFF");
        assert!(result.message.contains("#000000"));
        assert!(result.message.contains("#FFFFFF"));
        assert!(result.message.contains("21:1"));
        assert!(result.message.contains("Passes AA"));

        let failing = analyze_contrast("#777777", "#888888");
        assert!(failing.message.contains("Does not pass AA"));
    }

    #[test]
    fn widget_url_strips_hash_prefixes() {
        let result = analyze_contrast("#123456", "abcdef");
        assert_eq!(
            result.widget_url,
            format!("{}?fg=123456&bg=abcdef", WIDGET_BASE_URL)
        );
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let result = analyze_contrast("#000000", "#FFFFFF");
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("contrastRatio").is_some());
        assert!(value.get("passesAA").is_some());
        assert!(value.get("passesAAA").is_some());
        assert!(value.get("message").is_some());
        assert!(value.get("widgetUrl").is_some());
    }
}
