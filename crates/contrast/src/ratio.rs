use crate::color::Rgb;

/// WCAG relative luminance: linearized sRGB channels combined with the
/// standard perceptual weights. The breakpoint and weights are fixed by
/// the WCAG 2.1 definition.
pub fn relative_luminance(color: Rgb) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let v = channel as f64 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio of two colors, always in [1.0, 21.0].
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let lighter = l1.max(l2);
    let darker = l1.min(l2);

    (lighter + 0.05) / (darker + 0.05)
}

/// Round to 2 decimal places, half away from zero. Classification happens
/// on the rounded value, so 4.4999 rounds to 4.5 and passes AA.
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}
