use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontProps {
    pub size_px: f64,
}

impl FontProps {
    #[must_use]
    pub const fn new(size_px: f64) -> Self {
        Self { size_px }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// Host text-measurement capability.
///
/// Treated as a pure synchronous oracle: the layout policy calls it for tick
/// truncation and for the in-bar label overflow heuristic, and never caches
/// across update cycles.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontProps) -> TextMetrics;

    /// Longest prefix of `text` (with a trailing ellipsis when shortened)
    /// that fits within `max_width_px`.
    fn truncate_to_fit(&self, text: &str, font: &FontProps, max_width_px: f64) -> String;
}

/// Deterministic stand-in measurer for tests and headless hosts.
///
/// Width is a fixed per-character advance ratio of the font size; no kerning,
/// no shaping. Truncation drops whole characters and appends `…`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicTextMeasurer {
    pub advance_ratio: f64,
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl HeuristicTextMeasurer {
    fn char_advance(&self, font: &FontProps) -> f64 {
        font.size_px * self.advance_ratio
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: &FontProps) -> TextMetrics {
        TextMetrics {
            width: self.char_advance(font) * text.chars().count() as f64,
            height: font.size_px,
        }
    }

    fn truncate_to_fit(&self, text: &str, font: &FontProps, max_width_px: f64) -> String {
        if self.measure(text, font).width <= max_width_px {
            return text.to_owned();
        }

        let advance = self.char_advance(font);
        if advance <= 0.0 || max_width_px < advance {
            return String::new();
        }

        // Budget includes the ellipsis itself.
        let budget = (max_width_px / advance).floor() as usize;
        let keep = budget.saturating_sub(1);
        let mut truncated: String = text.chars().take(keep).collect();
        truncated.push('…');
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::{FontProps, HeuristicTextMeasurer, TextMeasurer};

    #[test]
    fn measure_scales_with_length_and_font() {
        let measurer = HeuristicTextMeasurer::default();
        let font = FontProps::new(10.0);

        let short = measurer.measure("ab", &font);
        let long = measurer.measure("abcd", &font);
        assert_eq!(short.width, 12.0);
        assert_eq!(long.width, 24.0);
        assert_eq!(long.height, 10.0);
    }

    #[test]
    fn truncate_keeps_fitting_text_untouched() {
        let measurer = HeuristicTextMeasurer::default();
        let font = FontProps::new(10.0);

        assert_eq!(measurer.truncate_to_fit("abc", &font, 100.0), "abc");
    }

    #[test]
    fn truncate_appends_ellipsis_within_budget() {
        let measurer = HeuristicTextMeasurer::default();
        let font = FontProps::new(10.0);

        // 5 characters of budget at 6px advance.
        let truncated = measurer.truncate_to_fit("abcdefgh", &font, 30.0);
        assert_eq!(truncated, "abcd…");

        let metrics = measurer.measure(&truncated, &font);
        assert!(metrics.width <= 30.0);
    }
}
