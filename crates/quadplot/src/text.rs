use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: f64,
    pub font_weight: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 16.0,
            font_weight: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// Text sizing the layout step uses to box tooltip labels and value pills.
/// Headless rendering cannot ask a live DOM for bounding boxes, so the
/// measurer stands in for `getBBox()`.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Character-count heuristic: good enough for tooltip chrome and fully
/// deterministic across platforms, which keeps SVG output byte-stable.
#[derive(Debug, Clone, Default)]
pub struct DeterministicTextMeasurer {
    pub char_width_factor: f64,
    pub line_height_factor: f64,
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let char_width_factor = if self.char_width_factor == 0.0 {
            0.6
        } else {
            self.char_width_factor
        };
        let line_height_factor = if self.line_height_factor == 0.0 {
            1.2
        } else {
            self.line_height_factor
        };

        let font_size = style.font_size.max(1.0);
        let width = text.chars().count() as f64 * font_size * char_width_factor;
        let height = font_size * line_height_factor;
        TextMetrics { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_scales_with_length_and_font_size() {
        let m = DeterministicTextMeasurer::default();
        let small = m.measure(
            "abc",
            &TextStyle {
                font_size: 10.0,
                ..Default::default()
            },
        );
        let long = m.measure(
            "abcdef",
            &TextStyle {
                font_size: 10.0,
                ..Default::default()
            },
        );
        let big = m.measure(
            "abc",
            &TextStyle {
                font_size: 20.0,
                ..Default::default()
            },
        );
        assert!(long.width > small.width);
        assert!(big.width > small.width);
        assert!(big.height > small.height);
    }

    #[test]
    fn empty_text_has_zero_width() {
        let m = DeterministicTextMeasurer::default();
        let t = m.measure("", &TextStyle::default());
        assert_eq!(t.width, 0.0);
        assert!(t.height > 0.0);
    }
}
