/// Measures rendered text width; used to size the tooltip box.
pub trait TextMeasurer {
    fn measure_text_width(&self, text: &str) -> f64;
}

/// Deterministic, backend-independent width estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedTextMeasurer {
    pub font_size_px: f64,
}

impl Default for EstimatedTextMeasurer {
    fn default() -> Self {
        Self { font_size_px: 14.0 }
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure_text_width(&self, text: &str) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        (units * self.font_size_px).max(self.font_size_px)
    }
}

impl<F> TextMeasurer for F
where
    F: Fn(&str) -> f64,
{
    fn measure_text_width(&self, text: &str) -> f64 {
        self(text)
    }
}
