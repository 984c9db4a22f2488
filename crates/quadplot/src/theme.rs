/// Static colors of the chart chrome. Point and legend swatch fills always
/// come from the data, never from the theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub quadrant_fill: String,
    pub frame_stroke: String,
    pub midline_stroke: String,
    /// Gridlines inherit the surrounding text color by default.
    pub gridline_stroke: String,
    pub gridline_opacity: f64,
    pub regression_stroke: String,
    pub text_color: String,
    /// Tooltip chrome: guide lines, label background, value pills.
    pub tooltip_surface: String,
    pub tooltip_text: String,
    pub highlight_fill: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            quadrant_fill: "hsl(0, 100%, 100%)".to_string(),
            frame_stroke: "black".to_string(),
            midline_stroke: "black".to_string(),
            gridline_stroke: "currentColor".to_string(),
            gridline_opacity: 0.3,
            regression_stroke: "gray".to_string(),
            text_color: "#333".to_string(),
            tooltip_surface: "hsl(227, 9%, 81%)".to_string(),
            tooltip_text: "hsl(230, 29%, 19%)".to_string(),
            highlight_fill: "hsl(0, 0%, 0%)".to_string(),
        }
    }
}
