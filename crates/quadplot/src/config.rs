/// Fixed margins around the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Geometry and typography knobs. Defaults give the stock 600x400 chart;
/// font sizes are rem-derived values at a 16px root.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,

    pub point_radius: f64,
    pub point_label_offset: f64,
    pub point_label_font_size: f64,

    /// Radius the highlight ring grows to while its point is hovered.
    pub hover_ring_radius: f64,
    /// Horizontal shift applied to a point label while hovered.
    pub hover_label_shift: f64,

    pub legend_row_height: f64,
    pub legend_swatch_radius: f64,
    pub legend_label_offset: f64,
    pub legend_title_font_size: f64,
    pub legend_label_font_size: f64,

    pub quadrant_label_font_size: f64,
    pub quadrant_fill_opacity: f64,

    /// Target tick count per axis; the tick algorithm may emit a few more or
    /// fewer to land on round values.
    pub tick_count: usize,
    pub x_tick_length: f64,
    pub y_tick_length: f64,
    pub tick_label_padding: f64,
    pub tick_label_font_size: f64,

    pub axis_label_font_size: f64,

    pub tooltip_value_font_size: f64,
    pub tooltip_label_pad_x: f64,
    pub tooltip_label_pad_y: f64,
    pub tooltip_pill_pad_x: f64,
    pub tooltip_pill_pad_y: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            margin: Margin {
                top: 20.0,
                right: 65.0,
                bottom: 50.0,
                left: 65.0,
            },

            point_radius: 5.0,
            point_label_offset: 8.0,
            point_label_font_size: 8.8,

            hover_ring_radius: 9.5,
            hover_label_shift: 12.0,

            legend_row_height: 15.0,
            legend_swatch_radius: 4.0,
            legend_label_offset: 12.0,
            legend_title_font_size: 12.8,
            legend_label_font_size: 8.0,

            quadrant_label_font_size: 14.4,
            quadrant_fill_opacity: 0.05,

            tick_count: 10,
            x_tick_length: 5.0,
            y_tick_length: 4.0,
            tick_label_padding: 4.0,
            tick_label_font_size: 8.8,

            axis_label_font_size: 10.4,

            tooltip_value_font_size: 9.6,
            tooltip_label_pad_x: 3.0,
            tooltip_label_pad_y: 1.5,
            tooltip_pill_pad_x: 4.0,
            tooltip_pill_pad_y: 2.0,
        }
    }
}

impl ChartConfig {
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}
