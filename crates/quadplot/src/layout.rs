use crate::config::ChartConfig;
use crate::model::ChartSpec;
use crate::scale::LinearScale;
use crate::text::TextStyle;
use crate::theme::ChartTheme;
use crate::{LayoutOptions, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectData {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rx: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineData {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    pub stroke_width: f64,
    #[serde(default)]
    pub dash: Option<String>,
    #[serde(default)]
    pub opacity: Option<f64>,
}

/// Text anchored at `(x, y)`; `rotation` (degrees) applies about the anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextData {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub fill: String,
    pub font_size: f64,
    #[serde(default)]
    pub rotation: f64,
    /// SVG `text-anchor`: `start` | `middle` | `end`.
    pub anchor: String,
    /// SVG `dominant-baseline`: `auto` | `middle` | `central` | `hanging`.
    pub baseline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantData {
    pub rect: RectData,
    pub fill: String,
    pub opacity: f64,
    pub label: TextData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntryLayout {
    pub swatch_cx: f64,
    pub swatch_cy: f64,
    pub swatch_radius: f64,
    pub color: String,
    pub label: TextData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLayout {
    pub title: TextData,
    pub entries: Vec<LegendEntryLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLayout {
    pub value: f64,
    pub mark: LineData,
    pub gridline: LineData,
    pub label: TextData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub ticks: Vec<TickLayout>,
    pub title: TextData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillLayout {
    pub rect: RectData,
    pub label: TextData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightRing {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

/// Everything a hovered point reveals. Laid out up front; the renderer emits
/// it hidden and CSS `:hover` shows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipLayout {
    /// Background behind the (shifted) point label.
    pub label_bg: RectData,
    pub label_bg_fill: String,
    /// Dashed guide from the point down to the X axis.
    pub guide_to_x_axis: LineData,
    /// Dashed guide from the point left to the Y axis.
    pub guide_to_y_axis: LineData,
    /// Raw `x` value, pinned at the X-axis intercept.
    pub x_pill: PillLayout,
    /// Raw `y` value, pinned at the Y-axis intercept.
    pub y_pill: PillLayout,
    pub pill_fill: String,
    pub ring: HighlightRing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointLayout {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: String,
    pub label: TextData,
    pub tooltip: TooltipLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameData {
    pub rect: RectData,
    pub stroke: String,
    pub stroke_width: f64,
}

/// Complete drawable chart: plain data, no behavior. Serializable for
/// debugging (the CLI `layout` command prints it as JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub plot: RectData,
    pub quadrants: Vec<QuadrantData>,
    pub legend: LegendLayout,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
    pub edge_labels: Vec<TextData>,
    pub frame: FrameData,
    pub midlines: Vec<LineData>,
    pub regression: LineData,
    pub points: Vec<PointLayout>,
    pub text_color: String,
    /// Shift applied to a hovered point's label by the emitted CSS.
    pub hover_label_shift: f64,
    /// Radius the highlight ring grows to on hover.
    pub hover_ring_radius: f64,
}

fn text(
    s: impl Into<String>,
    x: f64,
    y: f64,
    fill: &str,
    font_size: f64,
    anchor: &str,
    baseline: &str,
) -> TextData {
    TextData {
        text: s.into(),
        x,
        y,
        fill: fill.to_string(),
        font_size,
        rotation: 0.0,
        anchor: anchor.to_string(),
        baseline: baseline.to_string(),
    }
}

fn solid_line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64) -> LineData {
    LineData {
        x1,
        y1,
        x2,
        y2,
        stroke: stroke.to_string(),
        stroke_width,
        dash: None,
        opacity: None,
    }
}

/// Stringifies a raw data value for tick labels and tooltip pills. Plain
/// shortest-decimal display, no grouping or precision control.
fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

/// Endpoints of the reference line in data space.
///
/// Not a literal `y = mx + b` line: the value is normalized as
/// `y = (m*x + b) * 100 / d1`, where `d1` is the second x-domain bound (the
/// max unless the axis is inverted). Intentional; see DESIGN.md before
/// changing.
fn regression_endpoints(m: f64, b: f64, x_domain: (f64, f64)) -> ((f64, f64), (f64, f64)) {
    let (x1, x2) = x_domain;
    let denom = x_domain.1;
    let y1 = (m * x1 + b) * 100.0 / denom;
    let y2 = (m * x2 + b) * 100.0 / denom;
    ((x1, y1), (x2, y2))
}

pub fn layout_chart(
    spec: &ChartSpec,
    cfg: &ChartConfig,
    theme: &ChartTheme,
    options: &LayoutOptions,
) -> Result<ChartLayout> {
    spec.validate()?;

    let measurer = options.text_measurer.as_ref();
    let left = cfg.margin.left;
    let top = cfg.margin.top;
    let pw = cfg.plot_width();
    let ph = cfg.plot_height();

    let sx = LinearScale::from_axis(&spec.x_range, spec.invert_x, (0.0, pw));
    let sy = LinearScale::from_axis(&spec.y_range, spec.invert_y, (ph, 0.0));
    let abs_x = |v: f64| left + sx.scale(v);
    let abs_y = |v: f64| top + sy.scale(v);

    // Quadrants: positional corner rule, not data-driven. Index 0 is
    // top-left, 1 top-right, 2 bottom-left, 3 bottom-right.
    let quadrants = spec
        .quadrants
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let qx = left + if i % 2 == 0 { 0.0 } else { pw / 2.0 };
            let qy = top + if i < 2 { 0.0 } else { ph / 2.0 };
            QuadrantData {
                rect: RectData {
                    x: qx,
                    y: qy,
                    width: pw / 2.0,
                    height: ph / 2.0,
                    rx: 0.0,
                },
                fill: theme.quadrant_fill.clone(),
                opacity: cfg.quadrant_fill_opacity,
                label: text(
                    label.clone(),
                    qx + pw / 4.0,
                    qy + ph / 4.0,
                    &theme.text_color,
                    cfg.quadrant_label_font_size,
                    "middle",
                    "middle",
                ),
            }
        })
        .collect::<Vec<_>>();

    // Legend, right of the plot inside the right margin.
    let legend_x = left + pw + cfg.margin.right / 2.0;
    let legend_y = top + cfg.margin.top;
    let legend = LegendLayout {
        title: text(
            spec.legend_title.clone(),
            legend_x,
            legend_y - 10.0,
            &theme.text_color,
            cfg.legend_title_font_size,
            "start",
            "auto",
        ),
        entries: spec
            .legend()
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let row_y = legend_y + i as f64 * cfg.legend_row_height;
                LegendEntryLayout {
                    swatch_cx: legend_x,
                    swatch_cy: row_y,
                    swatch_radius: cfg.legend_swatch_radius,
                    color: entry.color,
                    label: text(
                        entry.name,
                        legend_x + cfg.legend_label_offset,
                        row_y,
                        &theme.text_color,
                        cfg.legend_label_font_size,
                        "start",
                        "middle",
                    ),
                }
            })
            .collect(),
    };

    // Axes: short tick marks, dashed full-span gridlines, no axis line path.
    let x_axis_y = top + ph;
    let x_axis = AxisLayout {
        ticks: sx
            .ticks(cfg.tick_count)
            .into_iter()
            .map(|v| {
                let px = abs_x(v);
                TickLayout {
                    value: v,
                    mark: solid_line(px, x_axis_y, px, x_axis_y + cfg.x_tick_length, &theme.text_color, 1.0),
                    gridline: LineData {
                        x1: px,
                        y1: x_axis_y,
                        x2: px,
                        y2: top,
                        stroke: theme.gridline_stroke.clone(),
                        stroke_width: 1.0,
                        dash: Some("2".to_string()),
                        opacity: Some(theme.gridline_opacity),
                    },
                    label: text(
                        format_value(v),
                        px,
                        x_axis_y + cfg.x_tick_length + cfg.tick_label_padding,
                        &theme.text_color,
                        cfg.tick_label_font_size,
                        "middle",
                        "hanging",
                    ),
                }
            })
            .collect(),
        title: text(
            spec.x_label.clone(),
            left + pw / 2.0,
            top + ph + cfg.margin.bottom,
            &theme.text_color,
            cfg.axis_label_font_size,
            "middle",
            "auto",
        ),
    };

    let y_axis_x = left;
    let mut y_title = text(
        spec.y_label.clone(),
        left - cfg.margin.left,
        top + ph / 2.0,
        &theme.text_color,
        cfg.axis_label_font_size,
        "middle",
        "hanging",
    );
    y_title.rotation = -90.0;
    let y_axis = AxisLayout {
        ticks: sy
            .ticks(cfg.tick_count)
            .into_iter()
            .map(|v| {
                let py = abs_y(v);
                TickLayout {
                    value: v,
                    mark: solid_line(y_axis_x, py, y_axis_x - cfg.y_tick_length, py, &theme.text_color, 1.0),
                    gridline: LineData {
                        x1: y_axis_x,
                        y1: py,
                        x2: y_axis_x + pw,
                        y2: py,
                        stroke: theme.gridline_stroke.clone(),
                        stroke_width: 1.0,
                        dash: Some("2".to_string()),
                        opacity: Some(theme.gridline_opacity),
                    },
                    label: text(
                        format_value(v),
                        y_axis_x - cfg.y_tick_length - cfg.tick_label_padding,
                        py,
                        &theme.text_color,
                        cfg.tick_label_font_size,
                        "end",
                        "middle",
                    ),
                }
            })
            .collect(),
        title: y_title,
    };

    // Edge labels at the plot corners.
    let edge_label_y = top + ph + cfg.margin.bottom / 1.5;
    let mut y_label_top = text(
        spec.y_label_top.clone(),
        left - 25.0,
        top,
        &theme.text_color,
        cfg.axis_label_font_size,
        "end",
        "auto",
    );
    y_label_top.rotation = -90.0;
    let mut y_label_bottom = text(
        spec.y_label_bottom.clone(),
        left - 25.0,
        top + ph,
        &theme.text_color,
        cfg.axis_label_font_size,
        "start",
        "auto",
    );
    y_label_bottom.rotation = -90.0;
    let edge_labels = vec![
        text(
            spec.x_label_left.clone(),
            left,
            edge_label_y,
            &theme.text_color,
            cfg.axis_label_font_size,
            "start",
            "auto",
        ),
        text(
            spec.x_label_right.clone(),
            left + pw,
            edge_label_y,
            &theme.text_color,
            cfg.axis_label_font_size,
            "end",
            "auto",
        ),
        y_label_top,
        y_label_bottom,
    ];

    let frame = FrameData {
        rect: RectData {
            x: left,
            y: top,
            width: pw,
            height: ph,
            rx: 0.0,
        },
        stroke: theme.frame_stroke.clone(),
        stroke_width: 1.0,
    };

    // Always the geometric center of the plot, wherever the data's zero is.
    let midlines = vec![
        solid_line(
            left + pw / 2.0,
            top,
            left + pw / 2.0,
            top + ph,
            &theme.midline_stroke,
            1.0,
        ),
        solid_line(
            left,
            top + ph / 2.0,
            left + pw,
            top + ph / 2.0,
            &theme.midline_stroke,
            1.0,
        ),
    ];

    let ((rx1, ry1), (rx2, ry2)) =
        regression_endpoints(spec.regression.m, spec.regression.b, sx.domain());
    let regression = solid_line(
        abs_x(rx1),
        abs_y(ry1),
        abs_x(rx2),
        abs_y(ry2),
        &theme.regression_stroke,
        1.0,
    );

    let label_style = TextStyle {
        font_size: cfg.point_label_font_size,
        ..Default::default()
    };
    let pill_style = TextStyle {
        font_size: cfg.tooltip_value_font_size,
        ..Default::default()
    };

    let points = spec
        .data
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cx = abs_x(p.x);
            let cy = abs_y(p.y);

            // Label text carries the point's array index.
            let label_text = format!("{} {}", p.name, i);
            let label = text(
                label_text.clone(),
                cx + cfg.point_label_offset,
                cy,
                &theme.text_color,
                cfg.point_label_font_size,
                "start",
                "central",
            );

            let label_metrics = measurer.measure(&label_text, &label_style);
            let label_bg = RectData {
                x: cx + cfg.point_label_offset - cfg.tooltip_label_pad_x,
                y: cy - label_metrics.height / 2.0 - cfg.tooltip_label_pad_y,
                width: label_metrics.width + cfg.tooltip_label_pad_x * 2.0,
                height: label_metrics.height + cfg.tooltip_label_pad_y * 2.0,
                rx: 2.0,
            };

            let dashed = |x1: f64, y1: f64, x2: f64, y2: f64| LineData {
                x1,
                y1,
                x2,
                y2,
                stroke: theme.tooltip_surface.clone(),
                stroke_width: 2.0,
                dash: Some("7 4".to_string()),
                opacity: None,
            };

            let pill = |value: f64, px: f64, py: f64| {
                let value_text = format_value(value);
                let metrics = measurer.measure(&value_text, &pill_style);
                PillLayout {
                    rect: RectData {
                        x: px - metrics.width / 2.0 - cfg.tooltip_pill_pad_x,
                        y: py - metrics.height / 2.0 - cfg.tooltip_pill_pad_y,
                        width: metrics.width + cfg.tooltip_pill_pad_x * 2.0,
                        height: metrics.height + cfg.tooltip_pill_pad_y * 2.0,
                        rx: 3.0,
                    },
                    label: text(
                        value_text,
                        px,
                        py,
                        &theme.tooltip_text,
                        cfg.tooltip_value_font_size,
                        "middle",
                        "middle",
                    ),
                }
            };

            let tooltip = TooltipLayout {
                label_bg,
                label_bg_fill: theme.tooltip_surface.clone(),
                guide_to_x_axis: dashed(cx, cy, cx, top + ph),
                guide_to_y_axis: dashed(cx, cy, left, cy),
                x_pill: pill(p.x, cx, top + ph),
                y_pill: pill(p.y, left, cy),
                pill_fill: theme.tooltip_surface.clone(),
                ring: HighlightRing {
                    cx,
                    cy,
                    radius: cfg.hover_ring_radius,
                    fill: theme.highlight_fill.clone(),
                    stroke: theme.tooltip_surface.clone(),
                    stroke_width: 2.0,
                },
            };

            PointLayout {
                cx,
                cy,
                radius: cfg.point_radius,
                fill: p.color.clone(),
                label,
                tooltip,
            }
        })
        .collect();

    Ok(ChartLayout {
        width: cfg.width,
        height: cfg.height,
        plot: RectData {
            x: left,
            y: top,
            width: pw,
            height: ph,
            rx: 0.0,
        },
        quadrants,
        legend,
        x_axis,
        y_axis,
        edge_labels,
        frame,
        midlines,
        regression,
        points,
        text_color: theme.text_color.clone(),
        hover_label_shift: cfg.hover_label_shift,
        hover_ring_radius: cfg.hover_ring_radius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AxisRange, DataPoint, RegressionLine};

    fn spec() -> ChartSpec {
        ChartSpec {
            data: vec![
                DataPoint {
                    name: "A".into(),
                    color: "red".into(),
                    x: 0.0,
                    y: 0.0,
                },
                DataPoint {
                    name: "B".into(),
                    color: "blue".into(),
                    x: 10000.0,
                    y: 100.0,
                },
            ],
            x_range: AxisRange {
                min: 0.0,
                max: 10000.0,
            },
            y_range: AxisRange {
                min: 0.0,
                max: 100.0,
            },
            quadrants: vec!["Q1".into(), "Q2".into(), "Q3".into(), "Q4".into()],
            x_label: "Count".into(),
            y_label: "Share".into(),
            legend_title: "Teams".into(),
            y_label_top: "High".into(),
            y_label_bottom: "Low".into(),
            x_label_left: "Few".into(),
            x_label_right: "Many".into(),
            invert_x: false,
            invert_y: false,
            regression: RegressionLine::default(),
        }
    }

    fn layout(spec: &ChartSpec) -> ChartLayout {
        layout_chart(
            spec,
            &ChartConfig::default(),
            &ChartTheme::default(),
            &LayoutOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn quadrant_placement_is_positional() {
        let chart = layout(&spec());
        let q = &chart.quadrants;
        assert_eq!(q.len(), 4);
        // 0 top-left, 1 top-right, 2 bottom-left, 3 bottom-right.
        assert_eq!((q[0].rect.x, q[0].rect.y), (65.0, 20.0));
        assert_eq!((q[1].rect.x, q[1].rect.y), (300.0, 20.0));
        assert_eq!((q[2].rect.x, q[2].rect.y), (65.0, 185.0));
        assert_eq!((q[3].rect.x, q[3].rect.y), (300.0, 185.0));
        assert_eq!(q[0].label.text, "Q1");
        assert_eq!(q[3].label.text, "Q4");
        for quad in q {
            assert_eq!(quad.rect.width, 235.0);
            assert_eq!(quad.rect.height, 165.0);
        }
    }

    #[test]
    fn midlines_bisect_the_plot_regardless_of_data() {
        let mut s = spec();
        // Skew all data into one corner; midlines must not move.
        for p in &mut s.data {
            p.x = 9000.0;
            p.y = 90.0;
        }
        let chart = layout(&s);
        let [vertical, horizontal] = &chart.midlines[..] else {
            panic!("expected two midlines");
        };
        assert_eq!(vertical.x1, 65.0 + 235.0);
        assert_eq!(vertical.x2, 65.0 + 235.0);
        assert_eq!(horizontal.y1, 20.0 + 165.0);
        assert_eq!(horizontal.y2, 20.0 + 165.0);
    }

    #[test]
    fn example_points_land_at_plot_corners() {
        let chart = layout(&spec());
        let a = &chart.points[0];
        let b = &chart.points[1];
        // A(0,0) bottom-left, B(10000,100) top-right.
        assert!((a.cx - 65.0).abs() < 1e-9);
        assert!((a.cy - 350.0).abs() < 1e-9);
        assert!((b.cx - 535.0).abs() < 1e-9);
        assert!((b.cy - 20.0).abs() < 1e-9);
    }

    #[test]
    fn midpoint_x_scales_to_plot_center() {
        let mut s = spec();
        s.data = vec![DataPoint {
            name: "M".into(),
            color: "green".into(),
            x: 5000.0,
            y: 50.0,
        }];
        let chart = layout(&s);
        assert!((chart.points[0].cx - (65.0 + 235.0)).abs() < 1e-9);
    }

    #[test]
    fn invert_x_mirrors_every_point() {
        let s = spec();
        let plain = layout(&s);
        let mut inv = s.clone();
        inv.invert_x = true;
        let mirrored = layout(&inv);
        let left = 65.0;
        let pw = 470.0;
        for (p, m) in plain.points.iter().zip(&mirrored.points) {
            let expected = left + (pw - (p.cx - left));
            assert!((m.cx - expected).abs() < 1e-9);
            assert!((m.cy - p.cy).abs() < 1e-9);
        }
    }

    #[test]
    fn point_labels_use_array_index() {
        let chart = layout(&spec());
        assert_eq!(chart.points[0].label.text, "A 0");
        assert_eq!(chart.points[1].label.text, "B 1");
    }

    #[test]
    fn gridlines_span_the_full_plot() {
        let chart = layout(&spec());
        assert!(!chart.x_axis.ticks.is_empty());
        for tick in &chart.x_axis.ticks {
            assert_eq!(tick.gridline.y1, 350.0);
            assert_eq!(tick.gridline.y2, 20.0);
            assert_eq!(tick.gridline.dash.as_deref(), Some("2"));
        }
        for tick in &chart.y_axis.ticks {
            assert_eq!(tick.gridline.x1, 65.0);
            assert_eq!(tick.gridline.x2, 535.0);
        }
    }

    #[test]
    fn tooltip_guides_run_from_point_to_axes() {
        let mut s = spec();
        s.data = vec![DataPoint {
            name: "M".into(),
            color: "green".into(),
            x: 5000.0,
            y: 75.0,
        }];
        let chart = layout(&s);
        let t = &chart.points[0].tooltip;
        let (cx, cy) = (chart.points[0].cx, chart.points[0].cy);
        assert_eq!((t.guide_to_x_axis.x1, t.guide_to_x_axis.y1), (cx, cy));
        assert_eq!((t.guide_to_x_axis.x2, t.guide_to_x_axis.y2), (cx, 350.0));
        assert_eq!((t.guide_to_y_axis.x2, t.guide_to_y_axis.y2), (65.0, cy));
        // Pills sit on the axis intercepts and show raw values.
        assert_eq!(t.x_pill.label.text, "5000");
        assert_eq!(t.y_pill.label.text, "75");
        assert_eq!(t.x_pill.label.y, 350.0);
        assert_eq!(t.y_pill.label.x, 65.0);
        assert_eq!(t.ring.radius, 9.5);
    }

    #[test]
    fn regression_endpoints_follow_the_normalized_form() {
        // m=1, b=10, domain (0, 10000): y1 = 10*100/10000, y2 = 10010*100/10000.
        let ((x1, y1), (x2, y2)) = regression_endpoints(1.0, 10.0, (0.0, 10000.0));
        assert_eq!((x1, x2), (0.0, 10000.0));
        assert!((y1 - 0.1).abs() < 1e-12);
        assert!((y2 - 100.1).abs() < 1e-12);
    }

    #[test]
    fn legend_rows_stack_at_fixed_pitch() {
        let mut s = spec();
        s.data.push(DataPoint {
            name: "C".into(),
            color: "teal".into(),
            x: 1.0,
            y: 1.0,
        });
        let chart = layout(&s);
        let rows = &chart.legend.entries;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].swatch_cy - rows[0].swatch_cy, 15.0);
        assert_eq!(rows[2].swatch_cy - rows[1].swatch_cy, 15.0);
        assert_eq!(chart.legend.title.text, "Teams");
    }

    #[test]
    fn empty_data_still_draws_the_chrome() {
        let mut s = spec();
        s.data.clear();
        let chart = layout(&s);
        assert!(chart.points.is_empty());
        assert!(chart.legend.entries.is_empty());
        assert_eq!(chart.quadrants.len(), 4);
        assert!(!chart.x_axis.ticks.is_empty());
    }

    #[test]
    fn invalid_spec_is_rejected_before_layout() {
        let mut s = spec();
        s.quadrants.truncate(2);
        let err = layout_chart(
            &s,
            &ChartConfig::default(),
            &ChartTheme::default(),
            &LayoutOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, crate::Error::QuadrantCount { found: 2 }));
    }
}
