use crate::Result;
use crate::layout::{ChartLayout, LineData, PillLayout, RectData, TextData};
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Id used for the root `<svg>` element and to scope every emitted CSS
    /// selector. Callers embedding several charts in one document should set
    /// a distinct (sanitized) id per instance.
    pub diagram_id: Option<String>,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self { diagram_id: None }
    }
}

/// Serializes a chart layout to a standalone SVG document string.
///
/// Hover behavior ships inside the markup: every `g.data-point` contains a
/// hidden `g.tooltip` as its first child (so it paints behind the marker) and
/// the `<style>` block reveals it via `:hover` rules scoped to this chart's
/// id. Unhover returns every point to its rest state; points are independent.
pub fn render_chart_svg(layout: &ChartLayout, options: &SvgRenderOptions) -> Result<String> {
    let diagram_id = options.diagram_id.as_deref().unwrap_or("quadplot");
    let diagram_id_esc = escape_xml(diagram_id);

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{diagram_id_esc}" width="100%" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" style="max-width: {w}px; background-color: white;">"#,
        w = fmt(layout.width.max(1.0)),
        h = fmt(layout.height.max(1.0)),
    );

    let _ = write!(&mut out, "<style>{}</style>", chart_css(diagram_id, layout));

    out.push_str(r#"<g class="quadrants">"#);
    for q in &layout.quadrants {
        out.push_str(r#"<g class="quadrant">"#);
        let _ = write!(
            &mut out,
            r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{fill}" opacity="{op}"/>"#,
            x = fmt(q.rect.x),
            y = fmt(q.rect.y),
            w = fmt(q.rect.width),
            h = fmt(q.rect.height),
            fill = escape_xml(&q.fill),
            op = fmt(q.opacity),
        );
        write_text(&mut out, &q.label, None);
        out.push_str("</g>");
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="legend">"#);
    write_text(&mut out, &layout.legend.title, Some("title"));
    for entry in &layout.legend.entries {
        out.push_str(r#"<g class="legend-item">"#);
        let _ = write!(
            &mut out,
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}"/>"#,
            cx = fmt(entry.swatch_cx),
            cy = fmt(entry.swatch_cy),
            r = fmt(entry.swatch_radius),
            fill = escape_xml(&entry.color),
        );
        write_text(&mut out, &entry.label, None);
        out.push_str("</g>");
    }
    out.push_str("</g>");

    for (class, axis) in [("x-axis", &layout.x_axis), ("y-axis", &layout.y_axis)] {
        let _ = write!(&mut out, r#"<g class="axis {class}">"#);
        for tick in &axis.ticks {
            out.push_str(r#"<g class="tick">"#);
            write_line(&mut out, &tick.gridline, Some("grid"));
            write_line(&mut out, &tick.mark, None);
            write_text(&mut out, &tick.label, None);
            out.push_str("</g>");
        }
        write_text(&mut out, &axis.title, Some("axis-title"));
        out.push_str("</g>");
    }

    out.push_str(r#"<g class="labels">"#);
    for label in &layout.edge_labels {
        write_text(&mut out, label, None);
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="frame">"#);
    let _ = write!(
        &mut out,
        r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="none" stroke="{stroke}" stroke-width="{sw}"/>"#,
        x = fmt(layout.frame.rect.x),
        y = fmt(layout.frame.rect.y),
        w = fmt(layout.frame.rect.width),
        h = fmt(layout.frame.rect.height),
        stroke = escape_xml(&layout.frame.stroke),
        sw = fmt(layout.frame.stroke_width),
    );
    for line in &layout.midlines {
        write_line(&mut out, line, None);
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="regression">"#);
    write_line(&mut out, &layout.regression, None);
    out.push_str("</g>");

    out.push_str(r#"<g class="data">"#);
    for p in &layout.points {
        out.push_str(r#"<g class="data-point">"#);

        // Tooltip first so it paints behind the marker circle.
        out.push_str(r#"<g class="tooltip">"#);
        write_rect(&mut out, &p.tooltip.label_bg, &p.tooltip.label_bg_fill, Some("label-bg"));
        write_line(&mut out, &p.tooltip.guide_to_x_axis, Some("guide"));
        write_line(&mut out, &p.tooltip.guide_to_y_axis, Some("guide"));
        write_pill(&mut out, &p.tooltip.x_pill, &p.tooltip.pill_fill);
        write_pill(&mut out, &p.tooltip.y_pill, &p.tooltip.pill_fill);
        let _ = write!(
            &mut out,
            r#"<circle class="ring" cx="{cx}" cy="{cy}" r="0" fill="{fill}" stroke="{stroke}" stroke-width="{sw}"/>"#,
            cx = fmt(p.tooltip.ring.cx),
            cy = fmt(p.tooltip.ring.cy),
            fill = escape_xml(&p.tooltip.ring.fill),
            stroke = escape_xml(&p.tooltip.ring.stroke),
            sw = fmt(p.tooltip.ring.stroke_width),
        );
        out.push_str("</g>");

        let _ = write!(
            &mut out,
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}"/>"#,
            cx = fmt(p.cx),
            cy = fmt(p.cy),
            r = fmt(p.radius),
            fill = escape_xml(&p.fill),
        );
        write_text(&mut out, &p.label, Some("name"));
        out.push_str("</g>");
    }
    out.push_str("</g>");

    out.push_str("</svg>\n");
    Ok(out)
}

fn chart_css(diagram_id: &str, layout: &ChartLayout) -> String {
    let id = escape_xml(diagram_id);
    let font = r#""trebuchet ms",verdana,arial,sans-serif"#;
    let shift = fmt(layout.hover_label_shift);
    let ring = fmt(layout.hover_ring_radius);

    let mut out = String::new();
    let _ = write!(
        &mut out,
        "#{id}{{font-family:{font};font-size:16px;fill:{};}}",
        escape_xml(&layout.text_color)
    );
    let _ = write!(
        &mut out,
        "#{id} .quadrant text{{text-transform:uppercase;font-weight:300;opacity:0.9;}}"
    );
    let _ = write!(&mut out, "#{id} .legend text.title{{font-weight:bold;}}");
    let _ = write!(&mut out, "#{id} .legend text{{letter-spacing:0.05rem;}}");
    let _ = write!(
        &mut out,
        "#{id} .labels text,#{id} .axis text.axis-title{{font-weight:600;letter-spacing:0.05rem;}}"
    );
    let _ = write!(
        &mut out,
        "#{id} .data-point text.name{{letter-spacing:0.05rem;pointer-events:none;transition:transform 0.2s ease 0.1s;}}"
    );
    let _ = write!(
        &mut out,
        "#{id} .data-point:hover text.name{{transform:translate({shift}px, 0);transition-delay:0s;}}"
    );
    let _ = write!(
        &mut out,
        "#{id} .data-point .tooltip{{opacity:0;pointer-events:none;transition:opacity 0.2s ease;}}"
    );
    let _ = write!(&mut out, "#{id} .data-point:hover .tooltip{{opacity:1;}}");
    let _ = write!(
        &mut out,
        "#{id} .data-point .tooltip rect.label-bg{{transition:transform 0.2s ease 0.1s;}}"
    );
    let _ = write!(
        &mut out,
        "#{id} .data-point:hover .tooltip rect.label-bg{{transform:translate({shift}px, 0);transition-delay:0s;}}"
    );
    let _ = write!(
        &mut out,
        "#{id} .data-point .tooltip circle.ring{{r:0;transition:r 0.2s ease;}}"
    );
    let _ = write!(
        &mut out,
        "#{id} .data-point:hover .tooltip circle.ring{{r:{ring}px;}}"
    );
    // Guide dashes crawl toward the axes while visible; 11 = one dash + gap.
    let _ = write!(
        &mut out,
        "#{id} .data-point .tooltip line.guide{{animation:quadplot-dash 1.5s linear infinite;}}"
    );
    out.push_str("@keyframes quadplot-dash{to{stroke-dashoffset:-22;}}");
    out
}

fn write_text(out: &mut String, t: &TextData, class: Option<&str>) {
    let class_attr = class
        .map(|c| format!(r#" class="{c}""#))
        .unwrap_or_default();
    if t.rotation == 0.0 {
        let _ = write!(
            out,
            r#"<text{class_attr} x="{x}" y="{y}" fill="{fill}" font-size="{fs}" text-anchor="{anchor}" dominant-baseline="{baseline}">{text}</text>"#,
            x = fmt(t.x),
            y = fmt(t.y),
            fill = escape_xml(&t.fill),
            fs = fmt(t.font_size),
            anchor = escape_xml(&t.anchor),
            baseline = escape_xml(&t.baseline),
            text = escape_xml(&t.text),
        );
    } else {
        let _ = write!(
            out,
            r#"<text{class_attr} x="0" y="0" fill="{fill}" font-size="{fs}" text-anchor="{anchor}" dominant-baseline="{baseline}" transform="translate({x}, {y}) rotate({rot})">{text}</text>"#,
            fill = escape_xml(&t.fill),
            fs = fmt(t.font_size),
            anchor = escape_xml(&t.anchor),
            baseline = escape_xml(&t.baseline),
            x = fmt(t.x),
            y = fmt(t.y),
            rot = fmt(t.rotation),
            text = escape_xml(&t.text),
        );
    }
}

fn write_line(out: &mut String, l: &LineData, class: Option<&str>) {
    let class_attr = class
        .map(|c| format!(r#" class="{c}""#))
        .unwrap_or_default();
    let _ = write!(
        out,
        r#"<line{class_attr} x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{stroke}" stroke-width="{sw}""#,
        x1 = fmt(l.x1),
        y1 = fmt(l.y1),
        x2 = fmt(l.x2),
        y2 = fmt(l.y2),
        stroke = escape_xml(&l.stroke),
        sw = fmt(l.stroke_width),
    );
    if let Some(dash) = &l.dash {
        let _ = write!(out, r#" stroke-dasharray="{}""#, escape_xml(dash));
    }
    if let Some(opacity) = l.opacity {
        let _ = write!(out, r#" opacity="{}""#, fmt(opacity));
    }
    out.push_str("/>");
}

fn write_rect(out: &mut String, r: &RectData, fill: &str, class: Option<&str>) {
    let class_attr = class
        .map(|c| format!(r#" class="{c}""#))
        .unwrap_or_default();
    let _ = write!(
        out,
        r#"<rect{class_attr} x="{x}" y="{y}" width="{w}" height="{h}" fill="{fill}""#,
        x = fmt(r.x),
        y = fmt(r.y),
        w = fmt(r.width),
        h = fmt(r.height),
        fill = escape_xml(fill),
    );
    if r.rx != 0.0 {
        let _ = write!(out, r#" rx="{}""#, fmt(r.rx));
    }
    out.push_str("/>");
}

fn write_pill(out: &mut String, pill: &PillLayout, fill: &str) {
    out.push_str(r#"<g class="pill">"#);
    write_rect(out, &pill.rect, fill, None);
    write_text(out, &pill.label, None);
    out.push_str("</g>");
}

fn fmt(v: f64) -> String {
    // Round-trippable decimal form, avoiding `-0` and tiny float noise from
    // our own arithmetic.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
