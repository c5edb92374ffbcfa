//! Figure to SVG document.

use std::fmt::{self, Write as _};

use crate::chart::figure::{AxisSide, Dash, Figure, Layer, Marker, ValueAxis};
use crate::chart::style::{
    BACKGROUND, FONT_FAMILY, GRID, INK, LABEL_PX, TICK_PX, TITLE_PX,
};
use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::{ChartError, ChartResult};
use crate::foundation::math::nice_range;

const TARGET_TICKS: usize = 6;
const BAR_FILL_RATIO: f64 = 0.8;
const MIN_UNROTATED_SLOT_PX: f64 = 64.0;

/// Vertical mapping from data values to pixel rows inside the plot area.
#[derive(Clone, Copy, Debug)]
pub(crate) struct YScale {
    lo: f64,
    hi: f64,
    step: f64,
    area: Rect,
}

impl YScale {
    fn fit(axis: &ValueAxis, extent: Option<(f64, f64)>, area: Rect) -> Self {
        let (lo, hi) = axis.range.or(extent).unwrap_or((0.0, 1.0));
        let (lo, hi, step) = nice_range(lo, hi, TARGET_TICKS);
        Self { lo, hi, step, area }
    }

    pub(crate) fn map(&self, v: f64) -> f64 {
        self.area.y1 - (v - self.lo) / (self.hi - self.lo) * self.area.height()
    }

    fn ticks(&self) -> Vec<f64> {
        let count = ((self.hi - self.lo) / self.step).round() as usize;
        (0..=count).map(|i| self.lo + self.step * i as f64).collect()
    }
}

/// Horizontal mapping from category index to slot centers.
#[derive(Clone, Copy, Debug)]
pub(crate) struct XScale {
    n: usize,
    area: Rect,
}

impl XScale {
    pub(crate) fn slot(&self) -> f64 {
        self.area.width() / self.n as f64
    }

    pub(crate) fn center(&self, i: usize) -> f64 {
        self.area.x0 + self.slot() * (i as f64 + 0.5)
    }
}

/// Plot-area geometry for a figure.
pub(crate) fn plot_area(fig: &Figure) -> Rect {
    let left = 84.0;
    let right = if fig.right.is_some() { 84.0 } else { 30.0 };
    let top = 56.0;
    let bottom = if fig.x_label.is_some() { 78.0 } else { 56.0 };
    let bounds = fig.canvas.bounds();
    Rect::new(
        bounds.x0 + left,
        bounds.y0 + top,
        (bounds.x1 - right).max(bounds.x0 + left + 1.0),
        (bounds.y1 - bottom).max(bounds.y0 + top + 1.0),
    )
}

/// Render `fig` into a standalone SVG document sized to its canvas.
pub fn figure_to_svg(fig: &Figure) -> ChartResult<String> {
    fig.validate()?;
    let mut out = String::with_capacity(16 * 1024);
    write_figure(&mut out, fig)
        .map_err(|_| ChartError::render(format!("failed to format svg for '{}'", fig.title)))?;
    Ok(out)
}

fn write_figure(out: &mut String, fig: &Figure) -> fmt::Result {
    let (w, h) = (fig.canvas.width, fig.canvas.height);
    let area = plot_area(fig);
    let x = XScale {
        n: fig.categories.len(),
        area,
    };
    let left = YScale::fit(&fig.left, fig.data_extent(AxisSide::Left), area);
    let right = fig
        .right
        .as_ref()
        .map(|axis| YScale::fit(axis, fig.data_extent(AxisSide::Right), area));
    let scale_for = |side: AxisSide| match side {
        AxisSide::Left => left,
        AxisSide::Right => right.unwrap_or(left),
    };

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{FONT_FAMILY}">"#
    )?;
    writeln!(
        out,
        r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
        BACKGROUND.hex()
    )?;

    write_grid(out, &left, area)?;
    write_y_axis(out, &left, &fig.left, area, AxisSide::Left)?;
    if let (Some(scale), Some(axis)) = (right.as_ref(), fig.right.as_ref()) {
        write_y_axis(out, scale, axis, area, AxisSide::Right)?;
    }
    write_x_axis(out, fig, &x, area)?;

    for hl in &fig.hlines {
        let y = scale_for(hl.axis).map(hl.y);
        writeln!(
            out,
            r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{}" stroke-width="1"{}/>"#,
            area.x0,
            area.x1,
            hl.color.hex(),
            dash_attr(hl.dash)
        )?;
    }

    for layer in &fig.layers {
        match layer {
            Layer::Bars(b) => {
                let scale = scale_for(b.axis);
                let width = x.slot() * BAR_FILL_RATIO;
                let base = scale.map(0.0);
                for (i, &v) in b.values.iter().enumerate() {
                    if v == 0.0 || !v.is_finite() {
                        continue;
                    }
                    let top = scale.map(v);
                    let (y0, y1) = if top < base { (top, base) } else { (base, top) };
                    writeln!(
                        out,
                        r#"<rect x="{:.2}" y="{y0:.2}" width="{width:.2}" height="{:.2}"{}/>"#,
                        x.center(i) - width / 2.0,
                        y1 - y0,
                        fill_attr(b.color)
                    )?;
                }
            }
            Layer::Line(l) => {
                let scale = scale_for(l.axis);
                let points: Vec<Point> = l
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| Point::new(x.center(i), scale.map(v)))
                    .collect();
                let mut d = String::new();
                for (i, p) in points.iter().enumerate() {
                    let cmd = if i == 0 { 'M' } else { 'L' };
                    write!(d, "{cmd}{:.2},{:.2} ", p.x, p.y)?;
                }
                writeln!(
                    out,
                    r#"<path d="{}" fill="none" stroke="{}" stroke-width="2" stroke-linejoin="round"{}/>"#,
                    d.trim_end(),
                    l.color.hex(),
                    dash_attr(l.dash)
                )?;
                for p in &points {
                    write_marker(out, l.marker, *p, l.color)?;
                }
            }
        }
    }

    for a in &fig.annotations {
        let px = x.center(a.category);
        let py = scale_for(a.axis).map(a.y) - a.offset_px;
        writeln!(
            out,
            r#"<text x="{px:.2}" y="{py:.2}" font-size="{LABEL_PX}" text-anchor="middle" fill="{}">{}</text>"#,
            a.color.hex(),
            xml_escape(&a.text)
        )?;
    }

    writeln!(
        out,
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{}" stroke-width="1"/>"#,
        area.x0,
        area.y0,
        area.width(),
        area.height(),
        INK.hex()
    )?;

    if fig.legend {
        write_legend(out, fig, area)?;
    }

    if !fig.title.is_empty() {
        writeln!(
            out,
            r#"<text x="{:.2}" y="{:.2}" font-size="{TITLE_PX}" font-weight="bold" text-anchor="middle" fill="{}">{}</text>"#,
            f64::from(w) / 2.0,
            area.y0 - 20.0,
            INK.hex(),
            xml_escape(&fig.title)
        )?;
    }

    writeln!(out, "</svg>")
}

fn write_grid(out: &mut String, scale: &YScale, area: Rect) -> fmt::Result {
    for t in scale.ticks() {
        let y = scale.map(t);
        writeln!(
            out,
            r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{}" stroke-width="1"/>"#,
            area.x0,
            area.x1,
            GRID.hex()
        )?;
    }
    Ok(())
}

fn write_y_axis(
    out: &mut String,
    scale: &YScale,
    axis: &ValueAxis,
    area: Rect,
    side: AxisSide,
) -> fmt::Result {
    let color = axis.color.unwrap_or(INK).hex();
    let decimals = tick_decimals(scale.step);
    let (edge, tick_dx, anchor) = match side {
        AxisSide::Left => (area.x0, -6.0, "end"),
        AxisSide::Right => (area.x1, 6.0, "start"),
    };
    for t in scale.ticks() {
        let y = scale.map(t);
        writeln!(
            out,
            r#"<line x1="{edge:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{color}" stroke-width="1"/>"#,
            edge + tick_dx * 0.6
        )?;
        writeln!(
            out,
            r#"<text x="{:.2}" y="{:.2}" font-size="{TICK_PX}" text-anchor="{anchor}" fill="{color}">{t:.decimals$}</text>"#,
            edge + tick_dx * 1.4,
            y + TICK_PX * 0.35
        )?;
    }
    if let Some(label) = &axis.label {
        let (lx, rot) = match side {
            AxisSide::Left => (area.x0 - 62.0, -90),
            AxisSide::Right => (area.x1 + 62.0, 90),
        };
        let ly = area.y0 + area.height() / 2.0;
        writeln!(
            out,
            r#"<text x="{lx:.2}" y="{ly:.2}" font-size="{LABEL_PX}" text-anchor="middle" fill="{color}" transform="rotate({rot} {lx:.2} {ly:.2})">{}</text>"#,
            xml_escape(label)
        )?;
    }
    Ok(())
}

fn write_x_axis(out: &mut String, fig: &Figure, x: &XScale, area: Rect) -> fmt::Result {
    let rotate = x.slot() < MIN_UNROTATED_SLOT_PX;
    let ink = INK.hex();
    for (i, cat) in fig.categories.iter().enumerate() {
        let cx = x.center(i);
        let ty = area.y1 + 18.0;
        writeln!(
            out,
            r#"<line x1="{cx:.2}" y1="{:.2}" x2="{cx:.2}" y2="{:.2}" stroke="{ink}" stroke-width="1"/>"#,
            area.y1,
            area.y1 + 4.0
        )?;
        if rotate {
            writeln!(
                out,
                r#"<text x="{cx:.2}" y="{ty:.2}" font-size="{TICK_PX}" text-anchor="end" fill="{ink}" transform="rotate(-30 {cx:.2} {ty:.2})">{}</text>"#,
                xml_escape(cat)
            )?;
        } else {
            writeln!(
                out,
                r#"<text x="{cx:.2}" y="{ty:.2}" font-size="{TICK_PX}" text-anchor="middle" fill="{ink}">{}</text>"#,
                xml_escape(cat)
            )?;
        }
    }
    if let Some(label) = &fig.x_label {
        writeln!(
            out,
            r#"<text x="{:.2}" y="{:.2}" font-size="{LABEL_PX}" text-anchor="middle" fill="{ink}">{}</text>"#,
            area.x0 + area.width() / 2.0,
            area.y1 + 56.0,
            xml_escape(label)
        )?;
    }
    Ok(())
}

fn write_legend(out: &mut String, fig: &Figure, area: Rect) -> fmt::Result {
    let entries: Vec<(&Layer, &str)> = fig
        .layers
        .iter()
        .filter_map(|l| l.label().map(|s| (l, s)))
        .collect();
    if entries.is_empty() {
        return Ok(());
    }

    let row_h = 20.0;
    let longest = entries
        .iter()
        .map(|(_, s)| s.chars().count())
        .max()
        .unwrap_or(0) as f64;
    let bx = area.x0 + 12.0;
    let by = area.y0 + 12.0;
    let bw = 52.0 + longest * LABEL_PX * 0.58;
    let bh = 10.0 + row_h * entries.len() as f64;
    writeln!(
        out,
        r#"<rect x="{bx:.2}" y="{by:.2}" width="{bw:.2}" height="{bh:.2}" fill="{}" fill-opacity="0.85" stroke="{}" rx="3"/>"#,
        BACKGROUND.hex(),
        GRID.hex()
    )?;

    for (i, (layer, label)) in entries.iter().enumerate() {
        let cy = by + 15.0 + row_h * i as f64;
        match layer {
            Layer::Bars(b) => writeln!(
                out,
                r#"<rect x="{:.2}" y="{:.2}" width="24" height="10"{}/>"#,
                bx + 10.0,
                cy - 5.0,
                fill_attr(b.color)
            )?,
            Layer::Line(l) => {
                writeln!(
                    out,
                    r#"<line x1="{:.2}" y1="{cy:.2}" x2="{:.2}" y2="{cy:.2}" stroke="{}" stroke-width="2"{}/>"#,
                    bx + 10.0,
                    bx + 34.0,
                    l.color.hex(),
                    dash_attr(l.dash)
                )?;
                write_marker(out, l.marker, Point::new(bx + 22.0, cy), l.color)?;
            }
        }
        writeln!(
            out,
            r#"<text x="{:.2}" y="{:.2}" font-size="{LABEL_PX}" fill="{}">{}</text>"#,
            bx + 42.0,
            cy + LABEL_PX * 0.35,
            INK.hex(),
            xml_escape(label)
        )?;
    }
    Ok(())
}

fn write_marker(out: &mut String, marker: Marker, p: Point, color: Rgba8) -> fmt::Result {
    let fill = color.hex();
    match marker {
        Marker::None => Ok(()),
        Marker::Circle => writeln!(
            out,
            r#"<circle cx="{:.2}" cy="{:.2}" r="4" fill="{fill}"/>"#,
            p.x, p.y
        ),
        Marker::Triangle => writeln!(
            out,
            r#"<path d="M{:.2},{:.2} L{:.2},{:.2} L{:.2},{:.2} Z" fill="{fill}"/>"#,
            p.x,
            p.y - 5.5,
            p.x - 5.0,
            p.y + 4.0,
            p.x + 5.0,
            p.y + 4.0
        ),
        Marker::Star => {
            let mut d = String::new();
            for k in 0..10 {
                let r = if k % 2 == 0 { 6.5 } else { 2.8 };
                let theta = std::f64::consts::PI * (k as f64) / 5.0 - std::f64::consts::FRAC_PI_2;
                let cmd = if k == 0 { 'M' } else { 'L' };
                write!(
                    d,
                    "{cmd}{:.2},{:.2} ",
                    p.x + r * theta.cos(),
                    p.y + r * theta.sin()
                )?;
            }
            writeln!(out, r#"<path d="{}Z" fill="{fill}"/>"#, d)
        }
    }
}

fn dash_attr(dash: Dash) -> &'static str {
    match dash {
        Dash::Solid => "",
        Dash::Dashed => r#" stroke-dasharray="7 4""#,
        Dash::Dotted => r#" stroke-dasharray="1.5 3""#,
    }
}

fn fill_attr(color: Rgba8) -> String {
    if color.a == 255 {
        format!(r#" fill="{}""#, color.hex())
    } else {
        format!(
            r#" fill="{}" fill-opacity="{:.3}""#,
            color.hex(),
            color.opacity()
        )
    }
}

/// Number of decimals needed to print multiples of `step` exactly.
pub(crate) fn tick_decimals(step: f64) -> usize {
    let mut d = 0;
    while d < 4 {
        let scaled = step * 10f64.powi(d as i32);
        if (scaled - scaled.round()).abs() < 1e-6 {
            break;
        }
        d += 1;
    }
    d
}

/// Escape text for use in SVG character data and attribute values.
pub(crate) fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/chart/svg.rs"]
mod tests;
