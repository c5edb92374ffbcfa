//! Declarative chart description.
//!
//! A [`Figure`] is plain data: a categorical x axis, one or two value axes, and layers that
//! reference those axes. Turning a figure into pixels is the job of [`crate::chart::svg`] and
//! [`crate::chart::raster`]; nothing here touches a drawing surface.

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{ChartError, ChartResult};

/// Which value axis a layer is plotted against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisSide {
    /// Primary axis on the left edge.
    #[default]
    Left,
    /// Secondary axis on the right edge (twin axis).
    Right,
}

/// Stroke pattern for lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dash {
    /// Continuous stroke.
    #[default]
    Solid,
    /// Long dashes.
    Dashed,
    /// Short dots.
    Dotted,
}

/// Point marker drawn at each data point of a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Marker {
    /// No marker.
    #[default]
    None,
    /// Filled circle.
    Circle,
    /// Upward filled triangle.
    Triangle,
    /// Five-pointed filled star.
    Star,
}

/// Bars, one per category, centered in each category slot.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLayer {
    /// Legend entry, if any.
    pub label: Option<String>,
    /// One value per category.
    pub values: Vec<f64>,
    /// Fill color (alpha honored).
    pub color: Rgba8,
    /// Axis the values are measured on.
    pub axis: AxisSide,
}

/// Polyline through one value per category.
#[derive(Clone, Debug, PartialEq)]
pub struct LineLayer {
    /// Legend entry, if any.
    pub label: Option<String>,
    /// One value per category.
    pub values: Vec<f64>,
    /// Stroke and marker color.
    pub color: Rgba8,
    /// Stroke pattern.
    pub dash: Dash,
    /// Point marker.
    pub marker: Marker,
    /// Axis the values are measured on.
    pub axis: AxisSide,
}

/// A plotted series.
#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    /// Bar series.
    Bars(BarLayer),
    /// Line series.
    Line(LineLayer),
}

impl Layer {
    fn values(&self) -> &[f64] {
        match self {
            Self::Bars(b) => &b.values,
            Self::Line(l) => &l.values,
        }
    }

    fn axis(&self) -> AxisSide {
        match self {
            Self::Bars(b) => b.axis,
            Self::Line(l) => l.axis,
        }
    }

    pub(crate) fn label(&self) -> Option<&str> {
        match self {
            Self::Bars(b) => b.label.as_deref(),
            Self::Line(l) => l.label.as_deref(),
        }
    }
}

/// Horizontal reference line spanning the plot area.
#[derive(Clone, Debug, PartialEq)]
pub struct HLine {
    /// Value on `axis`.
    pub y: f64,
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke pattern.
    pub dash: Dash,
    /// Axis `y` is measured on.
    pub axis: AxisSide,
}

/// Text placed relative to a data point.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    /// Category index of the anchor point.
    pub category: usize,
    /// Value of the anchor point on `axis`.
    pub y: f64,
    /// Text to draw, centered horizontally on the anchor.
    pub text: String,
    /// Text color.
    pub color: Rgba8,
    /// Vertical offset above the anchor, in pixels.
    pub offset_px: f64,
    /// Axis `y` is measured on.
    pub axis: AxisSide,
}

/// Value axis settings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueAxis {
    /// Axis title.
    pub label: Option<String>,
    /// Title and tick color; neutral when unset.
    pub color: Option<Rgba8>,
    /// Fixed data range. When unset, the range is fitted to the layers on this axis.
    pub range: Option<(f64, f64)>,
}

/// A complete chart ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Title drawn above the plot.
    pub title: String,
    /// Category labels along the x axis, in plotting order.
    pub categories: Vec<String>,
    /// X axis title.
    pub x_label: Option<String>,
    /// Left value axis.
    pub left: ValueAxis,
    /// Right value axis, present for twin-axis charts.
    pub right: Option<ValueAxis>,
    /// Series in draw order.
    pub layers: Vec<Layer>,
    /// Reference lines, drawn beneath the series.
    pub hlines: Vec<HLine>,
    /// Text annotations, drawn above the series.
    pub annotations: Vec<Annotation>,
    /// Draw a legend for labelled layers.
    pub legend: bool,
}

impl Figure {
    /// Empty figure over `categories`.
    pub fn new(canvas: Canvas, categories: Vec<String>) -> Self {
        Self {
            canvas,
            title: String::new(),
            categories,
            x_label: None,
            left: ValueAxis::default(),
            right: None,
            layers: Vec::new(),
            hlines: Vec::new(),
            annotations: Vec::new(),
            legend: false,
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the x axis title.
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Set the left axis title.
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.left.label = Some(label.into());
        self
    }

    /// Replace the left axis settings.
    pub fn left_axis(mut self, axis: ValueAxis) -> Self {
        self.left = axis;
        self
    }

    /// Add a right (twin) axis.
    pub fn right_axis(mut self, axis: ValueAxis) -> Self {
        self.right = Some(axis);
        self
    }

    /// Append a bar series.
    pub fn bars(mut self, layer: BarLayer) -> Self {
        self.layers.push(Layer::Bars(layer));
        self
    }

    /// Append a line series.
    pub fn line(mut self, layer: LineLayer) -> Self {
        self.layers.push(Layer::Line(layer));
        self
    }

    /// Append a horizontal reference line.
    pub fn hline(mut self, line: HLine) -> Self {
        self.hlines.push(line);
        self
    }

    /// Append an annotation.
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Show the legend.
    pub fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Check that every series and anchor lines up with the categories.
    pub fn validate(&self) -> ChartResult<()> {
        let n = self.categories.len();
        if n == 0 {
            return Err(ChartError::render("figure has no categories"));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.values().len() != n {
                return Err(ChartError::render(format!(
                    "layer {i} has {} values for {n} categories",
                    layer.values().len()
                )));
            }
            if layer.axis() == AxisSide::Right && self.right.is_none() {
                return Err(ChartError::render(format!(
                    "layer {i} targets the right axis, but the figure has none"
                )));
            }
        }
        for a in &self.annotations {
            if a.category >= n {
                return Err(ChartError::render(format!(
                    "annotation '{}' anchored at category {} of {n}",
                    a.text, a.category
                )));
            }
        }
        Ok(())
    }

    /// Data extent `(min, max)` over everything drawn against `side`.
    ///
    /// Axes carrying bars always include zero, the bar baseline.
    pub fn data_extent(&self, side: AxisSide) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let mut has_bars = false;
        let mut extend = |v: f64| {
            if v.is_finite() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        };
        for layer in self.layers.iter().filter(|l| l.axis() == side) {
            has_bars |= matches!(layer, Layer::Bars(_));
            layer.values().iter().copied().for_each(&mut extend);
        }
        self.hlines
            .iter()
            .filter(|h| h.axis == side)
            .for_each(|h| extend(h.y));
        if has_bars {
            extend(0.0);
        }
        (lo <= hi).then_some((lo, hi))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/figure.rs"]
mod tests;
