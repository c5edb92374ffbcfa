//! Named colors and typography shared by all charts.

use crate::foundation::core::Rgba8;

/// Quarterly revenue bars.
pub const SKY_BLUE: Rgba8 = Rgba8::rgb(135, 206, 235);
/// Cumulative revenue line.
pub const NAVY: Rgba8 = Rgba8::rgb(0, 0, 128);
/// Investment bars.
pub const CORAL: Rgba8 = Rgba8::rgb(255, 127, 80);
/// Manufacturing bars.
pub const GOLD: Rgba8 = Rgba8::rgb(255, 215, 0);
/// Gross margin line and axis.
pub const GREEN: Rgba8 = Rgba8::rgb(0, 128, 0);
/// Cash position line and axis.
pub const DARK_RED: Rgba8 = Rgba8::rgb(139, 0, 0);
/// CAC line and payback note.
pub const RED: Rgba8 = Rgba8::rgb(255, 0, 0);
/// LTV line.
pub const BLUE: Rgba8 = Rgba8::rgb(0, 0, 255);
/// Payback cash line.
pub const ROYAL_BLUE: Rgba8 = Rgba8::rgb(65, 105, 225);
/// Zero reference line.
pub const GRAY: Rgba8 = Rgba8::rgb(128, 128, 128);
/// Animated revenue bars.
pub const TEAL: Rgba8 = Rgba8::rgb(0, 128, 128);
/// Sensitivity line.
pub const PURPLE: Rgba8 = Rgba8::rgb(128, 0, 128);

pub(crate) const BACKGROUND: Rgba8 = Rgba8::rgb(255, 255, 255);
pub(crate) const INK: Rgba8 = Rgba8::rgb(34, 34, 34);
pub(crate) const GRID: Rgba8 = Rgba8::rgb(230, 230, 230);

pub(crate) const FONT_FAMILY: &str = "DejaVu Sans, Liberation Sans, Arial, sans-serif";
pub(crate) const TITLE_PX: f64 = 16.0;
pub(crate) const LABEL_PX: f64 = 13.0;
pub(crate) const TICK_PX: f64 = 11.0;
