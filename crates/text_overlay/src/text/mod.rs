//! Text layout
//!
//! Everything a label needs to turn a string into drawn lines.
//!
//! # Architecture
//!
//! - [`TextLabel`]: stateful label with fluent setters and a draw routine
//! - [`FontMetrics`]: width measurement and wrapping service
//! - [`TextFormatter`]: formatting code injection and stripping
//! - [`Align`] / [`AlignSpec`]: horizontal alignment and its lenient input form
//! - [`wrap`]: greedy word wrapper shared by the bundled metrics

mod align;
mod formatting;
mod label;
mod metrics;
pub mod wrap;

pub use align::{Align, AlignSpec, ParseAlignError};
pub use formatting::{
    active_formatting, glyphs, ChatFormatter, FormatCode, Glyphs, TextFormatter, TextStyle,
    SECTION_SIGN,
};
pub use label::TextLabel;
pub use metrics::{BitmapFontMetrics, FontError, FontMetrics, TrueTypeMetrics, FONT_HEIGHT};
