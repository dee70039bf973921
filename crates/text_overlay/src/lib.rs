//! # Text Overlay
//!
//! Screen-space text labels for game overlays and scripting hosts.
//!
//! ## Features
//!
//! - **Labels**: [`TextLabel`] holds string, position, color, scale and
//!   alignment, and re-derives its wrapped lines when the width changes
//! - **Formatting Codes**: `&`-markup injection and `§`-code stripping
//! - **Pluggable Fonts**: measure and wrap through [`FontMetrics`]; bitmap
//!   and TrueType implementations included
//! - **Immediate Mode Drawing**: draw calls go through [`TextRenderBackend`],
//!   so the host engine keeps ownership of its graphics state
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use text_overlay::prelude::*;
//!
//! fn main() -> Result<(), RenderError> {
//!     let metrics = Arc::new(BitmapFontMetrics::new());
//!     let mut label = TextLabel::with_position(metrics, "&aHello &fworld", 10.0, 20.0);
//!     label.set_align("center").set_scale(2.0);
//!
//!     let mut backend = CommandRecorder::new();
//!     label.draw(&mut backend, None, None)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod render;
pub mod text;

#[cfg(test)]
mod tests;

pub use render::{RenderError, TextRenderBackend};
pub use text::{Align, AlignSpec, FontMetrics, TextFormatter, TextLabel};

/// Common imports for overlay users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, LabelStyle},
        render::{
            color::{self, fix_alpha},
            CommandRecorder, DrawCommand, RenderError, TextRenderBackend,
        },
        text::{
            Align, AlignSpec, BitmapFontMetrics, ChatFormatter, FontMetrics,
            TextFormatter, TextLabel, TrueTypeMetrics, FONT_HEIGHT,
        },
    };
}
