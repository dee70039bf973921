//! Rendering interface
//!
//! The label never owns graphics state. It talks to the host through
//! [`TextRenderBackend`], which covers blend toggles, the scale transform,
//! glyph drawing and the end-of-batch hook.
//!
//! # Architecture
//!
//! - [`color`]: packed ARGB helpers and alpha fix-up
//! - [`TextRenderBackend`]: host-facing trait
//! - [`BlendGuard`]: keeps blend state balanced on every exit path
//! - [`CommandRecorder`]: backend that records [`DrawCommand`]s

pub mod color;
mod backend;
mod commands;

pub use backend::{BlendGuard, RenderError, RenderResult, TextRenderBackend};
pub use commands::{CommandRecorder, DrawCommand};
