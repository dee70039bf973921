//! Text Render Backend Trait
//!
//! Defines the interface between labels and the host engine's immediate-mode
//! text renderer. Keeps labels independent of OpenGL/Vulkan specifics.

use std::ops::{Deref, DerefMut};

/// Result type for backend calls
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors reported by a render backend
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The host renderer rejected a call
    #[error("Backend error: {0}")]
    Backend(String),

    /// The backend was in a state that does not allow the call
    #[error("Invalid render state: {0}")]
    InvalidState(String),
}

/// Host-facing immediate-mode text renderer
///
/// Calls arrive on the render thread in frame order. Blend and scale are
/// global state shared with everything else the host draws.
pub trait TextRenderBackend {
    /// Enable alpha blending
    fn enable_blend(&mut self) -> RenderResult<()>;

    /// Disable alpha blending
    fn disable_blend(&mut self) -> RenderResult<()>;

    /// Multiply the current transform by a scale
    fn scale(&mut self, sx: f64, sy: f64, sz: f64) -> RenderResult<()>;

    /// Draw one line of text at pre-scaled coordinates
    ///
    /// # Arguments
    /// * `text` - Line to draw, formatting codes included
    /// * `x`, `y` - Top-left position in the current (scaled) transform
    /// * `color` - Packed ARGB color
    /// * `shadow` - Whether to draw a drop shadow under the text
    fn draw_string(&mut self, text: &str, x: f32, y: f32, color: u32, shadow: bool) -> RenderResult<()>;

    /// End the current draw batch
    ///
    /// Hosts reset the transform here unless they were asked to retain it.
    fn finish_draw(&mut self) -> RenderResult<()>;
}

/// Scoped alpha blending
///
/// Blending is enabled when the guard is acquired. Call [`BlendGuard::release`]
/// to disable it and observe the result; if the guard is dropped instead
/// (an early `?` return), blending is disabled on drop and any failure is
/// logged.
pub struct BlendGuard<'a, B: TextRenderBackend + ?Sized> {
    backend: &'a mut B,
    released: bool,
}

impl<'a, B: TextRenderBackend + ?Sized> BlendGuard<'a, B> {
    /// Enable blending on `backend`
    pub fn acquire(backend: &'a mut B) -> RenderResult<Self> {
        backend.enable_blend()?;
        Ok(Self { backend, released: false })
    }

    /// Disable blending and hand back the result
    pub fn release(mut self) -> RenderResult<()> {
        self.released = true;
        self.backend.disable_blend()
    }
}

impl<B: TextRenderBackend + ?Sized> Deref for BlendGuard<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.backend
    }
}

impl<B: TextRenderBackend + ?Sized> DerefMut for BlendGuard<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.backend
    }
}

impl<B: TextRenderBackend + ?Sized> Drop for BlendGuard<'_, B> {
    fn drop(&mut self) {
        if !self.released {
            if let Err(e) = self.backend.disable_blend() {
                log::warn!("Failed to disable blending while unwinding a draw: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CommandRecorder, DrawCommand};

    #[test]
    fn test_release_disables_blend() {
        let mut recorder = CommandRecorder::new();
        let guard = BlendGuard::acquire(&mut recorder).unwrap();
        guard.release().unwrap();

        assert!(!recorder.blend_enabled());
        assert_eq!(recorder.commands(), &[DrawCommand::EnableBlend, DrawCommand::DisableBlend]);
    }

    #[test]
    fn test_drop_disables_blend() {
        let mut recorder = CommandRecorder::new();
        {
            let mut guard = BlendGuard::acquire(&mut recorder).unwrap();
            guard.scale(2.0, 2.0, 2.0).unwrap();
        }

        assert!(!recorder.blend_enabled());
        assert_eq!(recorder.commands().last(), Some(&DrawCommand::DisableBlend));
    }

    #[test]
    fn test_acquire_failure_leaves_nothing_to_undo() {
        let mut recorder = CommandRecorder::new();
        recorder.fail_on_enable_blend(true);

        assert!(BlendGuard::acquire(&mut recorder).is_err());
        assert!(recorder.commands().is_empty());
    }
}
