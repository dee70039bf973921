//! Recorded draw commands
//!
//! [`CommandRecorder`] is a [`TextRenderBackend`] that keeps every call it
//! receives. It tracks blend state and the scale transform the same way a
//! host would, which makes it usable for snapshot tests and for tools that
//! replay overlay output somewhere else.

use super::backend::{RenderError, RenderResult, TextRenderBackend};
use super::color;

/// A single backend call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Alpha blending switched on
    EnableBlend,
    /// Alpha blending switched off
    DisableBlend,
    /// Transform multiplied by a scale
    Scale {
        /// X factor
        x: f64,
        /// Y factor
        y: f64,
        /// Z factor
        z: f64,
    },
    /// Drop shadow pass drawn one pixel down and right of a line
    DrawShadow {
        /// Drawn text, formatting codes included
        text: String,
        /// X in the scaled transform
        x: f32,
        /// Y in the scaled transform
        y: f32,
        /// Darkened shadow color
        color: u32,
    },
    /// One line of text drawn
    DrawString {
        /// Drawn text, formatting codes included
        text: String,
        /// X in the scaled transform
        x: f32,
        /// Y in the scaled transform
        y: f32,
        /// Packed ARGB color
        color: u32,
        /// Drop shadow requested
        shadow: bool,
    },
    /// Draw batch finished
    FinishDraw,
}

/// Backend that records draw commands. Does not require a GPU.
#[derive(Debug)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    blend_enabled: bool,
    transform: [f64; 3],
    retain_transforms: bool,
    fail_enable_blend: bool,
    fail_draw_after: Option<usize>,
    strings_drawn: usize,
}

impl CommandRecorder {
    /// Create an empty recorder with an identity transform
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            blend_enabled: false,
            transform: [1.0; 3],
            retain_transforms: false,
            fail_enable_blend: false,
            fail_draw_after: None,
            strings_drawn: 0,
        }
    }

    /// Keep the scale transform across [`finish_draw`](TextRenderBackend::finish_draw)
    pub fn with_retained_transforms(mut self, retain: bool) -> Self {
        self.retain_transforms = retain;
        self
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Clear recorded commands; blend and transform state are kept
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Text of every recorded `DrawString`, in order
    pub fn drawn_text(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::DrawString { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded `DrawString` commands
    pub fn draw_string_count(&self) -> usize {
        self.drawn_text().len()
    }

    /// Whether blending is currently on
    pub fn blend_enabled(&self) -> bool {
        self.blend_enabled
    }

    /// Current scale transform
    pub fn transform(&self) -> [f64; 3] {
        self.transform
    }

    /// Make `enable_blend` fail
    pub fn fail_on_enable_blend(&mut self, fail: bool) {
        self.fail_enable_blend = fail;
    }

    /// Make `draw_string` fail once `count` strings have been drawn
    pub fn fail_draw_after(&mut self, count: Option<usize>) {
        self.fail_draw_after = count;
    }
}

impl Default for CommandRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderBackend for CommandRecorder {
    fn enable_blend(&mut self) -> RenderResult<()> {
        if self.fail_enable_blend {
            return Err(RenderError::Backend("blend state unavailable".to_string()));
        }
        self.blend_enabled = true;
        self.commands.push(DrawCommand::EnableBlend);
        Ok(())
    }

    fn disable_blend(&mut self) -> RenderResult<()> {
        if !self.blend_enabled {
            return Err(RenderError::InvalidState("blending is not enabled".to_string()));
        }
        self.blend_enabled = false;
        self.commands.push(DrawCommand::DisableBlend);
        Ok(())
    }

    fn scale(&mut self, sx: f64, sy: f64, sz: f64) -> RenderResult<()> {
        self.transform[0] *= sx;
        self.transform[1] *= sy;
        self.transform[2] *= sz;
        self.commands.push(DrawCommand::Scale { x: sx, y: sy, z: sz });
        Ok(())
    }

    fn draw_string(&mut self, text: &str, x: f32, y: f32, color: u32, shadow: bool) -> RenderResult<()> {
        if self.fail_draw_after.is_some_and(|limit| self.strings_drawn >= limit) {
            return Err(RenderError::Backend(format!("failed to draw '{text}'")));
        }
        self.strings_drawn += 1;
        if shadow {
            self.commands.push(DrawCommand::DrawShadow {
                text: text.to_string(),
                x: x + 1.0,
                y: y + 1.0,
                color: color::shadow_of(color),
            });
        }
        self.commands.push(DrawCommand::DrawString {
            text: text.to_string(),
            x,
            y,
            color,
            shadow,
        });
        Ok(())
    }

    fn finish_draw(&mut self) -> RenderResult<()> {
        if !self.retain_transforms {
            self.transform = [1.0; 3];
        }
        self.commands.push(DrawCommand::FinishDraw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_draw_resets_transform() {
        let mut recorder = CommandRecorder::new();
        recorder.scale(2.0, 2.0, 2.0).unwrap();
        recorder.scale(1.5, 1.5, 1.5).unwrap();
        assert_eq!(recorder.transform(), [3.0, 3.0, 3.0]);

        recorder.finish_draw().unwrap();
        assert_eq!(recorder.transform(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_retained_transform_survives_finish_draw() {
        let mut recorder = CommandRecorder::new().with_retained_transforms(true);
        recorder.scale(2.0, 2.0, 2.0).unwrap();
        recorder.finish_draw().unwrap();

        assert_eq!(recorder.transform(), [2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_draw_failure_after_limit() {
        let mut recorder = CommandRecorder::new();
        recorder.fail_draw_after(Some(1));

        assert!(recorder.draw_string("first", 0.0, 0.0, 0xFFFF_FFFF, false).is_ok());
        assert!(matches!(
            recorder.draw_string("second", 0.0, 9.0, 0xFFFF_FFFF, false),
            Err(RenderError::Backend(_))
        ));
        assert_eq!(recorder.drawn_text(), vec!["first"]);
    }

    #[test]
    fn test_shadow_pass_precedes_text() {
        let mut recorder = CommandRecorder::new();
        recorder.draw_string("Hi", 4.0, 8.0, 0xFFFF_FFFF, true).unwrap();

        assert_eq!(
            recorder.commands(),
            &[
                DrawCommand::DrawShadow {
                    text: "Hi".to_string(),
                    x: 5.0,
                    y: 9.0,
                    color: 0xFF3F_3F3F,
                },
                DrawCommand::DrawString {
                    text: "Hi".to_string(),
                    x: 4.0,
                    y: 8.0,
                    color: 0xFFFF_FFFF,
                    shadow: true,
                },
            ]
        );
        assert_eq!(recorder.draw_string_count(), 1);
    }

    #[test]
    fn test_no_shadow_pass_without_shadow() {
        let mut recorder = CommandRecorder::new();
        recorder.draw_string("Hi", 0.0, 0.0, 0xFFFF_FFFF, false).unwrap();

        assert!(!recorder
            .commands()
            .iter()
            .any(|command| matches!(command, DrawCommand::DrawShadow { .. })));
    }

    #[test]
    fn test_disable_without_enable_is_invalid() {
        let mut recorder = CommandRecorder::new();

        assert!(matches!(recorder.disable_blend(), Err(RenderError::InvalidState(_))));
        assert!(recorder.commands().is_empty());

        recorder.enable_blend().unwrap();
        recorder.disable_blend().unwrap();
        assert!(matches!(recorder.disable_blend(), Err(RenderError::InvalidState(_))));
        assert_eq!(recorder.commands(), &[DrawCommand::EnableBlend, DrawCommand::DisableBlend]);
    }

    #[test]
    fn test_clear_keeps_state() {
        let mut recorder = CommandRecorder::new();
        recorder.enable_blend().unwrap();
        recorder.clear_commands();

        assert!(recorder.commands().is_empty());
        assert!(recorder.blend_enabled());
    }
}
