//! Text label - a positioned, styled string drawn in screen space

use std::fmt;
use std::sync::Arc;

use super::align::{Align, AlignSpec};
use super::formatting::{ChatFormatter, TextFormatter};
use super::metrics::{FontMetrics, FONT_HEIGHT};
use crate::config::LabelStyle;
use crate::foundation::math::{unscale, ScreenPos};
use crate::render::color::{self, fix_alpha};
use crate::render::{BlendGuard, RenderResult, TextRenderBackend};

/// A screen-space text label
///
/// Setters take `&mut self` and return it, so calls chain:
///
/// ```no_run
/// # use std::sync::Arc;
/// # use text_overlay::prelude::*;
/// let mut label = TextLabel::new(Arc::new(BitmapFontMetrics::new()), "&6Gold");
/// label.set_x(4.0).set_y(4.0).set_shadow(true).set_width(80);
/// ```
///
/// # Derived state
///
/// `lines` is recomputed by [`set_width`](Self::set_width) and
/// [`relayout`](Self::relayout). The text is reformatted by
/// [`set_formatted`](Self::set_formatted) and [`relayout`](Self::relayout).
/// [`set_string`](Self::set_string) does neither; call `relayout` after it
/// when the label wraps or uses markup.
#[derive(Clone)]
pub struct TextLabel {
    text: String,
    position: ScreenPos,
    lines: Vec<String>,

    color: u32,
    formatted: bool,
    shadow: bool,
    align: Align,

    width: i64,
    max_lines: i64,
    scale: f64,

    metrics: Arc<dyn FontMetrics>,
    formatter: Arc<dyn TextFormatter>,
}

impl TextLabel {
    /// Create a label at the origin
    pub fn new(metrics: Arc<dyn FontMetrics>, text: impl Into<String>) -> Self {
        Self::with_position(metrics, text, 0.0, 0.0)
    }

    /// Create a label at `(x, y)`
    pub fn with_position(metrics: Arc<dyn FontMetrics>, text: impl Into<String>, x: f64, y: f64) -> Self {
        Self::with_services(metrics, Arc::new(ChatFormatter), text, x, y)
    }

    /// Create a label with a custom formatting service
    pub fn with_services(
        metrics: Arc<dyn FontMetrics>,
        formatter: Arc<dyn TextFormatter>,
        text: impl Into<String>,
        x: f64,
        y: f64,
    ) -> Self {
        let text = text.into();
        let mut label = Self {
            lines: vec![text.clone()],
            text,
            position: ScreenPos::new(x, y),
            color: color::WHITE,
            formatted: true,
            shadow: false,
            align: Align::Left,
            width: 0,
            max_lines: 0,
            scale: 1.0,
            metrics,
            formatter,
        };
        label.update_formatting();
        label
    }

    /// Current text
    pub fn string(&self) -> &str {
        &self.text
    }

    /// Replace the text
    ///
    /// Lines and formatting are left as they were; see [`relayout`](Self::relayout).
    pub fn set_string(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    /// Packed ARGB color
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Set the color; a missing alpha byte becomes opaque
    pub fn set_color(&mut self, color: u32) -> &mut Self {
        self.color = fix_alpha(color);
        self
    }

    /// Whether formatting codes are interpreted
    pub fn formatted(&self) -> bool {
        self.formatted
    }

    /// Interpret or strip formatting codes, rewriting the text immediately
    ///
    /// Stripping is destructive: turning formatting back on does not bring
    /// stripped codes back.
    pub fn set_formatted(&mut self, formatted: bool) -> &mut Self {
        self.formatted = formatted;
        self.update_formatting();
        self
    }

    /// Whether a drop shadow is drawn
    pub fn shadow(&self) -> bool {
        self.shadow
    }

    /// Toggle the drop shadow
    pub fn set_shadow(&mut self, shadow: bool) -> &mut Self {
        self.shadow = shadow;
        self
    }

    /// Horizontal alignment
    pub fn align(&self) -> Align {
        self.align
    }

    /// Set alignment from a constant or a name
    ///
    /// Names match ignoring case. Anything unrecognized means [`Align::Left`].
    pub fn set_align(&mut self, align: impl Into<AlignSpec>) -> &mut Self {
        let spec = align.into();
        self.align = spec.recognized().unwrap_or_else(|| {
            log::trace!("Unrecognized alignment {spec:?}, using LEFT");
            Align::Left
        });
        self
    }

    /// X position
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Set the X position
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.position.x = x;
        self
    }

    /// Y position
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Set the Y position
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.position.y = y;
        self
    }

    /// Position as a vector
    pub fn position(&self) -> ScreenPos {
        self.position
    }

    /// Wrap width in pixels, 0 when wrapping is off
    pub fn width(&self) -> i64 {
        self.width
    }

    /// Set the wrap width and rewrap the text
    ///
    /// A width of 0 (or less) keeps the whole text on one line.
    pub fn set_width(&mut self, width: i64) -> &mut Self {
        self.width = width;
        self.update_lines();
        self
    }

    /// Wrapped lines from the last layout
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line cap while wrapping
    pub fn max_lines(&self) -> i64 {
        self.max_lines
    }

    /// Set the line cap
    ///
    /// While drawing, 0 draws no lines and a negative cap draws all of them.
    pub fn set_max_lines(&mut self, max_lines: i64) -> &mut Self {
        self.max_lines = max_lines;
        self
    }

    /// Uniform scale factor
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the scale factor
    pub fn set_scale(&mut self, scale: f64) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Reformat the current text and rewrap it
    pub fn relayout(&mut self) -> &mut Self {
        self.update_formatting();
        self.update_lines();
        self
    }

    /// Apply every option of a style through the regular setters
    pub fn apply_style(&mut self, style: &LabelStyle) -> &mut Self {
        self.set_color(style.color)
            .set_shadow(style.shadow)
            .set_align(style.align.as_str())
            .set_max_lines(style.max_lines)
            .set_scale(style.scale)
            .set_formatted(style.formatted)
            .set_width(style.width)
    }

    /// Widest extent in pixels: the whole text when not wrapping, otherwise
    /// the widest line
    pub fn max_width(&self) -> i32 {
        if self.width == 0 {
            self.metrics.string_width(&self.text)
        } else {
            self.lines
                .iter()
                .map(|line| self.metrics.string_width(line))
                .max()
                .unwrap_or(0)
        }
    }

    /// Height in screen units at the current scale
    #[allow(clippy::cast_precision_loss)]
    pub fn height(&self) -> f64 {
        let line_height = self.scale * f64::from(FONT_HEIGHT);
        if self.width == 0 {
            line_height
        } else {
            self.lines.len() as f64 * line_height
        }
    }

    /// Whether wrapping produced more lines than the cap
    pub fn exceeds_max_lines(&self) -> bool {
        let line_count = i64::try_from(self.lines.len()).unwrap_or(i64::MAX);
        self.width != 0 && line_count > self.max_lines
    }

    /// Draw the label
    ///
    /// `x` and `y` override the stored position for this call only. Blending
    /// is enabled for the duration of the call and disabled on every exit
    /// path; the scale transform is left for the backend's
    /// [`finish_draw`](TextRenderBackend::finish_draw) to reset.
    ///
    /// # Errors
    ///
    /// Backend failures are returned unchanged.
    #[allow(clippy::cast_possible_truncation)]
    pub fn draw<B>(&mut self, backend: &mut B, x: Option<f64>, y: Option<f64>) -> RenderResult<&mut Self>
    where
        B: TextRenderBackend + ?Sized,
    {
        let x = x.unwrap_or(self.position.x);
        let y = y.unwrap_or(self.position.y);

        let mut guard = BlendGuard::acquire(backend)?;
        guard.scale(self.scale, self.scale, self.scale)?;

        if self.width > 0 {
            let line_advance = self.scale * f64::from(FONT_HEIGHT);
            let mut remaining = self.max_lines;
            let mut line_y = y;
            let mut drawn = 0_usize;

            for line in &self.lines {
                if remaining == 0 {
                    break;
                }
                log::trace!("Drawing line '{line}' at y={line_y}");
                guard.draw_string(
                    line,
                    self.x_align(line, x) as f32,
                    unscale(line_y, self.scale) as f32,
                    self.color,
                    self.shadow,
                )?;
                line_y += line_advance;
                remaining = remaining.saturating_sub(1);
                drawn += 1;
            }
            log::trace!("Drew {drawn} of {} wrapped lines", self.lines.len());
        } else {
            guard.draw_string(
                &self.text,
                self.x_align(&self.text, x) as f32,
                unscale(y, self.scale) as f32,
                self.color,
                self.shadow,
            )?;
        }

        guard.release()?;
        backend.finish_draw()?;
        Ok(self)
    }

    /// Left edge of `line` in the scaled transform
    fn x_align(&self, line: &str, x: f64) -> f64 {
        let x = unscale(x, self.scale);
        match self.align {
            Align::Left => x,
            // Half width is whole pixels, as in the host renderer
            Align::Center => x - f64::from(self.metrics.string_width(line) / 2),
            Align::Right => x - f64::from(self.metrics.string_width(line)),
        }
    }

    fn update_formatting(&mut self) {
        self.text = if self.formatted {
            self.formatter.inject(&self.text)
        } else {
            self.formatter.strip(&self.text)
        };
    }

    fn update_lines(&mut self) {
        self.lines = if self.width > 0 {
            let width = i32::try_from(self.width).unwrap_or(i32::MAX);
            self.metrics.wrap_to_width(&self.text, width)
        } else {
            vec![self.text.clone()]
        };
        if self.lines.is_empty() {
            self.lines.push(self.text.clone());
        }
        log::debug!("Label laid out into {} line(s) at width {}", self.lines.len(), self.width);
    }
}

impl fmt::Display for TextLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Text{{string={}, x={}, y={}, lines=[{}], color={}, scale={}, formatted={}, shadow={}, align={}, width={}, maxLines={}}}",
            self.text,
            self.position.x,
            self.position.y,
            self.lines.join(", "),
            self.color,
            self.scale,
            self.formatted,
            self.shadow,
            self.align,
            self.width,
            self.max_lines,
        )
    }
}

impl fmt::Debug for TextLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextLabel")
            .field("text", &self.text)
            .field("position", &(self.position.x, self.position.y))
            .field("lines", &self.lines)
            .field("color", &format_args!("{:#010X}", self.color))
            .field("formatted", &self.formatted)
            .field("shadow", &self.shadow)
            .field("align", &self.align)
            .field("width", &self.width)
            .field("max_lines", &self.max_lines)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}
