//! Overlay demo application
//!
//! Lays out a label from an optional style file and logs the draw commands
//! it produces.
//!
//! ```text
//! overlay_demo [style.toml|style.ron] [text]
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use text_overlay::foundation::logging;
use text_overlay::prelude::*;

const DEFAULT_TEXT: &str = "&6Overlay &fdemo: &7a label that wraps across several lines when a width is set";

/// Demo errors
#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Invalid style: {0}")]
    InvalidStyle(String),
}

fn default_style() -> LabelStyle {
    LabelStyle {
        align: "center".to_string(),
        width: 120,
        max_lines: 3,
        shadow: true,
        ..LabelStyle::default()
    }
}

fn run() -> Result<(), DemoError> {
    let mut args = std::env::args().skip(1);

    let style = match args.next() {
        Some(path) => {
            logging::info!("Loading style from {path}");
            LabelStyle::load_from_file(&path)?
        }
        None => default_style(),
    };
    style.validate().map_err(DemoError::InvalidStyle)?;

    let text = args.next().unwrap_or_else(|| DEFAULT_TEXT.to_string());

    let mut label = TextLabel::with_position(Arc::new(BitmapFontMetrics::new()), text, 160.0, 12.0);
    label.apply_style(&style);
    logging::info!("{label}");
    logging::info!(
        "Extent: {}px wide, {} high, {} line(s)",
        label.max_width(),
        label.height(),
        label.lines().len()
    );
    if label.exceeds_max_lines() {
        logging::warn!(
            "{} line(s) wrapped but only {} will be drawn",
            label.lines().len(),
            label.max_lines()
        );
    }

    let mut recorder = CommandRecorder::new();
    label.draw(&mut recorder, None, None)?;

    for command in recorder.commands() {
        logging::info!("{command:?}");
    }
    Ok(())
}

fn main() -> ExitCode {
    logging::init_with_default("info");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logging::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
