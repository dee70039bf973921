//! Scripted collaborators for label tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::text::{FontMetrics, TextFormatter};

/// Metrics with a fixed width per character and canned wrap results
#[derive(Default)]
pub struct ScriptedMetrics {
    pub char_width: i32,
    pub wraps: HashMap<String, Vec<String>>,
    pub wrap_calls: Mutex<Vec<(String, i32)>>,
}

impl ScriptedMetrics {
    pub fn new(char_width: i32) -> Self {
        Self {
            char_width,
            ..Self::default()
        }
    }

    pub fn with_wrap(mut self, text: &str, lines: &[&str]) -> Self {
        self.wraps
            .insert(text.to_string(), lines.iter().map(|line| (*line).to_string()).collect());
        self
    }

    pub fn wrap_calls(&self) -> Vec<(String, i32)> {
        self.wrap_calls.lock().unwrap().clone()
    }
}

impl FontMetrics for ScriptedMetrics {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn string_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.char_width
    }

    fn wrap_to_width(&self, text: &str, width: i32) -> Vec<String> {
        self.wrap_calls.lock().unwrap().push((text.to_string(), width));
        self.wraps
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![text.to_string()])
    }
}

/// Formatter that tags text so each pass is visible
pub struct TaggingFormatter;

impl TextFormatter for TaggingFormatter {
    fn inject(&self, text: &str) -> String {
        format!("<{text}>")
    }

    fn strip(&self, text: &str) -> String {
        text.replace(['<', '>'], "")
    }
}

pub fn scripted(metrics: ScriptedMetrics) -> Arc<ScriptedMetrics> {
    Arc::new(metrics)
}
