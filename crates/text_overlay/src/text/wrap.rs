//! Greedy word wrapping
//!
//! Packs words onto a line until the next one would overflow the width.
//! Width is measured by a caller-supplied function so any font can drive it.

use super::formatting::{active_formatting, SECTION_SIGN};

/// Split `text` into lines no wider than `width`
///
/// - `width <= 0` disables wrapping and returns the text as a single line.
/// - `\n` always starts a new line.
/// - A break between words consumes the space at the break.
/// - A word wider than `width` is split between characters; each line takes
///   at least one character so wrapping always makes progress.
/// - Formatting codes active at a break are repeated at the start of the
///   next line so color and style survive the wrap.
///
/// The result is never empty.
pub fn wrap_to_width<F>(text: &str, width: i32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> i32,
{
    if width <= 0 {
        return vec![text.to_string()];
    }

    let mut wrapper = Wrapper {
        width,
        measure,
        lines: Vec::new(),
        line: String::new(),
        has_content: false,
    };

    for paragraph in text.split('\n') {
        for word in paragraph.split(' ') {
            wrapper.push_word(word);
        }
        wrapper.break_line();
    }

    wrapper.lines
}

struct Wrapper<F> {
    width: i32,
    measure: F,
    lines: Vec<String>,
    /// Line being built, starting with any carried formatting
    line: String,
    /// Whether `line` holds anything besides carried formatting
    has_content: bool,
}

impl<F: Fn(&str) -> i32> Wrapper<F> {
    fn fits(&self, candidate: &str) -> bool {
        (self.measure)(candidate) <= self.width
    }

    fn push_word(&mut self, word: &str) {
        if self.has_content {
            let candidate = format!("{} {}", self.line, word);
            if self.fits(&candidate) {
                self.line = candidate;
                return;
            }
            self.break_line();
        }

        let candidate = format!("{}{}", self.line, word);
        if self.fits(&candidate) {
            self.line = candidate;
            self.has_content = true;
            return;
        }

        self.push_oversized(word);
    }

    /// Split a word that cannot fit on an empty line
    fn push_oversized(&mut self, word: &str) {
        let mut chars = word.chars();
        while let Some(c) = chars.next() {
            let mut unit = c.to_string();
            // Keep a code and its prefix together
            if c == SECTION_SIGN {
                if let Some(code) = chars.next() {
                    unit.push(code);
                }
            }

            let candidate = format!("{}{}", self.line, unit);
            if self.has_content && !self.fits(&candidate) {
                self.break_line();
                self.line.push_str(&unit);
            } else {
                self.line = candidate;
            }
            self.has_content = true;
        }
    }

    fn break_line(&mut self) {
        let carried = active_formatting(&self.line);
        self.lines.push(std::mem::replace(&mut self.line, carried));
        self.has_content = false;
    }
}
