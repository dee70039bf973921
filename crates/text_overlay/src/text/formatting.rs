//! Formatting codes
//!
//! The host font renderer understands section-sign codes: `§` followed by a
//! code character switches color (`0`-`9`, `a`-`f`), adds a style (`k`-`o`)
//! or resets (`r`). Scripts write the same codes with `&` because `§` is
//! awkward to type; [`ChatFormatter::inject`] converts them and
//! [`ChatFormatter::strip`] removes both spellings.

use bitflags::bitflags;

/// Prefix of a renderer formatting code
pub const SECTION_SIGN: char = '\u{a7}';

bitflags! {
    /// Styles switched on by formatting codes
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextStyle: u8 {
        /// `k` - randomly cycling glyphs
        const OBFUSCATED = 1 << 0;
        /// `l`
        const BOLD = 1 << 1;
        /// `m`
        const STRIKETHROUGH = 1 << 2;
        /// `n`
        const UNDERLINE = 1 << 3;
        /// `o`
        const ITALIC = 1 << 4;
    }
}

/// Meaning of the character after a section sign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCode {
    /// One of the 16 palette colors, by index
    Color(u8),
    /// A style added on top of the current color
    Style(TextStyle),
    /// Back to the default color with no styles
    Reset,
}

impl FormatCode {
    /// Classify a code character, ignoring case like the font renderer does
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            d @ '0'..='9' => Some(Self::Color(d as u8 - b'0')),
            h @ 'a'..='f' => Some(Self::Color(h as u8 - b'a' + 10)),
            'k' => Some(Self::Style(TextStyle::OBFUSCATED)),
            'l' => Some(Self::Style(TextStyle::BOLD)),
            'm' => Some(Self::Style(TextStyle::STRIKETHROUGH)),
            'n' => Some(Self::Style(TextStyle::UNDERLINE)),
            'o' => Some(Self::Style(TextStyle::ITALIC)),
            'r' => Some(Self::Reset),
            _ => None,
        }
    }
}

/// Code characters recognized in script markup (lower case only)
fn is_markup_code(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='f' | 'k'..='o' | 'r')
}

/// Formatting code service
pub trait TextFormatter: Send + Sync {
    /// Turn script markup into renderer codes
    fn inject(&self, text: &str) -> String;

    /// Remove formatting codes, leaving plain text
    fn strip(&self, text: &str) -> String;
}

/// Chat-style `&` markup
///
/// `inject` and `strip` are not inverses: stripping drops the codes, so
/// injecting afterwards has nothing to restore.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatFormatter;

impl TextFormatter for ChatFormatter {
    fn inject(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        let mut prev = None;

        while let Some(c) = chars.next() {
            // `\&a` stays literal
            let is_code = c == '&'
                && prev != Some('\\')
                && chars.peek().is_some_and(|&next| is_markup_code(next));
            out.push(if is_code { SECTION_SIGN } else { c });
            prev = Some(c);
        }
        out
    }

    fn strip(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if (c == SECTION_SIGN || c == '&') && chars.peek().is_some_and(|&next| is_markup_code(next)) {
                chars.next();
                continue;
            }
            out.push(c);
        }
        out
    }
}

/// Visible characters of a string with the style active for each
///
/// Section-sign codes are consumed and never yielded. A color code or reset
/// clears every style, matching the host renderer.
pub fn glyphs(text: &str) -> Glyphs<'_> {
    Glyphs {
        chars: text.chars(),
        style: TextStyle::empty(),
    }
}

/// Iterator returned by [`glyphs`]
#[derive(Debug, Clone)]
pub struct Glyphs<'a> {
    chars: std::str::Chars<'a>,
    style: TextStyle,
}

impl Iterator for Glyphs<'_> {
    type Item = (char, TextStyle);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let c = self.chars.next()?;
            if c != SECTION_SIGN {
                return Some((c, self.style));
            }
            match FormatCode::from_char(self.chars.next()?) {
                Some(FormatCode::Color(_) | FormatCode::Reset) => self.style = TextStyle::empty(),
                Some(FormatCode::Style(style)) => self.style |= style,
                None => {}
            }
        }
    }
}

/// Codes still in effect at the end of `text`
///
/// Used to carry color and style onto the next wrapped line: the last color
/// code followed by every style code after it.
pub fn active_formatting(text: &str) -> String {
    let mut active = String::new();
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != SECTION_SIGN {
            continue;
        }
        let Some(code) = chars.next() else { break };
        match FormatCode::from_char(code) {
            Some(FormatCode::Color(_)) => {
                active.clear();
                active.push(SECTION_SIGN);
                active.push(code);
            }
            Some(FormatCode::Style(_)) => {
                active.push(SECTION_SIGN);
                active.push(code);
            }
            Some(FormatCode::Reset) => active.clear(),
            None => {}
        }
    }
    active
}
