//! Horizontal alignment

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Horizontal text alignment relative to the label's x position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Align {
    /// Text starts at x
    #[default]
    Left,
    /// Text is centered on x
    Center,
    /// Text ends at x
    Right,
}

impl Align {
    /// Upper-case name used by scripts
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Center => "CENTER",
            Self::Right => "RIGHT",
        }
    }

    /// Resolve any alignment input to a variant
    ///
    /// Never fails: names are matched ignoring case and anything that does
    /// not match resolves to [`Align::Left`].
    pub fn resolve(spec: &AlignSpec) -> Self {
        spec.recognized().unwrap_or_default()
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for strict alignment parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown alignment: {0}")]
pub struct ParseAlignError(pub String);

impl FromStr for Align {
    type Err = ParseAlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Left, Self::Center, Self::Right]
            .into_iter()
            .find(|align| align.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseAlignError(s.to_string()))
    }
}

/// Alignment as a script hands it over
///
/// Scripts pass either an enum constant or its name; anything else is kept
/// as [`AlignSpec::Unrecognized`] so the setter can fall back quietly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignSpec {
    /// An alignment constant
    Named(Align),
    /// A name to match ignoring case
    Name(String),
    /// Input of some other kind
    Unrecognized,
}

impl AlignSpec {
    /// The alignment this input names, if any
    pub fn recognized(&self) -> Option<Align> {
        match self {
            Self::Named(align) => Some(*align),
            Self::Name(name) => name.parse().ok(),
            Self::Unrecognized => None,
        }
    }
}

impl From<Align> for AlignSpec {
    fn from(align: Align) -> Self {
        Self::Named(align)
    }
}

impl From<&str> for AlignSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for AlignSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<i32> for AlignSpec {
    fn from(_: i32) -> Self {
        Self::Unrecognized
    }
}

impl From<i64> for AlignSpec {
    fn from(_: i64) -> Self {
        Self::Unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("center".parse::<Align>(), Ok(Align::Center));
        assert_eq!("CENTER".parse::<Align>(), Ok(Align::Center));
        assert_eq!("Right".parse::<Align>(), Ok(Align::Right));
        assert_eq!("left".parse::<Align>(), Ok(Align::Left));
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert_eq!("bogus".parse::<Align>(), Err(ParseAlignError("bogus".to_string())));
        assert!(" center".parse::<Align>().is_err());
        assert!("".parse::<Align>().is_err());
    }

    #[test]
    fn test_resolve_is_total() {
        assert_eq!(Align::resolve(&"center".into()), Align::Center);
        assert_eq!(Align::resolve(&Align::Right.into()), Align::Right);
        assert_eq!(Align::resolve(&"bogus".into()), Align::Left);
        assert_eq!(Align::resolve(&42_i32.into()), Align::Left);
        assert_eq!(Align::resolve(&AlignSpec::from(7_i64)), Align::Left);
    }

    #[test]
    fn test_recognized_inputs() {
        assert_eq!(AlignSpec::from("left").recognized(), Some(Align::Left));
        assert_eq!(AlignSpec::from("LEFT").recognized(), Some(Align::Left));
        assert_eq!(AlignSpec::from(Align::Left).recognized(), Some(Align::Left));
        assert_eq!(AlignSpec::from("Right").recognized(), Some(Align::Right));
        assert_eq!(AlignSpec::from("bogus").recognized(), None);
        assert_eq!(AlignSpec::from(3_i32).recognized(), None);
        assert_eq!(AlignSpec::Unrecognized.recognized(), None);
    }

    #[test]
    fn test_display_round_trips() {
        for align in [Align::Left, Align::Center, Align::Right] {
            assert_eq!(align.to_string().parse::<Align>(), Ok(align));
        }
    }
}
