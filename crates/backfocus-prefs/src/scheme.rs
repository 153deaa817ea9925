//! System colour-scheme detection.

/// Source of the operating environment's dark-scheme signal.
pub trait SchemeSource {
    /// `Some(true)` for a dark scheme, `None` when the signal is unavailable.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Reads the terminal's `COLORFGBG` variable (`"fg;bg"`, ANSI indices).
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvScheme;

impl SchemeSource for EnvScheme {
    fn prefers_dark(&self) -> Option<bool> {
        let value = std::env::var("COLORFGBG").ok()?;
        parse_colorfgbg(&value)
    }
}

/// A fixed signal, for tests and hosts without a scheme signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedScheme(pub Option<bool>);

impl SchemeSource for FixedScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Interpret a `COLORFGBG` value. The background is the last field; indices
/// 0-6 and 8 are dark colours.
#[must_use]
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(true),
        7 | 9..=15 => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_backgrounds() {
        assert_eq!(parse_colorfgbg("15;0"), Some(true));
        assert_eq!(parse_colorfgbg("7;default;0"), Some(true));
        assert_eq!(parse_colorfgbg("15;8"), Some(true));
    }

    #[test]
    fn light_backgrounds() {
        assert_eq!(parse_colorfgbg("0;15"), Some(false));
        assert_eq!(parse_colorfgbg("0;7"), Some(false));
    }

    #[test]
    fn unusable_values() {
        assert_eq!(parse_colorfgbg(""), None);
        assert_eq!(parse_colorfgbg("15;default"), None);
        assert_eq!(parse_colorfgbg("0;200"), None);
    }

    #[test]
    fn fixed_scheme() {
        assert_eq!(FixedScheme(Some(true)).prefers_dark(), Some(true));
        assert_eq!(FixedScheme(None).prefers_dark(), None);
    }
}
