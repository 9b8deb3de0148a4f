//! Locale-aware number formatting for the country card.

use std::fmt;
use std::str::FromStr;

/// Number grouping conventions the viewer knows how to render.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NumberLocale {
    /// `1,234,567`
    #[default]
    EnUs,
    /// `1.234.567`
    DeDe,
    /// `1 234 567` with a narrow no-break space
    FrFr,
    /// `12,34,567` (lakh/crore grouping)
    EnIn,
    /// `1234567`
    Posix,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown number locale '{0}'")]
pub struct UnknownLocale(pub String);

impl NumberLocale {
    /// Separator placed between digit groups, or `None` when numbers are not grouped.
    pub fn group_separator(self) -> Option<&'static str> {
        match self {
            NumberLocale::EnUs | NumberLocale::EnIn => Some(","),
            NumberLocale::DeDe => Some("."),
            NumberLocale::FrFr => Some("\u{202f}"),
            NumberLocale::Posix => None,
        }
    }

    /// Size of the rightmost group and of every group after it.
    fn group_sizes(self) -> (usize, usize) {
        match self {
            NumberLocale::EnIn => (3, 2),
            _ => (3, 3),
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            NumberLocale::EnUs => "en-US",
            NumberLocale::DeDe => "de-DE",
            NumberLocale::FrFr => "fr-FR",
            NumberLocale::EnIn => "en-IN",
            NumberLocale::Posix => "C",
        }
    }
}

impl fmt::Display for NumberLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Accepts `en-US`, `en_US.UTF-8`, `de`, `fr-CA`, `C`, `POSIX` and the like.
/// Only the primary language matters, except for `en-IN`.
impl FromStr for NumberLocale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s
            .split('.')
            .next()
            .unwrap_or_default()
            .trim()
            .replace('_', "-")
            .to_ascii_lowercase();

        if tag == "c" || tag == "posix" {
            return Ok(NumberLocale::Posix);
        }
        if tag == "en-in" {
            return Ok(NumberLocale::EnIn);
        }

        match tag.split('-').next().unwrap_or_default() {
            "en" => Ok(NumberLocale::EnUs),
            "de" => Ok(NumberLocale::DeDe),
            "fr" => Ok(NumberLocale::FrFr),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Formats a population count with the locale's thousands grouping.
pub fn format_population(value: u64, locale: NumberLocale) -> String {
    let digits = value.to_string();
    let Some(sep) = locale.group_separator() else {
        return digits;
    };

    let (first, rest) = locale.group_sizes();
    let mut groups: Vec<&str> = Vec::new();
    let mut end = digits.len();
    let mut size = first;
    while end > size {
        groups.push(&digits[end - size..end]);
        end -= size;
        size = rest;
    }
    groups.push(&digits[..end]);
    groups.reverse();

    groups.join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_grouping() {
        assert_eq!(format_population(1_234_567, NumberLocale::EnUs), "1,234,567");
        assert_eq!(format_population(1000, NumberLocale::EnUs), "1,000");
        assert_eq!(format_population(999, NumberLocale::EnUs), "999");
        assert_eq!(format_population(0, NumberLocale::EnUs), "0");
        assert_eq!(format_population(100_000, NumberLocale::EnUs), "100,000");
    }

    #[test]
    fn other_locales() {
        assert_eq!(format_population(1_234_567, NumberLocale::DeDe), "1.234.567");
        assert_eq!(format_population(1_234_567, NumberLocale::FrFr), "1\u{202f}234\u{202f}567");
        assert_eq!(format_population(1_234_567, NumberLocale::EnIn), "12,34,567");
        assert_eq!(format_population(1_380_004_385, NumberLocale::EnIn), "1,38,00,04,385");
        assert_eq!(format_population(1_234_567, NumberLocale::Posix), "1234567");
    }

    #[test]
    fn parses_locale_tags() {
        assert_eq!("en-US".parse::<NumberLocale>(), Ok(NumberLocale::EnUs));
        assert_eq!("en_GB.UTF-8".parse::<NumberLocale>(), Ok(NumberLocale::EnUs));
        assert_eq!("de".parse::<NumberLocale>(), Ok(NumberLocale::DeDe));
        assert_eq!("fr-CA".parse::<NumberLocale>(), Ok(NumberLocale::FrFr));
        assert_eq!("en-IN".parse::<NumberLocale>(), Ok(NumberLocale::EnIn));
        assert_eq!("POSIX".parse::<NumberLocale>(), Ok(NumberLocale::Posix));
        assert_eq!(
            "tlh-KX".parse::<NumberLocale>(),
            Err(UnknownLocale("tlh-KX".to_string()))
        );
    }

    #[test]
    fn display_uses_canonical_tag() {
        assert_eq!(NumberLocale::DeDe.to_string(), "de-DE");
        assert_eq!(NumberLocale::default().to_string(), "en-US");
    }
}
