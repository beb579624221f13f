//! Bilingual (Russian / Kazakh) title splitting.

use std::fmt;
use std::str::FromStr;

use crate::error::ParserError;

/// Convention used to separate the Russian and Kazakh names in a heading title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TitleDelimiter {
    /// `Общие положения / Жалпы ережелер`
    #[default]
    #[value(alias = "/")]
    Slash,
    /// `Общие положения (Жалпы ережелер)`
    #[value(aliases = ["paren", "("])]
    Parenthesis,
}

impl TitleDelimiter {
    /// Split a raw title into `(name_ru, name_kz)`.
    ///
    /// Splits on the first delimiter only; both halves are trimmed. Without a
    /// delimiter the whole trimmed title is the Russian name and the Kazakh
    /// name is empty.
    ///
    /// # Examples
    /// ```
    /// use kodeks_parser::structure::TitleDelimiter;
    ///
    /// let (ru, kz) = TitleDelimiter::Slash.split("Общие положения / Жалпы ережелер");
    /// assert_eq!(ru, "Общие положения");
    /// assert_eq!(kz, "Жалпы ережелер");
    ///
    /// let (ru, kz) = TitleDelimiter::Parenthesis.split("Термины (Терминдер)");
    /// assert_eq!(ru, "Термины");
    /// assert_eq!(kz, "Терминдер");
    /// ```
    #[must_use]
    pub fn split(self, raw: &str) -> (String, String) {
        let Some((primary, secondary)) = raw.split_once(self.separator()) else {
            return (raw.trim().to_string(), String::new());
        };

        let secondary = secondary.trim();
        let secondary = match self {
            Self::Slash => secondary,
            // An unterminated parenthesis still yields the secondary name
            Self::Parenthesis => secondary.strip_suffix(')').unwrap_or(secondary).trim_end(),
        };

        (primary.trim().to_string(), secondary.to_string())
    }

    /// Character that starts the secondary name.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Slash => '/',
            Self::Parenthesis => '(',
        }
    }

    /// Configuration name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slash => "slash",
            Self::Parenthesis => "parenthesis",
        }
    }
}

impl FromStr for TitleDelimiter {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slash" | "/" => Ok(Self::Slash),
            "parenthesis" | "paren" | "(" => Ok(Self::Parenthesis),
            _ => Err(ParserError::InvalidTitleDelimiter(s.to_string())),
        }
    }
}

impl fmt::Display for TitleDelimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
