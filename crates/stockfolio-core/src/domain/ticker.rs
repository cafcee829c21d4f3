use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_TICKER_LEN: usize = 10;

/// Exchange-style stock ticker, uppercase-normalized.
///
/// Letters and digits, with '.' or '-' allowed as share-class
/// separators (BRK.B, BF-B). Separators cannot open or close the
/// ticker and cannot repeat.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }

        let normalized = trimmed.to_ascii_uppercase();
        let len = normalized.chars().count();
        if len > MAX_TICKER_LEN {
            return Err(ValidationError::TickerTooLong {
                len,
                max: MAX_TICKER_LEN,
            });
        }

        let mut prev_separator = false;
        for (index, ch) in normalized.chars().enumerate() {
            let separator = ch == '.' || ch == '-';
            if index == 0 {
                if !ch.is_ascii_alphabetic() {
                    return Err(ValidationError::TickerInvalidStart { ch });
                }
            } else if separator {
                if prev_separator || index == len - 1 {
                    return Err(ValidationError::TickerInvalidChar { ch, index });
                }
            } else if !ch.is_ascii_alphanumeric() {
                return Err(ValidationError::TickerInvalidChar { ch, index });
            }
            prev_separator = separator;
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Ticker {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Ticker {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Ticker> for String {
    fn from(value: Ticker) -> Self {
        value.0
    }
}
