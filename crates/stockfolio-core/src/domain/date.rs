use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

const ISO_DATE: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Calendar date of a price observation, ISO-8601 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObservationDate(Date);

impl ObservationDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input.trim(), ISO_DATE)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub fn from_date(value: Date) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(ISO_DATE)
            .expect("ObservationDate must be ISO-8601 formattable")
    }
}

impl Display for ObservationDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for ObservationDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for ObservationDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
