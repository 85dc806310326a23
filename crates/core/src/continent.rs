// SPDX-License-Identifier: MIT

//!
//! The continent type and the continent filter
//!

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can arise in relation to a [`Continent`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContinentError {
    #[error("Continent cannot be empty")]
    Empty,
}

/// The continent a country belongs to.  Any name not in the known list is
/// kept as [`Continent::Other`] so that it can still be drawn (with the
/// overflow colour).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Continent {
    Africa,
    SouthAmerica,
    Asia,
    NorthAmerica,
    Europe,
    Australia,
    Other(String),
}

impl Continent {
    /// The known continents, in legend order
    pub const KNOWN: [Continent; 6] = [
        Continent::Africa,
        Continent::SouthAmerica,
        Continent::Asia,
        Continent::NorthAmerica,
        Continent::Europe,
        Continent::Australia,
    ];

    /// Create a continent from its name.  Surrounding whitespace and case are
    /// ignored.
    pub fn from<S: AsRef<str>>(name: S) -> Result<Self, ContinentError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ContinentError::Empty);
        }
        let continent = match name.to_lowercase().as_str() {
            "africa" => Continent::Africa,
            "south america" | "south americas" => Continent::SouthAmerica,
            "asia" => Continent::Asia,
            "north america" => Continent::NorthAmerica,
            "europe" => Continent::Europe,
            "australia" => Continent::Australia,
            _ => Continent::Other(name.to_string()),
        };
        Ok(continent)
    }

    /// The position of the continent in the legend (and so in the colour
    /// palette).  `None` for unknown continents.
    pub fn legend_index(&self) -> Option<usize> {
        Continent::KNOWN.iter().position(|known| known == self)
    }

    /// Get the name of the continent
    pub fn as_str(&self) -> &str {
        match self {
            Continent::Africa => "Africa",
            Continent::SouthAmerica => "South America",
            Continent::Asia => "Asia",
            Continent::NorthAmerica => "North America",
            Continent::Europe => "Europe",
            Continent::Australia => "Australia",
            Continent::Other(name) => name,
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Continent {
    type Err = ContinentError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Continent::from(s)
    }
}

impl Serialize for Continent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Continent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Continent::from(string).map_err(serde::de::Error::custom)
    }
}

/// Which records are shown: all of them, or those of a single continent
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum ContinentFilter {
    #[default]
    All,
    Only(Continent),
}

impl ContinentFilter {
    /// Whether a record from the continent passes the filter
    pub fn allows(&self, continent: &Continent) -> bool {
        match self {
            ContinentFilter::All => true,
            ContinentFilter::Only(only) => only == continent,
        }
    }
}

impl fmt::Display for ContinentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContinentFilter::All => f.write_str("all"),
            ContinentFilter::Only(continent) => continent.fmt(f),
        }
    }
}

impl FromStr for ContinentFilter {
    type Err = ContinentError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(ContinentFilter::All)
        } else {
            Ok(ContinentFilter::Only(Continent::from(s)?))
        }
    }
}
