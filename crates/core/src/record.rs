// SPDX-License-Identifier: MIT

//!
//! The country record and year snapshot types
//!

use crate::{Continent, ContinentFilter};
use serde::{Deserialize, Serialize};

/// The data for one country in one year.  Instances produced by the dataset
/// loader always have a non-empty name, finite income and life expectancy,
/// positive income, and a positive population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// The country's name (its identity within a snapshot)
    pub country: String,

    /// The continent the country belongs to
    pub continent: Continent,

    /// GDP per capita
    pub income: f64,

    /// Life expectancy (years)
    pub life_exp: f64,

    /// Population
    pub population: u64,
}

impl CountryRecord {
    /// Borrow the record's identity key
    pub fn key(&self) -> &str {
        &self.country
    }
}

/// The country records for a single year, in dataset order
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearSnapshot(Vec<CountryRecord>);

impl YearSnapshot {
    /// Create a snapshot from records
    pub fn from(records: Vec<CountryRecord>) -> Self {
        Self(records)
    }

    /// Borrow the records
    pub fn records(&self) -> &[CountryRecord] {
        &self.0
    }

    /// The number of records
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Find a record by country name
    pub fn get(&self, country: &str) -> Option<&CountryRecord> {
        self.0.iter().find(|record| record.country == country)
    }

    /// A new snapshot holding only the records that pass the filter (order is
    /// preserved)
    pub fn filtered(&self, filter: &ContinentFilter) -> Self {
        Self(
            self.0
                .iter()
                .filter(|record| filter.allows(&record.continent))
                .cloned()
                .collect(),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a YearSnapshot {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for YearSnapshot {
    type Item = CountryRecord;
    type IntoIter = std::vec::IntoIter<CountryRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
