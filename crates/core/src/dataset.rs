// SPDX-License-Identifier: MIT

//!
//! Load the yearly dataset and turn raw rows into [`CountryRecord`]s
//!
//! Rows are validated once, when the dataset is loaded.  A row that is
//! missing its income or life expectancy (or whose values can't be read as
//! numbers) is dropped rather than reported, so a [`Dataset`] only ever hands
//! out records that can be drawn.
//!

use crate::{
    Continent, ContinentFilter, CountryRecord, TimeIndex, YEAR_COUNT, YearSnapshot,
};
use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can arise when loading a [`Dataset`]
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Unable to read the dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("The dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("The dataset must hold {expected} years, but it holds {found}")]
    YearCount { expected: usize, found: usize },
}

/// Reasons a raw row is not turned into a [`CountryRecord`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("no country name")]
    MissingCountry,

    #[error("no continent")]
    MissingContinent,

    #[error("no income")]
    MissingIncome,

    #[error("no life expectancy")]
    MissingLifeExp,

    #[error("no population")]
    MissingPopulation,

    #[error("income `{0}` is not a positive number")]
    InvalidIncome(String),

    #[error("life expectancy `{0}` is not a number")]
    InvalidLifeExp(String),

    #[error("population `{0}` is not a positive number")]
    InvalidPopulation(String),
}

/// One year of the raw input
#[derive(Debug, Clone, Deserialize)]
struct RawYear {
    #[serde(default)]
    countries: Vec<RawCountry>,
}

/// One country row of the raw input.  Every field is optional here, the
/// checks happen in [`RawCountry::into_record`].
#[derive(Debug, Clone, Default, Deserialize)]
struct RawCountry {
    #[serde(default)]
    country: Option<String>,

    #[serde(default)]
    continent: Option<String>,

    #[serde(default)]
    income: Option<RawNumber>,

    #[serde(default)]
    life_exp: Option<RawNumber>,

    #[serde(default)]
    population: Option<RawNumber>,
}

/// Numeric fields arrive as either JSON numbers or strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawNumber {
    /// Whether a value is there at all.  Zero and the empty string count as
    /// missing.
    fn is_present(&self) -> bool {
        match self {
            RawNumber::Number(number) => *number != 0.0,
            RawNumber::Text(text) => !text.trim().is_empty(),
            RawNumber::Other(value) => !value.is_null(),
        }
    }

    /// The finite number held, if any
    fn to_f64(&self) -> Option<f64> {
        let number = match self {
            RawNumber::Number(number) => *number,
            RawNumber::Text(text) => text.trim().parse::<f64>().ok()?,
            RawNumber::Other(_) => return None,
        };
        number.is_finite().then_some(number)
    }

    fn describe(&self) -> String {
        match self {
            RawNumber::Number(number) => number.to_string(),
            RawNumber::Text(text) => text.clone(),
            RawNumber::Other(value) => value.to_string(),
        }
    }
}

impl RawCountry {
    /// Validate and coerce the row
    fn into_record(self) -> Result<CountryRecord, RecordError> {
        let country = self
            .country
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or(RecordError::MissingCountry)?;

        let income = self
            .income
            .filter(RawNumber::is_present)
            .ok_or(RecordError::MissingIncome)?;
        let life_exp = self
            .life_exp
            .filter(RawNumber::is_present)
            .ok_or(RecordError::MissingLifeExp)?;

        let continent = self
            .continent
            .as_deref()
            .and_then(|name| Continent::from(name).ok())
            .ok_or(RecordError::MissingContinent)?;

        let income = income
            .to_f64()
            .filter(|income| *income > 0.0)
            .ok_or_else(|| RecordError::InvalidIncome(income.describe()))?;
        let life_exp = life_exp
            .to_f64()
            .ok_or_else(|| RecordError::InvalidLifeExp(life_exp.describe()))?;

        let population = self.population.ok_or(RecordError::MissingPopulation)?;
        let population = population
            .to_f64()
            .filter(|population| *population >= 1.0)
            .ok_or_else(|| RecordError::InvalidPopulation(population.describe()))?
            .round() as u64;

        Ok(CountryRecord {
            country,
            continent,
            income,
            life_exp,
            population,
        })
    }
}

/// Every year's records, validated.  Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    years: Vec<YearSnapshot>,
}

impl Dataset {
    /// Load a dataset from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        info!("Loading dataset from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load a dataset from a JSON string.  The JSON must be an array holding
    /// one object per year, each with a `countries` array.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let raw_years: Vec<RawYear> = serde_json::from_str(json)?;
        if raw_years.len() != YEAR_COUNT {
            return Err(DatasetError::YearCount {
                expected: YEAR_COUNT,
                found: raw_years.len(),
            });
        }

        let mut dropped = 0;
        let years: Vec<YearSnapshot> = raw_years
            .into_iter()
            .enumerate()
            .map(|(index, raw_year)| {
                let year = TimeIndex::new(index).year();
                let (snapshot, dropped_this_year) = snapshot_from_raw(year, raw_year.countries);
                dropped += dropped_this_year;
                snapshot
            })
            .collect();

        info!(
            "Dataset loaded: {} years, {} records, {dropped} rows dropped",
            years.len(),
            years.iter().map(YearSnapshot::len).sum::<usize>()
        );
        Ok(Self { years })
    }

    /// Create a dataset from snapshots that have already been validated
    pub fn from_snapshots(years: Vec<YearSnapshot>) -> Result<Self, DatasetError> {
        if years.len() != YEAR_COUNT {
            return Err(DatasetError::YearCount {
                expected: YEAR_COUNT,
                found: years.len(),
            });
        }
        Ok(Self { years })
    }

    /// The records for one year that pass the filter
    pub fn snapshot(&self, time: TimeIndex, filter: &ContinentFilter) -> YearSnapshot {
        // `TimeIndex` is always in range and the year count is checked on load
        self.years[time.value()].filtered(filter)
    }

    /// The records for every year that pass the filter
    pub fn snapshots(&self, filter: &ContinentFilter) -> Vec<YearSnapshot> {
        self.years
            .iter()
            .map(|snapshot| snapshot.filtered(filter))
            .collect()
    }

    /// The number of years held
    pub fn year_count(&self) -> usize {
        self.years.len()
    }
}

/// Turn a year's raw rows into a snapshot, returning how many rows were
/// dropped
fn snapshot_from_raw(year: i32, rows: Vec<RawCountry>) -> (YearSnapshot, usize) {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(rows.len());
    let mut dropped = 0;
    for row in rows {
        match row.into_record() {
            Ok(record) => {
                if seen.insert(record.country.clone()) {
                    records.push(record);
                } else {
                    warn!("{year}: duplicate country `{}` dropped", record.country);
                    dropped += 1;
                }
            }
            Err(error) => {
                debug!("{year}: row dropped ({error})");
                dropped += 1;
            }
        }
    }
    (YearSnapshot::from(records), dropped)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::{Value, json};

    fn dataset_json(first_year: Value) -> String {
        let mut years = vec![first_year];
        years.extend((1..YEAR_COUNT).map(|_| json!({ "countries": [] })));
        serde_json::to_string(&years).unwrap()
    }

    fn raw(value: Value) -> RawCountry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn coerces_strings_and_numbers() {
        let record = raw(json!({
            "country": "Chile",
            "continent": "South America",
            "income": "4500.5",
            "life_exp": 71.25,
            "population": 15000000
        }))
        .into_record()
        .unwrap();
        assert_eq!(record.country, "Chile");
        assert_eq!(record.continent, Continent::SouthAmerica);
        assert_eq!(record.income, 4500.5);
        assert_eq!(record.life_exp, 71.25);
        assert_eq!(record.population, 15_000_000);
    }

    #[test]
    fn missing_values_are_rejected() {
        let base = json!({
            "country": "Chad",
            "continent": "africa",
            "income": 800,
            "life_exp": "45",
            "population": 2000000
        });

        let mut no_income = base.clone();
        no_income["income"] = Value::Null;
        assert_eq!(
            raw(no_income).into_record(),
            Err(RecordError::MissingIncome)
        );

        let mut empty_life_exp = base.clone();
        empty_life_exp["life_exp"] = json!("");
        assert_eq!(
            raw(empty_life_exp).into_record(),
            Err(RecordError::MissingLifeExp)
        );

        let mut zero_income = base.clone();
        zero_income["income"] = json!(0);
        assert_eq!(
            raw(zero_income).into_record(),
            Err(RecordError::MissingIncome)
        );

        let mut no_population = base.clone();
        no_population.as_object_mut().unwrap().remove("population");
        assert_eq!(
            raw(no_population).into_record(),
            Err(RecordError::MissingPopulation)
        );

        assert!(raw(base).into_record().is_ok());
    }

    #[test]
    fn unparsable_values_are_rejected() {
        let record = raw(json!({
            "country": "Fiji",
            "continent": "Australia",
            "income": "lots",
            "life_exp": 60,
            "population": 800000
        }))
        .into_record();
        assert_eq!(record, Err(RecordError::InvalidIncome("lots".to_string())));

        let record = raw(json!({
            "country": "Fiji",
            "continent": "Australia",
            "income": 3000,
            "life_exp": true,
            "population": 800000
        }))
        .into_record();
        assert_eq!(record, Err(RecordError::InvalidLifeExp("true".to_string())));
    }

    #[test]
    fn from_json_str() {
        let json = dataset_json(json!({
            "year": "1800",
            "countries": [
                { "country": "China", "continent": "asia", "income": 985, "life_exp": 32, "population": 321675013 },
                { "country": "France", "continent": "europe", "income": null, "life_exp": 33.6, "population": 29355111 },
                { "country": "India", "continent": "asia", "income": "1032", "life_exp": "25.44", "population": 168574895 },
                { "country": "China", "continent": "asia", "income": 1, "life_exp": 1, "population": 1 }
            ]
        }));
        let dataset = Dataset::from_json_str(&json).unwrap();
        assert_eq!(dataset.year_count(), YEAR_COUNT);

        let first = dataset.snapshot(TimeIndex::first(), &ContinentFilter::All);
        let names: Vec<&str> = first.iter().map(CountryRecord::key).collect();
        assert_eq!(names, vec!["China", "India"]);
        assert_eq!(first.get("China").unwrap().income, 985.0);

        let last = dataset.snapshot(TimeIndex::last(), &ContinentFilter::All);
        assert!(last.is_empty());
    }

    #[test]
    fn filter_by_continent() {
        let json = dataset_json(json!({
            "countries": [
                { "country": "Kenya", "continent": "africa", "income": 500, "life_exp": 30, "population": 3000000 },
                { "country": "Japan", "continent": "asia", "income": 1200, "life_exp": 36, "population": 31000000 },
                { "country": "Spain", "continent": "europe", "income": 1800, "life_exp": 29, "population": 11000000 },
                { "country": "Nepal", "continent": "asia", "income": 700, "life_exp": 25, "population": 3800000 }
            ]
        }));
        let dataset = Dataset::from_json_str(&json).unwrap();
        let filter = ContinentFilter::Only(Continent::Asia);
        let snapshots = dataset.snapshots(&filter);
        assert_eq!(snapshots.len(), YEAR_COUNT);
        let names: Vec<&str> = snapshots[0].iter().map(CountryRecord::key).collect();
        assert_eq!(names, vec!["Japan", "Nepal"]);
        assert!(
            snapshots[0]
                .iter()
                .all(|record| record.continent == Continent::Asia)
        );
    }

    #[test]
    fn wrong_year_count() {
        let json = serde_json::to_string(&vec![json!({ "countries": [] }); 3]).unwrap();
        match Dataset::from_json_str(&json) {
            Err(DatasetError::YearCount { expected, found }) => {
                assert_eq!(expected, YEAR_COUNT);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            Dataset::from_json_str("{"),
            Err(DatasetError::Json(_))
        ));
        assert!(Dataset::from_snapshots(Vec::new()).is_err());
    }
}
