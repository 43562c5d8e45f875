// crates/citydb-core/src/model.rs
use crate::error::{CityError, Result};
use crate::text::title_case;
use crate::traits::NameMatch;
use serde::Serialize;
use serde_json::{Map, Value};

/// Column / key holding the city name.
pub const COLUMN_NAME: &str = "nome";
/// Column / key holding the area in km².
pub const COLUMN_AREA: &str = "dimensao";
/// Column / key holding the population count.
pub const COLUMN_POPULATION: &str = "populacao";

/// The three keys every import source and every mapping must carry, in order.
pub const REQUIRED_COLUMNS: [&str; 3] = [COLUMN_NAME, COLUMN_AREA, COLUMN_POPULATION];

/// A `{nome, dimensao, populacao}` mapping, the transport shape of a [`City`]
/// (one spreadsheet row, one JSON object).
pub type CityMapping = Map<String, Value>;

/// A named place with an area (km²) and a population count.
///
/// The name is always trimmed, title-cased and non-empty; the area is always
/// finite. Positivity is checked by the input side (see [`crate::form`]).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct City {
    #[serde(rename = "nome")]
    name: String,
    #[serde(rename = "dimensao")]
    area: f64,
    #[serde(rename = "populacao")]
    population: u64,
}

impl City {
    pub fn new(name: &str, area: f64, population: u64) -> Result<Self> {
        Ok(City {
            name: normalize_name(name)?,
            area: check_area(area)?,
            population,
        })
    }

    /// Builds a city from raw text, as typed into a form or read from CSV.
    pub fn parse(name: &str, area: &str, population: &str) -> Result<Self> {
        City::new(name, parse_area(area)?, parse_population(population)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn to_mapping(&self) -> CityMapping {
        let mut map = Map::new();
        map.insert(COLUMN_NAME.to_string(), Value::from(self.name.clone()));
        map.insert(COLUMN_AREA.to_string(), Value::from(self.area));
        map.insert(COLUMN_POPULATION.to_string(), Value::from(self.population));
        map
    }

    /// Rebuilds a city from a mapping. Text and numeric values are both
    /// accepted for `dimensao` and `populacao`; a missing key or a `null`
    /// value is a conversion error.
    pub fn from_mapping(map: &CityMapping) -> Result<Self> {
        let name = coerce_name(map.get(COLUMN_NAME).unwrap_or(&Value::Null))?;
        let area = coerce_area(map.get(COLUMN_AREA).unwrap_or(&Value::Null))?;
        let population = coerce_population(map.get(COLUMN_POPULATION).unwrap_or(&Value::Null))?;
        City::new(&name, area, population)
    }
}

impl NameMatch for City {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Partial update: every field left as `None` keeps its current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CityPatch {
    pub name: Option<String>,
    pub area: Option<f64>,
    pub population: Option<u64>,
}

impl CityPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.area.is_none() && self.population.is_none()
    }

    /// Applies the set fields to `city`. Nothing is written unless every set
    /// field is valid.
    pub(crate) fn apply(&self, city: &mut City) -> Result<()> {
        let name = self.name.as_deref().map(normalize_name).transpose()?;
        let area = self.area.map(check_area).transpose()?;

        if let Some(name) = name {
            city.name = name;
        }
        if let Some(area) = area {
            city.area = area;
        }
        if let Some(population) = self.population {
            city.population = population;
        }
        Ok(())
    }
}

fn normalize_name(raw: &str) -> Result<String> {
    let name = title_case(raw);
    if name.is_empty() {
        return Err(CityError::conversion("name", raw, "name is empty"));
    }
    Ok(name)
}

fn check_area(area: f64) -> Result<f64> {
    if !area.is_finite() {
        return Err(CityError::conversion(
            "area",
            area.to_string(),
            "expected a finite number",
        ));
    }
    Ok(area)
}

/// Parses a real number, ignoring surrounding whitespace.
pub(crate) fn parse_area(raw: &str) -> Result<f64> {
    let area = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| CityError::conversion("area", raw, "expected a number"))?;
    check_area(area)
}

/// Parses a whole, non-negative number, ignoring surrounding whitespace.
pub(crate) fn parse_population(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| CityError::conversion("population", raw, "expected a whole number"))
}

fn coerce_name(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Err(CityError::conversion("name", "", "value is missing")),
        other => Err(CityError::conversion("name", other.to_string(), "expected text")),
    }
}

fn coerce_area(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| CityError::conversion("area", n.to_string(), "expected a number")),
        Value::String(s) => parse_area(s),
        Value::Null => Err(CityError::conversion("area", "", "value is missing")),
        other => Err(CityError::conversion("area", other.to_string(), "expected a number")),
    }
}

fn coerce_population(value: &Value) -> Result<u64> {
    match value {
        Value::Number(n) => {
            if let Some(p) = n.as_u64() {
                return Ok(p);
            }
            // Spreadsheets store every number as a float; drop the fraction.
            // `u64::MAX as f64` rounds up to 2^64, which is already out of range.
            match n.as_f64() {
                Some(f) if f.is_finite() && f >= 0.0 && f < u64::MAX as f64 => {
                    Ok(f.trunc() as u64)
                }
                _ => Err(CityError::conversion(
                    "population",
                    n.to_string(),
                    "expected a whole number",
                )),
            }
        }
        Value::String(s) => parse_population(s),
        Value::Null => Err(CityError::conversion("population", "", "value is missing")),
        other => Err(CityError::conversion(
            "population",
            other.to_string(),
            "expected a whole number",
        )),
    }
}
