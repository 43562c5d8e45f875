// crates/citydb-core/src/repository.rs

//! # City Repository
//!
//! An ordered, in-memory list of [`City`] records. Insertion order is kept
//! and every query is a linear scan.
//!
//! Names are the lookup key but are not required to be unique: lookups,
//! updates and removals act on the first match in insertion order.
//!
//! The repository is not synchronized. Callers sharing one between threads
//! must put every mutating call behind the same lock.

use crate::common::RepoStats;
use crate::error::{CityError, Result};
use crate::loader::{open_table, Table};
use crate::model::{City, CityPatch};
use crate::traits::NameMatch;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct CityRepository {
    cities: Vec<City>,
}

impl CityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, City> {
        self.cities.iter()
    }

    /// Builds a city and appends it.
    pub fn add(&mut self, name: &str, area: f64, population: u64) -> Result<&City> {
        let city = City::new(name, area, population)?;
        tracing::debug!(name = city.name(), area, population, "adding city");
        self.cities.push(city);
        Ok(&self.cities[self.cities.len() - 1])
    }

    /// All cities in insertion order, or only those whose name contains
    /// `filter` (case-insensitive). `None` and `Some("")` both list everything.
    pub fn list(&self, filter: Option<&str>) -> Vec<&City> {
        match filter {
            Some(q) if !q.is_empty() => self.cities.iter().filter(|c| c.name_contains(q)).collect(),
            _ => self.cities.iter().collect(),
        }
    }

    /// First city whose name equals `name`, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.is_named(name))
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.cities
            .iter()
            .position(|c| c.is_named(name))
            .ok_or_else(|| CityError::NotFound(name.to_string()))
    }

    /// Overwrites the fields set in `patch` on the first city named
    /// `old_name`. The record keeps its position.
    pub fn update(&mut self, old_name: &str, patch: &CityPatch) -> Result<&City> {
        let idx = self.position(old_name)?;
        patch.apply(&mut self.cities[idx])?;
        let city = &self.cities[idx];
        tracing::debug!(old_name, name = city.name(), "updated city");
        Ok(city)
    }

    /// Removes and returns the first city named `name`.
    pub fn remove(&mut self, name: &str) -> Result<City> {
        let idx = self.position(name)?;
        let city = self.cities.remove(idx);
        tracing::debug!(name = city.name(), "removed city");
        Ok(city)
    }

    /// Appends one city per row of `table`, in row order.
    ///
    /// Nothing is added unless the header has all required columns and every
    /// row converts. Returns the number of cities added.
    pub fn bulk_import(&mut self, table: &Table) -> Result<usize> {
        let records = table.records().inspect_err(|e| {
            tracing::warn!(error = %e, "import rejected");
        })?;

        let imported = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                City::from_mapping(record).map_err(|e| e.at_row(table.row_number(i)))
            })
            .collect::<Result<Vec<_>>>()
            .inspect_err(|e| tracing::warn!(error = %e, "import rejected"))?;

        let count = imported.len();
        self.cities.extend(imported);
        tracing::info!(count, total = self.cities.len(), "imported cities");
        Ok(count)
    }

    /// Reads a CSV or spreadsheet file and imports it with [`Self::bulk_import`].
    pub fn import_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let table = open_table(path)?;
        self.bulk_import(&table)
    }

    /// The city with the largest area; the earliest one wins a tie.
    pub fn largest_by_area(&self) -> Option<&City> {
        first_max_by(&self.cities, |a, b| a.area() > b.area())
    }

    /// The city with the largest population; the earliest one wins a tie.
    pub fn most_populous(&self) -> Option<&City> {
        first_max_by(&self.cities, |a, b| a.population() > b.population())
    }

    /// Mean population, `0.0` when there are no cities.
    pub fn average_population(&self) -> f64 {
        if self.cities.is_empty() {
            return 0.0;
        }
        self.total_population() as f64 / self.cities.len() as f64
    }

    fn total_population(&self) -> u128 {
        self.cities.iter().map(|c| u128::from(c.population())).sum()
    }

    pub fn stats(&self) -> RepoStats {
        RepoStats {
            cities: self.cities.len(),
            total_population: self.total_population(),
            total_area: self.cities.iter().map(City::area).sum(),
        }
    }
}

impl<'a> IntoIterator for &'a CityRepository {
    type Item = &'a City;
    type IntoIter = std::slice::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.cities.iter()
    }
}

/// `Iterator::max_by` keeps the *last* maximum; the reports want the first.
fn first_max_by<'a>(cities: &'a [City], greater: impl Fn(&City, &City) -> bool) -> Option<&'a City> {
    cities
        .iter()
        .reduce(|best, c| if greater(c, best) { c } else { best })
}
