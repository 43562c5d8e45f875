// crates/citydb-core/src/form.rs

//! Validation of raw, user-typed input before it reaches the repository.
//!
//! The repository accepts any well-typed value; the rules that a name is
//! required and that area and population are strictly positive live here,
//! on the input side.

use crate::error::{CityError, Result};
use crate::model::{parse_area, CityPatch};
use crate::repository::CityRepository;
use crate::text::title_case;
use crate::City;

/// Raw text of an add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityForm {
    pub name: String,
    pub area: String,
    pub population: String,
}

/// A validated form, ready to be added.
#[derive(Debug, Clone, PartialEq)]
pub struct CityDraft {
    pub name: String,
    pub area: f64,
    pub population: u64,
}

impl CityForm {
    pub fn new(
        name: impl Into<String>,
        area: impl Into<String>,
        population: impl Into<String>,
    ) -> Self {
        CityForm {
            name: name.into(),
            area: area.into(),
            population: population.into(),
        }
    }

    pub fn validate(&self) -> Result<CityDraft> {
        Ok(CityDraft {
            name: required_name(&self.name)?,
            area: positive_area(&self.area)?,
            population: positive_population(&self.population)?,
        })
    }
}

impl CityDraft {
    pub fn add_to(self, repo: &mut CityRepository) -> Result<&City> {
        repo.add(&self.name, self.area, self.population)
    }
}

/// Raw text of an edit where blank fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchForm {
    pub name: Option<String>,
    pub area: Option<String>,
    pub population: Option<String>,
}

impl PatchForm {
    pub fn validate(&self) -> Result<CityPatch> {
        Ok(CityPatch {
            name: non_blank(&self.name).map(required_name).transpose()?,
            area: non_blank(&self.area).map(positive_area).transpose()?,
            population: non_blank(&self.population)
                .map(positive_population)
                .transpose()?,
        })
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

fn required_name(raw: &str) -> Result<String> {
    let name = title_case(raw);
    if name.is_empty() {
        return Err(CityError::Validation {
            field: "name",
            reason: "the city name is required".into(),
        });
    }
    Ok(name)
}

fn positive_area(raw: &str) -> Result<f64> {
    let area = parse_area(raw)?;
    if area <= 0.0 {
        return Err(CityError::Validation {
            field: "area",
            reason: "must be greater than zero".into(),
        });
    }
    Ok(area)
}

fn positive_population(raw: &str) -> Result<u64> {
    let population: i128 = raw.trim().parse().map_err(|_| CityError::TypeConversion {
        field: "population",
        value: raw.to_string(),
        row: None,
        reason: "expected a whole number".into(),
    })?;
    if population <= 0 {
        return Err(CityError::Validation {
            field: "population",
            reason: "must be greater than zero".into(),
        });
    }
    u64::try_from(population).map_err(|_| CityError::Validation {
        field: "population",
        reason: "is too large".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_form_is_normalized() {
        let draft = CityForm::new(" évora ", "1307.08", "53591").validate().unwrap();
        assert_eq!(draft.name, "Évora");
        assert_eq!(draft.area, 1307.08);
        assert_eq!(draft.population, 53_591);
    }

    #[test]
    fn missing_name_and_non_positive_numbers_fail_validation() {
        let err = CityForm::new("  ", "1", "1").validate().unwrap_err();
        assert!(matches!(err, CityError::Validation { field: "name", .. }));

        let err = CityForm::new("Elvas", "0", "1").validate().unwrap_err();
        assert!(matches!(err, CityError::Validation { field: "area", .. }));

        let err = CityForm::new("Elvas", "631.3", "-2").validate().unwrap_err();
        assert!(matches!(err, CityError::Validation { field: "population", .. }));
    }

    #[test]
    fn malformed_numbers_are_conversion_errors() {
        let err = CityForm::new("Elvas", "abc", "1").validate().unwrap_err();
        assert!(matches!(err, CityError::TypeConversion { field: "area", .. }));

        let err = CityForm::new("Elvas", "1", "1.5").validate().unwrap_err();
        assert!(matches!(err, CityError::TypeConversion { field: "population", .. }));
    }

    #[test]
    fn patch_form_skips_blank_fields() {
        let patch = PatchForm {
            name: Some("".into()),
            area: None,
            population: Some("42".into()),
        }
        .validate()
        .unwrap();
        assert_eq!(patch, CityPatch::new().with_population(42));
    }

    #[test]
    fn draft_lands_in_repository() {
        let mut repo = CityRepository::new();
        CityForm::new("setúbal", "230.33", "123684")
            .validate()
            .unwrap()
            .add_to(&mut repo)
            .unwrap();
        assert_eq!(repo.find_by_name("SETÚBAL").unwrap().population(), 123_684);
    }
}
