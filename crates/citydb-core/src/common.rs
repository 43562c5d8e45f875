use serde::Serialize;

/// Simple aggregate statistics for the repository.
///
/// Returned by [`CityRepository::stats`](crate::CityRepository::stats); the
/// figures reflect the in-memory contents at the time of the call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RepoStats {
    pub cities: usize,
    pub total_population: u128,
    pub total_area: f64,
}
