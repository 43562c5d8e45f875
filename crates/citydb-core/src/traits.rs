// crates/citydb-core/src/traits.rs
use crate::text::{contains_folded, equals_folded};

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their canonical name via
/// [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`] — case-insensitive equality
/// - [`NameMatch::name_contains`] — case-insensitive substring match
///
/// # Examples
/// ```rust
/// use citydb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Braga").is_named("BRAGA"));
/// assert!(Place("Guimarães").name_contains("marã"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }

    /// Case-insensitive substring match. An empty `q` matches every name.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        contains_folded(self.name_str(), q)
    }
}
