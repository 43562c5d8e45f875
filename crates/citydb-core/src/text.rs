// crates/citydb-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// City names are compared case-insensitively only; accents are significant,
/// so `São Paulo` and `Sao Paulo` stay distinct.
///
/// # Examples
///
/// ```rust
/// use citydb_core::text::fold_key;
///
/// assert_eq!(fold_key("LISBOA"), "lisboa");
/// assert_eq!(fold_key("ÉVORA"), "évora");
/// ```
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Compares two strings for equality after case folding.
///
/// ```rust
/// use citydb_core::text::equals_folded;
///
/// assert!(equals_folded("Porto", "pORTO"));
/// assert!(!equals_folded("Porto", "Porto "));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Returns `true` if the folded `haystack` contains the folded `needle`.
/// An empty needle matches everything.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_key(haystack).contains(&fold_key(needle))
}

/// Trims `s` and title-cases it.
///
/// Every alphabetic character that follows a non-alphabetic one (or starts
/// the string) is upper-cased, every other alphabetic character is
/// lower-cased. Applying it twice gives the same result as applying it once.
///
/// ```rust
/// use citydb_core::text::title_case;
///
/// assert_eq!(title_case("  rio de JANEIRO "), "Rio De Janeiro");
/// assert_eq!(title_case("vila nova de gaia"), "Vila Nova De Gaia");
/// assert_eq!(title_case("póvoa-de-varzim"), "Póvoa-De-Varzim");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.trim().chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
