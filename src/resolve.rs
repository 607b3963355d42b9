//! Free-text region name to canonical code resolution.
//!
//! Every supported country ships a static alias table (code -> accepted name
//! variants, lowercased) plus an optional qualifier pattern that strips
//! administrative words like "oblast" or "voivodeship" before lookup. The
//! resolver is a pure function of its inputs: normalize, then scan the table
//! for an exact alias match.

use crate::models::RegionCode;
use crate::regions::RegionSetId;
use regex::Regex;

/// One `(code, accepted names)` row of an alias table.
///
/// Alias strings are stored pre-normalized (lowercase, no `.`/`,`, no
/// qualifier words). Within one set no alias may appear under two codes;
/// that is enforced by tests over the static data, not at runtime.
pub type AliasEntry = (&'static str, &'static [&'static str]);

/// Descriptor for one region set: its alias table and normalization rule.
///
/// Obtain instances through [`RegionSetId::get`]; they are built once and
/// shared. Passing the set explicitly (rather than consulting a global)
/// keeps [`RegionSet::resolve`] pure and testable per set in isolation.
#[derive(Debug)]
pub struct RegionSet {
    pub(crate) id: RegionSetId,
    pub(crate) name: &'static str,
    pub(crate) qualifier: Option<Regex>,
    pub(crate) entries: &'static [AliasEntry],
}

impl RegionSet {
    pub fn id(&self) -> RegionSetId {
        self.id
    }

    /// Human-readable set name, e.g. `"Ukrainian oblasts"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All codes of this set, in table order.
    pub fn codes(&self) -> impl Iterator<Item = RegionCode> {
        self.entries.iter().map(|(code, _)| RegionCode(code))
    }

    /// All `(code, alias)` pairs of this set, in table order.
    pub fn aliases(&self) -> impl Iterator<Item = (RegionCode, &'static str)> {
        self.entries
            .iter()
            .flat_map(|(code, names)| names.iter().map(|n| (RegionCode(code), *n)))
    }

    /// Resolve a free-text region name to its canonical code.
    ///
    /// The input is normalized (see [`RegionSet::normalize`]) and compared
    /// for exact equality against every alias, scanning the table in order;
    /// the first match wins. Returns `None` when nothing matches; callers
    /// should drop such records, since real datasets routinely carry
    /// footnote rows or totals that have no code.
    ///
    /// ```
    /// use statsmap_rs::regions::RegionSetId;
    ///
    /// let ua = RegionSetId::Ukraine.get();
    /// assert_eq!(ua.resolve("Черкаська область").unwrap().as_str(), "CK");
    /// assert_eq!(ua.resolve(" CHERKASY ").unwrap().as_str(), "CK");
    /// assert!(ua.resolve("Atlantis").is_none());
    /// ```
    pub fn resolve(&self, raw: &str) -> Option<RegionCode> {
        let needle = self.normalize(raw);
        self.entries
            .iter()
            .find(|(_, names)| names.contains(&needle.as_str()))
            .map(|(code, _)| RegionCode(code))
    }

    /// Normalize a raw label with this set's qualifier rule.
    ///
    /// Steps, in order: lowercase; remove `.` and `,`; delete qualifier
    /// words (anywhere in the label, whole words only, together with the
    /// surrounding whitespace); trim. Idempotent. No stemming, no fuzzy
    /// matching, no diacritic folding: accented variants are separate table
    /// entries.
    pub fn normalize(&self, raw: &str) -> String {
        normalize_label(raw, self.qualifier.as_ref())
    }
}

/// Normalization pipeline shared by all region sets.
///
/// `qualifier` matches administrative words to delete (e.g.
/// `\s*\b(область|обл)\b\s*`); it is applied after lowercasing, so patterns
/// are written in lowercase and need no case-insensitive flag.
pub fn normalize_label(raw: &str, qualifier: Option<&Regex>) -> String {
    let lowered = raw.to_lowercase();
    let stripped: String = lowered.chars().filter(|c| *c != '.' && *c != ',').collect();
    let cleaned = match qualifier {
        Some(re) => re.replace_all(&stripped, "").into_owned(),
        None => stripped,
    };
    cleaned.trim().to_string()
}

/// Build the qualifier regex for a word list: `\s*\b(w1|w2|…)\b\s*`.
///
/// Qualifier words match anywhere in the label, but only as whole words.
/// Substring matching would eat the tail of legitimate names ("saarland"
/// contains "land") and break resolution of the set's own canonical aliases.
///
/// Word lists are static per-set data; a bad pattern is a programming error,
/// so construction panics rather than returning a `Result`.
pub(crate) fn qualifier_pattern(words: &[&str]) -> Regex {
    let pattern = format!(r"\s*\b({})\b\s*", words.join("|"));
    Regex::new(&pattern).expect("qualifier word list forms a valid regex")
}
