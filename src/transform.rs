//! Re-key a raw `{label: value}` dataset by canonical region codes.

use crate::models::{MapData, RegionCode};
use crate::resolve::RegionSet;
use std::collections::BTreeMap;

/// Resolve every key of `data` against `set`, keeping only the labels that
/// map to a code.
///
/// Unresolvable labels (footnote rows, national totals, typos) are dropped
/// silently: expected, not an error. Each drop is traced at debug level.
/// When two labels resolve to the same code the later one (in key order)
/// wins.
pub fn resolve_data_keys(
    set: &RegionSet,
    data: &BTreeMap<String, f64>,
) -> BTreeMap<RegionCode, f64> {
    let mut resolved = BTreeMap::new();
    for (label, value) in data {
        match set.resolve(label) {
            Some(code) => {
                resolved.insert(code, *value);
            }
            None => log::debug!("no {} code for label {label:?}, dropping", set.id()),
        }
    }
    resolved
}

/// [`resolve_data_keys`] applied to a dataset envelope.
pub fn resolve_map_data(set: &RegionSet, map_data: &MapData) -> BTreeMap<RegionCode, f64> {
    resolve_data_keys(set, &map_data.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::RegionSetId;

    fn raw(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn unknown_labels_are_dropped_without_error() {
        let ua = RegionSetId::Ukraine.get();
        let data = raw(&[("Черкаська", 10.0), ("Невідомо", 99.0)]);
        let resolved = resolve_data_keys(ua, &data);
        assert_eq!(resolved.len(), 1);
        let (code, value) = resolved.iter().next().unwrap();
        assert_eq!(code.as_str(), "CK");
        assert_eq!(*value, 10.0);
    }

    #[test]
    fn mixed_scripts_and_qualifiers_resolve() {
        let ua = RegionSetId::Ukraine.get();
        let data = raw(&[
            ("Київська область", 1.78),
            ("LVIV", 2.51),
            ("одеська обл.", 2.35),
        ]);
        let resolved = resolve_data_keys(ua, &data);
        let codes: Vec<&str> = resolved.keys().map(|c| c.as_str()).collect();
        assert_eq!(codes, vec!["KV", "LV", "OD"]);
    }

    #[test]
    fn values_pass_through_untouched() {
        let de = RegionSetId::Germany.get();
        let data = raw(&[("Bavaria", 13.18), ("Berlin", 3.76)]);
        let resolved = resolve_data_keys(de, &data);
        assert_eq!(resolved.values().copied().collect::<Vec<_>>(), vec![3.76, 13.18]);
    }
}
