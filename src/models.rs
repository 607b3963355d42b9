use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Canonical identifier for one region within a region set.
///
/// Codes are opaque short strings (`"CK"`, `"DE-BY"`, `"NLZH"`, …) drawn from
/// the static tables in [`crate::regions`]; no code is ever synthesized at
/// runtime. The only way to obtain one is through
/// [`RegionSet::resolve`](crate::resolve::RegionSet::resolve) or by
/// enumerating a set's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionCode(pub(crate) &'static str);

impl RegionCode {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// Serialize as a bare string so codes work as JSON object keys.
impl Serialize for RegionCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// The JSON envelope a stats-map dataset travels in.
///
/// ```json
/// {
///   "title": "Population of Ukraine",
///   "valueName": "million people",
///   "data": { "Київська область": 1.78, "Львівська": 2.51 }
/// }
/// ```
///
/// Keys under `data` are free-text labels (or already-canonical codes); run
/// them through [`crate::transform::resolve_data_keys`] to get a code-keyed
/// dataset. The envelope itself is not validated beyond JSON shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    pub title: String,
    pub value_name: String,
    pub data: BTreeMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_round_trips_camel_case() {
        let json = r#"{
            "title": "Population",
            "valueName": "mln",
            "data": { "kyiv": 2.95, "lviv": 0.72 }
        }"#;
        let md: MapData = serde_json::from_str(json).unwrap();
        assert_eq!(md.title, "Population");
        assert_eq!(md.value_name, "mln");
        assert_eq!(md.data.len(), 2);

        let back = serde_json::to_string(&md).unwrap();
        assert!(back.contains("\"valueName\""));
        assert!(!back.contains("value_name"));
    }

    #[test]
    fn region_code_serializes_as_string() {
        let code = RegionCode("CK");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"CK\"");
        assert_eq!(code.to_string(), "CK");
    }
}
