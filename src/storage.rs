use crate::models::{MapData, RegionCode};
use anyhow::Result;
use csv::WriterBuilder;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a dataset file could not be loaded.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dataset JSON in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a `{title, valueName, data}` envelope from a JSON file.
pub fn load_map_data<P: AsRef<Path>>(path: P) -> Result<MapData, DatasetError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a resolved dataset as two-column CSV with header.
pub fn save_csv<P: AsRef<Path>>(resolved: &BTreeMap<RegionCode, f64>, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("code", "value"))?;
    for (code, value) in resolved {
        wtr.serialize((code.as_str(), value))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a resolved dataset as a pretty JSON object keyed by code.
pub fn save_json<P: AsRef<Path>>(resolved: &BTreeMap<RegionCode, f64>, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(resolved)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::RegionSetId;
    use crate::transform::resolve_data_keys;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");

        let ua = RegionSetId::Ukraine.get();
        let data = [("Львівська".to_string(), 2.51)].into_iter().collect();
        let resolved = resolve_data_keys(ua, &data);

        save_csv(&resolved, &csvp).unwrap();
        save_json(&resolved, &jsonp).unwrap();

        let csv_text = std::fs::read_to_string(&csvp).unwrap();
        assert!(csv_text.starts_with("code,value"));
        assert!(csv_text.contains("LV,2.51"));

        let json_text = std::fs::read_to_string(&jsonp).unwrap();
        let round: BTreeMap<String, f64> = serde_json::from_str(&json_text).unwrap();
        assert_eq!(round.get("LV"), Some(&2.51));
    }

    #[test]
    fn load_rejects_malformed_envelope() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("bad.json");
        std::fs::write(&p, r#"{"title": 3}"#).unwrap();
        assert!(matches!(load_map_data(&p), Err(DatasetError::Parse { .. })));
        assert!(matches!(
            load_map_data(dir.path().join("absent.json")),
            Err(DatasetError::Io { .. })
        ));
    }
}
