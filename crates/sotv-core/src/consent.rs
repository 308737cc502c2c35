//! One-time legal consent flag, persisted as JSON under the XDG state dir.
//!
//! The file is a small key/value map so the flag lives under a fixed key,
//! e.g. `{"ci_legal_accepted": true}`.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key under which acceptance is stored.
pub const LEGAL_ACCEPTED_KEY: &str = "ci_legal_accepted";

#[derive(Debug, Clone)]
pub struct ConsentStore {
    path: PathBuf,
}

impl ConsentStore {
    /// Default path: `~/.local/state/sotv/consent.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("sotv")?;
        Ok(xdg_dirs.get_state_home().join("sotv").join("consent.json"))
    }

    pub fn open_default() -> Result<Self> {
        Ok(Self::at(Self::default_path()?))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True once the disclaimer has been accepted. A missing file means not accepted.
    pub fn is_accepted(&self) -> Result<bool> {
        Ok(self
            .read_map()?
            .get(LEGAL_ACCEPTED_KEY)
            .copied()
            .unwrap_or(false))
    }

    /// Persist acceptance (creates the parent dir if needed). Other keys are preserved.
    pub fn accept(&self) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(LEGAL_ACCEPTED_KEY.to_string(), true);
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&map).context("serialize consent")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write consent: {}", self.path.display()))?;
        Ok(())
    }

    fn read_map(&self) -> Result<BTreeMap<String, bool>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("read consent: {}", self.path.display()))
            }
        };
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parse consent: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConsentStore::at(dir.path().join("consent.json"));
        assert!(!store.is_accepted().unwrap());
    }

    #[test]
    fn accept_persists_under_fixed_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("consent.json");
        let store = ConsentStore::at(&path);
        store.accept().unwrap();
        assert!(store.is_accepted().unwrap());
        assert!(ConsentStore::at(&path).is_accepted().unwrap());

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains(LEGAL_ACCEPTED_KEY));
    }

    #[test]
    fn accept_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("consent.json");
        std::fs::write(&path, r#"{"other_flag": true}"#).unwrap();
        let store = ConsentStore::at(&path);
        store.accept().unwrap();
        let map: BTreeMap<String, bool> =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(map.get("other_flag"), Some(&true));
        assert_eq!(map.get(LEGAL_ACCEPTED_KEY), Some(&true));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("consent.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(ConsentStore::at(&path).is_accepted().is_err());
    }
}
