use std::path::{Path, PathBuf};

/// File the zoo snapshot is written to when no other path is given.
pub const DEFAULT_STATE_FILE: &str = "zoo_state.json";

pub const DEFAULT_ZOO_NAME: &str = "Kazan Zoo";

#[derive(Debug, Clone)]
pub struct ZooConfig {
    pub zoo_name:   String,
    pub state_path: PathBuf,
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            zoo_name:   DEFAULT_ZOO_NAME.into(),
            state_path: PathBuf::from(DEFAULT_STATE_FILE),
        }
    }
}

impl ZooConfig {
    /// Default config with the state file placed under `dir`.
    /// In tests, pair this with a tempdir.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            state_path: dir.as_ref().join(DEFAULT_STATE_FILE),
            ..Self::default()
        }
    }
}
