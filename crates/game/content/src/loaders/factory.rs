//! Content factory for loading combat data from a directory.

use std::path::{Path, PathBuf};

use skirmish_core::{CombatConfig, SkillOracle, Unit};

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader};

/// Loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── rosters/
///     ├── blue_army.ron
///     └── red_army.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat configuration from `config.toml`, falling back to the
    /// defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a roster from `rosters/{name}.ron`.
    pub fn load_roster(
        &self,
        name: &str,
        oracle: &(impl SkillOracle + ?Sized),
    ) -> LoadResult<Vec<Unit>> {
        let path = self.data_dir.join("rosters").join(format!("{}.ron", name));
        RosterLoader::load(&path, oracle)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard_catalog;
    use tempfile::TempDir;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), CombatConfig::default());
    }

    #[test]
    fn loads_named_roster() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("rosters")).unwrap();
        std::fs::write(
            dir.path().join("rosters").join("red_army.ron"),
            r#"[(id: 7, name: "Cleric", stats: (hp: 30, atk: 20, spd: 25, def: 10, res: 30), skills: ["Gravity"])]"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let roster = factory.load_roster("red_army", &standard_catalog()).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].range(), 2);
        assert!(factory.load_roster("blue_army", &standard_catalog()).is_err());
    }
}
