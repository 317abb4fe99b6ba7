use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_CONFIG: &str = "umbra.toml";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub viewer: ViewerConfig,
    pub check: CheckConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    pub width: usize,
    pub height: usize,
    pub radius: i32,
    pub max_radius: i32,
    pub color: bool,
    pub debug: bool,
    /// Fixed seed for the observer's starting cell; random when absent.
    pub seed: Option<u64>,
    /// Map file; the built-in dungeon when absent.
    pub map: Option<PathBuf>,
    pub watch_map: bool,
    pub log_file: PathBuf,
    pub poll_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 79,
            height: 22,
            radius: 7,
            max_radius: 80,
            color: true,
            debug: false,
            seed: None,
            map: None,
            watch_map: true,
            log_file: PathBuf::from("umbra.log"),
            poll_ms: 250,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CheckConfig {
    /// Run the fixtures compiled into the binary.
    pub builtin: bool,
    /// Extra directories of `*.txt` fixtures.
    pub dirs: Vec<PathBuf>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            dirs: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// An explicit path must load. Without one, `umbra.toml` in the working
    /// directory is used if it exists.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        match explicit {
            Some(p) => Self::load_from_path(p).map_err(|e| format!("{}: {}", p.display(), e).into()),
            None => {
                let p = Path::new(DEFAULT_CONFIG);
                if p.exists() {
                    Self::load_from_path(p)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.viewer.width, 79);
        assert_eq!(cfg.viewer.height, 22);
        assert_eq!(cfg.viewer.radius, 7);
        assert_eq!(cfg.viewer.max_radius, 80);
        assert!(cfg.check.builtin);
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let cfg = Config::from_toml_str(
            r#"
            [viewer]
            radius = 3
            seed = 42
            map = "maps/dungeon.txt"

            [check]
            dirs = ["fixtures"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.viewer.radius, 3);
        assert_eq!(cfg.viewer.seed, Some(42));
        assert_eq!(cfg.viewer.map, Some(PathBuf::from("maps/dungeon.txt")));
        assert!(cfg.viewer.color);
        assert_eq!(cfg.check.dirs, vec![PathBuf::from("fixtures")]);
        assert!(cfg.check.builtin);
    }

    #[test]
    fn bad_types_are_rejected() {
        assert!(Config::from_toml_str("[viewer]\nradius = \"wide\"").is_err());
    }

    #[test]
    fn missing_explicit_config_names_the_path() {
        let err = Config::resolve(Some(Path::new("/no/such/umbra.toml"))).unwrap_err();
        assert!(err.to_string().starts_with("/no/such/umbra.toml"));
    }
}
