use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative locations tried for `configs/urania.toml`, from the workspace
/// root and from a member crate directory.
pub const CONFIG_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisSettings {
    /// Swiss Ephemeris data directory; `None` defers to `SWISS_EPHEMERIS_PATH`.
    pub path: Option<PathBuf>,
    pub prefer_real: bool,
    pub per_body_fallback: bool,
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            path: None,
            prefer_real: true,
            per_body_fallback: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSettings {
    pub default_house_system: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            default_house_system: default_house_system(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UraniaSettings {
    pub ephemeris: EphemerisSettings,
    pub chart: ChartSettings,
    /// File the settings came from; `None` when defaults were used.
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default = "default_true")]
    prefer_real: bool,
    #[serde(default)]
    per_body_fallback: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartToml {
    #[serde(default = "default_house_system")]
    default_house_system: String,
}

fn default_true() -> bool {
    true
}

fn default_house_system() -> String {
    "placidus".to_string()
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: Option<EphemerisToml>,
    #[serde(default)]
    chart: Option<ChartToml>,
}

/// Try the common relative paths for `configs/urania.toml`.
///
/// Returns `None` when no candidate exists.
pub fn read_config_toml_text() -> anyhow::Result<Option<(PathBuf, String)>> {
    for p in &CONFIG_PATHS {
        let path = Path::new(p);
        if path.is_file() {
            let text = fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
            return Ok(Some((path.to_path_buf(), text)));
        }
    }
    Ok(None)
}

/// Parse settings from TOML text. Missing sections and keys take defaults.
pub fn parse_settings(text: &str) -> anyhow::Result<UraniaSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;

    let ephemeris = match root.ephemeris {
        Some(EphemerisToml {
            path,
            prefer_real,
            per_body_fallback,
        }) => EphemerisSettings {
            path,
            prefer_real,
            per_body_fallback,
        },
        None => EphemerisSettings::default(),
    };

    let chart = match root.chart {
        Some(ChartToml {
            default_house_system,
        }) => {
            if default_house_system.trim().is_empty() {
                anyhow::bail!("chart.default_house_system must not be empty");
            }
            ChartSettings {
                default_house_system,
            }
        }
        None => ChartSettings::default(),
    };

    Ok(UraniaSettings {
        ephemeris,
        chart,
        source: None,
    })
}

/// Load settings from an explicit file, or from the first of
/// [`CONFIG_PATHS`] that exists.
///
/// An explicit path must exist. Without one, a missing file means defaults;
/// a malformed file is always an error.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<UraniaSettings> {
    let found = match explicit {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| {
                anyhow::anyhow!("Could not load config from {}: {e}", path.display())
            })?;
            Some((path.to_path_buf(), text))
        }
        None => read_config_toml_text()?,
    };

    match found {
        Some((path, text)) => {
            let mut settings = parse_settings(&text)
                .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?;
            settings.source = Some(path);
            Ok(settings)
        }
        None => Ok(UraniaSettings::default()),
    }
}
