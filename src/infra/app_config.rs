use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_INDEX_URL: &str =
    "https://raw.githubusercontent.com/PrismarineJS/minecraft-data/refs/heads/master/data/dataPaths.json";
pub const DEFAULT_DEFINITION_URL: &str = "https://raw.githubusercontent.com/PrismarineJS/minecraft-data/refs/heads/master/data/{edition}/{version}/protocol.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Collection of the version index to read (`pc`, `bedrock`).
    pub edition: String,
    pub index_url: String,
    /// Template with `{edition}` and `{version}` placeholders.
    pub definition_url: String,
    /// Local data checkout; takes precedence over the URLs.
    pub data_dir: Option<PathBuf>,
    pub default_original: String,
    pub default_modified: String,
    pub poll_interval_ms: u64,
    pub converter: ConverterConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            edition: "pc".to_string(),
            index_url: DEFAULT_INDEX_URL.to_string(),
            definition_url: DEFAULT_DEFINITION_URL.to_string(),
            data_dir: None,
            default_original: "1.8".to_string(),
            default_modified: "1.21.1".to_string(),
            poll_interval_ms: 50,
            converter: ConverterConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConverterConfig {
    #[default]
    Builtin,
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> AppConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return AppConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring invalid config {}: {}", path.display(), err);
            AppConfig::default()
        }
    }
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("PROTODIFF_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("PROTODIFF_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("protodiff");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("protodiff");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("protodiff");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".config").join("protodiff");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".protodiff")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(&dir.path().join("nope.toml"));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.edition, "pc");
        assert_eq!(config.default_original, "1.8");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
default_modified = "1.20.4"
data_dir = "/srv/minecraft-data/data"

[converter]
kind = "command"
program = "json2ts"
args = ["--pretty"]
"#,
        )
        .unwrap();

        let config = load_config_from(&path);
        assert_eq!(config.default_modified, "1.20.4");
        assert_eq!(config.default_original, "1.8");
        assert_eq!(
            config.data_dir.as_deref(),
            Some(Path::new("/srv/minecraft-data/data"))
        );
        assert_eq!(
            config.converter,
            ConverterConfig::Command {
                program: "json2ts".into(),
                args: vec!["--pretty".into()],
            }
        );
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "edition = [").unwrap();
        assert_eq!(load_config_from(&path), AppConfig::default());
    }
}
