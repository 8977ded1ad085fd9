use crate::api::SnipzApi;
use crate::config::SnipzConfig;
use crate::error::Result;
use crate::store::fs::JsonFileBackend;
use crate::store::SnippetStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the data file location (below `--file`, above the config file).
pub const ENV_DATA_FILE: &str = "SNIPZ_FILE";
/// Overrides the directory holding `config.json`.
pub const ENV_CONFIG_DIR: &str = "SNIPZ_CONFIG_DIR";

pub struct SnipzContext {
    pub api: SnipzApi<JsonFileBackend>,
    pub config: SnipzConfig,
}

/// Directory holding `config.json`: `$SNIPZ_CONFIG_DIR`, else the platform
/// config dir (e.g. `~/.config/snipz`), else `.snipz` in the working directory.
pub fn config_dir(cwd: &Path) -> PathBuf {
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "snipz", "snipz")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| cwd.join(".snipz"))
}

/// Pick the data file: an explicit path wins, then the configured one.
/// Relative paths resolve against `cwd`.
pub fn resolve_data_file(cwd: &Path, explicit: Option<PathBuf>, config: &SnipzConfig) -> PathBuf {
    let path = explicit.unwrap_or_else(|| PathBuf::from(&config.data_file));
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

pub fn initialize(cwd: &Path, file_override: Option<PathBuf>) -> Result<SnipzContext> {
    let config_dir = config_dir(cwd);
    let config = SnipzConfig::load(&config_dir).unwrap_or_else(|e| {
        log::warn!(
            "ignoring unreadable config in {}: {}",
            config_dir.display(),
            e
        );
        SnipzConfig::default()
    });

    let explicit = file_override.or_else(|| std::env::var_os(ENV_DATA_FILE).map(PathBuf::from));
    let data_file = resolve_data_file(cwd, explicit, &config);
    log::debug!("using data file {}", data_file.display());

    let store = SnippetStore::open(JsonFileBackend::new(&data_file))?;
    Ok(SnipzContext {
        api: SnipzApi::new(store),
        config,
    })
}
