//! Settings parser for .segbuild/config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use segbuild_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const SEGBUILD_DIR: &str = ".segbuild";

const DEFAULT_CONFIG: &str = r#"# Segment Builder Configuration

[webhook]
url = "https://webhook.site/your-custom-url"
# timeout_ms = 10000             # Uncomment to give up on slow endpoints
require_success_status = false   # true = non-2xx responses count as failures

[notifications]
duration_ms = 3000
position = "top_right"           # top_right | top_left | bottom_right | bottom_left
max_visible = 3
"#;

/// Path of the settings file under `base`
pub fn config_path(base: &Path) -> PathBuf {
    base.join(SEGBUILD_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<base>/.segbuild/config.toml`
///
/// A missing or unreadable file yields the defaults.
pub fn load_settings(base: &Path) -> Settings {
    let config_path = config_path(base);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file, leaving an existing one untouched
///
/// Returns the path of the config file.
pub fn init_config_dir(base: &Path) -> Result<PathBuf> {
    let segbuild_dir = base.join(SEGBUILD_DIR);

    if !segbuild_dir.exists() {
        std::fs::create_dir_all(&segbuild_dir)
            .map_err(|e| Error::config(format!("Failed to create .segbuild dir: {}", e)))?;
    }

    let config_path = segbuild_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToastPosition;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_load_settings_from_file() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(SEGBUILD_DIR)).unwrap();
        std::fs::write(
            config_path(dir.path()),
            r#"
[webhook]
url = "http://127.0.0.1:8080/hook"
require_success_status = true

[notifications]
duration_ms = 1000
position = "bottom_right"
"#,
        )
        .unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.webhook.url, "http://127.0.0.1:8080/hook");
        assert!(settings.webhook.require_success_status);
        assert_eq!(settings.notifications.duration_ms, 1000);
        assert_eq!(settings.notifications.position, ToastPosition::BottomRight);
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(SEGBUILD_DIR)).unwrap();
        std::fs::write(config_path(dir.path()), "[webhook\nurl = ").unwrap();

        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_init_writes_parseable_defaults() {
        let dir = tempdir().unwrap();
        let path = init_config_dir(dir.path()).unwrap();

        assert!(path.exists());
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(SEGBUILD_DIR)).unwrap();
        std::fs::write(config_path(dir.path()), "[webhook]\nurl = \"http://x/y\"\n").unwrap();

        init_config_dir(dir.path()).unwrap();

        assert_eq!(load_settings(dir.path()).webhook.url, "http://x/y");
    }
}
