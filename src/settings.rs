use crate::logger;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const REQUIRED_SETTINGS_VERSION: u64 = 1;
pub const SETTINGS_FILE: &str = "vocab-practice.json";

/// User-tunable settings, merged over these defaults from the
/// `APP_SETTINGS` object of the settings file. Missing fields keep their
/// default, so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub title: String,
    /// "en" or "pl".
    #[serde(rename = "Language")]
    pub language: String,
    /// Directory scanned for .txt word lists.
    pub wordlist_dir: String,
    /// Accent color name for the UI (cyan, yellow, green, ...).
    pub accent_color: String,
    /// Show `$ context $` group labels on the practice screen.
    pub show_context: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            title: "Vocabulary Practice App".to_string(),
            language: "en".to_string(),
            wordlist_dir: "wordlists".to_string(),
            accent_color: "cyan".to_string(),
            show_context: true,
        }
    }
}

/// Why (or whether) the settings file was merged. Diagnostic only: whatever
/// the status, the returned settings are always usable.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsStatus {
    Loaded,
    /// Mismatch, but IGNORE_VERSION_ERROR was set; the merge still happened.
    VersionIgnored { found: u64 },
    VersionMismatch { found: u64 },
    FileNotFound,
    DecodeError(String),
}

#[derive(Debug, Deserialize)]
struct SettingsFile {
    #[serde(rename = "VERSION")]
    version: u64,
    #[serde(rename = "IGNORE_VERSION_ERROR", default)]
    ignore_version_error: bool,
    #[serde(rename = "APP_SETTINGS", default)]
    app_settings: AppSettings,
}

/// Loads settings, falling back to defaults on any problem. The version
/// field must equal [`REQUIRED_SETTINGS_VERSION`] unless the file sets
/// `IGNORE_VERSION_ERROR`.
pub fn load_settings(path: &Path) -> (SettingsStatus, AppSettings) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            logger::log(&format!(
                "Settings file {} not found, using defaults",
                path.display()
            ));
            return (SettingsStatus::FileNotFound, AppSettings::default());
        }
    };

    let file: SettingsFile = match serde_json::from_str(&content) {
        Ok(file) => file,
        Err(err) => {
            logger::log(&format!("Settings decode error: {}", err));
            return (
                SettingsStatus::DecodeError(err.to_string()),
                AppSettings::default(),
            );
        }
    };

    if file.version != REQUIRED_SETTINGS_VERSION {
        if file.ignore_version_error {
            logger::log(&format!(
                "Settings version {} does not match required {}, error ignored",
                file.version, REQUIRED_SETTINGS_VERSION
            ));
            return (
                SettingsStatus::VersionIgnored {
                    found: file.version,
                },
                file.app_settings,
            );
        }
        logger::log(&format!(
            "Settings version {} does not match required {}, using defaults",
            file.version, REQUIRED_SETTINGS_VERSION
        ));
        return (
            SettingsStatus::VersionMismatch {
                found: file.version,
            },
            AppSettings::default(),
        );
    }

    (SettingsStatus::Loaded, file.app_settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_settings(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_valid_settings() {
        let file = write_settings(
            r#"{"VERSION": 1, "APP_SETTINGS": {"Language": "pl", "accent_color": "yellow"}}"#,
        );
        let (status, settings) = load_settings(file.path());
        assert_eq!(status, SettingsStatus::Loaded);
        assert_eq!(settings.language, "pl");
        assert_eq!(settings.accent_color, "yellow");
        // Unspecified fields keep their defaults.
        assert_eq!(settings.wordlist_dir, "wordlists");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let (status, settings) = load_settings(Path::new("no/such/settings.json"));
        assert_eq!(status, SettingsStatus::FileNotFound);
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_decode_error_uses_defaults() {
        let file = write_settings("{not json");
        let (status, settings) = load_settings(file.path());
        assert!(matches!(status, SettingsStatus::DecodeError(_)));
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_version_mismatch_uses_defaults() {
        let file = write_settings(r#"{"VERSION": 2, "APP_SETTINGS": {"Language": "pl"}}"#);
        let (status, settings) = load_settings(file.path());
        assert_eq!(status, SettingsStatus::VersionMismatch { found: 2 });
        assert_eq!(settings.language, "en");
    }

    #[test]
    fn test_version_mismatch_ignored_still_merges() {
        let file = write_settings(
            r#"{"VERSION": 2, "IGNORE_VERSION_ERROR": true, "APP_SETTINGS": {"Language": "pl"}}"#,
        );
        let (status, settings) = load_settings(file.path());
        assert_eq!(status, SettingsStatus::VersionIgnored { found: 2 });
        assert_eq!(settings.language, "pl");
    }

    #[test]
    fn test_missing_app_settings_object_uses_defaults() {
        let file = write_settings(r#"{"VERSION": 1}"#);
        let (status, settings) = load_settings(file.path());
        assert_eq!(status, SettingsStatus::Loaded);
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_missing_version_field_is_decode_error() {
        let file = write_settings(r#"{"APP_SETTINGS": {}}"#);
        let (status, _) = load_settings(file.path());
        assert!(matches!(status, SettingsStatus::DecodeError(_)));
    }
}
