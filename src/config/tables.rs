use super::defaults;
use super::models::{AppConfig, LogLevel, ViewMode};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    content: ContentConfig,
    #[serde(default)]
    ui: UiConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            content_root: tables.content.root,
            notes_manifest: tables.content.notes_manifest,
            catalog_manifest: tables.content.catalog_manifest,
            download_dir: tables.content.download_dir,
            preferences_path: tables.content.preferences_path,
            show_theme_toggle: tables.ui.show_theme_toggle,
            default_view_mode: tables.ui.default_view_mode,
            grid_columns: tables.ui.grid_columns,
            window_width: tables.ui.window_width,
            window_height: tables.ui.window_height,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            content: ContentConfig {
                root: config.content_root.clone(),
                notes_manifest: config.notes_manifest.clone(),
                catalog_manifest: config.catalog_manifest.clone(),
                download_dir: config.download_dir.clone(),
                preferences_path: config.preferences_path.clone(),
            },
            ui: UiConfig {
                show_theme_toggle: config.show_theme_toggle,
                default_view_mode: config.default_view_mode,
                grid_columns: config.grid_columns,
                window_width: config.window_width,
                window_height: config.window_height,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ContentConfig {
    #[serde(default = "defaults::default_content_root")]
    root: String,
    #[serde(default = "defaults::default_notes_manifest")]
    notes_manifest: String,
    #[serde(default = "defaults::default_catalog_manifest")]
    catalog_manifest: String,
    #[serde(default = "defaults::default_download_dir")]
    download_dir: String,
    #[serde(default = "defaults::default_preferences_path")]
    preferences_path: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            root: defaults::default_content_root(),
            notes_manifest: defaults::default_notes_manifest(),
            catalog_manifest: defaults::default_catalog_manifest(),
            download_dir: defaults::default_download_dir(),
            preferences_path: defaults::default_preferences_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct UiConfig {
    #[serde(default = "defaults::default_show_theme_toggle")]
    show_theme_toggle: bool,
    #[serde(default)]
    default_view_mode: ViewMode,
    #[serde(default = "defaults::default_grid_columns")]
    grid_columns: usize,
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_theme_toggle: defaults::default_show_theme_toggle(),
            default_view_mode: ViewMode::default(),
            grid_columns: defaults::default_grid_columns(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
