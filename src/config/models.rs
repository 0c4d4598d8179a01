use serde::Deserialize;

/// High-level app configuration, flattened from the TOML tables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub content_root: String,
    pub notes_manifest: String,
    pub catalog_manifest: String,
    pub download_dir: String,
    pub preferences_path: String,
    pub show_theme_toggle: bool,
    pub default_view_mode: ViewMode,
    pub grid_columns: usize,
    pub window_width: f32,
    pub window_height: f32,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            content_root: crate::config::defaults::default_content_root(),
            notes_manifest: crate::config::defaults::default_notes_manifest(),
            catalog_manifest: crate::config::defaults::default_catalog_manifest(),
            download_dir: crate::config::defaults::default_download_dir(),
            preferences_path: crate::config::defaults::default_preferences_path(),
            show_theme_toggle: crate::config::defaults::default_show_theme_toggle(),
            default_view_mode: ViewMode::Grid,
            grid_columns: crate::config::defaults::default_grid_columns(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

/// Presentational layout of the gallery.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
