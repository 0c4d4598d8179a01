pub(crate) fn default_content_root() -> String {
    "site".to_string()
}

pub(crate) fn default_notes_manifest() -> String {
    "notes.json".to_string()
}

pub(crate) fn default_catalog_manifest() -> String {
    "knowledge-checks.json".to_string()
}

pub(crate) fn default_download_dir() -> String {
    "downloads".to_string()
}

pub(crate) fn default_preferences_path() -> String {
    ".cache/preferences.toml".to_string()
}

pub(crate) fn default_show_theme_toggle() -> bool {
    true
}

pub(crate) fn default_grid_columns() -> usize {
    4
}

pub(crate) fn default_window_width() -> f32 {
    1100.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
