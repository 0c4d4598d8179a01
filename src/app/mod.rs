//! UI layer for the study deck.
//!
//! This module owns all GUI state and messages. Each page loads its own
//! manifest through `Effect`s; only the theme is shared between pages.

mod messages;
mod state;
mod update;
mod view;

pub use state::{App, LaunchPage};

use crate::config::AppConfig;
use crate::theme::ThemeToggle;
use iced::{Size, window};

/// Open the window on `launch` and run until it closes.
pub fn run_app(config: AppConfig, theme: ThemeToggle, launch: LaunchPage) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| app.theme.iced_theme())
        .run_with(move || App::bootstrap(config, theme, launch))
}
