//! i Nails Art & Studio - desktop showcase for a beauty studio
//! Built with iced; content comes from a hosted content API with hardcoded
//! fallbacks, so the page renders completely even fully offline.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(1440.0, 960.0))
        .antialiasing(true)
        .run()
}
