//! Rebound - an animated play button
//! Built with iced: glyphs spring into place on tap, a tinted circle and a
//! scale-down give press feedback

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    // Initialize tracing for logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = features::Settings::load();
    let window_size = settings.window_size();

    iced::application(
        move || app::App::new(settings.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .subscription(app::App::subscription)
    .window_size(window_size)
    .antialiasing(true)
    .run()
}
