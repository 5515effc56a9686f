/**
 * Todo Desktop App - Main Entry Point
 *
 * Reads `CLIENT_API_URL` / `CLIENT_USER_ID` (optionally from `.env`) and
 * opens the todo window.
 */
use eframe::egui;
use todolist::egui_app::{Config, TodoApp};

fn main() -> Result<(), eframe::Error> {
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,todolist=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::new();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([360.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Todos",
        options,
        Box::new(move |cc| {
            let app = TodoApp::new(config, &cc.egui_ctx)?;
            Ok(Box::new(app))
        }),
    )
}
