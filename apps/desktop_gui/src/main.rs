mod backend_bridge;
mod controller;
mod ui;

use anyhow::Result;
use clap::Parser;
use eframe::egui;
use storage::config::{load_settings, prepare_database_url};

use crate::{backend_bridge::Backend, ui::BankDeskApp};

const WINDOW_TITLE: &str = "Bank Account Management System";

#[derive(Parser, Debug)]
struct Args {
    /// Overrides bank_desk.toml and the DATABASE_URL environment variables.
    #[arg(long)]
    database_url: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let backend = match open_backend(args.database_url) {
        Ok(backend) => backend,
        Err(err) => {
            tracing::error!(
                error = %format!("{err:#}"),
                "failed to connect to the account database"
            );
            ui::dialogs::show_connection_failure(&err);
            return Err(err);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(BankDeskApp::new(backend)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop window failed: {err}"))
}

fn open_backend(database_url: Option<String>) -> Result<Backend> {
    let raw_database_url = match database_url {
        Some(url) => url,
        None => load_settings()?.database_url,
    };
    let database_url = prepare_database_url(&raw_database_url)?;
    tracing::info!(%database_url, "opening account database");
    Backend::open(&database_url)
}
