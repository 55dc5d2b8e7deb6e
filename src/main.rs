//! HRMS Pro console - attendance dashboard in the terminal
//!
//! Mirrors the HRMS Pro API's employees and stats, and drives every change
//! through the server before re-reading both.

mod api;
mod app;
mod components;
mod config;
mod handlers;
mod models;
mod theme;
mod toast;

use std::io::Write;

use anyhow::{Context, Result};
use smol::io::{AsyncBufReadExt, BufReader};
use smol::stream::StreamExt;
use smol::Unblock;
use tracing_subscriber::EnvFilter;

use api::ApiClient;
use app::App;
use config::AppConfig;
use models::Command;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn print_screen(app: &mut App) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", app.render())?;
    if let Some(messages) = app.render_messages() {
        writeln!(stdout, "{}\n", messages)?;
    }
    write!(stdout, "> ")?;
    stdout.flush().context("flushing stdout")
}

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing();

    let client = ApiClient::new(Some(config.api_url.clone()));
    tracing::info!(api_url = %client.get_base_url(), "starting HRMS Pro console");

    smol::block_on(async {
        let mut app = App::new(client, &config);
        app.initialize().await;
        print_screen(&mut app)?;

        let mut lines = BufReader::new(Unblock::new(std::io::stdin())).lines();
        while let Some(line) = lines.next().await {
            let line = line.context("reading stdin")?;
            match Command::parse(&line) {
                Some(command) => {
                    if !app.handle_command(command).await {
                        break;
                    }
                }
                // Anything that is not a command filters the employee list.
                None => app.set_search(line.trim()),
            }
            print_screen(&mut app)?;
        }
        tracing::info!("console closed");
        Ok::<_, anyhow::Error>(())
    })
}
