use std::io::{self, BufRead, Write};

use anyhow::Context;

use storefront_app::{AppConfig, ConfigSource, Session, UiCommand};

fn main() -> anyhow::Result<()> {
    let (config, source) = AppConfig::load()?;
    storefront_observability::init(&config.logging);

    match &source {
        ConfigSource::File(path) => tracing::info!(path = %path.display(), "config loaded"),
        ConfigSource::BuiltIn => {
            tracing::warn!("STOREFRONT_CONFIG not set; using built-in demo config")
        }
    }

    let mut session = Session::new(&config).context("failed to start session")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_json(&mut out, &session.screen())?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<UiCommand>() {
            Ok(command) => command,
            Err(err) => {
                tracing::warn!(%err, "rejected command");
                print_json(&mut out, &serde_json::json!({ "error": err.to_string() }))?;
                continue;
            }
        };

        match session.dispatch(command) {
            Ok(screen) => print_json(&mut out, &screen)?,
            Err(err) => {
                if err.is_recoverable() {
                    tracing::warn!(%err, "command rejected");
                } else {
                    tracing::error!(%err, "command failed");
                }
                print_json(&mut out, &serde_json::json!({ "error": err.to_string() }))?;
            }
        }
    }

    Ok(())
}

fn print_json(out: &mut impl Write, value: &impl serde::Serialize) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, value).context("failed to encode screen")?;
    writeln!(out).context("failed to write output")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}
