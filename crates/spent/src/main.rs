use std::io::Write;

use clap::Parser;
use currency::{CurrencyStore, catalog, format, storage};

use crate::{
    config::{Cli, Command},
    error::Result,
};

mod config;
mod error;

/// Amount used to preview each currency in `spent list`.
const SAMPLE_AMOUNT: i64 = -123_456;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = config::load(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "spent={level},currency={level}",
            level = settings.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let mut store = CurrencyStore::initialize(storage::detect(settings.storage_path()));
    if !store.is_durable() {
        tracing::info!("settings will not be saved");
    }

    let stdout = std::io::stdout();
    run(cli.command, &mut store, &mut stdout.lock())
}

fn run(command: Command, store: &mut CurrencyStore, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Show => {
            let active = store.get();
            writeln!(
                out,
                "{} ({}) symbol {} locale {}",
                active.code, active.position, active.symbol, active.locale
            )?;
        }
        Command::List => {
            let active = store.get().code.clone();
            for entry in catalog::entries() {
                let marker = if entry.code == active { '*' } else { ' ' };
                writeln!(
                    out,
                    "{marker} {:<3} {:<4} {:<20} {}",
                    entry.code,
                    entry.symbol,
                    entry.name,
                    format(SAMPLE_AMOUNT, &entry.settings())
                )?;
            }
        }
        Command::Set { code } => {
            let active = store.select(&code)?;
            tracing::info!("active currency is now {}", active.code);
            writeln!(out, "{}", format(SAMPLE_AMOUNT, active))?;
        }
        Command::Format { amounts } => {
            for amount in amounts {
                writeln!(out, "{}", format(amount, store.get()))?;
            }
        }
    }
    Ok(())
}
