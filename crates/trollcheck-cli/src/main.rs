//! Binary entrypoint for trollcheck.
mod cli;
mod render;

use clap::Parser;
use cli::{Cli, OutputFormat};
use tracing_subscriber::EnvFilter;
use trollcheck_lookup::{lookup, Query};
use trollcheck_registry::SupportTable;

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let table = SupportTable::builtin();
    tracing::debug!(revision = %table.revision, records = table.len(), "support table ready");

    if cli.list {
        let out = match cli.format {
            OutputFormat::Text => render::table_text(&table),
            OutputFormat::Json => render::table_json(&table)?,
        };
        print!("{}", out);
        return Ok(());
    }

    let version = cli.ios_version.unwrap_or_default();
    let query = Query::new(version, cli.arch.into()).beta(cli.beta);
    let verdict = lookup(&table, &query);
    tracing::info!(version = %query.version_text, architecture = %query.architecture, %verdict, "lookup finished");

    match cli.format {
        OutputFormat::Text => print!("{}", render::verdict_text(&query, &verdict)),
        OutputFormat::Json => println!("{}", render::verdict_json(&query, &verdict)?),
    }
    Ok(())
}
