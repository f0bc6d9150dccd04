use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use kbcase::{build_plan_from_file, load_config, write_outputs, CaseConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// KLE layout file (JSON)
    #[arg(value_name = "LAYOUT")]
    input: PathBuf,

    /// Case configuration file (YAML, or JSON with a .json extension)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = "output")]
    output: PathBuf,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CaseConfig::default(),
    };
    let plan = build_plan_from_file(&cli.input, config)?;
    write_outputs(&plan, &cli.output)?;

    println!(
        "Generated {} keys, {} outline(s).",
        plan.layout.keys.len(),
        plan.outlines.len()
    );
    if cli.debug {
        for key in &plan.layout.keys {
            println!(
                "{} [{},{}]: {} {}",
                key.text,
                key.row,
                key.col,
                key.rect.p1,
                key.rect.p2
            );
        }
    }

    Ok(())
}
