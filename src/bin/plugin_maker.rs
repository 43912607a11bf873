use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use exampleplugin::scaffold;

/// Create a SOFA plugin skeleton with the necessary files and folder structure
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the plugin (letters, numbers, hyphens and underscores only)
    plugin_name: String,

    /// Directory in which the plugin folder will be created
    path: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global default subscriber")?;

    let created = scaffold::create_plugin(&args.plugin_name, &args.path)
        .with_context(|| format!("failed to create plugin '{}'", args.plugin_name))?;

    println!("Created plugin at {}", created.display());
    Ok(())
}
