use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scacco_shell::{Glyphs, Shell, ShellConfig};

/// Two-player chess with move legality and check detection, driven from the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Virtual window width in pixels, used to map `click <x> <y>` onto squares.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Virtual window height in pixels.
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Draw pieces with Unicode chess symbols instead of letters.
    #[arg(long)]
    unicode: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    info!(?args, "scacco starting");

    let config = ShellConfig {
        width: args.width,
        height: args.height,
        glyphs: if args.unicode {
            Glyphs::Unicode
        } else {
            Glyphs::Ascii
        },
    };

    let mut shell = Shell::new(config).context("invalid window configuration")?;
    shell
        .run(io::stdin().lock(), io::stdout().lock())
        .context("shell I/O failed")?;
    Ok(())
}
