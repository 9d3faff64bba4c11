use anyhow::{Context, Result};
use async_std::task;
use clap::Parser;
use othello_cli::connectors::TerminalConnector;
use othello_cli::render::GlyphSet;
use othello_cli::session;
use othello_rules::{Othello, EDGE_LENGTH};
use tracing_subscriber::EnvFilter;

/// Two people play Othello at one terminal.
#[derive(Parser)]
#[command(name = "othello", about = "Two-player Othello in the terminal")]
struct Cli {
    /// Cells on each edge of the board (even, at least 4)
    #[arg(long, default_value_t = EDGE_LENGTH)]
    size: usize,

    /// Characters used to draw the board
    #[arg(long, value_enum, default_value_t = GlyphSet::default())]
    glyphs: GlyphSet,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let game = Othello::with_size(cli.size)
        .with_context(|| format!("starting a {0}x{0} game", cli.size))?;

    let mut connector = TerminalConnector::new(cli.glyphs);
    task::block_on(session::run(game, &mut connector))?;
    Ok(())
}
