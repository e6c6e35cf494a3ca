//! Headless self-play
//!
//! Plays X against O in the terminal, printing the board before every
//! search, each move with 1-based coordinates, the nodes generated and the
//! time taken.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fourline::{Board, Match, MatchConfig, Outcome, Stone, COLS};

/// Play a four-in-a-row game between two search engines.
#[derive(Parser)]
#[command(name = "selfplay", about = "Engine vs engine four-in-a-row on a 5x6 board")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "fourline.toml")]
    config: PathBuf,

    /// Override X's search depth
    #[arg(long)]
    x_depth: Option<u8>,

    /// Override O's search depth
    #[arg(long)]
    o_depth: Option<u8>,

    /// Override the number of search threads
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = MatchConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.x_depth {
        config.x_depth = depth;
    }
    if let Some(depth) = cli.o_depth {
        config.o_depth = depth;
    }
    if let Some(threads) = cli.threads {
        config.threads = threads;
    }
    config.validate().context("invalid configuration")?;

    let mut game = Match::new(&config);
    let stdout = io::stdout();
    run(&mut game, &mut stdout.lock())?;
    Ok(())
}

/// Play `game` to the end, writing the transcript to `out`.
fn run(game: &mut Match, out: &mut impl Write) -> Result<Outcome> {
    let separator = "=".repeat(30);

    let outcome = loop {
        if let Some(outcome) = game.outcome() {
            break outcome;
        }

        let move_number = game.history().len() + 1;
        writeln!(out, "{}", separator)?;
        write_board(out, game.board())?;
        writeln!(
            out,
            "Move {}: Player {}'s turn",
            move_number,
            game.to_move().player_number()
        )?;

        let Some(record) = game.play_turn().context("self-play aborted")? else {
            continue;
        };
        writeln!(
            out,
            "Move {}: Player {} played ({}, {})",
            record.move_number,
            record.player.player_number(),
            record.mov.row + 1,
            record.mov.col + 1
        )?;
        writeln!(out, "Nodes generated: {}", record.nodes)?;
        writeln!(out, "Time taken: {:.6} seconds\n", record.elapsed.as_secs_f64())?;
    };

    writeln!(out, "Game is Over!")?;
    writeln!(out, "{}", separator)?;
    write_board(out, game.board())?;

    match outcome {
        Outcome::Winner(Stone::X) => writeln!(out, "Player 1 (X) wins!")?,
        Outcome::Winner(_) => writeln!(out, "Player 2 (O) wins!")?,
        Outcome::Tie => writeln!(out, "It's a tie!")?,
    }

    Ok(outcome)
}

/// Write the board with 1-based row and column numbers
fn write_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    let header: Vec<String> = (1..=COLS).map(|c| c.to_string()).collect();
    writeln!(out, "   {}", header.join(" "))?;

    for row in 0..board.rows() {
        let cells: Vec<String> = board
            .cells()
            .filter(|(pos, _)| pos.row as usize == row)
            .map(|(_, stone)| stone.symbol().to_string())
            .collect();
        writeln!(out, "{}  {}", row + 1, cells.join(" "))?;
    }
    writeln!(out)
}
