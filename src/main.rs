#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    cli::{load_fleet, replay_guesses, OutputFormat},
    init_logging, random_layout, GameStatus,
};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Replay a guess file against a fleet placement file (the default).
    ///
    /// Filenames not given as options are read from standard input, one per
    /// line: placements first, then guesses.
    Play {
        #[arg(long)]
        placements: Option<PathBuf>,
        #[arg(long)]
        guesses: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[arg(long, help = "Print the final board to stderr")]
        show_board: bool,
    },
    /// Print a random, valid fleet placement file.
    Fleet {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play {
        placements: None,
        guesses: None,
        format: OutputFormat::Text,
        show_board: false,
    }) {
        Commands::Play {
            placements,
            guesses,
            format,
            show_board,
        } => play(placements, guesses, format, show_board),
        Commands::Fleet { seed } => {
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for line in random_layout(&mut rng) {
                writeln!(out, "{}", line)?;
            }
            Ok(())
        }
    }
}

#[cfg(feature = "std")]
fn play(
    placements: Option<PathBuf>,
    guesses: Option<PathBuf>,
    format: OutputFormat,
    show_board: bool,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut names = stdin.lock().lines();
    let mut next_name = |what: &str| -> anyhow::Result<PathBuf> {
        let line = names
            .next()
            .with_context(|| format!("expected the {} filename on stdin", what))??;
        Ok(PathBuf::from(line.trim()))
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let placements = match placements {
        Some(path) => path,
        None => next_name("placement")?,
    };
    let text = std::fs::read_to_string(&placements)
        .with_context(|| format!("cannot read {}", placements.display()))?;
    // A rejected fleet ends the run successfully once reported.
    let Ok(mut session) = load_fleet(&text, format, &mut out)? else {
        return Ok(());
    };

    let guesses = match guesses {
        Some(path) => path,
        None => next_name("guess")?,
    };
    let text = std::fs::read_to_string(&guesses)
        .with_context(|| format!("cannot read {}", guesses.display()))?;
    let status = replay_guesses(&mut session, &text, format, &mut out)?;
    log::info!(
        "{} guesses processed, game {}",
        session.guess_count(),
        match status {
            GameStatus::AllSunk => "over",
            GameStatus::InProgress => "unfinished",
        }
    );

    if show_board {
        eprintln!("{}", session.grid());
    }
    Ok(())
}
