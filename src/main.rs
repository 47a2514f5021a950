use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use four_straight::{CheckerColor, Player, Round, RoundConfig};

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Red,
    Yellow,
}

impl From<ColorArg> for CheckerColor {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Red => CheckerColor::Red,
            ColorArg::Yellow => CheckerColor::Yellow,
        }
    }
}

/// Replay a sequence of column drops and print the board after each move.
#[derive(Parser)]
#[command(name = "four-straight", about = "Replay a Four Straight round")]
struct Cli {
    /// Path to TOML round configuration
    #[arg(long, default_value = "round.toml")]
    config: PathBuf,

    /// Token color of the first player
    #[arg(long, value_enum, default_value = "red")]
    first_color: ColorArg,

    /// Columns to drop into, in play order
    #[arg(allow_negative_numbers = true)]
    columns: Vec<isize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = RoundConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let first_color = CheckerColor::from(cli.first_color);
    let players = [
        Player::new("p1", "Player 1", first_color),
        Player::new("p2", "Player 2", first_color.opposite()),
    ];
    let mut round = Round::from_config(&config, players);
    println!("{}", round.debug_summary());

    for column in cli.columns {
        let mover = round.current_player().map(ToString::to_string);
        match round.drop(column) {
            Ok(Some(_)) => {
                println!("\nMove: column {column}");
                if let Some(mover) = mover {
                    println!("Played by: {mover}");
                }
                println!("{}", round.board_string());
                println!("State: {}", round.state());
            }
            Ok(None) => println!("\nMove: column {column} ignored, round is over"),
            Err(err) => println!("\nMove: column {column} rejected: {err}"),
        }
    }

    if let Some(winner) = round.winner() {
        let mut cells: Vec<_> = round.winning_positions().into_iter().collect();
        cells.sort();
        let cells: Vec<String> = cells
            .iter()
            .map(|p| format!("({}, {})", p.row, p.column))
            .collect();
        println!("\nWinner: {winner} with {}", cells.join(" "));
    }

    Ok(())
}
