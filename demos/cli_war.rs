//! CLI War example.
//!
//! Plays a full game of War, reporting each comparison in the classic table
//! format. By default the game pauses for Enter between rounds; `--auto`
//! plays straight through, `--suit-up` enables the house rule, and
//! `--output[=FILE]` writes the report to a log file instead of stdout.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use warrs::{Comparison, Game, GameOptions, GameState, GameWinner, RoundEvent, TableView};

struct CliConfig {
    auto_play: bool,
    suit_up: bool,
    output: Option<String>,
}

enum Report {
    Stdout,
    File(BufWriter<File>),
}

impl Report {
    fn line(&mut self, text: &str) {
        match self {
            Self::Stdout => println!("{text}"),
            Self::File(writer) => {
                let _ = writeln!(writer, "{text}");
            }
        }
    }
}

fn main() -> ExitCode {
    let config = match parse_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: cli_war [--auto] [--suit-up] [--output[=FILE]]");
            return ExitCode::FAILURE;
        }
    };

    let mut report = match &config.output {
        Some(path) => match File::create(path) {
            Ok(file) => Report::File(BufWriter::new(file)),
            Err(err) => {
                eprintln!("cannot open {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Report::Stdout,
    };

    // Writing to a file implies playing through without prompts.
    let interactive = !config.auto_play && config.output.is_none();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_suit_up(config.suit_up);
    let mut game = Game::new(options, seed);

    while game.state == GameState::InProgress {
        if interactive {
            prompt_enter("Press Enter to play");
        }

        let round_report = match game.play_round() {
            Ok(round_report) => round_report,
            Err(err) => {
                eprintln!("Game error: {err}");
                return ExitCode::FAILURE;
            }
        };

        for event in &round_report.events {
            report_event(&mut report, event);
        }
    }

    if let Some(winner) = game.winner() {
        let rounds = game.rounds_played();
        let line = match winner {
            GameWinner::Player1 => format!("Player 1 Wins in {rounds} rounds!"),
            GameWinner::Player2 => format!("Player 2 Wins in {rounds} rounds!"),
            GameWinner::Draw => "Draw!".to_string(),
        };
        report.line(&line);
    }

    ExitCode::SUCCESS
}

fn parse_args() -> Result<CliConfig, String> {
    let mut config = CliConfig {
        auto_play: false,
        suit_up: false,
        output: None,
    };

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--auto" => config.auto_play = true,
            "--suit-up" => config.suit_up = true,
            "--output" => config.output = Some("gameplay.log".to_string()),
            other => {
                if let Some(name) = other.strip_prefix("--output=") {
                    config.output = Some(log_file_name(name));
                } else {
                    return Err(format!("unknown argument: {other}"));
                }
            }
        }
    }

    Ok(config)
}

fn log_file_name(name: &str) -> String {
    if name.ends_with(".log") {
        name.to_string()
    } else {
        format!("{name}.log")
    }
}

fn report_event(report: &mut Report, event: &RoundEvent) {
    match event {
        RoundEvent::RoundStarted { round } => {
            report.line(&format!("---- Round {round} ----"));
        }
        RoundEvent::Compared {
            comparison,
            player1,
            player2,
        } => {
            report.line(&table_line("P1", player1, *comparison == Comparison::FirstWins));
            report.line(&table_line("P2", player2, *comparison == Comparison::SecondWins));
        }
        RoundEvent::WarDeclared => report.line("War!"),
        RoundEvent::SuitUpDeclared => report.line("Suit Up!"),
    }
}

fn table_line(label: &str, view: &TableView, winner: bool) -> String {
    let played = view
        .played
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{label}: H:{:<2} | D:{:<2} | [{played}]{}",
        view.hand_len,
        view.discard_len,
        if winner { "*" } else { " " },
    )
}

fn prompt_enter(prompt: &str) {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    let _ = io::stdin().read_line(&mut input);
}
