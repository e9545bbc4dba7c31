//! Strictly Mastermind - command-line host
//!
//! Each invocation restores the saved session, applies one command and
//! prints the resulting board.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use strictly_mastermind::{
    ColorTheme, Config, GameStatus, Guess, Session, SnapshotRepository, Transition,
};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

type CliSession = Session<SnapshotRepository, ColorTheme, rand::rngs::ThreadRng>;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_file_or_default(&cli.config)?;
    if let Some(db_path) = cli.db_path {
        config = config.with_db_path(db_path);
    }
    debug!(?config, "Configuration resolved");

    let store = SnapshotRepository::open(config.db_path().clone())
        .with_context(|| format!("Opening database '{}'", config.db_path()))?;
    let mut session = Session::open(
        store,
        *config.theme(),
        rand::thread_rng(),
        *config.default_difficulty(),
    );

    run(&mut session, cli.command)
}

/// Applies one command to the session and prints the result.
#[instrument(skip(session))]
fn run(session: &mut CliSession, command: Command) -> Result<()> {
    match command {
        Command::New { difficulty } => {
            session.new_game(difficulty);
            print_board(session, false);
        }
        Command::Guess { colors } => {
            let slots = colors
                .iter()
                .map(|id| {
                    session
                        .color(id)
                        .map(Some)
                        .with_context(|| format!("'{}' is not a color in play (try `colors`)", id))
                })
                .collect::<Result<Vec<_>>>()?;
            let transition = session.submit_guess(&slots)?;
            print_transition(&transition);
            print_board(session, false);
        }
        Command::Draft { position, color } => {
            let color = match color {
                Some(id) => match session.color(&id) {
                    Some(color) => Some(color),
                    None => bail!("'{}' is not a color in play (try `colors`)", id),
                },
                None => None,
            };
            session.update_draft_color(position, color)?;
            print_board(session, false);
        }
        Command::Submit => {
            let transition = session.submit_draft()?;
            print_transition(&transition);
            print_board(session, false);
        }
        Command::Show { reveal } => print_board(session, reveal),
        Command::Difficulty { difficulty } => {
            session.set_difficulty(difficulty);
            println!("New games will use {} colors.", difficulty);
        }
        Command::Reset => {
            session.reset_game();
            print_board(session, false);
        }
        Command::Clear => {
            session.clear_saved_game();
            println!("Saved game cleared.");
        }
        Command::Stats => print_stats(session),
        Command::ResetStats => {
            session.reset_statistics();
            println!("Statistics reset.");
        }
        Command::Colors => {
            println!(
                "{} palette, difficulty {}",
                session.palette().label(),
                session.state().difficulty()
            );
            for color in session.available_colors() {
                println!("{:<16} {} {}", color.id(), color.hex(), color.name());
            }
        }
    }
    Ok(())
}

fn print_transition(transition: &Transition) {
    let feedback = transition.feedback();
    println!("exact: {}  partial: {}", feedback.exact(), feedback.partial());
}

fn format_row(row: &Guess) -> String {
    let pegs = row
        .colors()
        .iter()
        .map(|slot| slot.as_ref().map_or("-", |c| c.id()))
        .map(|id| format!("{:<12}", id))
        .collect::<String>();
    if row.is_complete() {
        format!("{}| {}", pegs, row.feedback())
    } else {
        pegs
    }
}

fn print_board(session: &CliSession, reveal: bool) {
    let state = session.state();
    println!("Difficulty: {} colors", state.difficulty());
    for (index, row) in state.guesses().iter().enumerate() {
        let marker = if index == state.current_guess_index() && !session.is_game_over() {
            ">"
        } else {
            " "
        };
        println!("{} {:>2}. {}", marker, index + 1, format_row(row));
    }
    println!("{}", session.status().message());
    if reveal || session.status() != GameStatus::Playing {
        let secret = session
            .secret_code()
            .colors()
            .iter()
            .map(|c| c.id())
            .collect::<Vec<_>>()
            .join(" ");
        println!("Secret: {}", secret);
    }
}

fn print_stats(session: &CliSession) {
    let stats = session.statistics();
    println!("Games played:    {}", stats.games_played());
    println!("Games won:       {} ({:.1}%)", stats.games_won(), stats.win_rate());
    println!("Current streak:  {}", stats.current_streak());
    println!("Best streak:     {}", stats.best_streak());
    println!("Average guesses: {:.2}", stats.average_guesses());
    for (difficulty, wins) in stats.wins_by_difficulty() {
        println!("Wins with {} colors: {}", difficulty, wins);
    }
}
