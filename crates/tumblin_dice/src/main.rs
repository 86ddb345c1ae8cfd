//! Tumblin Dice - dice-scoring session tracker CLI.
//!
//! Each invocation loads the persisted session, applies one command through
//! the store, and prints what the core computed. The session (selection
//! included) persists between invocations.

#![warn(missing_docs)]

use std::str::FromStr;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tumblin_core::{Dice, Zone};
use tumblin_dice::{
    Cli, CliCommand, FileBackend, FocusCommand, PlayerCommand, RandomIdSource, RoundCommand,
    SessionConfig, SessionStore, games_list, player_sheet, scoreboard, standings_report,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = SessionConfig::load_or_default(&cli.config)?;
    if let Some(data_dir) = cli.data_dir.clone() {
        config = SessionConfig::with_data_dir(data_dir);
    }

    info!(data_dir = %config.data_dir().display(), "Opening session");
    let backend = FileBackend::new(config.data_dir().clone())?;
    let mut store = SessionStore::open(Box::new(backend), Box::new(RandomIdSource::new()));

    run_command(&mut store, cli.command)
}

/// Dispatches one CLI command against the store.
fn run_command(store: &mut SessionStore, command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Games => {
            print!("{}", games_list(&store.snapshot()));
        }
        CliCommand::New => {
            store.add_game();
            let snapshot = store.snapshot();
            if let Some(game) = snapshot.games.last() {
                println!("Created {} ({})", game.name, game.id);
            }
        }
        CliCommand::Select { game_id } => {
            store.select_game(game_id);
            report_selection(store);
        }
        CliCommand::Rename { name } => {
            store.rename_game(name);
            report_selection(store);
        }
        CliCommand::Remove => {
            store.remove_game();
            println!("{} games left.", store.snapshot().games.len());
        }
        CliCommand::Player { command } => run_player_command(store, command),
        CliCommand::Round { command } => run_round_command(store, command),
        CliCommand::Focus { command } => run_focus_command(store, command)?,
        CliCommand::Score { zone, dice } => {
            let zone = parse_zone(&zone)?;
            let result = dice
                .into_iter()
                .map(Dice::from_pips)
                .collect::<Result<Vec<_>, _>>()?;
            store.set_zone_result(zone, result);
            show_focused_sheet(store);
        }
        CliCommand::Show => show(store)?,
    }
    Ok(())
}

fn run_player_command(store: &mut SessionStore, command: PlayerCommand) {
    match command {
        PlayerCommand::Add { name } => {
            store.add_player(name);
            let snapshot = store.snapshot();
            match snapshot.selected_game().and_then(|game| game.players.last()) {
                Some(player) => println!("Added {} ({})", player.name, player.color),
                None => println!("No game selected."),
            }
        }
        PlayerCommand::Rename { player_index, name } => store.rename_player(player_index, name),
        PlayerCommand::Color {
            player_index,
            color,
        } => store.set_player_color(player_index, color),
        PlayerCommand::Remove { player_index } => store.remove_player(player_index),
    }
}

fn run_round_command(store: &mut SessionStore, command: RoundCommand) {
    match command {
        RoundCommand::Add => store.add_round(),
        RoundCommand::Remove => store.remove_round(),
    }
    let snapshot = store.snapshot();
    match snapshot.selected_game() {
        Some(game) => println!("{} rounds recorded.", game.rounds.len()),
        None => println!("No game selected."),
    }
}

fn run_focus_command(store: &mut SessionStore, command: FocusCommand) -> Result<()> {
    match command {
        FocusCommand::Home => store.select_home(),
        FocusCommand::Players => store.select_players(),
        FocusCommand::Round { round_index } => store.select_round(round_index),
        FocusCommand::Player { player_index } => store.select_player(player_index),
        FocusCommand::Zone { zone } => store.select_zone(parse_zone(&zone)?),
    }
    Ok(())
}

/// Prints the scoreboard, standings, and the focused player's sheet.
fn show(store: &SessionStore) -> Result<()> {
    let snapshot = store.snapshot();
    let Some(game) = snapshot.selected_game() else {
        println!("No game selected.");
        return Ok(());
    };
    print!("{}", scoreboard(game)?);
    println!();
    print!("{}", standings_report(game)?);
    if let Some(selection) = snapshot.selected.as_ref()
        && let Some(round_focus) = selection.round()
        && let Some(player_focus) = round_focus.player.as_ref()
    {
        println!();
        match player_sheet(game, round_focus.round_index, player_focus.player_index) {
            Ok(sheet) => print!("{}", sheet),
            Err(e) => println!("Focused entry unavailable: {}", e),
        }
    }
    Ok(())
}

/// Prints the focused player's sheet after a score change, when resolvable.
fn show_focused_sheet(store: &SessionStore) {
    let snapshot = store.snapshot();
    let Some(game) = snapshot.selected_game() else {
        println!("No game selected.");
        return;
    };
    let Some(selection) = snapshot.selected.as_ref() else {
        return;
    };
    if let Some(round_focus) = selection.round()
        && let Some(player_focus) = round_focus.player.as_ref()
    {
        match player_sheet(game, round_focus.round_index, player_focus.player_index) {
            Ok(sheet) => print!("{}", sheet),
            Err(e) => println!("Focused entry unavailable: {}", e),
        }
    } else {
        println!("No player focused; nothing recorded.");
    }
}

fn report_selection(store: &SessionStore) {
    let snapshot = store.snapshot();
    match snapshot.selected_game() {
        Some(game) => println!("Selected {} ({})", game.name, game.id),
        None => println!("Selection does not match a tracked game."),
    }
}

fn parse_zone(raw: &str) -> Result<Zone> {
    Zone::from_str(raw)
        .map_err(|_| anyhow::anyhow!("unknown zone '{raw}', expected malus, x1, x2, x3 or x4"))
}
