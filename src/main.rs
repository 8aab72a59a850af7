#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, Write as _};
#[cfg(feature = "std")]
use std::sync::{Arc, Mutex};

#[cfg(feature = "std")]
use anyhow::anyhow;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::io::AsyncBufReadExt;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[cfg(feature = "std")]
use seabattle::{
    init_logging, render_board, render_fleet_status, CellMark, GameError, GameEvent, GameSession,
    HunterHandle, MapLayout, Placement, ShotOutcome, DEFAULT_HUNT_PERIOD_MS, MAPS,
};

#[cfg(feature = "std")]
#[derive(Parser)]
#[command(author, version, about = "Coastal battleship: hide a fleet or hunt one", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "std")]
#[derive(Subcommand)]
enum Commands {
    /// Fire at a randomly placed enemy fleet.
    Hide {
        #[arg(long, default_value_t = 0, help = "Map index (see `maps`)")]
        map: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games")]
        seed: Option<u64>,
    },
    /// Place a fleet at random and watch the hunter probe it.
    Seek {
        #[arg(long, default_value_t = 0, help = "Map index (see `maps`)")]
        map: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_HUNT_PERIOD_MS)]
        period_ms: u64,
    },
    /// List the available map layouts.
    Maps,
}

#[cfg(feature = "std")]
fn small_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn coord_to_string(row: i32, col: i32) -> String {
    let col_ch = (b'A' + col as u8) as char;
    format!("{}{}", col_ch, row + 1)
}

#[cfg(feature = "std")]
fn parse_coord(layout: &MapLayout, input: &str) -> Result<(i32, i32), String> {
    if input.len() < 2 {
        return Err("Need a column letter and a row number (e.g. C5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as i32;
    if col >= layout.cols {
        return Err(format!("Column '{}' is off the board", col_ch));
    }
    let row_str: String = chars.collect();
    let row: i32 = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row_str))?;
    if row < 1 || row > layout.rows {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, layout.rows));
    }
    Ok((row - 1, col))
}

#[cfg(feature = "std")]
fn print_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::ShipSunk { description, .. } => println!("  >> {}", description),
            GameEvent::FleetDestroyed => println!("  >> Fleet destroyed!"),
            GameEvent::BombStatus { used, left } => {
                println!("  >> Bombs used: {} ({} left)", used, left)
            }
            GameEvent::Cell { .. } => {}
        }
    }
}

#[cfg(feature = "std")]
fn hide_game(map: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = small_rng(seed);
    let mut session =
        GameSession::new(map, Placement::Random, &mut rng).map_err(|e| anyhow!(e))?;
    println!("Map: {}", session.layout().title);
    println!("Commands: coordinate (e.g. C5) to fire, m = toggle bomb, v = reveal, n = new game, q = quit");
    let stdin = io::stdin();
    loop {
        println!("{}", render_board(session.board(), false));
        println!(
            "Shots: {}  Bombs left: {}",
            session.shots_taken(),
            session.bombs_left()
        );
        if session.board().is_destroyed() {
            println!("Enemy fleet destroyed in {} shots.", session.shots_taken());
            break;
        }
        let prompt = if session.carpet_mode() { "bomb> " } else { "fire> " };
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        match input {
            "" => continue,
            "q" => break,
            "m" => {
                let on = session.toggle_carpet_mode();
                println!("{}", if on { "Carpet-bomb mode" } else { "Single-shot mode" });
            }
            "v" => {
                session.reveal();
                println!("{}", render_board(session.board(), true));
                println!("{}", render_fleet_status(session.board()));
                break;
            }
            "n" => {
                session.new_game(&mut rng).map_err(|e| anyhow!(e))?;
                println!("New game on '{}'.", session.layout().title);
            }
            _ => match parse_coord(session.layout(), input) {
                Ok((row, col)) => {
                    if session.carpet_mode() {
                        match session.carpet_fire(row, col) {
                            Ok(report) => println!("{}", report.summary()),
                            Err(e) => println!("{}", e),
                        }
                    } else {
                        match session.fire(row, col) {
                            Ok(ShotOutcome::Miss) => println!("Miss."),
                            Ok(ShotOutcome::Hit) => println!("Hit!"),
                            Ok(ShotOutcome::Sunk(_)) => {}
                            Err(GameError::AlreadyFired) => {
                                println!("Already shot here - try again")
                            }
                            Err(e) => println!("{}", e),
                        }
                    }
                }
                Err(msg) => println!("{}", msg),
            },
        }
        print_events(&session.drain_events());
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn seek_game(map: usize, seed: Option<u64>, period_ms: u64) -> anyhow::Result<()> {
    let mut rng = small_rng(seed);
    let session = GameSession::new(map, Placement::Random, &mut rng).map_err(|e| anyhow!(e))?;
    println!("Map: {}", session.layout().title);
    println!("{}", render_board(session.board(), true));
    println!("Hunting begins - press Enter to stop.");

    let session = Arc::new(Mutex::new(session));
    let hunter = HunterHandle::spawn(
        Arc::clone(&session),
        Duration::from_millis(period_ms),
        small_rng(seed.map(|s| s.wrapping_add(1))),
    );

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(period_ms)) => {
                let (events, destroyed, shots) = {
                    let mut s = session
                        .lock()
                        .map_err(|_| anyhow!("session lock poisoned"))?;
                    (s.drain_events(), s.board().is_destroyed(), s.shots_taken())
                };
                for event in &events {
                    match event {
                        GameEvent::Cell { row, col, mark: CellMark::Hit } => {
                            println!("hunter fires {}: hit", coord_to_string(*row, *col))
                        }
                        GameEvent::Cell { row, col, mark: CellMark::Miss } => {
                            println!("hunter fires {}: miss", coord_to_string(*row, *col))
                        }
                        GameEvent::ShipSunk { description, .. } => println!(">> {}", description),
                        GameEvent::FleetDestroyed => println!(">> Fleet destroyed!"),
                        _ => {}
                    }
                }
                if destroyed {
                    println!("The hunter destroyed the fleet in {} shots.", shots);
                    break;
                }
            }
            _ = lines.next_line() => {
                println!("Hunt stopped.");
                break;
            }
        }
    }
    hunter.stop().await;

    let session = session
        .lock()
        .map_err(|_| anyhow!("session lock poisoned"))?;
    println!("{}", render_board(session.board(), true));
    println!("{}", render_fleet_status(session.board()));
    Ok(())
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Hide { map, seed } => hide_game(map, seed)?,
        Commands::Seek { map, seed, period_ms } => seek_game(map, seed, period_ms).await?,
        Commands::Maps => {
            for (i, layout) in MAPS.iter().enumerate() {
                println!(
                    "{:2}  {} ({}x{})",
                    i, layout.title, layout.rows, layout.cols
                );
            }
        }
    }
    Ok(())
}
