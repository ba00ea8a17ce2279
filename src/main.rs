//! EcoLéxico - terminal trivia for Ecuadorian Spanish regionalisms.
//!
//! Fetches the word catalog once at startup, then runs the quiz loop:
//! a 50ms input poll plus a scheduled, epoch-checked continuation for the
//! "show feedback, then deal the next round" delay.

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ecolexico::build_info;
use ecolexico::catalog::{CatalogClient, DEFAULT_API_URL};
use ecolexico::constants::{NEXT_ROUND_DELAY_MS, POLL_INTERVAL_MS};
use ecolexico::profile::{Profile, ProfileStore};
use ecolexico::trivia::{self, GamePhase, TriviaGame};
use ecolexico::ui::{game_scene, loading_scene, result_scene};
use ecolexico::words::{self, WordEntry, WordId};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut offline = false;
    let mut region: Option<u32> = None;

    let mut arg_iter = args[1..].iter();
    while let Some(arg) = arg_iter.next() {
        match arg.as_str() {
            "--offline" => offline = true,
            "--region" => {
                let value = arg_iter.next().and_then(|v| v.parse().ok());
                match value {
                    Some(id) => region = Some(id),
                    None => {
                        eprintln!("--region requires a numeric region id\n");
                        print_help();
                        std::process::exit(2);
                    }
                }
            }
            "--version" | "-v" => {
                println!(
                    "ecolexico {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}\n", other);
                print_help();
                std::process::exit(2);
            }
        }
    }

    let store = ProfileStore::new()?;
    let mut profile = store.load_or_default();

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Show the loading card while the blocking catalog fetch runs.
    terminal.draw(|frame| {
        let area = frame.size();
        loading_scene::render_loading(frame, area);
    })?;

    let session = load_catalog(offline, region).and_then(|catalog| {
        TriviaGame::new(catalog).map_err(|e| format!("Cannot start a game: {}", e))
    });

    let result = match session {
        Ok(mut game) => run(&mut terminal, &mut game, &store, &mut profile),
        Err(message) => {
            disable_raw_mode()?;
            io::stdout().execute(LeaveAlternateScreen)?;
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

/// Load the word catalog: the backend (optionally one region), or the
/// built-in list for offline play. The fetch is the one blocking boundary;
/// failures abort session start with a printable message.
fn load_catalog(offline: bool, region: Option<u32>) -> Result<Vec<WordEntry>, String> {
    if offline {
        let mut catalog = words::builtin_catalog();
        if let Some(region_id) = region {
            catalog.retain(|w| w.region_id == region_id);
        }
        return Ok(catalog);
    }

    let client = CatalogClient::from_env();
    let fetched = match region {
        Some(region_id) => client.fetch_words_by_region(region_id),
        None => client.fetch_words(),
    };

    fetched.map_err(|e| {
        format!(
            "Failed to load the word catalog: {}\nSet ECOLEXICO_API_URL or run with --offline.",
            e
        )
    })
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut TriviaGame,
    store: &ProfileStore,
    profile: &mut Profile,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    trivia::begin(game, &mut rng);

    // Scheduled continuation for the feedback delay. It carries the epoch it
    // was created under; a restart bumps the epoch and the timer fizzles.
    let mut pending_advance: Option<(Instant, u64)> = None;
    let mut recorded = false;

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            match game.phase {
                GamePhase::Loading => loading_scene::render_loading(frame, area),
                GamePhase::Playing | GamePhase::RoundResolved => {
                    game_scene::render_game(frame, area, game, profile)
                }
                GamePhase::GameOver => {
                    result_scene::render_game_over(frame, area, game, profile)
                }
                GamePhase::Win => result_scene::render_win(frame, area, game, profile),
            }
        })?;

        if let Some((deadline, epoch)) = pending_advance {
            if Instant::now() >= deadline {
                pending_advance = None;
                trivia::advance(game, epoch, &mut rng);
            }
        }

        if game.is_over() && !recorded {
            recorded = true;
            profile.record_game(game.score, game.phase == GamePhase::Win);
            // A failed profile write is not worth killing the session.
            let _ = store.save(profile);
        }

        if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            continue;
        }
        let Event::Key(key_event) = event::read()? else {
            continue;
        };

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
            KeyCode::Char('r') | KeyCode::Char('R') if game.is_over() => {
                pending_advance = None;
                recorded = false;
                trivia::restart(game, &mut rng);
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                if let Some(id) = target_on_screen(game) {
                    profile.toggle_favorite(id);
                    let _ = store.save(profile);
                }
            }
            KeyCode::Char(c) => {
                if let Some(index) = option_index(c) {
                    answer(game, index, &mut pending_advance);
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Submit the option at `index` and schedule the deferred advance.
fn answer(game: &mut TriviaGame, index: usize, pending_advance: &mut Option<(Instant, u64)>) {
    if game.phase != GamePhase::Playing {
        return;
    }
    let selected = game
        .current_round
        .as_ref()
        .and_then(|round| round.options.get(index))
        .map(|option| option.id);
    let Some(selected) = selected else {
        return;
    };

    trivia::submit_answer(game, selected);
    if game.phase == GamePhase::RoundResolved {
        *pending_advance = Some((
            Instant::now() + Duration::from_millis(NEXT_ROUND_DELAY_MS),
            game.epoch,
        ));
    }
}

/// Map an answer key to an option slot ('a'-'d' or '1'-'4').
fn option_index(c: char) -> Option<usize> {
    match c.to_ascii_lowercase() {
        'a' | '1' => Some(0),
        'b' | '2' => Some(1),
        'c' | '3' => Some(2),
        'd' | '4' => Some(3),
        _ => None,
    }
}

/// The word currently being asked (live or frozen in feedback), if any.
fn target_on_screen(game: &TriviaGame) -> Option<WordId> {
    match game.phase {
        GamePhase::Playing => game.current_round.as_ref().map(|r| r.target.id),
        GamePhase::RoundResolved => game.resolved.as_ref().map(|r| r.round.target.id),
        _ => None,
    }
}

fn print_help() {
    println!("EcoLéxico - Terminal Trivia for Ecuadorian Spanish Regionalisms\n");
    println!("Usage: ecolexico [OPTIONS]\n");
    println!("Options:");
    println!("  --offline        Play with the built-in starter catalog");
    println!("  --region <id>    Only play words from one region");
    println!("  -v, --version    Print version information");
    println!("  -h, --help       Print this help\n");
    println!("Environment:");
    println!(
        "  ECOLEXICO_API_URL  Word catalog backend (default {})",
        DEFAULT_API_URL
    );
}
