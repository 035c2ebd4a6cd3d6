mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::{debug, info, warn};
use rand::{thread_rng, Rng};

use space_invaders::assets::CATALOG;
use space_invaders::compute::{init_state, move_player_left, move_player_right, player_shoot, tick};
use space_invaders::config::GameConfig;
use space_invaders::entities::GameState;

use display::Viewport;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw alternate-screen mode while playing, so log lines
/// go to a file instead of stderr.
fn init_logging(config: &GameConfig) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match File::create(&config.display.log_file) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    let _ = builder.try_init();
}

// ── Input ─────────────────────────────────────────────────────────────────────

enum Action {
    Quit,
    Continue,
}

/// Apply one key event.  Press and repeat both act, so holding a key keeps
/// the tank moving at the terminal's repeat rate.
fn handle_key(state: &mut GameState, key: KeyEvent, now: Instant) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Continue;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Action::Quit
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            *state = move_player_left(state);
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            *state = move_player_right(state);
        }
        KeyCode::Char(' ') => {
            *state = player_shoot(state, now);
        }
        _ => {}
    }
    Action::Continue
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  Rounds restart on their own; the only exit
/// is a quit key.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    rng: &mut impl Rng,
    frame: Duration,
) -> std::io::Result<()> {
    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(key) = ev {
                if let Action::Quit = handle_key(state, key, Instant::now()) {
                    info!("quit at frame {}, score {}", state.frame, state.score.value);
                    return Ok(());
                }
            }
        }

        *state = tick(state, Instant::now(), rng);

        display::render(out, Viewport::current()?, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let loaded = GameConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&config);
    if let Err(e) = &loaded {
        warn!("config not loaded, using defaults: {}", e);
    }
    info!("starting with {:?}", config.world);
    let asset_root = Path::new(&config.display.asset_root);
    for sprite in CATALOG.iter() {
        debug!("sprite {} -> {}", sprite.name(), sprite.path(asset_root).display());
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let mut rng = thread_rng();
    let mut state = init_state(&config, &mut rng);
    let result = game_loop(
        &mut out,
        &mut state,
        &rx,
        &mut rng,
        Duration::from_millis(config.display.frame_ms),
    );

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
