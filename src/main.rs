use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use flapper::cli::{parse_args, CliAction, CliArgs, HELP};
use flapper::core::config::{self, ConfigOverrides};
use flapper::game::logic::GameInput;
use flapper::input::{map_event, Command};
use flapper::utils::persistence;
use flapper::{build_info, ui, AppError, GameConfig, Session, IDLE_WAIT_MS};
use log::{debug, info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

fn main() {
    if let Err(e) = run() {
        eprintln!("flapper: {}", e);
        eprintln!("Run 'flapper --help' for usage.");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = match parse_args(std::env::args().skip(1))? {
        CliAction::Version => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        CliAction::Help => {
            println!("{}", HELP);
            return Ok(());
        }
        CliAction::Run(args) => args,
    };

    if let Err(e) = init_logging() {
        // The game still works without a log file
        eprintln!("flapper: logging disabled: {}", e);
    }

    let config = load_config(&args)?;
    info!("starting with {:?}", config);

    let mut terminal = setup_terminal()?;
    let result = run_game(&mut terminal, config);
    restore_terminal(&mut terminal)?;
    result
}

/// Log to a file; the terminal belongs to the game.
fn init_logging() -> Result<(), AppError> {
    let path = persistence::log_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Preset, then the JSON file, then command-line choices. Fails on any
/// configuration that cannot produce a valid obstacle layout.
fn load_config(args: &CliArgs) -> Result<GameConfig, AppError> {
    let overrides = match &args.config_path {
        Some(path) => persistence::load_json::<ConfigOverrides>(path)?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("config file {} not found", path.display()),
            )
        })?,
        None => match persistence::default_config_path() {
            Ok(path) => {
                let loaded = persistence::load_json::<ConfigOverrides>(&path)?;
                if loaded.is_none() {
                    debug!("no config at {}, using presets", path.display());
                }
                loaded.unwrap_or_default()
            }
            Err(e) => {
                warn!("cannot locate config directory ({}), using presets", e);
                ConfigOverrides::default()
            }
        },
    };

    Ok(config::resolve(args.preset, &overrides, args.round_end)?)
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )
}

/// Event loop. Blocks on input until the next tick is due, so an idle game
/// costs nothing.
fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: GameConfig,
) -> Result<(), AppError> {
    let mut session = Session::new(config, rand::thread_rng());
    let idle_wait = Duration::from_millis(IDLE_WAIT_MS);

    loop {
        let scene = session.scene();
        terminal.draw(|frame| ui::draw(frame, &scene))?;

        let wait = session
            .time_until_next_tick(Instant::now())
            .unwrap_or(idle_wait);
        if event::poll(wait)? {
            match map_event(&event::read()?) {
                Command::Game(GameInput::Activate) => {
                    session.activate(Instant::now());
                }
                Command::Quit => break,
                Command::Ignore => {}
            }
        }

        session.advance(Instant::now());
    }

    session.shutdown();
    info!(
        "quitting; best score this session {}",
        session.state().leaderboard.best().unwrap_or(0)
    );
    Ok(())
}
