//! Wheelview - a terminal viewer for wheel-and-chassis simulation runs.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use wheelview::{
    app::{resolve_geometry, App, ViewMode},
    data::read_run,
    export::export_frames,
    ui,
    util::LayoutConfig,
};

/// Poll timeout while nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "wheelview")]
#[command(about = "A terminal viewer for wheel-and-chassis simulation runs", long_about = None)]
struct Args {
    /// Path to the NetCDF file holding T, X and optionally Xo and V
    file: PathBuf,

    /// Wheel radius in meters (overrides the file attribute)
    #[arg(long)]
    radius: Option<f64>,

    /// Chassis arm length in meters (overrides the file attribute)
    #[arg(long)]
    length: Option<f64>,

    /// Playback speed multiplier
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// View shown at startup
    #[arg(long, value_enum, default_value_t = ViewMode::Animation)]
    view: ViewMode,

    /// Print every frame's geometry as CSV and exit
    #[arg(long)]
    export_frames: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Wheelview");
    }

    if !args.file.exists() {
        eprintln!("Error: Path not found: {}", args.file.display());
        std::process::exit(1);
    }

    let run = read_run(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let geometry = resolve_geometry(args.radius, args.length, &run)?;

    if args.export_frames {
        let stdout = io::stdout();
        export_frames(&run, geometry, stdout.lock())?;
        return Ok(());
    }

    let mut app = App::new(run, geometry, LayoutConfig::default())?;
    app.set_view(args.view);
    app.player.set_speed(args.speed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if args.log.is_some() {
        tracing::info!("Wheelview exited");
    }

    if let Err(err) = res {
        tracing::error!("Wheelview stopped: {:#}", err);
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let animating = app.view == ViewMode::Animation && app.player.playing;
        let interval = if animating {
            app.player.frame_interval()
        } else {
            IDLE_POLL
        };
        let timeout = interval.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

                    // Views
                    (_, KeyCode::Tab) => app.next_view(),
                    (KeyModifiers::NONE, KeyCode::Char('1')) => app.set_view(ViewMode::Animation),
                    (KeyModifiers::NONE, KeyCode::Char('2')) => app.set_view(ViewMode::Response),
                    (KeyModifiers::NONE, KeyCode::Char('3')) => app.set_view(ViewMode::Voltage),

                    // Playback
                    (KeyModifiers::NONE, KeyCode::Char(' ')) => app.toggle_play(),
                    (KeyModifiers::NONE, KeyCode::Char('r')) => app.restart()?,
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => app.step()?,
                    (_, KeyCode::Char('+')) | (_, KeyCode::Char('=')) => app.faster(),
                    (_, KeyCode::Char('-')) | (_, KeyCode::Char('_')) => app.slower(),

                    // Features
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
                    (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_frame(),
                    (_, KeyCode::Char('?')) => app.show_help(),

                    _ => {},
                }
            }
        }

        if last_tick.elapsed() >= interval {
            if animating {
                app.tick()?;
            }
            last_tick = Instant::now();
        }
    }
}
