//! Application state and logic.

use crate::animation::AnimationPlayer;
use crate::data::SimulationRun;
use crate::error::Result;
use crate::kinematics::WheelGeometry;
use crate::plot::{ResponsePlot, VoltagePlot};
use crate::util::{self, LayoutConfig};

/// Wheel radius used when neither the command line nor the file sets one.
pub const DEFAULT_WHEEL_RADIUS: f64 = 0.1;
/// Chassis length used when neither the command line nor the file sets one.
pub const DEFAULT_CHASSIS_LENGTH: f64 = 0.3;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Which view fills the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ViewMode {
    /// Rolling wheel animation.
    #[default]
    Animation,
    /// Angle and velocity over time.
    Response,
    /// Voltage over time.
    Voltage,
}

impl ViewMode {
    /// Get the next view mode in cycle.
    pub fn next(self) -> Self {
        match self {
            ViewMode::Animation => ViewMode::Response,
            ViewMode::Response => ViewMode::Voltage,
            ViewMode::Voltage => ViewMode::Animation,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            ViewMode::Animation => "Animation",
            ViewMode::Response => "Response",
            ViewMode::Voltage => "Voltage",
        }
    }
}

/// Pick the wheel geometry: explicit values first, then the file, then defaults.
pub fn resolve_geometry(
    radius: Option<f64>,
    chassis_length: Option<f64>,
    run: &SimulationRun,
) -> Result<WheelGeometry> {
    WheelGeometry::new(
        radius
            .or(run.wheel_radius)
            .unwrap_or(DEFAULT_WHEEL_RADIUS),
        chassis_length
            .or(run.chassis_length)
            .unwrap_or(DEFAULT_CHASSIS_LENGTH),
    )
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Loaded simulation run.
    pub run: SimulationRun,
    /// Animation playback.
    pub player: AnimationPlayer,
    /// Prepared response chart.
    pub response: ResponsePlot,
    /// Prepared voltage chart, when the run has a voltage series.
    pub voltage: Option<VoltagePlot>,
    /// Layout and pacing configuration.
    pub layout: LayoutConfig,
    /// Current view.
    pub view: ViewMode,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance for a loaded run.
    pub fn new(run: SimulationRun, geometry: WheelGeometry, layout: LayoutConfig) -> Result<Self> {
        let player = AnimationPlayer::new(&run, geometry, layout.playback.clone())?;
        let response = ResponsePlot::from_run(&run, &layout.plot)?;
        let voltage = VoltagePlot::from_run(&run, &layout.plot)?;

        tracing::info!(
            radius = geometry.radius(),
            chassis_length = geometry.chassis_length(),
            frames = player.len(),
            "application ready"
        );

        Ok(Self {
            status: format!("{} loaded ({} samples)", run.name(), run.len()),
            run,
            player,
            response,
            voltage,
            layout,
            view: ViewMode::default(),
            theme: Theme::GruvboxDark,
        })
    }

    /// Advance the animation by one tick.
    ///
    /// Frames only move while the animation view is shown and playing.
    pub fn tick(&mut self) -> Result<()> {
        if self.view == ViewMode::Animation && self.player.playing {
            self.player.advance()?;
        }
        Ok(())
    }

    /// Switch to a view.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
        self.status = format!("View: {}", view.name());
        tracing::debug!("view changed to {}", view.name());
    }

    /// Cycle to the next view.
    pub fn next_view(&mut self) {
        self.set_view(self.view.next());
    }

    /// Play or pause the animation.
    pub fn toggle_play(&mut self) {
        self.player.toggle_play();
        self.status = if self.player.playing {
            "Playing".to_string()
        } else {
            "Paused".to_string()
        };
    }

    /// Restart the animation from frame 0.
    pub fn restart(&mut self) -> Result<()> {
        self.player.restart()?;
        self.status = "Restarted".to_string();
        Ok(())
    }

    /// Pause and show the next frame.
    pub fn step(&mut self) -> Result<()> {
        self.player.playing = false;
        let index = self.player.advance()?.index;
        self.status = format!("Frame {}", index + 1);
        Ok(())
    }

    /// Play faster.
    pub fn faster(&mut self) {
        self.player.faster();
        self.status = format!("Speed: {}x", self.player.speed());
    }

    /// Play slower.
    pub fn slower(&mut self) {
        self.player.slower();
        self.status = format!("Speed: {}x", self.player.speed());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Copy the current frame to the clipboard.
    pub fn copy_frame(&mut self) {
        match util::copy_frame_info(self.player.time(), self.player.current()) {
            Ok(()) => self.status = format!("Copied frame {}!", self.player.index() + 1),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {}", e);
                self.status = format!("Copy failed: {}", e);
            },
        }
    }

    /// Show the key help in the status bar.
    pub fn show_help(&mut self) {
        self.status = "Help: q=quit, Tab=view, space=play/pause, r=restart, l=step, +/-=speed, T=theme, y=copy frame".to_string();
    }
}
