//! Rolling wheel animation.
//!
//! The player owns the [`FrameState`] and is the only caller of
//! [`compute_frame`](crate::kinematics::compute_frame) during playback, so the
//! displacement recurrence always sees frames in increasing order. Wrapping
//! past the last frame goes back to frame 0, which resets the displacement.

pub mod ui;

use crate::data::SimulationRun;
use crate::error::Result;
use crate::kinematics::{FrameGeometry, FrameState, WheelGeometry, ANGLE_ROW};
use crate::util::PlaybackConfig;
use ndarray::Array2;
use std::time::Duration;

/// Playback state of the wheel animation.
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    trajectory: Array2<f64>,
    dt: f64,
    geometry: WheelGeometry,
    state: FrameState,
    current: FrameGeometry,
    /// Whether frames advance on each tick.
    pub playing: bool,
    speed: f64,
    playback: PlaybackConfig,
}

impl AnimationPlayer {
    /// Create a player for `run`, positioned on frame 0.
    pub fn new(
        run: &SimulationRun,
        geometry: WheelGeometry,
        playback: PlaybackConfig,
    ) -> Result<Self> {
        Self::from_trajectory(run.trajectory(), run.dt(), geometry, playback)
    }

    /// Create a player from a two-row (angle, rate) trajectory.
    pub fn from_trajectory(
        trajectory: Array2<f64>,
        dt: f64,
        geometry: WheelGeometry,
        playback: PlaybackConfig,
    ) -> Result<Self> {
        let mut state = FrameState::new();
        let current = geometry.frame(0, trajectory.view(), dt, &mut state)?;
        Ok(Self {
            trajectory,
            dt,
            geometry,
            state,
            current,
            playing: true,
            speed: 1.0,
            playback,
        })
    }

    /// Geometry of the frame on screen.
    pub fn current(&self) -> &FrameGeometry {
        &self.current
    }

    /// Index of the frame on screen.
    pub fn index(&self) -> usize {
        self.current.index
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.trajectory.ncols()
    }

    /// Whether there are no frames. Never true for a constructed player.
    pub fn is_empty(&self) -> bool {
        self.trajectory.ncols() == 0
    }

    /// Time of the frame on screen.
    pub fn time(&self) -> f64 {
        self.index() as f64 * self.dt
    }

    /// Chassis angle of the frame on screen, in radians.
    pub fn angle(&self) -> f64 {
        self.trajectory[[ANGLE_ROW, self.index()]]
    }

    /// Wheel and chassis dimensions.
    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    /// Move to the next frame, looping back to frame 0 after the last one.
    pub fn advance(&mut self) -> Result<&FrameGeometry> {
        let next = self.index() + 1;
        let next = if next >= self.len() { 0 } else { next };
        self.show(next)
    }

    /// Jump back to frame 0.
    pub fn restart(&mut self) -> Result<&FrameGeometry> {
        tracing::debug!("animation restarted");
        self.show(0)
    }

    fn show(&mut self, index: usize) -> Result<&FrameGeometry> {
        self.current = self
            .geometry
            .frame(index, self.trajectory.view(), self.dt, &mut self.state)?;
        Ok(&self.current)
    }

    /// Toggle between playing and paused.
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Set the speed multiplier, clamped to the configured limits.
    pub fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() {
            self.speed = speed.clamp(self.playback.min_speed, self.playback.max_speed);
        }
    }

    /// Double the speed, up to the configured limit.
    pub fn faster(&mut self) {
        self.speed = (self.speed * 2.0).min(self.playback.max_speed);
    }

    /// Halve the speed, down to the configured limit.
    pub fn slower(&mut self) {
        self.speed = (self.speed / 2.0).max(self.playback.min_speed);
    }

    /// Wall-clock time between two frames at the current speed.
    pub fn frame_interval(&self) -> Duration {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Duration::from_millis(self.playback.fallback_frame_interval_ms);
        }
        let interval = Duration::from_secs_f64(self.dt / self.speed);
        interval.max(Duration::from_millis(self.playback.min_frame_interval_ms))
    }
}
