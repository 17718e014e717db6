//! Layout and playback configuration for the views.

/// World-space window of the animation scene, in meters.
#[derive(Debug, Clone)]
pub struct SceneLayoutConfig {
    /// Horizontal extent of the window.
    pub x_bounds: [f64; 2],
    /// Vertical extent of the window.
    pub y_bounds: [f64; 2],
}

impl Default for SceneLayoutConfig {
    fn default() -> Self {
        Self {
            x_bounds: [-0.1, 0.55],
            y_bounds: [-0.025, 0.30],
        }
    }
}

impl SceneLayoutConfig {
    /// Horizontal window that keeps `x` in view.
    ///
    /// The window stays put while `x` is inside it and otherwise shifts by
    /// whole window widths.
    pub fn x_window(&self, x: f64) -> [f64; 2] {
        let [lo, hi] = self.x_bounds;
        let width = hi - lo;
        if width <= 0.0 || !x.is_finite() {
            return self.x_bounds;
        }
        let shift = ((x - lo) / width).floor() * width;
        [lo + shift, hi + shift]
    }
}

/// Configuration for chart views.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Padding factor for Y-axis (0.1 = 10% margin on each side).
    pub y_axis_padding_factor: f64,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.1,
        }
    }
}

/// Animation pacing.
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Shortest interval between two frames in milliseconds.
    pub min_frame_interval_ms: u64,
    /// Interval used when the run has no usable time step.
    pub fallback_frame_interval_ms: u64,
    /// Slowest playback speed multiplier.
    pub min_speed: f64,
    /// Fastest playback speed multiplier.
    pub max_speed: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            min_frame_interval_ms: 10,
            fallback_frame_interval_ms: 40,
            min_speed: 0.125,
            max_speed: 16.0,
        }
    }
}

/// Combined layout configuration for all views.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Animation scene window.
    pub scene: SceneLayoutConfig,
    /// Chart views.
    pub plot: PlotLayoutConfig,
    /// Animation pacing.
    pub playback: PlaybackConfig,
}
