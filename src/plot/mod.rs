//! Time-series charts for a simulation run.
//!
//! Series preparation lives here and is independent of the terminal; the
//! `ui` submodule turns the prepared series into ratatui charts.

pub mod ui;

use crate::data::SimulationRun;
use crate::error::{Result, WheelviewError};
use crate::util::PlotLayoutConfig;
use ndarray::{ArrayView1, ArrayView2};

/// Points of a chart line as `(time, value)` pairs.
pub type Series = Vec<(f64, f64)>;

/// Chassis angle and velocity response.
#[derive(Debug, Clone)]
pub struct ResponsePlot {
    /// Angle in degrees.
    pub angle: Series,
    /// Reference angle in degrees.
    pub angle_reference: Option<Series>,
    /// Velocity.
    pub velocity: Series,
    /// Reference velocity.
    pub velocity_reference: Option<Series>,
    /// Zero line spanning the time axis.
    pub baseline: Series,
    /// Time axis bounds.
    pub x_bounds: [f64; 2],
    /// Angle axis bounds in degrees.
    pub angle_bounds: [f64; 2],
    /// Velocity axis bounds.
    pub velocity_bounds: [f64; 2],
}

impl ResponsePlot {
    /// Prepare the response of `states` over `time`.
    ///
    /// `states` holds the angle in row 0 and the velocity in its last row
    /// (2 or 3 rows). `reference`, when given, must match its shape.
    pub fn new(
        time: ArrayView1<'_, f64>,
        states: ArrayView2<'_, f64>,
        reference: Option<ArrayView2<'_, f64>>,
        config: &PlotLayoutConfig,
    ) -> Result<Self> {
        if time.is_empty() {
            return Err(WheelviewError::invalid("time series is empty"));
        }
        let (rows, cols) = states.dim();
        if !(2..=3).contains(&rows) {
            return Err(WheelviewError::invalid(format!(
                "response needs 2 or 3 state rows, got {}",
                rows
            )));
        }
        if cols != time.len() {
            return Err(WheelviewError::invalid(format!(
                "state array has {} samples but time has {}",
                cols,
                time.len()
            )));
        }
        if let Some(reference) = reference {
            if reference.dim() != states.dim() {
                return Err(WheelviewError::invalid(format!(
                    "reference shape {:?} does not match state shape {:?}",
                    reference.dim(),
                    states.dim()
                )));
            }
        }

        let velocity_row = rows - 1;
        let angle = degrees_series(time, states.row(0));
        let velocity = series(time, states.row(velocity_row));
        let angle_reference = reference.map(|r| degrees_series(time, r.row(0)));
        let velocity_reference = reference.map(|r| series(time, r.row(velocity_row)));

        let x_bounds = time_bounds(time);
        let padding = config.y_axis_padding_factor;
        let angle_bounds = padded_bounds(
            angle
                .iter()
                .chain(angle_reference.iter().flatten())
                .map(|&(_, v)| v),
            padding,
        );
        let velocity_bounds = padded_bounds(
            velocity
                .iter()
                .chain(velocity_reference.iter().flatten())
                .map(|&(_, v)| v),
            padding,
        );

        Ok(Self {
            angle,
            angle_reference,
            velocity,
            velocity_reference,
            baseline: vec![(0.0, 0.0), (x_bounds[1], 0.0)],
            x_bounds,
            angle_bounds,
            velocity_bounds,
        })
    }

    /// Prepare the response of a loaded run.
    pub fn from_run(run: &SimulationRun, config: &PlotLayoutConfig) -> Result<Self> {
        Self::new(
            run.time.view(),
            run.states.view(),
            run.reference.as_ref().map(|r| r.view()),
            config,
        )
    }
}

/// Voltage applied over time.
#[derive(Debug, Clone)]
pub struct VoltagePlot {
    /// Voltage samples.
    pub voltage: Series,
    /// Time axis bounds.
    pub x_bounds: [f64; 2],
    /// Voltage axis bounds.
    pub y_bounds: [f64; 2],
}

impl VoltagePlot {
    /// Prepare the voltage chart.
    pub fn new(
        time: ArrayView1<'_, f64>,
        voltage: ArrayView1<'_, f64>,
        config: &PlotLayoutConfig,
    ) -> Result<Self> {
        if time.is_empty() {
            return Err(WheelviewError::invalid("time series is empty"));
        }
        if voltage.len() != time.len() {
            return Err(WheelviewError::invalid(format!(
                "voltage has {} samples but time has {}",
                voltage.len(),
                time.len()
            )));
        }

        let voltage = series(time, voltage);
        let y_bounds = padded_bounds(voltage.iter().map(|&(_, v)| v), config.y_axis_padding_factor);

        Ok(Self {
            voltage,
            x_bounds: time_bounds(time),
            y_bounds,
        })
    }

    /// Prepare the voltage chart of a run, if it carries one.
    pub fn from_run(run: &SimulationRun, config: &PlotLayoutConfig) -> Result<Option<Self>> {
        run.voltage
            .as_ref()
            .map(|v| Self::new(run.time.view(), v.view(), config))
            .transpose()
    }
}

fn series(time: ArrayView1<'_, f64>, values: ArrayView1<'_, f64>) -> Series {
    time.iter().copied().zip(values.iter().copied()).collect()
}

fn degrees_series(time: ArrayView1<'_, f64>, radians: ArrayView1<'_, f64>) -> Series {
    time.iter()
        .copied()
        .zip(radians.iter().map(|a| a.to_degrees()))
        .collect()
}

/// `[0, T_last]`, widened to `[0, 1]` when the run ends at or before zero.
fn time_bounds(time: ArrayView1<'_, f64>) -> [f64; 2] {
    let end = time.len().checked_sub(1).map(|k| time[k]).unwrap_or(0.0);
    if end > 0.0 {
        [0.0, end]
    } else {
        [0.0, 1.0]
    }
}

/// Bounds covering zero and every finite value, padded by `factor` of the span.
fn padded_bounds(values: impl Iterator<Item = f64>, factor: f64) -> [f64; 2] {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let span = max - min;
    if span <= 0.0 {
        return [min - 1.0, max + 1.0];
    }
    let pad = span * factor;
    [min - pad, max + pad]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};
    use std::f64::consts::PI;

    fn config() -> PlotLayoutConfig {
        PlotLayoutConfig::default()
    }

    #[test]
    fn test_response_converts_angle_to_degrees() {
        let t = array![0.0, 0.5, 1.0];
        let x = array![[0.0, PI / 2.0, -PI], [0.0, 0.0, 0.0], [0.1, 0.2, 0.3]];
        let plot = ResponsePlot::new(t.view(), x.view(), None, &config()).unwrap();

        let degrees: Vec<f64> = plot.angle.iter().map(|p| p.1).collect();
        assert!((degrees[1] - 90.0).abs() < 1e-9);
        assert!((degrees[2] + 180.0).abs() < 1e-9);
        assert_eq!(plot.velocity, vec![(0.0, 0.1), (0.5, 0.2), (1.0, 0.3)]);
        assert_eq!(plot.x_bounds, [0.0, 1.0]);
        assert_eq!(plot.baseline, vec![(0.0, 0.0), (1.0, 0.0)]);
        assert!(plot.angle_reference.is_none());
    }

    #[test]
    fn test_response_two_rows_uses_second_row_for_velocity() {
        let t = array![0.0, 1.0];
        let x = array![[0.0, 0.0], [3.0, 4.0]];
        let plot = ResponsePlot::new(t.view(), x.view(), None, &config()).unwrap();
        assert_eq!(plot.velocity, vec![(0.0, 3.0), (1.0, 4.0)]);
    }

    #[test]
    fn test_response_with_reference() {
        let t = array![0.0, 1.0];
        let x = array![[0.0, 0.1], [0.0, 0.0], [1.0, 1.0]];
        let xo = array![[0.0, 0.0], [0.0, 0.0], [2.0, 2.0]];
        let plot = ResponsePlot::new(t.view(), x.view(), Some(xo.view()), &config()).unwrap();

        assert_eq!(plot.velocity_reference, Some(vec![(0.0, 2.0), (1.0, 2.0)]));
        assert!(plot.velocity_bounds[1] > 2.0);
    }

    #[test]
    fn test_response_rejects_mismatched_lengths() {
        let t = array![0.0, 1.0, 2.0];
        let x: Array2<f64> = Array2::zeros((3, 2));
        let err = ResponsePlot::new(t.view(), x.view(), None, &config()).unwrap_err();
        assert!(matches!(err, WheelviewError::InvalidArgument(_)));

        let x: Array2<f64> = Array2::zeros((3, 3));
        let xo: Array2<f64> = Array2::zeros((2, 3));
        let err =
            ResponsePlot::new(t.view(), x.view(), Some(xo.view()), &config()).unwrap_err();
        assert!(matches!(err, WheelviewError::InvalidArgument(_)));
    }

    #[test]
    fn test_voltage_rejects_mismatched_lengths() {
        let t = array![0.0, 1.0, 2.0];
        let v = array![1.0, 2.0];
        let err = VoltagePlot::new(t.view(), v.view(), &config()).unwrap_err();
        assert!(matches!(err, WheelviewError::InvalidArgument(_)));
    }

    #[test]
    fn test_voltage_bounds_include_zero() {
        let t = array![0.0, 1.0, 2.0];
        let v = array![2.0, 4.0, 6.0];
        let plot = VoltagePlot::new(t.view(), v.view(), &config()).unwrap();
        // Range [0, 6] padded by 10%.
        assert!((plot.y_bounds[0] + 0.6).abs() < 1e-9);
        assert!((plot.y_bounds[1] - 6.6).abs() < 1e-9);
        assert_eq!(plot.x_bounds, [0.0, 2.0]);
    }

    #[test]
    fn test_flat_series_gets_unit_band() {
        assert_eq!(padded_bounds([0.0, 0.0].into_iter(), 0.1), [-1.0, 1.0]);
    }

    #[test]
    fn test_nan_values_ignored_in_bounds() {
        let bounds = padded_bounds([1.0, f64::NAN, -1.0].into_iter(), 0.0);
        assert_eq!(bounds, [-1.0, 1.0]);
    }
}
