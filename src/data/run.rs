//! A validated simulation run.

use crate::error::{Result, WheelviewError};
use ndarray::{s, Array1, Array2, ArrayView1};
use std::path::PathBuf;

/// Time series of one simulation run, all sharing the time axis `T`.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    /// Source file, when loaded from disk.
    pub source: Option<PathBuf>,
    /// Time samples, strictly increasing.
    pub time: Array1<f64>,
    /// State trajectory `X`, one row per state, one column per sample.
    pub states: Array2<f64>,
    /// Reference trajectory `Xo`, same shape as `states`.
    pub reference: Option<Array2<f64>>,
    /// Voltage samples `V`.
    pub voltage: Option<Array1<f64>>,
    /// Wheel radius stored alongside the data.
    pub wheel_radius: Option<f64>,
    /// Chassis length stored alongside the data.
    pub chassis_length: Option<f64>,
}

impl SimulationRun {
    /// Build a run from time samples and a 2- or 3-row state array.
    pub fn new(time: Array1<f64>, states: Array2<f64>) -> Result<Self> {
        if time.is_empty() {
            return Err(WheelviewError::invalid("time series is empty"));
        }
        if let Some(k) = (1..time.len()).find(|&k| time[k] <= time[k - 1]) {
            return Err(WheelviewError::invalid(format!(
                "time must be strictly increasing (T[{}] = {} after {})",
                k,
                time[k],
                time[k - 1]
            )));
        }

        let (rows, cols) = states.dim();
        if !(2..=3).contains(&rows) {
            return Err(WheelviewError::invalid(format!(
                "state array must have 2 or 3 rows, got {}",
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

        Ok(Self {
            source: None,
            time,
            states,
            reference: None,
            voltage: None,
            wheel_radius: None,
            chassis_length: None,
        })
    }

    /// Attach a reference trajectory drawn under the response.
    pub fn with_reference(mut self, reference: Array2<f64>) -> Result<Self> {
        if reference.dim() != self.states.dim() {
            return Err(WheelviewError::invalid(format!(
                "reference shape {:?} does not match state shape {:?}",
                reference.dim(),
                self.states.dim()
            )));
        }
        self.reference = Some(reference);
        Ok(self)
    }

    /// Attach the voltage series.
    pub fn with_voltage(mut self, voltage: Array1<f64>) -> Result<Self> {
        if voltage.len() != self.len() {
            return Err(WheelviewError::invalid(format!(
                "voltage has {} samples but time has {}",
                voltage.len(),
                self.len()
            )));
        }
        self.voltage = Some(voltage);
        Ok(self)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the run has no samples. Never true for a validated run.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Time step, taken from the first two samples.
    pub fn dt(&self) -> f64 {
        if self.len() < 2 {
            0.0
        } else {
            self.time[1] - self.time[0]
        }
    }

    /// Last time sample.
    pub fn final_time(&self) -> f64 {
        self.time[self.len() - 1]
    }

    /// Row of `states` holding the velocity.
    pub fn velocity_row(&self) -> usize {
        self.states.nrows() - 1
    }

    /// Chassis angle in radians.
    pub fn angle(&self) -> ArrayView1<'_, f64> {
        self.states.row(0)
    }

    /// Velocity row.
    pub fn velocity(&self) -> ArrayView1<'_, f64> {
        self.states.row(self.velocity_row())
    }

    /// Two-row trajectory (angle, rate) driving the animation.
    pub fn trajectory(&self) -> Array2<f64> {
        let mut y = Array2::zeros((2, self.len()));
        y.slice_mut(s![0, ..]).assign(&self.angle());
        y.slice_mut(s![1, ..]).assign(&self.velocity());
        y
    }

    /// Display name of the run.
    pub fn name(&self) -> String {
        self.source
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "simulation".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn time(n: usize) -> Array1<f64> {
        Array1::from_iter((0..n).map(|k| k as f64 * 0.01))
    }

    #[test]
    fn test_three_row_states_use_last_row_for_velocity() {
        let states = array![[0.1, 0.2, 0.3], [9.0, 9.0, 9.0], [1.0, 2.0, 3.0]];
        let run = SimulationRun::new(time(3), states).unwrap();
        assert_eq!(run.velocity_row(), 2);

        let y = run.trajectory();
        assert_eq!(y, array![[0.1, 0.2, 0.3], [1.0, 2.0, 3.0]]);
    }

    #[test]
    fn test_two_row_states_use_second_row_for_velocity() {
        let states = array![[0.1, 0.2], [4.0, 5.0]];
        let run = SimulationRun::new(time(2), states).unwrap();
        assert_eq!(run.velocity_row(), 1);
        assert_eq!(run.velocity().to_vec(), vec![4.0, 5.0]);
    }

    #[test]
    fn test_dt_and_final_time() {
        let run = SimulationRun::new(time(5), Array2::zeros((2, 5))).unwrap();
        assert!((run.dt() - 0.01).abs() < 1e-12);
        assert!((run.final_time() - 0.04).abs() < 1e-12);

        let single = SimulationRun::new(time(1), Array2::zeros((2, 1))).unwrap();
        assert_eq!(single.dt(), 0.0);
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let err = SimulationRun::new(time(4), Array2::zeros((2, 3))).unwrap_err();
        assert!(matches!(err, WheelviewError::InvalidArgument(_)));

        let run = SimulationRun::new(time(3), Array2::zeros((3, 3))).unwrap();
        assert!(run.clone().with_voltage(Array1::zeros(2)).is_err());
        assert!(run.clone().with_reference(Array2::zeros((2, 3))).is_err());
        assert!(run.with_voltage(Array1::zeros(3)).is_ok());
    }

    #[test]
    fn test_bad_shapes_rejected() {
        assert!(SimulationRun::new(time(3), Array2::zeros((1, 3))).is_err());
        assert!(SimulationRun::new(time(3), Array2::zeros((4, 3))).is_err());
        assert!(SimulationRun::new(Array1::zeros(0), Array2::zeros((2, 0))).is_err());
    }

    #[test]
    fn test_non_increasing_time_rejected() {
        let t = array![0.0, 0.1, 0.1];
        let err = SimulationRun::new(t, Array2::zeros((2, 3))).unwrap_err();
        assert!(err.to_string().contains("strictly increasing"));
    }
}
