//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Contents of a simulation file to write.
pub struct RunSpec {
    pub time: Vec<f64>,
    /// Row-major `(rows, time)` states.
    pub states: Vec<Vec<f64>>,
    pub reference: Option<Vec<Vec<f64>>>,
    pub voltage: Option<Vec<f64>>,
    pub wheel_radius: Option<f64>,
    pub chassis_length: Option<f64>,
}

impl RunSpec {
    /// A rolling run at constant unit velocity.
    pub fn rolling(n: usize, dt: f64) -> Self {
        let time: Vec<f64> = (0..n).map(|k| k as f64 * dt).collect();
        let angle: Vec<f64> = time.iter().map(|t| 0.2 * t.sin()).collect();
        Self {
            states: vec![angle, vec![0.0; n], vec![1.0; n]],
            time,
            reference: None,
            voltage: None,
            wheel_radius: None,
            chassis_length: None,
        }
    }
}

/// Write `spec` to `name` inside `dir` and return the path.
pub fn write_run(dir: &TempDir, name: &str, spec: &RunSpec) -> PathBuf {
    let path = dir.path().join(name);
    write_run_at(&path, spec);
    path
}

fn write_run_at(path: &Path, spec: &RunSpec) {
    let mut file = netcdf::create(path).unwrap();
    file.add_dimension("time", spec.time.len()).unwrap();
    file.add_dimension("state", spec.states.len()).unwrap();

    if let Some(r) = spec.wheel_radius {
        file.add_attribute("wheel_radius", r).unwrap();
    }
    if let Some(l) = spec.chassis_length {
        file.add_attribute("chassis_length", l).unwrap();
    }

    let mut t = file.add_variable::<f64>("T", &["time"]).unwrap();
    t.put_values(spec.time.as_slice(), ..).unwrap();

    let flat: Vec<f64> = spec.states.iter().flatten().copied().collect();
    let mut x = file.add_variable::<f64>("X", &["state", "time"]).unwrap();
    x.put_values(flat.as_slice(), ..).unwrap();

    if let Some(ref reference) = spec.reference {
        let flat: Vec<f64> = reference.iter().flatten().copied().collect();
        let mut xo = file.add_variable::<f64>("Xo", &["state", "time"]).unwrap();
        xo.put_values(flat.as_slice(), ..).unwrap();
    }

    if let Some(ref voltage) = spec.voltage {
        let mut v = file.add_variable::<f64>("V", &["time"]).unwrap();
        v.put_values(voltage.as_slice(), ..).unwrap();
    }
}
