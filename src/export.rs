//! Headless export of per-frame geometry as CSV.

use crate::data::SimulationRun;
use crate::error::Result;
use crate::kinematics::{FrameGeometry, FrameState, WheelGeometry};
use csv::Writer;
use std::io::Write;

/// Column names of the exported table.
pub const HEADER: [&str; 10] = [
    "frame",
    "t",
    "displacement",
    "wheel_x",
    "wheel_y",
    "wheel_r",
    "marker_x",
    "marker_y",
    "chassis_x",
    "chassis_y",
];

/// One CSV record for `frame` at time `t`.
pub fn frame_record(t: f64, frame: &FrameGeometry) -> [String; 10] {
    [
        frame.index.to_string(),
        t.to_string(),
        frame.displacement.to_string(),
        frame.wheel_center.x.to_string(),
        frame.wheel_center.y.to_string(),
        frame.wheel_radius.to_string(),
        frame.contact_marker.b.x.to_string(),
        frame.contact_marker.b.y.to_string(),
        frame.chassis.b.x.to_string(),
        frame.chassis.b.y.to_string(),
    ]
}

/// Write every frame of `run` to `out`, returning the number of frames.
pub fn export_frames<W: Write>(
    run: &SimulationRun,
    geometry: WheelGeometry,
    out: W,
) -> Result<usize> {
    let trajectory = run.trajectory();
    let dt = run.dt();
    let mut state = FrameState::new();
    let mut writer = Writer::from_writer(out);

    writer.write_record(HEADER)?;
    for i in 0..run.len() {
        let frame = geometry.frame(i, trajectory.view(), dt, &mut state)?;
        writer.write_record(frame_record(run.time[i], &frame))?;
    }
    writer.flush()?;

    tracing::info!(frames = run.len(), "exported frames");
    Ok(run.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_export_writes_header_and_one_row_per_frame() {
        let run = SimulationRun::new(
            array![0.0, 0.1, 0.2],
            array![[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
        )
        .unwrap();
        let geometry = WheelGeometry::new(0.1, 0.3).unwrap();

        let mut out = Vec::new();
        let n = export_frames(&run, geometry, &mut out).unwrap();
        assert_eq!(n, 3);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER.join(","));
        assert!(lines[1].starts_with("0,0,0,0,0.1,0.1,"));

        let displacement: f64 = lines[2].split(',').nth(2).unwrap().parse().unwrap();
        assert!((displacement - 0.1).abs() < 1e-12);
    }
}
