//! Clipboard integration.

use crate::error::Result;
use crate::kinematics::FrameGeometry;
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Human-readable summary of one frame.
pub fn describe_frame(t: f64, frame: &FrameGeometry) -> String {
    let mut text = format!("Frame: {}\n", frame.index);
    text.push_str(&format!("Time: {} s\n", t));
    text.push_str(&format!("Displacement: {} m\n", frame.displacement));
    text.push_str(&format!(
        "Wheel: center ({}, {}), radius {}\n",
        frame.wheel_center.x, frame.wheel_center.y, frame.wheel_radius
    ));
    text.push_str(&format!(
        "Marker: ({}, {}) -> ({}, {})\n",
        frame.contact_marker.a.x,
        frame.contact_marker.a.y,
        frame.contact_marker.b.x,
        frame.contact_marker.b.y
    ));
    text.push_str(&format!(
        "Chassis: ({}, {}) -> ({}, {})\n",
        frame.chassis.a.x, frame.chassis.a.y, frame.chassis.b.x, frame.chassis.b.y
    ));
    text
}

/// Copy the summary of one frame to clipboard.
pub fn copy_frame_info(t: f64, frame: &FrameGeometry) -> Result<()> {
    copy_to_clipboard(&describe_frame(t, frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::{compute_frame, FrameState};
    use ndarray::array;

    #[test]
    fn test_describe_frame() {
        let y = array![[0.0], [0.0]];
        let frame = compute_frame(0, y.view(), 0.01, 0.1, 0.3, &mut FrameState::new()).unwrap();
        let text = describe_frame(0.0, &frame);
        assert!(text.starts_with("Frame: 0\n"));
        assert!(text.contains("Wheel: center (0, 0.1), radius 0.1"));
        assert_eq!(text.lines().count(), 6);
    }
}
