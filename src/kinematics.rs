//! Kinematic overlay for the rolling wheel animation.
//!
//! Each animation frame places three elements: the wheel, a marker on the rim
//! that follows the rolling-without-slipping constraint, and the chassis arm
//! pivoting at the wheel center. The only state carried between frames is the
//! horizontal displacement of the wheel, integrated from the rolling rate with
//! the trapezoidal rule.

use crate::error::{Result, WheelviewError};
use ndarray::ArrayView2;

/// Row of the trajectory holding the chassis angle in radians.
pub const ANGLE_ROW: usize = 0;
/// Row of the trajectory holding the rolling rate.
pub const RATE_ROW: usize = 1;

/// Displacement carried across sequential frames.
///
/// Owned by whoever drives the animation and passed into every
/// [`compute_frame`] call. Frames must be fed in increasing order starting at
/// zero; the recurrence is neither idempotent nor commutative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameState {
    displacement: f64,
}

impl FrameState {
    /// Create a state at zero displacement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to zero displacement.
    pub fn reset(&mut self) {
        self.displacement = 0.0;
    }

    /// Current cumulative displacement in meters.
    pub fn get(&self) -> f64 {
        self.displacement
    }

    /// Add `delta` meters to the displacement.
    pub fn accumulate(&mut self, delta: f64) {
        self.displacement += delta;
    }
}

/// A point in world coordinates (meters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Two endpoints of a drawn segment or marker pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint, always the wheel center in this module.
    pub a: Point,
    /// Second endpoint.
    pub b: Point,
}

impl Segment {
    /// Length of the segment.
    pub fn length(&self) -> f64 {
        self.a.distance(&self.b)
    }
}

/// Geometry of one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    /// Frame index this geometry belongs to.
    pub index: usize,
    /// Cumulative displacement used for this frame.
    pub displacement: f64,
    /// Wheel center.
    pub wheel_center: Point,
    /// Wheel radius.
    pub wheel_radius: f64,
    /// Wheel center to the tracked rim point.
    pub contact_marker: Segment,
    /// Pivot to the tip of the chassis arm.
    pub chassis: Segment,
}

/// Constant wheel and chassis dimensions for an animation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    radius: f64,
    chassis_length: f64,
}

impl WheelGeometry {
    /// Validate and build the geometry.
    pub fn new(radius: f64, chassis_length: f64) -> Result<Self> {
        validate_radius(radius)?;
        validate_length(chassis_length)?;
        Ok(Self {
            radius,
            chassis_length,
        })
    }

    /// Wheel radius `r`.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Chassis arm length `l`.
    pub fn chassis_length(&self) -> f64 {
        self.chassis_length
    }

    /// Compute frame `i` with this geometry.
    pub fn frame(
        &self,
        i: usize,
        y: ArrayView2<'_, f64>,
        dt: f64,
        state: &mut FrameState,
    ) -> Result<FrameGeometry> {
        compute_frame(i, y, dt, self.radius, self.chassis_length, state)
    }
}

fn validate_radius(r: f64) -> Result<()> {
    if !(r.is_finite() && r > 0.0) {
        return Err(WheelviewError::invalid(format!(
            "wheel radius must be positive, got {}",
            r
        )));
    }
    Ok(())
}

fn validate_length(l: f64) -> Result<()> {
    if !(l.is_finite() && l > 0.0) {
        return Err(WheelviewError::invalid(format!(
            "chassis length must be positive, got {}",
            l
        )));
    }
    Ok(())
}

/// Advance `state` to frame `i` and return the frame geometry.
///
/// `y` holds the chassis angle in row 0 and the rolling rate in row 1, one
/// column per time step of `dt` seconds. Frame 0 resets the displacement;
/// every later frame adds the trapezoidal increment
/// `0.5 * (y[1, i] + y[1, i - 1]) * dt`.
///
/// # Errors
///
/// `InvalidArgument` for a non-positive radius or chassis length, or a
/// trajectory with fewer than two rows. `IndexOutOfRange` when `i` is not a
/// column of `y`. The state is left untouched on error.
pub fn compute_frame(
    i: usize,
    y: ArrayView2<'_, f64>,
    dt: f64,
    r: f64,
    l: f64,
    state: &mut FrameState,
) -> Result<FrameGeometry> {
    validate_radius(r)?;
    validate_length(l)?;

    let (rows, len) = y.dim();
    if rows <= RATE_ROW {
        return Err(WheelviewError::invalid(format!(
            "trajectory needs angle and rate rows, got {} row(s)",
            rows
        )));
    }
    if i >= len {
        return Err(WheelviewError::IndexOutOfRange { index: i, len });
    }

    if i == 0 {
        state.reset();
    } else {
        state.accumulate(0.5 * (y[[RATE_ROW, i]] + y[[RATE_ROW, i - 1]]) * dt);
    }
    let x = state.get();

    let center = Point::new(x, r);

    // Rolling without slipping: the wheel has turned x / r radians.
    let roll = x / r;
    let rim = Point::new(x - r * roll.sin(), r - r * roll.cos());

    let angle = y[[ANGLE_ROW, i]];
    let tip = Point::new(x + l * angle.sin(), r + l * angle.cos());

    tracing::trace!(frame = i, displacement = x, "computed frame");

    Ok(FrameGeometry {
        index: i,
        displacement: x,
        wheel_center: center,
        wheel_radius: r,
        contact_marker: Segment { a: center, b: rim },
        chassis: Segment { a: center, b: tip },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    const EPS: f64 = 1e-12;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {} to be close to {}", a, b);
    }

    fn ramp(n: usize) -> Array2<f64> {
        Array2::from_shape_fn((2, n), |(row, col)| {
            let t = col as f64 * 0.05;
            if row == ANGLE_ROW {
                0.4 * (3.0 * t).sin()
            } else {
                0.2 + t * t
            }
        })
    }

    #[test]
    fn test_frame_state_accumulates_and_resets() {
        let mut state = FrameState::new();
        state.accumulate(0.25);
        state.accumulate(0.5);
        assert_close(state.get(), 0.75);
        state.reset();
        assert_eq!(state.get(), 0.0);
    }

    #[test]
    fn test_trapezoidal_recurrence() {
        let y = ramp(40);
        let dt = 0.05;
        let mut state = FrameState::new();
        let mut prev = compute_frame(0, y.view(), dt, 0.1, 0.3, &mut state).unwrap();
        for i in 1..40 {
            let cur = compute_frame(i, y.view(), dt, 0.1, 0.3, &mut state).unwrap();
            let expected = 0.5 * (y[[1, i]] + y[[1, i - 1]]) * dt;
            assert_close(cur.displacement - prev.displacement, expected);
            prev = cur;
        }
    }

    #[test]
    fn test_frame_zero_resets_regardless_of_prior_state() {
        let y = ramp(5);
        let mut state = FrameState::new();
        state.accumulate(12.0);

        let first = compute_frame(0, y.view(), 0.01, 0.1, 0.3, &mut state).unwrap();
        let second = compute_frame(0, y.view(), 0.01, 0.1, 0.3, &mut state).unwrap();

        assert_eq!(first.displacement, 0.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rim_point_lies_on_wheel() {
        let y = ramp(60);
        let r = 0.1;
        let mut state = FrameState::new();
        for i in 0..60 {
            let g = compute_frame(i, y.view(), 0.05, r, 0.3, &mut state).unwrap();
            assert_eq!(g.contact_marker.a, g.wheel_center);
            assert!((g.contact_marker.length() - r).abs() < EPS);
        }
    }

    #[test]
    fn test_chassis_is_rigid() {
        let y = ramp(60);
        let l = 0.3;
        let mut state = FrameState::new();
        for i in 0..60 {
            let g = compute_frame(i, y.view(), 0.05, 0.1, l, &mut state).unwrap();
            assert_eq!(g.chassis.a, g.wheel_center);
            assert!((g.chassis.length() - l).abs() < EPS);
        }
    }

    #[test]
    fn test_stationary_wheel_stays_put() {
        let y = array![[0.0, 0.0, 0.0], [0.0, 0.0, 0.0]];
        let mut state = FrameState::new();
        for i in 0..3 {
            let g = compute_frame(i, y.view(), 0.01, 0.1, 0.3, &mut state).unwrap();
            assert_eq!(g.displacement, 0.0);
            assert_eq!(g.wheel_center, Point::new(0.0, 0.1));
        }
    }

    #[test]
    fn test_constant_unit_rate() {
        let y = array![[0.0, 0.0], [1.0, 1.0]];
        let mut state = FrameState::new();
        compute_frame(0, y.view(), 0.1, 0.1, 0.3, &mut state).unwrap();
        let g = compute_frame(1, y.view(), 0.1, 0.1, 0.3, &mut state).unwrap();
        assert_close(g.displacement, 0.1);
        assert_close(state.get(), 0.1);
    }

    #[test]
    fn test_upright_arm_at_zero_angle() {
        let y = array![[0.0], [0.0]];
        let (r, l) = (0.1, 0.3);
        let mut state = FrameState::new();
        let g = compute_frame(0, y.view(), 0.01, r, l, &mut state).unwrap();
        assert_close(g.chassis.b.x, 0.0);
        assert_close(g.chassis.b.y, r + l);
        // At zero displacement the tracked rim point is the ground contact.
        assert_close(g.contact_marker.b.x, 0.0);
        assert_close(g.contact_marker.b.y, 0.0);
    }

    #[test]
    fn test_zero_radius_rejected() {
        let y = array![[0.0, 0.0], [1.0, 1.0]];
        let mut state = FrameState::new();
        state.accumulate(0.5);
        let err = compute_frame(1, y.view(), 0.1, 0.0, 0.3, &mut state).unwrap_err();
        assert!(matches!(err, WheelviewError::InvalidArgument(_)));
        assert_eq!(state.get(), 0.5);
    }

    #[test]
    fn test_negative_length_rejected() {
        let y = array![[0.0], [0.0]];
        let mut state = FrameState::new();
        let err = compute_frame(0, y.view(), 0.1, 0.1, -0.3, &mut state).unwrap_err();
        assert!(matches!(err, WheelviewError::InvalidArgument(_)));
    }

    #[test]
    fn test_index_one_past_end() {
        let y = array![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];
        let mut state = FrameState::new();
        let err = compute_frame(3, y.view(), 0.1, 0.1, 0.3, &mut state).unwrap_err();
        assert!(matches!(
            err,
            WheelviewError::IndexOutOfRange { index: 3, len: 3 }
        ));
    }

    #[test]
    fn test_single_row_trajectory_rejected() {
        let y = array![[0.0, 0.0]];
        let mut state = FrameState::new();
        let err = compute_frame(0, y.view(), 0.1, 0.1, 0.3, &mut state).unwrap_err();
        assert!(matches!(err, WheelviewError::InvalidArgument(_)));
    }

    #[test]
    fn test_wheel_geometry_validates_once() {
        assert!(WheelGeometry::new(0.0, 0.3).is_err());
        assert!(WheelGeometry::new(0.1, f64::NAN).is_err());

        let geometry = WheelGeometry::new(0.1, 0.3).unwrap();
        let y = array![[0.2, 0.1], [1.0, 3.0]];
        let mut a = FrameState::new();
        let mut b = FrameState::new();
        for i in 0..2 {
            let via_geometry = geometry.frame(i, y.view(), 0.1, &mut a).unwrap();
            let direct = compute_frame(i, y.view(), 0.1, 0.1, 0.3, &mut b).unwrap();
            assert_eq!(via_geometry, direct);
        }
    }
}
