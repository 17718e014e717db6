//! Wheelview - a terminal viewer for wheel-and-chassis simulation runs.
//!
//! Wheelview loads the time series written by a simulation driver and shows
//! them three ways: the rolling wheel with its chassis arm, the angle and
//! velocity response, and the applied voltage.
//!
//! # Features
//!
//! - NetCDF input (`T`, `X`, optional `Xo` and `V`)
//! - Rolling-without-slipping animation with play, pause, step and speed control
//! - Response and voltage charts
//! - Headless CSV export of every frame
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use wheelview::kinematics::{compute_frame, FrameState};
//! use ndarray::array;
//!
//! let y = array![[0.0, 0.0], [1.0, 1.0]];
//! let mut state = FrameState::new();
//! compute_frame(0, y.view(), 0.1, 0.1, 0.3, &mut state)?;
//! let frame = compute_frame(1, y.view(), 0.1, 0.1, 0.3, &mut state)?;
//! println!("wheel at x = {}", frame.wheel_center.x);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod animation;
pub mod app;
pub mod data;
pub mod error;
pub mod export;
pub mod kinematics;
pub mod plot;
pub mod ui;
pub mod util;

pub use error::{Result, WheelviewError};
