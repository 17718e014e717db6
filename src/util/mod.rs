//! Utility functions.
//!
//! This module provides clipboard helpers and the layout configuration
//! shared by the views.

mod clipboard;
mod layout_config;

pub use clipboard::{copy_frame_info, copy_to_clipboard, describe_frame};
pub use layout_config::{LayoutConfig, PlaybackConfig, PlotLayoutConfig, SceneLayoutConfig};
