//! Simulation data loading and representation.
//!
//! This module handles reading the time series written by a simulation
//! driver and validating them into a [`SimulationRun`].

mod reader;
mod run;

pub use reader::{
    read_run, DataReader, LENGTH_ATTR, RADIUS_ATTR, REFERENCE_VAR, STATES_VAR, TIME_VAR,
    VOLTAGE_VAR,
};
pub use run::SimulationRun;
