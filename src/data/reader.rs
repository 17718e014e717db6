//! NetCDF simulation reader.

use super::SimulationRun;
use crate::error::{Result, WheelviewError};
use ndarray::{Array1, Array2, ArrayD, Ix1, Ix2, IxDyn};
use netcdf::types::{FloatType, IntType, NcVariableType};
use std::path::Path;

/// Time variable name.
pub const TIME_VAR: &str = "T";
/// State trajectory variable name.
pub const STATES_VAR: &str = "X";
/// Reference trajectory variable name.
pub const REFERENCE_VAR: &str = "Xo";
/// Voltage variable name.
pub const VOLTAGE_VAR: &str = "V";
/// Global attribute carrying the wheel radius.
pub const RADIUS_ATTR: &str = "wheel_radius";
/// Global attribute carrying the chassis length.
pub const LENGTH_ATTR: &str = "chassis_length";

/// NetCDF data reader.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a simulation run from a NetCDF file.
    pub fn read_file(path: &Path) -> Result<SimulationRun> {
        let file = netcdf::open(path)
            .map_err(|e| WheelviewError::NetCDF(format!("Failed to open file: {}", e)))?;

        let time: Array1<f64> = read_required(&file, TIME_VAR)?
            .into_dimensionality::<Ix1>()
            .map_err(|_| WheelviewError::invalid("T must be one-dimensional"))?;
        let states: Array2<f64> = read_required(&file, STATES_VAR)?
            .into_dimensionality::<Ix2>()
            .map_err(|_| WheelviewError::invalid("X must be two-dimensional (state, time)"))?;

        let mut run = SimulationRun::new(time, states)?;

        if let Some(reference) = read_optional(&file, REFERENCE_VAR)? {
            let reference = reference
                .into_dimensionality::<Ix2>()
                .map_err(|_| WheelviewError::invalid("Xo must be two-dimensional"))?;
            run = run.with_reference(reference)?;
        }

        if let Some(voltage) = read_optional(&file, VOLTAGE_VAR)? {
            let voltage = voltage
                .into_dimensionality::<Ix1>()
                .map_err(|_| WheelviewError::invalid("V must be one-dimensional"))?;
            run = run.with_voltage(voltage)?;
        }

        run.wheel_radius = Self::global_f64(&file, RADIUS_ATTR);
        run.chassis_length = Self::global_f64(&file, LENGTH_ATTR);
        run.source = Some(path.to_path_buf());

        tracing::info!(
            samples = run.len(),
            states = run.states.nrows(),
            reference = run.reference.is_some(),
            voltage = run.voltage.is_some(),
            "read simulation run from {}",
            path.display()
        );

        Ok(run)
    }

    fn global_f64(file: &netcdf::File, name: &str) -> Option<f64> {
        use netcdf::AttributeValue;

        let attr = file.attribute(name)?;
        match attr.value() {
            Ok(AttributeValue::Double(v)) => Some(v),
            Ok(AttributeValue::Float(v)) => Some(v as f64),
            Ok(AttributeValue::Int(v)) => Some(v as f64),
            Ok(AttributeValue::Short(v)) => Some(v as f64),
            Ok(AttributeValue::Longlong(v)) => Some(v as f64),
            Ok(AttributeValue::Doubles(v)) => v.first().copied(),
            Ok(AttributeValue::Floats(v)) => v.first().map(|x| *x as f64),
            Ok(AttributeValue::Str(s)) => s.trim().parse().ok(),
            Ok(other) => {
                tracing::warn!("ignoring attribute {} with value {:?}", name, other);
                None
            },
            Err(e) => {
                tracing::warn!("unreadable attribute {}: {}", name, e);
                None
            },
        }
    }
}

/// Read a simulation run from a NetCDF file.
pub fn read_run(path: &Path) -> Result<SimulationRun> {
    DataReader::read_file(path)
}

fn read_required(file: &netcdf::File, name: &str) -> Result<ArrayD<f64>> {
    read_optional(file, name)?.ok_or_else(|| WheelviewError::missing_variable(name))
}

fn read_optional(file: &netcdf::File, name: &str) -> Result<Option<ArrayD<f64>>> {
    match file.variable(name) {
        Some(var) => {
            let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
            read_variable_array(&var, &shape).map(Some)
        },
        None => Ok(None),
    }
}

fn read_variable_array(var: &netcdf::Variable<'_>, shape: &[usize]) -> Result<ArrayD<f64>> {
    let vartype = var.vartype();

    let from_vec = |v: Vec<f64>| -> Result<ArrayD<f64>> {
        ArrayD::from_shape_vec(IxDyn(shape), v)
            .map_err(|e| WheelviewError::NetCDF(format!("Invalid shape/data size: {}", e)))
    };

    // Every numeric type is widened to f64.
    macro_rules! widen {
        ($t:ty) => {{
            let values: Vec<$t> = var.get_values(..).map_err(|e| {
                WheelviewError::NetCDF(format!(
                    "Failed to read {} data for {}: {}",
                    stringify!($t),
                    var.name(),
                    e
                ))
            })?;
            from_vec(values.into_iter().map(|x| x as f64).collect())
        }};
    }

    match vartype {
        NcVariableType::Float(FloatType::F64) => widen!(f64),
        NcVariableType::Float(FloatType::F32) => widen!(f32),
        NcVariableType::Int(IntType::I64) => widen!(i64),
        NcVariableType::Int(IntType::I32) => widen!(i32),
        NcVariableType::Int(IntType::I16) => widen!(i16),
        NcVariableType::Int(IntType::I8) => widen!(i8),
        NcVariableType::Int(IntType::U64) => widen!(u64),
        NcVariableType::Int(IntType::U32) => widen!(u32),
        NcVariableType::Int(IntType::U16) => widen!(u16),
        NcVariableType::Int(IntType::U8) => widen!(u8),
        _ => Err(WheelviewError::NetCDF(format!(
            "Variable {} has unsupported type {:?}",
            var.name(),
            vartype
        ))),
    }
}
