pub mod cycle;

pub use cycle::{CycleParameters, JointType, ParameterError};
