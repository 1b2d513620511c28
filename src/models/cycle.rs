use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Joint the risk score is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointType {
  Ankle,
  Knee,
}

impl std::fmt::Display for JointType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Ankle => write!(f, "ankle"),
      Self::Knee => write!(f, "knee"),
    }
  }
}

impl std::str::FromStr for JointType {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "ankle" => Ok(Self::Ankle),
      "knee" => Ok(Self::Knee),
      _ => Err(format!("Unknown joint type: {}", s)),
    }
  }
}

/// Cycle parameters as entered in the form. Owned by the caller; each
/// computation takes an immutable snapshot.
///
/// The core functions do not validate ranges themselves (see
/// [`CycleParameters::validate`] for the opt-in boundary check); the modulo
/// arithmetic in the calendar generator stays well-defined for any positive
/// cycle duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleParameters {
  /// First day of the most recent period. `None` means no data entered yet.
  pub last_period_date: Option<NaiveDate>,
  /// Full cycle length in days, supported range 21-35.
  pub cycle_duration: i64,
  /// Period length in days, supported range 3-8.
  pub period_duration: i64,
  pub joint_type: JointType,
  /// Biomechanical stress reading, supported range 0-10.
  pub stress_value: f64,
}

impl Default for CycleParameters {
  fn default() -> Self {
    Self {
      last_period_date: None,
      cycle_duration: 28,
      period_duration: 5,
      joint_type: JointType::Knee,
      stress_value: 5.0,
    }
  }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
  #[error("cycle duration {0} outside supported range 21-35 days")]
  CycleDurationOutOfRange(i64),
  #[error("period duration {0} outside supported range 3-8 days")]
  PeriodDurationOutOfRange(i64),
  #[error("stress value {0} outside supported range 0-10")]
  StressValueOutOfRange(f64),
}

impl CycleParameters {
  /// Strict range check for callers validating at the input boundary.
  pub fn validate(&self) -> Result<(), ParameterError> {
    if !(21..=35).contains(&self.cycle_duration) {
      return Err(ParameterError::CycleDurationOutOfRange(self.cycle_duration));
    }
    if !(3..=8).contains(&self.period_duration) {
      return Err(ParameterError::PeriodDurationOutOfRange(self.period_duration));
    }
    if !(0.0..=10.0).contains(&self.stress_value) {
      return Err(ParameterError::StressValueOutOfRange(self.stress_value));
    }
    Ok(())
  }
}
