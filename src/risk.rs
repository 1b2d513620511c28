//! Injury-risk scoring
//!
//! Combines the biomechanical stress reading with the hormonal phase
//! multiplier into a bounded 0-10 risk score for a selected joint.

use crate::models::JointType;
use crate::phase::Phase;

/// Per-joint stress normalization window.
#[derive(Debug, Clone, Copy)]
pub struct StressWindow {
  /// Stress level at which exposure starts accumulating.
  pub base: f64,
  /// Stress level mapping to full exposure (E = 1).
  pub max: f64,
}

impl JointType {
  pub fn stress_window(&self) -> StressWindow {
    match self {
      JointType::Ankle => StressWindow { base: 5.8, max: 9.0 },
      JointType::Knee => StressWindow { base: 0.0, max: 3.0 },
    }
  }
}

/// Compute the injury-risk score for a joint under a given phase and stress
/// reading. Output is clamped to [0, 10].
///
/// Exposure is the stress value normalized over the joint's window,
/// `E = (S - base) / (max - base)`, then scaled by the phase multiplier F.
/// Negative exposure (stress below the joint's base) clamps to zero.
pub fn calculate_risk(phase: Phase, stress_value: f64, joint: JointType) -> f64 {
  let window = joint.stress_window();
  let span = window.max - window.base;
  // A zero-span window would turn the division non-finite. Unreachable with
  // the fixed table above; fail fast if a new joint ever violates it.
  assert!(span != 0.0, "stress window for {:?} has zero span", joint);

  let exposure = (stress_value - window.base) / span;
  (exposure * phase.risk_factor()).clamp(0.0, 10.0)
}
