//! Hormonal phase classification
//!
//! Maps a 1-based day-of-cycle index to one of six fixed phases. The cutoffs
//! are calendar-day thresholds tuned for a ~28-day reference cycle and are
//! deliberately not rescaled for other configured cycle lengths; for cycles
//! far from 28 days the late phases stretch or shrink accordingly. Known
//! limitation of the model, kept as-is.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
  Menstrual,
  EarlyFollicular,
  LateFollicular, // high risk
  Ovulation,
  EarlyLuteal,
  LateLuteal, // high risk
}

impl Phase {
  /// All phases in cycle order, for rendering the legend.
  pub const ALL: [Phase; 6] = [
    Phase::Menstrual,
    Phase::EarlyFollicular,
    Phase::LateFollicular,
    Phase::Ovulation,
    Phase::EarlyLuteal,
    Phase::LateLuteal,
  ];

  /// Classify a day of the cycle. `day_of_cycle` is 1-based and must already
  /// be normalized into [1, cycle_duration] by the caller.
  pub fn classify(day_of_cycle: i64, period_duration: i64) -> Self {
    match day_of_cycle {
      d if d <= period_duration => Phase::Menstrual,
      d if d <= 7 => Phase::EarlyFollicular,
      d if d <= 13 => Phase::LateFollicular,
      d if d <= 16 => Phase::Ovulation,
      d if d <= 22 => Phase::EarlyLuteal,
      _ => Phase::LateLuteal,
    }
  }

  /// Hormonal risk multiplier F applied to the biomechanical exposure.
  pub fn risk_factor(&self) -> f64 {
    match self {
      Phase::Menstrual => 1.0,
      Phase::EarlyFollicular => 1.2,
      Phase::LateFollicular => 1.8,
      Phase::Ovulation => 1.3,
      Phase::EarlyLuteal => 1.1,
      Phase::LateLuteal => 1.7,
    }
  }

  /// Color tag the presentation layer paints the day cell with.
  pub fn color(&self) -> &'static str {
    match self {
      Phase::Menstrual => "bg-pink-200",
      Phase::EarlyFollicular => "bg-blue-200",
      Phase::LateFollicular => "bg-blue-400",
      Phase::Ovulation => "bg-purple-300",
      Phase::EarlyLuteal => "bg-orange-200",
      Phase::LateLuteal => "bg-red-200",
    }
  }

  /// Display label (fixed Spanish string table from the product UI).
  pub fn label(&self) -> &'static str {
    match self {
      Phase::Menstrual => "Menstrual",
      Phase::EarlyFollicular => "Folicular Temprana",
      Phase::LateFollicular => "Folicular Tardía",
      Phase::Ovulation => "Ovulación",
      Phase::EarlyLuteal => "Lútea Temprana",
      Phase::LateLuteal => "Lútea Tardía",
    }
  }

  /// Elevated ligament-laxity windows: late follicular and late luteal.
  pub fn is_high_risk(&self) -> bool {
    matches!(self, Phase::LateFollicular | Phase::LateLuteal)
  }
}

impl std::fmt::Display for Phase {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.label())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_classification_thresholds() {
    let period = 5;
    assert_eq!(Phase::classify(1, period), Phase::Menstrual);
    assert_eq!(Phase::classify(5, period), Phase::Menstrual);
    assert_eq!(Phase::classify(6, period), Phase::EarlyFollicular);
    assert_eq!(Phase::classify(7, period), Phase::EarlyFollicular);
    assert_eq!(Phase::classify(8, period), Phase::LateFollicular);
    assert_eq!(Phase::classify(13, period), Phase::LateFollicular);
    assert_eq!(Phase::classify(14, period), Phase::Ovulation);
    assert_eq!(Phase::classify(16, period), Phase::Ovulation);
    assert_eq!(Phase::classify(17, period), Phase::EarlyLuteal);
    assert_eq!(Phase::classify(22, period), Phase::EarlyLuteal);
    assert_eq!(Phase::classify(23, period), Phase::LateLuteal);
    assert_eq!(Phase::classify(28, period), Phase::LateLuteal);
  }

  #[test]
  fn test_every_day_classifies() {
    // Total over [1, cycle_duration] for the whole supported parameter grid.
    for cycle in 21..=35 {
      for period in 3..=8 {
        for day in 1..=cycle {
          let phase = Phase::classify(day, period);
          assert!(
            Phase::ALL.contains(&phase),
            "day {} (period {}) left unclassified",
            day,
            period
          );
        }
      }
    }
  }

  #[test]
  fn test_phases_in_cycle_order() {
    // As the day index increases, the phase index never decreases.
    let order = |p: Phase| Phase::ALL.iter().position(|q| *q == p).unwrap();
    for period in 3..=7 {
      let mut last = 0;
      for day in 1..=28 {
        let idx = order(Phase::classify(day, period));
        assert!(
          idx >= last,
          "phase order regressed at day {} (period {})",
          day,
          period
        );
        last = idx;
      }
    }
  }

  #[test]
  fn test_long_period_takes_precedence() {
    // With an 8-day period, Menstrual swallows the early-follicular window.
    assert_eq!(Phase::classify(7, 8), Phase::Menstrual);
    assert_eq!(Phase::classify(8, 8), Phase::Menstrual);
    assert_eq!(Phase::classify(9, 8), Phase::LateFollicular);
  }

  #[test]
  fn test_high_risk_flags() {
    for phase in Phase::ALL {
      let expected = phase == Phase::LateFollicular || phase == Phase::LateLuteal;
      assert_eq!(phase.is_high_risk(), expected, "wrong flag for {:?}", phase);
    }
  }

  #[test]
  fn test_risk_factor_table() {
    assert_eq!(Phase::Menstrual.risk_factor(), 1.0);
    assert_eq!(Phase::EarlyFollicular.risk_factor(), 1.2);
    assert_eq!(Phase::LateFollicular.risk_factor(), 1.8);
    assert_eq!(Phase::Ovulation.risk_factor(), 1.3);
    assert_eq!(Phase::EarlyLuteal.risk_factor(), 1.1);
    assert_eq!(Phase::LateLuteal.risk_factor(), 1.7);
  }
}
