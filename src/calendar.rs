//! Calendar grid generation
//!
//! Builds the 6x7 month view: 42 consecutive day descriptors starting on the
//! Sunday on or before the first of the displayed month, each annotated with
//! its hormonal phase, color tag, risk multiplier and high-risk flag. Every
//! call is a full, pure recomputation from the parameter snapshot; nothing is
//! cached between calls.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::CycleParameters;
use crate::phase::Phase;

/// Cells in the 6-row, Sunday-first month grid.
pub const GRID_DAYS: i64 = 42;

/// Fixed display string tables (product UI locale).
pub const MONTH_NAMES: [&str; 12] = [
  "Enero",
  "Febrero",
  "Marzo",
  "Abril",
  "Mayo",
  "Junio",
  "Julio",
  "Agosto",
  "Septiembre",
  "Octubre",
  "Noviembre",
  "Diciembre",
];

pub const DAY_NAMES: [&str; 7] = ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"];

/// ---------------------------------------------------------------------------
/// Displayed month
/// ---------------------------------------------------------------------------

/// The month the calendar currently shows. Navigation wraps across year
/// boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonth {
  pub year: i32,
  /// 1-based month number.
  pub month: u32,
}

impl CalendarMonth {
  pub fn from_date(date: NaiveDate) -> Self {
    Self {
      year: date.year(),
      month: date.month(),
    }
  }

  pub fn first_day(&self) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(self.year, self.month, 1)
  }

  pub fn contains(&self, date: NaiveDate) -> bool {
    date.year() == self.year && date.month() == self.month
  }

  pub fn next_month(&self) -> Self {
    if self.month == 12 {
      Self { year: self.year + 1, month: 1 }
    } else {
      Self { year: self.year, month: self.month + 1 }
    }
  }

  pub fn prev_month(&self) -> Self {
    if self.month == 1 {
      Self { year: self.year - 1, month: 12 }
    } else {
      Self { year: self.year, month: self.month - 1 }
    }
  }

  /// Header string, e.g. "Agosto 2026".
  pub fn title(&self) -> String {
    match MONTH_NAMES.get(self.month.wrapping_sub(1) as usize) {
      Some(name) => format!("{} {}", name, self.year),
      None => format!("{}/{}", self.month, self.year),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Day descriptors
/// ---------------------------------------------------------------------------

/// One calendar cell, regenerated fresh on every recomputation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayDescriptor {
  pub date: NaiveDate,
  pub phase: Phase,
  pub phase_color: String,
  pub risk_factor: f64,
  pub is_high_risk: bool,
}

/// Generate the 42-cell grid for the displayed month, or an empty sequence
/// when no cycle start date has been entered.
///
/// Each cell's day-of-cycle is derived with a double modulo so that dates
/// before the last period still land in [1, cycle_duration]:
/// `((diff % cycle) + cycle) % cycle + 1`.
pub fn generate_calendar(params: &CycleParameters, month: CalendarMonth) -> Vec<DayDescriptor> {
  let Some(cycle_start) = params.last_period_date else {
    return Vec::new();
  };
  let Some(first_of_month) = month.first_day() else {
    return Vec::new();
  };
  let cycle = params.cycle_duration;
  if cycle < 1 {
    log::warn!(
      "cycle duration {} is not positive; returning empty calendar",
      cycle
    );
    return Vec::new();
  }

  // Back up to the Sunday that starts the first grid row.
  let grid_start =
    first_of_month - Duration::days(first_of_month.weekday().num_days_from_sunday() as i64);

  (0..GRID_DAYS)
    .map(|offset| {
      let date = grid_start + Duration::days(offset);
      let days_diff = (date - cycle_start).num_days();
      let day_of_cycle = ((days_diff % cycle) + cycle) % cycle + 1;
      let phase = Phase::classify(day_of_cycle, params.period_duration);

      DayDescriptor {
        date,
        phase,
        phase_color: phase.color().to_string(),
        risk_factor: phase.risk_factor(),
        is_high_risk: phase.is_high_risk(),
      }
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Month summary
/// ---------------------------------------------------------------------------

/// Derived view for the summary panel: high-risk days within the displayed
/// month. Recomputed by filtering the generated grid, never stored alongside
/// it.
#[derive(Debug, Clone, Serialize)]
pub struct MonthSummary {
  pub month: CalendarMonth,
  pub high_risk_count: usize,
  pub high_risk_days: Vec<DayDescriptor>,
}

impl MonthSummary {
  pub fn compute(days: &[DayDescriptor], month: CalendarMonth) -> Self {
    let high_risk_days: Vec<DayDescriptor> = days
      .iter()
      .filter(|d| d.is_high_risk && month.contains(d.date))
      .cloned()
      .collect();

    Self {
      month,
      high_risk_count: high_risk_days.len(),
      high_risk_days,
    }
  }

  /// Serialize for the presentation layer.
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}
