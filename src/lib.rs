//! Menstrual-cycle calendar core
//!
//! Pure computational core behind a single-page cycle-tracking calendar:
//! classifies each day of the cycle into a hormonal phase, scores joint
//! injury risk from a biomechanical stress reading, and builds the 42-cell
//! month grid the presentation layer renders. The caller owns the parameter
//! snapshot and re-invokes [`generate_calendar`] on every change; all
//! functions here are synchronous, deterministic and state-free.

pub mod calendar;
pub mod models;
pub mod phase;
pub mod risk;

pub use calendar::{
  generate_calendar, CalendarMonth, DayDescriptor, MonthSummary, DAY_NAMES, GRID_DAYS, MONTH_NAMES,
};
pub use models::{CycleParameters, JointType, ParameterError};
pub use phase::Phase;
pub use risk::{calculate_risk, StressWindow};
