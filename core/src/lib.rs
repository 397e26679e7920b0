pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod store;
pub mod time;
pub mod usecase;

pub use config::Config;
pub use error::LedgerError;
pub use model::attendance::{DayAttendance, DayKind, Meal};
pub use model::month::YearMonth;
pub use model::settings::{MonthlySettings, DEFAULT_MEAL_COST};
pub use model::summary::MonthSummary;
pub use repository::{FileLedgerRepository, LedgerRepository, MemoryLedgerRepository};
pub use service::carry_forward::CarryForwardResolver;
pub use service::ledger::LedgerCalculator;
pub use service::mutator::AttendanceMutator;
pub use store::{AttendanceStore, MonthlySettingsStore};
pub use time::{parse_day, parse_month};
pub use usecase::history::{HistoryTotals, HistoryUseCase};
pub use usecase::tracker::{SaveOutcome, Tracker};
