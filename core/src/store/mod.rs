pub mod attendance;
pub mod settings;

pub use attendance::AttendanceStore;
pub use settings::MonthlySettingsStore;
