use crate::model::attendance::DayAttendance;
use crate::model::settings::MonthlySettings;
use anyhow::Result;

/// Where attendance and settings live between sessions.
///
/// Saves replace the whole record set, so the last write wins.
pub trait LedgerRepository {
    fn load_attendance(&self) -> Result<Vec<DayAttendance>>;
    fn load_settings(&self) -> Result<Vec<MonthlySettings>>;
    fn save_attendance(&self, records: &[DayAttendance]) -> Result<()>;
    fn save_settings(&self, records: &[MonthlySettings]) -> Result<()>;
}
