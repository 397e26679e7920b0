use std::cell::RefCell;

use anyhow::Result;

use crate::model::attendance::DayAttendance;
use crate::model::settings::MonthlySettings;
use crate::repository::traits::LedgerRepository;

/// Keeps record sets in process. Nothing survives the session.
#[derive(Debug, Default)]
pub struct MemoryLedgerRepository {
    attendance: RefCell<Vec<DayAttendance>>,
    settings: RefCell<Vec<MonthlySettings>>,
}

impl MemoryLedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(attendance: Vec<DayAttendance>, settings: Vec<MonthlySettings>) -> Self {
        Self {
            attendance: RefCell::new(attendance),
            settings: RefCell::new(settings),
        }
    }
}

impl LedgerRepository for MemoryLedgerRepository {
    fn load_attendance(&self) -> Result<Vec<DayAttendance>> {
        Ok(self.attendance.borrow().clone())
    }

    fn load_settings(&self) -> Result<Vec<MonthlySettings>> {
        Ok(self.settings.borrow().clone())
    }

    fn save_attendance(&self, records: &[DayAttendance]) -> Result<()> {
        *self.attendance.borrow_mut() = records.to_vec();
        Ok(())
    }

    fn save_settings(&self, records: &[MonthlySettings]) -> Result<()> {
        *self.settings.borrow_mut() = records.to_vec();
        Ok(())
    }
}
