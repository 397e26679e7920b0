use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::LedgerError;
use crate::model::attendance::DayAttendance;
use crate::model::month::YearMonth;
use crate::model::settings::MonthlySettings;
use crate::model::summary::MonthSummary;
use crate::repository::LedgerRepository;
use crate::service::carry_forward::CarryForwardResolver;
use crate::service::ledger::LedgerCalculator;
use crate::service::mutator::AttendanceMutator;
use crate::store::{AttendanceStore, MonthlySettingsStore};
use crate::usecase::history::HistoryUseCase;

/// Result of writing a mutation through to the repository.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved,
    /// The change is live in memory but the repository rejected it.
    LocalOnly(LedgerError),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }

    pub fn warning(&self) -> Option<&LedgerError> {
        match self {
            SaveOutcome::Saved => None,
            SaveOutcome::LocalOnly(e) => Some(e),
        }
    }
}

/// Record set a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Changed {
    Attendance,
    Settings,
    Both,
}

/// One user's ledger session: in-memory stores backed by a repository.
///
/// Memory is authoritative. Load failures start the session empty and save
/// failures never roll a mutation back. A record set that failed to load is
/// not written back until the session changes it, so an unreadable file is
/// not replaced by an unrelated edit.
pub struct Tracker<R: LedgerRepository> {
    repo: R,
    attendance: AttendanceStore,
    settings: MonthlySettingsStore,
    attendance_unread: bool,
    settings_unread: bool,
}

impl<R: LedgerRepository> Tracker<R> {
    pub fn open(repo: R, config: &Config) -> Self {
        let (attendance, attendance_unread) = match repo.load_attendance() {
            Ok(records) => (AttendanceStore::from_records(records), false),
            Err(e) => {
                let err = LedgerError::persistence("load attendance", e);
                warn!(error = %err, "starting with empty attendance");
                (AttendanceStore::new(), true)
            }
        };
        let (settings, settings_unread) = match repo.load_settings() {
            Ok(records) => (
                MonthlySettingsStore::from_records(records, config.default_meal_cost),
                false,
            ),
            Err(e) => {
                let err = LedgerError::persistence("load settings", e);
                warn!(error = %err, "starting with default settings");
                (MonthlySettingsStore::new(config.default_meal_cost), true)
            }
        };
        info!(
            attendance = attendance.len(),
            months = settings.months().len(),
            "ledger loaded"
        );

        Self {
            repo,
            attendance,
            settings,
            attendance_unread,
            settings_unread,
        }
    }

    pub fn summary(&self, period: YearMonth) -> MonthSummary {
        LedgerCalculator::new(&self.attendance, &self.settings).calculate(period)
    }

    pub fn attendance(&self, date: NaiveDate) -> DayAttendance {
        self.attendance.get(date)
    }

    pub fn settings(&self, period: YearMonth) -> MonthlySettings {
        self.settings.get(period)
    }

    pub fn history(&self) -> HistoryUseCase<'_> {
        HistoryUseCase::new(&self.attendance, &self.settings)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn toggle_lunch(&mut self, date: NaiveDate) -> SaveOutcome {
        AttendanceMutator::new(&mut self.attendance).toggle_lunch(date);
        self.persist(Changed::Attendance)
    }

    pub fn toggle_dinner(&mut self, date: NaiveDate) -> SaveOutcome {
        AttendanceMutator::new(&mut self.attendance).toggle_dinner(date);
        self.persist(Changed::Attendance)
    }

    pub fn set_meals(
        &mut self,
        date: NaiveDate,
        is_lunch_present: bool,
        is_dinner_present: bool,
    ) -> SaveOutcome {
        AttendanceMutator::new(&mut self.attendance).set_meals(
            date,
            is_lunch_present,
            is_dinner_present,
        );
        self.persist(Changed::Attendance)
    }

    pub fn set_both_present(&mut self, date: NaiveDate) -> SaveOutcome {
        AttendanceMutator::new(&mut self.attendance).set_both_present(date);
        self.persist(Changed::Attendance)
    }

    pub fn set_both_absent(&mut self, date: NaiveDate) -> SaveOutcome {
        AttendanceMutator::new(&mut self.attendance).set_both_absent(date);
        self.persist(Changed::Attendance)
    }

    pub fn set_advance(
        &mut self,
        period: YearMonth,
        amount: Decimal,
    ) -> Result<SaveOutcome, LedgerError> {
        self.settings.set_advance(period, amount)?;
        info!(month = %period, %amount, "advance updated");
        Ok(self.persist(Changed::Settings))
    }

    pub fn set_meal_costs(
        &mut self,
        period: YearMonth,
        lunch_cost: Decimal,
        dinner_cost: Decimal,
    ) -> Result<SaveOutcome, LedgerError> {
        self.settings.set_meal_costs(period, lunch_cost, dinner_cost)?;
        info!(month = %period, %lunch_cost, %dinner_cost, "meal costs updated");
        Ok(self.persist(Changed::Settings))
    }

    /// Drops every attendance record and every month's settings.
    pub fn reset(&mut self) -> SaveOutcome {
        self.attendance.clear();
        self.settings.clear();
        info!("ledger reset");
        self.persist(Changed::Both)
    }

    fn refresh_carry_cache(&mut self) {
        let carries = CarryForwardResolver::new(&self.attendance, &self.settings).resolve_active();
        for (period, carried) in carries {
            self.settings.cache_carry(period, carried);
        }
    }

    fn persist(&mut self, changed: Changed) -> SaveOutcome {
        if changed != Changed::Settings {
            self.attendance_unread = false;
        }
        if changed != Changed::Attendance {
            self.settings_unread = false;
        }
        self.refresh_carry_cache();

        let attendance = if self.attendance_unread {
            debug!("attendance failed to load, leaving the stored copy alone");
            Ok(())
        } else {
            self.repo
                .save_attendance(&self.attendance.records())
                .map_err(|e| LedgerError::persistence("save attendance", e))
        };
        let settings = if self.settings_unread {
            debug!("settings failed to load, leaving the stored copy alone");
            Ok(())
        } else {
            self.repo
                .save_settings(&self.settings.records())
                .map_err(|e| LedgerError::persistence("save settings", e))
        };

        match attendance.and(settings) {
            Ok(()) => SaveOutcome::Saved,
            Err(err) => {
                warn!(error = %err, "keeping unsaved changes in memory");
                SaveOutcome::LocalOnly(err)
            }
        }
    }
}
