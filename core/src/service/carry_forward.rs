use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::model::month::YearMonth;
use crate::service::ledger::summarize;
use crate::store::{AttendanceStore, MonthlySettingsStore};

/// Upper bound on how many consecutive months one resolution may fold.
pub const MAX_CARRY_CHAIN: usize = 1200;

/// Leftover balance flowing from the previous month into a target month.
pub struct CarryForwardResolver<'a> {
    attendance: &'a AttendanceStore,
    settings: &'a MonthlySettingsStore,
}

impl<'a> CarryForwardResolver<'a> {
    pub fn new(attendance: &'a AttendanceStore, settings: &'a MonthlySettingsStore) -> Self {
        Self {
            attendance,
            settings,
        }
    }

    /// Walks back over the unbroken run of months holding data, then folds
    /// forward. A month with no data carries 0 into its successor, and a
    /// deficit is never carried.
    pub fn resolve(&self, period: YearMonth) -> Decimal {
        let mut chain = Vec::new();
        let mut cursor = period.previous();
        while self.has_data(cursor) {
            if chain.len() == MAX_CARRY_CHAIN {
                warn!(month = %period, "carry-forward chain truncated");
                break;
            }
            chain.push(cursor);
            cursor = cursor.previous();
        }

        let mut carried = Decimal::ZERO;
        for month in chain.iter().rev() {
            let summary = summarize(*month, self.attendance, &self.settings.get(*month), carried);
            carried = summary.remaining.max(Decimal::ZERO);
        }

        debug!(month = %period, chain = chain.len(), %carried, "resolved carry-forward");
        carried
    }

    /// Carry-forward into every month holding data, oldest first, in one pass.
    ///
    /// Each month extends its predecessor's fold by one step. A month more
    /// than `MAX_CARRY_CHAIN` months into an unbroken run falls back to
    /// `resolve`, which truncates the chain the same way.
    pub fn resolve_active(&self) -> Vec<(YearMonth, Decimal)> {
        let mut months = self.attendance.months();
        months.extend(self.settings.months());

        let mut carries: Vec<(YearMonth, Decimal)> = Vec::with_capacity(months.len());
        // Length of the unbroken run of data months ending at the previous entry.
        let mut run = 0;
        for period in months {
            let previous = carries.last().copied();
            let carried = match previous {
                Some((prev, prev_carried)) if prev == period.previous() => {
                    run += 1;
                    if run <= MAX_CARRY_CHAIN {
                        let settings = self.settings.get(prev);
                        summarize(prev, self.attendance, &settings, prev_carried)
                            .remaining
                            .max(Decimal::ZERO)
                    } else {
                        self.resolve(period)
                    }
                }
                _ => {
                    run = 0;
                    Decimal::ZERO
                }
            };
            carries.push((period, carried));
        }
        carries
    }

    pub fn has_data(&self, period: YearMonth) -> bool {
        self.settings.contains(period) || self.attendance.has_month(period)
    }
}
