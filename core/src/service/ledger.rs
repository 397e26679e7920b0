use rust_decimal::Decimal;
use tracing::debug;

use crate::model::attendance::DayKind;
use crate::model::month::YearMonth;
use crate::model::settings::MonthlySettings;
use crate::model::summary::MonthSummary;
use crate::service::carry_forward::CarryForwardResolver;
use crate::store::{AttendanceStore, MonthlySettingsStore};

pub struct LedgerCalculator<'a> {
    attendance: &'a AttendanceStore,
    settings: &'a MonthlySettingsStore,
}

impl<'a> LedgerCalculator<'a> {
    pub fn new(attendance: &'a AttendanceStore, settings: &'a MonthlySettingsStore) -> Self {
        Self {
            attendance,
            settings,
        }
    }

    pub fn calculate(&self, period: YearMonth) -> MonthSummary {
        let settings = self.settings.get(period);
        // The stored carry is only a cache; recompute it.
        let carried = CarryForwardResolver::new(self.attendance, self.settings).resolve(period);
        summarize(period, self.attendance, &settings, carried)
    }
}

/// Builds the summary of one month given an already resolved carry-forward.
///
/// Days without a record count as present for both meals, so meal totals are
/// the number of days in the month minus explicit absences.
pub fn summarize(
    period: YearMonth,
    attendance: &AttendanceStore,
    settings: &MonthlySettings,
    carried_from_previous: Decimal,
) -> MonthSummary {
    let total_days = period.days();

    let mut lunch_absences = 0;
    let mut dinner_absences = 0;
    let mut only_lunch = 0;
    let mut only_dinner = 0;
    let mut full_absent = 0;

    for record in attendance.in_month(period) {
        if !record.is_lunch_present {
            lunch_absences += 1;
        }
        if !record.is_dinner_present {
            dinner_absences += 1;
        }
        match record.kind() {
            DayKind::FullPresent => {}
            DayKind::OnlyLunch => only_lunch += 1,
            DayKind::OnlyDinner => only_dinner += 1,
            DayKind::FullAbsent => full_absent += 1,
        }
    }

    let total_lunches = total_days - lunch_absences;
    let total_dinners = total_days - dinner_absences;
    let half_days = only_lunch + only_dinner;
    let full_present = total_days - half_days - full_absent;

    let total_spent = Decimal::from(total_lunches) * settings.lunch_cost
        + Decimal::from(total_dinners) * settings.dinner_cost;
    let effective_advance = settings.advance_given + carried_from_previous;
    let remaining = effective_advance - total_spent;

    debug!(
        month = %period,
        total_lunches,
        total_dinners,
        %total_spent,
        %remaining,
        "computed month summary"
    );

    MonthSummary {
        year: period.year(),
        month: period.month(),
        advance_given: settings.advance_given,
        carried_from_previous,
        effective_advance,
        total_lunches,
        total_dinners,
        total_meals: total_lunches + total_dinners,
        lunch_cost: settings.lunch_cost,
        dinner_cost: settings.dinner_cost,
        total_spent,
        remaining,
        total_days_in_month: total_days,
        full_present_days: full_present,
        half_days,
        full_absent_days: full_absent,
        days_with_only_lunch: only_lunch,
        days_with_only_dinner: only_dinner,
        days_absent: full_absent,
    }
}
