use messly_core::time::month_label;
use messly_core::{DayAttendance, DayKind, MonthSummary};
use rust_decimal::Decimal;

pub fn show_summary(summary: &MonthSummary) {
    let title = summary
        .period()
        .map(month_label)
        .unwrap_or_else(|| format!("{}-{:02}", summary.year, summary.month));

    println!("\n\x1b[1;36m{}\x1b[0m", title);
    println!("  Advance given:    {}", summary.advance_given);
    println!("  Carried forward:  {}", summary.carried_from_previous);
    println!("  Effective budget: {}", summary.effective_advance);
    println!();
    println!(
        "  Lunches:  {:>3} x {} = {}",
        summary.total_lunches,
        summary.lunch_cost,
        summary.lunch_cost * Decimal::from(summary.total_lunches)
    );
    println!(
        "  Dinners:  {:>3} x {} = {}",
        summary.total_dinners,
        summary.dinner_cost,
        summary.dinner_cost * Decimal::from(summary.total_dinners)
    );
    println!("  Meals:    {:>3}", summary.total_meals);
    println!("  Spent:    {}", summary.total_spent);

    // Red for a deficit, green otherwise
    let color = if summary.is_overspent() { "31" } else { "32" };
    println!("  Remaining: \x1b[1;{}m{}\x1b[0m", color, summary.remaining);
    println!();
    println!(
        "  Days: {} total, {} both meals, {} lunch only, {} dinner only, {} absent",
        summary.total_days_in_month,
        summary.full_present_days,
        summary.days_with_only_lunch,
        summary.days_with_only_dinner,
        summary.full_absent_days
    );
}

pub fn show_day(record: &DayAttendance) {
    let mark = |present: bool| if present { "present" } else { "absent" };
    let note = match record.kind() {
        DayKind::FullPresent => "both meals",
        DayKind::OnlyLunch => "lunch only",
        DayKind::OnlyDinner => "dinner only",
        DayKind::FullAbsent => "away all day",
    };
    println!(
        "{} ({}): lunch {}, dinner {} [{}]",
        record.date.format("%Y-%m-%d"),
        record.date.format("%a"),
        mark(record.is_lunch_present),
        mark(record.is_dinner_present),
        note
    );
}
