use messly_core::{HistoryUseCase, MonthSummary, YearMonth};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Lunches")]
    lunches: u32,
    #[tabled(rename = "Dinners")]
    dinners: u32,
    #[tabled(rename = "Advance")]
    advance: String,
    #[tabled(rename = "Carried")]
    carried: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

pub fn show_history(year: i32, summaries: &[MonthSummary], active: &[YearMonth]) {
    // Only months that hold data; untouched months are all defaults.
    let shown: Vec<&MonthSummary> = summaries
        .iter()
        .filter(|s| s.period().map_or(false, |p| active.contains(&p)))
        .collect();

    if shown.is_empty() {
        println!("No recorded months in {}.", year);
        return;
    }

    let rows: Vec<HistoryRow> = shown
        .iter()
        .map(|s| HistoryRow {
            month: format!("{}-{:02}", s.year, s.month),
            lunches: s.total_lunches,
            dinners: s.total_dinners,
            advance: s.advance_given.to_string(),
            carried: s.carried_from_previous.to_string(),
            spent: s.total_spent.to_string(),
            remaining: s.remaining.to_string(),
        })
        .collect();

    let owned: Vec<MonthSummary> = shown.into_iter().cloned().collect();
    let totals = HistoryUseCase::totals(&owned);

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("\n\x1b[1;36m{}\x1b[0m", year);
    println!("{}", table);
    println!(
        "{} months, {} meals, advance {}, spent {}",
        totals.months, totals.total_meals, totals.advance_given, totals.total_spent
    );
}
