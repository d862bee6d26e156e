//! Loan and SIP calculator output

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::AmountStyle;
use crate::finance::{LoanSchedule, SipPoint, SipProjection};

#[derive(Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Principal Paid")]
    principal: String,
    #[tabled(rename = "Interest Paid")]
    interest: String,
    #[tabled(rename = "Remaining Balance")]
    balance: String,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "EMI")]
    payment: String,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

#[derive(Tabled)]
struct SipRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Invested")]
    invested: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Returns")]
    returns: String,
}

/// Loan totals followed by a yearly (or monthly) schedule
pub fn format_loan(schedule: &LoanSchedule, monthly: bool, style: &AmountStyle) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Loan of {} at {}% for {} years\n",
        style.amount(schedule.principal),
        schedule.annual_rate,
        schedule.years
    ));
    output.push_str(&format!("  Monthly EMI:    {}\n", style.amount(schedule.emi)));
    output.push_str(&format!("  Total interest: {}\n", style.amount(schedule.total_interest)));
    output.push_str(&format!("  Total payment:  {}\n\n", style.amount(schedule.total_payment)));

    let mut table = if monthly {
        Table::new(schedule.rows.iter().map(|row| MonthRow {
            month: row.month,
            payment: style.amount(row.payment),
            principal: style.amount(row.principal),
            interest: style.amount(row.interest),
            balance: style.amount(row.balance),
        }))
    } else {
        Table::new(schedule.yearly_summary().into_iter().map(|year| YearRow {
            year: year.year,
            principal: style.amount(year.principal_paid),
            interest: style.amount(year.interest_paid),
            balance: style.amount(year.closing_balance),
        }))
    };
    table.with(Style::rounded());
    output.push_str(&table.to_string());
    output.push('\n');
    output
}

/// SIP totals followed by the year-by-year growth
pub fn format_sip(projection: &SipProjection, series: &[SipPoint], style: &AmountStyle) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Investing {} monthly for {} years at {}%\n",
        style.amount(projection.monthly_investment),
        projection.years,
        projection.annual_return
    ));
    output.push_str(&format!("  Invested amount:   {}\n", style.amount(projection.invested)));
    output.push_str(&format!("  Estimated returns: {}\n", style.amount(projection.returns)));
    output.push_str(&format!("  Total value:       {}\n\n", style.amount(projection.future_value)));

    let mut table = Table::new(series.iter().map(|point| SipRow {
        year: point.year,
        invested: style.amount(point.invested),
        value: style.amount(point.value),
        returns: style.amount(point.returns),
    }));
    table.with(Style::rounded());
    output.push_str(&table.to_string());
    output.push('\n');
    output
}
