//! Portfolio totals and weighted returns

use serde::Serialize;

use crate::display::format::{format_currency, AmountStyle};
use crate::display::report::format_change;
use crate::finance::holdings::{Investment, InvestmentKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentSummary {
    pub currency: &'static str,
    pub total_invested: f64,
    /// Return weighted by amount invested, in percent; 0 with nothing invested
    pub average_return: f64,
    /// `total_invested * average_return / 100`
    pub estimated_annual_returns: f64,
    pub investment_count: usize,
    /// Holdings per kind, in order of first appearance
    pub count_by_kind: Vec<(InvestmentKind, usize)>,
}

impl InvestmentSummary {
    pub fn generate(investments: &[Investment], currency: &'static str) -> Self {
        let total_invested: f64 = investments.iter().map(|i| i.amount).sum();
        let weighted: f64 = investments.iter().map(|i| i.annual_return * i.amount).sum();
        let average_return = if total_invested > 0.0 {
            weighted / total_invested
        } else {
            0.0
        };

        let mut count_by_kind: Vec<(InvestmentKind, usize)> = Vec::new();
        for investment in investments {
            match count_by_kind.iter_mut().find(|(kind, _)| *kind == investment.kind) {
                Some((_, count)) => *count += 1,
                None => count_by_kind.push((investment.kind, 1)),
            }
        }

        Self {
            currency,
            total_invested,
            average_return,
            estimated_annual_returns: total_invested * average_return / 100.0,
            investment_count: investments.len(),
            count_by_kind,
        }
    }

    pub fn format_terminal(&self, style: &AmountStyle) -> String {
        let amount = |value: f64| format_currency(value, self.currency, style.show_symbol);

        let mut output = String::new();
        output.push_str("Investment Summary\n");
        output.push_str(&"=".repeat(44));
        output.push('\n');
        output.push_str(&format!(
            "{:<25} {:>18}\n",
            "Total Invested",
            amount(self.total_invested)
        ));
        output.push_str(&format!(
            "{:<25} {:>18}\n",
            "Average Return",
            format_change(self.average_return)
        ));
        output.push_str(&format!(
            "{:<25} {:>18}\n",
            "Est. Annual Returns",
            amount(self.estimated_annual_returns)
        ));
        output.push_str(&"-".repeat(44));
        output.push('\n');
        output.push_str(&format!("Portfolio mix ({} holdings)\n", self.investment_count));
        for (kind, count) in &self.count_by_kind {
            output.push_str(&format!("  {:<23} {:>18}\n", kind.to_string(), count));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::holdings::{HOLDINGS_CURRENCY, SAMPLE_INVESTMENTS};

    #[test]
    fn test_sample_portfolio() {
        let summary = InvestmentSummary::generate(&SAMPLE_INVESTMENTS, HOLDINGS_CURRENCY);

        let weighted: f64 = SAMPLE_INVESTMENTS
            .iter()
            .map(|i| i.annual_return * i.amount)
            .sum();
        assert_eq!(summary.total_invested, 125000.0);
        assert!((summary.average_return - weighted / 125000.0).abs() < 1e-12);
        assert!((summary.average_return - 9.68).abs() < 1e-9);
        assert!((summary.estimated_annual_returns - 12100.0).abs() < 1e-6);
        assert_eq!(summary.investment_count, 4);
        assert_eq!(
            summary.count_by_kind,
            vec![
                (InvestmentKind::MutualFund, 2),
                (InvestmentKind::Etf, 1),
                (InvestmentKind::Commodity, 1),
            ]
        );
    }

    #[test]
    fn test_empty_portfolio_has_zero_return() {
        let summary = InvestmentSummary::generate(&[], HOLDINGS_CURRENCY);

        assert_eq!(summary.average_return, 0.0);
        assert_eq!(summary.estimated_annual_returns, 0.0);
        assert!(summary.count_by_kind.is_empty());
    }

    #[test]
    fn test_terminal_output() {
        let summary = InvestmentSummary::generate(&SAMPLE_INVESTMENTS, HOLDINGS_CURRENCY);
        let text = summary.format_terminal(&AmountStyle::default());

        assert!(text.contains("₹125,000.00"));
        assert!(text.contains("+9.7%"));
        assert!(text.contains("Mutual fund"));
    }
}
