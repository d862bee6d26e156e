//! Net worth and balances per account type

use serde::Serialize;

use crate::display::format::{format_currency, AmountStyle};
use crate::finance::holdings::{Account, AccountKind};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccountTypeTotal {
    pub kind: AccountKind,
    pub total: f64,
    pub account_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    pub currency: &'static str,
    /// Sum of every balance, credit included
    pub net_worth: f64,
    /// One entry per account type, empty types included
    pub by_type: Vec<AccountTypeTotal>,
}

impl AccountSummary {
    pub fn generate(accounts: &[Account], currency: &'static str) -> Self {
        let by_type: Vec<AccountTypeTotal> = AccountKind::ALL
            .iter()
            .map(|&kind| {
                let matching = accounts.iter().filter(|a| a.kind == kind);
                AccountTypeTotal {
                    kind,
                    total: matching.clone().map(|a| a.balance).sum(),
                    account_count: matching.count(),
                }
            })
            .collect();

        Self {
            currency,
            net_worth: by_type.iter().map(|t| t.total).sum(),
            by_type,
        }
    }

    pub fn total_for(&self, kind: AccountKind) -> f64 {
        self.by_type
            .iter()
            .find(|t| t.kind == kind)
            .map(|t| t.total)
            .unwrap_or(0.0)
    }

    pub fn format_terminal(&self, style: &AmountStyle) -> String {
        let amount = |value: f64| format_currency(value, self.currency, style.show_symbol);

        let mut output = String::new();
        output.push_str("Account Summary\n");
        output.push_str(&"=".repeat(44));
        output.push('\n');
        output.push_str(&format!("{:<14} {:>10} {:>18}\n", "Type", "Accounts", "Balance"));
        output.push_str(&"-".repeat(44));
        output.push('\n');
        for total in &self.by_type {
            output.push_str(&format!(
                "{:<14} {:>10} {:>18}\n",
                total.kind.to_string(),
                total.account_count,
                amount(total.total)
            ));
        }
        output.push_str(&"-".repeat(44));
        output.push('\n');
        output.push_str(&format!("{:<25} {:>18}\n", "Net Worth", amount(self.net_worth)));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::holdings::{HOLDINGS_CURRENCY, SAMPLE_ACCOUNTS};

    #[test]
    fn test_sample_accounts() {
        let summary = AccountSummary::generate(&SAMPLE_ACCOUNTS, HOLDINGS_CURRENCY);

        assert_eq!(summary.net_worth, 37000.0);
        assert_eq!(summary.total_for(AccountKind::Bank), 40000.0);
        assert_eq!(summary.total_for(AccountKind::Credit), -5000.0);
        assert_eq!(summary.total_for(AccountKind::Cash), 2000.0);
        assert_eq!(summary.total_for(AccountKind::Investment), 0.0);
        assert_eq!(summary.by_type[0].account_count, 2);
    }

    #[test]
    fn test_no_accounts() {
        let summary = AccountSummary::generate(&[], HOLDINGS_CURRENCY);

        assert_eq!(summary.net_worth, 0.0);
        assert_eq!(summary.by_type.len(), 4);
        assert!(summary.by_type.iter().all(|t| t.account_count == 0));
    }

    #[test]
    fn test_terminal_output_uses_holdings_currency() {
        let summary = AccountSummary::generate(&SAMPLE_ACCOUNTS, HOLDINGS_CURRENCY);
        let style = AmountStyle {
            currency: "USD".into(),
            ..AmountStyle::default()
        };
        let text = summary.format_terminal(&style);

        assert!(text.contains("₹37,000.00"));
        assert!(text.contains("-₹5,000.00"));
        assert!(!text.contains('$'));
    }
}
