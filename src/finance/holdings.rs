//! Static account and investment holdings
//!
//! The tracker has no account or portfolio records of its own; the summaries
//! run over these fixed sample tables, all denominated in [`HOLDINGS_CURRENCY`].

use serde::Serialize;
use std::fmt;

pub const HOLDINGS_CURRENCY: &str = "INR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Bank,
    Credit,
    Cash,
    Investment,
}

impl AccountKind {
    pub const ALL: [AccountKind; 4] = [Self::Bank, Self::Credit, Self::Cash, Self::Investment];
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bank => "Bank",
            Self::Credit => "Credit",
            Self::Cash => "Cash",
            Self::Investment => "Investment",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Account {
    pub name: &'static str,
    pub kind: AccountKind,
    /// Credit balances are negative
    pub balance: f64,
}

pub const SAMPLE_ACCOUNTS: [Account; 4] = [
    Account { name: "HDFC Bank", kind: AccountKind::Bank, balance: 25000.0 },
    Account { name: "SBI Savings", kind: AccountKind::Bank, balance: 15000.0 },
    Account { name: "ICICI Credit Card", kind: AccountKind::Credit, balance: -5000.0 },
    Account { name: "Cash Wallet", kind: AccountKind::Cash, balance: 2000.0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentKind {
    MutualFund,
    Etf,
    Commodity,
}

impl fmt::Display for InvestmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MutualFund => "Mutual fund",
            Self::Etf => "ETF",
            Self::Commodity => "Commodity",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Investment {
    pub name: &'static str,
    pub kind: InvestmentKind,
    pub amount: f64,
    /// Annual return in percent, may be negative
    pub annual_return: f64,
}

pub const SAMPLE_INVESTMENTS: [Investment; 4] = [
    Investment { name: "HDFC Mutual Fund", kind: InvestmentKind::MutualFund, amount: 50000.0, annual_return: 12.0 },
    Investment { name: "Reliance ETF", kind: InvestmentKind::Etf, amount: 25000.0, annual_return: 8.0 },
    Investment { name: "Tata Digital India Fund", kind: InvestmentKind::MutualFund, amount: 30000.0, annual_return: 15.0 },
    Investment { name: "SBI Gold Fund", kind: InvestmentKind::Commodity, amount: 20000.0, annual_return: -2.0 },
];
