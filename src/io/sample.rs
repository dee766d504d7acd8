//! Built-in sample batch
//!
//! Four accounts and five transactions that between them reach every apply
//! path: a plain withdrawal, both decline reasons, a large deposit that
//! crosses the VIP threshold and a small deposit.

use rust_decimal::Decimal;

use crate::types::{Account, Transaction};

/// Sample account set
pub fn sample_accounts() -> Vec<Account> {
    vec![
        Account::checking("C-100", "A. Chen", Decimal::from(250), Decimal::from(100)),
        Account::savings("S-200", "B. Patel", Decimal::from(1200), Decimal::new(2, 2)),
        Account::checking("C-300", "C. Rivera", Decimal::from(40), Decimal::from(50)),
        Account::savings("S-400", "D. Smith", Decimal::from(9000), Decimal::new(3, 2)),
    ]
}

/// Sample transactions, in processing order
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::withdraw("C-100", Decimal::new(75, 0), "ATM withdrawal"),
        Transaction::withdraw("C-300", Decimal::new(120, 0), "Billpay overdraft test"),
        Transaction::withdraw("S-200", Decimal::new(1300, 0), "Savings overdraft test"),
        Transaction::deposit("S-400", Decimal::new(1500, 0), "Bonus deposit"),
        Transaction::deposit("C-100", Decimal::new(25, 0), "Cash deposit"),
    ]
}
