//! Policy charge schedule
//!
//! Charges describe how a collected premium is split. The engine never
//! applies them; it only attaches the schedule to each issued policy for
//! the billing platform to execute.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

/// One entry in a policy's charge schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Charge {
    /// A fixed amount deducted from every premium
    Fixed {
        name: String,
        description: String,
        amount: Money,
    },
    /// A fraction of the collected premium
    Variable {
        name: String,
        description: String,
        rate: Decimal,
    },
    /// Whatever remains after the other charges
    Balance { name: String, description: String },
}

/// The standard schedule attached to every issued policy: a fixed fee,
/// a 10% variable fee, and the balance.
pub fn standard_charges(currency: Currency) -> Vec<Charge> {
    vec![
        Charge::Fixed {
            name: "Fixed Fee".to_string(),
            description: "Fixed Fee".to_string(),
            amount: Money::from_minor(1000, currency),
        },
        Charge::Variable {
            name: "Variable Fee".to_string(),
            description: "Variable Fee".to_string(),
            rate: dec!(0.1),
        },
        Charge::Balance {
            name: "Balance".to_string(),
            description: "Balance".to_string(),
        },
    ]
}
