//! The command contract
//!
//! Hooks never mutate external state. Each returns an ordered list of
//! commands; the host record store applies them in order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::{Currency, Money};

/// One instruction for the host record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

impl Command {
    /// A data-only command, the common case
    pub fn update(name: impl Into<String>, data: Value) -> Self {
        Self {
            name: name.into(),
            data,
            amount: None,
            description: None,
            currency: None,
        }
    }

    /// A monetary command; the amount travels as minor units plus a
    /// separate currency code, matching the host's wire contract.
    pub fn debit(name: impl Into<String>, amount: Money, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Value::Object(serde_json::Map::new()),
            amount: Some(amount.minor_units()),
            description: Some(description.into()),
            currency: Some(amount.currency()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_command_omits_monetary_fields() {
        let command = Command::update("update_policy_module_data", json!({"flag": true}));
        let value = serde_json::to_value(&command).unwrap();
        assert_eq!(value["name"], "update_policy_module_data");
        assert_eq!(value["data"]["flag"], true);
        assert!(value.get("amount").is_none());
        assert!(value.get("currency").is_none());
    }

    #[test]
    fn test_debit_command_splits_amount_and_currency() {
        let command = Command::debit(
            "debit_policy",
            Money::from_minor(9999, Currency::MUR),
            "Debit Policy",
        );
        let value = serde_json::to_value(&command).unwrap();
        assert_eq!(value["amount"], 9999);
        assert_eq!(value["currency"], "MUR");
        assert_eq!(value["description"], "Debit Policy");
    }
}
