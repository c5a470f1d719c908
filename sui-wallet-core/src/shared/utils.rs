//! Utility functions for the wallet core
//!
//! Amount helpers work on the digit string directly so balances larger than
//! `u128` keep every digit.

use crate::shared::error::WalletError;

/// Whether `value` is a non-empty run of ASCII digits
pub fn is_integer_string(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Format amount with decimals
pub fn format_amount(amount: &str, decimals: u8) -> Result<String, WalletError> {
    if amount.is_empty() {
        return Err(WalletError::validation("Amount cannot be empty"));
    }
    if !is_integer_string(amount) {
        return Err(WalletError::validation(format!("Invalid amount format: {}", amount)));
    }

    let digits = amount.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    let decimals = decimals as usize;

    if decimals == 0 {
        return Ok(digits.to_string());
    }

    if digits.len() <= decimals {
        // Pad with leading zeros
        let mut formatted = String::with_capacity(decimals + 2);
        formatted.push_str("0.");
        for _ in 0..(decimals - digits.len()) {
            formatted.push('0');
        }
        formatted.push_str(digits);
        Ok(formatted)
    } else {
        // Insert decimal point
        let mut formatted = digits.to_string();
        formatted.insert(digits.len() - decimals, '.');
        Ok(formatted)
    }
}

/// Substitute the network id into a `{network}` URL template
pub fn fill_network_template(template: &str, network_id: &str) -> String {
    template.replace("{network}", network_id)
}
