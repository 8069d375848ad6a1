//! # Shared Utility Functions
//!
//! Display helpers used by both the swap library and the widget front end.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the widget's default lengths
//!
//! ## Number Formatting
//!
//! - [`format_number`] - Fixed decimals with comma thousands separators
//! - [`strip_thousands_separators`] - Inverse of the separator insertion, for balance strings
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_address, format_number};
//!
//! let address = "0x52908400098527886E0F7030069857D2E4169EE7";
//! assert_eq!(format_address(address, 6, 4), "0x5290...9EE7");
//! assert_eq!(format_number(2450.32, 2), "2,450.32");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
/// assert_eq!(format_address(addr, 6, 4), "0x5290...9EE7");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    // ASCII checked above, byte slicing is char-aligned
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address keeping the `0x` prefix plus four characters on each side.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
/// assert_eq!(truncate_address(addr), "0x5290...9EE7");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Arguments
///
/// * `value` - The number to format
/// * `decimals` - Number of decimal places to show
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// assert_eq!(format_number(-2500.0, 0), "-2,500");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };

    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((int, dec)) => (int, dec),
        None => (unsigned, ""),
    };

    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Remove every comma thousands separator from a display amount.
///
/// # Examples
///
/// ```rust
/// use shared::utils::strip_thousands_separators;
///
/// assert_eq!(strip_thousands_separators("1,250.00"), "1250.00");
/// assert_eq!(strip_thousands_separators("1,000,000"), "1000000");
/// ```
pub fn strip_thousands_separators(amount: &str) -> String {
    amount.chars().filter(|c| *c != ',').collect()
}
