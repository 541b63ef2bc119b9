//! The composite employee grouping key.
//!
//! This module defines [`EmployeeKey`], the explicit immutable key under
//! which position rows are grouped, and the monetary display formatting it
//! is built on. Comparing salaries through a fixed two-decimal string
//! avoids the floating-point equality pitfalls of comparing raw numbers.

use rust_decimal::Decimal;

/// Immutable composite key identifying one employee aggregate.
///
/// Two rows belong to the same aggregate iff their keys are equal: same
/// name and same total salary to the cent. The salary half of the key is
/// the rendered monetary string, so equality is exact and rounding is
/// applied consistently on both sides of every comparison.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_guide::aggregate::EmployeeKey;
///
/// let a = EmployeeKey::new("Jane Doe", Decimal::new(5000000, 2));
/// let b = EmployeeKey::new("Jane Doe", Decimal::new(50000, 0));
/// assert_eq!(a, b);
///
/// let c = EmployeeKey::new("Jane Doe", Decimal::new(5000001, 2));
/// assert_ne!(a, c);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeKey {
    /// The employee's name, compared by exact value.
    pub name: String,
    /// The total salary rendered as a monetary string, e.g. `"$50,000.00"`.
    pub salary_display: String,
}

impl EmployeeKey {
    /// Builds the key for a name and parsed total salary.
    pub fn new(name: &str, total_salary: Decimal) -> Self {
        Self {
            name: name.to_string(),
            salary_display: salary_display(total_salary),
        }
    }
}

/// Renders a salary as a monetary display string.
///
/// The value is rounded to exactly two decimal places (banker's rounding,
/// so `$0.125` rounds to `$0.12`) and the integer part is grouped with
/// comma thousands separators: `1234567.891` renders as `"$1,234,567.89"`.
/// A negative value renders with the sign after the dollar symbol,
/// `"$-1,234.56"`.
pub fn salary_display(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text
        .split_once('.')
        .unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(salary_display(dec("50000")), "$50,000.00");
        assert_eq!(salary_display(dec("50000.5")), "$50,000.50");
    }

    #[test]
    fn test_display_thousands_separators() {
        assert_eq!(salary_display(dec("1234.56")), "$1,234.56");
        assert_eq!(salary_display(dec("1234567.89")), "$1,234,567.89");
        assert_eq!(salary_display(dec("100")), "$100.00");
        assert_eq!(salary_display(dec("0")), "$0.00");
    }

    #[test]
    fn test_display_rounds_half_to_even() {
        // Matches the round-half-even behavior of "{:,.2f}" formatting.
        assert_eq!(salary_display(dec("0.125")), "$0.12");
        assert_eq!(salary_display(dec("0.135")), "$0.14");
        assert_eq!(salary_display(dec("99999.995")), "$100,000.00");
    }

    #[test]
    fn test_display_negative_sign_after_dollar() {
        assert_eq!(salary_display(dec("-1234.56")), "$-1,234.56");
        assert_eq!(salary_display(dec("-0.004")), "$0.00");
    }

    #[test]
    fn test_keys_equal_for_same_name_and_salary_to_the_cent() {
        let a = EmployeeKey::new("Jane Doe", dec("50000.00"));
        let b = EmployeeKey::new("Jane Doe", dec("50000"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_keys_differ_by_one_cent() {
        let a = EmployeeKey::new("Jane Doe", dec("50000.00"));
        let b = EmployeeKey::new("Jane Doe", dec("50000.01"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_keys_differ_by_name() {
        let a = EmployeeKey::new("Jane Doe", dec("50000.00"));
        let b = EmployeeKey::new("John Doe", dec("50000.00"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_keys_usable_in_hash_map() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(EmployeeKey::new("Jane Doe", dec("50000.00")), 0usize);
        assert_eq!(map.get(&EmployeeKey::new("Jane Doe", dec("50000"))), Some(&0));
        assert_eq!(map.get(&EmployeeKey::new("Jane Doe", dec("50000.01"))), None);
    }
}
