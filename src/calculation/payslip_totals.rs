//! Payslip summation.
//!
//! This module derives the earnings total, deductions total and net pay
//! from a payslip's line items. Nothing here is cached: callers recompute
//! whenever the underlying lists change.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{PayItem, PayslipData};

/// Sums the amounts of a list of pay items.
///
/// An empty list sums to zero. Negative amounts are accepted as-is.
///
/// # Examples
///
/// ```
/// use idms_site::calculation::sum_items;
/// use idms_site::models::PayItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     PayItem::new("Basic Salary", Decimal::new(5000, 0)),
///     PayItem::new("Bonus", Decimal::new(200, 0)),
/// ];
/// assert_eq!(sum_items(&items), Decimal::new(5200, 0));
/// assert_eq!(sum_items(&[]), Decimal::ZERO);
/// ```
pub fn sum_items(items: &[PayItem]) -> Decimal {
    items.iter().map(|item| item.amount).sum()
}

/// The derived totals of a payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayslipTotals {
    /// Sum of all earnings lines.
    pub earnings_total: Decimal,
    /// Sum of all deduction lines.
    pub deductions_total: Decimal,
    /// `earnings_total - deductions_total`.
    pub net_pay: Decimal,
}

impl PayslipTotals {
    /// Computes totals from an earnings and a deductions list.
    ///
    /// # Examples
    ///
    /// ```
    /// use idms_site::calculation::PayslipTotals;
    /// use idms_site::models::PayItem;
    /// use rust_decimal::Decimal;
    ///
    /// let earnings = vec![PayItem::new("Basic Salary", Decimal::new(1000, 0))];
    /// let deductions = vec![PayItem::new("Income Tax (IT)", Decimal::new(150, 0))];
    ///
    /// let totals = PayslipTotals::compute(&earnings, &deductions);
    /// assert_eq!(totals.net_pay, Decimal::new(850, 0));
    /// ```
    pub fn compute(earnings: &[PayItem], deductions: &[PayItem]) -> Self {
        let earnings_total = sum_items(earnings);
        let deductions_total = sum_items(deductions);

        Self {
            earnings_total,
            deductions_total,
            net_pay: earnings_total - deductions_total,
        }
    }

    /// Computes totals for a whole payslip.
    pub fn for_payslip(payslip: &PayslipData) -> Self {
        Self::compute(&payslip.earnings, &payslip.deductions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::mock_payslip;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn decimal(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn items(amounts: &[i64]) -> Vec<PayItem> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, cents)| PayItem::new(format!("line {}", i), Decimal::new(*cents, 2)))
            .collect()
    }

    #[test]
    fn test_mock_payslip_totals() {
        let totals = PayslipTotals::for_payslip(&mock_payslip());

        assert_eq!(totals.earnings_total, decimal("7200.00"));
        assert_eq!(totals.deductions_total, decimal("1170.00"));
        assert_eq!(totals.net_pay, decimal("6030.00"));
    }

    #[test]
    fn test_empty_lists_total_zero() {
        let totals = PayslipTotals::compute(&[], &[]);

        assert_eq!(totals.earnings_total, Decimal::ZERO);
        assert_eq!(totals.deductions_total, Decimal::ZERO);
        assert_eq!(totals.net_pay, Decimal::ZERO);
    }

    #[test]
    fn test_deductions_exceeding_earnings_go_negative() {
        let totals = PayslipTotals::compute(&items(&[10000]), &items(&[25050]));
        assert_eq!(totals.net_pay, decimal("-150.50"));
    }

    #[test]
    fn test_negative_line_amounts_are_summed_as_is() {
        assert_eq!(sum_items(&items(&[1000, -250])), decimal("7.50"));
    }

    #[test]
    fn test_totals_follow_list_changes() {
        let mut payslip = mock_payslip();
        let before = PayslipTotals::for_payslip(&payslip);

        payslip
            .earnings
            .push(PayItem::new("Overtime", decimal("300.00")));
        let after = PayslipTotals::for_payslip(&payslip);

        assert_eq!(after.earnings_total - before.earnings_total, decimal("300.00"));
        assert_eq!(after.net_pay - before.net_pay, decimal("300.00"));
    }

    proptest! {
        #[test]
        fn prop_total_is_sum_of_amounts(amounts in prop::collection::vec(-10_000_000i64..10_000_000, 0..20)) {
            let expected = amounts.iter().map(|c| Decimal::new(*c, 2)).fold(Decimal::ZERO, |acc, d| acc + d);
            prop_assert_eq!(sum_items(&items(&amounts)), expected);
        }

        #[test]
        fn prop_total_ignores_ordering(amounts in prop::collection::vec(-10_000_000i64..10_000_000, 0..20), shift in 0usize..20) {
            let forward = items(&amounts);
            let mut reversed = forward.clone();
            reversed.reverse();
            let mut rotated = forward.clone();
            if !rotated.is_empty() {
                let len = rotated.len();
                rotated.rotate_left(shift % len);
            }

            prop_assert_eq!(sum_items(&forward), sum_items(&reversed));
            prop_assert_eq!(sum_items(&forward), sum_items(&rotated));
        }

        #[test]
        fn prop_net_pay_is_difference(
            earnings in prop::collection::vec(0i64..10_000_000, 0..10),
            deductions in prop::collection::vec(0i64..10_000_000, 0..10),
        ) {
            let totals = PayslipTotals::compute(&items(&earnings), &items(&deductions));
            prop_assert_eq!(totals.net_pay, totals.earnings_total - totals.deductions_total);
        }
    }
}
