//! Payslip models.
//!
//! This module contains the [`PayslipData`] record rendered by the payslip
//! page. Totals are never stored on the record; they are derived with
//! [`crate::calculation::PayslipTotals::compute`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single earnings or deductions line.
///
/// # Example
///
/// ```
/// use idms_site::models::PayItem;
/// use rust_decimal::Decimal;
///
/// let item = PayItem::new("Basic Salary", Decimal::new(5000, 0));
/// assert_eq!(item.description, "Basic Salary");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayItem {
    /// The label shown in the description column.
    pub description: String,
    /// The signed amount. Negative values are displayed as-is.
    pub amount: Decimal,
}

impl PayItem {
    /// Creates a new pay item.
    pub fn new(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// The issuing company shown in the payslip letterhead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Registered company name.
    pub name: String,
    /// Postal address line.
    pub address: String,
    /// Support email and phone line.
    pub contact: String,
}

/// A payslip for one employee and one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipData {
    /// The issuing company.
    pub company: CompanyInfo,
    /// Pay period label (e.g., "October 2025").
    pub month: String,
    /// Employee identifier (e.g., "EMP00123").
    pub employee_id: String,
    /// Employee display name.
    pub name: String,
    /// Job title.
    pub designation: String,
    /// The date the salary is paid.
    pub pay_date: NaiveDate,
    /// Earnings lines, in display order.
    pub earnings: Vec<PayItem>,
    /// Deduction lines, in display order.
    pub deductions: Vec<PayItem>,
}

impl PayslipData {
    /// Number of table rows needed so both summaries line up.
    pub fn summary_rows(&self) -> usize {
        self.earnings.len().max(self.deductions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_payslip(earnings: usize, deductions: usize) -> PayslipData {
        PayslipData {
            company: CompanyInfo {
                name: "Test Co".to_string(),
                address: "1 Test Street".to_string(),
                contact: "test@example.com".to_string(),
            },
            month: "January 2026".to_string(),
            employee_id: "EMP1".to_string(),
            name: "Test Person".to_string(),
            designation: "Tester".to_string(),
            pay_date: NaiveDate::from_ymd_opt(2026, 1, 30).unwrap(),
            earnings: (0..earnings)
                .map(|i| PayItem::new(format!("e{}", i), Decimal::ONE))
                .collect(),
            deductions: (0..deductions)
                .map(|i| PayItem::new(format!("d{}", i), Decimal::ONE))
                .collect(),
        }
    }

    #[test]
    fn test_summary_rows_uses_longer_list() {
        assert_eq!(create_test_payslip(4, 3).summary_rows(), 4);
        assert_eq!(create_test_payslip(1, 5).summary_rows(), 5);
        assert_eq!(create_test_payslip(0, 0).summary_rows(), 0);
    }

    #[test]
    fn test_pay_item_serializes_amount_as_string() {
        let item = PayItem::new("Bonus", Decimal::new(20000, 2));
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"description":"Bonus","amount":"200.00"}"#);
    }
}
