//! Mock payslip shown on `/employee/payslip`.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{CompanyInfo, PayItem, PayslipData};

/// Builds the mock payslip.
///
/// # Example
///
/// ```
/// use idms_site::content::mock_payslip;
///
/// let payslip = mock_payslip();
/// assert_eq!(payslip.employee_id, "EMP00123");
/// assert_eq!(payslip.earnings.len(), 4);
/// ```
pub fn mock_payslip() -> PayslipData {
    PayslipData {
        company: CompanyInfo {
            name: "Acme Solutions Inc.".to_string(),
            address: "123 Tech Drive, Silicon Valley, CA 94000".to_string(),
            contact: "support@acmesolutions.com | +1 (555) 123-4567".to_string(),
        },
        month: "October 2025".to_string(),
        employee_id: "EMP00123".to_string(),
        name: "Jane Doe".to_string(),
        designation: "Senior Software Engineer".to_string(),
        pay_date: NaiveDate::from_ymd_opt(2025, 10, 30).unwrap_or_default(),
        earnings: vec![
            PayItem::new("Basic Salary", Decimal::new(500000, 2)),
            PayItem::new("Housing Allowance", Decimal::new(150000, 2)),
            PayItem::new("Transport Allowance", Decimal::new(50000, 2)),
            PayItem::new("Bonus", Decimal::new(20000, 2)),
        ],
        deductions: vec![
            PayItem::new("Income Tax (IT)", Decimal::new(55000, 2)),
            PayItem::new("Provident Fund (PF)", Decimal::new(60000, 2)),
            PayItem::new("Professional Tax (PT)", Decimal::new(2000, 2)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_date_is_october_30() {
        assert_eq!(
            mock_payslip().pay_date,
            NaiveDate::from_ymd_opt(2025, 10, 30).unwrap()
        );
    }
}
