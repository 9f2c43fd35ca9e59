//! Printable payslip document.

use maud::{Markup, PreEscaped, html};
use rust_decimal::Decimal;

use crate::calculation::{PayslipTotals, format_currency, pad_rows};
use crate::models::{CompanyInfo, Icon, PayItem, PayslipData};

use super::components::{document, icon};

const TABLE_STYLE: &str =
    "border-collapse: collapse; border: 1px solid #ddd; width: 100%; margin-bottom: 20px; font-size: 14px;";
const CELL_STYLE: &str = "border: 1px solid #ddd; padding: 8px 12px; text-align: left;";
const HEADER_STYLE: &str = "border: 1px solid #ddd; padding: 8px 12px; text-align: left; \
    background-color: #f3f4f6; font-weight: bold; color: #1f2937; text-transform: uppercase;";
const TOTAL_STYLE: &str = "border: 1px solid #ddd; padding: 8px 12px; text-align: left; \
    background-color: #e5e7eb; font-weight: bold; color: #1f2937; text-transform: uppercase;";
const SECTION_HEADING_STYLE: &str =
    "font-size: 16px; font-weight: bold; margin-bottom: 10px; color: #374151;";

/// Renders the payslip page for `payslip`.
pub fn payslip_page(payslip: &PayslipData) -> Markup {
    let totals = PayslipTotals::for_payslip(payslip);
    let rows = payslip.summary_rows();

    let body = html! {
        div class="max-w-4xl mx-auto mb-6 flex justify-end gap-3 print:hidden" {
            button type="button"
                onclick="window.print()"
                class="flex items-center px-4 py-2 text-sm font-medium text-white bg-indigo-600 rounded-lg shadow-md hover:bg-indigo-700 transition duration-150"
            {
                (icon(Icon::Printer, "w-4 h-4 mr-2"))
                "Print Payslip"
            }
            button type="button"
                class="flex items-center px-4 py-2 text-sm font-medium text-indigo-600 bg-white rounded-lg border border-indigo-600 shadow-md hover:bg-indigo-50 transition duration-150"
            {
                (icon(Icon::Download, "w-4 h-4 mr-2"))
                "Download PDF"
            }
        }
        div id="payslip-document" class="max-w-4xl mx-auto bg-white shadow-xl rounded-lg overflow-hidden p-6 md:p-10" {
            div style="font-family: sans-serif;" {
                h1 style="font-size: 30px; font-weight: bold; text-align: center; margin-bottom: 20px; color: #10b981;" {
                    "PAYSLIP"
                }
                (company_info(&payslip.company))
                h3 style=(SECTION_HEADING_STYLE) { "Employee Details" }
                (employee_details(payslip))
                h3 style=(SECTION_HEADING_STYLE) { "Financial Breakdown" }
                div class="flex flex-wrap -mx-2" {
                    (financial_summary("Earnings", &payslip.earnings, totals.earnings_total, rows))
                    (financial_summary("Deductions", &payslip.deductions, totals.deductions_total, rows))
                }
                div class="mt-8 p-4 bg-emerald-50 rounded-lg border border-emerald-300" {
                    h3 class="text-xl font-extrabold text-emerald-800" { "NET PAY" }
                    p class="text-3xl font-bold text-emerald-600 mt-1" {
                        (format_currency(totals.net_pay))
                    }
                    p class="text-sm text-gray-600 mt-2" {
                        "The amount is calculated as Total Earnings minus Total Deductions."
                    }
                }
                p class="text-center text-xs text-gray-500 mt-12 pt-4 border-t border-gray-200" {
                    "This is a computer-generated document and requires no signature."
                }
            }
        }
    };

    document(
        &format!("Payslip {} | {}", payslip.month, payslip.employee_id),
        "min-h-screen bg-gray-100 p-4 md:p-8",
        body,
    )
}

fn company_info(company: &CompanyInfo) -> Markup {
    html! {
        div style="padding: 20px; border-bottom: 1px solid #ddd; margin-bottom: 15px;" {
            h2 style="font-size: 24px; font-weight: bold; color: #1f2937;" { (company.name) }
            p style="font-size: 12px; color: #6b7280;" { (company.address) }
            p style="font-size: 12px; color: #6b7280;" { (company.contact) }
        }
    }
}

fn employee_details(payslip: &PayslipData) -> Markup {
    html! {
        table style=(TABLE_STYLE) {
            tbody {
                tr {
                    td style=(HEADER_STYLE) class="w-1/4" { "Employee Name" }
                    td style=(CELL_STYLE) { (payslip.name) }
                    td style=(HEADER_STYLE) class="w-1/4" { "Pay Period" }
                    td style=(CELL_STYLE) { (payslip.month) }
                }
                tr {
                    td style=(HEADER_STYLE) { "Employee ID" }
                    td style=(CELL_STYLE) { (payslip.employee_id) }
                    td style=(HEADER_STYLE) { "Designation" }
                    td style=(CELL_STYLE) { (payslip.designation) }
                }
                tr {
                    td style=(HEADER_STYLE) { "Payment Date" }
                    td style=(CELL_STYLE) colspan="3" { (payslip.pay_date.format("%Y-%m-%d").to_string()) }
                }
            }
        }
    }
}

fn financial_summary(
    title: &str,
    items: &[PayItem],
    total: Decimal,
    rows: usize,
) -> Markup {
    html! {
        div class="w-full md:w-1/2 p-2" {
            table style=(format!("{} margin-bottom: 0px;", TABLE_STYLE)) {
                thead {
                    tr {
                        th style=(format!("{} text-align: center;", HEADER_STYLE)) colspan="2" { (title) }
                    }
                    tr {
                        th style=(HEADER_STYLE) { "Description" }
                        th style=(format!("{} width: 30%; text-align: right;", HEADER_STYLE)) { "Amount" }
                    }
                }
                tbody {
                    @for row in pad_rows(items, rows) {
                        tr {
                            @match row {
                                Some(item) => {
                                    td style=(CELL_STYLE) { (item.description) }
                                    td style=(format!("{} text-align: right;", CELL_STYLE)) {
                                        (format_currency(item.amount))
                                    }
                                }
                                None => {
                                    td style=(CELL_STYLE) { (PreEscaped("&nbsp;")) }
                                    td style=(CELL_STYLE) {}
                                }
                            }
                        }
                    }
                    tr {
                        td style=(TOTAL_STYLE) { "Total " (title) }
                        td style=(format!("{} text-align: right;", TOTAL_STYLE)) { (format_currency(total)) }
                    }
                }
            }
        }
    }
}
