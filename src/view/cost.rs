use crate::models::BillBreakdown;
use crate::view::format::{compact, money};

#[derive(Debug, Clone, PartialEq)]
pub struct CostLine {
    pub label: &'static str,
    pub value: String,
}

/// Itemised bill as displayed by the cost calculator
#[derive(Debug, Clone, PartialEq)]
pub struct CostView {
    pub lines: Vec<CostLine>,
    pub total: String,
}

impl CostView {
    pub fn from_breakdown(bill: &BillBreakdown) -> Self {
        let m3 = |v: f64| format!("{} m³", compact(v));
        let cur = bill.currency.as_str();
        let line = |label, value| CostLine { label, value };

        Self {
            lines: vec![
                line("Usage", m3(bill.usage_m3)),
                line("Free allowance", m3(bill.deduction_m3)),
                line("Billed volume", m3(bill.billed_m3)),
                line("Water", money(bill.water_cost, cur)),
                line("Wastewater", money(bill.waste_cost, cur)),
                line("Environment tax", money(bill.ctv, cur)),
                line("VAT", money(bill.kdv, cur)),
            ],
            total: money(bill.total, cur),
        }
    }
}
