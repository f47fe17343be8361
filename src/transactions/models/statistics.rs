use serde::Serialize;

/// `total_not_sold_items` is the rest of the whole collection, not the unsold
/// items of the month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_sale_amount: f64,
    pub total_sold_items: i64,
    pub total_not_sold_items: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthTotals {
    pub total_sale_amount: f64,
    pub count: i64,
}
