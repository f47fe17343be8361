use serde::Serialize;

use crate::app::models::api_response::{ApiResponse, Data};

use super::{
    bar_chart::PriceRangeCount, pie_chart::CategoryCount, statistics::Statistics,
    transaction::Transaction,
};

/// Each part keeps the body its own endpoint would have returned.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedData {
    pub list_transactions: ApiResponse<Data<Vec<Transaction>>>,
    pub statistics: ApiResponse<Statistics>,
    pub bar_chart: ApiResponse<Data<Vec<PriceRangeCount>>>,
    pub pie_chart: ApiResponse<Data<Vec<CategoryCount>>>,
}
