use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::app::models::api_error::ApiError;

use super::{
    dtos::get_transactions_filter_dto::GetTransactionsFilterDto,
    models::{
        bar_chart::PriceRange, sale_month::SaleMonth, statistics::MonthTotals,
        transaction::Transaction,
    },
};

#[cfg(test)]
pub mod memory;
pub mod postgres;

/// Read queries over the transaction collection plus the bulk replace used
/// for seeding. Period bounds are half-open `[from, to)`.
#[async_trait]
pub trait TransactionsRepository: Send + Sync {
    /// Sum of prices and count of transactions sold in `month` of any year.
    async fn get_month_totals(&self, month: SaleMonth) -> Result<MonthTotals, ApiError>;

    async fn count_all(&self) -> Result<i64, ApiError>;

    async fn count_in_price_range(
        &self,
        range: &PriceRange,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<i64, ApiError>;

    async fn get_distinct_categories(&self) -> Result<Vec<String>, ApiError>;

    async fn count_in_category(
        &self,
        category: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<i64, ApiError>;

    async fn get_transactions(
        &self,
        dto: &GetTransactionsFilterDto,
    ) -> Result<Vec<Transaction>, ApiError>;

    async fn replace_all(&self, transactions: &[Transaction]) -> Result<(), ApiError>;
}
