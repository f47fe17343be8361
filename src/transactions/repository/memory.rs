use async_trait::async_trait;
use chrono::{Datelike, NaiveDateTime};
use tokio::sync::RwLock;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    transactions::{
        dtos::get_transactions_filter_dto::GetTransactionsFilterDto,
        models::{
            bar_chart::PriceRange,
            sale_month::SaleMonth,
            statistics::MonthTotals,
            transaction::{parse_search_price, Transaction},
        },
    },
};

use super::TransactionsRepository;

/// Backs the test suite. Categories are enumerated in first-seen order.
#[derive(Default)]
pub struct MemoryTransactionsRepository {
    transactions: RwLock<Vec<Transaction>>,
}

impl MemoryTransactionsRepository {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        return Self {
            transactions: RwLock::new(transactions),
        };
    }

    async fn count_where<F: Fn(&Transaction) -> bool>(&self, predicate: F) -> i64 {
        self.transactions
            .read()
            .await
            .iter()
            .filter(|t| predicate(t))
            .count() as i64
    }
}

/// Case-insensitive literal match on title or description, or an exact price
/// match when the search text is numeric.
fn matches_search(transaction: &Transaction, search: &str) -> bool {
    let needle = search.to_lowercase();

    if transaction.title.to_lowercase().contains(&needle)
        || transaction.description.to_lowercase().contains(&needle)
    {
        return true;
    }

    match parse_search_price(search) {
        Some(price) => transaction.price == price,
        None => false,
    }
}

/// Mirrors the WHERE clauses of `GetTransactionsFilterDto::to_sql`.
fn matches_filter(
    dto: &GetTransactionsFilterDto,
    transaction: &Transaction,
    month: Option<SaleMonth>,
) -> bool {
    if let Some(search) = dto.search() {
        if !matches_search(transaction, search) {
            return false;
        }
    }

    match month {
        Some(month) => transaction.date_of_sale.month() == month.number(),
        None => true,
    }
}

fn in_period(transaction: &Transaction, from: NaiveDateTime, to: NaiveDateTime) -> bool {
    transaction.date_of_sale >= from && transaction.date_of_sale < to
}

#[async_trait]
impl TransactionsRepository for MemoryTransactionsRepository {
    async fn get_month_totals(&self, month: SaleMonth) -> Result<MonthTotals, ApiError> {
        let transactions = self.transactions.read().await;
        let selected: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| t.date_of_sale.month() == month.number())
            .collect();

        Ok(MonthTotals {
            total_sale_amount: selected.iter().map(|t| t.price).sum(),
            count: selected.len() as i64,
        })
    }

    async fn count_all(&self) -> Result<i64, ApiError> {
        Ok(self.transactions.read().await.len() as i64)
    }

    async fn count_in_price_range(
        &self,
        range: &PriceRange,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<i64, ApiError> {
        Ok(self
            .count_where(|t| range.contains(t.price) && in_period(t, from, to))
            .await)
    }

    async fn get_distinct_categories(&self) -> Result<Vec<String>, ApiError> {
        let mut categories: Vec<String> = Vec::new();

        for transaction in self.transactions.read().await.iter() {
            if !categories.contains(&transaction.category) {
                categories.push(transaction.category.clone());
            }
        }

        Ok(categories)
    }

    async fn count_in_category(
        &self,
        category: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<i64, ApiError> {
        Ok(self
            .count_where(|t| t.category == category && in_period(t, from, to))
            .await)
    }

    async fn get_transactions(
        &self,
        dto: &GetTransactionsFilterDto,
    ) -> Result<Vec<Transaction>, ApiError> {
        let month = dto.sale_month()?;

        let mut transactions: Vec<Transaction> = self
            .transactions
            .read()
            .await
            .iter()
            .filter(|t| matches_filter(dto, t, month))
            .cloned()
            .collect();

        transactions.sort_by_key(|t| t.id);

        Ok(transactions
            .into_iter()
            .skip(dto.offset() as usize)
            .take(dto.per_page() as usize)
            .collect())
    }

    async fn replace_all(&self, transactions: &[Transaction]) -> Result<(), ApiError> {
        *self.transactions.write().await = transactions.to_vec();
        Ok(())
    }
}

/// Which query [`FailingTransactionsRepository`] refuses to answer.
#[derive(Debug, Clone)]
pub enum FailOn {
    CountAll,
    PriceRange { min: u32 },
    Category(String),
}

/// Delegates to an in-memory repository except for one query, which fails
/// like a lost database connection.
pub struct FailingTransactionsRepository {
    inner: MemoryTransactionsRepository,
    fail_on: FailOn,
}

impl FailingTransactionsRepository {
    pub fn new(transactions: Vec<Transaction>, fail_on: FailOn) -> Self {
        return Self {
            inner: MemoryTransactionsRepository::new(transactions),
            fail_on,
        };
    }
}

#[async_trait]
impl TransactionsRepository for FailingTransactionsRepository {
    async fn get_month_totals(&self, month: SaleMonth) -> Result<MonthTotals, ApiError> {
        self.inner.get_month_totals(month).await
    }

    async fn count_all(&self) -> Result<i64, ApiError> {
        match self.fail_on {
            FailOn::CountAll => Err(DefaultApiError::InternalServerError.value()),
            _ => self.inner.count_all().await,
        }
    }

    async fn count_in_price_range(
        &self,
        range: &PriceRange,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<i64, ApiError> {
        match self.fail_on {
            FailOn::PriceRange { min } if min == range.min => {
                Err(DefaultApiError::InternalServerError.value())
            }
            _ => self.inner.count_in_price_range(range, from, to).await,
        }
    }

    async fn get_distinct_categories(&self) -> Result<Vec<String>, ApiError> {
        self.inner.get_distinct_categories().await
    }

    async fn count_in_category(
        &self,
        category: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<i64, ApiError> {
        match &self.fail_on {
            FailOn::Category(failing) if failing == category => {
                Err(DefaultApiError::InternalServerError.value())
            }
            _ => self.inner.count_in_category(category, from, to).await,
        }
    }

    async fn get_transactions(
        &self,
        dto: &GetTransactionsFilterDto,
    ) -> Result<Vec<Transaction>, ApiError> {
        self.inner.get_transactions(dto).await
    }

    async fn replace_all(&self, transactions: &[Transaction]) -> Result<(), ApiError> {
        self.inner.replace_all(transactions).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample() -> Transaction {
        Transaction {
            id: 1,
            title: "Fjallraven Foldsack No. 1 Backpack".to_string(),
            description: "Your perfect pack for everyday use and walks in the forest.".to_string(),
            category: "men's clothing".to_string(),
            price: 329.85,
            date_of_sale: NaiveDate::from_ymd_opt(2021, 11, 27)
                .unwrap()
                .and_hms_opt(14, 59, 54)
                .unwrap(),
            sold: false,
            image: String::new(),
        }
    }

    #[test]
    fn test_matches_search() {
        let transaction = sample();

        assert!(matches_search(&transaction, "backpack"));
        assert!(matches_search(&transaction, "FOREST"));
        assert!(matches_search(&transaction, "329.85"));
        assert!(!matches_search(&transaction, "329"));
        assert!(!matches_search(&transaction, "jacket"));
        assert!(!matches_search(&transaction, "back%"));
    }

    #[test]
    fn test_matches_filter_month() {
        let transaction = sample();
        let dto = GetTransactionsFilterDto::default();

        assert!(matches_filter(&dto, &transaction, SaleMonth::new(11)));
        assert!(!matches_filter(&dto, &transaction, SaleMonth::new(10)));
        assert!(matches_filter(&dto, &transaction, None));
    }
}
