use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    transactions::{
        dtos::get_transactions_filter_dto::GetTransactionsFilterDto,
        models::{
            bar_chart::PriceRange, sale_month::SaleMonth, statistics::MonthTotals,
            transaction::Transaction,
        },
    },
};

use super::TransactionsRepository;

// Postgres caps bind parameters per statement; 8 columns per row.
const INSERT_CHUNK_SIZE: usize = 1000;

pub struct PgTransactionsRepository {
    pool: PgPool,
}

impl PgTransactionsRepository {
    pub fn new(pool: PgPool) -> Self {
        return Self { pool };
    }
}

#[async_trait]
impl TransactionsRepository for PgTransactionsRepository {
    async fn get_month_totals(&self, month: SaleMonth) -> Result<MonthTotals, ApiError> {
        let sqlx_result = sqlx::query_as::<_, (f64, i64)>(
            "
            SELECT COALESCE(SUM(price), 0)::DOUBLE PRECISION, COUNT(*)
            FROM transactions
            WHERE EXTRACT(MONTH FROM date_of_sale)::INTEGER = $1
            ",
        )
        .bind(month.number() as i32)
        .fetch_one(&self.pool)
        .await;

        match sqlx_result {
            Ok((total_sale_amount, count)) => Ok(MonthTotals {
                total_sale_amount,
                count,
            }),
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }

    async fn count_all(&self) -> Result<i64, ApiError> {
        let sqlx_result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM transactions")
            .fetch_one(&self.pool)
            .await;

        match sqlx_result {
            Ok(count) => Ok(count),
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }

    async fn count_in_price_range(
        &self,
        range: &PriceRange,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<i64, ApiError> {
        let sqlx_result = match range.max {
            Some(max) => {
                sqlx::query_scalar::<_, i64>(
                    "
                    SELECT COUNT(*) FROM transactions
                    WHERE price >= $1 AND price <= $2
                    AND date_of_sale >= $3 AND date_of_sale < $4
                    ",
                )
                .bind(range.min as f64)
                .bind(max as f64)
                .bind(from)
                .bind(to)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar::<_, i64>(
                    "
                    SELECT COUNT(*) FROM transactions
                    WHERE price >= $1
                    AND date_of_sale >= $2 AND date_of_sale < $3
                    ",
                )
                .bind(range.min as f64)
                .bind(from)
                .bind(to)
                .fetch_one(&self.pool)
                .await
            }
        };

        match sqlx_result {
            Ok(count) => Ok(count),
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }

    async fn get_distinct_categories(&self) -> Result<Vec<String>, ApiError> {
        let sqlx_result = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM transactions ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await;

        match sqlx_result {
            Ok(categories) => Ok(categories),
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }

    async fn count_in_category(
        &self,
        category: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<i64, ApiError> {
        let sqlx_result = sqlx::query_scalar::<_, i64>(
            "
            SELECT COUNT(*) FROM transactions
            WHERE category = $1
            AND date_of_sale >= $2 AND date_of_sale < $3
            ",
        )
        .bind(category)
        .bind(from)
        .bind(to)
        .fetch_one(&self.pool)
        .await;

        match sqlx_result {
            Ok(count) => Ok(count),
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }

    async fn get_transactions(
        &self,
        dto: &GetTransactionsFilterDto,
    ) -> Result<Vec<Transaction>, ApiError> {
        let sql = dto.to_sql()?;

        let mut sqlx = sqlx::query_as::<_, Transaction>(&sql);

        if let Some(pattern) = dto.search_pattern() {
            sqlx = sqlx.bind(pattern);
        }
        if let Some(price) = dto.search_price() {
            sqlx = sqlx.bind(price);
        }
        if let Some(month) = dto.sale_month()? {
            sqlx = sqlx.bind(month.number() as i32);
        }

        match sqlx.fetch_all(&self.pool).await {
            Ok(transactions) => Ok(transactions),
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }

    async fn replace_all(&self, transactions: &[Transaction]) -> Result<(), ApiError> {
        let mut tx = match self.pool.begin().await {
            Ok(tx) => tx,
            Err(e) => {
                tracing::error!(%e);
                return Err(DefaultApiError::InternalServerError.value());
            }
        };

        if let Err(e) = sqlx::query("DELETE FROM transactions")
            .execute(&mut tx)
            .await
        {
            tracing::error!(%e);
            return Err(DefaultApiError::InternalServerError.value());
        }

        for chunk in transactions.chunks(INSERT_CHUNK_SIZE) {
            let mut query_builder: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO transactions (id, title, description, category, price, date_of_sale, sold, image) ",
            );

            query_builder.push_values(chunk, |mut b, transaction| {
                b.push_bind(transaction.id)
                    .push_bind(transaction.title.clone())
                    .push_bind(transaction.description.clone())
                    .push_bind(transaction.category.clone())
                    .push_bind(transaction.price)
                    .push_bind(transaction.date_of_sale)
                    .push_bind(transaction.sold)
                    .push_bind(transaction.image.clone());
            });

            if let Err(e) = query_builder.build().execute(&mut tx).await {
                tracing::error!(%e);
                return Err(DefaultApiError::InternalServerError.value());
            }
        }

        match tx.commit().await {
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }
}
