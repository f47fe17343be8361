use serde::Deserialize;
use validator::Validate;

use crate::{
    app::models::api_error::ApiError,
    transactions::{
        errors::TransactionsApiError,
        models::{sale_month::SaleMonth, transaction::parse_search_price},
    },
};

#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionsFilterDto {
    #[validate(range(min = 1, message = "page must be 1 or greater."))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100, message = "perPage must be between 1 and 100."))]
    pub per_page: Option<u32>,
    #[validate(length(max = 512, message = "search must be 512 characters or less."))]
    pub search: Option<String>,
    pub month: Option<String>,
}

// ILIKE treats backslash as its escape character.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

impl GetTransactionsFilterDto {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(10)
    }

    pub fn offset(&self) -> u64 {
        (self.page().saturating_sub(1) as u64) * self.per_page() as u64
    }

    pub fn search(&self) -> Option<&str> {
        match &self.search {
            Some(search) if !search.is_empty() => Some(search),
            _ => None,
        }
    }

    pub fn search_price(&self) -> Option<f64> {
        self.search().and_then(parse_search_price)
    }

    pub fn sale_month(&self) -> Result<Option<SaleMonth>, ApiError> {
        match &self.month {
            Some(month) => match SaleMonth::from_name_or_number(month) {
                Some(month) => Ok(Some(month)),
                None => Err(TransactionsApiError::InvalidMonth.value()),
            },
            None => Ok(None),
        }
    }

    /// `%search%` for ILIKE with the wildcards in `search` matched literally.
    pub fn search_pattern(&self) -> Option<String> {
        self.search().map(|search| ["%", &escape_like(search), "%"].concat())
    }

    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql = "SELECT id, title, description, category, price, date_of_sale, sold, image FROM transactions".to_string();

        let mut clauses = Vec::new();

        let mut index: u8 = 0;

        // WHERE CLAUSES
        if self.search().is_some() {
            index += 1;
            let search_index = index.to_string();
            let mut clause = [
                "(title ILIKE $",
                &search_index,
                " OR description ILIKE $",
                &search_index,
            ]
            .concat();

            if self.search_price().is_some() {
                index += 1;
                clause.push_str(&[" OR price = $", &index.to_string()].concat());
            }

            clause.push(')');
            clauses.push(clause);
        }
        if self.sale_month()?.is_some() {
            index += 1;
            clauses.push(
                [
                    "EXTRACT(MONTH FROM date_of_sale)::INTEGER = $",
                    &index.to_string(),
                ]
                .concat(),
            );
        }

        // CLAUSES BUILDER
        let mut has_inserted_where = false;

        for clause in clauses {
            if !has_inserted_where {
                sql.push_str(" WHERE ");
                has_inserted_where = true;
            } else {
                sql.push_str(" AND ");
            }

            sql.push_str(&clause);
        }

        // ORDER BY
        sql.push_str(" ORDER BY id ASC");

        // LIMIT
        sql.push_str(
            &[
                " LIMIT ",
                &self.per_page().to_string(),
                " OFFSET ",
                &self.offset().to_string(),
            ]
            .concat(),
        );

        tracing::debug!(sql);

        Ok(sql)
    }
}
