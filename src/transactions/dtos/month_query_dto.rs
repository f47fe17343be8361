use serde::Deserialize;

use crate::{
    app::models::api_error::ApiError,
    transactions::{
        errors::TransactionsApiError,
        models::sale_month::{SaleMonth, SalePeriod},
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct MonthQueryDto {
    pub month: Option<String>,
}

impl MonthQueryDto {
    fn raw(&self) -> Result<&str, ApiError> {
        match &self.month {
            Some(month) => Ok(month),
            None => Err(TransactionsApiError::MissingMonth.value()),
        }
    }

    /// `"June"` or `"6"`.
    pub fn to_sale_month(&self) -> Result<SaleMonth, ApiError> {
        SaleMonth::from_name_or_number(self.raw()?)
            .ok_or_else(|| TransactionsApiError::InvalidMonth.value())
    }

    /// `"5"` is June.
    pub fn to_zero_based_month(&self) -> Result<SaleMonth, ApiError> {
        SaleMonth::from_zero_based(self.raw()?)
            .ok_or_else(|| TransactionsApiError::InvalidMonth.value())
    }

    /// `"2023-06"`.
    pub fn to_sale_period(&self) -> Result<SalePeriod, ApiError> {
        SalePeriod::from_year_month(self.raw()?)
            .ok_or_else(|| TransactionsApiError::InvalidMonth.value())
    }

    pub fn to_sale_month_or_january(&self) -> Result<SaleMonth, ApiError> {
        match &self.month {
            Some(_) => self.to_sale_month(),
            None => Ok(SaleMonth::JANUARY),
        }
    }
}
