use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    app::{
        models::{
            api_error::ApiError,
            api_response::{ApiResponse, Data, Message},
        },
        structs::query_from_request::QueryFromRequest,
        util::time,
    },
    AppState,
};

use super::{
    dtos::{get_transactions_filter_dto::GetTransactionsFilterDto, month_query_dto::MonthQueryDto},
    models::{
        bar_chart::PriceRangeCount, combined_data::CombinedData, pie_chart::CategoryCount,
        sale_month::SalePeriod, statistics::Statistics, transaction::Transaction,
    },
    service,
};

pub async fn get_transactions(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<GetTransactionsFilterDto>,
) -> Result<Json<ApiResponse<Data<Vec<Transaction>>>>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match service::get_transactions(&dto, state.repository.as_ref()).await {
        Ok(transactions) => Ok(Json(ApiResponse::ok(Data { data: transactions }))),
        Err(e) => {
            tracing::error!("Error fetching transactions: {}", e.message);
            Err(e)
        }
    }
}

pub async fn get_statistics(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<MonthQueryDto>,
) -> Result<Json<ApiResponse<Statistics>>, ApiError> {
    let month = dto.to_sale_month().map_err(|e| {
        tracing::warn!("Error fetching statistics: {}", e.message);
        e
    })?;

    match service::get_statistics(month, state.repository.as_ref()).await {
        Ok(statistics) => Ok(Json(ApiResponse::ok(statistics))),
        Err(e) => {
            tracing::error!("Error fetching statistics: {}", e.message);
            Err(e)
        }
    }
}

/// `month` is 0-based; the chart covers that month of the current year.
pub async fn get_bar_chart(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<MonthQueryDto>,
) -> Result<Json<ApiResponse<Data<Vec<PriceRangeCount>>>>, ApiError> {
    let month = dto.to_zero_based_month().map_err(|e| {
        tracing::warn!("Error fetching bar chart data: {}", e.message);
        e
    })?;
    let period = SalePeriod::new(time::current_year(), month);

    match service::get_bar_chart(period, state.repository.as_ref()).await {
        Ok(buckets) => Ok(Json(ApiResponse::ok(Data { data: buckets }))),
        Err(e) => {
            tracing::error!("Error fetching bar chart data: {}", e.message);
            Err(e)
        }
    }
}

/// `month` is `YYYY-MM`.
pub async fn get_pie_chart(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<MonthQueryDto>,
) -> Result<Json<ApiResponse<Data<Vec<CategoryCount>>>>, ApiError> {
    let period = dto.to_sale_period().map_err(|e| {
        tracing::warn!("Error fetching pie chart data: {}", e.message);
        e
    })?;

    match service::get_pie_chart(period, state.repository.as_ref()).await {
        Ok(counts) => Ok(Json(ApiResponse::ok(Data { data: counts }))),
        Err(e) => {
            tracing::error!("Error fetching pie chart data: {}", e.message);
            Err(e)
        }
    }
}

/// `month` is a name or 1-12 and defaults to January.
pub async fn get_combined_data(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<MonthQueryDto>,
) -> Result<Json<ApiResponse<CombinedData>>, ApiError> {
    let month = dto.to_sale_month_or_january().map_err(|e| {
        tracing::warn!("Error fetching combined data: {}", e.message);
        e
    })?;

    match service::get_combined_data(month, time::current_year(), state.repository.as_ref()).await
    {
        Ok(combined) => Ok(Json(ApiResponse::ok(combined))),
        Err(e) => {
            tracing::error!("Error fetching combined data: {}", e.message);
            Err(e)
        }
    }
}

pub async fn initialize_database(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Message>>, ApiError> {
    match service::initialize_database(state.envy.seed_url(), state.repository.as_ref()).await {
        Ok(_) => Ok(Json(ApiResponse::ok(Message {
            message: "Database initialized successfully".to_string(),
        }))),
        Err(e) => {
            tracing::error!("Error initializing database: {}", e.message);
            Err(e)
        }
    }
}
