use crate::app::{
    models::{
        api_error::ApiError,
        api_response::{ApiResponse, Data},
    },
    util,
};

use super::{
    dtos::get_transactions_filter_dto::GetTransactionsFilterDto,
    errors::TransactionsApiError,
    models::{
        bar_chart::{PriceRangeCount, PRICE_RANGES},
        combined_data::CombinedData,
        pie_chart::CategoryCount,
        sale_month::{SaleMonth, SalePeriod},
        statistics::Statistics,
        transaction::Transaction,
    },
    repository::TransactionsRepository,
};

pub async fn get_transactions(
    dto: &GetTransactionsFilterDto,
    repository: &dyn TransactionsRepository,
) -> Result<Vec<Transaction>, ApiError> {
    repository.get_transactions(dto).await
}

/// Month totals are year-agnostic: June 2021 and June 2022 both count.
pub async fn get_statistics(
    month: SaleMonth,
    repository: &dyn TransactionsRepository,
) -> Result<Statistics, ApiError> {
    tracing::debug!("get_statistics month={}", month.name());

    let (totals, total_count) =
        futures::try_join!(repository.get_month_totals(month), repository.count_all())?;

    Ok(Statistics {
        total_sale_amount: totals.total_sale_amount,
        total_sold_items: totals.count,
        total_not_sold_items: total_count - totals.count,
    })
}

pub async fn get_bar_chart(
    period: SalePeriod,
    repository: &dyn TransactionsRepository,
) -> Result<Vec<PriceRangeCount>, ApiError> {
    let Some((from, to)) = period.bounds() else {
        return Err(TransactionsApiError::InvalidMonth.value());
    };

    let futures = PRICE_RANGES.iter().map(|range| async move {
        let count = repository.count_in_price_range(range, from, to).await?;

        Ok::<_, ApiError>(PriceRangeCount {
            range: *range,
            count,
        })
    });

    futures::future::try_join_all(futures).await
}

pub async fn get_pie_chart(
    period: SalePeriod,
    repository: &dyn TransactionsRepository,
) -> Result<Vec<CategoryCount>, ApiError> {
    let Some((from, to)) = period.bounds() else {
        return Err(TransactionsApiError::InvalidMonth.value());
    };

    tracing::debug!("get_pie_chart period={}", period.to_year_month());

    let categories = repository.get_distinct_categories().await?;

    let futures = categories.into_iter().map(|category| async move {
        let count = repository.count_in_category(&category, from, to).await?;

        Ok::<_, ApiError>(CategoryCount { category, count })
    });

    futures::future::try_join_all(futures).await
}

/// Runs the four dashboard queries concurrently for one month. The month is
/// translated per query; the bar and pie charts use `year`.
pub async fn get_combined_data(
    month: SaleMonth,
    year: i32,
    repository: &dyn TransactionsRepository,
) -> Result<CombinedData, ApiError> {
    let dto = GetTransactionsFilterDto {
        month: Some(month.number().to_string()),
        ..Default::default()
    };
    let period = SalePeriod::new(year, month);

    let (transactions, statistics, bar_chart, pie_chart) = futures::try_join!(
        get_transactions(&dto, repository),
        get_statistics(month, repository),
        get_bar_chart(period, repository),
        get_pie_chart(period, repository),
    )?;

    Ok(CombinedData {
        list_transactions: ApiResponse::ok(Data { data: transactions }),
        statistics: ApiResponse::ok(statistics),
        bar_chart: ApiResponse::ok(Data { data: bar_chart }),
        pie_chart: ApiResponse::ok(Data { data: pie_chart }),
    })
}

/// Replaces the whole collection with the dump served at `seed_url`.
pub async fn initialize_database(
    seed_url: &str,
    repository: &dyn TransactionsRepository,
) -> Result<usize, ApiError> {
    let transactions = match util::reqwest::get_json::<Vec<Transaction>>(seed_url).await {
        Ok(transactions) => transactions,
        Err(e) => {
            tracing::error!("initialize_database failed get_json: {}", e.message);
            return Err(TransactionsApiError::SeedFailed.value());
        }
    };

    seed(&transactions, repository).await
}

pub async fn seed(
    transactions: &[Transaction],
    repository: &dyn TransactionsRepository,
) -> Result<usize, ApiError> {
    repository.replace_all(transactions).await?;

    tracing::info!("seeded {} transaction(s)", transactions.len());

    Ok(transactions.len())
}
