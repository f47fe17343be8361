pub mod get_transactions_filter_dto;
pub mod month_query_dto;
