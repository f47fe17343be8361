pub mod bar_chart;
pub mod combined_data;
pub mod pie_chart;
pub mod sale_month;
pub mod statistics;
pub mod transaction;
