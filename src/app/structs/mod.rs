pub mod query_from_request;
