pub mod datetime;

pub use datetime::{parse_datetime, resolve_query_datetime};
