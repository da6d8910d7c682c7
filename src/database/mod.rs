pub mod connection;

pub use connection::{DbPool, close_pool, create_pool, run_migrations};
#[cfg(test)]
pub(crate) use connection::test_pool;
