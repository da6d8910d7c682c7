use crate::config::DatabaseConfig;
use crate::error::AppResult;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

pub type DbPool = DatabaseConnection;

pub async fn create_pool(config: &DatabaseConfig) -> AppResult<DbPool> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);
    // 内存 SQLite 每个连接是独立的库，只能用单连接
    if config.url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    let pool = Database::connect(options).await?;
    log::info!("Connected to database ({:?})", pool.get_database_backend());
    Ok(pool)
}

pub async fn run_migrations(pool: &DbPool) -> AppResult<()> {
    Migrator::up(pool, None).await?;
    Ok(())
}

pub async fn close_pool(pool: DbPool) -> AppResult<()> {
    pool.close().await?;
    log::info!("Database connection pool closed");
    Ok(())
}

/// 测试用: 已迁移的内存 SQLite
#[cfg(test)]
pub(crate) async fn test_pool() -> DbPool {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    let pool = create_pool(&config).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}
