use anyhow::Result;
use sqlx::SqlitePool;

use crate::config::Config;

pub async fn init_sqlite_pool(cfg: &Config) -> Result<SqlitePool> {
    let pool = SqlitePool::connect(&cfg.database_url).await?;

    sqlx::migrate!().run(&pool).await?;

    return Ok(pool);
}
