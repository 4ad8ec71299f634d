use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub database_url: String,

    pub max_upload_mb: usize,

    pub image_dir: String,

    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>,
    pub s3_access_key_id: Option<String>,
    pub s3_secret_access_key: Option<String>,
}

pub fn build() -> Config {
    return Config {
        bind_addr: env_or("BIND_ADDR", "0.0.0.0:8000"),
        database_url: env_or("DATABASE_URL", "sqlite:chalkboard.db?mode=rwc"),

        max_upload_mb: env_or("MAX_UPLOAD_MB", "10").parse().unwrap_or(10),

        image_dir: env_or("IMAGE_DIR", "data/images"),

        s3_bucket: env::var("S3_BUCKET").ok(),
        s3_region: env::var("S3_REGION").ok(),
        s3_endpoint: env::var("S3_ENDPOINT").ok(),
        s3_access_key_id: env::var("S3_ACCESS_KEY_ID").ok(),
        s3_secret_access_key: env::var("S3_SECRET_ACCESS_KEY").ok(),
    };
}

fn env_or(key: &str, default: &str) -> String {
    return env::var(key).unwrap_or_else(|_| default.to_string());
}
