use std::path::PathBuf;

use anyhow::Result;
use s3::{creds::Credentials, Bucket, Region};
use tracing::info;

use crate::config::Config;
use crate::storage::ImageStore;

pub fn init_image_store(cfg: &Config) -> Result<ImageStore> {
    if let (Some(bucket), Some(region), Some(endpoint)) =
        (&cfg.s3_bucket, &cfg.s3_region, &cfg.s3_endpoint)
    {
        info!(%bucket, "storing images in s3 bucket");

        let bucket = Bucket::new(
            bucket,
            Region::Custom {
                region: region.clone(),
                endpoint: endpoint.clone(),
            },
            Credentials::new(
                cfg.s3_access_key_id.as_deref(),
                cfg.s3_secret_access_key.as_deref(),
                None,
                None,
                None,
            )?,
        )?
        .with_path_style();

        return Ok(ImageStore::S3(bucket));
    }

    info!(dir = %cfg.image_dir, "storing images on local disk");

    return Ok(ImageStore::local(PathBuf::from(&cfg.image_dir)));
}
