use std::path::{Path, PathBuf};

use anyhow::Result;
use s3::{error::S3Error, Bucket};
use tokio::fs;

/// Fallback for objects stored without a recorded content type.
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// Blob store for uploaded images, keyed by `{room_id}/{name}` paths.
///
/// Production deployments point this at an S3-compatible bucket (R2, minio);
/// without bucket credentials it falls back to a plain directory on disk,
/// which is also what the tests use. The local backend keeps the content type
/// in a `.meta` sidecar next to the object.
pub enum ImageStore {
    S3(Bucket),
    Local { dir: PathBuf },
}

impl ImageStore {
    pub fn local(dir: PathBuf) -> Self {
        return Self::Local { dir };
    }

    pub async fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<()> {
        match self {
            Self::S3(bucket) => {
                bucket
                    .put_object_with_content_type(key, bytes, content_type)
                    .await?;
            }
            Self::Local { dir } => {
                let path = dir.join(key);

                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).await?;
                }
                fs::write(&path, bytes).await?;
                fs::write(meta_path(&path), content_type).await?;
            }
        }

        return Ok(());
    }

    /// Stored bytes and their recorded content type; `None` when the key is
    /// absent.
    pub async fn get(&self, key: &str) -> Result<Option<(Vec<u8>, String)>> {
        // Keys come straight from the request path.
        if key.split('/').any(|segment| segment == "..") {
            return Ok(None);
        }

        match self {
            Self::S3(bucket) => {
                let resp = match bucket.get_object(key).await {
                    Ok(resp) if resp.status_code() == 404 => return Ok(None),
                    Ok(resp) => resp,
                    Err(S3Error::Http(404, _)) => return Ok(None),
                    Err(err) => return Err(err.into()),
                };

                let headers = resp.headers();
                let content_type = headers
                    .get("content-type")
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

                return Ok(Some((resp.bytes().to_vec(), content_type)));
            }
            Self::Local { dir } => {
                let path = dir.join(key);

                let bytes = match fs::read(&path).await {
                    Ok(bytes) => bytes,
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
                    Err(err) => return Err(err.into()),
                };

                let content_type = match fs::read_to_string(meta_path(&path)).await {
                    Ok(content_type) => content_type,
                    Err(_) => DEFAULT_CONTENT_TYPE.to_string(),
                };

                return Ok(Some((bytes, content_type)));
            }
        }
    }
}

fn meta_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".meta");

    return PathBuf::from(name);
}
