//! Cloudflare R2 backend over the S3 API.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};
use skillconnect_core::storage::object_key;

use crate::{ObjectInfo, ObjectStore, StorageError, StorageResult, StoredObject};

/// Connection settings for the R2 bucket.
///
/// | Env Var                | Required |
/// |------------------------|----------|
/// | `R2_ACCOUNT_ID`        | yes      |
/// | `R2_ACCESS_KEY_ID`     | yes      |
/// | `R2_SECRET_ACCESS_KEY` | yes      |
/// | `R2_BUCKET_NAME`       | yes      |
/// | `R2_PUBLIC_URL`        | yes      |
#[derive(Debug, Clone)]
pub struct R2Config {
    pub account_id: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    pub public_url: String,
}

impl R2Config {
    pub fn from_env() -> StorageResult<Self> {
        Ok(Self {
            account_id: required_var("R2_ACCOUNT_ID")?,
            access_key_id: required_var("R2_ACCESS_KEY_ID")?,
            secret_access_key: required_var("R2_SECRET_ACCESS_KEY")?,
            bucket: required_var("R2_BUCKET_NAME")?,
            public_url: required_var("R2_PUBLIC_URL")?
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// S3 API endpoint for the account.
    pub fn endpoint(&self) -> String {
        format!("https://{}.r2.cloudflarestorage.com", self.account_id)
    }
}

fn required_var(name: &str) -> StorageResult<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| StorageError::Config(format!("{name} must be set")))
}

fn backend_err(op: &str, e: impl std::fmt::Display) -> StorageError {
    StorageError::Backend(format!("{op} failed: {e}"))
}

pub struct R2ObjectStore {
    client: Client,
    bucket: String,
    public_url: String,
}

impl R2ObjectStore {
    /// Build the S3 client for `config`. No request is made until first use.
    pub async fn connect(config: &R2Config) -> Self {
        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "r2-env",
        );
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new("auto"))
            .endpoint_url(config.endpoint())
            .credentials_provider(credentials)
            .load()
            .await;

        Self {
            client: Client::new(&sdk_config),
            bucket: config.bucket.clone(),
            public_url: config.public_url.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for R2ObjectStore {
    fn public_base(&self) -> &str {
        &self.public_url
    }

    async fn put(
        &self,
        bytes: Vec<u8>,
        original_name: &str,
        content_type: &str,
    ) -> StorageResult<StoredObject> {
        let key = object_key(Utc::now().timestamp_millis(), original_name);
        let size = bytes.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| backend_err("PutObject", aws_sdk_s3::error::DisplayErrorContext(e)))?;

        tracing::debug!(key = %key, size, "Object uploaded");
        Ok(StoredObject {
            url: self.url_for(&key),
            key,
        })
    }

    async fn list(&self) -> StorageResult<Vec<ObjectInfo>> {
        let mut objects = Vec::new();
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .into_paginator()
            .send();

        while let Some(page) = pages.next().await {
            let page =
                page.map_err(|e| backend_err("ListObjectsV2", aws_sdk_s3::error::DisplayErrorContext(e)))?;
            for object in page.contents() {
                let Some(key) = object.key() else { continue };
                let modified_at = object
                    .last_modified()
                    .and_then(|t| DateTime::<Utc>::from_timestamp(t.secs(), t.subsec_nanos()));
                objects.push(ObjectInfo {
                    key: key.to_string(),
                    url: self.url_for(key),
                    size: object.size().unwrap_or_default(),
                    modified_at,
                });
            }
        }

        Ok(objects)
    }

    async fn delete_key(&self, key: &str) -> StorageResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| backend_err("DeleteObject", aws_sdk_s3::error::DisplayErrorContext(e)))?;

        tracing::debug!(key, "Object deleted");
        Ok(())
    }
}
