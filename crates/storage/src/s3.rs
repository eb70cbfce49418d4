use crate::backend::StorageBackend;
use crate::StorageError;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::put_object::PutObjectError;
use aws_sdk_s3::{primitives::ByteStream, Client};
use std::path::Path;
use sweeper_config::S3Settings;

/// S3-compatible storage backend
/// Compatible with: AWS S3, Cloudflare R2, MinIO, DigitalOcean Spaces, etc.
pub struct S3Backend {
    client: Client,
    bucket_name: String,
}

impl S3Backend {
    /// Builds a client from the SDK default chains.
    /// Non-empty settings override the resolved region, endpoint and credentials.
    pub async fn new(bucket_name: String, settings: &S3Settings) -> Result<Self, StorageError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if !settings.region.is_empty() {
            loader = loader.region(Region::new(settings.region.clone()));
        }
        if !settings.endpoint_url.is_empty() {
            loader = loader.endpoint_url(settings.endpoint_url.as_str());
        }
        if settings.has_static_credentials() {
            let credentials = Credentials::new(
                settings.access_key_id.clone(),
                settings.secret_access_key.clone(),
                None,
                None,
                "backup-sweeper",
            );
            loader = loader.credentials_provider(credentials);
        }

        let sdk_config = loader.load().await;
        if sdk_config.region().is_none() {
            return Err(StorageError::ConfigError(
                "no AWS region resolved; set storage.s3.region or AWS_REGION".to_string(),
            ));
        }

        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(settings.force_path_style)
            .build();

        Ok(Self {
            client: Client::from_conf(s3_config),
            bucket_name,
        })
    }
}

fn classify_put_error<R>(key: &str, err: SdkError<PutObjectError, R>) -> StorageError
where
    R: std::fmt::Debug,
{
    let transport = matches!(
        err,
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)
    );
    let code = err
        .as_service_error()
        .and_then(|service| service.code())
        .map(str::to_string);
    let message = DisplayErrorContext(&err).to_string();

    StorageError::from_request_failure(key, code.as_deref(), transport, message)
}

#[async_trait::async_trait]
impl StorageBackend for S3Backend {
    async fn upload_file(&self, local_path: &Path, key: &str) -> Result<String, StorageError> {
        let size = tokio::fs::metadata(local_path).await?.len();

        tracing::info!("Uploading {} ({} bytes) to S3 bucket {}", key, size, self.bucket_name);

        let body = ByteStream::from_path(local_path)
            .await
            .map_err(std::io::Error::other)?;

        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|e| classify_put_error(key, e))?;

        let location = self.location(key);
        tracing::info!("Upload complete: {}", location);

        Ok(location)
    }

    fn location(&self, key: &str) -> String {
        format!("s3://{}/{}", self.bucket_name, key)
    }

    fn name(&self) -> &'static str {
        "s3"
    }

    fn is_remote(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::error::ErrorMetadata;
    use sweeper_models::ErrorKind;

    fn service_error(code: &str) -> SdkError<PutObjectError, ()> {
        let metadata = ErrorMetadata::builder().code(code).message("rejected").build();
        SdkError::service_error(PutObjectError::generic(metadata), ())
    }

    #[test]
    fn test_timeout_is_network() {
        let err = SdkError::<PutObjectError, ()>::timeout_error("operation timed out");
        let classified = classify_put_error("backups/a.tar", err);
        assert_eq!(classified.kind(), ErrorKind::Network);
        assert!(matches!(classified, StorageError::NetworkError(ref key, _) if key == "backups/a.tar"));
    }

    #[test]
    fn test_bad_access_key_is_authentication() {
        let classified = classify_put_error("backups/a.tar", service_error("InvalidAccessKeyId"));
        assert_eq!(classified.kind(), ErrorKind::Authentication);
    }

    #[test]
    fn test_signature_mismatch_is_authentication() {
        let classified = classify_put_error("k", service_error("SignatureDoesNotMatch"));
        assert_eq!(classified.kind(), ErrorKind::Authentication);
    }

    #[test]
    fn test_missing_bucket_is_storage() {
        let classified = classify_put_error("k", service_error("NoSuchBucket"));
        assert_eq!(classified.kind(), ErrorKind::Storage);
    }
}
