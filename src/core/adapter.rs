use crate::config::AdapterConfig;
use crate::core::listing;
use crate::core::request::{Endpoint, Operation};
use crate::domain::model::{self, Outcome, Revision};
use crate::domain::ports::{Reporter, Storage, TagGenerator};
use crate::utils::error::{Result, RevisionError};
use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct UploadBody<'a> {
    id: &'a str,
    body: &'a str,
}

/// Publishes, lists and activates revisions on a REST backend.
///
/// Every public call sends at most one request and reports the result through
/// the [`Reporter`]; failures are never returned to the caller.
pub struct RevisionAdapter<T: TagGenerator, R: Reporter> {
    config: AdapterConfig,
    endpoint: Endpoint,
    tags: T,
    reporter: R,
    client: Client,
}

impl<T: TagGenerator, R: Reporter> RevisionAdapter<T, R> {
    pub fn new(config: AdapterConfig, tags: T, reporter: R) -> Result<Self> {
        let config = config.normalize()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let client = builder.build()?;

        tracing::debug!(
            "Revision adapter ready for {}/{}",
            config.host,
            config.resource
        );

        Ok(Self {
            endpoint: Endpoint::new(&config),
            config,
            tags,
            reporter,
            client,
        })
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// 上傳建置產物成為新的 revision
    pub async fn upload(&self, content: &[u8]) -> Outcome {
        let tag = match self.tags.create_tag() {
            Ok(tag) => tag,
            Err(e) => return self.report_failure(Operation::Upload, &e),
        };
        let body = String::from_utf8_lossy(content);

        match self.send_upload(&tag, &body).await {
            Ok(_) => {
                self.reporter
                    .success(&format!("Your revision '{}' was uploaded", tag));
                Outcome::Completed
            }
            Err(e) => self.report_failure(Operation::Upload, &e),
        }
    }

    /// 從 storage 讀出建置產物後上傳；讀檔失敗同樣回報成 `Error:` 行
    pub async fn upload_from<S: Storage>(&self, storage: &S, path: &str) -> Outcome {
        match storage.read_file(path).await {
            Ok(content) => self.upload(&content).await,
            Err(e) => {
                tracing::debug!("Could not read artifact {}: {}", path, e);
                self.report_failure(Operation::Upload, &e)
            }
        }
    }

    /// 列出遠端的 revisions
    pub async fn list(&self) -> Outcome {
        match self.fetch_revisions().await {
            Ok(revisions) => {
                self.reporter.success("Your revisions: ");
                listing::write_revisions(
                    revisions,
                    self.config.manifest_size(),
                    self.config.activate_command(),
                    Utc::now(),
                    &self.reporter,
                );
                Outcome::Completed
            }
            Err(e) => self.report_failure(Operation::List, &e),
        }
    }

    /// 把指定的 revision 設為 current；沒給 id 時不送出任何請求
    pub async fn activate(&self, revision: Option<&str>) -> Outcome {
        let Some(revision) = revision.filter(|id| !id.trim().is_empty()) else {
            self.reporter.failure(&format!(
                "No revision given. Try \"{} --revision <revision>\"",
                self.config.activate_command()
            ));
            return Outcome::Skipped;
        };

        match self.send_activate(revision).await {
            Ok(_) => {
                self.reporter
                    .success(&format!("Revision {} was activated", revision));
                Outcome::Completed
            }
            Err(e) => self.report_failure(Operation::Activate, &e),
        }
    }

    async fn send_upload(&self, tag: &str, body: &str) -> Result<String> {
        let url = self.endpoint.collection_url();
        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&UploadBody { id: tag, body });

        self.execute(Operation::Upload, &url, request).await
    }

    async fn fetch_revisions(&self) -> Result<Vec<Revision>> {
        let url = self.endpoint.collection_url();
        let body = self
            .execute(Operation::List, &url, self.client.get(&url))
            .await?;

        let revisions = model::decode_revisions(&body)
            .map_err(|message| RevisionError::DecodeError { message })?;
        tracing::debug!("📡 Received {} revisions", revisions.len());
        Ok(revisions)
    }

    async fn send_activate(&self, revision: &str) -> Result<String> {
        let url = self.endpoint.revision_url(revision);
        let request = self
            .client
            .put(&url)
            .header(CONTENT_TYPE, "application/json");

        self.execute(Operation::Activate, &url, request).await
    }

    /// 送出單一請求，狀態碼不在允許清單內就回傳 UnexpectedStatus
    async fn execute(
        &self,
        operation: Operation,
        url: &str,
        request: RequestBuilder,
    ) -> Result<String> {
        self.reporter.info(&operation.describe(url));
        self.reporter.blank();

        tracing::debug!("📡 {} {}", operation.method(), url);
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("📡 {} {} -> {}", operation.method(), url, status);

        if operation.accepts(status) {
            Ok(body)
        } else {
            tracing::warn!(
                "Backend rejected {} {} with status {}",
                operation.method(),
                url,
                status
            );
            Err(RevisionError::UnexpectedStatus {
                method: operation.method().to_string(),
                url: url.to_string(),
                status: status.as_u16(),
                body,
            })
        }
    }

    fn report_failure(&self, operation: Operation, error: &RevisionError) -> Outcome {
        tracing::debug!("❌ {:?} failed: {}", operation, error);
        self.reporter.failure(&format!("Error: {}", error.render()));
        Outcome::Failed
    }
}
