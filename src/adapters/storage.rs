use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// 從本機建置目錄讀取要上傳的檔案
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        tracing::debug!("Reading artifact from {}", full_path.display());
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }
}
