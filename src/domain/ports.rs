use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// 產生新的 revision id，每次 upload 只呼叫一次
pub trait TagGenerator: Send + Sync {
    fn create_tag(&self) -> Result<String>;
}

impl<T: TagGenerator + ?Sized> TagGenerator for Box<T> {
    fn create_tag(&self) -> Result<String> {
        (**self).create_tag()
    }
}

/// Line-oriented UI sink used by the adapter.
pub trait Reporter: Send + Sync {
    fn line(&self, message: &str);

    fn success(&self, message: &str);

    fn failure(&self, message: &str);

    fn info(&self, message: &str);

    fn blank(&self) {
        self.line("");
    }

    /// Inline emphasis for revision ids.
    fn highlight(&self, text: &str) -> String {
        text.to_string()
    }

    /// Inline marker for the active revision.
    fn badge(&self, text: &str) -> String {
        text.to_string()
    }
}
