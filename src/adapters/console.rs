use crate::domain::ports::Reporter;
use crate::utils::paint::{self, Paint};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// 輸出到 stdout 的 reporter，成功綠色、失敗紅色
#[derive(Debug, Clone)]
pub struct TerminalReporter {
    color: bool,
}

impl TerminalReporter {
    pub fn new(color: bool) -> Self {
        Self {
            color: color && !paint::color_disabled_by_env(),
        }
    }

    fn paint(&self, style: Paint, text: &str) -> String {
        if self.color {
            style.apply(text)
        } else {
            text.to_string()
        }
    }

    fn write(&self, text: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{}", text) {
            tracing::warn!("Failed to write to stdout: {}", e);
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for TerminalReporter {
    fn line(&self, message: &str) {
        self.write(message);
    }

    fn success(&self, message: &str) {
        self.write(&self.paint(Paint::Green, message));
    }

    fn failure(&self, message: &str) {
        self.write(&self.paint(Paint::Red, message));
    }

    fn info(&self, message: &str) {
        self.write(&self.paint(Paint::Green, message));
    }

    fn highlight(&self, text: &str) -> String {
        self.paint(Paint::Yellow, text)
    }

    fn badge(&self, text: &str) -> String {
        self.paint(Paint::OnYellow, text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    Success,
    Failure,
    Info,
}

/// Collects lines in memory instead of printing them. Clones share the buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferedReporter {
    lines: Arc<Mutex<Vec<(LineKind, String)>>>,
}

impl BufferedReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, kind: LineKind, message: &str) {
        // poisoned 也照樣取回資料
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.push((kind, message.to_string()));
    }

    pub fn lines(&self) -> Vec<(LineKind, String)> {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.lines().into_iter().map(|(_, text)| text).collect()
    }

    pub fn of_kind(&self, kind: LineKind) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, text)| text)
            .collect()
    }
}

impl Reporter for BufferedReporter {
    fn line(&self, message: &str) {
        self.push(LineKind::Plain, message);
    }

    fn success(&self, message: &str) {
        self.push(LineKind::Success, message);
    }

    fn failure(&self, message: &str) {
        self.push(LineKind::Failure, message);
    }

    fn info(&self, message: &str) {
        self.push(LineKind::Info, message);
    }
}
