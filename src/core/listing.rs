use crate::domain::model::Revision;
use crate::domain::ports::Reporter;
use crate::utils::time;
use chrono::{DateTime, Utc};

pub const CURRENT_MARKER: &str = "current";

/// 依 created_at 由新到舊排序（同時間保留伺服器順序），只留前 `manifest_size` 筆
pub fn select_for_display(mut revisions: Vec<Revision>, manifest_size: usize) -> Vec<Revision> {
    revisions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    revisions.truncate(manifest_size);
    revisions
}

pub fn render_line<R: Reporter + ?Sized>(
    ordinal: usize,
    revision: &Revision,
    now: DateTime<Utc>,
    reporter: &R,
) -> String {
    let mut message = format!(
        "{}. {} ({})",
        ordinal,
        reporter.highlight(&revision.id),
        time::from_now(revision.created_at, now)
    );
    if revision.current {
        message.push(' ');
        message.push_str(&reporter.badge(CURRENT_MARKER));
    }
    message
}

/// Writes the listing followed by the activation hint.
pub fn write_revisions<R: Reporter + ?Sized>(
    revisions: Vec<Revision>,
    manifest_size: usize,
    activate_command: &str,
    now: DateTime<Utc>,
    reporter: &R,
) {
    for (i, revision) in select_for_display(revisions, manifest_size)
        .iter()
        .enumerate()
    {
        reporter.line(&render_line(i + 1, revision, now, reporter));
    }

    reporter.blank();
    reporter.success(&format!(
        "Run \"{} --revision <revision>\" to set one of your revisions as current",
        activate_command
    ));
}
