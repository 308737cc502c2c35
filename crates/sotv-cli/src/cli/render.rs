//! Plain-text rendering of the session view.

use sotv_core::session::{StatusKind, ViewState};

pub(crate) const DISCLAIMER: &str = "\
Legal disclaimer: archived pages are provided for research and verification only.
Content belongs to the original publishers and may be outdated. Signed links are
personal and expire after a few minutes; do not redistribute them.";

pub(crate) fn render_status(view: &ViewState) -> Option<String> {
    let status = view.status.as_ref()?;
    let tag = match status.kind {
        StatusKind::Loading => "loading",
        StatusKind::Success => "ok",
        StatusKind::Error => "error",
        StatusKind::Expired => "expired",
    };
    Some(format!("[{tag}] {}", status.text))
}

/// Status, metadata, embedded link and search results, one item per line.
pub(crate) fn render_view(view: &ViewState) -> String {
    let mut lines = Vec::new();
    if let Some(status) = render_status(view) {
        lines.push(status);
    }
    if let Some(meta) = &view.metadata {
        lines.push(format!("  {:<15} {}", "Seed bank:", meta.seed_bank));
        lines.push(format!("  {:<15} {}", "Collected:", meta.collection_date));
        lines.push(format!("  {:<15} {}", "Link lifetime:", meta.server_expiry));
        if let Some(label) = &view.expiry_label {
            lines.push(format!("  {:<15} {}", "Expires in:", label));
        }
        if let Some(notice) = &meta.legal_notice {
            lines.push(format!("  {:<15} {}", "Notice:", notice));
        }
    }
    if let Some(url) = &view.embedded_url {
        lines.push(format!("  {:<15} {}", "Archive:", url));
    }
    if let Some(results) = &view.search_results {
        lines.extend(results.render().lines().map(|l| format!("  {l}")));
    }
    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
