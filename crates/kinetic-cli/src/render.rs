use std::fmt::Write;

use kinetic_admin::card::CardSummary;

/// Plain-text rendering of one card.
pub fn card(summary: &CardSummary) -> String {
    let mut out = String::new();
    let id = summary.id.as_deref().unwrap_or("(unsaved)");
    let _ = writeln!(out, "[{id}] {}", summary.title);
    let _ = writeln!(out, "    {}", summary.subtitle);
    for line in &summary.details {
        let _ = writeln!(out, "    - {line}");
    }
    let _ = write!(out, "    {}", summary.image_url);
    out
}
