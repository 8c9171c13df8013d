use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{check_integrity, Catalog};

pub async fn run<C: Catalog + ?Sized>(catalog: &C) -> Result<CmdResult> {
    let products = catalog.list_all().await?;
    let categories = catalog.categories().await?;
    let report = check_integrity(&products, &categories);

    let mut result = CmdResult::default();
    if report.is_clean() {
        result.add_message(CmdMessage::success(format!(
            "No inconsistencies found in {} products.",
            report.products_checked
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{} inconsistencies found in {} products:",
            report.issues.len(),
            report.products_checked
        )));
        for issue in &report.issues {
            tracing::warn!(%issue, "catalog integrity");
            result.add_message(CmdMessage::info(format!("  - {}", issue)));
        }
    }

    Ok(result.with_integrity(report))
}
