use crate::commands::{CmdMessage, CmdResult, VoucherView};
use crate::error::Result;
use crate::store::Catalog;
use chrono::NaiveDate;

/// All vouchers, flagged active or expired as of `today`.
pub async fn run<C: Catalog + ?Sized>(catalog: &C, today: NaiveDate) -> Result<CmdResult> {
    let views: Vec<VoucherView> = catalog
        .vouchers()
        .await?
        .into_iter()
        .map(|voucher| VoucherView {
            active: voucher.is_active_on(today),
            voucher,
        })
        .collect();

    let mut result = CmdResult::default();
    if !views.is_empty() && views.iter().all(|v| !v.active) {
        result.add_message(CmdMessage::info("All vouchers have expired."));
    }
    Ok(result.with_vouchers(views))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryCatalog;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn flags_expiry_per_voucher() {
        let catalog = InMemoryCatalog::bundled();
        let res = run(&catalog, day(2025, 11, 15)).await.unwrap();
        assert_eq!(res.vouchers.len(), 2);
        assert!(!res.vouchers[0].active);
        assert!(res.vouchers[1].active);
        assert!(res.messages.is_empty());
    }

    #[tokio::test]
    async fn notes_when_everything_expired() {
        let catalog = InMemoryCatalog::bundled();
        let res = run(&catalog, day(2026, 1, 1)).await.unwrap();
        assert!(res.vouchers.iter().all(|v| !v.active));
        assert_eq!(res.messages.len(), 1);
    }
}
