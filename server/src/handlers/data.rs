//! Backup, restore and reset handlers.

use crate::error::Result;
use nutrilog_engine::{DataSnapshot, NutritionStore, SnapshotSummary};

pub async fn handle_export(store: &NutritionStore) -> Result<DataSnapshot> {
    Ok(store.export_snapshot().await?)
}

pub async fn handle_import(
    store: &NutritionStore,
    snapshot: DataSnapshot,
) -> Result<SnapshotSummary> {
    let snapshot = snapshot.validated()?;
    store.import_snapshot(&snapshot).await?;
    Ok(SnapshotSummary::from(&snapshot))
}

pub async fn handle_clear(store: &NutritionStore) -> Result<()> {
    store.clear_all().await?;
    tracing::warn!("all stored data deleted on request");
    Ok(())
}
