//! Wipe-and-repopulate seeding for development and demos.
//!
//! Writes straight to the table without going through the diary service;
//! seed documents are expected to be valid already.

use sitediary_core::diary::NewDiaryDocument;

use crate::repositories::SiteDiaryRepo;
use crate::DbPool;

/// Seed set shipped with the crate, in the wire shape.
const BUNDLED_SEED: &str = include_str!("../seed/site_diaries.json");

/// Parse the bundled seed set.
pub fn bundled_seed() -> Result<Vec<NewDiaryDocument>, serde_json::Error> {
    serde_json::from_str(BUNDLED_SEED)
}

/// Replace every diary with `documents` in one transaction.
///
/// Returns the number of documents inserted.
pub async fn reseed(pool: &DbPool, documents: &[NewDiaryDocument]) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let cleared = SiteDiaryRepo::delete_all(&mut *tx).await?;
    tracing::info!(cleared, "Cleared existing site diaries");

    for document in documents {
        SiteDiaryRepo::create(&mut *tx, document).await?;
    }

    tx.commit().await?;

    let inserted = documents.len() as u64;
    tracing::info!(inserted, "Seeded site diaries");
    Ok(inserted)
}
