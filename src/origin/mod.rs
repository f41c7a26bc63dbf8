pub mod seed;
mod storage;
mod types;

pub use storage::OriginStorage;
pub use types::*;

use crate::Result;
use async_trait::async_trait;

/// Read side of the species origin table.
///
/// `Ok(None)` from [`find_by_species`](OriginStore::find_by_species) means the
/// species has no record; an unreachable store is `Error::StoreUnavailable`.
#[async_trait]
pub trait OriginStore: Send + Sync {
    async fn find_by_species(&self, species: &str) -> Result<Option<OriginRecord>>;

    async fn list_all(&self) -> Result<Vec<OriginRecord>>;

    async fn is_available(&self) -> bool;

    async fn list_as_geo_features(&self) -> Result<Vec<GeoFeature>> {
        let origins = self.list_all().await?;
        Ok(origins.iter().map(GeoFeature::from).collect())
    }
}
