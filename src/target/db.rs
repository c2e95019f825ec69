use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::campaign::CampaignId;
use crate::error::Error;

use super::{Target, TargetId, TargetStatus};

#[async_trait]
pub trait TargetStore: Send + Sync {
    async fn insert_target(&self, target: &Target) -> Result<(), Error>;
    async fn fetch_targets(&self) -> Result<Vec<Target>, Error>;
    async fn fetch_targets_by_campaign(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Vec<Target>, Error>;
    async fn fetch_target_by_id(&self, target_id: TargetId) -> Result<Option<Target>, Error>;
    /// Overwrites the status of every listed target, leaving all other
    /// fields untouched. Unknown ids are skipped. Returns how many records
    /// were updated; safe to retry with the same id set.
    async fn update_target_statuses(
        &self,
        target_ids: &[TargetId],
        status: TargetStatus,
    ) -> Result<u64, Error>;
    async fn clear(&self) -> Result<(), Error>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryTargetStore {
    rows: Arc<RwLock<Vec<Target>>>,
}

#[async_trait]
impl TargetStore for MemoryTargetStore {
    #[tracing::instrument(skip(self, target))]
    async fn insert_target(&self, target: &Target) -> Result<(), Error> {
        self.rows.write().await.push(target.clone());

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_targets(&self) -> Result<Vec<Target>, Error> {
        let targets = self.rows.read().await.clone();

        Ok(targets)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_targets_by_campaign(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Vec<Target>, Error> {
        let targets = self
            .rows
            .read()
            .await
            .iter()
            .filter(|target| target.campaign_id == campaign_id)
            .cloned()
            .collect();

        Ok(targets)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_target_by_id(&self, target_id: TargetId) -> Result<Option<Target>, Error> {
        let target = self
            .rows
            .read()
            .await
            .iter()
            .find(|target| target.id == target_id)
            .cloned();

        Ok(target)
    }

    #[tracing::instrument(skip(self))]
    async fn update_target_statuses(
        &self,
        target_ids: &[TargetId],
        status: TargetStatus,
    ) -> Result<u64, Error> {
        let mut rows = self.rows.write().await;

        let mut updated = 0;
        for target in rows.iter_mut() {
            if target_ids.contains(&target.id) {
                target.status = status;
                updated += 1;
            }
        }

        Ok(updated)
    }

    #[tracing::instrument(skip(self))]
    async fn clear(&self) -> Result<(), Error> {
        self.rows.write().await.clear();

        Ok(())
    }
}
