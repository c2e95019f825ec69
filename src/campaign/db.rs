use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Error;

use super::{Campaign, CampaignId};

#[async_trait]
pub trait CampaignStore: Send + Sync {
    async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error>;
    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error>;
    async fn fetch_campaign_by_id(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Option<Campaign>, Error>;
    async fn clear(&self) -> Result<(), Error>;
}

// Insertion order is the only ordering the views rely on, so the rows sit
// in a plain Vec.
#[derive(Clone, Debug, Default)]
pub struct MemoryCampaignStore {
    rows: Arc<RwLock<Vec<Campaign>>>,
}

#[async_trait]
impl CampaignStore for MemoryCampaignStore {
    #[tracing::instrument(skip(self, campaign))]
    async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
        self.rows.write().await.push(campaign.clone());

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error> {
        let campaigns = self.rows.read().await.clone();

        Ok(campaigns)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaign_by_id(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Option<Campaign>, Error> {
        let campaign = self
            .rows
            .read()
            .await
            .iter()
            .find(|campaign| campaign.id == campaign_id)
            .cloned();

        Ok(campaign)
    }

    #[tracing::instrument(skip(self))]
    async fn clear(&self) -> Result<(), Error> {
        self.rows.write().await.clear();

        Ok(())
    }
}
