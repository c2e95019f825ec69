use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::campaign::CampaignId;
use crate::error::Error;

use super::{Journey, JourneyId, JourneyStatus};

#[async_trait]
pub trait JourneyStore: Send + Sync {
    async fn insert_journey(&self, journey: &Journey) -> Result<(), Error>;
    async fn fetch_journeys(&self) -> Result<Vec<Journey>, Error>;
    async fn fetch_journeys_by_campaign(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Vec<Journey>, Error>;
    async fn fetch_journey_by_campaign_and_id(
        &self,
        campaign_id: CampaignId,
        journey_id: JourneyId,
    ) -> Result<Option<Journey>, Error>;
    async fn update_journey_status(
        &self,
        journey: Journey,
        status: JourneyStatus,
    ) -> Result<Journey, Error>;
    async fn clear(&self) -> Result<(), Error>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryJourneyStore {
    rows: Arc<RwLock<Vec<Journey>>>,
}

#[async_trait]
impl JourneyStore for MemoryJourneyStore {
    #[tracing::instrument(skip(self, journey))]
    async fn insert_journey(&self, journey: &Journey) -> Result<(), Error> {
        self.rows.write().await.push(journey.clone());

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_journeys(&self) -> Result<Vec<Journey>, Error> {
        let journeys = self.rows.read().await.clone();

        Ok(journeys)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_journeys_by_campaign(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Vec<Journey>, Error> {
        let journeys = self
            .rows
            .read()
            .await
            .iter()
            .filter(|journey| journey.campaign_id == campaign_id)
            .cloned()
            .collect();

        Ok(journeys)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_journey_by_campaign_and_id(
        &self,
        campaign_id: CampaignId,
        journey_id: JourneyId,
    ) -> Result<Option<Journey>, Error> {
        let journey = self
            .rows
            .read()
            .await
            .iter()
            .find(|journey| journey.campaign_id == campaign_id && journey.id == journey_id)
            .cloned();

        Ok(journey)
    }

    #[tracing::instrument(skip(self, journey))]
    async fn update_journey_status(
        &self,
        mut journey: Journey,
        status: JourneyStatus,
    ) -> Result<Journey, Error> {
        let now = Utc::now();
        let mut rows = self.rows.write().await;

        if let Some(row) = rows.iter_mut().find(|row| row.id == journey.id) {
            row.status = status;
            row.modified_at = now;
        }

        journey.status = status;
        journey.modified_at = now;

        Ok(journey)
    }

    #[tracing::instrument(skip(self))]
    async fn clear(&self) -> Result<(), Error> {
        self.rows.write().await.clear();

        Ok(())
    }
}
