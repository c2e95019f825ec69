use async_trait::async_trait;

use crate::campaign::db::{CampaignStore, MemoryCampaignStore};
use crate::error::Error;
use crate::journey::db::{JourneyStore, MemoryJourneyStore};
use crate::target::db::{MemoryTargetStore, TargetStore};
use crate::template::db::{MemoryTemplateStore, TemplateStore};

#[async_trait]
pub trait Database: Send + Sync {
    fn campaigns(&self) -> &dyn CampaignStore;
    fn targets(&self) -> &dyn TargetStore;
    fn journeys(&self) -> &dyn JourneyStore;
    fn templates(&self) -> &dyn TemplateStore;
    async fn drop(&self) -> Result<(), Error>;
}

/// The entity collections, held in memory for the lifetime of the process.
/// The store traits are the seam where a real backing service would go.
#[derive(Clone, Debug, Default)]
pub struct MemoryDatabase {
    campaigns: MemoryCampaignStore,
    targets: MemoryTargetStore,
    journeys: MemoryJourneyStore,
    templates: MemoryTemplateStore,
}

impl MemoryDatabase {
    pub fn new() -> MemoryDatabase {
        MemoryDatabase::default()
    }
}

#[async_trait]
impl Database for MemoryDatabase {
    fn campaigns(&self) -> &dyn CampaignStore {
        &self.campaigns
    }

    fn targets(&self) -> &dyn TargetStore {
        &self.targets
    }

    fn journeys(&self) -> &dyn JourneyStore {
        &self.journeys
    }

    fn templates(&self) -> &dyn TemplateStore {
        &self.templates
    }

    async fn drop(&self) -> Result<(), Error> {
        self.campaigns.clear().await?;
        self.targets.clear().await?;
        self.journeys.clear().await?;
        self.templates.clear().await?;
        Ok(())
    }
}
