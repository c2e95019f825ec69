use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Error;

use super::{Template, TemplateId};

#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn insert_template(&self, template: &Template) -> Result<(), Error>;
    async fn fetch_templates(&self) -> Result<Vec<Template>, Error>;
    async fn fetch_template_by_id(
        &self,
        template_id: TemplateId,
    ) -> Result<Option<Template>, Error>;
    async fn clear(&self) -> Result<(), Error>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryTemplateStore {
    rows: Arc<RwLock<Vec<Template>>>,
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    #[tracing::instrument(skip(self, template))]
    async fn insert_template(&self, template: &Template) -> Result<(), Error> {
        self.rows.write().await.push(template.clone());

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_templates(&self) -> Result<Vec<Template>, Error> {
        let templates = self.rows.read().await.clone();

        Ok(templates)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_template_by_id(
        &self,
        template_id: TemplateId,
    ) -> Result<Option<Template>, Error> {
        let template = self
            .rows
            .read()
            .await
            .iter()
            .find(|template| template.id == template_id)
            .cloned();

        Ok(template)
    }

    #[tracing::instrument(skip(self))]
    async fn clear(&self) -> Result<(), Error> {
        self.rows.write().await.clear();

        Ok(())
    }
}
