use actix_web::web::{Data, Json, Path, Query};
use actix_web::{get, post};
use chrono::{DateTime, Utc};
use futures::{stream, StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::campaign::CampaignId;
use crate::database::Database;
use crate::error::Error;

use super::filter::TargetFilter;
use super::selection::SelectionSet;
use super::{manager, Target, TargetId, TargetStatus};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateTargetBody {
    pub email: String,
    pub phone: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub campaign_id: CampaignId,
    pub metadata: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TargetBody {
    pub id: TargetId,
    pub email: String,
    pub phone: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub status: TargetStatus,
    pub campaign_id: CampaignId,
    pub campaign_name: String,
    pub metadata: Option<Map<String, Value>>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl TargetBody {
    pub async fn render(db: &dyn Database, target: Target) -> Result<TargetBody, Error> {
        // A dangling campaign reference is not an error here; the row
        // simply shows "Unknown".
        let campaign_name = db
            .campaigns()
            .fetch_campaign_by_id(target.campaign_id)
            .await?
            .map(|campaign| campaign.name)
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(TargetBody {
            id: target.id,
            email: target.email,
            phone: target.phone,
            first_name: target.first_name,
            last_name: target.last_name,
            status: target.status,
            campaign_id: target.campaign_id,
            campaign_name,
            metadata: target.metadata,
            created_at: target.created_at,
            modified_at: target.modified_at,
        })
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdateTargetStatusBody {
    pub target_ids: Vec<TargetId>,
    pub status: TargetStatus,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdatedCountBody {
    pub updated_count: u64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TargetSummaryBody {
    pub total: u64,
    pub pending: u64,
    pub brushed: u64,
    pub loaded: u64,
    pub completed: u64,
    pub failed: u64,
}

#[post("/targets")]
#[tracing::instrument(skip(db))]
async fn create_target(
    db: Data<Box<dyn Database>>,
    body: Json<CreateTargetBody>,
) -> Result<Json<TargetBody>, Error> {
    let body = body.into_inner();

    let target = manager::create_target(
        &***db,
        body.email,
        body.phone,
        body.first_name,
        body.last_name,
        body.campaign_id,
        body.metadata,
    )
    .await?;

    Ok(Json(TargetBody::render(&***db, target).await?))
}

#[get("/targets")]
#[tracing::instrument(skip(db))]
async fn get_targets(
    db: Data<Box<dyn Database>>,
    filter: Query<TargetFilter>,
) -> Result<Json<Vec<TargetBody>>, Error> {
    let targets = manager::get_targets(&***db, &filter).await?;

    let body = stream::iter(targets)
        .then(|target| TargetBody::render(&***db, target))
        .try_collect()
        .await?;

    Ok(Json(body))
}

#[get("/targets/summary")]
#[tracing::instrument(skip(db))]
async fn get_target_summary(
    db: Data<Box<dyn Database>>,
    filter: Query<TargetFilter>,
) -> Result<Json<TargetSummaryBody>, Error> {
    let summary = manager::get_status_summary(&***db, &filter).await?;

    Ok(Json(TargetSummaryBody {
        total: summary.total,
        pending: summary.pending,
        brushed: summary.brushed,
        loaded: summary.loaded,
        completed: summary.completed,
        failed: summary.failed,
    }))
}

#[get("/targets/{target_id}")]
#[tracing::instrument(skip(db))]
async fn get_target_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<TargetId>,
) -> Result<Json<TargetBody>, Error> {
    let target_id = params.into_inner();

    let target = manager::get_target_by_id(&***db, target_id).await?;

    Ok(Json(TargetBody::render(&***db, target).await?))
}

#[post("/targets/status")]
#[tracing::instrument(skip(db))]
async fn update_target_statuses(
    db: Data<Box<dyn Database>>,
    body: Json<UpdateTargetStatusBody>,
) -> Result<Json<UpdatedCountBody>, Error> {
    let body = body.into_inner();

    let mut selection = SelectionSet::from_ids(body.target_ids);
    let updated_count =
        manager::update_selected_statuses(&***db, &mut selection, body.status).await?;

    Ok(Json(UpdatedCountBody { updated_count }))
}

#[post("/targets/promote-brushed")]
#[tracing::instrument(skip(db))]
async fn promote_brushed_targets(
    db: Data<Box<dyn Database>>,
    filter: Query<TargetFilter>,
) -> Result<Json<UpdatedCountBody>, Error> {
    let updated_count = manager::promote_brushed_targets(&***db, &filter).await?;

    Ok(Json(UpdatedCountBody { updated_count }))
}
