use actix_web::web::{Data, Json, Path};
use actix_web::{get, post};
use chrono::{DateTime, Utc};
use futures::{stream, StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;
use crate::journey::JourneyBody;
use crate::template::TemplateId;

use super::{manager, Campaign, CampaignId, CampaignStatus, CampaignType};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateCampaignBody {
    pub name: String,
    pub campaign_type: CampaignType,
    pub reference_code: Option<String>,
    pub email_template_id: Option<TemplateId>,
    pub sms_template_id: Option<TemplateId>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CampaignBody {
    pub id: CampaignId,
    pub name: String,
    pub campaign_type: CampaignType,
    pub reference_code: String,
    pub status: CampaignStatus,
    pub email_template_id: Option<TemplateId>,
    pub sms_template_id: Option<TemplateId>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub target_count: u64,
    pub success_count: u64,
    pub fail_count: u64,
    pub bounce_count: u64,
    pub journeys: Vec<JourneyBody>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl CampaignBody {
    pub async fn render(db: &dyn Database, campaign: Campaign) -> Result<CampaignBody, Error> {
        let journeys = db
            .journeys()
            .fetch_journeys_by_campaign(campaign.id)
            .await?;

        Ok(CampaignBody {
            id: campaign.id,
            name: campaign.name,
            campaign_type: campaign.campaign_type,
            reference_code: campaign.reference_code,
            status: campaign.status,
            email_template_id: campaign.email_template_id,
            sms_template_id: campaign.sms_template_id,
            scheduled_at: campaign.scheduled_at,
            target_count: campaign.target_count,
            success_count: campaign.success_count,
            fail_count: campaign.fail_count,
            bounce_count: campaign.bounce_count,
            journeys: journeys.into_iter().map(JourneyBody::render).collect(),
            created_at: campaign.created_at,
            modified_at: campaign.modified_at,
        })
    }
}

#[post("/campaigns")]
#[tracing::instrument(skip(db))]
async fn create_campaign(
    db: Data<Box<dyn Database>>,
    body: Json<CreateCampaignBody>,
) -> Result<Json<CampaignBody>, Error> {
    let body = body.into_inner();

    let campaign = manager::create_campaign(
        &***db,
        body.name,
        body.campaign_type,
        body.reference_code,
        body.email_template_id,
        body.sms_template_id,
        body.scheduled_at,
    )
    .await?;

    Ok(Json(CampaignBody::render(&***db, campaign).await?))
}

#[get("/campaigns")]
#[tracing::instrument(skip(db))]
async fn get_campaigns(db: Data<Box<dyn Database>>) -> Result<Json<Vec<CampaignBody>>, Error> {
    let campaigns = manager::get_campaigns(&***db).await?;

    let body = stream::iter(campaigns)
        .then(|campaign| CampaignBody::render(&***db, campaign))
        .try_collect()
        .await?;

    Ok(Json(body))
}

#[get("/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db))]
async fn get_campaign_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
) -> Result<Json<CampaignBody>, Error> {
    let campaign_id = params.into_inner();

    let campaign = manager::get_campaign_by_id(&***db, campaign_id).await?;

    Ok(Json(CampaignBody::render(&***db, campaign).await?))
}
