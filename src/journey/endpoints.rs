use actix_web::web::{Data, Json, Path};
use actix_web::{get, post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campaign::{self, CampaignId};
use crate::database::Database;
use crate::error::Error;

use super::{manager, Journey, JourneyId, JourneyStatus, JourneyStep, JourneyStepId, JourneyStepKind};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateJourneyBody {
    pub name: String,
    pub steps: Vec<CreateJourneyStepBody>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateJourneyStepBody {
    pub position: i32,
    #[serde(flatten)]
    pub kind: JourneyStepKind,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JourneyBody {
    pub id: JourneyId,
    pub name: String,
    pub campaign_id: CampaignId,
    pub steps: Vec<JourneyStepBody>,
    pub status: JourneyStatus,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JourneyStepBody {
    pub id: JourneyStepId,
    pub position: i32,
    #[serde(flatten)]
    pub kind: JourneyStepKind,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StartJourneyBody {
    pub journey: JourneyBody,
    pub loaded_target_count: u64,
}

impl JourneyBody {
    pub fn render(journey: Journey) -> JourneyBody {
        JourneyBody {
            id: journey.id,
            name: journey.name,
            campaign_id: journey.campaign_id,
            steps: journey
                .steps
                .into_iter()
                .map(|step| JourneyStepBody {
                    id: step.id,
                    position: step.position,
                    kind: step.kind,
                })
                .collect(),
            status: journey.status,
            created_at: journey.created_at,
            modified_at: journey.modified_at,
        }
    }
}

#[post("/campaigns/{campaign_id}/journeys")]
#[tracing::instrument(skip(db))]
async fn create_journey_in_campaign(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
    body: Json<CreateJourneyBody>,
) -> Result<Json<JourneyBody>, Error> {
    let campaign_id = params.into_inner();
    let body = body.into_inner();

    let campaign = campaign::manager::get_campaign_by_id(&***db, campaign_id).await?;

    let steps = body
        .steps
        .into_iter()
        .map(|step| JourneyStep {
            id: JourneyStepId::new(),
            position: step.position,
            kind: step.kind,
        })
        .collect();

    let journey = manager::create_journey(&***db, &campaign, body.name, steps).await?;

    Ok(Json(JourneyBody::render(journey)))
}

#[get("/campaigns/{campaign_id}/journeys")]
#[tracing::instrument(skip(db))]
async fn get_journeys_in_campaign(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
) -> Result<Json<Vec<JourneyBody>>, Error> {
    let campaign_id = params.into_inner();

    let campaign = campaign::manager::get_campaign_by_id(&***db, campaign_id).await?;
    let journeys = manager::get_journeys(&***db, &campaign).await?;

    let body = journeys.into_iter().map(JourneyBody::render).collect();

    Ok(Json(body))
}

#[get("/campaigns/{campaign_id}/journeys/{journey_id}")]
#[tracing::instrument(skip(db))]
async fn get_journey_in_campaign_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<(CampaignId, JourneyId)>,
) -> Result<Json<JourneyBody>, Error> {
    let (campaign_id, journey_id) = params.into_inner();

    let campaign = campaign::manager::get_campaign_by_id(&***db, campaign_id).await?;
    let journey = manager::expect_journey_by_id(&***db, &campaign, journey_id).await?;

    Ok(Json(JourneyBody::render(journey)))
}

#[post("/campaigns/{campaign_id}/journeys/{journey_id}/start")]
#[tracing::instrument(skip(db))]
async fn start_journey_in_campaign(
    db: Data<Box<dyn Database>>,
    params: Path<(CampaignId, JourneyId)>,
) -> Result<Json<StartJourneyBody>, Error> {
    let (campaign_id, journey_id) = params.into_inner();

    let campaign = campaign::manager::get_campaign_by_id(&***db, campaign_id).await?;
    let journey = manager::expect_journey_by_id(&***db, &campaign, journey_id).await?;

    let (journey, loaded_target_count) = manager::start_journey(&***db, &campaign, journey).await?;

    Ok(Json(StartJourneyBody {
        journey: JourneyBody::render(journey),
        loaded_target_count,
    }))
}
