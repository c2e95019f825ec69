use chrono::Utc;

use crate::campaign::Campaign;
use crate::database::Database;
use crate::error::Error;
use crate::target::TargetStatus;

use super::{Journey, JourneyId, JourneyStatus, JourneyStep};

#[tracing::instrument(skip(db))]
pub async fn create_journey(
    db: &dyn Database,
    campaign: &Campaign,
    name: String,
    mut steps: Vec<JourneyStep>,
) -> Result<Journey, Error> {
    if steps.is_empty() {
        return Err(Error::JourneyHasNoSteps {
            campaign_id: campaign.id,
        });
    }

    steps.sort_by_key(|step| step.position);

    let now = Utc::now();
    let journey = Journey {
        id: JourneyId::new(),
        name,
        campaign_id: campaign.id,
        steps,
        status: JourneyStatus::Draft,
        created_at: now,
        modified_at: now,
    };

    db.journeys().insert_journey(&journey).await?;

    Ok(journey)
}

#[tracing::instrument(skip(db))]
pub async fn get_journeys(db: &dyn Database, campaign: &Campaign) -> Result<Vec<Journey>, Error> {
    let journeys = db.journeys().fetch_journeys_by_campaign(campaign.id).await?;

    Ok(journeys)
}

#[tracing::instrument(skip(db))]
pub async fn expect_journey_by_id(
    db: &dyn Database,
    campaign: &Campaign,
    journey_id: JourneyId,
) -> Result<Journey, Error> {
    let journey = db
        .journeys()
        .fetch_journey_by_campaign_and_id(campaign.id, journey_id)
        .await?
        .ok_or(Error::JourneyDoesNotExistInCampaign {
            campaign_id: campaign.id,
            journey_id,
        })?;

    Ok(journey)
}

/// Starts a draft journey for every loaded target in its campaign. The
/// journey flips to active; the returned count is how many targets enter
/// the flow.
#[tracing::instrument(skip(db))]
pub async fn start_journey(
    db: &dyn Database,
    campaign: &Campaign,
    journey: Journey,
) -> Result<(Journey, u64), Error> {
    if journey.status != JourneyStatus::Draft {
        return Err(Error::JourneyIsNotDraft {
            journey_id: journey.id,
            status: journey.status,
        });
    }

    let targets = db.targets().fetch_targets_by_campaign(campaign.id).await?;
    let loaded_count = targets
        .iter()
        .filter(|target| target.status == TargetStatus::Loaded)
        .count() as u64;

    if loaded_count == 0 {
        return Err(Error::NoLoadedTargetsInCampaign {
            campaign_id: campaign.id,
        });
    }

    let journey = db
        .journeys()
        .update_journey_status(journey, JourneyStatus::Active)
        .await?;

    Ok((journey, loaded_count))
}
