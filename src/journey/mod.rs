use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campaign::CampaignId;
use crate::template::TemplateId;
use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type JourneyId = TypedId<Journey>;
pub type JourneyStepId = TypedId<JourneyStep>;

/// An ordered workflow of send/wait/branch steps attached to a campaign.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Journey {
    pub id: JourneyId,
    pub name: String,
    pub campaign_id: CampaignId,
    // Kept sorted by position from creation onwards.
    pub steps: Vec<JourneyStep>,
    pub status: JourneyStatus,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl TypedIdMarker for Journey {
    fn tag() -> &'static str {
        "JNY"
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JourneyStatus {
    Draft,
    Active,
    Completed,
    Paused,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JourneyStep {
    pub id: JourneyStepId,
    pub position: i32,
    #[serde(flatten)]
    pub kind: JourneyStepKind,
}

impl TypedIdMarker for JourneyStep {
    fn tag() -> &'static str {
        "STP"
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JourneyStepKind {
    Email {
        template_id: TemplateId,
    },
    Sms {
        template_id: TemplateId,
    },
    Wait {
        // in hours
        wait_time: u32,
    },
    Condition {
        condition: String,
    },
}
