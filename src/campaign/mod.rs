use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::template::TemplateId;
use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type CampaignId = TypedId<Campaign>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub campaign_type: CampaignType,
    pub reference_code: String,
    pub status: CampaignStatus,
    pub email_template_id: Option<TemplateId>,
    pub sms_template_id: Option<TemplateId>,
    pub scheduled_at: Option<DateTime<Utc>>,
    // Outcome counters are carried as reported, never recomputed from the
    // target population, so they can drift from it.
    pub target_count: u64,
    pub success_count: u64,
    pub fail_count: u64,
    pub bounce_count: u64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl TypedIdMarker for Campaign {
    fn tag() -> &'static str {
        "CMP"
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    Email,
    Sms,
    Mixed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Scheduled,
    Active,
    Completed,
    Paused,
}
