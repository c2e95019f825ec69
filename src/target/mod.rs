use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::campaign::CampaignId;
use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod filter;
pub mod manager;
pub mod selection;
pub use endpoints::*;

pub type TargetId = TypedId<Target>;

/// A recipient record eligible to receive campaign communications.
///
/// The campaign reference is deliberately unchecked: a target whose
/// campaign has been removed keeps its id and renders as "Unknown".
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Target {
    pub id: TargetId,
    pub email: String,
    pub phone: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub status: TargetStatus,
    pub campaign_id: CampaignId,
    pub metadata: Option<Map<String, Value>>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl TypedIdMarker for Target {
    fn tag() -> &'static str {
        "TGT"
    }
}

/// Pipeline stage of a target. "Brushed" sits between pending and loaded
/// and marks the data-cleaning pass. No transition graph is enforced; the
/// bulk update may set any status from any other.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetStatus {
    Pending,
    Brushed,
    Loaded,
    Completed,
    Failed,
}
