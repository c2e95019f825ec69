use serde::{Deserialize, Serialize};

pub mod endpoints;
pub mod manager;
pub use endpoints::*;

/// Aggregate snapshot for the dashboard, derived from the stored campaign
/// counters on every request. The counters themselves are never
/// reconciled against the target population.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Metrics {
    pub total_campaigns: u64,
    pub active_campaigns: u64,
    pub total_targets: u64,
    pub success_rate: f64,
    pub bounce_count: u64,
    pub fail_count: u64,
    pub campaigns: Vec<CampaignMetrics>,
}

/// One bar of the per-campaign breakdown chart.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CampaignMetrics {
    pub name: String,
    pub targets: u64,
    pub success_rate: f64,
}
