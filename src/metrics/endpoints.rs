use actix_web::get;
use actix_web::web::{Data, Json};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;

use super::{manager, CampaignMetrics, Metrics};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MetricsBody {
    pub total_campaigns: u64,
    pub active_campaigns: u64,
    pub total_targets: u64,
    pub success_rate: f64,
    pub bounce_count: u64,
    pub fail_count: u64,
    pub campaigns: Vec<CampaignMetricsBody>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CampaignMetricsBody {
    pub name: String,
    pub targets: u64,
    pub success_rate: f64,
}

impl MetricsBody {
    pub fn render(metrics: Metrics) -> MetricsBody {
        MetricsBody {
            total_campaigns: metrics.total_campaigns,
            active_campaigns: metrics.active_campaigns,
            total_targets: metrics.total_targets,
            success_rate: metrics.success_rate,
            bounce_count: metrics.bounce_count,
            fail_count: metrics.fail_count,
            campaigns: metrics
                .campaigns
                .into_iter()
                .map(CampaignMetricsBody::render)
                .collect(),
        }
    }
}

impl CampaignMetricsBody {
    fn render(metrics: CampaignMetrics) -> CampaignMetricsBody {
        CampaignMetricsBody {
            name: metrics.name,
            targets: metrics.targets,
            success_rate: metrics.success_rate,
        }
    }
}

#[get("/metrics")]
#[tracing::instrument(skip(db))]
async fn get_metrics(db: Data<Box<dyn Database>>) -> Result<Json<MetricsBody>, Error> {
    let metrics = manager::get_metrics(&***db).await?;

    Ok(Json(MetricsBody::render(metrics)))
}
