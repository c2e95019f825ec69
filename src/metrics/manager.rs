use crate::campaign::CampaignStatus;
use crate::database::Database;
use crate::error::Error;

use super::{CampaignMetrics, Metrics};

#[tracing::instrument(skip(db))]
pub async fn get_metrics(db: &dyn Database) -> Result<Metrics, Error> {
    let campaigns = db.campaigns().fetch_campaigns().await?;

    let total_campaigns = campaigns.len() as u64;
    let active_campaigns = campaigns
        .iter()
        .filter(|campaign| campaign.status == CampaignStatus::Active)
        .count() as u64;

    let total_targets: u64 = campaigns.iter().map(|c| c.target_count).sum();
    let total_successes: u64 = campaigns.iter().map(|c| c.success_count).sum();
    let bounce_count: u64 = campaigns.iter().map(|c| c.bounce_count).sum();
    let fail_count: u64 = campaigns.iter().map(|c| c.fail_count).sum();

    let breakdown = campaigns
        .into_iter()
        .map(|campaign| CampaignMetrics {
            name: campaign.name,
            targets: campaign.target_count,
            success_rate: rate(campaign.success_count, campaign.target_count),
        })
        .collect();

    Ok(Metrics {
        total_campaigns,
        active_campaigns,
        total_targets,
        success_rate: rate(total_successes, total_targets),
        bounce_count,
        fail_count,
        campaigns: breakdown,
    })
}

fn rate(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::campaign::{Campaign, CampaignId, CampaignType};
    use crate::database::MemoryDatabase;

    async fn seed_campaign(
        db: &MemoryDatabase,
        name: &str,
        status: CampaignStatus,
        target_count: u64,
        success_count: u64,
        fail_count: u64,
        bounce_count: u64,
    ) {
        let now = Utc::now();
        let campaign = Campaign {
            id: CampaignId::new(),
            name: name.to_string(),
            campaign_type: CampaignType::Email,
            reference_code: format!("REF-{}", name.to_uppercase()),
            status,
            email_template_id: None,
            sms_template_id: None,
            scheduled_at: None,
            target_count,
            success_count,
            fail_count,
            bounce_count,
            created_at: now,
            modified_at: now,
        };
        db.campaigns().insert_campaign(&campaign).await.unwrap();
    }

    #[tokio::test]
    async fn metrics_aggregate_stored_counters() {
        let db = MemoryDatabase::new();
        seed_campaign(&db, "Spring", CampaignStatus::Active, 200, 150, 30, 20).await;
        seed_campaign(&db, "Winback", CampaignStatus::Paused, 50, 25, 5, 0).await;

        let metrics = get_metrics(&db).await.unwrap();

        assert_eq!(metrics.total_campaigns, 2);
        assert_eq!(metrics.active_campaigns, 1);
        assert_eq!(metrics.total_targets, 250);
        assert_eq!(metrics.success_rate, 70.0);
        assert_eq!(metrics.bounce_count, 20);
        assert_eq!(metrics.fail_count, 35);

        assert_eq!(metrics.campaigns.len(), 2);
        assert_eq!(metrics.campaigns[0].name, "Spring");
        assert_eq!(metrics.campaigns[0].targets, 200);
        assert_eq!(metrics.campaigns[0].success_rate, 75.0);
        assert_eq!(metrics.campaigns[1].success_rate, 50.0);
    }

    #[tokio::test]
    async fn metrics_with_no_campaigns_are_all_zero() {
        let db = MemoryDatabase::new();

        let metrics = get_metrics(&db).await.unwrap();

        assert_eq!(metrics.total_campaigns, 0);
        assert_eq!(metrics.total_targets, 0);
        assert_eq!(metrics.success_rate, 0.0);
        assert!(metrics.campaigns.is_empty());
    }
}
