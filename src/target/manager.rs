use chrono::Utc;
use serde_json::{Map, Value};

use crate::campaign::CampaignId;
use crate::database::Database;
use crate::error::Error;

use super::filter::TargetFilter;
use super::selection::SelectionSet;
use super::{Target, TargetId, TargetStatus};

#[tracing::instrument(skip(db))]
pub async fn create_target(
    db: &dyn Database,
    email: String,
    phone: Option<String>,
    first_name: String,
    last_name: String,
    campaign_id: CampaignId,
    metadata: Option<Map<String, Value>>,
) -> Result<Target, Error> {
    let now = Utc::now();
    let target = Target {
        id: TargetId::new(),
        email,
        phone,
        first_name,
        last_name,
        status: TargetStatus::Pending,
        campaign_id,
        metadata,
        created_at: now,
        modified_at: now,
    };

    db.targets().insert_target(&target).await?;

    Ok(target)
}

#[tracing::instrument(skip(db))]
pub async fn get_targets(db: &dyn Database, filter: &TargetFilter) -> Result<Vec<Target>, Error> {
    let targets = db.targets().fetch_targets().await?;

    Ok(filter.apply(targets))
}

#[tracing::instrument(skip(db))]
pub async fn get_target_by_id(db: &dyn Database, target_id: TargetId) -> Result<Target, Error> {
    let target = db
        .targets()
        .fetch_target_by_id(target_id)
        .await?
        .ok_or(Error::TargetDoesNotExist { target_id })?;

    Ok(target)
}

/// Applies one new status to every selected target. An empty selection is
/// rejected before anything is touched; on success the selection is
/// cleared and the number of updated records returned.
#[tracing::instrument(skip(db, selection))]
pub async fn update_selected_statuses(
    db: &dyn Database,
    selection: &mut SelectionSet,
    status: TargetStatus,
) -> Result<u64, Error> {
    if selection.is_empty() {
        return Err(Error::NoTargetsSelected);
    }

    let updated = db
        .targets()
        .update_target_statuses(selection.ids(), status)
        .await?;

    selection.clear();

    Ok(updated)
}

/// The "move brushed to loaded" shortcut: scans the currently filtered
/// view (not the whole collection) for brushed targets and loads them.
/// Finding none is a no-op warning, distinct from an empty selection.
#[tracing::instrument(skip(db))]
pub async fn promote_brushed_targets(
    db: &dyn Database,
    filter: &TargetFilter,
) -> Result<u64, Error> {
    let visible = get_targets(db, filter).await?;

    let brushed_ids: Vec<TargetId> = visible
        .iter()
        .filter(|target| target.status == TargetStatus::Brushed)
        .map(|target| target.id)
        .collect();

    if brushed_ids.is_empty() {
        return Err(Error::NoBrushedTargetsInView);
    }

    let updated = db
        .targets()
        .update_target_statuses(&brushed_ids, TargetStatus::Loaded)
        .await?;

    Ok(updated)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: u64,
    pub pending: u64,
    pub brushed: u64,
    pub loaded: u64,
    pub completed: u64,
    pub failed: u64,
}

/// Per-status counts over the filtered view, for the badge row above the
/// target table.
#[tracing::instrument(skip(db))]
pub async fn get_status_summary(
    db: &dyn Database,
    filter: &TargetFilter,
) -> Result<StatusSummary, Error> {
    let visible = get_targets(db, filter).await?;

    let mut summary = StatusSummary::default();
    for target in &visible {
        summary.total += 1;
        match target.status {
            TargetStatus::Pending => summary.pending += 1,
            TargetStatus::Brushed => summary.brushed += 1,
            TargetStatus::Loaded => summary.loaded += 1,
            TargetStatus::Completed => summary.completed += 1,
            TargetStatus::Failed => summary.failed += 1,
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryDatabase;

    async fn seed_target(
        db: &MemoryDatabase,
        name: &str,
        status: TargetStatus,
        campaign_id: CampaignId,
    ) -> Target {
        let now = Utc::now();
        let target = Target {
            id: TargetId::new(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            first_name: name.to_string(),
            last_name: "Example".to_string(),
            status,
            campaign_id,
            metadata: None,
            created_at: now,
            modified_at: now,
        };
        db.targets().insert_target(&target).await.unwrap();
        target
    }

    #[tokio::test]
    async fn bulk_update_touches_only_selected_targets() {
        let db = MemoryDatabase::new();
        let campaign_id = CampaignId::new();
        let a = seed_target(&db, "Ann", TargetStatus::Pending, campaign_id).await;
        let b = seed_target(&db, "Ben", TargetStatus::Pending, campaign_id).await;
        let c = seed_target(&db, "Cam", TargetStatus::Brushed, campaign_id).await;

        let mut selection = SelectionSet::from_ids(vec![a.id, b.id]);
        let updated = update_selected_statuses(&db, &mut selection, TargetStatus::Loaded)
            .await
            .unwrap();

        assert_eq!(updated, 2);
        assert!(selection.is_empty(), "selection was not cleared");

        let targets = db.targets().fetch_targets().await.unwrap();
        assert_eq!(targets[0].status, TargetStatus::Loaded);
        assert_eq!(targets[1].status, TargetStatus::Loaded);
        assert_eq!(targets[2].status, TargetStatus::Brushed);
        assert_eq!(targets[2].id, c.id);
    }

    #[tokio::test]
    async fn bulk_update_overwrites_status_only() {
        let db = MemoryDatabase::new();
        let campaign_id = CampaignId::new();
        let a = seed_target(&db, "Ann", TargetStatus::Completed, campaign_id).await;

        let mut selection = SelectionSet::from_ids(vec![a.id]);
        update_selected_statuses(&db, &mut selection, TargetStatus::Pending)
            .await
            .unwrap();

        let stored = db.targets().fetch_target_by_id(a.id).await.unwrap().unwrap();
        assert_eq!(stored.status, TargetStatus::Pending);
        assert_eq!(
            Target {
                status: TargetStatus::Completed,
                ..stored
            },
            a,
        );
    }

    #[tokio::test]
    async fn empty_selection_is_rejected_without_mutation() {
        let db = MemoryDatabase::new();
        let campaign_id = CampaignId::new();
        let a = seed_target(&db, "Ann", TargetStatus::Pending, campaign_id).await;

        let mut selection = SelectionSet::new();
        let result = update_selected_statuses(&db, &mut selection, TargetStatus::Loaded).await;

        assert_eq!(result.unwrap_err(), Error::NoTargetsSelected);
        let stored = db.targets().fetch_target_by_id(a.id).await.unwrap().unwrap();
        assert_eq!(stored.status, TargetStatus::Pending);
    }

    #[tokio::test]
    async fn promote_brushed_respects_the_filtered_view() {
        let db = MemoryDatabase::new();
        let campaign1 = CampaignId::new();
        let campaign2 = CampaignId::new();
        let a = seed_target(&db, "Ann", TargetStatus::Brushed, campaign1).await;
        let b = seed_target(&db, "Ben", TargetStatus::Pending, campaign1).await;
        let c = seed_target(&db, "Cam", TargetStatus::Brushed, campaign2).await;

        let filter = TargetFilter {
            campaign_id: Some(campaign1),
            ..Default::default()
        };
        let updated = promote_brushed_targets(&db, &filter).await.unwrap();

        assert_eq!(updated, 1);
        let targets = db.targets().fetch_targets().await.unwrap();
        assert_eq!(targets[0].id, a.id);
        assert_eq!(targets[0].status, TargetStatus::Loaded);
        assert_eq!(targets[1].id, b.id);
        assert_eq!(targets[1].status, TargetStatus::Pending);
        assert_eq!(targets[2].id, c.id);
        assert_eq!(targets[2].status, TargetStatus::Brushed);
    }

    #[tokio::test]
    async fn promote_brushed_with_no_matches_is_a_distinct_noop() {
        let db = MemoryDatabase::new();
        let campaign_id = CampaignId::new();
        seed_target(&db, "Ann", TargetStatus::Loaded, campaign_id).await;

        let result = promote_brushed_targets(&db, &TargetFilter::default()).await;

        assert_eq!(result.unwrap_err(), Error::NoBrushedTargetsInView);
        let targets = db.targets().fetch_targets().await.unwrap();
        assert_eq!(targets[0].status, TargetStatus::Loaded);
    }

    #[tokio::test]
    async fn status_summary_counts_the_filtered_view() {
        let db = MemoryDatabase::new();
        let campaign1 = CampaignId::new();
        let campaign2 = CampaignId::new();
        seed_target(&db, "Ann", TargetStatus::Brushed, campaign1).await;
        seed_target(&db, "Ben", TargetStatus::Pending, campaign1).await;
        seed_target(&db, "Cam", TargetStatus::Brushed, campaign2).await;

        let filter = TargetFilter {
            campaign_id: Some(campaign1),
            ..Default::default()
        };
        let summary = get_status_summary(&db, &filter).await.unwrap();

        assert_eq!(
            summary,
            StatusSummary {
                total: 2,
                pending: 1,
                brushed: 1,
                ..Default::default()
            }
        );
    }
}
