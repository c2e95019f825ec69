use serde::{Deserialize, Serialize};

use crate::campaign::CampaignId;

use super::{Target, TargetStatus};

/// Criteria for the target list view. All criteria are combined with AND
/// semantics; an absent criterion (or an empty string, which is what the
/// view submits for a cleared input) matches every record.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TargetFilter {
    pub campaign_id: Option<CampaignId>,
    pub status: Option<TargetStatus>,
    pub search: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl TargetFilter {
    /// Whether a single target satisfies every criterion. The free-text
    /// search matches a case-insensitive substring of the first name, last
    /// name, or email; the name filter matches against "first last".
    pub fn matches(&self, target: &Target) -> bool {
        let matches_campaign = self
            .campaign_id
            .map_or(true, |campaign_id| target.campaign_id == campaign_id);
        let matches_status = self.status.map_or(true, |status| target.status == status);
        let matches_search = vacuous_or(&self.search, |term| {
            contains_ignore_case(&target.first_name, term)
                || contains_ignore_case(&target.last_name, term)
                || contains_ignore_case(&target.email, term)
        });
        let matches_email = vacuous_or(&self.email, |term| {
            contains_ignore_case(&target.email, term)
        });
        let matches_name = vacuous_or(&self.name, |term| {
            let full_name = format!("{} {}", target.first_name, target.last_name);
            contains_ignore_case(&full_name, term)
        });

        matches_campaign && matches_status && matches_search && matches_email && matches_name
    }

    /// Computes the visible subset, preserving the collection's insertion
    /// order. Recomputed in full on every criteria change; there is no
    /// incremental state.
    pub fn apply(&self, targets: Vec<Target>) -> Vec<Target> {
        targets
            .into_iter()
            .filter(|target| self.matches(target))
            .collect()
    }
}

fn vacuous_or<F>(criterion: &Option<String>, predicate: F) -> bool
where
    F: FnOnce(&str) -> bool,
{
    match criterion.as_deref() {
        None | Some("") => true,
        Some(term) => predicate(term),
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::target::TargetId;

    use super::*;

    fn target(
        first_name: &str,
        last_name: &str,
        email: &str,
        status: TargetStatus,
        campaign_id: CampaignId,
    ) -> Target {
        let now = Utc::now();
        Target {
            id: TargetId::new(),
            email: email.to_string(),
            phone: None,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            status,
            campaign_id,
            metadata: None,
            created_at: now,
            modified_at: now,
        }
    }

    fn sample() -> (Vec<Target>, CampaignId, CampaignId) {
        let campaign1 = CampaignId::new();
        let campaign2 = CampaignId::new();
        let targets = vec![
            target("Jane", "Doe", "jane.doe@example.com", TargetStatus::Brushed, campaign1),
            target("John", "Smith", "john.smith@example.com", TargetStatus::Pending, campaign1),
            target("Ana", "Jane", "ana@example.com", TargetStatus::Loaded, campaign2),
            target("Liu", "Wei", "liu.wei@mailjane.net", TargetStatus::Brushed, campaign2),
        ];
        (targets, campaign1, campaign2)
    }

    #[test]
    fn no_criteria_matches_everything() {
        let (targets, _, _) = sample();

        let filtered = TargetFilter::default().apply(targets.clone());

        assert_eq!(filtered, targets);
    }

    #[test]
    fn empty_strings_are_vacuous() {
        let (targets, _, _) = sample();
        let filter = TargetFilter {
            search: Some(String::new()),
            email: Some(String::new()),
            name: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(filter.apply(targets.clone()), targets);
    }

    #[test]
    fn empty_collection_yields_empty_result() {
        let filter = TargetFilter {
            search: Some("jane".to_string()),
            ..Default::default()
        };

        assert!(filter.apply(vec![]).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_names_and_email() {
        let (targets, _, _) = sample();
        let filter = TargetFilter {
            search: Some("JANE".to_string()),
            ..Default::default()
        };

        let filtered = filter.apply(targets);

        // first name "Jane", last name "Jane", and email "mailjane.net"
        // all match; "John Smith" has no "jane" substring anywhere.
        let names: Vec<_> = filtered.iter().map(|t| t.first_name.as_str()).collect();
        assert_eq!(names, vec!["Jane", "Ana", "Liu"]);
    }

    #[test]
    fn name_filter_spans_first_and_last_name() {
        let (targets, _, _) = sample();
        let filter = TargetFilter {
            name: Some("jane doe".to_string()),
            ..Default::default()
        };

        let filtered = filter.apply(targets);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].email, "jane.doe@example.com");
    }

    #[test]
    fn email_filter_is_independent_of_search() {
        let (targets, _, _) = sample();
        let filter = TargetFilter {
            search: Some("jane".to_string()),
            email: Some("example.com".to_string()),
            ..Default::default()
        };

        let filtered = filter.apply(targets);

        let emails: Vec<_> = filtered.iter().map(|t| t.email.as_str()).collect();
        assert_eq!(emails, vec!["jane.doe@example.com", "ana@example.com"]);
    }

    #[test]
    fn criteria_intersect_regardless_of_order() {
        let (targets, campaign1, _) = sample();
        let by_campaign = TargetFilter {
            campaign_id: Some(campaign1),
            ..Default::default()
        };
        let by_status = TargetFilter {
            status: Some(TargetStatus::Brushed),
            ..Default::default()
        };
        let combined = TargetFilter {
            campaign_id: Some(campaign1),
            status: Some(TargetStatus::Brushed),
            ..Default::default()
        };

        let one_way = by_status.apply(by_campaign.apply(targets.clone()));
        let other_way = by_campaign.apply(by_status.apply(targets.clone()));
        let at_once = combined.apply(targets);

        assert_eq!(one_way, at_once);
        assert_eq!(other_way, at_once);
        assert_eq!(at_once.len(), 1);
        assert_eq!(at_once[0].first_name, "Jane");
    }

    #[test]
    fn filtering_is_pure_and_order_preserving() {
        let (targets, _, campaign2) = sample();
        let filter = TargetFilter {
            campaign_id: Some(campaign2),
            ..Default::default()
        };

        let first = filter.apply(targets.clone());
        let second = filter.apply(targets.clone());

        assert_eq!(first, second);
        let ids: Vec<_> = first.iter().map(|t| t.id).collect();
        let expected: Vec<_> = targets
            .iter()
            .filter(|t| t.campaign_id == campaign2)
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, expected);
    }
}
