use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::database::Database;
use crate::error::Error;
use crate::template::{TemplateId, TemplateType};

use super::{Campaign, CampaignId, CampaignStatus, CampaignType};

#[tracing::instrument(skip(db))]
pub async fn create_campaign(
    db: &dyn Database,
    name: String,
    campaign_type: CampaignType,
    reference_code: Option<String>,
    email_template_id: Option<TemplateId>,
    sms_template_id: Option<TemplateId>,
    scheduled_at: Option<DateTime<Utc>>,
) -> Result<Campaign, Error> {
    if let Some(template_id) = email_template_id {
        assert_template_slot(db, template_id, TemplateType::Email).await?;
    }
    if let Some(template_id) = sms_template_id {
        assert_template_slot(db, template_id, TemplateType::Sms).await?;
    }

    let status = if scheduled_at.is_some() {
        CampaignStatus::Scheduled
    } else {
        CampaignStatus::Draft
    };

    let now = Utc::now();
    let campaign = Campaign {
        id: CampaignId::new(),
        name,
        campaign_type,
        reference_code: reference_code.unwrap_or_else(generate_reference_code),
        status,
        email_template_id,
        sms_template_id,
        scheduled_at,
        target_count: 0,
        success_count: 0,
        fail_count: 0,
        bounce_count: 0,
        created_at: now,
        modified_at: now,
    };

    db.campaigns().insert_campaign(&campaign).await?;

    Ok(campaign)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaigns(db: &dyn Database) -> Result<Vec<Campaign>, Error> {
    let campaigns = db.campaigns().fetch_campaigns().await?;

    Ok(campaigns)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaign_by_id(
    db: &dyn Database,
    campaign_id: CampaignId,
) -> Result<Campaign, Error> {
    let campaign = db
        .campaigns()
        .fetch_campaign_by_id(campaign_id)
        .await?
        .ok_or(Error::CampaignDoesNotExist { campaign_id })?;

    Ok(campaign)
}

async fn assert_template_slot(
    db: &dyn Database,
    template_id: TemplateId,
    expected_type: TemplateType,
) -> Result<(), Error> {
    let template = db
        .templates()
        .fetch_template_by_id(template_id)
        .await?
        .ok_or(Error::TemplateDoesNotExist { template_id })?;

    if template.template_type != expected_type {
        return Err(Error::TemplateTypeMismatch {
            template_id,
            expected_type,
            actual_type: template.template_type,
        });
    }

    Ok(())
}

// Reference codes are unique by convention only; collisions are on the
// operator who hands them out.
fn generate_reference_code() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();

    format!("REF-{}", suffix.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryDatabase;
    use crate::template::{Template, TemplateId};

    async fn seed_template(db: &MemoryDatabase, template_type: TemplateType) -> TemplateId {
        let template = Template {
            id: TemplateId::new(),
            name: "Welcome".to_string(),
            template_type,
            subject: Some("Welcome!".to_string()),
            content: "Hello {{first_name}}".to_string(),
            preview_image: None,
        };
        db.templates().insert_template(&template).await.unwrap();
        template.id
    }

    #[tokio::test]
    async fn create_campaign_starts_as_draft_with_generated_reference_code() {
        let db = MemoryDatabase::new();

        let campaign = create_campaign(
            &db,
            "Spring Launch".into(),
            CampaignType::Email,
            None,
            None,
            None,
            None,
        )
        .await
        .unwrap();

        assert_eq!(campaign.status, CampaignStatus::Draft);
        assert!(campaign.reference_code.starts_with("REF-"));
        assert_eq!(campaign.target_count, 0);
        assert_eq!(campaign.created_at, campaign.modified_at);

        let stored = db
            .campaigns()
            .fetch_campaign_by_id(campaign.id)
            .await
            .unwrap();
        assert!(stored.is_some(), "campaign was not stored");
    }

    #[tokio::test]
    async fn create_campaign_with_schedule_is_scheduled() {
        let db = MemoryDatabase::new();

        let campaign = create_campaign(
            &db,
            "Spring Launch".into(),
            CampaignType::Email,
            Some("SPRING-2026".into()),
            None,
            None,
            Some(Utc::now()),
        )
        .await
        .unwrap();

        assert_eq!(campaign.status, CampaignStatus::Scheduled);
        assert_eq!(campaign.reference_code, "SPRING-2026");
    }

    #[tokio::test]
    async fn create_campaign_rejects_template_in_wrong_slot() {
        let db = MemoryDatabase::new();
        let template_id = seed_template(&db, TemplateType::Sms).await;

        let result = create_campaign(
            &db,
            "Spring Launch".into(),
            CampaignType::Email,
            None,
            Some(template_id),
            None,
            None,
        )
        .await;

        assert_eq!(
            result.unwrap_err(),
            Error::TemplateTypeMismatch {
                template_id,
                expected_type: TemplateType::Email,
                actual_type: TemplateType::Sms,
            }
        );
    }

    #[tokio::test]
    async fn create_campaign_rejects_unknown_template() {
        let db = MemoryDatabase::new();
        let template_id = TemplateId::new();

        let result = create_campaign(
            &db,
            "Spring Launch".into(),
            CampaignType::Sms,
            None,
            None,
            Some(template_id),
            None,
        )
        .await;

        assert_eq!(
            result.unwrap_err(),
            Error::TemplateDoesNotExist { template_id }
        );
    }

    #[tokio::test]
    async fn get_campaign_by_id_returns_error_if_doesnt_exist() {
        let db = MemoryDatabase::new();
        let campaign_id = CampaignId::new();

        let result = get_campaign_by_id(&db, campaign_id).await;

        assert_eq!(result.unwrap_err(), Error::CampaignDoesNotExist { campaign_id });
    }
}
