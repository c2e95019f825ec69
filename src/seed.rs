use chrono::Utc;

use crate::campaign::{Campaign, CampaignStatus, CampaignType};
use crate::database::Database;
use crate::error::Error;
use crate::journey::{Journey, JourneyStatus, JourneyStep, JourneyStepId, JourneyStepKind};
use crate::target::{Target, TargetId, TargetStatus};
use crate::template::{Template, TemplateType};

pub async fn seed(db: &dyn Database) -> Result<(), Error> {
    db.drop().await?;

    let campaign1_id = "CMP-16E77539-8873-4C8A-BCA3-2036010474AD".parse().unwrap();
    let campaign2_id = "CMP-5EA81D0A-9788-4B8A-82D9-1A0D636B53CE".parse().unwrap();
    let campaign3_id = "CMP-33957EB6-0EE7-487F-A087-E55C335BD63C".parse().unwrap();
    // referenced by a target below, but never inserted; the view renders it
    // as "Unknown"
    let retired_campaign_id = "CMP-DE3168FD-2730-47A2-BFE0-E53C79DD57A0".parse().unwrap();

    let email_template_id = "TPL-5C903E93-2524-4876-B4C8-816B98D0C77B".parse().unwrap();
    let reminder_template_id = "TPL-A41E8D5B-6A2F-4C52-9D05-38A86C2F4E61".parse().unwrap();
    let sms_template_id = "TPL-7B2F0C8E-95D1-44B7-8D4A-C61E0AF23954".parse().unwrap();

    let journey1_id = "JNY-0F8A2D6C-3B91-4E57-A2D8-5C4B19E7F036".parse().unwrap();
    let journey2_id = "JNY-9C5E1B74-D280-4F6A-B391-7E0D2A8C4F15".parse().unwrap();

    let now = Utc::now();

    let templates = vec![
        Template {
            id: email_template_id,
            name: "Spring Launch Announcement".to_string(),
            template_type: TemplateType::Email,
            subject: Some("Something new is blooming".to_string()),
            content: "Hi {{first_name}}, our spring line-up is live.".to_string(),
            preview_image: Some("/previews/spring-launch.png".to_string()),
        },
        Template {
            id: reminder_template_id,
            name: "Launch Reminder".to_string(),
            template_type: TemplateType::Email,
            subject: Some("Still thinking it over?".to_string()),
            content: "Hi {{first_name}}, your spring offer expires soon.".to_string(),
            preview_image: None,
        },
        Template {
            id: sms_template_id,
            name: "Winback Nudge".to_string(),
            template_type: TemplateType::Sms,
            subject: None,
            content: "We miss you, {{first_name}}! Reply YES for 20% off.".to_string(),
            preview_image: None,
        },
    ];

    for template in &templates {
        db.templates().insert_template(template).await?;
    }

    let campaigns = vec![
        Campaign {
            id: campaign1_id,
            name: "Spring Product Launch".to_string(),
            campaign_type: CampaignType::Email,
            reference_code: "SPRING-LAUNCH-2026".to_string(),
            status: CampaignStatus::Active,
            email_template_id: Some(email_template_id),
            sms_template_id: None,
            scheduled_at: None,
            target_count: 200,
            success_count: 150,
            fail_count: 30,
            bounce_count: 20,
            created_at: now,
            modified_at: now,
        },
        Campaign {
            id: campaign2_id,
            name: "Customer Winback".to_string(),
            campaign_type: CampaignType::Mixed,
            reference_code: "WINBACK-Q3".to_string(),
            status: CampaignStatus::Active,
            email_template_id: Some(reminder_template_id),
            sms_template_id: Some(sms_template_id),
            scheduled_at: None,
            target_count: 80,
            success_count: 48,
            fail_count: 12,
            bounce_count: 4,
            created_at: now,
            modified_at: now,
        },
        Campaign {
            id: campaign3_id,
            name: "Q4 Onboarding".to_string(),
            campaign_type: CampaignType::Sms,
            reference_code: "Q4-ONBOARD".to_string(),
            status: CampaignStatus::Scheduled,
            email_template_id: None,
            sms_template_id: Some(sms_template_id),
            scheduled_at: Some(now + chrono::Duration::days(30)),
            target_count: 0,
            success_count: 0,
            fail_count: 0,
            bounce_count: 0,
            created_at: now,
            modified_at: now,
        },
    ];

    for campaign in &campaigns {
        db.campaigns().insert_campaign(campaign).await?;
    }

    let targets = vec![
        target("Jane", "Doe", "jane.doe@example.com", Some("+15550100"), TargetStatus::Brushed, campaign1_id, now),
        target("John", "Smith", "john.smith@example.com", None, TargetStatus::Pending, campaign1_id, now),
        target("Maria", "Garcia", "maria.garcia@example.com", Some("+15550101"), TargetStatus::Loaded, campaign1_id, now),
        target("Wei", "Liu", "wei.liu@example.com", None, TargetStatus::Completed, campaign1_id, now),
        target("Amara", "Okafor", "amara.okafor@example.com", None, TargetStatus::Brushed, campaign2_id, now),
        target("Noah", "Johnson", "noah.johnson@example.com", Some("+15550102"), TargetStatus::Failed, campaign2_id, now),
        target("Sofia", "Rossi", "sofia.rossi@example.com", None, TargetStatus::Loaded, campaign2_id, now),
        target("Elena", "Petrova", "elena.petrova@example.com", None, TargetStatus::Pending, retired_campaign_id, now),
    ];

    for target in &targets {
        db.targets().insert_target(target).await?;
    }

    let journeys = vec![
        Journey {
            id: journey1_id,
            name: "Welcome Flow".to_string(),
            campaign_id: campaign1_id,
            steps: vec![
                step(0, JourneyStepKind::Email { template_id: email_template_id }),
                step(1, JourneyStepKind::Wait { wait_time: 24 }),
                step(2, JourneyStepKind::Condition { condition: "opened_email".to_string() }),
                step(3, JourneyStepKind::Email { template_id: reminder_template_id }),
            ],
            status: JourneyStatus::Draft,
            created_at: now,
            modified_at: now,
        },
        Journey {
            id: journey2_id,
            name: "Winback Nudge Sequence".to_string(),
            campaign_id: campaign2_id,
            steps: vec![
                step(0, JourneyStepKind::Sms { template_id: sms_template_id }),
                step(1, JourneyStepKind::Wait { wait_time: 48 }),
                step(2, JourneyStepKind::Email { template_id: reminder_template_id }),
            ],
            status: JourneyStatus::Active,
            created_at: now,
            modified_at: now,
        },
    ];

    for journey in &journeys {
        db.journeys().insert_journey(journey).await?;
    }

    Ok(())
}

fn target(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: Option<&str>,
    status: TargetStatus,
    campaign_id: crate::campaign::CampaignId,
    now: chrono::DateTime<Utc>,
) -> Target {
    Target {
        id: TargetId::new(),
        email: email.to_string(),
        phone: phone.map(str::to_string),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        status,
        campaign_id,
        metadata: None,
        created_at: now,
        modified_at: now,
    }
}

fn step(position: i32, kind: JourneyStepKind) -> JourneyStep {
    JourneyStep {
        id: JourneyStepId::new(),
        position,
        kind,
    }
}
