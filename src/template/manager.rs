use crate::database::Database;
use crate::error::Error;

use super::{Template, TemplateId, TemplateType};

#[tracing::instrument(skip(db))]
pub async fn create_template(
    db: &dyn Database,
    name: String,
    template_type: TemplateType,
    subject: Option<String>,
    content: String,
    preview_image: Option<String>,
) -> Result<Template, Error> {
    let template = Template {
        id: TemplateId::new(),
        name,
        template_type,
        subject,
        content,
        preview_image,
    };

    db.templates().insert_template(&template).await?;

    Ok(template)
}

#[tracing::instrument(skip(db))]
pub async fn get_templates(db: &dyn Database) -> Result<Vec<Template>, Error> {
    let templates = db.templates().fetch_templates().await?;

    Ok(templates)
}

#[tracing::instrument(skip(db))]
pub async fn get_template_by_id(
    db: &dyn Database,
    template_id: TemplateId,
) -> Result<Option<Template>, Error> {
    let template = db.templates().fetch_template_by_id(template_id).await?;

    Ok(template)
}
