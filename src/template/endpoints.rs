use actix_web::web::{Data, Json, Path};
use actix_web::{get, post};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;

use super::{manager, Template, TemplateId, TemplateType};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateTemplateBody {
    pub name: String,
    pub template_type: TemplateType,
    pub subject: Option<String>,
    pub content: String,
    pub preview_image: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TemplateBody {
    pub id: TemplateId,
    pub name: String,
    pub template_type: TemplateType,
    pub subject: Option<String>,
    pub content: String,
    pub preview_image: Option<String>,
}

impl TemplateBody {
    pub fn render(template: Template) -> TemplateBody {
        TemplateBody {
            id: template.id,
            name: template.name,
            template_type: template.template_type,
            subject: template.subject,
            content: template.content,
            preview_image: template.preview_image,
        }
    }
}

#[post("/templates")]
#[tracing::instrument(skip(db))]
async fn create_template(
    db: Data<Box<dyn Database>>,
    body: Json<CreateTemplateBody>,
) -> Result<Json<TemplateBody>, Error> {
    let body = body.into_inner();

    let template = manager::create_template(
        &***db,
        body.name,
        body.template_type,
        body.subject,
        body.content,
        body.preview_image,
    )
    .await?;

    Ok(Json(TemplateBody::render(template)))
}

#[get("/templates")]
#[tracing::instrument(skip(db))]
async fn get_templates(db: Data<Box<dyn Database>>) -> Result<Json<Vec<TemplateBody>>, Error> {
    let templates = manager::get_templates(&***db).await?;

    let body = templates.into_iter().map(TemplateBody::render).collect();

    Ok(Json(body))
}

#[get("/templates/{template_id}")]
#[tracing::instrument(skip(db))]
async fn get_template_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<TemplateId>,
) -> Result<Json<TemplateBody>, Error> {
    let template_id = params.into_inner();

    let template = manager::get_template_by_id(&***db, template_id)
        .await?
        .ok_or(Error::TemplateDoesNotExist { template_id })?;

    Ok(Json(TemplateBody::render(template)))
}
