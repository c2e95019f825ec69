use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type TemplateId = TypedId<Template>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    pub template_type: TemplateType,
    // Subject lines only make sense for email; the sms pipeline ignores it.
    pub subject: Option<String>,
    pub content: String,
    pub preview_image: Option<String>,
}

impl TypedIdMarker for Template {
    fn tag() -> &'static str {
        "TPL"
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    Email,
    Sms,
}
