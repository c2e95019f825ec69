use std::fmt::{Debug, Display};
use std::io::Error as IoError;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError, UrlencodedError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derivative::Derivative;
use serde::{Serialize, Serializer};

use crate::campaign::CampaignId;
use crate::journey::{JourneyId, JourneyStatus};
use crate::target::TargetId;
use crate::template::{TemplateId, TemplateType};

#[derive(Debug, Serialize, Derivative)]
#[derivative(PartialEq, Eq)]
#[serde(untagged)]
pub enum Error {
    // 400
    #[serde(serialize_with = "display")]
    InvalidJson(#[derivative(PartialEq = "ignore")] JsonPayloadError),
    #[serde(serialize_with = "display")]
    InvalidPath(#[derivative(PartialEq = "ignore")] PathError),
    #[serde(serialize_with = "display")]
    InvalidForm(#[derivative(PartialEq = "ignore")] UrlencodedError),
    #[serde(serialize_with = "display")]
    InvalidQuery(#[derivative(PartialEq = "ignore")] QueryPayloadError),

    // 404
    PathDoesNotExist,
    CampaignDoesNotExist {
        campaign_id: CampaignId,
    },
    TargetDoesNotExist {
        target_id: TargetId,
    },
    JourneyDoesNotExistInCampaign {
        campaign_id: CampaignId,
        journey_id: JourneyId,
    },
    TemplateDoesNotExist {
        template_id: TemplateId,
    },

    // 409
    NoTargetsSelected,
    NoBrushedTargetsInView,
    TemplateTypeMismatch {
        template_id: TemplateId,
        expected_type: TemplateType,
        actual_type: TemplateType,
    },
    JourneyHasNoSteps {
        campaign_id: CampaignId,
    },
    JourneyIsNotDraft {
        journey_id: JourneyId,
        status: JourneyStatus,
    },
    NoLoadedTargetsInCampaign {
        campaign_id: CampaignId,
    },

    // 500
    #[serde(serialize_with = "display")]
    IoError(#[derivative(PartialEq = "ignore")] IoError),
}

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "E4001000",
            Error::InvalidPath(_) => "E4001001",
            Error::InvalidForm(_) => "E4001002",
            Error::InvalidQuery(_) => "E4001003",
            Error::PathDoesNotExist => "E4041000",
            Error::CampaignDoesNotExist { .. } => "E4041001",
            Error::TargetDoesNotExist { .. } => "E4041002",
            Error::JourneyDoesNotExistInCampaign { .. } => "E4041003",
            Error::TemplateDoesNotExist { .. } => "E4041004",
            Error::NoTargetsSelected => "E4091000",
            Error::NoBrushedTargetsInView => "E4091001",
            Error::TemplateTypeMismatch { .. } => "E4091002",
            Error::JourneyHasNoSteps { .. } => "E4091003",
            Error::JourneyIsNotDraft { .. } => "E4091004",
            Error::NoLoadedTargetsInCampaign { .. } => "E4091005",
            Error::IoError(_) => "E5001000",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "The given json could not be parsed",
            Error::InvalidPath(_) => "The given path could not be parsed",
            Error::InvalidForm(_) => "The given form could not be parsed",
            Error::InvalidQuery(_) => "The given query could not be parsed",
            Error::PathDoesNotExist => "The requested path was not found",
            Error::CampaignDoesNotExist { .. } => "The requested campaign was not found",
            Error::TargetDoesNotExist { .. } => "The requested target was not found",
            Error::JourneyDoesNotExistInCampaign { .. } => {
                "The requested journey was not found in the campaign"
            }
            Error::TemplateDoesNotExist { .. } => "The requested template was not found",
            Error::NoTargetsSelected => {
                "The requested status update has no selected targets to apply to"
            }
            Error::NoBrushedTargetsInView => {
                "The current view has no brushed targets to move to loaded"
            }
            Error::TemplateTypeMismatch { .. } => {
                "The provided template is a different type than the slot it was assigned to"
            }
            Error::JourneyHasNoSteps { .. } => "A journey must contain at least one step",
            Error::JourneyIsNotDraft { .. } => "Only a draft journey can be started",
            Error::NoLoadedTargetsInCampaign { .. } => {
                "The campaign has no loaded targets to enter the journey"
            }
            Error::IoError(_) => "An error occurred during an I/O operation",
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Error::InvalidForm(_) => StatusCode::BAD_REQUEST,
            Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Error::PathDoesNotExist => StatusCode::NOT_FOUND,
            Error::CampaignDoesNotExist { .. } => StatusCode::NOT_FOUND,
            Error::TargetDoesNotExist { .. } => StatusCode::NOT_FOUND,
            Error::JourneyDoesNotExistInCampaign { .. } => StatusCode::NOT_FOUND,
            Error::TemplateDoesNotExist { .. } => StatusCode::NOT_FOUND,
            Error::NoTargetsSelected => StatusCode::CONFLICT,
            Error::NoBrushedTargetsInView => StatusCode::CONFLICT,
            Error::TemplateTypeMismatch { .. } => StatusCode::CONFLICT,
            Error::JourneyHasNoSteps { .. } => StatusCode::CONFLICT,
            Error::JourneyIsNotDraft { .. } => StatusCode::CONFLICT,
            Error::NoLoadedTargetsInCampaign { .. } => StatusCode::CONFLICT,
            Error::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct Dummy<'a> {
            error_code: &'static str,
            error_message: &'static str,
            error_meta: &'a Error,
        }

        HttpResponse::build(self.status_code()).json(&Dummy {
            error_code: self.error_code(),
            error_message: self.error_message(),
            error_meta: self,
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::IoError(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidJson(err) => Some(err),
            Error::InvalidPath(err) => Some(err),
            Error::InvalidForm(err) => Some(err),
            Error::InvalidQuery(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

fn display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
