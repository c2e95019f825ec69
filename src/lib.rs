use actix_web::web::{self, Data, FormConfig, JsonConfig, PathConfig, QueryConfig};
use actix_web::{App, HttpServer, ResponseError};
use tracing::info;
use tracing_actix_web::TracingLogger;

pub mod campaign;
pub mod database;
pub mod error;
pub mod journey;
pub mod metrics;
pub mod seed;
pub mod target;
pub mod template;
pub mod typedid;

pub use crate::campaign::{CampaignBody, CreateCampaignBody};
pub use crate::journey::{CreateJourneyBody, CreateJourneyStepBody, JourneyBody, StartJourneyBody};
pub use crate::metrics::MetricsBody;
pub use crate::target::{
    CreateTargetBody, TargetBody, TargetSummaryBody, UpdateTargetStatusBody, UpdatedCountBody,
};
pub use crate::template::{CreateTemplateBody, TemplateBody};

use crate::database::{Database, MemoryDatabase};
use crate::error::Error;

const ADDRESS: &str = "127.0.0.1:8080";

/// Blocking entry point; spins up the runtime and serves until shutdown.
pub fn run() -> Result<(), Error> {
    actix_web::rt::System::new().block_on(serve())
}

pub async fn serve() -> Result<(), Error> {
    let db = MemoryDatabase::new();
    seed::seed(&db).await?;
    info!("seeded in-memory collections");

    info!("listening on {}", ADDRESS);
    HttpServer::new(move || {
        App::new()
            .app_data(JsonConfig::default().error_handler(|err, _req| {
                // format json errors with custom format
                Error::InvalidJson(err).into()
            }))
            .app_data(PathConfig::default().error_handler(|err, _req| {
                // format path errors with custom format
                Error::InvalidPath(err).into()
            }))
            .app_data(FormConfig::default().error_handler(|err, _req| {
                // format form errors with custom format
                Error::InvalidForm(err).into()
            }))
            .app_data(QueryConfig::default().error_handler(|err, _req| {
                // format query errors with custom format
                Error::InvalidQuery(err).into()
            }))
            .app_data(Data::new(Box::new(db.clone()) as Box<dyn Database>))
            .wrap(TracingLogger::default())
            .service(campaign::endpoints::create_campaign)
            .service(campaign::endpoints::get_campaigns)
            .service(campaign::endpoints::get_campaign_by_id)
            .service(journey::endpoints::create_journey_in_campaign)
            .service(journey::endpoints::get_journeys_in_campaign)
            .service(journey::endpoints::get_journey_in_campaign_by_id)
            .service(journey::endpoints::start_journey_in_campaign)
            .service(target::endpoints::create_target)
            .service(target::endpoints::get_targets)
            .service(target::endpoints::get_target_summary)
            .service(target::endpoints::update_target_statuses)
            .service(target::endpoints::promote_brushed_targets)
            .service(target::endpoints::get_target_by_id)
            .service(template::endpoints::create_template)
            .service(template::endpoints::get_templates)
            .service(template::endpoints::get_template_by_id)
            .service(metrics::endpoints::get_metrics)
            .default_service(web::to(|| async { Error::PathDoesNotExist.error_response() }))
    })
    .bind(ADDRESS)?
    .run()
    .await?;

    Ok(())
}
