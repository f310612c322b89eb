use axum::{
    extract::{rejection::FormRejection, State},
    routing::post,
    Form, Json, Router,
};
use protscope_common::ProteinReport;

use super::queries::{ProteinReportError, ProteinReportQuery};
use crate::error::AppError;
use crate::features::SharedSource;

pub fn lookup_routes() -> Router<SharedSource> {
    Router::new().route("/search", post(lookup_protein))
}

#[tracing::instrument(skip(source, form))]
async fn lookup_protein(
    State(source): State<SharedSource>,
    form: Result<Form<ProteinReportQuery>, FormRejection>,
) -> Result<Json<ProteinReport>, AppError> {
    // An unreadable form carries no identifier
    let query = match form {
        Ok(Form(query)) => query,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Search form rejected");
            ProteinReportQuery::default()
        },
    };

    let report = super::queries::protein_report::handle(source.as_ref(), query).await?;
    Ok(Json(report))
}

impl From<ProteinReportError> for AppError {
    fn from(err: ProteinReportError) -> Self {
        let message = err.to_string();
        match err {
            ProteinReportError::MissingInput => AppError::BadRequest(message),
            ProteinReportError::NotFound => AppError::NotFound(message),
            ProteinReportError::Upstream(_) => AppError::BadGateway(message),
            ProteinReportError::Undecodable(_) | ProteinReportError::Extraction(_) => {
                AppError::Internal(message)
            },
        }
    }
}
