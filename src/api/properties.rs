use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::metrics;
use crate::properties::{merge_secrets, runtime_properties};
use crate::state::AppState;

pub const MAINTENANCE_MESSAGE: &str = "ERROR: Service is currently in maintenance.";

/// GET /properties
///
/// Reports the runtime property set merged with every secret the store
/// lists, as a flat JSON object. Refused with 503 while the maintenance
/// flag is active.
pub async fn get_properties(State(app): State<AppState>) -> Response {
    let timer = metrics::REQUEST_DURATION.start_timer();

    if app.config.is_in_maintenance() {
        metrics::REQUESTS_TOTAL.with_label_values(&["503"]).inc();
        return (StatusCode::SERVICE_UNAVAILABLE, MAINTENANCE_MESSAGE).into_response();
    }

    let mut properties = runtime_properties();

    let max_results = app.config.secret_store.max_results;
    if let Err(err) = merge_secrets(app.store.as_ref(), max_results, &mut properties).await {
        // No recovery path for a failed listing; the request fails whole.
        tracing::error!(error = %err, "secret listing failed");
        let response = err.into_response();
        metrics::REQUESTS_TOTAL
            .with_label_values(&[response.status().as_str()])
            .inc();
        return response;
    }

    timer.observe_duration();
    metrics::REQUESTS_TOTAL.with_label_values(&["200"]).inc();
    Json(properties).into_response()
}
