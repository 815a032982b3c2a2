use crate::service::{Service, analytics::Event};
use axum::{Json, debug_handler, extract::State};
use serde_json::{Value, json};
use vitrine_error::{ErrorType, Result, bail};

#[debug_handler(state = crate::state::Zustand)]
pub async fn post(State(service): State<Service>, Json(event): Json<Event>) -> Result<Json<Value>> {
    if let Err(reason) = event.validate() {
        bail!(
            type = ErrorType::BadRequest(Some(reason.to_owned())),
            reason
        );
    }

    service.analytics.record(event);

    Ok(Json(json!({ "success": true })))
}
