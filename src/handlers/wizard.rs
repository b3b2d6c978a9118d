use crate::wizard::{self, Transition, WizardEvent, WizardState};
use axum::Json;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct WizardRequest {
    /// Current wizard state; defaults to the city step when omitted.
    #[serde(default)]
    pub state: WizardState,
    pub event: WizardEvent,
}

#[utoipa::path(
    post,
    path = "/api/v1/wizard",
    request_body = WizardRequest,
    responses(
        (status = 200, description = "Next state and what to render", body = Transition),
    ),
    tag = "wizard"
)]
pub async fn advance_wizard(Json(req): Json<WizardRequest>) -> Json<Transition> {
    Json(wizard::apply(req.state, req.event))
}
