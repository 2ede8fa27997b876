//! Accessory description and identify handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use garage_app::ports::{DeviceClient, StateNotifier};

use crate::state::AppState;

/// Service type exposed by this accessory.
const GARAGE_DOOR_OPENER: &str = "GarageDoorOpener";

#[derive(Serialize)]
pub struct AccessoryView {
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub services: Vec<&'static str>,
}

/// Possible responses from the info endpoint.
pub enum InfoResponse {
    Ok(Json<AccessoryView>),
}

impl IntoResponse for InfoResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the identify endpoint.
pub enum IdentifyResponse {
    NoContent,
}

impl IntoResponse for IdentifyResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/accessory`
pub async fn info<D, N>(State(state): State<AppState<D, N>>) -> InfoResponse
where
    D: DeviceClient + 'static,
    N: StateNotifier + 'static,
{
    let info = state.accessory.info();
    InfoResponse::Ok(Json(AccessoryView {
        name: info.name.clone(),
        manufacturer: info.manufacturer.clone(),
        model: info.model.clone(),
        services: vec![GARAGE_DOOR_OPENER],
    }))
}

/// `POST /api/identify`
pub async fn identify<D, N>(State(state): State<AppState<D, N>>) -> IdentifyResponse
where
    D: DeviceClient + 'static,
    N: StateNotifier + 'static,
{
    state.accessory.identify();
    IdentifyResponse::NoContent
}
