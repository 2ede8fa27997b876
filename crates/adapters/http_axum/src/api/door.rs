//! JSON handlers for the garage door characteristics.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use garage_app::ports::{DeviceClient, StateNotifier};
use garage_domain::door::{DoorSnapshot, DoorState, TargetState};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `PUT /api/door/target`.
#[derive(Deserialize)]
pub struct SetTargetRequest {
    pub target: String,
}

/// Snapshot plus the time left before sensor readings apply again.
#[derive(Serialize)]
pub struct DoorView {
    #[serde(flatten)]
    pub snapshot: DoorSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_remaining_secs: Option<u64>,
}

/// One characteristic value: its name and its accessory-protocol code.
#[derive(Serialize)]
pub struct CharacteristicView {
    pub state: String,
    pub code: u8,
}

impl From<DoorState> for CharacteristicView {
    fn from(state: DoorState) -> Self {
        Self {
            state: state.to_string(),
            code: state.characteristic_code(),
        }
    }
}

impl From<TargetState> for CharacteristicView {
    fn from(state: TargetState) -> Self {
        Self {
            state: state.to_string(),
            code: state.characteristic_code(),
        }
    }
}

/// Possible responses from the door endpoints.
pub enum DoorResponse {
    Ok(Json<DoorView>),
}

impl IntoResponse for DoorResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the characteristic endpoints.
pub enum CharacteristicResponse {
    Ok(Json<CharacteristicView>),
}

impl IntoResponse for CharacteristicResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn view<D, N>(state: &AppState<D, N>, snapshot: DoorSnapshot) -> DoorView
where
    D: DeviceClient + 'static,
    N: StateNotifier + 'static,
{
    DoorView {
        snapshot,
        pause_remaining_secs: state.accessory.pause_remaining_secs(),
    }
}

/// `GET /api/door`
pub async fn snapshot<D, N>(State(state): State<AppState<D, N>>) -> DoorResponse
where
    D: DeviceClient + 'static,
    N: StateNotifier + 'static,
{
    let snapshot = state.accessory.snapshot();
    DoorResponse::Ok(Json(view(&state, snapshot)))
}

/// `GET /api/door/current`
pub async fn current<D, N>(State(state): State<AppState<D, N>>) -> CharacteristicResponse
where
    D: DeviceClient + 'static,
    N: StateNotifier + 'static,
{
    CharacteristicResponse::Ok(Json(state.accessory.current_state().into()))
}

/// `GET /api/door/target`
pub async fn target<D, N>(State(state): State<AppState<D, N>>) -> CharacteristicResponse
where
    D: DeviceClient + 'static,
    N: StateNotifier + 'static,
{
    CharacteristicResponse::Ok(Json(state.accessory.target_state().into()))
}

/// `PUT /api/door/target`
///
/// Pulses the opener and answers with the optimistic snapshot without
/// waiting for the door to move.
pub async fn set_target<D, N>(
    State(state): State<AppState<D, N>>,
    Json(req): Json<SetTargetRequest>,
) -> Result<DoorResponse, ApiError>
where
    D: DeviceClient + 'static,
    N: StateNotifier + 'static,
{
    let requested: TargetState = req.target.parse()?;
    let snapshot = state.accessory.set_target(requested).await?;
    Ok(DoorResponse::Ok(Json(view(&state, snapshot))))
}
