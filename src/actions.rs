use std::str::FromStr;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;
use tracing::{error, info, warn};

use crate::{
    instructions, transaction, ActionError, AppState, DerivedAddresses, TakeAccounts, TakeQuery,
};

pub const ACTION_PATH: &str = "/api/actions/escrow-take";
pub const ACTIONS_JSON_PATH: &str = "/actions.json";

pub const TRADE_COMPLETED: &str = "Trade Completed.";

/// Attached to every response, errors included, so wallets on any origin can
/// call the action.
pub fn cors_headers() -> [(HeaderName, &'static str); 3] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (header::ACCESS_CONTROL_ALLOW_METHODS, "GET,POST,PUT,OPTIONS"),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            "Content-Type, Authorization, Content-Encoding, Accept-Encoding",
        ),
    ]
}

/// Discovery payload returned on GET
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMetadata {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub label: String,
}

impl Default for ActionMetadata {
    fn default() -> Self {
        Self {
            icon: "https://example.com/icon.png".to_string(),
            title: "Escrow".to_string(),
            description: "Open a escrow on Solana.".to_string(),
            label: "Accept Trade".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionPostRequest {
    pub account: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionPostResponse {
    pub transaction: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRule {
    pub path_pattern: String,
    pub api_path: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionsJson {
    pub rules: Vec<ActionRule>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            ACTION_PATH,
            get(metadata)
                .post(take)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            ACTIONS_JSON_PATH,
            get(actions_json)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}

pub async fn metadata(State(state): State<AppState>) -> Response {
    (cors_headers(), Json(state.settings.metadata.clone())).into_response()
}

pub async fn preflight() -> Response {
    (StatusCode::OK, cors_headers()).into_response()
}

pub async fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, cors_headers()).into_response()
}

pub async fn actions_json() -> Response {
    let body = ActionsJson {
        rules: vec![ActionRule {
            path_pattern: ACTION_PATH.to_string(),
            api_path: ACTION_PATH.to_string(),
        }],
    };
    (cors_headers(), Json(body)).into_response()
}

/// Build an unsigned take transaction for the posted account. The body is
/// read as JSON whatever its content type, wallets may post `text/plain`.
pub async fn take(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    body: Bytes,
) -> Result<Response, ActionError> {
    build_take(&state, query, body)
        .await
        .map(|response| (cors_headers(), Json(response)).into_response())
        .inspect_err(|err| {
            if err.status().is_server_error() {
                error!(%err, "failed to build take transaction");
            } else {
                warn!(%err, "rejected take request");
            }
        })
}

async fn build_take(
    state: &AppState,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    body: Bytes,
) -> Result<ActionPostResponse, ActionError> {
    let settings = &state.settings;

    // Validate everything before touching the network
    let Query(pairs) = query.map_err(|rejection| ActionError::InvalidQuery(rejection.body_text()))?;
    let params = TakeQuery::from_iter(pairs).validate(&settings.default_address)?;

    let request: ActionPostRequest = serde_json::from_slice(&body)
        .map_err(|err| ActionError::InvalidBody(err.to_string()))?;
    let taker = Pubkey::from_str(&request.account).map_err(|_| ActionError::InvalidAccount)?;

    // Derive token accounts & assemble the take
    let derived = DerivedAddresses::derive(&taker, &params, &settings.token_program);
    let accounts = TakeAccounts::new(taker, &params, &derived, &settings.token_program);
    let instruction = instructions::take(&settings.program_id, &accounts);

    // Attach blockhash & fee payer, leave the signature slots empty
    let blockhash = state.blockhash.latest_blockhash().await?;
    let tx = transaction::build_unsigned(&[instruction], &taker, blockhash);

    info!(
        %taker,
        escrow = %params.escrow,
        maker = %params.maker,
        %blockhash,
        "built take transaction"
    );

    Ok(ActionPostResponse {
        transaction: transaction::encode(&tx)?,
        message: TRADE_COMPLETED.to_string(),
    })
}
