//! HTTP endpoints of the worker.
use super::error::ApiError;
use crate::calculator::{parse_number, Calculator};
use crate::types::PowerResult;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Squares the number in the path.
///
/// Input that is not an integer is rejected before anything is computed or
/// reported.
pub async fn power_of_2(
    State(calculator): State<Arc<Calculator>>,
    Path(raw): Path<String>,
) -> Result<Json<PowerResult>, ApiError> {
    let number = parse_number(&raw).map_err(|_| ApiError::InvalidNumber(raw))?;
    Ok(Json(calculator.power_of_2(number)))
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Power of 2 Calculator",
        "usage": "GET /power/{number} - Calculate number^2"
    }))
}
