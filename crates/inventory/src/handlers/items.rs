//! Item CRUD handlers (`/api/items`).
//!
//! Each handler is one unit of work: it reads through the repository,
//! checks existence where the operation needs it, and commits at most one
//! change before responding.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use inventory_core::inventory::{
    contract_to_fields, item_to_contract, Item, ItemContract, ItemId,
};

use crate::{context::RequestContext, handlers::AppError, state::AppState};

/// List all items (GET /api/items).
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemContract>>, AppError> {
    let items = state.item_repo.list_items().await?;

    tracing::debug!(count = items.len(), "Listed items");

    Ok(Json(items.into_iter().map(item_to_contract).collect()))
}

/// Get a single item by ID (GET /api/items/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Response, AppError> {
    match state.item_repo.find_item(id).await? {
        Some(item) => Ok(Json(item_to_contract(item)).into_response()),
        None => {
            tracing::debug!(item_id = id, "Item not found");
            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}

/// Create a new item (POST /api/items).
///
/// Any `id` in the payload is ignored; storage assigns a fresh one.
pub async fn create_item(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(payload): Json<ItemContract>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(payload = ?payload, "Received create item request");

    let item = state
        .item_repo
        .insert_item(contract_to_fields(payload))
        .await?;

    tracing::info!(
        item_id = item.id,
        title = %item.title,
        correlation_id = %ctx.correlation_id,
        "Created new item"
    );

    let location = format!("/api/items/{}", item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item_to_contract(item)),
    ))
}

/// Replace every mutable field of an item (PUT /api/items/{id}).
pub async fn update_item(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<ItemId>,
    Json(payload): Json<ItemContract>,
) -> Result<Response, AppError> {
    tracing::debug!(item_id = id, payload = ?payload, "Received update item request");

    if state.item_repo.find_item(id).await?.is_none() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    let item = Item::from_fields(id, contract_to_fields(payload));
    let updated = state.item_repo.update_item(item).await?;

    tracing::info!(item_id = id, correlation_id = %ctx.correlation_id, "Updated item");

    Ok(Json(item_to_contract(updated)).into_response())
}

/// Delete an item by ID (DELETE /api/items/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<ItemId>,
) -> Result<StatusCode, AppError> {
    tracing::debug!(item_id = id, "Received delete item request");

    if state.item_repo.find_item(id).await?.is_none() {
        return Ok(StatusCode::NOT_FOUND);
    }

    state.item_repo.delete_item(id).await?;

    tracing::info!(item_id = id, correlation_id = %ctx.correlation_id, "Deleted item");

    Ok(StatusCode::NO_CONTENT)
}
