use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use gigport_order::{Order, OrderStatus};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const MSG_ORDER_NOT_FOUND: &str = "Die Bestellung wurde nicht gefunden.";
const MSG_DETAIL_NOT_FOUND: &str = "Das angegebene Angebotsdetail existiert nicht.";
const MSG_USER_NOT_FOUND: &str = "Der angegebene Nutzer existiert nicht.";
const MSG_CUSTOMER_ONLY: &str = "Nur Kunden können Aufträge erteilen";
const MSG_BUSINESS_ONLY: &str = "Nur der Business-Nutzer kann den Status einer Bestellung ändern.";
const MSG_ADMIN_ONLY: &str = "Nur Admin-Benutzer können Bestellungen löschen.";

#[derive(Debug, Deserialize)]
pub struct OrderStatusPatch {
    pub status: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(list_orders).post(create_order))
        .route(
            "/api/orders/{id}",
            get(get_order).patch(patch_order).delete(delete_order),
        )
        .route("/api/order-count/{business_user_id}", get(open_order_count))
        .route(
            "/api/completed-order-count/{business_user_id}",
            get(completed_order_count),
        )
}

/// GET /api/orders
pub async fn list_orders(
    State(state): State<AppState>,
    caller: AuthUser,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state.orders.list_for_user(caller.id).await?;
    Ok(Json(orders))
}

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    caller: AuthUser,
    Json(draft): Json<gigport_order::OrderDraft>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let profile = state
        .profiles
        .get(caller.id)
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_USER_NOT_FOUND.to_owned()))?;
    if !profile.is_customer() {
        return Err(ApiError::Forbidden(MSG_CUSTOMER_ONLY.to_owned()));
    }

    let (detail, business_user) = state
        .offers
        .get_detail(draft.offer_detail_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_DETAIL_NOT_FOUND.to_owned()))?;

    let order = Order::from_detail(caller.id, business_user, &detail, draft);
    state.orders.create(&order).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    _caller: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Order>, ApiError> {
    let order = state
        .orders
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_ORDER_NOT_FOUND.to_owned()))?;
    Ok(Json(order))
}

/// PATCH /api/orders/{id}
pub async fn patch_order(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<OrderStatusPatch>,
) -> Result<Json<Order>, ApiError> {
    let order = state
        .orders
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_ORDER_NOT_FOUND.to_owned()))?;

    if order.business_user != caller.id {
        return Err(ApiError::Forbidden(MSG_BUSINESS_ONLY.to_owned()));
    }

    let status = OrderStatus::parse(body.status.as_deref().unwrap_or_default())
        .map_err(ApiError::detail_message)?;

    let updated = state
        .orders
        .set_status(order.id, status)
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_ORDER_NOT_FOUND.to_owned()))?;

    Ok(Json(updated))
}

/// DELETE /api/orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !caller.is_staff {
        return Err(ApiError::Forbidden(MSG_ADMIN_ONLY.to_owned()));
    }

    let deleted = state.orders.delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound(MSG_ORDER_NOT_FOUND.to_owned()));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/order-count/{business_user_id}
pub async fn open_order_count(
    State(state): State<AppState>,
    _caller: AuthUser,
    Path(business_user_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    if !state.profiles.user_exists(business_user_id).await? {
        return Err(ApiError::NotFound(MSG_USER_NOT_FOUND.to_owned()));
    }
    let count = state
        .orders
        .count_for_business(business_user_id, OrderStatus::InProgress)
        .await?;
    Ok(Json(json!({ "order_count": count })))
}

/// GET /api/completed-order-count/{business_user_id}
pub async fn completed_order_count(
    State(state): State<AppState>,
    _caller: AuthUser,
    Path(business_user_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    if !state.profiles.user_exists(business_user_id).await? {
        return Err(ApiError::NotFound(MSG_USER_NOT_FOUND.to_owned()));
    }
    let count = state
        .orders
        .count_for_business(business_user_id, OrderStatus::Completed)
        .await?;
    Ok(Json(json!({ "completed_order_count": count })))
}
