use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gigport_core::Page;
use gigport_offer::{
    patch, validate, Offer, OfferDetail, OfferFilters, OfferOrdering, OfferPatch, OfferQuery,
    OfferType,
};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const MSG_OFFER_NOT_FOUND: &str = "Das Angebot wurde nicht gefunden.";
const MSG_DETAIL_NOT_FOUND: &str = "Das Angebotsdetail wurde nicht gefunden.";
const MSG_DELETE_FORBIDDEN: &str = "Nur der Ersteller oder ein Admin kann dieses Angebot entfernen.";
const MSG_EDIT_FORBIDDEN: &str = "Nur der Ersteller oder ein Admin darf dieses Angebot bearbeiten.";

// ============================================================================
// Query parameters
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListOffersQuery {
    pub creator_id: Option<Uuid>,
    pub min_price: Option<Decimal>,
    pub max_delivery_time: Option<i32>,
    pub ordering: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

// ============================================================================
// Response shapes
// ============================================================================

/// Tier reference used on list and single GET; clients follow the url for
/// the full tier.
#[derive(Debug, Serialize)]
pub struct DetailRef {
    pub id: Uuid,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct DetailFull {
    pub id: Uuid,
    pub title: String,
    pub revisions: i32,
    pub delivery_time_in_days: i32,
    pub price: Decimal,
    pub features: Vec<String>,
    pub offer_type: OfferType,
}

#[derive(Debug, Serialize)]
pub struct UserDetails {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct OfferView {
    pub id: Uuid,
    pub user: Uuid,
    pub title: String,
    pub image: Option<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub details: Vec<DetailRef>,
    pub min_price: Option<Decimal>,
    pub min_delivery_time: Option<i32>,
    /// Present on the list endpoint only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_details: Option<UserDetails>,
}

#[derive(Debug, Serialize)]
pub struct OfferCreatedResponse {
    pub id: Uuid,
    pub title: String,
    pub image: Option<String>,
    pub description: String,
    pub details: Vec<DetailFull>,
}

#[derive(Debug, Serialize)]
pub struct OfferUpdatedResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub details: Vec<DetailFull>,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateOfferRequest {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    #[serde(default)]
    pub details: Vec<validate::DetailDraft>,
}

fn detail_ref(detail: &OfferDetail) -> DetailRef {
    DetailRef {
        id: detail.id,
        url: format!("/api/offerdetails/{}", detail.id),
    }
}

fn detail_full(detail: &OfferDetail) -> DetailFull {
    DetailFull {
        id: detail.id,
        title: detail.title.clone(),
        revisions: detail.revisions,
        delivery_time_in_days: detail.delivery_time_in_days,
        price: detail.price,
        features: detail.features.clone(),
        offer_type: detail.offer_type,
    }
}

fn image_url(state: &AppState, image: &Option<String>) -> Option<String> {
    image.as_ref().map(|locator| state.files.url(locator))
}

fn offer_view(state: &AppState, offer: &Offer, user_details: Option<UserDetails>) -> OfferView {
    OfferView {
        id: offer.id,
        user: offer.user_id,
        title: offer.title.clone(),
        image: image_url(state, &offer.image),
        description: offer.description.clone(),
        created_at: offer.created_at,
        updated_at: offer.updated_at,
        details: offer.details.iter().map(detail_ref).collect(),
        min_price: offer.min_price(),
        min_delivery_time: offer.min_delivery_time(),
        user_details,
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/offers", get(list_offers).post(create_offer))
        .route(
            "/api/offers/{id}",
            get(get_offer).patch(update_offer).delete(delete_offer),
        )
        .route("/api/offerdetails/{id}", get(get_offer_detail))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/offers
pub async fn list_offers(
    State(state): State<AppState>,
    Query(query): Query<ListOffersQuery>,
) -> Result<Json<Page<OfferView>>, ApiError> {
    let filters = OfferFilters {
        creator_id: query.creator_id,
        min_price: query.min_price,
        max_delivery_time: query.max_delivery_time,
        search: query.search,
    };
    let ordering = OfferOrdering::parse(query.ordering.as_deref());
    let offer_query = OfferQuery::new(filters, ordering, query.page, query.page_size);

    let offers = state.offers.list().await?;
    let page = offer_query.run(offers).map_err(ApiError::from_domain)?;

    let mut results = Vec::with_capacity(page.results.len());
    for offer in &page.results {
        let user_details = state.profiles.get(offer.user_id).await?.map(|profile| UserDetails {
            first_name: profile.first_name,
            last_name: profile.last_name,
            username: profile.username,
        });
        results.push(offer_view(&state, offer, user_details));
    }

    Ok(Json(Page {
        count: page.count,
        next: page.next,
        previous: page.previous,
        results,
    }))
}

/// POST /api/offers
pub async fn create_offer(
    State(state): State<AppState>,
    caller: AuthUser,
    Json(req): Json<CreateOfferRequest>,
) -> Result<(StatusCode, Json<OfferCreatedResponse>), ApiError> {
    let profile = state
        .profiles
        .get(caller.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Der angegebene Nutzer existiert nicht.".to_owned()))?;
    if !profile.is_business() {
        return Err(ApiError::business_profile_required());
    }

    validate::validate_details(&req.details).map_err(ApiError::detail_errors)?;

    let mut offer = Offer::new(caller.id, req.title, req.description, req.image, req.details);
    for detail in &mut offer.details {
        detail.round_price();
    }
    state.offers.create(&offer).await?;

    Ok((
        StatusCode::CREATED,
        Json(OfferCreatedResponse {
            id: offer.id,
            title: offer.title.clone(),
            image: image_url(&state, &offer.image),
            description: offer.description.clone(),
            details: offer.details.iter().map(detail_full).collect(),
        }),
    ))
}

/// GET /api/offers/{id}
pub async fn get_offer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OfferView>, ApiError> {
    let offer = state
        .offers
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_OFFER_NOT_FOUND.to_owned()))?;

    Ok(Json(offer_view(&state, &offer, None)))
}

/// PATCH /api/offers/{id}
pub async fn update_offer(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<OfferPatch>,
) -> Result<Json<OfferUpdatedResponse>, ApiError> {
    let mut offer = state
        .offers
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_OFFER_NOT_FOUND.to_owned()))?;

    if offer.user_id != caller.id && !caller.is_staff {
        return Err(ApiError::Forbidden(MSG_EDIT_FORBIDDEN.to_owned()));
    }

    patch::validate_patch(&body).map_err(ApiError::detail_errors)?;
    let outcome = patch::apply(&mut offer, &body);
    if outcome.ignored > 0 {
        tracing::warn!(
            offer_id = %offer.id,
            applied = outcome.applied,
            ignored = outcome.ignored,
            "patch referenced tiers this offer does not own; those entries were skipped"
        );
    }
    offer.touch();
    state.offers.update(&offer).await?;

    Ok(Json(OfferUpdatedResponse {
        id: offer.id,
        title: offer.title.clone(),
        description: offer.description.clone(),
        details: offer.details.iter().map(detail_full).collect(),
        image: image_url(&state, &offer.image),
    }))
}

/// DELETE /api/offers/{id}
pub async fn delete_offer(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let offer = state
        .offers
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_OFFER_NOT_FOUND.to_owned()))?;

    // Deletion is stricter than editing: an admin must also hold a business
    // profile of their own.
    let is_owner = offer.user_id == caller.id;
    let is_business_admin = caller.is_staff
        && state
            .profiles
            .get(caller.id)
            .await?
            .map(|profile| profile.is_business())
            .unwrap_or(false);
    if !is_owner && !is_business_admin {
        return Err(ApiError::Forbidden(MSG_DELETE_FORBIDDEN.to_owned()));
    }

    state.offers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/offerdetails/{id}
pub async fn get_offer_detail(
    State(state): State<AppState>,
    _caller: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DetailFull>, ApiError> {
    let (detail, _owner) = state
        .offers
        .get_detail(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_DETAIL_NOT_FOUND.to_owned()))?;

    Ok(Json(detail_full(&detail)))
}
