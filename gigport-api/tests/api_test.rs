use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use gigport_api::app;
use gigport_api::middleware::auth::issue_token;
use gigport_api::state::{AppState, AuthConfig};
use gigport_core::{
    AuthRecord, BoxError, FileStore, NewReview, NewUser, ProfileRecord, ProfileRepository,
    ProfileType, ProfileUpdate, Review, ReviewFilters, ReviewOrdering, ReviewRepository,
    ReviewUpdate,
};
use gigport_offer::{Offer, OfferDetail, OfferRepository};
use gigport_order::{Order, OrderRepository, OrderStatus};

// ============================================================================
// In-memory fakes
// ============================================================================

#[derive(Default)]
struct MemOffers {
    offers: Mutex<Vec<Offer>>,
}

#[async_trait]
impl OfferRepository for MemOffers {
    async fn create(&self, offer: &Offer) -> Result<(), BoxError> {
        self.offers.lock().unwrap().push(offer.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Offer>, BoxError> {
        Ok(self.offers.lock().unwrap().iter().find(|o| o.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Offer>, BoxError> {
        Ok(self.offers.lock().unwrap().clone())
    }

    async fn update(&self, offer: &Offer) -> Result<(), BoxError> {
        let mut offers = self.offers.lock().unwrap();
        if let Some(slot) = offers.iter_mut().find(|o| o.id == offer.id) {
            *slot = offer.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BoxError> {
        let mut offers = self.offers.lock().unwrap();
        let before = offers.len();
        offers.retain(|o| o.id != id);
        Ok(offers.len() < before)
    }

    async fn get_detail(&self, id: Uuid) -> Result<Option<(OfferDetail, Uuid)>, BoxError> {
        Ok(self.offers.lock().unwrap().iter().find_map(|offer| {
            offer
                .details
                .iter()
                .find(|d| d.id == id)
                .map(|d| (d.clone(), offer.user_id))
        }))
    }

    async fn count(&self) -> Result<i64, BoxError> {
        Ok(self.offers.lock().unwrap().len() as i64)
    }
}

#[derive(Default)]
struct MemOrders {
    orders: Mutex<Vec<Order>>,
}

#[async_trait]
impl OrderRepository for MemOrders {
    async fn create(&self, order: &Order) -> Result<(), BoxError> {
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Order>, BoxError> {
        Ok(self.orders.lock().unwrap().iter().find(|o| o.id == id).cloned())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Order>, BoxError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.customer_user == user_id || o.business_user == user_id)
            .cloned()
            .collect())
    }

    async fn set_status(&self, id: Uuid, status: OrderStatus) -> Result<Option<Order>, BoxError> {
        let mut orders = self.orders.lock().unwrap();
        let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };
        order.status = status;
        Ok(Some(order.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BoxError> {
        let mut orders = self.orders.lock().unwrap();
        let before = orders.len();
        orders.retain(|o| o.id != id);
        Ok(orders.len() < before)
    }

    async fn count_for_business(
        &self,
        business_user: Uuid,
        status: OrderStatus,
    ) -> Result<i64, BoxError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.business_user == business_user && o.status == status)
            .count() as i64)
    }
}

#[derive(Default)]
struct MemReviews {
    reviews: Mutex<Vec<Review>>,
}

#[async_trait]
impl ReviewRepository for MemReviews {
    async fn create(&self, review: &NewReview) -> Result<Review, BoxError> {
        let now = chrono::Utc::now();
        let stored = Review {
            id: review.id,
            reviewer: review.reviewer,
            business_user: review.business_user,
            rating: review.rating,
            description: review.description.clone(),
            created_at: now,
            updated_at: now,
        };
        self.reviews.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Review>, BoxError> {
        Ok(self.reviews.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn list(
        &self,
        filters: ReviewFilters,
        _ordering: ReviewOrdering,
    ) -> Result<Vec<Review>, BoxError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                filters.business_user_id.map_or(true, |id| r.business_user == id)
                    && filters.reviewer_id.map_or(true, |id| r.reviewer == id)
            })
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, update: &ReviewUpdate) -> Result<Option<Review>, BoxError> {
        let mut reviews = self.reviews.lock().unwrap();
        let Some(review) = reviews.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        if let Some(rating) = update.rating {
            review.rating = rating;
        }
        if let Some(description) = &update.description {
            review.description = description.clone();
        }
        review.updated_at = chrono::Utc::now();
        Ok(Some(review.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BoxError> {
        let mut reviews = self.reviews.lock().unwrap();
        let before = reviews.len();
        reviews.retain(|r| r.id != id);
        Ok(reviews.len() < before)
    }

    async fn exists_for_pair(&self, reviewer: Uuid, business_user: Uuid) -> Result<bool, BoxError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.reviewer == reviewer && r.business_user == business_user))
    }

    async fn count(&self) -> Result<i64, BoxError> {
        Ok(self.reviews.lock().unwrap().len() as i64)
    }

    async fn average_rating(&self) -> Result<Option<f64>, BoxError> {
        let reviews = self.reviews.lock().unwrap();
        if reviews.is_empty() {
            return Ok(None);
        }
        let sum: i32 = reviews.iter().map(|r| r.rating).sum();
        Ok(Some(f64::from(sum) / reviews.len() as f64))
    }
}

#[derive(Default)]
struct MemProfiles {
    profiles: Mutex<HashMap<Uuid, ProfileRecord>>,
}

impl MemProfiles {
    fn insert(&self, user_id: Uuid, profile_type: ProfileType, is_staff: bool) {
        self.profiles.lock().unwrap().insert(
            user_id,
            ProfileRecord {
                user_id,
                username: format!("user-{user_id}"),
                first_name: "Max".to_owned(),
                last_name: "Mustermann".to_owned(),
                email: format!("{user_id}@example.com"),
                profile_type,
                tel: "0123456789".to_owned(),
                location: "Berlin".to_owned(),
                description: String::new(),
                file: None,
                working_hours: "09:00 - 18:00".to_owned(),
                uploaded_at: None,
                created_at: chrono::Utc::now(),
                is_staff,
            },
        );
    }
}

#[async_trait]
impl ProfileRepository for MemProfiles {
    async fn create_user(&self, user: &NewUser) -> Result<ProfileRecord, BoxError> {
        self.insert(user.id, user.profile_type, false);
        self.get(user.id)
            .await?
            .ok_or_else(|| "missing".to_owned().into())
    }

    async fn find_auth_by_username(&self, _username: &str) -> Result<Option<AuthRecord>, BoxError> {
        Ok(None)
    }

    async fn username_or_email_exists(&self, _username: &str, _email: &str) -> Result<bool, BoxError> {
        Ok(false)
    }

    async fn get(&self, user_id: Uuid) -> Result<Option<ProfileRecord>, BoxError> {
        Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
    }

    async fn update(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<Option<ProfileRecord>, BoxError> {
        let mut profiles = self.profiles.lock().unwrap();
        let Some(record) = profiles.get_mut(&user_id) else {
            return Ok(None);
        };
        if let Some(location) = &update.location {
            record.location = location.clone();
        }
        if let Some(tel) = &update.tel {
            record.tel = tel.clone();
        }
        Ok(Some(record.clone()))
    }

    async fn list_by_type(&self, profile_type: ProfileType) -> Result<Vec<ProfileRecord>, BoxError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.profile_type == profile_type)
            .cloned()
            .collect())
    }

    async fn user_exists(&self, user_id: Uuid) -> Result<bool, BoxError> {
        Ok(self.profiles.lock().unwrap().contains_key(&user_id))
    }

    async fn count_by_type(&self, profile_type: ProfileType) -> Result<i64, BoxError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.profile_type == profile_type)
            .count() as i64)
    }
}

struct MemFiles;

#[async_trait]
impl FileStore for MemFiles {
    async fn put(&self, filename: &str, _bytes: &[u8]) -> Result<String, BoxError> {
        Ok(format!("stored-{filename}"))
    }

    fn url(&self, locator: &str) -> String {
        format!("/media/{locator}")
    }
}

// ============================================================================
// Harness
// ============================================================================

struct TestApp {
    state: AppState,
    offers: Arc<MemOffers>,
    profiles: Arc<MemProfiles>,
}

fn test_app() -> TestApp {
    let offers = Arc::new(MemOffers::default());
    let profiles = Arc::new(MemProfiles::default());
    let state = AppState {
        offers: offers.clone(),
        orders: Arc::new(MemOrders::default()),
        reviews: Arc::new(MemReviews::default()),
        profiles: profiles.clone(),
        files: Arc::new(MemFiles),
        auth: AuthConfig {
            secret: "test-secret".to_owned(),
            expiration_seconds: 3600,
        },
    };
    TestApp { state, offers, profiles }
}

fn bearer(state: &AppState, user_id: Uuid, is_staff: bool) -> String {
    let token = issue_token(user_id, "tester", is_staff, &state.auth).unwrap();
    format!("Bearer {token}")
}

async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = app(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn offer_body() -> Value {
    json!({
        "title": "Grafikdesign-Paket",
        "description": "Ein umfassendes Paket.",
        "details": [
            {
                "title": "Basic Design",
                "revisions": 2,
                "delivery_time_in_days": 5,
                "price": 100.0,
                "features": ["Logo Design"],
                "offer_type": "basic"
            }
        ]
    })
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_offer_list_is_public_and_paginated() {
    let harness = test_app();
    let business = Uuid::new_v4();
    harness.profiles.insert(business, ProfileType::Business, false);
    for i in 0..8 {
        let mut body = offer_body();
        body["title"] = json!(format!("Angebot {i}"));
        let request = Request::builder()
            .method("POST")
            .uri("/api/offers")
            .header(header::AUTHORIZATION, bearer(&harness.state, business, false))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, _) = send(&harness.state, request).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let request = Request::builder()
        .uri("/api/offers?page_size=50")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 8);
    assert_eq!(body["results"].as_array().unwrap().len(), 6);
    assert_eq!(body["next"], 2);
    // List items carry tier references plus the aggregates.
    assert_eq!(body["results"][0]["min_price"], 100.0);
    assert!(body["results"][0]["details"][0]["url"]
        .as_str()
        .unwrap()
        .starts_with("/api/offerdetails/"));
}

#[tokio::test]
async fn test_customer_cannot_create_offer() {
    let harness = test_app();
    let customer = Uuid::new_v4();
    harness.profiles.insert(customer, ProfileType::Customer, false);

    let request = Request::builder()
        .method("POST")
        .uri("/api/offers")
        .header(header::AUTHORIZATION, bearer(&harness.state, customer, false))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(offer_body().to_string()))
        .unwrap();
    let (status, body) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "business_profile_required");
}

#[tokio::test]
async fn test_create_offer_requires_token() {
    let harness = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/offers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(offer_body().to_string()))
        .unwrap();
    let (status, _) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_detail_reports_field_errors_and_persists_nothing() {
    let harness = test_app();
    let business = Uuid::new_v4();
    harness.profiles.insert(business, ProfileType::Business, false);

    // First tier valid, second invalid: the request must fail as a whole.
    let mut body = offer_body();
    let mut second = body["details"][0].clone();
    second["offer_type"] = json!("standard");
    second["price"] = json!(0.5);
    second["delivery_time_in_days"] = json!(0);
    body["details"].as_array_mut().unwrap().push(second);
    let request = Request::builder()
        .method("POST")
        .uri("/api/offers")
        .header(header::AUTHORIZATION, bearer(&harness.state, business, false))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let entry = &body["details"][0];
    assert_eq!(entry["index"], 1);
    assert_eq!(
        entry["errors"]["price"][0],
        "Eingegebener Preis muss höher als 1 sein."
    );
    assert_eq!(
        entry["errors"]["delivery_time_in_days"][0],
        "Eingegebene Lieferzeit muss mindestens 1 Tag betragen."
    );
    // Neither the offer nor the valid first tier was written.
    assert_eq!(harness.offers.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_patch_ignores_unknown_detail_id() {
    let harness = test_app();
    let business = Uuid::new_v4();
    harness.profiles.insert(business, ProfileType::Business, false);

    let request = Request::builder()
        .method("POST")
        .uri("/api/offers")
        .header(header::AUTHORIZATION, bearer(&harness.state, business, false))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(offer_body().to_string()))
        .unwrap();
    let (_, created) = send(&harness.state, request).await;
    let offer_id = created["id"].as_str().unwrap().to_owned();

    let patch = json!({
        "title": "Neuer Titel",
        "details": [{ "id": Uuid::new_v4(), "price": 999.0 }]
    });
    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/api/offers/{offer_id}"))
        .header(header::AUTHORIZATION, bearer(&harness.state, business, false))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(patch.to_string()))
        .unwrap();
    let (status, body) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Neuer Titel");
    // The foreign tier entry was dropped without touching the owned one.
    assert_eq!(body["details"][0]["price"], 100.0);
}

#[tokio::test]
async fn test_non_owner_cannot_delete_offer() {
    let harness = test_app();
    let business = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    harness.profiles.insert(business, ProfileType::Business, false);
    harness.profiles.insert(stranger, ProfileType::Customer, false);

    let request = Request::builder()
        .method("POST")
        .uri("/api/offers")
        .header(header::AUTHORIZATION, bearer(&harness.state, business, false))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(offer_body().to_string()))
        .unwrap();
    let (_, created) = send(&harness.state, request).await;
    let offer_id = created["id"].as_str().unwrap().to_owned();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/offers/{offer_id}"))
        .header(header::AUTHORIZATION, bearer(&harness.state, stranger, false))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["detail"][0],
        "Nur der Ersteller oder ein Admin kann dieses Angebot entfernen."
    );
    assert_eq!(harness.offers.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_order_flow_from_offer_detail() {
    let harness = test_app();
    let business = Uuid::new_v4();
    let customer = Uuid::new_v4();
    harness.profiles.insert(business, ProfileType::Business, false);
    harness.profiles.insert(customer, ProfileType::Customer, false);

    let request = Request::builder()
        .method("POST")
        .uri("/api/offers")
        .header(header::AUTHORIZATION, bearer(&harness.state, business, false))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(offer_body().to_string()))
        .unwrap();
    let (_, created) = send(&harness.state, request).await;
    let detail_id = created["details"][0]["id"].as_str().unwrap().to_owned();

    let request = Request::builder()
        .method("POST")
        .uri("/api/orders")
        .header(header::AUTHORIZATION, bearer(&harness.state, customer, false))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "offer_detail_id": detail_id }).to_string()))
        .unwrap();
    let (status, order) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["status"], "in_progress");
    assert_eq!(order["title"], "Basic Design");
    let order_id = order["id"].as_str().unwrap().to_owned();

    // Only the business side may move the status.
    let patch = json!({ "status": "completed" }).to_string();
    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/api/orders/{order_id}"))
        .header(header::AUTHORIZATION, bearer(&harness.state, customer, false))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(patch.clone()))
        .unwrap();
    let (status, _) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/api/orders/{order_id}"))
        .header(header::AUTHORIZATION, bearer(&harness.state, business, false))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(patch))
        .unwrap();
    let (status, updated) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "completed");

    let request = Request::builder()
        .uri(format!("/api/completed-order-count/{business}"))
        .header(header::AUTHORIZATION, bearer(&harness.state, customer, false))
        .body(Body::empty())
        .unwrap();
    let (status, counts) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(counts["completed_order_count"], 1);
}

#[tokio::test]
async fn test_order_count_for_unknown_user_is_not_found() {
    let harness = test_app();
    let caller = Uuid::new_v4();
    harness.profiles.insert(caller, ProfileType::Customer, false);

    let request = Request::builder()
        .uri(format!("/api/order-count/{}", Uuid::new_v4()))
        .header(header::AUTHORIZATION, bearer(&harness.state, caller, false))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"][0], "Der angegebene Nutzer existiert nicht.");
}

#[tokio::test]
async fn test_duplicate_review_is_rejected() {
    let harness = test_app();
    let business = Uuid::new_v4();
    let customer = Uuid::new_v4();
    harness.profiles.insert(business, ProfileType::Business, false);
    harness.profiles.insert(customer, ProfileType::Customer, false);

    let review = json!({
        "business_user": business,
        "rating": 4,
        "description": "Sehr professioneller Service."
    })
    .to_string();
    let request = Request::builder()
        .method("POST")
        .uri("/api/reviews")
        .header(header::AUTHORIZATION, bearer(&harness.state, customer, false))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(review.clone()))
        .unwrap();
    let (status, _) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::CREATED);

    let request = Request::builder()
        .method("POST")
        .uri("/api/reviews")
        .header(header::AUTHORIZATION, bearer(&harness.state, customer, false))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(review))
        .unwrap();
    let (status, _) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_base_info_reports_rounded_average() {
    let harness = test_app();
    let customer = Uuid::new_v4();
    harness.profiles.insert(customer, ProfileType::Customer, false);
    for rating in [5, 4] {
        let business = Uuid::new_v4();
        harness.profiles.insert(business, ProfileType::Business, false);
        let request = Request::builder()
            .method("POST")
            .uri("/api/reviews")
            .header(header::AUTHORIZATION, bearer(&harness.state, customer, false))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "business_user": business, "rating": rating, "description": "Gut." })
                    .to_string(),
            ))
            .unwrap();
        let (status, _) = send(&harness.state, request).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let request = Request::builder().uri("/api/base-info").body(Body::empty()).unwrap();
    let (status, body) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["review_count"], 2);
    assert_eq!(body["average_rating"], 4.5);
    assert_eq!(body["business_profile_count"], 2);
}

#[tokio::test]
async fn test_profile_patch_rejects_unknown_field() {
    let harness = test_app();
    let user = Uuid::new_v4();
    harness.profiles.insert(user, ProfileType::Customer, false);

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/api/profile/{user}"))
        .header(header::AUTHORIZATION, bearer(&harness.state, user, false))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "is_staff": true }).to_string()))
        .unwrap();
    let (status, body) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"][0], "Das Feld is_staff ist nicht erlaubt.");
}

#[tokio::test]
async fn test_upload_returns_locator_and_url() {
    let harness = test_app();
    let user = Uuid::new_v4();
    harness.profiles.insert(user, ProfileType::Business, false);

    let request = Request::builder()
        .method("POST")
        .uri("/api/uploads?filename=logo.png")
        .header(header::AUTHORIZATION, bearer(&harness.state, user, false))
        .body(Body::from(vec![0u8; 16]))
        .unwrap();
    let (status, body) = send(&harness.state, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["file"], "stored-logo.png");
    assert_eq!(body["url"], "/media/stored-logo.png");
}
