use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::offers::{OfferList, OfferPayload},
    error::AppResult,
    middleware::payload::{ValidJson, ValidPath},
    models::{Deleted, Offer},
    response::ApiResponse,
    services::offer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_offers).post(create_offer))
        .route("/{id}", get(get_offer).put(update_offer).delete(delete_offer))
}

#[utoipa::path(
    get,
    path = "/offers",
    responses(
        (status = 200, description = "All offers ordered by id; the array is in `data`, the count in `meta.total`", body = ApiResponse<OfferList>)
    ),
    tag = "Offers"
)]
pub async fn list_offers(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<OfferList>>> {
    let resp = offer_service::list_offers(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/offers/{id}",
    params(
        ("id" = i32, Path, description = "Offer ID")
    ),
    responses(
        (status = 200, description = "Get offer", body = ApiResponse<Offer>),
        (status = 404, description = "Offer not found"),
    ),
    tag = "Offers"
)]
pub async fn get_offer(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> AppResult<Json<ApiResponse<Offer>>> {
    let resp = offer_service::get_offer(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/offers",
    request_body = OfferPayload,
    responses(
        (status = 201, description = "Create offer", body = ApiResponse<Offer>),
        (status = 400, description = "Unknown order or executor"),
    ),
    tag = "Offers"
)]
pub async fn create_offer(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<OfferPayload>,
) -> AppResult<(StatusCode, Json<ApiResponse<Offer>>)> {
    let resp = offer_service::create_offer(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/offers/{id}",
    params(
        ("id" = i32, Path, description = "Offer ID")
    ),
    request_body = OfferPayload,
    responses(
        (status = 200, description = "Replace offer", body = ApiResponse<Offer>),
        (status = 400, description = "Unknown order or executor"),
        (status = 404, description = "Offer not found"),
    ),
    tag = "Offers"
)]
pub async fn update_offer(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<OfferPayload>,
) -> AppResult<Json<ApiResponse<Offer>>> {
    let resp = offer_service::update_offer(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/offers/{id}",
    params(
        ("id" = i32, Path, description = "Offer ID")
    ),
    responses(
        (status = 200, description = "Deleted offer", body = ApiResponse<Deleted>),
        (status = 404, description = "Offer not found"),
    ),
    tag = "Offers"
)]
pub async fn delete_offer(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> AppResult<Json<ApiResponse<Deleted>>> {
    let resp = offer_service::delete_offer(&state, id).await?;
    Ok(Json(resp))
}
