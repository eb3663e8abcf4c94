use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::orders::{OrderList, OrderPayload},
    error::AppResult,
    middleware::payload::{ValidJson, ValidPath},
    models::{Deleted, Order},
    response::ApiResponse,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", get(get_order).put(update_order).delete(delete_order))
}

#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders ordered by id; the array is in `data`, the count in `meta.total`", body = ApiResponse<OrderList>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_orders(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Get order", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::get_order(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderPayload,
    responses(
        (status = 201, description = "Create order", body = ApiResponse<Order>),
        (status = 400, description = "Malformed payload or unknown customer"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<OrderPayload>,
) -> AppResult<(StatusCode, Json<ApiResponse<Order>>)> {
    let resp = order_service::create_order(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = OrderPayload,
    responses(
        (status = 200, description = "Replace order", body = ApiResponse<Order>),
        (status = 400, description = "Malformed payload or unknown customer"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<OrderPayload>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::update_order(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Deleted order", body = ApiResponse<Deleted>),
        (status = 400, description = "Order still has offers"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> AppResult<Json<ApiResponse<Deleted>>> {
    let resp = order_service::delete_order(&state, id).await?;
    Ok(Json(resp))
}
