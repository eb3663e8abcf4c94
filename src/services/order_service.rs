use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::orders::{OrderList, OrderPayload},
    entity::orders::{ActiveModel, Column, Entity as Orders, Model as OrderModel},
    error::{AppError, AppResult},
    models::{Deleted, Order},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_orders(state: &AppState) -> AppResult<ApiResponse<OrderList>> {
    let items: Vec<Order> = Orders::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Orders", OrderList { items }, Some(meta)))
}

pub async fn get_order(state: &AppState, id: i32) -> AppResult<ApiResponse<Order>> {
    let order = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(order_from_entity);
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound("Order")),
    };
    Ok(ApiResponse::success("Order", order, None))
}

pub async fn create_order(
    state: &AppState,
    payload: OrderPayload,
) -> AppResult<ApiResponse<Order>> {
    let mut active = ActiveModel {
        id: NotSet,
        ..Default::default()
    };
    apply_payload(&mut active, payload);
    let order = active.insert(&state.orm).await?;

    tracing::info!(order_id = order.id, customer_id = ?order.customer_id, "order created");
    Ok(ApiResponse::success(
        "Order created",
        order_from_entity(order),
        Some(Meta::empty()),
    ))
}

pub async fn update_order(
    state: &AppState,
    id: i32,
    payload: OrderPayload,
) -> AppResult<ApiResponse<Order>> {
    let txn = state.orm.begin().await?;

    let existing = Orders::find_by_id(id).one(&txn).await?;
    let existing = match existing {
        Some(o) => o,
        None => return Err(AppError::NotFound("Order")),
    };

    let mut active: ActiveModel = existing.into();
    apply_payload(&mut active, payload);
    let order = active.update(&txn).await?;

    txn.commit().await?;

    tracing::info!(order_id = order.id, "order replaced");
    Ok(ApiResponse::success(
        "Order updated",
        order_from_entity(order),
        Some(Meta::empty()),
    ))
}

pub async fn delete_order(state: &AppState, id: i32) -> AppResult<ApiResponse<Deleted>> {
    let result = Orders::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Order"));
    }

    tracing::info!(order_id = id, "order deleted");
    Ok(ApiResponse::success(
        "Order deleted successfully",
        Deleted { id },
        Some(Meta::empty()),
    ))
}

pub(crate) fn apply_payload(active: &mut ActiveModel, payload: OrderPayload) {
    active.name = Set(payload.name);
    active.description = Set(payload.description);
    active.start_date = Set(payload.start_date);
    active.end_date = Set(payload.end_date);
    active.address = Set(payload.address);
    active.price = Set(payload.price);
    active.customer_id = Set(payload.customer_id);
    active.executor_id = Set(payload.executor_id);
}

pub(crate) fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        name: model.name,
        description: model.description,
        start_date: model.start_date,
        end_date: model.end_date,
        address: model.address,
        price: model.price,
        customer_id: model.customer_id,
        executor_id: model.executor_id,
    }
}
