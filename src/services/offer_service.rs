use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::offers::{OfferList, OfferPayload},
    entity::offers::{ActiveModel, Column, Entity as Offers, Model as OfferModel},
    error::{AppError, AppResult},
    models::{Deleted, Offer},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_offers(state: &AppState) -> AppResult<ApiResponse<OfferList>> {
    let items: Vec<Offer> = Offers::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(offer_from_entity)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Offers", OfferList { items }, Some(meta)))
}

pub async fn get_offer(state: &AppState, id: i32) -> AppResult<ApiResponse<Offer>> {
    let offer = Offers::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(offer_from_entity);
    let offer = match offer {
        Some(o) => o,
        None => return Err(AppError::NotFound("Offer")),
    };
    Ok(ApiResponse::success("Offer", offer, None))
}

pub async fn create_offer(
    state: &AppState,
    payload: OfferPayload,
) -> AppResult<ApiResponse<Offer>> {
    let active = ActiveModel {
        id: NotSet,
        order_id: Set(payload.order_id),
        executor_id: Set(payload.executor_id),
    };
    let offer = active.insert(&state.orm).await?;

    tracing::info!(
        offer_id = offer.id,
        order_id = ?offer.order_id,
        executor_id = ?offer.executor_id,
        "offer created"
    );
    Ok(ApiResponse::success(
        "Offer created",
        offer_from_entity(offer),
        Some(Meta::empty()),
    ))
}

pub async fn update_offer(
    state: &AppState,
    id: i32,
    payload: OfferPayload,
) -> AppResult<ApiResponse<Offer>> {
    let txn = state.orm.begin().await?;

    let existing = Offers::find_by_id(id).one(&txn).await?;
    let existing = match existing {
        Some(o) => o,
        None => return Err(AppError::NotFound("Offer")),
    };

    let mut active: ActiveModel = existing.into();
    active.order_id = Set(payload.order_id);
    active.executor_id = Set(payload.executor_id);
    let offer = active.update(&txn).await?;

    txn.commit().await?;

    tracing::info!(offer_id = offer.id, "offer replaced");
    Ok(ApiResponse::success(
        "Offer updated",
        offer_from_entity(offer),
        Some(Meta::empty()),
    ))
}

pub async fn delete_offer(state: &AppState, id: i32) -> AppResult<ApiResponse<Deleted>> {
    let result = Offers::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Offer"));
    }

    tracing::info!(offer_id = id, "offer deleted");
    Ok(ApiResponse::success(
        "Offer deleted successfully",
        Deleted { id },
        Some(Meta::empty()),
    ))
}

pub(crate) fn offer_from_entity(model: OfferModel) -> Offer {
    Offer {
        id: model.id,
        order_id: model.order_id,
        executor_id: model.executor_id,
    }
}
