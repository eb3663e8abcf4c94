use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::users::{UserList, UserPayload},
    entity::users::{ActiveModel, Column, Entity as Users, Model as UserModel},
    error::{AppError, AppResult},
    models::{Deleted, User},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_users(state: &AppState) -> AppResult<ApiResponse<UserList>> {
    let items: Vec<User> = Users::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(user_from_entity)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Users", UserList { items }, Some(meta)))
}

pub async fn get_user(state: &AppState, id: i32) -> AppResult<ApiResponse<User>> {
    let user = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(user_from_entity);
    let user = match user {
        Some(u) => u,
        None => return Err(AppError::NotFound("User")),
    };
    Ok(ApiResponse::success("User", user, None))
}

pub async fn create_user(state: &AppState, payload: UserPayload) -> AppResult<ApiResponse<User>> {
    let mut active = ActiveModel {
        id: NotSet,
        ..Default::default()
    };
    apply_payload(&mut active, payload);
    let user = active.insert(&state.orm).await?;

    tracing::info!(user_id = user.id, "user created");
    Ok(ApiResponse::success(
        "User created",
        user_from_entity(user),
        Some(Meta::empty()),
    ))
}

pub async fn update_user(
    state: &AppState,
    id: i32,
    payload: UserPayload,
) -> AppResult<ApiResponse<User>> {
    let txn = state.orm.begin().await?;

    let existing = Users::find_by_id(id).one(&txn).await?;
    let existing = match existing {
        Some(u) => u,
        None => return Err(AppError::NotFound("User")),
    };

    let mut active: ActiveModel = existing.into();
    apply_payload(&mut active, payload);
    let user = active.update(&txn).await?;

    txn.commit().await?;

    tracing::info!(user_id = user.id, "user replaced");
    Ok(ApiResponse::success(
        "User updated",
        user_from_entity(user),
        Some(Meta::empty()),
    ))
}

pub async fn delete_user(state: &AppState, id: i32) -> AppResult<ApiResponse<Deleted>> {
    let result = Users::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("User"));
    }

    tracing::info!(user_id = id, "user deleted");
    Ok(ApiResponse::success(
        "User deleted successfully",
        Deleted { id },
        Some(Meta::empty()),
    ))
}

/// Overwrites every mutable column, including the ones the payload leaves empty.
pub(crate) fn apply_payload(active: &mut ActiveModel, payload: UserPayload) {
    active.first_name = Set(payload.first_name);
    active.last_name = Set(payload.last_name);
    active.age = Set(payload.age);
    active.email = Set(payload.email);
    active.role = Set(payload.role);
    active.phone = Set(payload.phone);
}

pub(crate) fn user_from_entity(model: UserModel) -> User {
    User {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        age: model.age,
        email: model.email,
        role: model.role,
        phone: model.phone,
    }
}
