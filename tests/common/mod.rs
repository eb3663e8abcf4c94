#![allow(dead_code)]

use marketplace_api::{
    db::{create_orm_conn, reset_schema},
    dto::{offers::OfferPayload, orders::OrderPayload, users::UserPayload},
    state::AppState,
};

/// Fresh in-memory store with the schema created and no rows.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    reset_schema(&orm).await?;
    Ok(AppState::new(orm))
}

pub fn user_payload(tag: &str) -> UserPayload {
    UserPayload {
        first_name: format!("First{tag}"),
        last_name: format!("Last{tag}"),
        age: Some(30),
        email: Some(format!("{tag}@example.com")),
        role: Some("customer".into()),
        phone: Some(format!("555000{tag}")),
    }
}

pub fn order_payload(customer_id: Option<i32>) -> OrderPayload {
    OrderPayload {
        name: Some("Fix the sink".into()),
        description: Some("Kitchen sink drips".into()),
        start_date: chrono::NaiveDate::from_ymd_opt(2024, 5, 1),
        end_date: chrono::NaiveDate::from_ymd_opt(2024, 5, 3),
        address: Some("1 Main St".into()),
        price: Some(1500),
        customer_id,
        executor_id: None,
    }
}

pub fn offer_payload(order_id: i32, executor_id: i32) -> OfferPayload {
    OfferPayload {
        order_id: Some(order_id),
        executor_id: Some(executor_id),
    }
}
