use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    dto::{Validate, dates::deserialize_optional_date, ensure_max_len},
    error::AppResult,
    models::Order,
};

/// Body of `POST /orders` and `PUT /orders/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, ToSchema)]
pub struct OrderPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    #[schema(value_type = Option<String>, example = "2024-03-09")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    #[schema(value_type = Option<String>, example = "2024-04-01")]
    pub end_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub price: Option<i64>,
    pub customer_id: Option<i32>,
    pub executor_id: Option<i32>,
}

impl Validate for OrderPayload {
    fn validate(&self) -> AppResult<()> {
        ensure_max_len("name", self.name.as_deref(), 100)?;
        ensure_max_len("description", self.description.as_deref(), 1000)?;
        ensure_max_len("address", self.address.as_deref(), 300)?;
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct OrderList {
    #[schema(value_type = Vec<Order>)]
    pub items: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_accept_both_formats() {
        let p: OrderPayload = serde_json::from_str(
            r#"{"name":"Paint fence","start_date":"02/08/2013","end_date":"2013-03-08"}"#,
        )
        .unwrap();
        assert_eq!(p.start_date, NaiveDate::from_ymd_opt(2013, 2, 8));
        assert_eq!(p.end_date, NaiveDate::from_ymd_opt(2013, 3, 8));
    }

    #[test]
    fn missing_dates_are_null() {
        let p: OrderPayload = serde_json::from_str(r#"{"price":100}"#).unwrap();
        assert_eq!(p.start_date, None);
        assert_eq!(p.end_date, None);
        assert_eq!(p.price, Some(100));
    }

    #[test]
    fn malformed_dates_fail_deserialization() {
        let err = serde_json::from_str::<OrderPayload>(r#"{"start_date":"soon"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn long_addresses_are_rejected() {
        let p = OrderPayload {
            address: Some("x".repeat(301)),
            ..OrderPayload::default()
        };
        assert!(p.validate().is_err());
    }
}
