use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{dto::Validate, models::Offer};

#[derive(Debug, Clone, PartialEq, Default, Deserialize, ToSchema)]
pub struct OfferPayload {
    pub order_id: Option<i32>,
    pub executor_id: Option<i32>,
}

// References are checked by the store's foreign keys.
impl Validate for OfferPayload {}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct OfferList {
    #[schema(value_type = Vec<Offer>)]
    pub items: Vec<Offer>,
}
