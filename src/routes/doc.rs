use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        offers::{OfferList, OfferPayload},
        orders::{OrderList, OrderPayload},
        users::{UserList, UserPayload},
    },
    models::{Deleted, Offer, Order, User},
    response::{ApiResponse, Meta},
    routes::{health, offers, orders, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        orders::update_order,
        orders::delete_order,
        offers::list_offers,
        offers::get_offer,
        offers::create_offer,
        offers::update_offer,
        offers::delete_offer
    ),
    components(
        schemas(
            User,
            Order,
            Offer,
            Deleted,
            UserPayload,
            OrderPayload,
            OfferPayload,
            UserList,
            OrderList,
            OfferList,
            health::HealthData,
            Meta,
            ApiResponse<User>,
            ApiResponse<Order>,
            ApiResponse<Offer>,
            ApiResponse<UserList>,
            ApiResponse<OrderList>,
            ApiResponse<OfferList>,
            ApiResponse<Deleted>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Offers", description = "Offer endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
