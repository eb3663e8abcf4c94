pub mod offers;
pub mod orders;
pub mod users;

pub use offers::Entity as Offers;
pub use orders::Entity as Orders;
pub use users::Entity as Users;
