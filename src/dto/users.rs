use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    dto::{Validate, ensure_max_len, ensure_present},
    error::{AppError, AppResult},
    models::User,
};

/// Users must be adults.
pub const MIN_AGE: i32 = 18;

/// Body of `POST /users` and `PUT /users/{id}`.
///
/// PUT replaces the whole record: optional fields left out are stored as null.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct UserPayload {
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

impl Validate for UserPayload {
    fn validate(&self) -> AppResult<()> {
        ensure_present("first_name", &self.first_name)?;
        ensure_present("last_name", &self.last_name)?;
        ensure_max_len("first_name", Some(&self.first_name), 100)?;
        ensure_max_len("last_name", Some(&self.last_name), 100)?;
        ensure_max_len("email", self.email.as_deref(), 100)?;
        ensure_max_len("role", self.role.as_deref(), 100)?;
        ensure_max_len("phone", self.phone.as_deref(), 12)?;
        if let Some(age) = self.age.filter(|age| *age < MIN_AGE) {
            return Err(AppError::BadRequest(format!(
                "age must be at least {MIN_AGE}, got {age}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct UserList {
    #[schema(value_type = Vec<User>)]
    pub items: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> UserPayload {
        serde_json::from_value(serde_json::json!({
            "first_name": "Ann",
            "last_name": "Lee",
            "age": 25,
            "email": "ann@x.com",
            "role": "customer",
            "phone": "5551234567"
        }))
        .unwrap()
    }

    #[test]
    fn accepts_a_complete_user() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let p: UserPayload =
            serde_json::from_str(r#"{"first_name":"Ann","last_name":"Lee"}"#).unwrap();
        assert_eq!(p.age, None);
        assert_eq!(p.phone, None);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn names_are_required() {
        assert!(serde_json::from_str::<UserPayload>(r#"{"last_name":"Lee"}"#).is_err());
        let p = UserPayload {
            first_name: "  ".into(),
            ..payload()
        };
        assert!(matches!(p.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn minors_are_rejected() {
        let p = UserPayload {
            age: Some(17),
            ..payload()
        };
        assert!(p.validate().is_err());
        let p = UserPayload {
            age: Some(18),
            ..payload()
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn phone_is_limited_to_twelve_characters() {
        let p = UserPayload {
            phone: Some("+1-555-123-4567".into()),
            ..payload()
        };
        assert!(p.validate().is_err());
    }
}
