//! Customer account model.

use serde::{Deserialize, Serialize};

use shopclerk_core::{Email, UserId};

/// A customer account.
///
/// Created by external provisioning; this crate only looks users up by
/// email to attach conversation records to an identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Unique account email.
    pub email: Email,
    /// Optional phone number.
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization() {
        let user = User {
            id: UserId::new(1),
            name: "John Doe".to_string(),
            email: Email::parse("john@example.com").expect("valid email"),
            phone: Some("123-456-7890".to_string()),
        };

        let json = serde_json::to_string(&user).expect("serialize");
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"email\":\"john@example.com\""));
    }
}
