use serde::{Deserialize, Serialize};

use crate::resources::{require_user_id, UpstreamResource};

/// An upstream account record.
///
/// `address` and `company` are nested documents the gateway never looks
/// inside; they ride through as opaque JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: serde_json::Value,
    pub company: serde_json::Value,
}

impl UpstreamResource for User {
    const KIND: &'static str = "user";
    const PATH: &'static str = "users";

    fn validate(&self) -> Vec<String> {
        require_user_id(self.user_id).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_documents_pass_through_untouched() {
        let raw = r#"{"userId":1,"id":1,"name":"Leanne","username":"Bret","email":"a@b.c","phone":"1","website":"x.org","address":{"city":"Gwen","geo":{"lat":"-37.3"}},"company":{"name":"Romaguera"}}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.address["city"], "Gwen");
        assert_eq!(user.address["geo"]["lat"], "-37.3");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, raw);
    }
}
