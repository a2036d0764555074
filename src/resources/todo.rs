use serde::{Deserialize, Serialize};

use crate::resources::{require_user_id, UpstreamResource};

/// A todo item with a completion flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Todo {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl UpstreamResource for Todo {
    const KIND: &'static str = "todo";
    const PATH: &'static str = "todos";

    fn validate(&self) -> Vec<String> {
        require_user_id(self.user_id).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_round_trips() {
        let todo: Todo =
            serde_json::from_str(r#"{"userId":3,"id":7,"title":"walk","completed":true}"#).unwrap();
        assert!(todo.completed);
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"userId":3,"id":7,"title":"walk","completed":true}"#);
    }
}
