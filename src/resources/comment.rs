use serde::{Deserialize, Serialize};

use crate::resources::{require_user_id, UpstreamResource};

/// A comment left under a post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Comment {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl UpstreamResource for Comment {
    const KIND: &'static str = "comment";
    const PATH: &'static str = "comments";

    fn validate(&self) -> Vec<String> {
        require_user_id(self.user_id).into_iter().collect()
    }
}
