use serde::{Deserialize, Serialize};

use crate::resources::{require_user_id, UpstreamResource};

/// A photo album owned by one upstream user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Album {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
}

impl UpstreamResource for Album {
    const KIND: &'static str = "album";
    const PATH: &'static str = "albums";

    fn validate(&self) -> Vec<String> {
        require_user_id(self.user_id).into_iter().collect()
    }
}
