use serde::{Deserialize, Serialize};

use crate::resources::{check_bounds, require_user_id, UpstreamResource};

/// A blog post owned by one upstream user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl UpstreamResource for Post {
    const KIND: &'static str = "post";
    const PATH: &'static str = "posts";

    fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if let Some(problem) = require_user_id(self.user_id) {
            problems.push(problem);
        }
        if let Some(problem) = check_bounds("title", &self.title, 4, 15) {
            problems.push(problem);
        }
        if let Some(problem) = check_bounds("body", &self.body, 4, 200) {
            problems.push(problem);
        }
        problems
    }
}
