use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// A post as exposed by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

pub struct GatewayClient {
    client: Client,
    gateway_url: String,
}

impl GatewayClient {
    pub fn new(gateway_url: &str) -> Self {
        Self {
            client: Client::new(),
            gateway_url: gateway_url.to_string(),
        }
    }

    /// List posts; zero/empty filters are omitted from the query.
    pub async fn list_posts(
        &self,
        title: &str,
        user_id: i64,
        id: i64,
    ) -> Result<Vec<Post>, Box<dyn std::error::Error>> {
        let mut request = self.client.get(format!("{}/v1/posts", self.gateway_url));
        let mut query: Vec<(&str, String)> = Vec::new();
        if id != 0 {
            query.push(("id", id.to_string()));
        }
        if !title.is_empty() {
            query.push(("title", title.to_string()));
        }
        if user_id != 0 {
            query.push(("userId", user_id.to_string()));
        }
        if !query.is_empty() {
            request = request.query(&query);
        }

        let resp = request.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(format!("gateway returned status {}: {}", status, text).into());
        }
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .get(format!("{}/v1/posts/{}", self.gateway_url, id))
            .send()
            .await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(format!("gateway returned status {}: {}", status, text).into());
        }
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn create_post(&self, post: &Post) -> Result<Post, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .post(format!("{}/v1/posts", self.gateway_url))
            .json(post)
            .send()
            .await?;
        let status = resp.status();
        let text = resp.text().await?;
        if status != StatusCode::CREATED {
            return Err(format!("gateway returned status {}: {}", status, text).into());
        }
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn update_post(
        &self,
        id: i64,
        post: &Post,
    ) -> Result<Post, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .put(format!("{}/v1/posts/{}", self.gateway_url, id))
            .json(post)
            .send()
            .await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(format!("gateway returned status {}: {}", status, text).into());
        }
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), Box<dyn std::error::Error>> {
        let resp = self
            .client
            .delete(format!("{}/v1/posts/{}", self.gateway_url, id))
            .send()
            .await?;
        let status = resp.status();
        if status != StatusCode::NO_CONTENT {
            return Err(format!("gateway returned status {}", status).into());
        }
        Ok(())
    }
}
