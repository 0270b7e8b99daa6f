//! REST client for the remote resource server.
//!
//! The server exposes one collection per entity type with the same shape
//! everywhere: `GET /{Collection}` lists, `POST /{Collection}` creates
//! (assigning the id), `PUT /{Collection}/{id}` replaces, and
//! `DELETE /{Collection}/{id}` removes. Bodies are plain JSON.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::model::{
    Attendance, CreateAttendance, CreateLeaveRequest, CreateOnboarding, CreateStaff, LeaveRequest,
    Onboarding, Staff,
};

/// Ties an entity type to its server collection.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Path segment of the collection, e.g. `Staff` for `GET /Staff`.
    const COLLECTION: &'static str;
    /// Creation payload: the entity without its server-assigned id.
    type Create: Serialize + Send + Sync;

    fn id(&self) -> &str;
}

impl Resource for Staff {
    const COLLECTION: &'static str = "Staff";
    type Create = CreateStaff;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Attendance {
    const COLLECTION: &'static str = "Attendance";
    type Create = CreateAttendance;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for LeaveRequest {
    const COLLECTION: &'static str = "LeaveRequest";
    type Create = CreateLeaveRequest;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Onboarding {
    const COLLECTION: &'static str = "Onboarding";
    type Create = CreateOnboarding;

    fn id(&self) -> &str {
        &self.id
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// A zero timeout disables the client-side deadline entirely.
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url<R: Resource>(&self) -> String {
        format!("{}/{}", self.base_url, R::COLLECTION)
    }

    fn entity_url<R: Resource>(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, R::COLLECTION, id)
    }

    /// Full collection download; there is no pagination on this server.
    pub async fn list<R: Resource>(&self) -> AppResult<Vec<R>> {
        debug!(collection = R::COLLECTION, "GET collection");
        let resp = self.http.get(self.collection_url::<R>()).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn create<R: Resource>(&self, draft: &R::Create) -> AppResult<R> {
        debug!(collection = R::COLLECTION, "POST entity");
        let resp = self
            .http
            .post(self.collection_url::<R>())
            .json(draft)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        Ok(resp.json().await?)
    }

    /// Full-replace update keyed by the entity's own id.
    pub async fn replace<R: Resource>(&self, entity: &R) -> AppResult<R> {
        debug!(collection = R::COLLECTION, id = entity.id(), "PUT entity");
        let resp = self
            .http
            .put(self.entity_url::<R>(entity.id()))
            .json(entity)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn remove<R: Resource>(&self, id: &str) -> AppResult<()> {
        debug!(collection = R::COLLECTION, id, "DELETE entity");
        let resp = self.http.delete(self.entity_url::<R>(id)).send().await?;
        check_status(resp).await?;
        Ok(())
    }
}

/// Non-2xx responses become `AppError::Api` carrying the response body.
async fn check_status(resp: reqwest::Response) -> AppResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body
    };

    Err(AppError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_doubled_slashes() {
        let client = ApiClient::new("http://localhost:3000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.collection_url::<Staff>(), "http://localhost:3000/Staff");
        assert_eq!(
            client.entity_url::<Attendance>("a12"),
            "http://localhost:3000/Attendance/a12"
        );
    }
}
