//! REST client for the hosted `cards` table.
//!
//! Speaks the PostgREST-style row API: filters are query parameters
//! (`id=eq.<uuid>`), upserts go through `Prefer: resolution=merge-duplicates`,
//! and `Prefer: return=representation` makes deletes report what they removed.
//! Ownership and role scoping are enforced by the backend's row policies; the
//! checks here are advisory fail-fasts that save a doomed round trip.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cardlink_shared::auth::AuthProvider;
use cardlink_shared::Card;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use uuid::Uuid;

use crate::config::RemoteConfig;
use crate::error::{RemoteError, Result};
use crate::mapper::{from_row, to_row, CardRow};
use crate::store::RemoteStore;

/// [`RemoteStore`] implementation over the hosted REST API.
pub struct RestRemote {
    http: reqwest::Client,
    config: RemoteConfig,
    auth: Arc<dyn AuthProvider>,
}

impl RestRemote {
    pub fn new(config: RemoteConfig, auth: Arc<dyn AuthProvider>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&config.api_key) {
            headers.insert("apikey", value);
        }
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", config.api_key)) {
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config, auth })
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(RemoteError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RemoteStore for RestRemote {
    async fn save(&self, card: &Card) -> Result<()> {
        let user = self.auth.current_user().ok_or(RemoteError::Unauthorized)?;

        let mut row = to_row(card);
        if row.user_id == Uuid::nil().to_string() {
            // Anonymous cards get stamped with the saving actor.
            row.user_id = user.id.clone();
        } else if row.user_id != user.id && !user.is_superadmin() {
            return Err(RemoteError::NotOwner(card.id.clone()));
        }

        tracing::debug!(card_id = %row.id, user_id = %row.user_id, "saving card remotely");

        let response = self
            .http
            .post(self.config.cards_endpoint())
            .header("Prefer", "resolution=merge-duplicates")
            .json(&row)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<Card>> {
        let response = self
            .http
            .get(self.config.cards_endpoint())
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;

        let rows: Vec<CardRow> = Self::ensure_success(response).await?.json().await?;
        tracing::debug!(count = rows.len(), "fetched remote card list");
        Ok(rows.iter().map(from_row).collect())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Card>> {
        let id_filter = format!("eq.{id}");
        let response = self
            .http
            .get(self.config.cards_endpoint())
            .query(&[("select", "*"), ("id", id_filter.as_str())])
            .send()
            .await?;

        let rows: Vec<CardRow> = Self::ensure_success(response).await?.json().await?;
        Ok(rows.first().map(from_row))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        // A session is still required; which rows the actor may remove is
        // decided by the backend, so a non-owner delete removes nothing.
        if self.auth.current_user().is_none() {
            return Err(RemoteError::Unauthorized);
        }

        let id_filter = format!("eq.{id}");
        let response = self
            .http
            .delete(self.config.cards_endpoint())
            .query(&[("id", id_filter.as_str())])
            .header("Prefer", "return=representation")
            .send()
            .await?;

        let removed: Vec<CardRow> = Self::ensure_success(response).await?.json().await?;
        tracing::debug!(card_id = %id, removed = removed.len(), "remote delete finished");
        Ok(!removed.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardlink_shared::auth::{CurrentUser, Role, StaticAuth};

    fn client_with(auth: StaticAuth) -> RestRemote {
        RestRemote::new(RemoteConfig::default(), Arc::new(auth)).unwrap()
    }

    fn owner() -> CurrentUser {
        CurrentUser {
            id: "3f0c8e3e-7f2e-4e63-9a30-d54b0e61a1f8".into(),
            email: None,
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn save_requires_a_session() {
        let remote = client_with(StaticAuth::signed_out());
        let err = remote.save(&Card::new("Ana", None)).await.unwrap_err();
        assert!(matches!(err, RemoteError::Unauthorized));
    }

    #[tokio::test]
    async fn save_rejects_foreign_cards_for_regular_users() {
        let remote = client_with(StaticAuth::signed_in(owner()));
        let foreign = Card::new("Bob", Some("71b4a2a6-0f28-4a7a-97a8-64efb4b93a70"));

        let err = remote.save(&foreign).await.unwrap_err();
        assert!(matches!(err, RemoteError::NotOwner(_)));
    }

    #[tokio::test]
    async fn delete_requires_a_session() {
        let remote = client_with(StaticAuth::signed_out());
        let err = remote.delete("c-1").await.unwrap_err();
        assert!(matches!(err, RemoteError::Unauthorized));
    }
}
