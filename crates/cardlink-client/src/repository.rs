//! The persistence orchestrator.
//!
//! Sequences the remote backend and the local cache behind four public
//! operations. None of them fail: remote rejections degrade to local-only
//! outcomes, a broken local cache is logged and skipped, and "not found" is
//! an answer, not an error.

use std::sync::Mutex;

use cardlink_remote::RemoteStore;
use cardlink_shared::auth::CurrentUser;
use cardlink_shared::card::ANONYMOUS_USER;
use cardlink_shared::media::sanitize_media;
use cardlink_shared::normalize::normalize_card;
use cardlink_shared::Card;
use cardlink_store::{Database, StoreError};
use serde::Serialize;

use crate::policy::{self, ReadSource};

/// Where a save ended up persisted.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SaveStatus {
    /// Stored remotely (and backed up locally).
    Remote,
    /// The remote store rejected the write or could not be reached; the card
    /// lives in the local cache only.
    LocalOnly,
}

/// Outcome of [`CardRepository::save_card`]: always the normalized card,
/// plus where it landed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReceipt {
    pub card: Card,
    pub status: SaveStatus,
}

/// Two-tier card repository: remote authoritative when it can answer, local
/// cache as fallback and write-through backup.
pub struct CardRepository {
    remote: Box<dyn RemoteStore>,
    local: Mutex<Database>,
}

impl CardRepository {
    pub fn new(remote: Box<dyn RemoteStore>, local: Database) -> Self {
        Self {
            remote,
            local: Mutex::new(local),
        }
    }

    /// Save a card to both tiers.
    ///
    /// The card is normalized first and written to the local cache
    /// unconditionally; the remote attempt decides the reported status. From
    /// the caller's perspective the card is saved either way.
    pub async fn save_card(&self, card: Card) -> SaveReceipt {
        let card = normalize_card(prepare(card));

        self.write_local(&card);

        let status = match self.remote.save(&card).await {
            Ok(()) => SaveStatus::Remote,
            Err(err) => {
                tracing::warn!(
                    card_id = %card.id,
                    error = %err,
                    "remote save failed, keeping local copy"
                );
                SaveStatus::LocalOnly
            }
        };

        SaveReceipt { card, status }
    }

    /// All cards visible to the current actor, normalized.
    pub async fn get_cards(&self) -> Vec<Card> {
        let remote = match self.remote.fetch_all().await {
            Ok(cards) => Some(cards),
            Err(err) => {
                tracing::warn!(error = %err, "remote list indeterminate, using local cache");
                None
            }
        };
        let local = self.read_local_all();

        let (cards, source) = policy::choose_list(remote, local);
        tracing::debug!(count = cards.len(), ?source, "card list resolved");
        cards.into_iter().map(normalize_card).collect()
    }

    /// A single card, from whichever tier has it.
    ///
    /// A hit served from the local cache is pushed back to the remote store
    /// once, best-effort; a failed push is ignored.
    pub async fn get_card_by_id(&self, id: &str) -> Option<Card> {
        let remote = match self.remote.fetch_by_id(id).await {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(card_id = %id, error = %err, "remote lookup indeterminate");
                None
            }
        };
        let local = self.read_local_one(id);

        let (card, source) = policy::choose_one(remote, local)?;
        let card = normalize_card(card);

        if source == ReadSource::LocalFallback {
            if let Err(err) = self.remote.save(&card).await {
                tracing::debug!(card_id = %card.id, error = %err, "sync-on-read push failed");
            }
        }

        Some(card)
    }

    /// Delete from both tiers; `true` when either backend confirms.
    pub async fn delete_card(&self, id: &str) -> bool {
        let local_deleted = self.delete_local(id);

        let remote_deleted = match self.remote.delete(id).await {
            Ok(deleted) => deleted,
            Err(err) => {
                tracing::warn!(card_id = %id, error = %err, "remote delete failed");
                false
            }
        };

        local_deleted || remote_deleted
    }

    /// Best-effort gate: a regular user keeps at most one card. Superadmins
    /// are exempt, and the backend remains the authority either way.
    pub async fn can_create_card(&self, actor: Option<&CurrentUser>) -> bool {
        if actor.is_some_and(CurrentUser::is_superadmin) {
            return true;
        }
        self.get_cards().await.is_empty()
    }

    // ------------------------------------------------------------------
    // Local tier helpers
    // ------------------------------------------------------------------

    fn write_local(&self, card: &Card) {
        let Ok(db) = self.local.lock() else { return };
        if let Err(err) = db.upsert_card(card) {
            if err.is_unavailable() {
                tracing::warn!(
                    card_id = %card.id,
                    error = %err,
                    "local cache unavailable, skipping backup write"
                );
            } else {
                tracing::error!(card_id = %card.id, error = %err, "local cache write failed");
            }
        }
    }

    fn read_local_all(&self) -> Vec<Card> {
        let Ok(db) = self.local.lock() else {
            return Vec::new();
        };
        db.list_cards().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "local cache list failed");
            Vec::new()
        })
    }

    fn read_local_one(&self, id: &str) -> Option<Card> {
        let db = self.local.lock().ok()?;
        match db.get_card(id) {
            Ok(card) => Some(card),
            Err(StoreError::NotFound) => None,
            Err(err) => {
                tracing::warn!(card_id = %id, error = %err, "local cache read failed");
                None
            }
        }
    }

    fn delete_local(&self, id: &str) -> bool {
        let Ok(db) = self.local.lock() else {
            return false;
        };
        match db.delete_card(id) {
            Ok(deleted) => deleted,
            Err(err) => {
                tracing::warn!(card_id = %id, error = %err, "local cache delete failed");
                false
            }
        }
    }
}

/// Fill identity defaults on a freshly submitted card and scrub undecodable
/// inline media payloads. Everything else is the normalizer's job.
fn prepare(mut card: Card) -> Card {
    if card.id.is_empty() {
        card.id = uuid::Uuid::new_v4().to_string();
    }
    if card.user_id.is_empty() {
        card.user_id = ANONYMOUS_USER.to_string();
    }
    if card.created_at == 0 {
        card.created_at = chrono::Utc::now().timestamp_millis();
    }
    card.avatar_url = sanitize_media(card.avatar_url.take());
    card.logo_url = sanitize_media(card.logo_url.take());
    card
}
