//! The remote storage operation set.

use async_trait::async_trait;
use cardlink_shared::Card;

use crate::error::Result;

/// Operations the remote backend supports.
///
/// `fetch_all` distinguishes "determined, zero cards" (`Ok(vec![])`) from
/// "could not determine" (`Err(_)`); the persistence layer only falls back to
/// the local cache wholesale in the second case.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Upsert one card. Requires a session; non-owners are rejected unless
    /// the actor holds the superadmin role.
    async fn save(&self, card: &Card) -> Result<()>;

    /// All cards the current actor may see: their own, or every card in the
    /// system for a superadmin. Scoping happens server-side.
    async fn fetch_all(&self) -> Result<Vec<Card>>;

    /// A single card by id, `Ok(None)` when it does not exist.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Card>>;

    /// Delete by id; `Ok(true)` when a row was removed.
    async fn delete(&self, id: &str) -> Result<bool>;
}
