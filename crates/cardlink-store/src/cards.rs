//! CRUD operations for [`Card`] records.
//!
//! The JSON columns are read leniently: a malformed column never fails a
//! read, it just falls back to an empty / absent value and the normalization
//! layer repairs the rest.

use cardlink_shared::Card;
use rusqlite::params;
use serde_json::{Map, Value};

use crate::database::Database;
use crate::error::{Result, StoreError};

impl Database {
    // ------------------------------------------------------------------
    // Create / update
    // ------------------------------------------------------------------

    /// Insert or replace a card, keyed by id.
    pub fn upsert_card(&self, card: &Card) -> Result<()> {
        let theme_json = card
            .theme_colors
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let links_json = serde_json::to_string(&card.links)?;
        let visible_json = card
            .visible_fields
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        self.conn().execute(
            "INSERT OR REPLACE INTO cards
             (id, user_id, name, job_title, company, email, phone, website,
              address, description, avatar_url, logo_url, theme_colors, links,
              visible_fields, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
            params![
                card.id,
                card.user_id,
                card.name,
                card.job_title,
                card.company,
                card.email,
                card.phone,
                card.website,
                card.address,
                card.description,
                card.avatar_url,
                card.logo_url,
                theme_json,
                links_json,
                visible_json,
                card.created_at,
            ],
        )?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// Fetch a single card by id.
    pub fn get_card(&self, id: &str) -> Result<Card> {
        self.conn()
            .query_row(
                &format!("SELECT {COLUMNS} FROM cards WHERE id = ?1"),
                params![id],
                row_to_card,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
                other => StoreError::Sqlite(other),
            })
    }

    /// List all cards, newest first.
    pub fn list_cards(&self) -> Result<Vec<Card>> {
        let mut stmt = self
            .conn()
            .prepare(&format!("SELECT {COLUMNS} FROM cards ORDER BY created_at DESC"))?;

        let rows = stmt.query_map([], row_to_card)?;

        let mut cards = Vec::new();
        for row in rows {
            cards.push(row?);
        }
        Ok(cards)
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Delete a card by id. Returns `true` if a row was deleted.
    pub fn delete_card(&self, id: &str) -> Result<bool> {
        let affected = self
            .conn()
            .execute("DELETE FROM cards WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const COLUMNS: &str = "id, user_id, name, job_title, company, email, phone, website, \
     address, description, avatar_url, logo_url, theme_colors, links, \
     visible_fields, created_at";

/// Map a `rusqlite::Row` to a [`Card`].
fn row_to_card(row: &rusqlite::Row<'_>) -> rusqlite::Result<Card> {
    let theme_json: Option<String> = row.get(12)?;
    let links_json: Option<String> = row.get(13)?;
    let visible_json: Option<String> = row.get(14)?;

    let theme_colors = theme_json.and_then(|s| serde_json::from_str::<Vec<String>>(&s).ok());
    let links = links_json
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default();
    let visible_fields =
        visible_json.and_then(|s| serde_json::from_str::<Map<String, Value>>(&s).ok());

    Ok(Card {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        job_title: row.get(3)?,
        company: row.get(4)?,
        email: row.get(5)?,
        phone: row.get(6)?,
        website: row.get(7)?,
        address: row.get(8)?,
        description: row.get(9)?,
        avatar_url: row.get(10)?,
        logo_url: row.get(11)?,
        theme_colors,
        links,
        visible_fields,
        created_at: row.get(15)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardlink_shared::{Link, LinkType};
    use serde_json::json;

    fn open_test_db() -> (Database, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("cards.db")).unwrap();
        (db, dir)
    }

    fn sample_card(id: &str, created_at: i64) -> Card {
        let mut card = Card::new("Ana", Some("u-1"));
        card.id = id.to_string();
        card.created_at = created_at;
        card.job_title = Some("Engineer".into());
        card.address = Some("12 Main St".into());
        card.links = vec![Link {
            id: "l-1".into(),
            kind: LinkType::Linkedin,
            url: "https://l.in/ana".into(),
            label: Some("LinkedIn".into()),
        }];
        card.visible_fields = json!({"name": true, "email": false}).as_object().cloned();
        card
    }

    #[test]
    fn upsert_and_get_round_trip() {
        let (db, _dir) = open_test_db();
        let card = sample_card("c-1", 1_700_000_000_000);

        db.upsert_card(&card).unwrap();
        let loaded = db.get_card("c-1").unwrap();

        assert_eq!(loaded, card);
    }

    #[test]
    fn upsert_replaces_by_id() {
        let (db, _dir) = open_test_db();
        let mut card = sample_card("c-1", 1);
        db.upsert_card(&card).unwrap();

        card.name = "Ana Updated".into();
        db.upsert_card(&card).unwrap();

        assert_eq!(db.list_cards().unwrap().len(), 1);
        assert_eq!(db.get_card("c-1").unwrap().name, "Ana Updated");
    }

    #[test]
    fn list_is_newest_first() {
        let (db, _dir) = open_test_db();
        db.upsert_card(&sample_card("old", 100)).unwrap();
        db.upsert_card(&sample_card("new", 200)).unwrap();

        let ids: Vec<String> = db.list_cards().unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[test]
    fn get_missing_is_not_found() {
        let (db, _dir) = open_test_db();
        assert!(matches!(db.get_card("nope"), Err(StoreError::NotFound)));
    }

    #[test]
    fn delete_reports_whether_a_row_went_away() {
        let (db, _dir) = open_test_db();
        db.upsert_card(&sample_card("c-1", 1)).unwrap();

        assert!(db.delete_card("c-1").unwrap());
        assert!(!db.delete_card("c-1").unwrap());
    }

    #[test]
    fn malformed_json_columns_read_as_absent() {
        let (db, _dir) = open_test_db();
        db.upsert_card(&sample_card("c-1", 1)).unwrap();
        db.conn()
            .execute(
                "UPDATE cards SET links = 'not json', theme_colors = '{', visible_fields = '[1]'
                 WHERE id = 'c-1'",
                [],
            )
            .unwrap();

        let card = db.get_card("c-1").unwrap();
        assert!(card.links.is_empty());
        assert!(card.theme_colors.is_none());
        assert!(card.visible_fields.is_none());
    }
}
