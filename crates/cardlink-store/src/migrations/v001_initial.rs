//! v001 -- Initial schema creation.
//!
//! Creates the single `cards` table. Link, theme and visibility sub-structures
//! are stored as JSON text columns.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS cards (
    id             TEXT PRIMARY KEY NOT NULL,   -- UUID v4
    user_id        TEXT NOT NULL,
    name           TEXT NOT NULL,
    job_title      TEXT,
    company        TEXT,
    email          TEXT,
    phone          TEXT,
    website        TEXT,
    address        TEXT,
    description    TEXT,
    avatar_url     TEXT,                        -- URL or inline data payload
    logo_url       TEXT,                        -- URL or inline data payload
    theme_colors   TEXT,                        -- JSON array of 3 colors
    links          TEXT NOT NULL DEFAULT '[]',  -- JSON array of link objects
    visible_fields TEXT,                        -- JSON object, field -> bool
    created_at     INTEGER NOT NULL             -- epoch millis
);

CREATE INDEX IF NOT EXISTS idx_cards_user_created
    ON cards(user_id, created_at DESC);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
