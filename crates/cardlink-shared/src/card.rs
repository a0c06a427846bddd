//! Domain model structs shared by every cardlink crate.
//!
//! Everything derives `Serialize` / `Deserialize` with camelCase field names
//! so the structs can be handed directly to the UI layer as JSON.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Default theme triple: background, text, accent.
pub const DEFAULT_THEME_COLORS: [&str; 3] = ["#000000", "#ffffff", "#dd8d0a"];

/// Owner sentinel for cards created without a session.
pub const ANONYMOUS_USER: &str = "anonymous";

/// Kind of a social / contact link attached to a card.
///
/// Unknown kinds coming from older payloads deserialize as [`LinkType::Other`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Website,
    Linkedin,
    Facebook,
    Twitter,
    Instagram,
    Whatsapp,
    Calendar,
    #[serde(other)]
    Other,
}

/// A single link shown on a card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Stable identifier; generated when an incoming entry has none.
    #[serde(default = "new_link_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LinkType,
    pub url: String,
    /// Display label; older payloads call this `title`.
    #[serde(default, alias = "title", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn new_link_id() -> String {
    Uuid::new_v4().to_string()
}

/// A digital business card.
///
/// `theme_colors` and `visible_fields` are carried raw: whatever shape the
/// origin produced is accepted, and [`crate::normalize::normalize_card`]
/// repairs both before the card is used anywhere else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Client-generated UUID string, immutable after creation.
    pub id: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// The only required contact field.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Remote URL or inline `data:image/...;base64,` payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Remote URL or inline `data:image/...;base64,` payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Exactly three entries (background, text, accent) once normalized.
    #[serde(default)]
    pub theme_colors: Option<Vec<String>>,
    #[serde(default)]
    pub links: Vec<Link>,
    /// Field name -> visibility flag, raw as received.
    #[serde(default)]
    pub visible_fields: Option<Map<String, Value>>,
    /// Epoch milliseconds, set once at creation.
    #[serde(default)]
    pub created_at: i64,
}

fn default_user_id() -> String {
    ANONYMOUS_USER.to_string()
}

impl Card {
    /// Create a fresh card owned by `user_id`, or by the anonymous sentinel
    /// when no session exists.
    pub fn new(name: impl Into<String>, user_id: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.map(str::to_owned).unwrap_or_else(default_user_id),
            name: name.into(),
            job_title: None,
            company: None,
            email: None,
            phone: None,
            website: None,
            address: None,
            description: None,
            avatar_url: None,
            logo_url: None,
            theme_colors: Some(Self::default_theme()),
            links: Vec::new(),
            visible_fields: None,
            created_at: Utc::now().timestamp_millis(),
        }
    }

    /// The default theme triple as owned strings.
    pub fn default_theme() -> Vec<String> {
        DEFAULT_THEME_COLORS.iter().map(|c| c.to_string()).collect()
    }

    /// First link of the given kind, if any.
    pub fn link_of(&self, kind: LinkType) -> Option<&Link> {
        self.links.iter().find(|l| l.kind == kind)
    }

    /// Whether a field should be rendered. Reads the raw map leniently: only
    /// a strict `false` hides a field, so un-normalized cards err towards
    /// showing content.
    pub fn is_visible(&self, field: crate::visibility::CardField) -> bool {
        match &self.visible_fields {
            None => true,
            Some(map) => map.get(field.key()) != Some(&Value::Bool(false)),
        }
    }
}
