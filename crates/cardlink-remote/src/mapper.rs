//! Bidirectional mapping between [`Card`] and the remote `cards` row shape.
//!
//! The row schema predates the current model: `jobTitle` is stored as
//! `title`, the media fields as `photo` / `logo`, and links, theme and
//! visibility flags live in JSON columns. The theme column keeps both the
//! `colors` array and the legacy `background` / `text` / `accent` aliases so
//! older readers keep working.
//!
//! Both directions are total: malformed input is replaced with defaults,
//! never rejected. Rows without a visibility object reconstruct with no map
//! at all, which downstream normalization turns into "show everything".

use cardlink_shared::normalize::normalize_theme;
use cardlink_shared::visibility::coerce_visibility;
use cardlink_shared::{Card, Link, LinkType};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

/// A row of the remote `cards` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardRow {
    pub id: String,
    pub name: String,
    /// Job title; the column kept its historical name.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Avatar image, URL or inline payload.
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// JSON array of link objects.
    #[serde(default)]
    pub links: Option<Value>,
    /// JSON theme object: `{colors: [..]}` plus legacy named aliases.
    #[serde(default)]
    pub theme: Option<Value>,
    /// JSON visibility map, raw.
    #[serde(default)]
    pub visible_fields: Option<Value>,
    pub user_id: String,
    #[serde(default)]
    pub created_at: i64,
}

/// Convert a card into its row shape.
///
/// The flat `website` field is merged into the links column as a synthetic
/// `website`-typed entry when no such link exists yet; there is no further
/// deduplication. Owners that are not valid UUIDs (including the anonymous
/// sentinel) map to the all-zero UUID.
pub fn to_row(card: &Card) -> CardRow {
    let mut links = card.links.clone();
    if let Some(website) = card.website.as_deref().filter(|w| !w.is_empty()) {
        if card.link_of(LinkType::Website).is_none() {
            links.push(Link {
                id: Uuid::new_v4().to_string(),
                kind: LinkType::Website,
                url: website.to_string(),
                label: Some("Website".to_string()),
            });
        }
    }

    let colors = normalize_theme(card.theme_colors.clone());
    let theme = json!({
        "background": colors[0].as_str(),
        "text": colors[1].as_str(),
        "accent": colors[2].as_str(),
        "colors": colors,
    });

    let user_id = Uuid::parse_str(&card.user_id)
        .unwrap_or_else(|_| Uuid::nil())
        .to_string();

    CardRow {
        id: card.id.clone(),
        name: card.name.clone(),
        title: card.job_title.clone(),
        company: card.company.clone(),
        email: card.email.clone(),
        phone: card.phone.clone(),
        photo: card.avatar_url.clone(),
        logo: card.logo_url.clone(),
        description: card.description.clone(),
        links: Some(serde_json::to_value(&links).unwrap_or_else(|_| json!([]))),
        theme: Some(theme),
        visible_fields: card.visible_fields.clone().map(Value::Object),
        user_id,
        created_at: card.created_at,
    }
}

/// Convert a row back into the application card shape.
///
/// The flat `website` field is rebuilt from the first `website`-typed link.
/// `address` has no remote column and reconstructs as absent; it survives
/// only through the local cache.
pub fn from_row(row: &CardRow) -> Card {
    let links = parse_links(row.links.as_ref());
    let website = links
        .iter()
        .find(|l| l.kind == LinkType::Website)
        .map(|l| l.url.clone());

    let visible_fields = match row.visible_fields.as_ref() {
        Some(Value::Object(map)) => Some(coerce_visibility(Some(map))),
        _ => None,
    };

    Card {
        id: row.id.clone(),
        user_id: row.user_id.clone(),
        name: row.name.clone(),
        job_title: row.title.clone(),
        company: row.company.clone(),
        email: row.email.clone(),
        phone: row.phone.clone(),
        website,
        address: None,
        description: row.description.clone(),
        avatar_url: row.photo.clone(),
        logo_url: row.logo.clone(),
        theme_colors: Some(parse_theme(row.theme.as_ref())),
        links,
        visible_fields,
        created_at: row.created_at,
    }
}

/// Map the links JSON column into [`Link`] entries, one at a time so a single
/// malformed entry does not drop the rest. Entries without an id get a fresh
/// one from the model's serde default.
fn parse_links(raw: Option<&Value>) -> Vec<Link> {
    match raw {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| serde_json::from_value::<Link>(item.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Read a theme column: the `colors` array form wins, then the legacy named
/// aliases; anything else falls back to the default triple.
fn parse_theme(raw: Option<&Value>) -> Vec<String> {
    let Some(Value::Object(obj)) = raw else {
        return Card::default_theme();
    };

    if let Some(Value::Array(colors)) = obj.get("colors") {
        let parsed: Vec<String> = colors
            .iter()
            .filter_map(|c| c.as_str().map(str::to_owned))
            .collect();
        if parsed.len() == 3 {
            return parsed;
        }
    }

    let legacy: Vec<String> = ["background", "text", "accent"]
        .iter()
        .filter_map(|key| obj.get(*key).and_then(Value::as_str).map(str::to_owned))
        .collect();
    if legacy.len() == 3 {
        return legacy;
    }

    Card::default_theme()
}
