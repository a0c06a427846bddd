//! Card normalization, applied at every storage boundary.
//!
//! Whatever the origin of a card (remote row, local cache, freshly created),
//! it passes through [`normalize_card`] before any other code sees it. The
//! function is pure and idempotent; it repairs, never rejects.

use crate::card::Card;
use crate::visibility::coerce_visibility;

/// Return a card whose `visible_fields` holds exactly the ten known keys as
/// strict booleans and whose `theme_colors` is a well-formed triple.
pub fn normalize_card(mut card: Card) -> Card {
    let coerced = coerce_visibility(card.visible_fields.as_ref());
    card.visible_fields = Some(coerced);
    card.theme_colors = Some(normalize_theme(card.theme_colors.take()));
    card
}

/// A theme is valid only as an exact triple. Anything else is replaced
/// wholesale with the default, never merged entry by entry.
pub fn normalize_theme(colors: Option<Vec<String>>) -> Vec<String> {
    match colors {
        Some(colors) if colors.len() == 3 => colors,
        Some(colors) => {
            tracing::debug!(len = colors.len(), "replacing malformed theme with default triple");
            Card::default_theme()
        }
        None => Card::default_theme(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::DEFAULT_THEME_COLORS;
    use crate::visibility::CardField;
    use serde_json::{json, Value};

    fn card_without_presentation() -> Card {
        let mut card = Card::new("Ana", None);
        card.theme_colors = None;
        card.visible_fields = None;
        card
    }

    #[test]
    fn fills_visibility_and_theme() {
        let card = normalize_card(card_without_presentation());

        let fields = card.visible_fields.expect("visibility map");
        assert_eq!(fields.len(), 10);
        assert!(fields.values().all(|v| v == &Value::Bool(true)));
        assert_eq!(card.theme_colors.unwrap(), Card::default_theme());
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut card = card_without_presentation();
        card.visible_fields = json!({"name": "yes", "email": true})
            .as_object()
            .cloned();
        card.theme_colors = Some(vec!["#123456".into()]);

        let once = normalize_card(card);
        let twice = normalize_card(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn malformed_visibility_is_repaired() {
        let mut card = card_without_presentation();
        card.visible_fields = json!({"name": "yes", "email": true})
            .as_object()
            .cloned();

        let fields = normalize_card(card).visible_fields.unwrap();
        assert_eq!(fields["name"], Value::Bool(false));
        assert_eq!(fields["email"], Value::Bool(true));
        assert_eq!(fields["avatarUrl"], Value::Bool(true));
        assert_eq!(fields["logoUrl"], Value::Bool(true));
        for field in [
            CardField::JobTitle,
            CardField::Company,
            CardField::Phone,
            CardField::Website,
            CardField::Address,
            CardField::Description,
        ] {
            assert_eq!(fields[field.key()], Value::Bool(false), "{}", field.key());
        }
    }

    #[test]
    fn wrong_length_theme_is_replaced_wholesale() {
        for bad in [vec![], vec!["#111111".to_string()], vec!["#1".into(), "#2".into(), "#3".into(), "#4".into()]] {
            let mut card = card_without_presentation();
            card.theme_colors = Some(bad);
            let colors = normalize_card(card).theme_colors.unwrap();
            assert_eq!(colors, DEFAULT_THEME_COLORS.map(String::from).to_vec());
        }
    }

    #[test]
    fn valid_theme_is_untouched() {
        let mut card = card_without_presentation();
        card.theme_colors = Some(vec!["#111".into(), "#222".into(), "#333".into()]);
        let colors = normalize_card(card).theme_colors.unwrap();
        assert_eq!(colors, vec!["#111", "#222", "#333"]);
    }
}
