//! Precedence rules between the remote backend and the local cache.
//!
//! The remote store is authoritative whenever it can answer; the local cache
//! is a backup. The decisions live here, as plain functions over the two
//! results, so the fallback behavior is declared once instead of re-derived
//! at every call site.

use cardlink_shared::Card;

/// Where a read result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadSource {
    Remote,
    LocalFallback,
}

/// Pick the card list to serve.
///
/// * Remote indeterminate (`None` here) -> local, whatever it holds.
/// * Remote determinate and non-empty -> remote.
/// * Remote determinate but empty -> prefer a non-empty local cache; the
///   user may hold cards that never synced.
pub fn choose_list(remote: Option<Vec<Card>>, local: Vec<Card>) -> (Vec<Card>, ReadSource) {
    match remote {
        None => (local, ReadSource::LocalFallback),
        Some(cards) if cards.is_empty() && !local.is_empty() => {
            (local, ReadSource::LocalFallback)
        }
        Some(cards) => (cards, ReadSource::Remote),
    }
}

/// Pick a single card; the remote copy wins when both tiers have one.
pub fn choose_one(remote: Option<Card>, local: Option<Card>) -> Option<(Card, ReadSource)> {
    match remote {
        Some(card) => Some((card, ReadSource::Remote)),
        None => local.map(|card| (card, ReadSource::LocalFallback)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> Card {
        let mut card = Card::new("Ana", None);
        card.id = id.to_string();
        card
    }

    #[test]
    fn indeterminate_remote_falls_back_to_local() {
        let (cards, source) = choose_list(None, vec![card("local")]);
        assert_eq!(cards[0].id, "local");
        assert_eq!(source, ReadSource::LocalFallback);

        let (cards, source) = choose_list(None, Vec::new());
        assert!(cards.is_empty());
        assert_eq!(source, ReadSource::LocalFallback);
    }

    #[test]
    fn determinate_remote_wins_when_non_empty() {
        let (cards, source) = choose_list(Some(vec![card("remote")]), vec![card("local")]);
        assert_eq!(cards[0].id, "remote");
        assert_eq!(source, ReadSource::Remote);
    }

    #[test]
    fn empty_remote_prefers_non_empty_local() {
        let (cards, source) = choose_list(Some(Vec::new()), vec![card("local")]);
        assert_eq!(cards[0].id, "local");
        assert_eq!(source, ReadSource::LocalFallback);

        // Both empty stays a determined empty answer.
        let (cards, source) = choose_list(Some(Vec::new()), Vec::new());
        assert!(cards.is_empty());
        assert_eq!(source, ReadSource::Remote);
    }

    #[test]
    fn single_get_prefers_remote_copy() {
        let (picked, source) = choose_one(Some(card("c")), Some(card("c"))).unwrap();
        assert_eq!(picked.id, "c");
        assert_eq!(source, ReadSource::Remote);

        let (_, source) = choose_one(None, Some(card("c"))).unwrap();
        assert_eq!(source, ReadSource::LocalFallback);

        assert!(choose_one(None, None).is_none());
    }
}
