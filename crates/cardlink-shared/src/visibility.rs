//! Field-level visibility flags.
//!
//! Every card carries a map from field name to a boolean flag deciding
//! whether that field is rendered on the public card. The map can arrive
//! with missing keys, extra keys, or non-boolean values; [`coerce_visibility`]
//! is the single place where it is repaired.

use serde_json::{Map, Value};

/// The ten card fields that carry a visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Name,
    JobTitle,
    Company,
    Email,
    Phone,
    Website,
    Address,
    Description,
    AvatarUrl,
    LogoUrl,
}

impl CardField {
    /// Every visibility key, in canonical order.
    pub const ALL: [CardField; 10] = [
        CardField::Name,
        CardField::JobTitle,
        CardField::Company,
        CardField::Email,
        CardField::Phone,
        CardField::Website,
        CardField::Address,
        CardField::Description,
        CardField::AvatarUrl,
        CardField::LogoUrl,
    ];

    /// The JSON key used in `visibleFields` maps.
    pub const fn key(self) -> &'static str {
        match self {
            CardField::Name => "name",
            CardField::JobTitle => "jobTitle",
            CardField::Company => "company",
            CardField::Email => "email",
            CardField::Phone => "phone",
            CardField::Website => "website",
            CardField::Address => "address",
            CardField::Description => "description",
            CardField::AvatarUrl => "avatarUrl",
            CardField::LogoUrl => "logoUrl",
        }
    }

    /// Flag used when the key is absent from an otherwise present map.
    /// Media fields default to visible; the renderer skips them anyway when
    /// there is no content.
    pub const fn default_flag(self) -> bool {
        matches!(self, CardField::AvatarUrl | CardField::LogoUrl)
    }
}

/// Coerce a raw visibility map into the canonical ten-key boolean form.
///
/// * `None` short-circuits to all-true: a card that never chose anything
///   shows everything.
/// * A present key counts only when it is strictly JSON `true`; `false`,
///   strings, numbers and nulls all read as hidden.
/// * Absent keys take the per-field default from [`CardField::default_flag`].
/// * Unknown keys are dropped.
///
/// The result always holds exactly ten boolean entries, which makes the
/// function idempotent.
pub fn coerce_visibility(raw: Option<&Map<String, Value>>) -> Map<String, Value> {
    let mut out = Map::new();
    match raw {
        None => {
            for field in CardField::ALL {
                out.insert(field.key().to_string(), Value::Bool(true));
            }
        }
        Some(map) => {
            for field in CardField::ALL {
                let flag = match map.get(field.key()) {
                    Some(value) => value == &Value::Bool(true),
                    None => field.default_flag(),
                };
                out.insert(field.key().to_string(), Value::Bool(flag));
            }
        }
    }
    out
}
