//! Compact, versioned card data strings for URL query parameters and local persistence.
//!
//! Format: `v{schema}.` followed by URL-safe unpadded base64 of deflate-compressed JSON.

use std::io::{Read as _, Write as _};

use anyhow::Context as _;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::card::era::set_legacy_mode;
use crate::card::model::{CARD_SCHEMA_VERSION, Card};
use crate::foundation::error::{CardError, CardResult};

/// How strictly imported card data is checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeMode {
    /// Any malformed, unknown or missing field is an error. Never yields a partial card.
    Strict,
    /// Every decodable field is laid over the default card; the rest is dropped.
    Lenient,
}

/// Encode a card into a compact data string. Cards that fail [`Card::validate`] are rejected
/// so every encoded string decodes strictly.
pub fn encode_card(card: &Card) -> CardResult<String> {
    card.validate()?;
    let json = serde_json::to_vec(card).context("serialize card json")?;
    let mut enc = flate2::write::DeflateEncoder::new(Vec::new(), flate2::Compression::best());
    enc.write_all(&json).context("deflate card json")?;
    let packed = enc.finish().context("finish deflate stream")?;
    Ok(format!(
        "v{CARD_SCHEMA_VERSION}.{}",
        URL_SAFE_NO_PAD.encode(packed)
    ))
}

/// Decode a card data string.
pub fn decode_card(data: &str, mode: DecodeMode) -> CardResult<Card> {
    let value = decode_value(data.trim(), mode)?;
    match mode {
        DecodeMode::Strict => decode_strict(value),
        DecodeMode::Lenient => Ok(decode_lenient(value)),
    }
}

fn decode_value(data: &str, mode: DecodeMode) -> CardResult<serde_json::Value> {
    if data.starts_with('{') {
        if mode == DecodeMode::Strict {
            return Err(CardError::decode("card data is missing a version prefix"));
        }
        return serde_json::from_str(data).map_err(|e| CardError::decode(e.to_string()));
    }

    let (version, payload) = data
        .strip_prefix('v')
        .and_then(|rest| rest.split_once('.'))
        .ok_or_else(|| CardError::decode("card data is missing a version prefix"))?;
    let version: u32 = version
        .parse()
        .map_err(|_| CardError::decode(format!("invalid card data version '{version}'")))?;
    if version != CARD_SCHEMA_VERSION {
        return Err(CardError::decode(format!(
            "unsupported card data version {version}"
        )));
    }

    let packed = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| CardError::decode(format!("invalid base64 payload: {e}")))?;
    let mut json = Vec::new();
    flate2::read::DeflateDecoder::new(packed.as_slice())
        .read_to_end(&mut json)
        .map_err(|e| CardError::decode(format!("invalid deflate payload: {e}")))?;
    serde_json::from_slice(&json).map_err(|e| CardError::decode(e.to_string()))
}

fn default_fields() -> serde_json::Map<String, serde_json::Value> {
    match serde_json::to_value(Card::default()) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    }
}

fn decode_strict(value: serde_json::Value) -> CardResult<Card> {
    let serde_json::Value::Object(obj) = value else {
        return Err(CardError::decode("card data must be a JSON object"));
    };
    let expected = default_fields();
    if let Some(extra) = obj.keys().find(|k| !expected.contains_key(*k)) {
        return Err(CardError::decode(format!("unknown card field '{extra}'")));
    }
    if let Some(missing) = expected.keys().find(|k| !obj.contains_key(*k)) {
        return Err(CardError::decode(format!("missing card field '{missing}'")));
    }
    let card: Card = serde_json::from_value(serde_json::Value::Object(obj))
        .map_err(|e| CardError::decode(e.to_string()))?;
    card.validate()
        .map_err(|e| CardError::decode(e.to_string()))?;
    Ok(card)
}

fn decode_lenient(value: serde_json::Value) -> Card {
    let mut merged = default_fields();
    if let serde_json::Value::Object(obj) = value {
        for (key, field) in obj {
            if key == "version" || !merged.contains_key(&key) {
                continue;
            }
            let previous = merged.insert(key.clone(), field);
            let accepted =
                serde_json::from_value::<Card>(serde_json::Value::Object(merged.clone())).is_ok();
            if !accepted {
                tracing::debug!(field = %key, "dropping undecodable card field");
                if let Some(prev) = previous {
                    merged.insert(key, prev);
                }
            }
        }
    }

    let card = serde_json::from_value::<Card>(serde_json::Value::Object(merged))
        .unwrap_or_default();
    let mut card = set_legacy_mode(&card, card.is_legacy_card);
    if !card.picture_crop.is_valid() {
        card.picture_crop = Default::default();
    }
    card
}

/// Persisted card data plus the application version that wrote it.
#[derive(Clone, Debug)]
pub struct StoredCard<'a> {
    pub app_version: &'a str,
    pub data: &'a str,
}

/// Pick the card to start editing with.
///
/// URL data wins and is decoded strictly. Stored data is only trusted when written by the same
/// application version. Any failure falls back to the default card.
pub fn restore_card(
    url_data: Option<&str>,
    stored: Option<StoredCard<'_>>,
    app_version: &str,
) -> Card {
    let restored = match (url_data, stored) {
        (Some(data), _) => decode_card(data, DecodeMode::Strict).map(Some),
        (None, Some(s)) if s.app_version == app_version => {
            decode_card(s.data, DecodeMode::Lenient).map(Some)
        }
        _ => Ok(None),
    };
    match restored {
        Ok(Some(card)) => card,
        Ok(None) => Card::default(),
        Err(e) => {
            tracing::warn!(error = %e, "could not restore card data, using default card");
            Card::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/codec.rs"]
mod tests;
