use serde::{Deserialize, Serialize};

/// `tft_game_type` of Double Up games.
pub const PAIRS_GAME_TYPE: &str = "pairs";

pub type MatchId = String;

/// Response of the account-v1 `by-riot-id` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
}

impl Account {
    pub fn riot_id(&self) -> String {
        format_riot_id(&self.game_name, &self.tag_line)
    }
}

pub fn format_riot_id(game_name: &str, tag_line: &str) -> String {
    format!("{game_name}#{tag_line}")
}

/// A tft-match-v1 match. Only the fields needed for filtering are typed,
/// everything else is kept as raw JSON so it can be sent back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

impl Match {
    pub fn match_id(&self) -> &str {
        &self.metadata.match_id
    }

    pub fn game_type(&self) -> &str {
        self.info
            .tft_game_type
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
    }

    pub fn is_double_up(&self) -> bool {
        self.game_type() == PAIRS_GAME_TYPE
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchMetadata {
    pub match_id: MatchId,
    /// PUUIDs, in the same order as `info.participants`.
    pub participants: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInfo {
    /// Raw value, so an explicit `null` is sent back as `null` and a missing
    /// field stays missing.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub tft_game_type: Option<serde_json::Value>,
    pub participants: Vec<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

/// Human readable name of a `tft_game_type`.
pub fn game_type_label(game_type: &str) -> String {
    match game_type {
        "" => String::from("Unknown"),
        "standard" => String::from("Ranked"),
        "normal" => String::from("Normal"),
        PAIRS_GAME_TYPE => String::from("Double Up"),
        "turbo" => String::from("Hyper Roll"),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::from("Unknown"),
            }
        }
    }
}
