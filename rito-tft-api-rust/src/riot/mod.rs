//! Client side of the Riot Games APIs: account-v1 and tft-match-v1.

pub mod client;
pub mod error;
pub mod models;

#[cfg(test)]
pub mod fake;

pub use client::{RiotClient, RiotConfig};
pub use error::{RiotError, Stage};
pub use models::{Account, Match, MatchId};

/// The three upstream calls the service is built on.
///
/// Every call is a single request: no retries, no caching. Implementations
/// report non-success statuses as [`RiotError::Upstream`] tagged with the
/// matching [`Stage`].
pub trait RiotApi {
    async fn account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Account, RiotError>;

    /// Match IDs of a player, most recent first.
    async fn match_ids_by_puuid(
        &self,
        puuid: &str,
        start: u32,
        count: u32,
    ) -> Result<Vec<MatchId>, RiotError>;

    async fn match_by_id(&self, match_id: &str) -> Result<Match, RiotError>;
}
