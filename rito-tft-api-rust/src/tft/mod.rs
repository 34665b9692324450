//! Lookups shared by the routes: Riot ID to account, account to match IDs.

pub mod double_up;

use crate::riot::{Account, MatchId, RiotApi, RiotError};

pub async fn resolve_account<C: RiotApi>(
    riot: &C,
    game_name: &str,
    tag_line: &str,
) -> Result<Account, RiotError> {
    if game_name.trim().is_empty() || tag_line.trim().is_empty() {
        return Err(RiotError::InvalidInput(String::from(
            "Name and tagline are required",
        )));
    }

    riot.account_by_riot_id(game_name, tag_line)
        .await
        .inspect_err(|e| log::error!("Resolving {game_name}#{tag_line} failed: {e}"))
}

pub async fn list_match_ids<C: RiotApi>(
    riot: &C,
    puuid: &str,
    start: u32,
    count: u32,
) -> Result<Vec<MatchId>, RiotError> {
    if puuid.trim().is_empty() {
        return Err(RiotError::InvalidInput(String::from("PUUID is required")));
    }

    riot.match_ids_by_puuid(puuid, start, count)
        .await
        .inspect_err(|e| log::error!("Listing matches of {puuid} failed: {e}"))
}
