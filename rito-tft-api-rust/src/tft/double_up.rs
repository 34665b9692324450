//! Double Up history of a player.
//!
//! The most recent match IDs are fetched in detail, a batch at a time. The
//! fetches of a batch run concurrently and are joined before the next batch
//! starts, with a fixed pause in between to stay under the upstream rate
//! limit. A match that cannot be fetched is logged and left out; only the
//! account and match list lookups can fail the whole request.

use std::time::Duration;

use futures::future::join_all;

use crate::riot::{Account, Match, RiotApi, RiotError, models::game_type_label};

#[derive(Debug, Clone)]
pub struct DoubleUpSettings {
    /// Match IDs requested from the match list endpoint.
    pub match_list_count: u32,
    /// Only this many of the most recent IDs are fetched in detail.
    pub recency_window: usize,
    pub batch_size: usize,
    pub batch_delay: Duration,
}

impl Default for DoubleUpSettings {
    fn default() -> Self {
        Self {
            match_list_count: 1000,
            recency_window: 50,
            batch_size: 10,
            batch_delay: Duration::from_millis(1000),
        }
    }
}

impl From<&env_handler::EnvSettings> for DoubleUpSettings {
    fn from(env: &env_handler::EnvSettings) -> Self {
        Self {
            match_list_count: env.double_up_match_list_count,
            recency_window: env.double_up_recency_window,
            batch_size: env.double_up_batch_size,
            batch_delay: Duration::from_millis(env.double_up_batch_delay),
        }
    }
}

#[derive(Debug, PartialEq, serde::Serialize)]
pub struct DoubleUpMatches {
    pub account: Account,
    pub matches: Vec<Match>,
}

pub async fn aggregate_double_up<C: RiotApi>(
    riot: &C,
    settings: &DoubleUpSettings,
    account: Account,
) -> Result<DoubleUpMatches, RiotError> {
    let mut match_ids =
        super::list_match_ids(riot, &account.puuid, 0, settings.match_list_count).await?;
    match_ids.truncate(settings.recency_window);

    let batches: Vec<_> = match_ids.chunks(settings.batch_size.max(1)).collect();
    let mut matches = Vec::new();

    for (index, batch) in batches.iter().enumerate() {
        log::debug!(
            "{}: fetching batch {}/{} ({} matches)",
            account.riot_id(),
            index + 1,
            batches.len(),
            batch.len()
        );

        let results = join_all(batch.iter().map(|id| fetch_double_up_match(riot, id))).await;
        matches.extend(results.into_iter().flatten());

        if index + 1 < batches.len() {
            tokio::time::sleep(settings.batch_delay).await;
        }
    }

    log::info!(
        "{}: {} Double Up matches in the last {} games",
        account.riot_id(),
        matches.len(),
        match_ids.len()
    );

    Ok(DoubleUpMatches { account, matches })
}

async fn fetch_double_up_match<C: RiotApi>(riot: &C, match_id: &str) -> Option<Match> {
    match riot.match_by_id(match_id).await {
        Ok(game) if game.is_double_up() => Some(game),
        Ok(game) => {
            log::trace!(
                "Skipping {}: {} game",
                game.match_id(),
                game_type_label(game.game_type())
            );
            None
        }
        Err(e) => {
            log::warn!("Error fetching match {match_id}: {e}");
            None
        }
    }
}
