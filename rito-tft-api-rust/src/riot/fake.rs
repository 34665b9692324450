//! In-memory [`RiotApi`] used by the tests.

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use super::{Account, Match, MatchId, RiotApi, RiotError, Stage, models::format_riot_id};

pub enum FakeDetail {
    Found(Match),
    Status(u16),
    Malformed,
}

#[derive(Default)]
pub struct FakeRiot {
    accounts: HashMap<String, Account>,
    account_status: Option<u16>,
    match_ids: Vec<MatchId>,
    match_list_status: Option<u16>,
    details: HashMap<MatchId, FakeDetail>,
    pub account_calls: AtomicUsize,
    pub match_list_calls: AtomicUsize,
    detail_calls: Mutex<Vec<MatchId>>,
    list_requests: Mutex<Vec<(String, u32, u32)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

pub fn sample_match(match_id: &str, game_type: &str) -> Match {
    serde_json::from_value(serde_json::json!({
        "metadata": {
            "data_version": "6",
            "match_id": match_id,
            "participants": ["P1", "P2"]
        },
        "info": {
            "tft_game_type": game_type,
            "participants": [
                {"puuid": "P1", "placement": 1, "units": [], "traits": []},
                {"puuid": "P2", "placement": 5, "units": [], "traits": []}
            ]
        }
    }))
    .unwrap()
}

pub fn ids(prefix: &str, count: usize) -> Vec<MatchId> {
    (1..=count).map(|i| format!("{prefix}{i}")).collect()
}

impl FakeRiot {
    pub fn with_account(mut self, game_name: &str, tag_line: &str, puuid: &str) -> Self {
        self.accounts.insert(
            format_riot_id(game_name, tag_line),
            Account {
                puuid: puuid.to_string(),
                game_name: game_name.to_string(),
                tag_line: tag_line.to_string(),
            },
        );
        self
    }

    pub fn failing_account(mut self, status: u16) -> Self {
        self.account_status = Some(status);
        self
    }

    pub fn with_match_ids(mut self, ids: Vec<MatchId>) -> Self {
        self.match_ids = ids;
        self
    }

    pub fn failing_match_list(mut self, status: u16) -> Self {
        self.match_list_status = Some(status);
        self
    }

    pub fn with_match(mut self, match_id: &str, game_type: &str) -> Self {
        self.details.insert(
            match_id.to_string(),
            FakeDetail::Found(sample_match(match_id, game_type)),
        );
        self
    }

    pub fn with_detail(mut self, match_id: &str, detail: FakeDetail) -> Self {
        self.details.insert(match_id.to_string(), detail);
        self
    }

    pub fn detail_calls(&self) -> Vec<MatchId> {
        self.detail_calls.lock().unwrap().clone()
    }

    pub fn list_requests(&self) -> Vec<(String, u32, u32)> {
        self.list_requests.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl RiotApi for FakeRiot {
    async fn account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Account, RiotError> {
        self.account_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.account_status {
            return Err(RiotError::Upstream {
                status,
                stage: Stage::Identity,
            });
        }
        self.accounts
            .get(&format_riot_id(game_name, tag_line))
            .cloned()
            .ok_or(RiotError::Upstream {
                status: 404,
                stage: Stage::Identity,
            })
    }

    async fn match_ids_by_puuid(
        &self,
        puuid: &str,
        start: u32,
        count: u32,
    ) -> Result<Vec<MatchId>, RiotError> {
        self.match_list_calls.fetch_add(1, Ordering::SeqCst);
        self.list_requests
            .lock()
            .unwrap()
            .push((puuid.to_string(), start, count));
        if let Some(status) = self.match_list_status {
            return Err(RiotError::Upstream {
                status,
                stage: Stage::MatchList,
            });
        }
        Ok(self
            .match_ids
            .iter()
            .skip(start as usize)
            .take(count as usize)
            .cloned()
            .collect())
    }

    async fn match_by_id(&self, match_id: &str) -> Result<Match, RiotError> {
        self.detail_calls.lock().unwrap().push(match_id.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.details.get(match_id) {
            Some(FakeDetail::Found(game)) => Ok(game.clone()),
            Some(FakeDetail::Status(status)) => Err(RiotError::Upstream {
                status: *status,
                stage: Stage::MatchDetail,
            }),
            Some(FakeDetail::Malformed) => Err(RiotError::MalformedResponse {
                stage: Stage::MatchDetail,
                source: serde_json::from_str::<Match>("{}").unwrap_err(),
            }),
            None => Err(RiotError::Upstream {
                status: 404,
                stage: Stage::MatchDetail,
            }),
        }
    }
}
