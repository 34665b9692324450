use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

use super::{Account, Match, MatchId, RiotApi, RiotError, Stage};

const ACCOUNT_BY_RIOT_ID_PATH: [&str; 5] = ["riot", "account", "v1", "accounts", "by-riot-id"];
const TFT_MATCHES_PATH: [&str; 4] = ["tft", "match", "v1", "matches"];

#[derive(Debug, Clone)]
pub struct RiotConfig {
    pub api_key: String,
    /// Regional routing host, e.g. `https://europe.api.riotgames.com`.
    pub base_url: String,
}

impl From<&env_handler::EnvSettings> for RiotConfig {
    fn from(env: &env_handler::EnvSettings) -> Self {
        Self {
            api_key: env.riot_api_key.clone(),
            base_url: env.riot_api_base_url.clone(),
        }
    }
}

#[derive(Clone)]
pub struct RiotClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl RiotClient {
    pub fn new(config: RiotConfig) -> Result<Self, anyhow::Error> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("{} cannot be used as a base URL", config.base_url);
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
        })
    }

    fn get(&self, url: Url) -> RequestBuilder {
        log::debug!("GET {url}");
        self.http.get(url)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        stage: Stage,
    ) -> Result<T, RiotError> {
        let response = request
            .query(&[("api_key", &self.api_key)])
            .send()
            .await
            .map_err(|source| RiotError::Transport { stage, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RiotError::Upstream {
                status: status.as_u16(),
                stage,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| RiotError::Transport { stage, source })?;
        serde_json::from_slice(&body).map_err(|source| RiotError::MalformedResponse { stage, source })
    }
}

/// Appends `segments` to `base`, percent-encoding each one.
fn endpoint_url<'a>(base: &Url, segments: impl IntoIterator<Item = &'a str>) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

impl RiotApi for RiotClient {
    async fn account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Account, RiotError> {
        let url = endpoint_url(
            &self.base_url,
            ACCOUNT_BY_RIOT_ID_PATH.into_iter().chain([game_name, tag_line]),
        );
        self.send_json(self.get(url), Stage::Identity).await
    }

    async fn match_ids_by_puuid(
        &self,
        puuid: &str,
        start: u32,
        count: u32,
    ) -> Result<Vec<MatchId>, RiotError> {
        let url = endpoint_url(
            &self.base_url,
            TFT_MATCHES_PATH.into_iter().chain(["by-puuid", puuid, "ids"]),
        );
        let request = self.get(url).query(&[("start", start), ("count", count)]);
        self.send_json(request, Stage::MatchList).await
    }

    async fn match_by_id(&self, match_id: &str) -> Result<Match, RiotError> {
        let url = endpoint_url(&self.base_url, TFT_MATCHES_PATH.into_iter().chain([match_id]));
        self.send_json(self.get(url), Stage::MatchDetail).await
    }
}
