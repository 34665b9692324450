use crate::{
    riot::{RiotClient, RiotConfig},
    tft::double_up::DoubleUpSettings,
};

/// Shared by every worker through `web::Data`.
pub struct AppState<C> {
    pub riot: C,
    /// Match IDs returned by the match list route.
    pub match_list_count: u32,
    pub double_up: DoubleUpSettings,
}

impl AppState<RiotClient> {
    pub fn from_env(env: &env_handler::EnvSettings) -> Result<Self, anyhow::Error> {
        Ok(AppState {
            riot: RiotClient::new(RiotConfig::from(env))?,
            match_list_count: env.match_list_count,
            double_up: DoubleUpSettings::from(env),
        })
    }
}
