use std::fmt;

/// Which upstream call an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Identity,
    MatchList,
    MatchDetail,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Identity => "identity",
            Self::MatchList => "match-list",
            Self::MatchDetail => "match-detail",
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum RiotError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{stage} request failed with status: {status}")]
    Upstream { status: u16, stage: Stage },
    #[error("{stage} response could not be decoded: {source}")]
    MalformedResponse {
        stage: Stage,
        #[source]
        source: serde_json::Error,
    },
    #[error("{stage} request could not be completed: {source}")]
    Transport {
        stage: Stage,
        #[source]
        source: reqwest::Error,
    },
}
