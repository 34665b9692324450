use crate::api::errors::{EveryReturnedError, FinalErrorResponse};

#[derive(serde::Deserialize)]
pub struct RiotIdPath {
    pub name: String,
    pub tagline: String,
}

/// Answers the routes where the name or the tagline segment is absent.
pub async fn missing_riot_id() -> Result<actix_web::HttpResponse, FinalErrorResponse> {
    Err(EveryReturnedError::InvalidInput.into_final_error("Name and tagline are required"))
}
