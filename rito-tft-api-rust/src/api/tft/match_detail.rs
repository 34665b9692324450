use actix_web::{HttpResponse, web};

use crate::{api::errors::FinalErrorResponse, app_state::AppState, riot::RiotApi};

pub async fn get<C: RiotApi + 'static>(
    state: web::Data<AppState<C>>,
    match_id: web::Path<String>,
) -> actix_web::Result<HttpResponse, FinalErrorResponse> {
    log::info!("Fetching match data for: {match_id}");
    let game = state
        .riot
        .match_by_id(&match_id)
        .await
        .inspect_err(|e| log::error!("Error fetching match data: {e}"))?;
    crate::api::send_serialized_data(game)
}
