use actix_web::{HttpResponse, web};

use crate::{api::errors::FinalErrorResponse, app_state::AppState, riot::RiotApi};

pub async fn get<C: RiotApi + 'static>(
    state: web::Data<AppState<C>>,
    puuid: web::Path<String>,
) -> actix_web::Result<HttpResponse, FinalErrorResponse> {
    let match_ids =
        crate::tft::list_match_ids(&state.riot, &puuid, 0, state.match_list_count).await?;
    crate::api::send_serialized_data(match_ids)
}
