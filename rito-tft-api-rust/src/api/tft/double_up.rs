use actix_web::{HttpResponse, web};

use crate::{
    api::{errors::FinalErrorResponse, tft::params::RiotIdPath},
    app_state::AppState,
    riot::RiotApi,
    tft::double_up::aggregate_double_up,
};

pub async fn get<C: RiotApi + 'static>(
    state: web::Data<AppState<C>>,
    path: web::Path<RiotIdPath>,
) -> actix_web::Result<HttpResponse, FinalErrorResponse> {
    let RiotIdPath { name, tagline } = path.into_inner();
    let account = crate::tft::resolve_account(&state.riot, &name, &tagline).await?;
    let result = aggregate_double_up(&state.riot, &state.double_up, account).await?;
    crate::api::send_serialized_data(result)
}
