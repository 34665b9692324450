use actix_web::{HttpResponse, web};

use crate::{
    api::{errors::FinalErrorResponse, tft::params::RiotIdPath},
    app_state::AppState,
    riot::RiotApi,
};

pub async fn get<C: RiotApi + 'static>(
    state: web::Data<AppState<C>>,
    path: web::Path<RiotIdPath>,
) -> actix_web::Result<HttpResponse, FinalErrorResponse> {
    let RiotIdPath { name, tagline } = path.into_inner();
    let account = crate::tft::resolve_account(&state.riot, &name, &tagline).await?;
    crate::api::send_serialized_data(account)
}
