use actix_web::{dev::HttpServiceFactory, web};

use crate::riot::RiotApi;

mod account;
mod double_up;
mod match_detail;
mod matches;
mod params;

pub fn tft<C: RiotApi + 'static>() -> impl HttpServiceFactory {
    web::scope("/tft")
        .route("/account/{name}/{tagline}", web::get().to(account::get::<C>))
        .route("/account/{name}", web::get().to(params::missing_riot_id))
        .route("/account", web::get().to(params::missing_riot_id))
        .route("/matches/{puuid}", web::get().to(matches::get::<C>))
        .route("/match/{matchid}", web::get().to(match_detail::get::<C>))
        .route(
            "/double_up/{name}/{tagline}",
            web::get().to(double_up::get::<C>),
        )
        .route("/double_up/{name}", web::get().to(params::missing_riot_id))
        .route("/double_up", web::get().to(params::missing_riot_id))
        .default_service(web::get().to(default))
}
default_paths_fn!(
    "/account/{name}/{tagline}",
    "/matches/{puuid}",
    "/match/{matchid}",
    "/double_up/{name}/{tagline}"
);
