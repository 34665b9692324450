use actix_web::HttpResponse;

use crate::api::errors::{EveryReturnedError, FinalErrorResponse};

macro_rules! default_paths_fn {
    ($($y:literal),+) => {
            async fn default() -> impl actix_web::Responder {
                return actix_web::HttpResponse::Ok()
                    .content_type("application/json")
                    .body(
                        const_format::str_replace!(
                            const_format::concatc!(
                                r#"{"paths":["#, $('"',$y,'"',','),+ ,"]}"),
                            ",]",
                            "]"
                        )
                    );
            }
        };
}

pub mod errors;
pub mod tft;

pub fn send_serialized_data<T: serde::Serialize>(
    data: T,
) -> actix_web::Result<HttpResponse, FinalErrorResponse> {
    serde_json::to_string(&data)
        .map(|v| HttpResponse::Ok().content_type("application/json").body(v))
        .map_err(|e| EveryReturnedError::SerializingDataToJSON.into_final_error(e))
}
