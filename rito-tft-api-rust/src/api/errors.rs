use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::riot::RiotError;

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalErrorResponse {
    status_code: u16,
    error_code: u64,
    message: String,
}

impl FinalErrorResponse {
    fn new(status: StatusCode, error_code: u64, message: String) -> Self {
        FinalErrorResponse {
            status_code: status.as_u16(),
            error_code,
            message,
        }
    }
}

impl std::fmt::Display for FinalErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.status_code)
    }
}

impl ResponseError for FinalErrorResponse {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_GATEWAY)
    }

    fn error_response(&self) -> HttpResponse {
        let body = serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"statusCode":{},"errorCode":{},"message":""}}"#,
                self.status_code, self.error_code
            )
        });
        HttpResponse::build(self.status_code())
            .content_type("application/json")
            .body(body)
    }
}

pub enum EveryReturnedError {
    InvalidInput,
    /// Carries the status the upstream answered with.
    UpstreamStatus(u16),
    MalformedUpstreamResponse,
    UpstreamUnreachable,
    SerializingDataToJSON,
}

impl From<&EveryReturnedError> for u64 {
    fn from(value: &EveryReturnedError) -> Self {
        match value {
            EveryReturnedError::InvalidInput => 0,
            EveryReturnedError::UpstreamStatus(_) => 1,
            EveryReturnedError::MalformedUpstreamResponse => 2,
            EveryReturnedError::UpstreamUnreachable => 3,
            EveryReturnedError::SerializingDataToJSON => 4,
        }
    }
}

impl EveryReturnedError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::UpstreamStatus(status) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::MalformedUpstreamResponse | Self::UpstreamUnreachable => StatusCode::BAD_GATEWAY,
            Self::SerializingDataToJSON => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn into_final_error(self, library_error: impl ToString) -> FinalErrorResponse {
        FinalErrorResponse::new(self.status(), (&self).into(), library_error.to_string())
    }
}

impl From<RiotError> for FinalErrorResponse {
    fn from(value: RiotError) -> Self {
        let kind = match &value {
            RiotError::InvalidInput(_) => EveryReturnedError::InvalidInput,
            RiotError::Upstream { status, .. } => EveryReturnedError::UpstreamStatus(*status),
            RiotError::MalformedResponse { .. } => EveryReturnedError::MalformedUpstreamResponse,
            RiotError::Transport { .. } => EveryReturnedError::UpstreamUnreachable,
        };
        kind.into_final_error(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riot::Stage;

    #[test]
    fn upstream_status_is_passed_through() {
        let err = FinalErrorResponse::from(RiotError::Upstream {
            status: 404,
            stage: Stage::Identity,
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "identity request failed with status: 404");
        assert_eq!(err.error_code, 1);
    }

    #[test]
    fn invalid_input_is_bad_request() {
        let err = FinalErrorResponse::from(RiotError::InvalidInput(String::from(
            "Name and tagline are required",
        )));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({
                "statusCode": 400,
                "errorCode": 0,
                "message": "Name and tagline are required"
            })
        );
    }

    #[test]
    fn malformed_upstream_body_is_bad_gateway() {
        let err = FinalErrorResponse::from(RiotError::MalformedResponse {
            stage: Stage::MatchList,
            source: serde_json::from_str::<Vec<String>>("{}").unwrap_err(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.error_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn nonsense_upstream_status_becomes_bad_gateway() {
        let err = EveryReturnedError::UpstreamStatus(42).into_final_error("odd status");
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
