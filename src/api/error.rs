use serde::Deserialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// The two ways a backend call can fail
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server rejected request ({status}): {detail}")]
    Rejected { status: u16, detail: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiError {
    /// Builds a rejection, pulling `detail` out of a JSON error body when there is one
    pub fn rejected(status: u16, body: &str) -> Self {
        let detail = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                detail: serde_json::Value::String(s),
            }) => s,
            Ok(ErrorBody { detail }) => detail.to_string(),
            Err(_) => body.trim().to_string(),
        };
        ApiError::Rejected { status, detail }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_extracts_string_detail() {
        let err = ApiError::rejected(400, r#"{"detail": "Email exists"}"#);
        match err {
            ApiError::Rejected { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail, "Email exists");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejected_keeps_structured_detail_as_json() {
        let err = ApiError::rejected(422, r#"{"detail": [{"loc": ["body", "name"]}]}"#);
        assert_eq!(
            err.to_string(),
            r#"server rejected request (422): [{"loc":["body","name"]}]"#
        );
    }

    #[test]
    fn rejected_falls_back_to_raw_body() {
        let err = ApiError::rejected(502, "  Bad Gateway\n");
        assert_eq!(err.to_string(), "server rejected request (502): Bad Gateway");
    }
}
