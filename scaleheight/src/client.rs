//! Client for the remote endpoint handling coupon validation and registration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::draft::SignupDraft;

/// Everything the endpoint needs to create an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub coupon_code: String,
}

impl TryFrom<SignupDraft> for Registration {
    type Error = SignupDraft;

    /// Fails, giving the draft back, if the credentials were not merged in yet.
    fn try_from(draft: SignupDraft) -> Result<Self, Self::Error> {
        match (draft.password, draft.coupon_code) {
            (Some(password), Some(coupon_code)) => Ok(Registration {
                first_name: draft.first_name,
                last_name: draft.last_name,
                phone: draft.phone,
                email: draft.email,
                password,
                coupon_code,
            }),
            (password, coupon_code) => Err(SignupDraft {
                password,
                coupon_code,
                ..draft
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Request {
    ValidateCoupon {
        #[serde(rename = "couponCode")]
        coupon_code: String,
    },
    RegisterUser(Registration),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Failed to reach the signup service: {error}")]
    Transport {
        http_status: Option<u16>,
        error: String,
    },
    #[error("Unexpected answer from the signup service: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Parse(error.to_string())
        } else {
            Self::Transport {
                http_status: error.status().map(|s| s.as_u16()),
                error: error.to_string(),
            }
        }
    }
}

#[async_trait]
pub trait SignupApi: std::fmt::Debug + Send + Sync {
    async fn validate_coupon(&self, coupon_code: &str) -> Result<Response, ClientError>;
    async fn register_user(&self, registration: &Registration) -> Result<Response, ClientError>;
}

#[derive(Debug, Clone)]
pub struct SignupClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SignupClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    async fn post(&self, request: &Request) -> Result<Response, ClientError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        // The endpoint tells success from failure in the body, not with the http status.
        tracing::debug!("Signup service answered with http status {}", response.status());
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
    }
}

#[async_trait]
impl SignupApi for SignupClient {
    async fn validate_coupon(&self, coupon_code: &str) -> Result<Response, ClientError> {
        self.post(&Request::ValidateCoupon {
            coupon_code: coupon_code.to_string(),
        })
        .await
    }

    async fn register_user(&self, registration: &Registration) -> Result<Response, ClientError> {
        self.post(&Request::RegisterUser(registration.clone()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registration() -> Registration {
        Registration {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone: "0712345678".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            coupon_code: "WELCOME".to_string(),
        }
    }

    #[test]
    fn request_bodies() {
        let body = serde_json::to_value(Request::ValidateCoupon {
            coupon_code: "WELCOME".to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({ "action": "VALIDATE_COUPON", "couponCode": "WELCOME" })
        );

        let body = serde_json::to_value(Request::RegisterUser(registration())).unwrap();
        assert_eq!(
            body,
            json!({
                "action": "REGISTER_USER",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "phone": "0712345678",
                "email": "ada@example.com",
                "password": "secret1",
                "couponCode": "WELCOME",
            })
        );
    }

    #[test]
    fn response_parsing() {
        let res: Response = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(res.status, Status::Success);
        assert_eq!(res.message, None);

        let res: Response =
            serde_json::from_str(r#"{"status":"error","message":"bad code"}"#).unwrap();
        assert_eq!(res.status, Status::Error);
        assert_eq!(res.message.as_deref(), Some("bad code"));

        let res: Response = serde_json::from_str(r#"{"status":"pending"}"#).unwrap();
        assert_eq!(res.status, Status::Unknown);

        let res: Response = serde_json::from_str(r#"{"result":42}"#).unwrap();
        assert_eq!(res.status, Status::Unknown);

        assert!(serde_json::from_str::<Response>("<html>").is_err());
    }

    #[test]
    fn registration_requires_credentials() {
        let mut draft = SignupDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone: "0712345678".to_string(),
            email: "ada@example.com".to_string(),
            password: Some("secret1".to_string()),
            coupon_code: None,
        };
        let draft_back = Registration::try_from(draft.clone()).unwrap_err();
        assert_eq!(draft_back, draft);

        draft.coupon_code = Some("WELCOME".to_string());
        assert_eq!(Registration::try_from(draft).unwrap(), registration());
    }

    #[tokio::test]
    async fn unreachable_endpoint() {
        // Nothing listens on the discard port.
        let client = SignupClient::new(Url::parse("http://127.0.0.1:9/exec").unwrap());
        let res = client.validate_coupon("WELCOME").await;
        assert!(matches!(res, Err(ClientError::Transport { .. })));
    }
}
