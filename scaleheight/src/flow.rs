//! The two sequential remote calls ending the signup.

use tracing::{error, info, warn};

use crate::{
    client::{ClientError, Registration, SignupApi, Status},
    draft::DraftStore,
};

pub const REGISTERED: &str = "Registration successful! Redirecting...";
pub const CONNECTION_ERROR: &str = "Connection error. Please check your internet.";
pub const SERVER_ERROR: &str = "Server error.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

/// A message for the user, what the page used to `alert()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
        }
    }
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Registered,
    CouponRejected(Option<String>),
    RegistrationRejected(Option<String>),
    Failed(ClientError),
}

impl Outcome {
    pub fn notice(&self) -> Notice {
        match self {
            Self::Registered => Notice::success(REGISTERED),
            Self::CouponRejected(message) => Notice::error(format!(
                "Invalid coupon: {}",
                message.as_deref().unwrap_or("the code was not accepted.")
            )),
            Self::RegistrationRejected(message) => Notice::error(format!(
                "Registration failed: {}",
                message.as_deref().unwrap_or(SERVER_ERROR)
            )),
            Self::Failed(_) => Notice::error(CONNECTION_ERROR),
        }
    }
}

/// Validates the coupon then registers the user. The draft is removed from `store` only once
/// the registration succeeded.
pub async fn submit<A>(api: &A, store: &DraftStore, registration: Registration) -> Outcome
where
    A: SignupApi + ?Sized,
{
    match api.validate_coupon(&registration.coupon_code).await {
        Ok(res) if res.status == Status::Error => {
            info!("Coupon rejected: {:?}", res.message);
            return Outcome::CouponRejected(res.message);
        }
        Ok(_) => {}
        Err(e) => {
            error!("Failed to validate coupon: {}", e);
            return Outcome::Failed(e);
        }
    }

    match api.register_user(&registration).await {
        Ok(res) if res.status == Status::Success => {
            info!("User {} registered", registration.email);
            if let Err(e) = store.clear() {
                warn!("Failed to remove the signup draft: {}", e);
            }
            Outcome::Registered
        }
        Ok(res) => {
            info!("Registration rejected: {:?}", res.message);
            Outcome::RegistrationRejected(res.message)
        }
        Err(e) => {
            error!("Failed to register user: {}", e);
            Outcome::Failed(e)
        }
    }
}
