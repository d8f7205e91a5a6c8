//! Shape checks for the signup fields and the per-field error state the views render.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_PHONE_LEN: usize = 8;
pub const MIN_PASSWORD_LEN: usize = 6;

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const INVALID_PHONE: &str = "Enter a valid phone number";
pub const INVALID_EMAIL: &str = "Enter a valid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match.";
pub const COUPON_REQUIRED: &str = "Please enter the coupon code you were given.";

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Valid static regex"));

/// Whether `s` looks like `local@domain.tld`. This is not an RFC 5322 parser.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_SHAPE.is_match(s)
}

/// Whether `s` has at least 8 characters once every whitespace is removed.
pub fn is_valid_phone(s: &str) -> bool {
    s.chars().filter(|c| !c.is_whitespace()).count() >= MIN_PHONE_LEN
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Phone,
    Email,
    Password,
    ConfirmPassword,
    Coupon,
}

impl Field {
    pub const CONTACT: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Phone,
        Field::Email,
    ];

    pub const CREDENTIALS: [Field; 3] = [Field::Password, Field::ConfirmPassword, Field::Coupon];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::FirstName => write!(f, "First name"),
            Self::LastName => write!(f, "Last name"),
            Self::Phone => write!(f, "Phone"),
            Self::Email => write!(f, "Email"),
            Self::Password => write!(f, "Password"),
            Self::ConfirmPassword => write!(f, "Confirm password"),
            Self::Coupon => write!(f, "Coupon code"),
        }
    }
}

/// Error message to display under each invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn set(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn clear(&mut self, fields: &[Field]) {
        for field in fields {
            self.0.remove(field);
        }
    }

    pub fn merge(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Step 1 values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

/// Step 1 values once trimmed, with the email lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactDetails, FieldErrors> {
        let details = ContactDetails {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_lowercase(),
        };

        let mut errors = FieldErrors::default();
        if details.first_name.is_empty() {
            errors.set(Field::FirstName, FIRST_NAME_REQUIRED);
        }
        if details.last_name.is_empty() {
            errors.set(Field::LastName, LAST_NAME_REQUIRED);
        }
        if details.phone.is_empty() || !is_valid_phone(&details.phone) {
            errors.set(Field::Phone, INVALID_PHONE);
        }
        if details.email.is_empty() || !is_valid_email(&details.email) {
            errors.set(Field::Email, INVALID_EMAIL);
        }

        if errors.is_empty() {
            Ok(details)
        } else {
            Err(errors)
        }
    }
}

/// Step 2 values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialsForm {
    pub password: String,
    pub confirm_password: String,
    pub coupon: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub password: String,
    pub coupon_code: String,
}

/// Why the step 2 values cannot be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialsRejection {
    pub errors: FieldErrors,
    /// The coupon is only checked for presence, it is reported as a blocking notice.
    pub coupon_missing: bool,
}

impl CredentialsForm {
    pub fn validate(&self) -> Result<Credentials, CredentialsRejection> {
        let password = self.password.trim();
        let confirm_password = self.confirm_password.trim();
        let coupon = self.coupon.trim();

        let mut rejection = CredentialsRejection::default();
        // Counted in UTF-16 code units, as the web signup page does.
        if password.encode_utf16().count() < MIN_PASSWORD_LEN {
            rejection.errors.set(Field::Password, PASSWORD_TOO_SHORT);
        }
        if password != confirm_password {
            rejection
                .errors
                .set(Field::ConfirmPassword, PASSWORDS_MISMATCH);
        }
        rejection.coupon_missing = coupon.is_empty();

        if rejection.errors.is_empty() && !rejection.coupon_missing {
            Ok(Credentials {
                password: password.to_string(),
                coupon_code: coupon.to_string(),
            })
        } else {
            Err(rejection)
        }
    }
}
