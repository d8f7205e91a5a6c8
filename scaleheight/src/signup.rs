//! View-model of the two steps signup wizard.
//!
//! It owns what the user typed, the errors to display next to each field, the current step
//! and the state of the submission. It has no knowledge of the UI toolkit: the application
//! feeds it the user actions and renders what it exposes.

use tracing::{info, warn};

use crate::{
    client::Registration,
    draft::{DraftStore, SignupDraft},
    flow::{Notice, Outcome},
    validation::{ContactForm, CredentialsForm, Field, FieldErrors, COUPON_REQUIRED},
};

pub const DRAFT_UNAVAILABLE: &str =
    "Could not retrieve form data. Please restart the signup and try again.";
pub const DRAFT_NOT_SAVED: &str =
    "Your details could not be saved locally, please do not close the application.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Contact,
    Credentials,
    Registered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Editing,
    Verifying,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    pub fn is_verifying(&self) -> bool {
        matches!(self, Self::Verifying)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_verifying() {
            "Verifying..."
        } else {
            "Submit"
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignupForm {
    contact: ContactForm,
    credentials: CredentialsForm,
    errors: FieldErrors,
    step: Step,
    phase: SubmitPhase,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            contact: ContactForm::default(),
            credentials: CredentialsForm::default(),
            errors: FieldErrors::default(),
            step: Step::Contact,
            phase: SubmitPhase::Editing,
        }
    }

    /// Fills the contact step with a draft left by a previous session.
    pub fn restore(&mut self, draft: &SignupDraft) {
        self.contact = ContactForm {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
        };
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.contact.first_name,
            Field::LastName => &self.contact.last_name,
            Field::Phone => &self.contact.phone,
            Field::Email => &self.contact.email,
            Field::Password => &self.credentials.password,
            Field::ConfirmPassword => &self.credentials.confirm_password,
            Field::Coupon => &self.credentials.coupon,
        }
    }

    pub fn edit(&mut self, field: Field, value: String) {
        // Fields are locked while the registration is pending or done.
        if self.phase.is_verifying() || self.step == Step::Registered {
            return;
        }
        match field {
            Field::FirstName => self.contact.first_name = value,
            Field::LastName => self.contact.last_name = value,
            Field::Phone => self.contact.phone = value,
            Field::Email => self.contact.email = value,
            Field::Password => self.credentials.password = value,
            Field::ConfirmPassword => self.credentials.confirm_password = value,
            Field::Coupon => self.credentials.coupon = value,
        }
    }

    /// Validates the contact step, moves to the credentials step and persists the draft.
    /// Returns a notice if the draft could not be persisted.
    pub fn proceed(&mut self, store: &DraftStore) -> Option<Notice> {
        if self.step != Step::Contact {
            return None;
        }
        self.errors.clear(&Field::CONTACT);
        let details = match self.contact.validate() {
            Ok(details) => details,
            Err(errors) => {
                self.errors.merge(errors);
                return None;
            }
        };

        self.step = Step::Credentials;
        let draft = SignupDraft::from(details);
        match store.save(&draft) {
            Ok(()) => None,
            Err(e) => {
                warn!("{}", e);
                Some(Notice::warning(DRAFT_NOT_SAVED))
            }
        }
    }

    /// Back to the contact step, what was typed in the credentials step is kept.
    pub fn back(&mut self) {
        if self.step == Step::Credentials && !self.phase.is_verifying() {
            self.step = Step::Contact;
        }
    }

    /// Checks the credentials step and builds the registration out of the persisted draft.
    ///
    /// On success the form is `Verifying` until [`SignupForm::finish_submit`] is called. On
    /// failure nothing must be sent; the error holds the notice to show, if any beyond the
    /// inline field errors.
    pub fn begin_submit(&mut self, store: &DraftStore) -> Result<Registration, Option<Notice>> {
        if self.step != Step::Credentials || self.phase.is_verifying() {
            return Err(None);
        }
        self.errors.clear(&Field::CREDENTIALS);
        let credentials = match self.credentials.validate() {
            Ok(credentials) => credentials,
            Err(rejection) => {
                self.errors.merge(rejection.errors);
                return Err(rejection
                    .coupon_missing
                    .then(|| Notice::warning(COUPON_REQUIRED)));
            }
        };

        let mut draft = match store.load() {
            Ok(Some(draft)) => draft,
            Ok(None) => {
                warn!("No signup draft found in {}", store.path().display());
                return Err(Some(Notice::error(DRAFT_UNAVAILABLE)));
            }
            Err(e) => {
                warn!("{}", e);
                return Err(Some(Notice::error(DRAFT_UNAVAILABLE)));
            }
        };
        draft.merge_credentials(credentials);

        match Registration::try_from(draft) {
            Ok(registration) => {
                self.phase = SubmitPhase::Verifying;
                Ok(registration)
            }
            Err(_) => Err(Some(Notice::error(DRAFT_UNAVAILABLE))),
        }
    }

    /// Leaves the `Verifying` phase whatever the outcome.
    pub fn finish_submit(&mut self, outcome: &Outcome) -> Notice {
        match outcome {
            Outcome::Registered => {
                info!("Signup completed");
                self.phase = SubmitPhase::Succeeded;
                self.step = Step::Registered;
                self.credentials = CredentialsForm::default();
            }
            _ => {
                self.phase = SubmitPhase::Failed;
            }
        }
        outcome.notice()
    }
}
