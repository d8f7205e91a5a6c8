pub mod message;
pub mod popup;
pub mod view;

use std::sync::Arc;

use iced::{clipboard, Task};
use tracing::{debug, error, info, warn};
use url::Url;

use scaleheight::{
    client::{SignupApi, SignupClient},
    config::Config,
    dir::SignupDirectory,
    draft::DraftStore,
    flow::{self, Notice, Outcome},
    signup::SignupForm,
};
use scaleheight_ui::widget::Element;

pub use message::Message;
use popup::Popup;

use crate::VERSION;

/// Opens an url in the user's browser.
pub type Browser = fn(&Url) -> std::io::Result<()>;

fn system_browser(url: &Url) -> std::io::Result<()> {
    open::that_detached(url.as_str())
}

pub struct App {
    config: Config,
    store: DraftStore,
    api: Arc<dyn SignupApi>,
    browser: Browser,
    form: SignupForm,
    popup: Popup,
    notice: Option<Notice>,
}

impl App {
    pub fn new(config: Config, datadir: &SignupDirectory) -> (App, Task<Message>) {
        let api = Arc::new(SignupClient::new(config.endpoint_url.clone()));
        let store = DraftStore::new(datadir.draft_file());
        (
            Self::with_api(config, store, api, system_browser),
            Task::none(),
        )
    }

    pub fn with_api(
        config: Config,
        store: DraftStore,
        api: Arc<dyn SignupApi>,
        browser: Browser,
    ) -> Self {
        let mut form = SignupForm::new();
        match store.load() {
            Ok(Some(draft)) => {
                info!("Restoring the signup draft from {}", store.path().display());
                form.restore(&draft);
            }
            Ok(None) => {}
            Err(e) => warn!("Ignoring the signup draft: {}", e),
        }
        Self {
            config,
            store,
            api,
            browser,
            form,
            popup: Popup::default(),
            notice: None,
        }
    }

    pub fn title(&self) -> String {
        format!("ScaleHeight signup v{}", VERSION)
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    fn open_dashboard(&self) {
        if let Err(e) = (self.browser)(&self.config.dashboard_url) {
            error!(
                "Failed to open the dashboard at {}: {}",
                self.config.dashboard_url, e
            );
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Edit(field, value) => {
                self.form.edit(field, value);
                Task::none()
            }
            Message::Continue => {
                self.notice = self.form.proceed(&self.store);
                Task::none()
            }
            Message::Back => {
                self.form.back();
                Task::none()
            }
            Message::Submit => match self.form.begin_submit(&self.store) {
                Ok(registration) => {
                    self.notice = None;
                    let api = self.api.clone();
                    let store = self.store.clone();
                    Task::perform(
                        async move { flow::submit(api.as_ref(), &store, registration).await },
                        Message::Submitted,
                    )
                }
                Err(notice) => {
                    self.notice = notice;
                    Task::none()
                }
            },
            Message::Submitted(outcome) => {
                self.notice = Some(self.form.finish_submit(&outcome));
                if outcome == Outcome::Registered {
                    self.open_dashboard();
                }
                Task::none()
            }
            Message::Popup(msg) => popup::schedule(self.popup.update(msg)).map(Message::Popup),
            Message::Copy(value) => {
                debug!("Writing {} characters to the clipboard", value.chars().count());
                self.notice = Some(Notice::info(format!("Copied: {}", value)));
                clipboard::write(value)
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
            Message::OpenDashboard => {
                self.open_dashboard();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        view::signup(
            &self.form,
            &self.config.package,
            self.notice.as_ref(),
            &self.popup,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use scaleheight::{
        client::{ClientError, Registration, Response},
        draft::{SignupDraft, DRAFT_FILE_NAME},
        flow::{Level, CONNECTION_ERROR, REGISTERED},
        signup::{Step, SubmitPhase},
        validation::{Field, PASSWORD_TOO_SHORT},
    };

    #[derive(Debug)]
    struct UnreachableApi;

    #[async_trait]
    impl SignupApi for UnreachableApi {
        async fn validate_coupon(&self, _: &str) -> Result<Response, ClientError> {
            Err(ClientError::Transport {
                http_status: None,
                error: "offline".to_string(),
            })
        }

        async fn register_user(&self, _: &Registration) -> Result<Response, ClientError> {
            Err(ClientError::Transport {
                http_status: None,
                error: "offline".to_string(),
            })
        }
    }

    thread_local! {
        static OPENED: RefCell<Vec<Url>> = const { RefCell::new(Vec::new()) };
    }

    /// Records the urls instead of opening them.
    fn recording_browser(url: &Url) -> std::io::Result<()> {
        OPENED.with(|opened| opened.borrow_mut().push(url.clone()));
        Ok(())
    }

    fn take_opened() -> Vec<Url> {
        OPENED.with(|opened| opened.take())
    }

    fn new_app(dir: &tempfile::TempDir) -> App {
        take_opened();
        App::with_api(
            Config::default(),
            DraftStore::new(dir.path().join(DRAFT_FILE_NAME)),
            Arc::new(UnreachableApi),
            recording_browser,
        )
    }

    fn fill(app: &mut App, fields: &[(Field, &str)]) {
        for (field, value) in fields {
            let _ = app.update(Message::Edit(*field, value.to_string()));
        }
    }

    fn fill_contact(app: &mut App) {
        fill(
            app,
            &[
                (Field::FirstName, "Ada"),
                (Field::LastName, "Lovelace"),
                (Field::Phone, "0712345678"),
                (Field::Email, "ada@example.com"),
            ],
        );
    }

    #[test]
    fn restores_draft_on_startup() {
        let tmp = tempfile::tempdir().unwrap();
        DraftStore::new(tmp.path().join(DRAFT_FILE_NAME))
            .save(&SignupDraft {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                phone: "0712345678".to_string(),
                email: "ada@example.com".to_string(),
                password: None,
                coupon_code: None,
            })
            .unwrap();
        let app = new_app(&tmp);
        assert_eq!(app.form().value(Field::FirstName), "Ada");
        assert_eq!(app.form().value(Field::Email), "ada@example.com");
        assert_eq!(app.form().step(), Step::Contact);

        // A corrupted draft is not fatal.
        std::fs::write(tmp.path().join(DRAFT_FILE_NAME), b"{").unwrap();
        let app = new_app(&tmp);
        assert_eq!(app.form().value(Field::FirstName), "");
    }

    #[test]
    fn steps() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = new_app(&tmp);

        let _ = app.update(Message::Continue);
        assert_eq!(app.form().step(), Step::Contact);
        assert!(app.form().error(Field::Email).is_some());

        fill_contact(&mut app);
        let _ = app.update(Message::Continue);
        assert_eq!(app.form().step(), Step::Credentials);
        assert!(app.notice().is_none());
        assert!(tmp.path().join(DRAFT_FILE_NAME).exists());

        let _ = app.update(Message::Back);
        assert_eq!(app.form().step(), Step::Contact);
        assert_eq!(app.form().value(Field::FirstName), "Ada");
    }

    #[test]
    fn invalid_credentials_are_not_submitted() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = new_app(&tmp);
        fill_contact(&mut app);
        let _ = app.update(Message::Continue);

        fill(
            &mut app,
            &[
                (Field::Password, "abc"),
                (Field::ConfirmPassword, "abc"),
                (Field::Coupon, "WELCOME"),
            ],
        );
        let _ = app.update(Message::Submit);
        assert_eq!(app.form().phase(), SubmitPhase::Editing);
        assert_eq!(app.form().error(Field::Password), Some(PASSWORD_TOO_SHORT));

        fill(&mut app, &[(Field::Coupon, "  ")]);
        let _ = app.update(Message::Submit);
        assert_eq!(app.notice().map(|n| n.level), Some(Level::Warning));
    }

    #[test]
    fn submission_outcomes() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = new_app(&tmp);
        fill_contact(&mut app);
        let _ = app.update(Message::Continue);
        fill(
            &mut app,
            &[
                (Field::Password, "secret1"),
                (Field::ConfirmPassword, "secret1"),
                (Field::Coupon, "WELCOME"),
            ],
        );

        let _ = app.update(Message::Submit);
        assert!(app.form().phase().is_verifying());
        assert!(app.notice().is_none());

        // Submitting again or going back while verifying does nothing.
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Back);
        assert_eq!(app.form().step(), Step::Credentials);

        let _ = app.update(Message::Submitted(Outcome::Failed(ClientError::Parse(
            "eof".to_string(),
        ))));
        assert_eq!(app.form().phase(), SubmitPhase::Failed);
        assert_eq!(app.notice(), Some(&Notice::error(CONNECTION_ERROR)));

        // No failure sends the user to the dashboard.
        for outcome in [
            Outcome::CouponRejected(Some("bad code".to_string())),
            Outcome::RegistrationRejected(None),
        ] {
            let _ = app.update(Message::Submit);
            assert!(app.form().phase().is_verifying());
            let _ = app.update(Message::Submitted(outcome));
            assert_eq!(app.form().phase(), SubmitPhase::Failed);
            assert_eq!(app.notice().map(|n| n.level), Some(Level::Error));
        }
        assert!(take_opened().is_empty());

        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Submitted(Outcome::Registered));
        assert_eq!(app.form().step(), Step::Registered);
        assert_eq!(app.notice(), Some(&Notice::success(REGISTERED)));
        assert_eq!(take_opened(), vec![Config::default().dashboard_url]);

        // The registered screen can open it again.
        let _ = app.update(Message::OpenDashboard);
        assert_eq!(take_opened(), vec![Config::default().dashboard_url]);

        let _ = app.update(Message::DismissNotice);
        assert!(app.notice().is_none());
    }

    #[test]
    fn copy_and_popup() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = new_app(&tmp);

        let _ = app.update(Message::Copy("0123456789".to_string()));
        assert_eq!(app.notice(), Some(&Notice::info("Copied: 0123456789")));

        let _ = app.update(Message::Popup(popup::Message::Open));
        assert_eq!(app.popup().phase(), popup::Phase::FadingIn);
        let _ = app.update(Message::Popup(popup::Message::Elapsed(1)));
        assert_eq!(app.popup().phase(), popup::Phase::Shown);
        let _ = app.update(Message::Popup(popup::Message::Close));
        assert_eq!(app.popup().phase(), popup::Phase::FadingOut);
    }
}
