use iced::{
    widget::{scrollable, Space},
    Alignment, Length,
};

use scaleheight::{
    config::PackageConfig,
    flow::{Level, Notice},
    signup::{SignupForm, Step},
    validation::Field,
};
use scaleheight_ui::{
    component::{
        button, card,
        form::Form,
        modal_card,
        notification::{self, Kind},
        text::*,
    },
    theme,
    widget::{modal::Modal, *},
};

use super::{
    message::Message,
    popup::{self, Popup},
};

const CONTENT_WIDTH: f32 = 600.0;

pub fn signup<'a>(
    form: &'a SignupForm,
    package: &'a PackageConfig,
    notice: Option<&'a Notice>,
    popup: &Popup,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(30)
        .max_width(CONTENT_WIDTH)
        .push(h2("Create your ScaleHeight account"))
        .push_maybe(notice.map(banner))
        .push(match form.step() {
            Step::Contact => contact(form),
            Step::Credentials => credentials(form),
            Step::Registered => registered(),
        })
        .push(package_card(package));

    let base = Container::new(scrollable(
        Container::new(content)
            .padding(50)
            .width(Length::Fill)
            .center_x(Length::Fill),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(theme::container::background);

    if popup.is_displayed() {
        // Only the backdrop is left while fading, it keeps the clicks away from the form.
        let content: Element<'a, Message> = if popup.opacity() > 0.0 {
            package_details(package).into()
        } else {
            Space::new(Length::Fixed(0.0), Length::Fixed(0.0)).into()
        };
        Modal::new(base, content)
            .on_blur(Some(Message::Popup(popup::Message::Close)))
            .opacity(popup.opacity())
            .into()
    } else {
        base.into()
    }
}

fn banner(notice: &Notice) -> Element<Message> {
    let kind = match notice.level {
        Level::Success => Kind::Success,
        Level::Info => Kind::Info,
        Level::Warning => Kind::Warning,
        Level::Error => Kind::Error,
    };
    notification::banner(kind, &notice.message, Message::DismissNotice).into()
}

fn input<'a>(form: &'a SignupForm, field: Field, on_submit: Message) -> Element<'a, Message> {
    let placeholder = field.to_string();
    let input = if form.phase().is_verifying() {
        Form::new_disabled(&placeholder, form.value(field))
    } else {
        Form::new(&placeholder, form.value(field), move |value| {
            Message::Edit(field, value)
        })
        .on_submit(on_submit)
    };
    let input = if matches!(field, Field::Password | Field::ConfirmPassword) {
        input.secure()
    } else {
        input
    };
    Column::new()
        .spacing(5)
        .push(p1_bold(field))
        .push(input.maybe_warning(form.error(field)).padding(10))
        .into()
}

fn contact(form: &SignupForm) -> Element<Message> {
    Field::CONTACT
        .iter()
        .fold(
            Column::new()
                .spacing(20)
                .push(h3("Step 1 of 2: Your details")),
            |col, field| col.push(input(form, *field, Message::Continue)),
        )
        .push(
            Row::new().push(Space::with_width(Length::Fill)).push(
                button::primary("Continue")
                    .width(Length::Fixed(200.0))
                    .on_press(Message::Continue),
            ),
        )
        .into()
}

fn credentials(form: &SignupForm) -> Element<Message> {
    let verifying = form.phase().is_verifying();
    Field::CREDENTIALS
        .iter()
        .fold(
            Column::new()
                .spacing(20)
                .push(h3("Step 2 of 2: Secure your account")),
            |col, field| col.push(input(form, *field, Message::Submit)),
        )
        .push(
            Row::new()
                .spacing(10)
                .push(
                    button::secondary("Back")
                        .width(Length::Fixed(150.0))
                        .on_press_maybe((!verifying).then_some(Message::Back)),
                )
                .push(Space::with_width(Length::Fill))
                .push(
                    button::primary(form.phase().submit_label())
                        .width(Length::Fixed(200.0))
                        .on_press_maybe((!verifying).then_some(Message::Submit)),
                ),
        )
        .into()
}

fn registered<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(20)
        .push(h3("Your account is ready"))
        .push(p1_regular(
            "Your dashboard was opened in your browser. If nothing happened, open it from here.",
        ))
        .push(button::link("Open the dashboard").on_press(Message::OpenDashboard))
        .into()
}

fn package_card(package: &PackageConfig) -> Element<Message> {
    Button::new(card(
        Column::new()
            .spacing(10)
            .push(h3(&package.title))
            .push(p2_regular(&package.description).style(theme::text::secondary))
            .push(caption("See the package details").style(theme::text::primary)),
    ))
    .padding(0)
    .width(Length::Fill)
    .style(theme::button::transparent)
    .on_press(Message::Popup(popup::Message::Open))
    .into()
}

fn package_details(package: &PackageConfig) -> Container<Message> {
    let header = Row::new()
        .align_y(Alignment::Center)
        .push(Container::new(h3(&package.title)).width(Length::Fill))
        .push(
            button::transparent("Close")
                .width(Length::Shrink)
                .on_press(Message::Popup(popup::Message::Close)),
        );

    let details = package.details.iter().fold(
        Column::new().spacing(15),
        |col, detail| {
            col.push(
                Row::new()
                    .spacing(10)
                    .align_y(Alignment::Center)
                    .push(
                        Column::new()
                            .width(Length::Fill)
                            .push(caption(&detail.label).style(theme::text::secondary))
                            .push(p1_bold(&detail.value)),
                    )
                    .push(
                        button::secondary("Copy")
                            .width(Length::Fixed(100.0))
                            .on_press(Message::Copy(detail.value.clone())),
                    ),
            )
        },
    );

    modal_card(
        Column::new()
            .spacing(20)
            .push(header)
            .push(p1_regular(&package.description))
            .push(details),
    )
}
