use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use futures::future::LocalBoxFuture;
use log::debug;

use crate::contact::form::{ContactFormState, FormField, SubmissionStatus};
use crate::contact::transport::{SubmitError, TransportHandle};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub transport: TransportHandle,
}

pub enum ContactFormMsg {
    UpdateField(FormField, String),
    Submit,
    SubmitFinished(Result<(), SubmitError>),
}

pub struct ContactForm {
    state: ContactFormState,
}

/// What `update` has to do after a message was applied.
enum Step {
    Ignore,
    Render,
    Dispatch(LocalBoxFuture<'static, Result<(), SubmitError>>),
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: ContactFormState::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match self.handle(&ctx.props().transport, msg) {
            Step::Ignore => false,
            Step::Render => true,
            Step::Dispatch(submission) => {
                ctx.link().send_future(async move {
                    ContactFormMsg::SubmitFinished(submission.await)
                });
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let in_flight = self.submit_disabled();

        html! {
            <form class="contact-form" onsubmit={onsubmit}>
                <div class="contact-form-row">
                    { self.render_input(ctx, FormField::Name, "Full Name", "text", "Your full name") }
                    { self.render_input(ctx, FormField::Email, "Email Address", "email", "your.email@company.com") }
                </div>
                { self.render_input(ctx, FormField::Company, "Company Name", "text", "Your company name") }
                { self.render_message(ctx) }

                <button type="submit" class="contact-submit" disabled={in_flight}>
                    if in_flight {
                        <span class="contact-submit-busy">
                            <span class="spinner"></span>
                            {"Sending Message..."}
                        </span>
                    } else {
                        {"Send Message"}
                    }
                </button>

                {
                    match self.notice() {
                        Some((class, notice)) => html! {
                            <div class={classes!("form-notice", class)}>{notice}</div>
                        },
                        None => html! {},
                    }
                }
            </form>
        }
    }
}

impl ContactForm {
    fn handle(&mut self, transport: &TransportHandle, msg: ContactFormMsg) -> Step {
        match msg {
            ContactFormMsg::UpdateField(field, value) => {
                self.state.update_field(field, value);
                Step::Render
            }
            ContactFormMsg::Submit => match self.state.begin_submit() {
                Some(data) => {
                    debug!("Submitting contact form for {}", data.email);
                    Step::Dispatch(transport.attempt_submit(data))
                }
                None => Step::Ignore,
            },
            ContactFormMsg::SubmitFinished(result) => {
                self.state.finish_submit(result);
                Step::Render
            }
        }
    }

    fn submit_disabled(&self) -> bool {
        self.state.is_in_flight()
    }

    /// Modifier class and text of the outcome banner.
    fn notice(&self) -> Option<(&'static str, String)> {
        let class = match self.state.status() {
            SubmissionStatus::Idle => return None,
            SubmissionStatus::Success => "form-notice--success",
            SubmissionStatus::Failure => "form-notice--error",
        };
        self.state.status().notice().map(|text| (class, text))
    }

    fn label(field: FormField, text: &str) -> Html {
        let text = if field.is_required() {
            format!("{} *", text)
        } else {
            text.to_string()
        };
        html! {
            <label for={field.key()} class="contact-label">{text}</label>
        }
    }

    fn render_input(
        &self,
        ctx: &Context<Self>,
        field: FormField,
        label: &str,
        input_type: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::UpdateField(field, input.value())
        });

        html! {
            <div class="contact-field">
                { Self::label(field, label) }
                <input
                    type={input_type}
                    id={field.key()}
                    name={field.key()}
                    required={field.is_required()}
                    value={self.state.value(field).to_string()}
                    oninput={oninput}
                    class="contact-input"
                    placeholder={placeholder}
                />
            </div>
        }
    }

    fn render_message(&self, ctx: &Context<Self>) -> Html {
        let field = FormField::Message;
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactFormMsg::UpdateField(field, input.value())
        });

        html! {
            <div class="contact-field">
                { Self::label(field, "Message") }
                <textarea
                    id={field.key()}
                    name={field.key()}
                    required={field.is_required()}
                    rows="5"
                    value={self.state.value(field).to_string()}
                    oninput={oninput}
                    class="contact-input contact-textarea"
                    placeholder="Tell us about your project or how we can help..."
                />
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::ContactFormData;
    use crate::contact::transport::SubmissionTransport;
    use futures::executor::block_on;
    use futures::FutureExt;

    struct InstantTransport;

    impl SubmissionTransport for InstantTransport {
        fn attempt_submit(&self, _data: ContactFormData) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            futures::future::ready(Ok(())).boxed_local()
        }
    }

    struct BrokenTransport;

    impl SubmissionTransport for BrokenTransport {
        fn attempt_submit(&self, _data: ContactFormData) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            futures::future::ready(Err(SubmitError::Transport("unreachable host".to_string()))).boxed_local()
        }
    }

    fn form() -> ContactForm {
        ContactForm { state: ContactFormState::new() }
    }

    fn type_jane(form: &mut ContactForm, transport: &TransportHandle) {
        for (field, value) in [
            (FormField::Name, "Jane Doe"),
            (FormField::Email, "jane@x.com"),
            (FormField::Message, "Hello"),
        ] {
            let step = form.handle(transport, ContactFormMsg::UpdateField(field, value.to_string()));
            assert!(matches!(step, Step::Render));
        }
    }

    #[test]
    fn submit_dispatches_and_disables_the_button() {
        let transport = TransportHandle::new(InstantTransport);
        let mut form = form();
        type_jane(&mut form, &transport);
        assert!(!form.submit_disabled());

        let step = form.handle(&transport, ContactFormMsg::Submit);
        assert!(matches!(step, Step::Dispatch(_)));
        assert!(form.submit_disabled());
        assert_eq!(form.notice(), None);
    }

    #[test]
    fn second_submit_while_in_flight_skips_rerender() {
        let transport = TransportHandle::new(InstantTransport);
        let mut form = form();
        type_jane(&mut form, &transport);

        let _pending = form.handle(&transport, ContactFormMsg::Submit);
        let again = form.handle(&transport, ContactFormMsg::Submit);
        assert!(matches!(again, Step::Ignore));
        assert!(form.submit_disabled());
    }

    #[test]
    fn finished_submission_shows_confirmation_and_clears_inputs() {
        let transport = TransportHandle::new(InstantTransport);
        let mut form = form();
        type_jane(&mut form, &transport);

        let Step::Dispatch(submission) = form.handle(&transport, ContactFormMsg::Submit) else {
            panic!("submit should dispatch to the transport");
        };
        let result = block_on(submission);
        let step = form.handle(&transport, ContactFormMsg::SubmitFinished(result));

        assert!(matches!(step, Step::Render));
        assert!(!form.submit_disabled());
        let (class, text) = form.notice().expect("confirmation banner");
        assert_eq!(class, "form-notice--success");
        assert!(text.starts_with("Thank you! Your message has been sent"));
        assert_eq!(form.state.value(FormField::Name), "");
        assert_eq!(form.state.value(FormField::Message), "");
    }

    #[test]
    fn failed_submission_shows_error_banner_and_keeps_inputs() {
        let transport = TransportHandle::new(BrokenTransport);
        let mut form = form();
        type_jane(&mut form, &transport);

        let Step::Dispatch(submission) = form.handle(&transport, ContactFormMsg::Submit) else {
            panic!("submit should dispatch to the transport");
        };
        let result = block_on(submission);
        form.handle(&transport, ContactFormMsg::SubmitFinished(result));

        let (class, text) = form.notice().expect("error banner");
        assert_eq!(class, "form-notice--error");
        assert!(text.contains("hello@tandrtechnologies.com"));
        assert_eq!(form.state.value(FormField::Name), "Jane Doe");
        assert!(!form.submit_disabled());
    }
}
