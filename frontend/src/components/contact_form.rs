use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::services::SERVICES;
use crate::config;

/// Simulated round trip of a submission.
const SUBMIT_DELAY_MS: u32 = 2_000;
/// How long the result banner stays up.
const BANNER_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Message,
}

impl Field {
    /// Maps a form control's `name` attribute.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "phone" => Some(Field::Phone),
            "company" => Some(Field::Company),
            "service" => Some(Field::Service),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl ContactRequest {
    pub fn with(&self, field: Field, value: String) -> Self {
        let mut next = self.clone();
        let slot = match field {
            Field::Name => &mut next.name,
            Field::Email => &mut next.email,
            Field::Phone => &mut next.phone,
            Field::Company => &mut next.company,
            Field::Service => &mut next.service,
            Field::Message => &mut next.message,
        };
        *slot = value;
        next
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Success,
    Error,
}

/// Stands in for a real backend: logs the payload and never sends it.
pub fn stub_submit(request: &ContactRequest) -> SubmitStatus {
    match serde_json::to_string(request) {
        Ok(payload) => {
            info!("Contact request (not sent): {}", payload);
            SubmitStatus::Success
        }
        Err(err) => {
            warn!("Failed to serialize contact request: {}", err);
            SubmitStatus::Error
        }
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_state(ContactRequest::default);
    let submitting = use_state(|| false);
    let status = use_state(|| None::<SubmitStatus>);

    let update = {
        let form = form.clone();
        move |name: String, value: String| {
            if let Some(field) = Field::from_name(&name) {
                form.set(form.with(field, value));
            }
        }
    };

    let on_input = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(input.name(), input.value());
        })
    };

    let on_message = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            update(input.name(), input.value());
        })
    };

    let on_service = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        update(select.name(), select.value());
    });

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let request = (*form).clone();
            let form = form.clone();
            let submitting = submitting.clone();
            let status = status.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                let outcome = stub_submit(&request);
                if outcome == SubmitStatus::Success {
                    form.set(ContactRequest::default());
                }
                status.set(Some(outcome));
                submitting.set(false);

                Timeout::new(BANNER_MS, move || status.set(None)).forget();
            });
        })
    };

    html! {
        <section class="contact-form-section" id="contact">
            <style>
                {r#"
                    .contact-form-section {
                        position: relative;
                        padding: 6rem 0;
                    }
                    .contact-form-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .contact-content {
                        display: grid;
                        grid-template-columns: 1fr 1.5fr;
                        gap: 3rem;
                    }
                    .contact-info {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .info-card {
                        padding: 1.5rem;
                        border-radius: 16px;
                    }
                    .info-card h3 {
                        color: #e2e8f0;
                        margin: 0.5rem 0;
                    }
                    .info-card a, .info-card p {
                        color: #94a3b8;
                        margin: 0.2rem 0;
                        text-decoration: none;
                    }
                    .info-card .highlight {
                        color: #00ffff;
                        font-weight: 700;
                    }
                    .info-icon {
                        font-size: 1.8rem;
                    }
                    .info-benefits ul {
                        list-style: none;
                        padding: 0;
                        color: #94a3b8;
                        line-height: 2;
                    }
                    .contact-form {
                        padding: 2.5rem;
                        border-radius: 20px;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .form-group {
                        display: flex;
                        flex-direction: column;
                        margin-bottom: 1.5rem;
                    }
                    .form-group label {
                        color: #e2e8f0;
                        margin-bottom: 0.5rem;
                        font-weight: 500;
                    }
                    .required {
                        color: #ec4899;
                    }
                    .form-group input,
                    .form-group select,
                    .form-group textarea {
                        padding: 0.9rem 1rem;
                        border-radius: 10px;
                        border: 1px solid rgba(148, 163, 184, 0.2);
                        background: rgba(15, 23, 42, 0.6);
                        color: #e2e8f0;
                        font: inherit;
                    }
                    .form-group input:focus,
                    .form-group select:focus,
                    .form-group textarea:focus {
                        outline: none;
                        border-color: #00ffff;
                        box-shadow: 0 0 0 3px rgba(0, 255, 255, 0.1);
                    }
                    .form-message {
                        padding: 1rem;
                        border-radius: 10px;
                        margin-bottom: 1.5rem;
                        animation: fadeInUp 0.4s ease;
                    }
                    .form-message.success {
                        background: rgba(16, 185, 129, 0.15);
                        color: #10b981;
                    }
                    .form-message.error {
                        background: rgba(239, 68, 68, 0.15);
                        color: #ef4444;
                    }
                    .submit-btn {
                        width: 100%;
                        padding: 1rem;
                        border: none;
                        border-radius: 10px;
                        background: linear-gradient(135deg, #3b82f6, #00ffff);
                        color: #0a0a1a;
                        font-weight: 700;
                        font-size: 1rem;
                        cursor: pointer;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.6rem;
                    }
                    .submit-btn:disabled {
                        opacity: 0.7;
                        cursor: not-allowed;
                    }
                    .spinner {
                        width: 16px;
                        height: 16px;
                        border: 2px solid rgba(10, 10, 26, 0.3);
                        border-top-color: #0a0a1a;
                        border-radius: 50%;
                        animation: spin 0.8s linear infinite;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    @media (max-width: 900px) {
                        .contact-content,
                        .form-row {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div class="contact-form-header">
                    <h2 class="section-title gradient-text">{"Get In Touch"}</h2>
                    <p class="section-subtitle">
                        {"Ready to transform your business? Let's discuss your project"}
                    </p>
                </div>

                <div class="contact-content">
                    <div class="contact-info">
                        <div class="info-card glass">
                            <div class="info-icon">{"📧"}</div>
                            <h3>{"Email Us"}</h3>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                        </div>
                        <div class="info-card glass">
                            <div class="info-icon">{"💼"}</div>
                            <h3>{"Business Hours"}</h3>
                            <p>{"Monday - Friday"}</p>
                            <p>{"9:00 AM - 6:00 PM EST"}</p>
                        </div>
                        <div class="info-card glass">
                            <div class="info-icon">{"🚀"}</div>
                            <h3>{"Response Time"}</h3>
                            <p>{"We typically respond within"}</p>
                            <p class="highlight">{"24 hours"}</p>
                        </div>
                        <div class="info-benefits">
                            <h3>{"Why Choose Us?"}</h3>
                            <ul>
                                <li>{"✓ Cutting-edge AI technology"}</li>
                                <li>{"✓ Custom solutions tailored to your needs"}</li>
                                <li>{"✓ 24/7 dedicated support"}</li>
                                <li>{"✓ Proven track record of success"}</li>
                            </ul>
                        </div>
                    </div>

                    <form class="contact-form glass" {onsubmit}>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="name">{"Full Name "}<span class="required">{"*"}</span></label>
                                <input type="text" id="name" name="name" placeholder="John Doe" required={true}
                                    value={form.name.clone()} oninput={on_input.clone()} />
                            </div>
                            <div class="form-group">
                                <label for="email">{"Email Address "}<span class="required">{"*"}</span></label>
                                <input type="email" id="email" name="email" placeholder="john@company.com" required={true}
                                    value={form.email.clone()} oninput={on_input.clone()} />
                            </div>
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="phone">{"Phone Number"}</label>
                                <input type="tel" id="phone" name="phone" placeholder="+1 (555) 123-4567"
                                    value={form.phone.clone()} oninput={on_input.clone()} />
                            </div>
                            <div class="form-group">
                                <label for="company">{"Company Name"}</label>
                                <input type="text" id="company" name="company" placeholder="Your Company"
                                    value={form.company.clone()} oninput={on_input} />
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="service">{"Service Interest "}<span class="required">{"*"}</span></label>
                            <select id="service" name="service" required={true} onchange={on_service}>
                                <option value="" selected={form.service.is_empty()}>{"Select a service"}</option>
                                { for SERVICES.iter().map(|s| html! {
                                    <option key={s.title} value={s.title} selected={form.service == s.title}>
                                        {s.title}
                                    </option>
                                }) }
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="message">{"Message "}<span class="required">{"*"}</span></label>
                            <textarea id="message" name="message" rows="5" required={true}
                                placeholder="Tell us about your project..."
                                value={form.message.clone()} oninput={on_message} />
                        </div>

                        {
                            match *status {
                                Some(SubmitStatus::Success) => html! {
                                    <div class="form-message success">{"✓ Thank you! We'll get back to you soon."}</div>
                                },
                                Some(SubmitStatus::Error) => html! {
                                    <div class="form-message error">{"✗ Something went wrong. Please try again."}</div>
                                },
                                None => html! {},
                            }
                        }

                        <button type="submit" class="submit-btn" disabled={*submitting}>
                            {
                                if *submitting {
                                    html! { <><span class="spinner"></span>{"Sending..."}</> }
                                } else {
                                    html! { <>{"Send Message"}<span class="btn-icon">{"→"}</span></> }
                                }
                            }
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactRequest {
        ContactRequest::default()
            .with(Field::Name, "Ada".into())
            .with(Field::Email, "ada@example.com".into())
            .with(Field::Service, "AI Chatbots".into())
            .with(Field::Message, "Need a bot".into())
    }

    #[test]
    fn field_names_match_form_controls() {
        for (name, field) in [
            ("name", Field::Name),
            ("email", Field::Email),
            ("phone", Field::Phone),
            ("company", Field::Company),
            ("service", Field::Service),
            ("message", Field::Message),
        ] {
            assert_eq!(Field::from_name(name), Some(field));
        }
        assert_eq!(Field::from_name("website"), None);
    }

    #[test]
    fn editing_one_field_leaves_the_rest() {
        let form = filled().with(Field::Phone, "555".into());
        assert_eq!(form.phone, "555");
        assert_eq!(form.name, "Ada");
        assert_eq!(form.company, "");
    }

    #[test]
    fn stubbed_submission_succeeds_and_form_resets() {
        let form = filled();
        assert!(!form.is_empty());
        assert_eq!(stub_submit(&form), SubmitStatus::Success);
        let reset = ContactRequest::default();
        assert!(reset.is_empty());
    }

    #[test]
    fn payload_serializes_every_field() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["service"], "AI Chatbots");
        assert_eq!(json["phone"], "");
        assert_eq!(json.as_object().unwrap().len(), 6);
    }
}
