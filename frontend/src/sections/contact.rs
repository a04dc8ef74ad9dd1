use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{error, info};
use portfolio_shared::{ContactAccepted, ContactPayload, ContactRejected, FieldError};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::content::{CONTACT_INFO, SOCIAL_LINKS};
use crate::reveal::{use_reveal, use_reveal_batch, RevealOptions};

const SENT_RESET_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted(ContactAccepted),
    Rejected(Vec<FieldError>),
    Failed(String),
}

async fn send(payload: ContactPayload) -> SubmitOutcome {
    let request = match Request::post(&config::contact_endpoint()).json(&payload) {
        Ok(request) => request,
        Err(e) => return SubmitOutcome::Failed(format!("Failed to send message: {}", e)),
    };
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Contact request failed: {}", e);
            return SubmitOutcome::Failed("Failed to send message. Please try again.".to_string());
        }
    };
    match response.status() {
        200 => match response.json::<ContactAccepted>().await {
            Ok(accepted) => SubmitOutcome::Accepted(accepted),
            Err(e) => SubmitOutcome::Failed(format!("Unexpected reply: {}", e)),
        },
        400 => match response.json::<ContactRejected>().await {
            Ok(rejected) => SubmitOutcome::Rejected(rejected.errors),
            Err(e) => SubmitOutcome::Failed(format!("Unexpected reply: {}", e)),
        },
        status => {
            error!("Contact endpoint answered {}", status);
            SubmitOutcome::Failed("Failed to send message. Please try again.".to_string())
        }
    }
}

/// First error reported for `field`, if any.
pub fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let title = use_node_ref();
    let grid = use_node_ref();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(Vec::<FieldError>::new);
    let state = use_state(|| SubmitState::Idle);

    use_reveal(title.clone(), RevealOptions::fade_up(50.0));
    use_reveal_batch(
        grid.clone(),
        ".contact-card",
        RevealOptions::fade_up(40.0).duration(600.0).stagger(100.0),
        0,
    );

    let onsubmit = {
        let (name, email, message) = (name.clone(), email.clone(), message.clone());
        let (errors, state) = (errors.clone(), state.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if matches!(*state, SubmitState::Sending | SubmitState::Sent) {
                return;
            }
            let payload = ContactPayload::new((*name).clone(), (*email).clone(), (*message).clone());
            let local = payload.check();
            if !local.is_empty() {
                errors.set(local);
                return;
            }
            errors.set(Vec::new());
            state.set(SubmitState::Sending);

            let (name, email, message) = (name.clone(), email.clone(), message.clone());
            let (errors, state) = (errors.clone(), state.clone());
            spawn_local(async move {
                match send(payload).await {
                    SubmitOutcome::Accepted(accepted) => {
                        info!("Contact message accepted with id {}", accepted.id);
                        state.set(SubmitState::Sent);
                        Timeout::new(SENT_RESET_MS, move || {
                            name.set(String::new());
                            email.set(String::new());
                            message.set(String::new());
                            state.set(SubmitState::Idle);
                        })
                        .forget();
                    }
                    SubmitOutcome::Rejected(field_errors) => {
                        errors.set(field_errors);
                        state.set(SubmitState::Idle);
                    }
                    SubmitOutcome::Failed(reason) => state.set(SubmitState::Failed(reason)),
                }
            });
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| name.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        })
    };

    let field_error = |field: &str| match error_for(&errors, field) {
        Some(text) => html! { <p class="field-error">{text.to_string()}</p> },
        None => html! {},
    };
    let body_error = error_for(&errors, "body").map(str::to_string);
    let busy = matches!(*state, SubmitState::Sending | SubmitState::Sent);
    let button_label = match *state {
        SubmitState::Sending => "Sending...",
        SubmitState::Sent => "Sent!",
        _ => "Send Message",
    };

    html! {
        <section id="contact" class="section section-tinted">
            <div class="section-inner">
                <div class="section-heading">
                    <p class="eyebrow accent-pink">{"Get In Touch"}</p>
                    <h2 ref={title} class="section-title">
                        {"Let's Work "}<span class="gradient-text">{"Together"}</span>
                    </h2>
                    <p class="muted">
                        {"Have a project in mind? I'd love to hear about it. Send me a message and let's create something amazing."}
                    </p>
                </div>
                <div ref={grid} class="contact-grid">
                    <div class="contact-card glass">
                        <form {onsubmit} novalidate={true}>
                            <label for="name">{"Name"}</label>
                            <input id="name" placeholder="Your name" value={(*name).clone()} oninput={on_name} />
                            {field_error("name")}
                            <label for="email">{"Email"}</label>
                            <input id="email" type="email" placeholder="your@email.com" value={(*email).clone()} oninput={on_email} />
                            {field_error("email")}
                            <label for="message">{"Message"}</label>
                            <textarea id="message" rows="5" placeholder="Tell me about your project..." value={(*message).clone()} oninput={on_message} />
                            {field_error("message")}
                            if let Some(text) = body_error {
                                <p class="field-error">{text}</p>
                            }
                            <button type="submit" class="btn btn-primary btn-block" disabled={busy}>{button_label}</button>
                            if let SubmitState::Failed(reason) = &*state {
                                <p class="form-failure">{reason.clone()}</p>
                            }
                            if *state == SubmitState::Sent {
                                <p class="form-success">{"Thanks for reaching out. I'll get back to you soon."}</p>
                            }
                        </form>
                    </div>
                    <div class="contact-side">
                        <div class="contact-card glass">
                            <h3>{"Contact Information"}</h3>
                            { for CONTACT_INFO.iter().map(|item| html! {
                                <div class="contact-info">
                                    <p class="muted">{item.label}</p>
                                    {match item.href {
                                        Some(href) => html! { <a {href}>{item.value}</a> },
                                        None => html! { <p>{item.value}</p> },
                                    }}
                                </div>
                            }) }
                        </div>
                        <div class="contact-card glass">
                            <h3>{"Connect With Me"}</h3>
                            <div class="hero-social">
                                { for SOCIAL_LINKS.iter().map(|social| html! {
                                    <a class="glass-pill" href={social.href} target="_blank" rel="noopener noreferrer" aria-label={social.label}>
                                        {social.label}
                                    </a>
                                }) }
                            </div>
                        </div>
                        <div class="contact-card glass availability">
                            <span class="pulse-dot" />
                            <div>
                                <p>{"Available for new projects"}</p>
                                <p class="muted">{"Currently open to freelance work and collaborations"}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
