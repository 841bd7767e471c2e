//! Contact card: message form, social links, résumé download.
//!
//! The form state machine lives in `state::contact`; this view wires it to
//! mail delivery and the toast host.

use leptos::prelude::*;

use super::ResumeLink;
use super::content::SOCIAL_LINKS;
use crate::config::SiteConfig;
use crate::net::mail::send_contact;
use crate::state::contact::{ContactForm, ContactStatus, Field, SENT_BANNER_MS};
use crate::state::toast::Notifier;
use crate::util::timer::defer;

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let notifier = expect_context::<Notifier>();
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match send_contact(&config, &payload).await {
                Ok(()) => {
                    notifier.success("Message Sent!", "Your message has been sent successfully.");
                    form.update(ContactForm::finish_sent);
                    defer(SENT_BANNER_MS, move || {
                        form.try_update(ContactForm::dismiss_sent);
                    });
                }
                Err(err) => {
                    let reason = err.to_string();
                    log::warn!("contact form delivery failed: {err:?}");
                    notifier.error("Error Sending Message", &reason);
                    form.update(|f| f.finish_failed(reason));
                }
            }
        });
    };

    let error_for = move |field: Field| move || form.with(|f| f.errors.get(field));

    view! {
        <div class="section section--contact">
            <div class="contact__header">
                <h2>"Get In Touch"</h2>
                <p>"Have a question or want to work together?"</p>
            </div>
            <div class="contact__body">
                <Show
                    when=move || form.with(|f| f.status != ContactStatus::Sent)
                    fallback=|| {
                        view! {
                            <div class="contact__sent">
                                <h3>"Message Sent!"</h3>
                                <p>"Thank you for reaching out. I'll get back to you as soon as possible."</p>
                            </div>
                        }
                    }
                >
                    <form class="contact__form" on:submit=on_submit.clone()>
                        <input
                            type="text"
                            name="user_name"
                            placeholder="Your Name"
                            class:input--invalid=move || error_for(Field::Name)().is_some()
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.set(Field::Name, event_target_value(&ev)))
                        />
                        <FieldError message=Signal::derive(error_for(Field::Name)) />
                        <input
                            type="email"
                            name="user_email"
                            placeholder="Your Email"
                            class:input--invalid=move || error_for(Field::Email)().is_some()
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.set(Field::Email, event_target_value(&ev)))
                        />
                        <FieldError message=Signal::derive(error_for(Field::Email)) />
                        <textarea
                            name="message"
                            placeholder="Your Message"
                            class:input--invalid=move || error_for(Field::Message)().is_some()
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.set(Field::Message, event_target_value(&ev)))
                        ></textarea>
                        <FieldError message=Signal::derive(error_for(Field::Message)) />
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || form.with(ContactForm::is_submitting)
                        >
                            {move || if form.with(ContactForm::is_submitting) { "Sending…" } else { "Send Message" }}
                        </button>
                        {move || {
                            form.with(|f| f.failure().map(str::to_owned))
                                .map(|reason| view! { <div class="contact__error">{reason}</div> })
                        }}
                    </form>
                </Show>
                <div class="contact__links">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    class="contact__link"
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    style:border-color=link.color
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <ResumeLink />
                </div>
            </div>
        </div>
    }
}

#[component]
fn FieldError(message: Signal<Option<&'static str>>) -> impl IntoView {
    move || message.get().map(|text| view! { <p class="field-error">{text}</p> })
}
