//! Contact section: details on the left, the message form on the right.
//!
//! Submission runs through a [`ContactForm`]: `begin` rejects incomplete
//! drafts and double submits, the send runs on a spawned task, and the
//! form clears on success or keeps the draft for a retry on failure.
//! `view` mirrors the controller's state for rendering.

use dioxus::prelude::*;
use sactifi_core::content::{contact_details, SOCIAL_LINKS};
use sactifi_core::{
    ContactForm, FormError, FormField, RevealDirection, RevealPreset, SectionId, SimulatedSender,
    SubmitOutcome,
};
use sactifi_ui::{use_in_view, Button, ButtonVariant, FieldInput, Reveal};

use super::SectionHeader;
use crate::context::{use_site_config, use_toasts, ToastKind};

#[component]
pub fn Contact() -> Element {
    let config = use_site_config();
    let section = use_in_view(SectionId::Contact.anchor(), config.motion.section_margin());
    let mut toasts = use_toasts();
    let form = use_signal(|| ContactForm::<SimulatedSender>::new(config.contact.sender()));
    let mut view = use_signal(|| form.peek().snapshot());

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let pending = match form.peek().begin() {
            Ok(pending) => pending,
            Err(FormError::AlreadySubmitting) => return,
            Err(e) => {
                toasts.push(e.to_string(), ToastKind::Error);
                return;
            }
        };
        view.set(form.peek().snapshot());

        tracing::info!(subject = %pending.submission().subject, "sending contact message");
        spawn(async move {
            let outcome = pending.send().await;
            view.set(form.peek().snapshot());
            match &outcome {
                SubmitOutcome::Sent => tracing::info!("contact message sent"),
                SubmitOutcome::Failed(e) => tracing::warn!(error = %e, "contact message failed"),
            }
            let kind = if outcome.is_success() {
                ToastKind::Success
            } else {
                ToastKind::Error
            };
            toasts.push(outcome.message(), kind);
        });
    };

    let mut on_input = move |field: FormField, value: String| {
        form.peek().set_field(field, value);
        view.set(form.peek().snapshot());
    };

    let state = view();
    let submitting = state.is_submitting();

    rsx! {
        section {
            id: SectionId::Contact.anchor(),
            class: "section contact",
            onmounted: move |e| section.mounted(e),

            SectionHeader { section: SectionId::Contact, visible: section.visible() }

            div { class: "contact-layout",
                Reveal {
                    key_name: "contact-info".to_string(),
                    preset: RevealPreset::Slide(RevealDirection::Left),
                    duration: config.motion.section_duration(),
                    class: "contact-info".to_string(),
                    for detail in contact_details() {
                        div { key: "{detail.label}", class: "contact-detail",
                            span { class: "contact-glyph", "{detail.glyph}" }
                            div {
                                h4 { "{detail.label}" }
                                for line in detail.lines.iter() {
                                    p { key: "{line}", "{line}" }
                                }
                            }
                        }
                    }
                    div { class: "contact-socials",
                        for link in SOCIAL_LINKS {
                            a { key: "{link.label}", class: "social-link", href: link.href,
                                "{link.label}"
                            }
                        }
                    }
                }

                Reveal {
                    key_name: "contact-form".to_string(),
                    preset: RevealPreset::Slide(RevealDirection::Right),
                    duration: config.motion.section_duration(),
                    class: "contact-form-wrapper".to_string(),
                    form { class: "contact-form", onsubmit: on_submit,
                        div { class: "form-row",
                            for field in [FormField::Name, FormField::Email] {
                                FieldInput {
                                    key: "{field.label()}",
                                    field,
                                    value: state.field(field).to_string(),
                                    disabled: submitting,
                                    oninput: move |(field, value): (FormField, String)| {
                                        on_input(field, value)
                                    },
                                }
                            }
                        }
                        for field in [FormField::Subject, FormField::Message] {
                            FieldInput {
                                key: "{field.label()}",
                                field,
                                value: state.field(field).to_string(),
                                disabled: submitting,
                                oninput: move |(field, value): (FormField, String)| {
                                    on_input(field, value)
                                },
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit".to_string(),
                            disabled: submitting,
                            class: "contact-submit".to_string(),
                            if submitting {
                                span { class: "spinner" }
                                "Sending..."
                            } else {
                                "Send Message \u{2192}"
                            }
                        }
                    }
                }
            }
        }
    }
}
