//! Input Field Components
//!
//! Text inputs and textareas for the contact form. Both render a label,
//! a glowing focus ring and a disabled state while a submission is in
//! flight.

use dioxus::prelude::*;
use sactifi_core::FormField;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used for label association
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "contact-name".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Name".to_string(),
///         placeholder: "Your name".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = super::button::join_classes("input-field", props.class.as_deref());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                }
            }
            input {
                id: "{props.id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Element id, also used for label association
    pub id: String,
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    /// Whether the textarea is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the textarea is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                }
            }
            textarea {
                id: "{props.id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the FieldInput component
#[derive(Clone, PartialEq, Props)]
pub struct FieldInputProps {
    /// Which contact form field this renders
    pub field: FormField,
    /// Current value
    pub value: String,
    /// Handler called with the field and its new value
    pub oninput: EventHandler<(FormField, String)>,
    /// Disabled while a submission is in flight
    #[props(default = false)]
    pub disabled: bool,
}

/// A contact form field, rendered as an input or a textarea depending on
/// its kind.
#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    let field = props.field;
    let id = field_id(field);
    let on_change = move |value: String| props.oninput.call((field, value));

    if field == FormField::Message {
        rsx! {
            TextArea {
                id,
                value: props.value,
                oninput: on_change,
                label: field.label().to_string(),
                placeholder: field.placeholder().to_string(),
                required: true,
                disabled: props.disabled,
            }
        }
    } else {
        rsx! {
            Input {
                id,
                value: props.value,
                oninput: on_change,
                label: field.label().to_string(),
                placeholder: field.placeholder().to_string(),
                input_type: field.input_type().to_string(),
                required: true,
                disabled: props.disabled,
            }
        }
    }
}

/// Stable DOM id for a contact form field.
pub fn field_id(field: FormField) -> String {
    format!("contact-{}", field.label().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids_are_unique() {
        let ids: Vec<_> = FormField::ALL.iter().map(|f| field_id(*f)).collect();
        assert_eq!(ids[0], "contact-name");
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), FormField::ALL.len());
    }
}
