//! Reusable text input component

use dioxus::prelude::*;

/// Text input size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextInputSize {
    /// Header fields
    Small,
    /// The search box. Leaves room for a leading icon and a trailing button.
    Large,
}

/// Reusable text input component with consistent styling
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    size: TextInputSize,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
    #[props(default)] monospace: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let padding = match size {
        TextInputSize::Small => "px-3 py-2 text-sm",
        TextInputSize::Large => "pl-10 pr-12 py-3",
    };

    let base = "w-full bg-gray-900 border border-gray-700 rounded-lg outline-none focus:ring-2 focus:ring-blue-600 text-white placeholder-gray-500 transition-all";

    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    let font_class = if monospace { "font-mono" } else { "" };
    let extra = class.unwrap_or_default();

    let class = format!("{base} {padding} {disabled_class} {font_class} {extra}");

    rsx! {
        input {
            r#type: "text",
            class: "{class}",
            id: id.as_deref(),
            value: "{value}",
            placeholder,
            disabled,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
