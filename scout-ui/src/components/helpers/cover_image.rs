//! Cover art with a disc placeholder

use crate::components::icons::DiscIcon;
use crate::display_types::usable_image_url;
use dioxus::prelude::*;

/// Shows `src`, or a disc icon when the URL is missing, a Discogs
/// placeholder, or fails to load.
#[component]
pub fn CoverImage(
    src: Option<String>,
    alt: String,
    class: &'static str,
    #[props(default = "w-8 h-8")] icon_class: &'static str,
) -> Element {
    // Remembers which URL failed, so a new src gets a fresh attempt
    let mut failed_src = use_signal(|| None::<String>);

    let url = usable_image_url(src.as_deref())
        .filter(|u| failed_src.read().as_deref() != Some(*u))
        .map(str::to_string);

    match url {
        Some(url) => rsx! {
            img {
                src: "{url}",
                alt: "{alt}",
                class: "{class}",
                loading: "lazy",
                onerror: {
                    let url = url.clone();
                    move |_| failed_src.set(Some(url.clone()))
                },
            }
        },
        None => rsx! {
            div { class: "bg-gray-700 flex items-center justify-center text-gray-500 {class}",
                DiscIcon { class: icon_class }
            }
        },
    }
}
