use crate::console_info;
use dioxus::prelude::*;

use crate::components::display::Loops;
use crate::components::forms::LoginForm;

const SHOWCASE_CSS: Asset = asset!("/assets/styling/showcase.css");

/// Both components side by side on one page
#[component]
pub fn Showcase() -> Element {
    use_effect(move || {
        console_info!("[Showcase] Mounted login form and people search");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: SHOWCASE_CSS }

        div {
            class: "showcase-container",

            section {
                class: "showcase-panel",
                LoginForm {}
            }

            section {
                class: "showcase-panel",
                h2 {
                    class: "form-title",
                    "People"
                }
                Loops {}
            }
        }
    }
}
