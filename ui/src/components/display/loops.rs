use dioxus::prelude::*;

use crate::components::display::PeopleList;
use crate::features::people::{filter_people, PEOPLE};

const PEOPLE_CSS: Asset = asset!("/assets/styling/people.css");

/// Search box over the fixed people directory. The filtered view is derived
/// on every render and never stored.
#[component]
pub fn Loops() -> Element {
    let mut query = use_signal(String::new);

    let current = query();
    let matches: Vec<_> = filter_people(&PEOPLE, &current)
        .into_iter()
        .copied()
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: PEOPLE_CSS }

        div {
            class: "loops",
            div {
                input {
                    r#type: "text",
                    class: "input-field",
                    placeholder: "search",
                    value: "{current}",
                    oninput: move |event| query.set(event.value())
                }
            }
            PeopleList { people: matches }
        }
    }
}
