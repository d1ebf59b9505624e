use dioxus::prelude::*;

use crate::features::people::{Person, NO_RESULTS};

#[derive(Props, PartialEq, Clone)]
pub struct PeopleListProps {
    pub people: Vec<Person>,
}

/// One line per person, or a single fallback line when the list is empty
#[component]
pub fn PeopleList(props: PeopleListProps) -> Element {
    rsx! {
        div {
            class: "people-list",
            if props.people.is_empty() {
                p {
                    class: "no-results",
                    "{NO_RESULTS}"
                }
            } else {
                for (index, person) in props.people.iter().enumerate() {
                    p {
                        key: "{index}",
                        "{person.name}"
                    }
                }
            }
        }
    }
}
