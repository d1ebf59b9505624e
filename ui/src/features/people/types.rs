use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Person {
    pub name: &'static str,
    pub age: u32,
}

impl Person {
    pub const fn new(name: &'static str, age: u32) -> Self {
        Self { name, age }
    }
}

/// The directory shown by the search list, in display order
pub const PEOPLE: [Person; 5] = [
    Person::new("Alice", 17),
    Person::new("Bob", 21),
    Person::new("Charlie", 16),
    Person::new("Diana", 25),
    Person::new("Eve", 30),
];

pub const NO_RESULTS: &str = "No results found";
