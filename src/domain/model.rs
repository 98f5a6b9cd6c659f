use serde::{Deserialize, Serialize};

/// A person record. Field order is the order it renders in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub city: String,
}

impl Default for Person {
    fn default() -> Self {
        Self {
            name: "Alice".to_string(),
            age: 30,
            city: "Python Land".to_string(),
        }
    }
}

/// Everything the showcase renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseInputs {
    pub name: String,
    pub numbers: Vec<i64>,
    pub square_count: u32,
    pub person: Person,
}

impl Default for ShowcaseInputs {
    fn default() -> Self {
        Self {
            name: "World".to_string(),
            numbers: vec![1, 2, 3, 4, 5],
            square_count: 5,
            person: Person::default(),
        }
    }
}
