use serde::{Deserialize, Serialize};

/// The person renting a vehicle. Only `age` takes part in pricing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub age: u32,
}

impl Customer {
    pub fn new(age: u32) -> Self {
        Self {
            age,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
