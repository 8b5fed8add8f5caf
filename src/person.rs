use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;

use crate::config::ADULT_AGE;

/// A person with basic information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: u32,
    #[serde(default)]
    email: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// Key-ordered view of all fields; a missing email is an explicit `null`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".to_string(), json!(self.name));
        map.insert("age".to_string(), json!(self.age));
        map.insert("email".to_string(), json!(self.email));
        map
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.email {
            Some(email) => write!(f, "{} ({}, {})", self.name, self.age, email),
            None => write!(f, "{} ({})", self.name, self.age),
        }
    }
}
