use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Guest";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub email: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            age: None,
            gender: None,
            height_cm: None,
            weight_kg: None,
            email: None,
        }
    }
}
