use serde::Deserialize;

use crate::lenient;

#[derive(Debug, Deserialize)]
pub struct PutProfileRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub height_cm: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub weight_kg: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
}
