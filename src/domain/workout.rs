use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub activity_type: String,
    // Open set: beginner, intermediate, advanced today, but the backend may
    // introduce new levels without a client release.
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub duration: i64, // minutes
    #[serde(default)]
    pub calories_estimate: i64,
    #[serde(default)]
    pub instructions: String,
}
