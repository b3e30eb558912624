use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_email: String,
    pub activity_type: String,
    #[serde(default)]
    pub duration: i64, // minutes
    #[serde(default)]
    pub calories_burned: i64,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}
