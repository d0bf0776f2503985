use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated recipe as returned by `POST /recipes/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Ingredients with quantities
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: u32,
    /// Echoed back as sent; kept as a string so unknown values still load
    pub category: String,
    #[serde(default)]
    pub tips: Option<String>,
    #[serde(default)]
    pub substitutions: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
}
