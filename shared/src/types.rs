use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::priority::{Priority, RawPriority};

/// Backend primary keys.
pub type Id = u64;

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Recipe Types
// ============================================================================

pub const MAX_STARS: u8 = 5;

/// Whole stars to show for a rating, clamped to `0..=MAX_STARS`.
pub fn full_stars(rating: f64) -> u8 {
    if rating.is_finite() {
        rating.clamp(0.0, f64::from(MAX_STARS)).floor() as u8
    } else {
        0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Id,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: String,
    #[serde(default)]
    pub prep_time: i32,
    #[serde(default)]
    pub cook_time: i32,
    #[serde(default)]
    pub servings: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub family_member: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub video_url: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meal_times: Vec<MealTime>,
}

impl Recipe {
    pub fn full_stars(&self) -> u8 {
        full_stars(self.rating)
    }

    /// Comma-separated tags, trimmed, without empty entries.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// Body for creating or updating a recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipePayload {
    pub name: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    pub category: String,
    pub family_member: String,
    pub tags: String,
    pub image_url: String,
    pub video_url: String,
    pub rating: f64,
    #[serde(default)]
    pub meal_time_ids: Vec<Id>,
}

impl From<&Recipe> for RecipePayload {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            category: recipe.category.clone(),
            family_member: recipe.family_member.clone(),
            tags: recipe.tags.clone(),
            image_url: recipe.image_url.clone(),
            video_url: recipe.video_url.clone(),
            rating: recipe.rating,
            meal_time_ids: recipe.meal_times.iter().map(|mt| mt.id).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeComment {
    pub id: Id,
    pub recipe_id: Id,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentPayload {
    pub comment: String,
}

// ============================================================================
// Meal Time Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTime {
    pub id: Id,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_time: String,
    /// JSON array of "HH:MM" strings, as stored by the backend.
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_times: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub family_member: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl MealTime {
    /// All configured times; falls back to `default_time` when the list is
    /// empty or unreadable.
    pub fn times(&self) -> Vec<String> {
        let parsed: Vec<String> = serde_json::from_str(&self.default_times).unwrap_or_default();
        if parsed.is_empty() && !self.default_time.is_empty() {
            vec![self.default_time.clone()]
        } else {
            parsed
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealTimePayload {
    pub name: String,
    pub default_time: String,
    pub family_member: String,
    pub active: bool,
}

impl From<&MealTime> for MealTimePayload {
    fn from(meal_time: &MealTime) -> Self {
        Self {
            name: meal_time.name.clone(),
            default_time: meal_time.default_time.clone(),
            family_member: meal_time.family_member.clone(),
            active: meal_time.active,
        }
    }
}

// ============================================================================
// Cleaning Zone Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningZone {
    pub id: Id,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub frequency_per_week: i32,
    #[serde(default)]
    pub priority: RawPriority,
}

impl CleaningZone {
    pub fn priority(&self) -> Priority {
        self.priority.normalize()
    }
}

/// Body for creating or updating a zone. Always carries the normalized tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZonePayload {
    pub name: String,
    pub description: String,
    pub frequency_per_week: i32,
    pub priority: Priority,
}

impl From<&CleaningZone> for ZonePayload {
    fn from(zone: &CleaningZone) -> Self {
        Self {
            name: zone.name.clone(),
            description: zone.description.clone(),
            frequency_per_week: zone.frequency_per_week,
            priority: zone.priority(),
        }
    }
}

// ============================================================================
// Childcare Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildcareSchedule {
    pub id: Id,
    pub date: DateTime<FixedOffset>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
}

impl ChildcareSchedule {
    pub fn calendar_date(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildcarePayload {
    /// Midnight UTC of the calendar day, RFC 3339.
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub notes: String,
}

impl ChildcarePayload {
    pub fn new(date: NaiveDate, start_time: String, end_time: String, notes: String) -> Self {
        Self {
            date: format!("{}T00:00:00Z", date.format("%Y-%m-%d")),
            start_time,
            end_time,
            notes,
        }
    }
}

// ============================================================================
// Shopping List Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: Id,
    pub item: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default)]
    pub purchased: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub added_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItemPayload {
    pub item: String,
    pub quantity: String,
    pub category: String,
    pub added_by: String,
}

// ============================================================================
// Schedule Types (wire format)
// ============================================================================

/// Recipe as embedded in a schedule task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecipe {
    pub id: Id,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
}

/// Cleaning zone as embedded in a schedule task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskZone {
    pub id: Id,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub priority: RawPriority,
}

/// A schedule task exactly as the backend returns it, legacy fields included.
///
/// Use [`crate::schedule::Task`] for anything beyond deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTask {
    pub id: Id,
    #[serde(default)]
    pub schedule_id: Id,
    #[serde(default, deserialize_with = "null_as_default")]
    pub task_type: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// Deprecated single recipe.
    #[serde(default)]
    pub recipe: Option<TaskRecipe>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipes: Vec<TaskRecipe>,
    /// Deprecated single zone.
    #[serde(default)]
    pub zone: Option<TaskZone>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub zones: Vec<TaskZone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySchedule {
    #[serde(default)]
    pub id: Id,
    pub date: DateTime<FixedOffset>,
    #[serde(default)]
    pub generated: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<ScheduleTask>,
}

/// Response of the single-day schedule endpoints. Days without a schedule come
/// back as `{message, tasks: []}` instead of a full [`DailySchedule`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskListResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<ScheduleTask>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddRecipeRequest {
    pub recipe_id: Id,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddZoneRequest {
    pub zone_id: Id,
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Tests
// ============================================================================
