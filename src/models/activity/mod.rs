// Activity model
// Reusable templates for things to do over the weekend

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Duration used when an activity has none, or user input cannot be parsed.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Fixed set of activity categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Food,
    Outdoor,
    Relax,
    Entertainment,
    Custom,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 5] = [
        ActivityCategory::Food,
        ActivityCategory::Outdoor,
        ActivityCategory::Relax,
        ActivityCategory::Entertainment,
        ActivityCategory::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Outdoor => "outdoor",
            Self::Relax => "relax",
            Self::Entertainment => "entertainment",
            Self::Custom => "custom",
        }
    }

    /// Parse a category name; anything unknown becomes `Custom`.
    pub fn parse_lenient(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == normalized)
            .unwrap_or(Self::Custom)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Outdoor => "Outdoor",
            Self::Relax => "Relax",
            Self::Entertainment => "Entertainment",
            Self::Custom => "Custom",
        }
    }

    /// Hex accent color used for cards of this category.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "#F97316",
            Self::Outdoor => "#22C55E",
            Self::Relax => "#3B82F6",
            Self::Entertainment => "#A855F7",
            Self::Custom => "#6B7280",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍴",
            Self::Outdoor => "🌲",
            Self::Relax => "😌",
            Self::Entertainment => "🎪",
            Self::Custom => "⭐",
        }
    }
}

/// A reusable template describing something to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ActivityCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Activity {
    /// Create an activity with an explicit id and title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: None,
            duration_minutes: None,
            mood: None,
            color: None,
            notes: None,
            image_url: None,
        }
    }

    /// Create an activity with a freshly generated id
    pub fn new_with_id(title: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), title)
    }

    pub fn builder() -> ActivityBuilder {
        ActivityBuilder::new()
    }

    /// Category used for display; missing categories render as `Custom`.
    pub fn display_category(&self) -> ActivityCategory {
        self.category.unwrap_or(ActivityCategory::Custom)
    }

    /// Duration a new placement of this activity gets.
    pub fn default_duration(&self) -> u32 {
        match self.duration_minutes {
            Some(minutes) if minutes > 0 => minutes,
            _ => DEFAULT_DURATION_MINUTES,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Activity id cannot be empty".to_string());
        }

        if self.title.trim().is_empty() {
            return Err("Activity title cannot be empty".to_string());
        }

        if self.duration_minutes == Some(0) {
            return Err("Duration must be at least 1 minute".to_string());
        }

        Ok(())
    }
}

/// Parse a user-entered duration, falling back to the default on bad input.
pub fn duration_from_input(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(minutes) if minutes > 0 => minutes,
        _ => DEFAULT_DURATION_MINUTES,
    }
}

/// Builder for activities created from the catalogue form
pub struct ActivityBuilder {
    id: Option<String>,
    title: Option<String>,
    category: Option<ActivityCategory>,
    duration_minutes: Option<u32>,
    mood: Option<String>,
    color: Option<String>,
    notes: Option<String>,
    image_url: Option<String>,
}

impl ActivityBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            category: None,
            duration_minutes: None,
            mood: None,
            color: None,
            notes: None,
            image_url: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn category(mut self, category: ActivityCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    pub fn mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn build(self) -> Result<Activity, String> {
        let title = self.title.ok_or("Activity title is required")?;
        let id = self.id.unwrap_or_else(|| Uuid::new_v4().to_string());

        let activity = Activity {
            id,
            title,
            category: self.category,
            duration_minutes: self.duration_minutes,
            mood: self.mood,
            color: self.color,
            notes: self.notes,
            image_url: self.image_url,
        };

        activity.validate()?;
        Ok(activity)
    }
}

impl Default for ActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}
