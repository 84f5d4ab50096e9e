//! Club records as supplied by the catalogue provider.

use std::collections::HashMap;

use thiserror::Error;

use crate::Category;

/// A student club listed in the directory.
///
/// Contact details mirror the directory's free-form key/value structure and
/// are opaque to scoring.
///
/// # Examples
/// ```
/// use clubmatch_core::{Category, Club};
///
/// # fn main() -> Result<(), clubmatch_core::ClubError> {
/// let club = Club::new(1, "ชมรมดนตรีสากล", Category::Music, "วงดนตรีของมหาวิทยาลัย")?
///     .with_history("ก่อตั้งเมื่อปี 2540")
///     .with_past_activities(vec!["คอนเสิร์ตประจำปี".into()]);
/// assert_eq!(club.id, 1);
/// assert!(club.history.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Club {
    /// Unique identifier.
    pub id: u64,
    /// Club name shown in the directory.
    pub name: String,
    /// Category grouping the club.
    pub category: Category,
    /// Free-text description.
    pub description: String,
    /// Optional founding history.
    #[cfg_attr(feature = "serde", serde(default))]
    pub history: Option<String>,
    /// Short descriptions of past activities, oldest first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub past_activities: Vec<String>,
    /// Free-form contact channels (line, phone, email, ...).
    #[cfg_attr(feature = "serde", serde(default))]
    pub contact: HashMap<String, String>,
}

/// Errors returned by [`Club::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClubError {
    /// The club name was empty or whitespace.
    #[error("club must have a non-empty name")]
    MissingName,
    /// The description was empty or whitespace.
    #[error("club must have a non-empty description")]
    MissingDescription,
}

impl Club {
    /// Validates and constructs a [`Club`].
    ///
    /// # Errors
    /// Returns [`ClubError`] when the name or description is empty.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Result<Self, ClubError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ClubError::MissingName);
        }
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ClubError::MissingDescription);
        }
        Ok(Self {
            id,
            name,
            category,
            description,
            history: None,
            past_activities: Vec::new(),
            contact: HashMap::new(),
        })
    }

    /// Attach a founding history while returning `self` for chaining.
    pub fn with_history(mut self, history: impl Into<String>) -> Self {
        self.history = Some(history.into());
        self
    }

    /// Replace the past-activity list while returning `self` for chaining.
    pub fn with_past_activities(mut self, activities: Vec<String>) -> Self {
        self.past_activities = activities;
        self
    }

    /// Add a contact channel while returning `self` for chaining.
    pub fn with_contact(mut self, channel: impl Into<String>, value: impl Into<String>) -> Self {
        self.contact.insert(channel.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "คำอธิบาย", ClubError::MissingName)]
    #[case("  ", "คำอธิบาย", ClubError::MissingName)]
    #[case("ชมรมกีฬา", "", ClubError::MissingDescription)]
    fn construction_rejects_blank_fields(
        #[case] name: &str,
        #[case] description: &str,
        #[case] expected: ClubError,
    ) {
        let result = Club::new(1, name, Category::Sports, description);
        assert_eq!(result.unwrap_err(), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn club_round_trips_through_serde() {
        let club = Club::new(2, "ชมรมดนตรีสากล", Category::Music, "รวมคนรักดนตรี")
            .unwrap()
            .with_history("ก่อตั้งเมื่อปี 2540");
        let json = serde_json::to_string(&club).unwrap();
        let restored: Club = serde_json::from_str(&json).unwrap();
        assert_eq!(club, restored);
    }

    #[rstest]
    fn builder_chains_optional_fields() {
        let club = Club::new(7, "ชมรมอาสา", Category::Volunteer, "ช่วยเหลือชุมชน")
            .unwrap()
            .with_history("เริ่มจากค่ายอาสาปี 2555")
            .with_past_activities(vec!["ค่ายอาสาพัฒนา".into()])
            .with_contact("line", "@volunteer");
        assert_eq!(club.history.as_deref(), Some("เริ่มจากค่ายอาสาปี 2555"));
        assert_eq!(club.past_activities.len(), 1);
        assert_eq!(club.contact.get("line").map(String::as_str), Some("@volunteer"));
    }
}
