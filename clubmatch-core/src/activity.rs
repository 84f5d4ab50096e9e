//! Activities published by clubs, with their registration status.

use thiserror::Error;

/// Registration window of an [`Activity`].
///
/// # Examples
/// ```
/// use clubmatch_core::ActivityStatus;
///
/// assert_eq!(ActivityStatus::Closing.as_str(), "closing");
/// assert!(ActivityStatus::Open.is_accepting());
/// assert!(!ActivityStatus::Closed.is_accepting());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ActivityStatus {
    /// Registration is open.
    Open,
    /// Registration closes soon.
    Closing,
    /// Registration has closed.
    Closed,
}

impl ActivityStatus {
    /// Return the status as a lowercase `&str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closing => "closing",
            Self::Closed => "closed",
        }
    }

    /// Report whether the activity still accepts registrations.
    pub fn is_accepting(&self) -> bool {
        matches!(self, Self::Open | Self::Closing)
    }
}

impl std::fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActivityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closing" => Ok(Self::Closing),
            "closed" => Ok(Self::Closed),
            _ => Err(format!("unknown activity status '{s}'")),
        }
    }
}

/// An activity a club is running or has announced.
///
/// The scheduled date and registration deadline are display strings owned by
/// the catalogue provider; scoring only consults the status.
///
/// # Examples
/// ```
/// use clubmatch_core::{Activity, ActivityStatus};
///
/// # fn main() -> Result<(), clubmatch_core::ActivityError> {
/// let activity = Activity::new(
///     10,
///     "เวิร์กช็อปกีตาร์",
///     "สอนกีตาร์พื้นฐานสำหรับมือใหม่",
///     "ชมรมดนตรีสากล",
///     ActivityStatus::Open,
/// )?
/// .with_schedule("15 ส.ค. 2568", "10 ส.ค. 2568");
/// assert!(activity.status.is_accepting());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    /// Unique identifier.
    pub id: u64,
    /// Activity name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Name of the owning club.
    pub club: String,
    /// Registration window.
    pub status: ActivityStatus,
    /// Scheduled date, as displayed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub date: String,
    /// Registration deadline, as displayed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub deadline: String,
}

/// Errors returned by [`Activity::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivityError {
    /// The activity name was empty or whitespace.
    #[error("activity must have a non-empty name")]
    MissingName,
    /// The owning club name was empty or whitespace.
    #[error("activity must name its owning club")]
    MissingClub,
}

impl Activity {
    /// Validates and constructs an [`Activity`].
    ///
    /// # Errors
    /// Returns [`ActivityError`] when the name or owning club is empty.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        description: impl Into<String>,
        club: impl Into<String>,
        status: ActivityStatus,
    ) -> Result<Self, ActivityError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ActivityError::MissingName);
        }
        let club = club.into();
        if club.trim().is_empty() {
            return Err(ActivityError::MissingClub);
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            club,
            status,
            date: String::new(),
            deadline: String::new(),
        })
    }

    /// Attach the displayed schedule while returning `self` for chaining.
    pub fn with_schedule(mut self, date: impl Into<String>, deadline: impl Into<String>) -> Self {
        self.date = date.into();
        self.deadline = deadline.into();
        self
    }
}
