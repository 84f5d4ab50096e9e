//! Catalogue loading for the clubmatch recommendation engine.
//!
//! The engine treats its two catalogues as read-only inputs owned by a data
//! provider. This crate is that provider: it decodes the directory site's
//! JSON records (camelCase field names, as exported by the site), validates
//! them into [`clubmatch_core`] types, and reports structural problems with
//! the offending record's identifier.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use clubmatch_data::load_catalog;
//!
//! let catalog = load_catalog(
//!     Utf8Path::new("catalog/clubs.json"),
//!     Utf8Path::new("catalog/activities.json"),
//! )?;
//! println!("{} clubs, {} activities", catalog.clubs.len(), catalog.activities.len());
//! # Ok::<(), clubmatch_data::CatalogError>(())
//! ```

#![forbid(unsafe_code)]

use std::collections::HashSet;
use std::str::FromStr;

use camino::Utf8Path;
use clubmatch_core::{Activity, ActivityStatus, Category, Club};

mod error;
mod fs;
mod records;

pub use error::CatalogError;
pub use fs::file_is_file;
pub use records::{ActivityRecord, ClubRecord};

/// The two catalogues consumed by the recommendation pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Every club in the directory.
    pub clubs: Vec<Club>,
    /// Every activity in the directory.
    pub activities: Vec<Activity>,
}

/// Load and validate the club catalogue.
///
/// # Errors
/// Returns [`CatalogError`] when the file cannot be read, the JSON does not
/// decode, or a record fails domain validation.
pub fn load_clubs(path: &Utf8Path) -> Result<Vec<Club>, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<ClubRecord> =
        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    records
        .into_iter()
        .map(|record| club_from_record(record, path))
        .collect()
}

/// Load and validate the activity catalogue.
///
/// # Errors
/// Returns [`CatalogError`] when the file cannot be read, the JSON does not
/// decode, or a record fails domain validation.
pub fn load_activities(path: &Utf8Path) -> Result<Vec<Activity>, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<ActivityRecord> =
        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    records
        .into_iter()
        .map(|record| activity_from_record(record, path))
        .collect()
}

/// Load both catalogues and cross-check activity ownership.
///
/// Activities naming a club absent from the club catalogue are kept (the
/// scorer simply never selects them) but logged, since they usually indicate
/// a renamed club.
///
/// # Errors
/// Propagates [`CatalogError`] from either loader.
pub fn load_catalog(
    clubs_path: &Utf8Path,
    activities_path: &Utf8Path,
) -> Result<Catalog, CatalogError> {
    let clubs = load_clubs(clubs_path)?;
    let activities = load_activities(activities_path)?;

    let known_names: HashSet<&str> = clubs.iter().map(|club| club.name.as_str()).collect();
    for activity in &activities {
        if !known_names.contains(activity.club.as_str()) {
            log::warn!(
                "activity {} ('{}') references unknown club '{}'",
                activity.id,
                activity.name,
                activity.club
            );
        }
    }

    Ok(Catalog { clubs, activities })
}

fn club_from_record(record: ClubRecord, path: &Utf8Path) -> Result<Club, CatalogError> {
    let category =
        Category::from_str(&record.category).map_err(|_| CatalogError::UnknownCategory {
            id: record.id,
            path: path.to_path_buf(),
            value: record.category.clone(),
        })?;
    let mut club = Club::new(record.id, record.name, category, record.description).map_err(
        |source| CatalogError::InvalidClub {
            id: record.id,
            path: path.to_path_buf(),
            source,
        },
    )?;
    if let Some(history) = record.history {
        club = club.with_history(history);
    }
    club = club.with_past_activities(record.past_activities);
    for (channel, value) in record.contact {
        club = club.with_contact(channel, value);
    }
    Ok(club)
}

fn activity_from_record(record: ActivityRecord, path: &Utf8Path) -> Result<Activity, CatalogError> {
    let status =
        ActivityStatus::from_str(&record.status).map_err(|_| CatalogError::UnknownStatus {
            id: record.id,
            path: path.to_path_buf(),
            value: record.status.clone(),
        })?;
    Activity::new(
        record.id,
        record.name,
        record.description,
        record.club,
        status,
    )
    .map_err(|source| CatalogError::InvalidActivity {
        id: record.id,
        path: path.to_path_buf(),
        source,
    })
    .map(|activity| activity.with_schedule(record.date, record.deadline))
}
