//! Behavioural coverage for catalogue loading from real files.

#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

use camino::{Utf8Path, Utf8PathBuf};
use clubmatch_core::{ActivityStatus, Category};
use clubmatch_data::{CatalogError, load_activities, load_catalog, load_clubs};
use rstest::rstest;
use tempfile::TempDir;

const CLUBS_JSON: &str = r#"[
    {
        "id": 1,
        "name": "ชมรมฟุตบอล",
        "category": "sports",
        "description": "ฝึกซ้อมและแข่งขันฟุตบอล",
        "pastActivities": ["แข่งฟุตบอลประเพณี"],
        "contact": {"line": "@football"}
    },
    {
        "id": 2,
        "name": "ชมรมดนตรีสากล",
        "category": "music",
        "description": "รวมคนรักดนตรี",
        "history": "ก่อตั้งเมื่อปี 2540"
    }
]"#;

const ACTIVITIES_JSON: &str = r#"[
    {
        "id": 10,
        "name": "เวิร์กช็อปกีตาร์",
        "description": "สอนกีตาร์พื้นฐาน",
        "club": "ชมรมดนตรีสากล",
        "status": "open",
        "date": "15 ส.ค. 2568",
        "deadline": "10 ส.ค. 2568"
    },
    {
        "id": 11,
        "name": "แข่งฟุตบอล 7 คน",
        "club": "ชมรมฟุตบอล",
        "status": "closing"
    }
]"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("utf8 path");
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
    path
}

#[rstest]
fn loads_clubs_with_optional_fields() {
    let temp = TempDir::new().expect("tempdir");
    let path = write_file(&temp, "clubs.json", CLUBS_JSON);

    let clubs = load_clubs(&path).expect("clubs should load");

    assert_eq!(clubs.len(), 2);
    assert_eq!(clubs[0].category, Category::Sports);
    assert_eq!(clubs[0].past_activities, ["แข่งฟุตบอลประเพณี"]);
    assert_eq!(clubs[0].contact.get("line").map(String::as_str), Some("@football"));
    assert_eq!(clubs[1].history.as_deref(), Some("ก่อตั้งเมื่อปี 2540"));
    assert!(clubs[1].past_activities.is_empty());
}

#[rstest]
fn loads_activities_with_defaulted_fields() {
    let temp = TempDir::new().expect("tempdir");
    let path = write_file(&temp, "activities.json", ACTIVITIES_JSON);

    let activities = load_activities(&path).expect("activities should load");

    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].status, ActivityStatus::Open);
    assert_eq!(activities[0].deadline, "10 ส.ค. 2568");
    // The second record omits description and schedule fields entirely.
    assert_eq!(activities[1].status, ActivityStatus::Closing);
    assert!(activities[1].description.is_empty());
    assert!(activities[1].date.is_empty());
}

#[rstest]
fn load_catalog_combines_both_files() {
    let temp = TempDir::new().expect("tempdir");
    let clubs_path = write_file(&temp, "clubs.json", CLUBS_JSON);
    let activities_path = write_file(&temp, "activities.json", ACTIVITIES_JSON);

    let catalog = load_catalog(&clubs_path, &activities_path).expect("catalog should load");

    assert_eq!(catalog.clubs.len(), 2);
    assert_eq!(catalog.activities.len(), 2);
}

#[rstest]
fn missing_file_reports_the_path() {
    let err = load_clubs(Utf8Path::new("no-such-dir/clubs.json"))
        .expect_err("missing file should error");
    assert!(matches!(err, CatalogError::ReadFile { .. }));
    assert!(err.to_string().contains("no-such-dir/clubs.json"));
}

#[rstest]
fn malformed_json_reports_a_parse_error() {
    let temp = TempDir::new().expect("tempdir");
    let path = write_file(&temp, "clubs.json", "[{");

    let err = load_clubs(&path).expect_err("malformed JSON should error");
    assert!(matches!(err, CatalogError::Parse { .. }));
}

#[rstest]
fn unknown_category_in_file_reports_the_record() {
    let temp = TempDir::new().expect("tempdir");
    let path = write_file(
        &temp,
        "clubs.json",
        r#"[{"id": 3, "name": "ชมรมเกม", "category": "esports", "description": "เล่นเกม"}]"#,
    );

    let err = load_clubs(&path).expect_err("unknown category should error");
    assert!(matches!(err, CatalogError::UnknownCategory { id: 3, .. }));
}

#[rstest]
fn orphan_activities_survive_the_cross_check() {
    let temp = TempDir::new().expect("tempdir");
    let clubs_path = write_file(&temp, "clubs.json", CLUBS_JSON);
    let activities_path = write_file(
        &temp,
        "activities.json",
        r#"[{"id": 12, "name": "ค่ายอาสา", "club": "ชมรมที่ถูกยุบ", "status": "open"}]"#,
    );

    let catalog = load_catalog(&clubs_path, &activities_path).expect("catalog should load");
    assert_eq!(catalog.activities.len(), 1);
}
