//! Focused unit tests covering recommend CLI configuration and execution.

use super::*;
use camino::Utf8PathBuf;
use rstest::rstest;
use tempfile::TempDir;

const CLUBS_JSON: &str = r#"[
    {
        "id": 1,
        "name": "ชมรมฟุตบอล",
        "category": "sports",
        "description": "ฝึกซ้อมและแข่งขันฟุตบอล"
    },
    {
        "id": 2,
        "name": "ชมรมดนตรีสากล",
        "category": "music",
        "description": "รวมคนรักดนตรี"
    }
]"#;

const ACTIVITIES_JSON: &str = r#"[
    {
        "id": 10,
        "name": "เวิร์กช็อปกีตาร์",
        "description": "สอนกีตาร์พื้นฐาน",
        "club": "ชมรมดนตรีสากล",
        "status": "open"
    }
]"#;

fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace")
}

fn write_utf8(path: &Utf8PathBuf, contents: &str) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

#[rstest]
fn converting_recommend_without_query_errors() {
    let args = RecommendArgs {
        query: None,
        ..RecommendArgs::default()
    };

    let err = RecommendConfig::try_from(args).expect_err("missing query should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RECOMMEND_QUERY);
            assert_eq!(env, ENV_RECOMMEND_QUERY);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn recommend_config_derives_default_catalogue_paths() {
    let args = RecommendArgs {
        query: Some("ดนตรี".into()),
        catalog_dir: Some(Utf8PathBuf::from("catalog")),
        ..RecommendArgs::default()
    };

    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(config.clubs, Utf8PathBuf::from("catalog/clubs.json"));
    assert_eq!(
        config.activities,
        Utf8PathBuf::from("catalog/activities.json")
    );
    assert!(config.output.is_none());
}

#[rstest]
fn explicit_paths_override_the_catalogue_dir() {
    let args = RecommendArgs {
        query: Some("ดนตรี".into()),
        catalog_dir: Some(Utf8PathBuf::from("catalog")),
        clubs: Some(Utf8PathBuf::from("elsewhere/clubs.json")),
        ..RecommendArgs::default()
    };

    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(config.clubs, Utf8PathBuf::from("elsewhere/clubs.json"));
    assert_eq!(
        config.activities,
        Utf8PathBuf::from("catalog/activities.json")
    );
}

#[rstest]
fn validate_sources_reports_the_missing_file() {
    let tmp = TempDir::new().expect("tempdir");
    let root = utf8_root(&tmp);
    let clubs = root.join("clubs.json");
    write_utf8(&clubs, CLUBS_JSON);

    let config = RecommendConfig {
        query: "ดนตรี".into(),
        clubs,
        activities: root.join("activities.json"),
        output: None,
    };

    let err = config
        .validate_sources()
        .expect_err("missing activities file should error");
    match err {
        CliError::MissingSourceFile { field, .. } => {
            assert_eq!(field, ARG_RECOMMEND_ACTIVITIES);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn execute_ranks_the_catalogue() {
    let tmp = TempDir::new().expect("tempdir");
    let root = utf8_root(&tmp);
    let clubs = root.join("clubs.json");
    let activities = root.join("activities.json");
    write_utf8(&clubs, CLUBS_JSON);
    write_utf8(&activities, ACTIVITIES_JSON);

    let config = RecommendConfig {
        query: "ดนตรี".into(),
        clubs,
        activities,
        output: None,
    };
    config.validate_sources().expect("sources should exist");

    let report = config.execute().expect("recommendation should run");
    assert_eq!(report.total_matches, 1);
    assert_eq!(
        report
            .recommendations
            .first()
            .map(|entry| entry.club.id),
        Some(2)
    );
}

#[rstest]
fn execute_rejects_a_whitespace_query() {
    let tmp = TempDir::new().expect("tempdir");
    let root = utf8_root(&tmp);
    let clubs = root.join("clubs.json");
    let activities = root.join("activities.json");
    write_utf8(&clubs, CLUBS_JSON);
    write_utf8(&activities, ACTIVITIES_JSON);

    let config = RecommendConfig {
        query: "   ".into(),
        clubs,
        activities,
        output: None,
    };

    let err = config.execute().expect_err("blank query should error");
    assert!(matches!(err, CliError::Query(QueryError::Empty)));
}

#[rstest]
fn write_report_honours_the_output_path() {
    let tmp = TempDir::new().expect("tempdir");
    let root = utf8_root(&tmp);
    let clubs = root.join("clubs.json");
    let activities = root.join("activities.json");
    let output = root.join("report.json");
    write_utf8(&clubs, CLUBS_JSON);
    write_utf8(&activities, ACTIVITIES_JSON);

    let config = RecommendConfig {
        query: "ดนตรี".into(),
        clubs,
        activities,
        output: Some(output.clone()),
    };
    let report = config.execute().expect("recommendation should run");
    config.write_report(&report).expect("report should write");

    let written = std::fs::read_to_string(output.as_std_path()).expect("read report");
    assert!(written.contains("\"search_term\": \"ดนตรี\""));
}
