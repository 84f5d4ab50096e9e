//! Test-only catalogue fixtures shared by unit and behaviour tests.

use crate::{Activity, ActivityStatus, Category, Club};

/// Build a minimal valid club, panicking on invalid fixture data.
pub fn sample_club(id: u64, name: &str, category: Category, description: &str) -> Club {
    Club::new(id, name, category, description).expect("fixture club should be valid")
}

/// A small club catalogue covering several categories.
pub fn sample_clubs() -> Vec<Club> {
    vec![
        sample_club(
            1,
            "ชมรมฟุตบอล",
            Category::Sports,
            "ฝึกซ้อมและแข่งขันฟุตบอลระหว่างมหาวิทยาลัย",
        )
        .with_past_activities(vec![
            "แข่งฟุตบอลประเพณี".into(),
            "ค่ายฝึกซ้อมภาคฤดูร้อน".into(),
        ]),
        sample_club(
            2,
            "ชมรมดนตรีสากล",
            Category::Music,
            "รวมคนรักดนตรี วงดนตรี และการแสดงสด",
        )
        .with_history("ก่อตั้งเมื่อปี 2540 โดยนักศึกษาคณะศิลปกรรม")
        .with_past_activities(vec!["คอนเสิร์ตการกุศล".into(), "เวิร์กช็อปกีตาร์".into()]),
        sample_club(
            3,
            "ชมรมอาสาพัฒนา",
            Category::Volunteer,
            "ออกค่ายอาสาช่วยเหลือชุมชนและโรงเรียนห่างไกล",
        ),
    ]
}

/// Activities belonging to [`sample_clubs`], one per registration status.
pub fn sample_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            10,
            "เวิร์กช็อปกีตาร์",
            "สอนกีตาร์พื้นฐานสำหรับมือใหม่",
            "ชมรมดนตรีสากล",
            ActivityStatus::Open,
        )
        .expect("fixture activity should be valid")
        .with_schedule("15 ส.ค. 2568", "10 ส.ค. 2568"),
        Activity::new(
            11,
            "แข่งฟุตบอล 7 คน",
            "แข่งขันฟุตบอลระหว่างคณะ",
            "ชมรมฟุตบอล",
            ActivityStatus::Closing,
        )
        .expect("fixture activity should be valid"),
        Activity::new(
            12,
            "ค่ายอาสาฤดูหนาว",
            "สร้างห้องสมุดให้โรงเรียนบนดอย",
            "ชมรมอาสาพัฒนา",
            ActivityStatus::Closed,
        )
        .expect("fixture activity should be valid"),
    ]
}
