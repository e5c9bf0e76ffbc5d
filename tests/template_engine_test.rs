// ==========================================
// TemplateEngine 引擎集成测试
// ==========================================
// 测试目标: 验证行业标准任务清单生成
// 覆盖范围: 通用/类型专属任务/排序/确定性 ID/策略联动
// ==========================================

use chrono::NaiveDate;
use release_planner::domain::distributor::{DistributorKind, DistributorPolicy};
use release_planner::domain::project::ReleaseProject;
use release_planner::domain::types::{
    ReleaseType, TaskPhase, TaskPriority, TaskStatus, UploadStatus, WeekendAdjust,
};
use release_planner::engine::TemplateEngine;

// ==========================================
// 测试辅助函数
// ==========================================

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn create_test_project(release_type: ReleaseType, release_date: NaiveDate) -> ReleaseProject {
    ReleaseProject {
        id: "P001".to_string(),
        title: "Midnight Drive".to_string(),
        release_type,
        release_date,
        distributor: Some(DistributorKind::DistroKid),
        policy: None,
        upload_status: UploadStatus::NotStarted,
        tasks: Vec::new(),
    }
}

// ==========================================
// 任务清单生成测试
// ==========================================

#[test]
fn test_scenario_01_single_checklist() {
    // 场景1: 单曲 = 13 条通用任务 + 1 条专属任务
    let engine = TemplateEngine::new();
    let project = create_test_project(ReleaseType::Single, day(2025, 11, 21));

    let tasks = engine.generate(&project).unwrap();

    assert_eq!(tasks.len(), 14);
    assert!(tasks.iter().any(|t| t.title == "Lyric Video (Optional)"));
}

#[test]
fn test_scenario_02_ep_checklist() {
    // 场景2: EP = 13 + 3
    let engine = TemplateEngine::new();
    let project = create_test_project(ReleaseType::Ep, day(2025, 11, 21));

    let tasks = engine.generate(&project).unwrap();

    assert_eq!(tasks.len(), 16);
    assert!(tasks.iter().any(|t| t.title == "Finalize EP Tracklist"));
    assert!(tasks.iter().any(|t| t.title == "Create Artwork Variations"));
}

#[test]
fn test_scenario_03_album_checklist() {
    // 场景3: 专辑 = 13 + 3,最早任务是专辑定序 (-35 天)
    let engine = TemplateEngine::new();
    let project = create_test_project(ReleaseType::Album, day(2025, 11, 21));

    let tasks = engine.generate(&project).unwrap();

    assert_eq!(tasks.len(), 16);
    assert_eq!(tasks[0].title, "Finalize Album Sequence + ISRCs");
    assert_eq!(tasks[0].due, day(2025, 10, 17));
    assert_eq!(tasks[0].phase, TaskPhase::PreProduction);
    assert_eq!(tasks[0].priority, TaskPriority::Critical);
}

#[test]
fn test_scenario_04_sorted_and_deterministic_ids() {
    // 场景4: 按到期日升序,ID 按序号推导,同输入必同输出
    let engine = TemplateEngine::new();
    let project = create_test_project(ReleaseType::Single, day(2025, 11, 21));

    let tasks = engine.generate(&project).unwrap();

    for pair in tasks.windows(2) {
        assert!(pair[0].due <= pair[1].due);
    }
    for (index, task) in tasks.iter().enumerate() {
        assert_eq!(task.id, format!("P001/task/{:02}", index));
        assert_eq!(task.project_id, "P001");
        assert_eq!(task.status, TaskStatus::Pending);
    }

    let again = engine.generate(&project).unwrap();
    assert_eq!(tasks.len(), again.len());
    assert!(tasks
        .iter()
        .zip(again.iter())
        .all(|(a, b)| a.id == b.id && a.due == b.due && a.title == b.title));
}

#[test]
fn test_scenario_05_upload_task_uses_catalog_policy() {
    // 场景5: 上传任务到期日按目录分发商默认策略 (DistroKid 21 天)
    let engine = TemplateEngine::new();
    let project = create_test_project(ReleaseType::Single, day(2025, 11, 21));

    let tasks = engine.generate(&project).unwrap();
    let upload = tasks.iter().find(|t| t.title == "Upload to DistroKid").unwrap();

    assert_eq!(upload.due, day(2025, 10, 31));
    assert_eq!(upload.phase, TaskPhase::Distribution);
    assert_eq!(upload.priority, TaskPriority::Critical);
}

#[test]
fn test_scenario_06_upload_task_honors_weekend_adjust() {
    // 场景6: 显式策略 (周末顺延) 优先于目录默认,上传任务跟随移位
    let engine = TemplateEngine::new();
    let mut project = create_test_project(ReleaseType::Single, day(2025, 4, 19));
    project.policy = Some(DistributorPolicy::new(21, WeekendAdjust::NextBusinessDay));

    let tasks = engine.generate(&project).unwrap();
    let upload = tasks.iter().find(|t| t.title == "Upload to DistroKid").unwrap();

    // 候选日 2025-03-29 (周六) 顺延到周一
    assert_eq!(upload.due, day(2025, 3, 31));
}

#[test]
fn test_scenario_07_generic_distributor_name() {
    // 场景7: 未配置分发商时上传任务用通用名
    let engine = TemplateEngine::new();
    let mut project = create_test_project(ReleaseType::Single, day(2025, 11, 21));
    project.distributor = None;

    let tasks = engine.generate(&project).unwrap();

    assert!(tasks.iter().any(|t| t.title == "Upload to Distributor"));
}

#[test]
fn test_scenario_08_amuse_shorter_lead() {
    // 场景8: Amuse 目录提前期 14 天
    let engine = TemplateEngine::new();
    let mut project = create_test_project(ReleaseType::Single, day(2025, 12, 1));
    project.distributor = Some(DistributorKind::Amuse);

    let tasks = engine.generate(&project).unwrap();
    let upload = tasks.iter().find(|t| t.title == "Upload to Amuse").unwrap();

    assert_eq!(upload.due, day(2025, 11, 17));
}
