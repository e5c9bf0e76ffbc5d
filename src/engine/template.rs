// ==========================================
// 音乐发行计划系统 - 任务模板引擎
// ==========================================
// 依据: Release_Planner_PRD_v0.4 - 行业标准任务模板
// ==========================================
// 职责: 按发行类型生成任务清单 (通用任务 + 类型专属任务)
// 输入: ReleaseProject (只读)
// 输出: ReleaseTask 列表 (按到期日升序,任务 ID 确定性推导)
// 说明: 分发商上传任务的到期日经 DeadlineEngine,遵循项目策略
// ==========================================

use crate::domain::project::{ReleaseProject, ReleaseTask};
use crate::domain::types::{ReleaseType, TaskPhase, TaskPriority, TaskStatus};
use chrono::{Duration, NaiveDate};
use tracing::instrument;

use crate::engine::deadline::DeadlineEngine;
use crate::engine::error::EngineError;

// ==========================================
// 模板条目 (内部表示)
// ==========================================
struct TaskSpec {
    title: String,
    description: &'static str,
    due: NaiveDate,
    phase: TaskPhase,
    priority: TaskPriority,
}

impl TaskSpec {
    fn new(
        title: impl Into<String>,
        description: &'static str,
        due: NaiveDate,
        phase: TaskPhase,
        priority: TaskPriority,
    ) -> Self {
        Self {
            title: title.into(),
            description,
            due,
            phase,
            priority,
        }
    }
}

// ==========================================
// TemplateEngine - 任务模板引擎
// ==========================================
pub struct TemplateEngine {
    deadline: DeadlineEngine,
}

impl TemplateEngine {
    /// 创建新的模板引擎
    pub fn new() -> Self {
        Self {
            deadline: DeadlineEngine::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成项目的行业标准任务清单
    ///
    /// 规则:
    /// 1) 通用任务对所有发行类型生效
    /// 2) 按 release_type 追加类型专属任务
    /// 3) 按到期日升序,任务 ID 按排序后序号推导 ("{project_id}/task/{:02}")
    ///
    /// 上传任务到期日经 DeadlineEngine 计算,策略非法时返回 InvalidArgument
    #[instrument(skip(self, project), fields(project_id = %project.id, release_type = %project.release_type))]
    pub fn generate(&self, project: &ReleaseProject) -> Result<Vec<ReleaseTask>, EngineError> {
        let release = project.release_date;
        let policy = project.effective_policy();
        let upload_by =
            self.deadline
                .compute_upload_by(release, policy.as_ref(), None)?;

        let mut specs = Self::common_tasks(release, upload_by, project.distributor_name());
        match project.release_type {
            ReleaseType::Single => specs.extend(Self::single_tasks(release)),
            ReleaseType::Ep => specs.extend(Self::ep_tasks(release)),
            ReleaseType::Album => specs.extend(Self::album_tasks(release)),
        }

        // 稳定排序后按序号定 ID,同输入必同输出
        specs.sort_by_key(|spec| spec.due);

        let tasks = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| ReleaseTask {
                id: format!("{}/task/{:02}", project.id, index),
                project_id: project.id.clone(),
                title: spec.title,
                description: spec.description.to_string(),
                due: spec.due,
                phase: spec.phase,
                priority: spec.priority,
                status: TaskStatus::Pending,
            })
            .collect();

        Ok(tasks)
    }

    // ==========================================
    // 通用任务 (所有发行类型)
    // ==========================================
    fn common_tasks(
        release: NaiveDate,
        upload_by: NaiveDate,
        distributor_name: &str,
    ) -> Vec<TaskSpec> {
        vec![
            TaskSpec::new(
                "Finalize Master",
                "Complete final mixing and mastering",
                release - Duration::days(28),
                TaskPhase::Production,
                TaskPriority::Critical,
            ),
            TaskSpec::new(
                "Create Artwork (1500x1500px)",
                "Design cover art meeting distributor requirements",
                release - Duration::days(24),
                TaskPhase::Production,
                TaskPriority::High,
            ),
            TaskSpec::new(
                format!("Upload to {}", distributor_name),
                "Upload tracks, artwork, and metadata. Required for editorial playlist pitching",
                upload_by,
                TaskPhase::Distribution,
                TaskPriority::Critical,
            ),
            TaskSpec::new(
                "Pitch to Editorial Playlists",
                "Submit to Spotify for Artists editorial consideration",
                upload_by,
                TaskPhase::Promotion,
                TaskPriority::High,
            ),
            TaskSpec::new(
                "Schedule Social Media Teasers",
                "Plan and schedule announcement posts",
                release - Duration::days(20),
                TaskPhase::Promotion,
                TaskPriority::Medium,
            ),
            TaskSpec::new(
                "Send Press Release / EPK",
                "Send electronic press kit to media contacts",
                release - Duration::days(18),
                TaskPhase::Promotion,
                TaskPriority::Medium,
            ),
            TaskSpec::new(
                "Announce Pre-Save Campaign",
                "Launch pre-save links on social media",
                release - Duration::days(18),
                TaskPhase::Promotion,
                TaskPriority::High,
            ),
            TaskSpec::new(
                "Create TikTok/Reels Content (3 clips)",
                "Shoot short-form video content for promotion",
                release - Duration::days(16),
                TaskPhase::Promotion,
                TaskPriority::High,
            ),
            TaskSpec::new(
                "Send Email Newsletter",
                "Announce release to email list",
                release - Duration::days(14),
                TaskPhase::Promotion,
                TaskPriority::Medium,
            ),
            TaskSpec::new(
                "Upload YouTube Visualizer",
                "Upload audio with visualizer to YouTube",
                release - Duration::days(7),
                TaskPhase::Promotion,
                TaskPriority::Medium,
            ),
            TaskSpec::new(
                "Release Day Post (All Platforms)",
                "Post release announcement on all social media",
                release,
                TaskPhase::Promotion,
                TaskPriority::Critical,
            ),
            TaskSpec::new(
                "Thank You / Follow-up Post",
                "Thank fans for support",
                release + Duration::days(1),
                TaskPhase::PostRelease,
                TaskPriority::Low,
            ),
            TaskSpec::new(
                "Pitch to Independent Curators",
                "Submit to independent playlist curators",
                release + Duration::days(2),
                TaskPhase::PostRelease,
                TaskPriority::Medium,
            ),
        ]
    }

    // ==========================================
    // 类型专属任务
    // ==========================================

    fn single_tasks(release: NaiveDate) -> Vec<TaskSpec> {
        vec![TaskSpec::new(
            "Lyric Video (Optional)",
            "Create and upload lyric video",
            release + Duration::days(3),
            TaskPhase::PostRelease,
            TaskPriority::Low,
        )]
    }

    fn ep_tasks(release: NaiveDate) -> Vec<TaskSpec> {
        vec![
            TaskSpec::new(
                "Finalize EP Tracklist",
                "Confirm track order and titles",
                release - Duration::days(30),
                TaskPhase::PreProduction,
                TaskPriority::High,
            ),
            TaskSpec::new(
                "Create Artwork Variations",
                "Design artwork for each track",
                release - Duration::days(25),
                TaskPhase::Production,
                TaskPriority::Medium,
            ),
            TaskSpec::new(
                "Create 12 Cinematic Mini-Videos",
                "Produce short promotional videos",
                release - Duration::days(15),
                TaskPhase::Promotion,
                TaskPriority::Medium,
            ),
        ]
    }

    fn album_tasks(release: NaiveDate) -> Vec<TaskSpec> {
        vec![
            TaskSpec::new(
                "Finalize Album Sequence + ISRCs",
                "Confirm track order and register ISRCs",
                release - Duration::days(35),
                TaskPhase::PreProduction,
                TaskPriority::Critical,
            ),
            TaskSpec::new(
                "Create Album Trailer Video",
                "Produce album announcement trailer",
                release - Duration::days(20),
                TaskPhase::Promotion,
                TaskPriority::High,
            ),
            TaskSpec::new(
                "Press Outreach Wave 2",
                "Follow-up press campaign",
                release + Duration::days(7),
                TaskPhase::PostRelease,
                TaskPriority::Medium,
            ),
        ]
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
