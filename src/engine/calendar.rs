// ==========================================
// 音乐发行计划系统 - 项目日历引擎
// ==========================================
// 依据: Release_Planner_PRD_v0.4 - 项目日历
// ==========================================
// 职责: 从发行项目派生日历事件 (发行日/上传截止/任务到期)
// 输入: ReleaseProject (只读) + 可选提前天数覆盖
// 输出: CalendarEvent 列表 (按日期升序,事件 ID 确定性推导)
// ==========================================

use crate::domain::project::{CalendarEvent, ReleaseProject};
use crate::domain::types::EventType;
use crate::engine::deadline::DeadlineEngine;
use crate::engine::error::EngineError;
use chrono::NaiveDate;
use tracing::{debug, instrument};

// ==========================================
// CalendarEngine - 项目日历引擎
// ==========================================
pub struct CalendarEngine {
    deadline: DeadlineEngine,
}

impl CalendarEngine {
    /// 创建新的日历引擎
    pub fn new() -> Self {
        Self {
            deadline: DeadlineEngine::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 派生单个项目的日历事件
    ///
    /// 事件构成:
    /// 1) 发行日事件
    /// 2) 上传截止事件 (经 DeadlineEngine,遵循项目生效策略)
    /// 3) 每个任务一条到期事件
    ///
    /// lead_days_override 透传给 DeadlineEngine,只影响上传截止事件
    #[instrument(skip(self, project), fields(project_id = %project.id))]
    pub fn build_project_events(
        &self,
        project: &ReleaseProject,
        lead_days_override: Option<i64>,
    ) -> Result<Vec<CalendarEvent>, EngineError> {
        let mut events = Vec::with_capacity(project.tasks.len() + 2);

        // 发行日
        events.push(CalendarEvent {
            id: format!("{}/release", project.id),
            project_id: project.id.clone(),
            date: project.release_date,
            event_type: EventType::Release,
            title: format!("Release Day - {}", project.title),
            description: project.release_type.to_string(),
        });

        // 上传截止日 (分发商策略)
        let policy = project.effective_policy();
        let upload_by = self.deadline.compute_upload_by(
            project.release_date,
            policy.as_ref(),
            lead_days_override,
        )?;
        events.push(CalendarEvent {
            id: format!("{}/upload-by", project.id),
            project_id: project.id.clone(),
            date: upload_by,
            event_type: EventType::UploadBy,
            title: format!("Upload to {} - {}", project.distributor_name(), project.title),
            description: String::new(),
        });

        // 任务到期日
        for task in &project.tasks {
            events.push(CalendarEvent {
                id: format!("{}/task/{}", project.id, task.id),
                project_id: project.id.clone(),
                date: task.due,
                event_type: EventType::TaskDue,
                title: task.title.clone(),
                description: task.description.clone(),
            });
        }

        // 稳定排序: 同日事件保持构造顺序 (发行日/截止日在前)
        events.sort_by_key(|event| event.date);

        debug!(count = events.len(), "项目日历事件已生成");
        Ok(events)
    }

    /// 汇总多个项目在区间内的日历事件 (闭区间,按日期升序)
    pub fn events_in_range(
        &self,
        projects: &[ReleaseProject],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CalendarEvent>, EngineError> {
        let mut all = Vec::new();
        for project in projects {
            all.extend(self.build_project_events(project, None)?);
        }
        all.retain(|event| event.date >= start && event.date <= end);
        all.sort_by_key(|event| event.date);
        Ok(all)
    }
}

impl Default for CalendarEngine {
    fn default() -> Self {
        Self::new()
    }
}
