// ==========================================
// 音乐发行计划系统 - 发行项目领域模型
// ==========================================
// 依据: Release_Planner_PRD_v0.4 - 发行项目聚合
// ==========================================
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

use crate::domain::distributor::{DistributorKind, DistributorPolicy};
use crate::domain::types::{
    EventType, ReleaseType, TaskPhase, TaskPriority, TaskStatus, UploadStatus,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// ReleaseProject - 发行项目
// ==========================================
// 用途: 调用方构造并持有,引擎只读
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseProject {
    // ===== 主键 =====
    pub id: String, // 项目唯一标识 (UUID)

    // ===== 基础信息 =====
    pub title: String,
    pub release_type: ReleaseType,
    pub release_date: NaiveDate, // 民用日期,不做时区换算

    // ===== 分发配置 =====
    pub distributor: Option<DistributorKind>, // 目录分发商 (可选)
    pub policy: Option<DistributorPolicy>,    // 显式策略,优先于目录默认
    pub upload_status: UploadStatus,

    // ===== 任务清单 =====
    pub tasks: Vec<ReleaseTask>,
}

impl ReleaseProject {
    /// 创建新项目 (生成 UUID,任务清单为空)
    pub fn new(title: &str, release_type: ReleaseType, release_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            release_type,
            release_date,
            distributor: None,
            policy: None,
            upload_status: UploadStatus::NotStarted,
            tasks: Vec::new(),
        }
    }

    /// 生效的分发策略
    ///
    /// 解析顺序: 显式 policy > 目录分发商默认策略 > None (系统默认)
    pub fn effective_policy(&self) -> Option<DistributorPolicy> {
        self.policy
            .or_else(|| self.distributor.map(|kind| kind.default_policy()))
    }

    /// 分发商展示名称 (未配置时回退为通用名)
    pub fn distributor_name(&self) -> &'static str {
        match self.distributor {
            Some(kind) => kind.display_name(),
            None => "Distributor",
        }
    }
}

// ==========================================
// ReleaseTask - 发行任务
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseTask {
    // ===== 主键与关联 =====
    pub id: String,
    pub project_id: String,

    // ===== 任务内容 =====
    pub title: String,
    pub description: String,
    pub due: NaiveDate,
    pub phase: TaskPhase,
    pub priority: TaskPriority,
    pub status: TaskStatus,
}

impl ReleaseTask {
    pub fn new(
        project_id: &str,
        title: &str,
        due: NaiveDate,
        phase: TaskPhase,
        priority: TaskPriority,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            project_id: project_id.to_string(),
            title: title.to_string(),
            description: String::new(),
            due,
            phase,
            priority,
            status: TaskStatus::Pending,
        }
    }

    /// 任务是否未完成 (参与日历与提醒)
    pub fn is_open(&self) -> bool {
        self.status != TaskStatus::Completed
    }
}

// ==========================================
// CalendarEvent - 日历事件
// ==========================================
// 由 CalendarEngine 派生,事件 ID 从项目 ID 确定性推导
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String, // "{project_id}/release" 等,同输入必同 ID
    pub project_id: String,
    pub date: NaiveDate,
    pub event_type: EventType,
    pub title: String,
    pub description: String,
}
