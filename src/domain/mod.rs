// ==========================================
// 音乐发行计划系统 - 领域模型层
// ==========================================
// 依据: Release_Planner_PRD_v0.4 - 领域模型
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod distributor;
pub mod project;
pub mod types;

// 重导出核心类型
pub use distributor::{
    DeadlineQuery, DistributorKind, DistributorPolicy, ReminderCheckpoint, UploadDeadline,
};
pub use project::{CalendarEvent, ReleaseProject, ReleaseTask};
pub use types::{
    EventType, ReleaseType, TaskPhase, TaskPriority, TaskStatus, UploadStatus, WeekendAdjust,
};
