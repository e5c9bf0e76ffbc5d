// ==========================================
// 音乐发行计划系统 - 核心库
// ==========================================
// 系统定位: 纯计算核心 (截止日/提醒/日历/任务模板)
// 红线: 不做 I/O,不读系统时钟,调用方负责存储与展示
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 可调参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    EventType, ReleaseType, TaskPhase, TaskPriority, TaskStatus, UploadStatus, WeekendAdjust,
};

// 领域实体
pub use domain::{
    CalendarEvent, DeadlineQuery, DistributorKind, DistributorPolicy, ReleaseProject,
    ReleaseTask, ReminderCheckpoint, UploadDeadline,
};

// 引擎
pub use engine::{
    CalendarEngine, DeadlineEngine, EngineError, ReminderEngine, TemplateEngine,
};

// 配置
pub use config::{
    PlannerParameters, PlannerProfile, DEADLINE_APPROACHING_DAYS, DEFAULT_LEAD_DAYS,
    DEFAULT_REMINDER_HORIZON_DAYS,
};
