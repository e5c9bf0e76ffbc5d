// ==========================================
// 音乐发行计划系统 - 引擎层
// ==========================================
// 依据: Release_Planner_PRD_v0.4 - 引擎体系
// ==========================================
// 职责: 实现纯计算业务规则,不做 I/O,不读系统时钟
// 红线: 引擎无注入依赖,参照日全部由调用方显式传入
// ==========================================

pub mod calendar;
pub mod deadline;
pub mod error;
pub mod reminder;
pub mod template;

// 重导出核心引擎
pub use calendar::CalendarEngine;
pub use deadline::{DeadlineEngine, DEFAULT_LEAD_DAYS};
pub use error::EngineError;
pub use reminder::{ReminderEngine, DEADLINE_APPROACHING_DAYS, DEFAULT_REMINDER_HORIZON_DAYS};
pub use template::TemplateEngine;
