// ==========================================
// 音乐发行计划系统 - 配置层
// ==========================================
// 职责: 可调参数定义与默认值解析
// 说明: 持久化由调用方负责,本核心不读库不读环境变量
// ==========================================

pub mod planner_profile;

pub use planner_profile::{PlannerParameters, PlannerProfile};

// 内置默认值 (引擎层定义,此处统一出口)
pub use crate::engine::deadline::DEFAULT_LEAD_DAYS;
pub use crate::engine::reminder::{DEADLINE_APPROACHING_DAYS, DEFAULT_REMINDER_HORIZON_DAYS};
