// ==========================================
// 音乐发行计划系统 - 计划参数配置
// ==========================================
// 职责: 可调参数的序列化对象 + 默认值解析
// 存储: 由调用方负责 (JSON 字符串),本核心只定义形状
// ==========================================

use crate::domain::distributor::DistributorPolicy;
use crate::domain::types::WeekendAdjust;
use crate::engine::deadline::DEFAULT_LEAD_DAYS;
use crate::engine::error::EngineError;
use crate::engine::reminder::{
    ReminderEngine, DEADLINE_APPROACHING_DAYS, DEFAULT_REMINDER_HORIZON_DAYS,
};
use serde::{Deserialize, Serialize};

/// 计划参数配置（持久化对象）
///
/// 存储位置由调用方决定，键建议为 planner_profile/{profile_id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerProfile {
    /// 配置 ID（用于选择/引用）
    pub profile_id: String,

    /// 显示名称
    pub title: String,

    /// 说明（可选）
    #[serde(default)]
    pub description: Option<String>,

    /// 参数（未设置的维度走内置默认值）
    #[serde(default)]
    pub parameters: PlannerParameters,
}

/// 计划参数（全部可选,缺省即内置默认）
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlannerParameters {
    /// 上传提前天数（默认 21）
    #[serde(default)]
    pub default_lead_days: Option<i64>,

    /// 周末调整策略（默认 NONE）
    #[serde(default)]
    pub weekend_adjust: Option<WeekendAdjust>,

    /// 临期窗口天数（默认 7）
    #[serde(default)]
    pub approaching_window_days: Option<i64>,

    /// 提醒提前量集合（默认 [14, 7, 3, 1, 0]）
    #[serde(default)]
    pub reminder_horizon_days: Option<Vec<u32>>,
}

impl PlannerProfile {
    /// 校验参数合法性
    ///
    /// 与引擎同一红线: 天数维度不允许为负
    pub fn validate(&self) -> Result<(), EngineError> {
        if let Some(days) = self.parameters.default_lead_days {
            if days < 0 {
                return Err(EngineError::negative_days("default_lead_days", days));
            }
        }
        if let Some(days) = self.parameters.approaching_window_days {
            if days < 0 {
                return Err(EngineError::negative_days(
                    "approaching_window_days",
                    days,
                ));
            }
        }
        Ok(())
    }

    /// 解析后的上传提前天数
    pub fn resolved_lead_days(&self) -> i64 {
        self.parameters.default_lead_days.unwrap_or(DEFAULT_LEAD_DAYS)
    }

    /// 解析后的周末调整策略
    pub fn resolved_weekend_adjust(&self) -> WeekendAdjust {
        self.parameters.weekend_adjust.unwrap_or_default()
    }

    /// 解析后的临期窗口天数
    pub fn resolved_approaching_window_days(&self) -> i64 {
        self.parameters
            .approaching_window_days
            .unwrap_or(DEADLINE_APPROACHING_DAYS)
    }

    /// 解析后的提醒提前量集合
    pub fn resolved_reminder_horizons(&self) -> Vec<u32> {
        self.parameters
            .reminder_horizon_days
            .clone()
            .unwrap_or_else(|| DEFAULT_REMINDER_HORIZON_DAYS.to_vec())
    }

    /// 按配置生成分发策略
    pub fn distributor_policy(&self) -> DistributorPolicy {
        DistributorPolicy::new(self.resolved_lead_days(), self.resolved_weekend_adjust())
    }

    /// 按配置生成提醒引擎
    pub fn reminder_engine(&self) -> ReminderEngine {
        ReminderEngine::with_window(self.resolved_approaching_window_days())
    }
}
