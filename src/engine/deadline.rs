// ==========================================
// 音乐发行计划系统 - 上传截止日计算引擎
// ==========================================
// 依据: Release_Planner_PRD_v0.4 - 4.1 上传截止日规则
// ==========================================
// 职责: 从发行日 + 分发商策略推导上传截止日
// 输入: DeadlineQuery (发行日 / 可选策略 / 可选提前天数覆盖)
// 输出: UploadDeadline
// 红线: 纯函数,不读系统时钟,不做 I/O,同输入必同输出
// ==========================================

use crate::domain::distributor::{DeadlineQuery, DistributorPolicy, UploadDeadline};
use crate::domain::types::WeekendAdjust;
use crate::engine::error::EngineError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::{debug, instrument};

/// 系统默认上传提前期 (天)
///
/// 口径: 主流分发商编辑歌单提报窗口 (21 天)
pub const DEFAULT_LEAD_DAYS: i64 = 21;

// ==========================================
// DeadlineEngine - 截止日计算引擎
// ==========================================
pub struct DeadlineEngine;

impl DeadlineEngine {
    /// 创建新的截止日计算引擎
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算分发商上传截止日
    ///
    /// 规则（顺序执行）:
    /// 1) base_lead = lead_days_override ?? policy.default_lead_days ?? 21
    /// 2) candidate = release_date - base_lead 天 (公历,自然跨月跨年)
    /// 3) adjust = policy.weekend_adjust ?? NONE
    /// 4) candidate 落在周末且 adjust != NONE 时移位一次,否则原样返回
    ///
    /// # 校验
    /// - lead_days_override < 0 → InvalidArgument
    /// - policy.default_lead_days < 0 → InvalidArgument
    pub fn compute(&self, query: &DeadlineQuery) -> Result<UploadDeadline, EngineError> {
        let upload_by = self.compute_upload_by(
            query.release_date,
            query.policy.as_ref(),
            query.lead_days_override,
        )?;
        Ok(UploadDeadline::new(upload_by))
    }

    /// 计算上传截止日 (展开参数形式,供日历/模板引擎复用)
    ///
    /// 覆盖语义:
    /// - override 只替换提前天数,周末调整仍来自 policy
    /// - 无 policy 且有 override 时,不做周末调整
    #[instrument(skip(self, policy))]
    pub fn compute_upload_by(
        &self,
        release_date: NaiveDate,
        policy: Option<&DistributorPolicy>,
        lead_days_override: Option<i64>,
    ) -> Result<NaiveDate, EngineError> {
        if let Some(days) = lead_days_override {
            if days < 0 {
                return Err(EngineError::negative_days("lead_days_override", days));
            }
        }
        if let Some(policy) = policy {
            if policy.default_lead_days < 0 {
                return Err(EngineError::negative_days(
                    "default_lead_days",
                    policy.default_lead_days,
                ));
            }
        }

        let base_lead = lead_days_override
            .or_else(|| policy.map(|p| p.default_lead_days))
            .unwrap_or(DEFAULT_LEAD_DAYS);
        let candidate = release_date - Duration::days(base_lead);

        let adjust = policy.map(|p| p.weekend_adjust).unwrap_or_default();
        let upload_by = Self::adjust_for_weekend(candidate, adjust);

        if upload_by != candidate {
            debug!(
                candidate = %candidate,
                upload_by = %upload_by,
                adjust = %adjust,
                "周末调整已应用"
            );
        }

        Ok(upload_by)
    }

    // ==========================================
    // 周末移位 (只应用一次)
    // ==========================================

    /// 候选日落在周末时按策略移位
    ///
    /// 移位表:
    /// - 周六 + PREVIOUS_BUSINESS_DAY → -1 天 (周五)
    /// - 周六 + NEXT_BUSINESS_DAY → +2 天 (周一)
    /// - 周日 + PREVIOUS_BUSINESS_DAY → -2 天 (周五)
    /// - 周日 + NEXT_BUSINESS_DAY → +1 天 (周一)
    ///
    /// 红线: 只检查 candidate 当天的星期,移位结果不再复查
    /// (NEXT_BUSINESS_DAY 直接跳到周一,不逐日步进)
    fn adjust_for_weekend(candidate: NaiveDate, adjust: WeekendAdjust) -> NaiveDate {
        if adjust == WeekendAdjust::None {
            return candidate;
        }

        match candidate.weekday() {
            Weekday::Sat => match adjust {
                WeekendAdjust::PreviousBusinessDay => candidate - Duration::days(1),
                WeekendAdjust::NextBusinessDay => candidate + Duration::days(2),
                WeekendAdjust::None => candidate,
            },
            Weekday::Sun => match adjust {
                WeekendAdjust::PreviousBusinessDay => candidate - Duration::days(2),
                WeekendAdjust::NextBusinessDay => candidate + Duration::days(1),
                WeekendAdjust::None => candidate,
            },
            _ => candidate,
        }
    }
}

impl Default for DeadlineEngine {
    fn default() -> Self {
        Self::new()
    }
}
