// ==========================================
// 音乐发行计划系统 - 提醒检查点引擎
// ==========================================
// 依据: Release_Planner_PRD_v0.4 - 4.2 提醒检查点派生
// ==========================================
// 职责: 从上传截止日派生提醒检查点 + 临期/超期判定
// 输入: UploadDeadline + 参照日 + 提前量集合
// 输出: ReminderCheckpoint 惰性有限序列 (按检查点日期升序)
// 红线: 参照日由调用方显式传入,本引擎不读系统时钟
// ==========================================

use crate::domain::distributor::{ReminderCheckpoint, UploadDeadline};
use crate::domain::types::UploadStatus;
use chrono::{Duration, NaiveDate};
use tracing::instrument;

/// 临期窗口默认值 (天)
pub const DEADLINE_APPROACHING_DAYS: i64 = 7;

/// 默认提醒提前量集合 (天)
pub const DEFAULT_REMINDER_HORIZON_DAYS: [u32; 5] = [14, 7, 3, 1, 0];

// ==========================================
// ReminderEngine - 提醒检查点引擎
// ==========================================
pub struct ReminderEngine {
    approaching_window_days: i64, // 临期窗口 (构造时固定)
}

impl ReminderEngine {
    /// 创建引擎 (临期窗口取默认 7 天)
    pub fn new() -> Self {
        Self {
            approaching_window_days: DEADLINE_APPROACHING_DAYS,
        }
    }

    /// 创建引擎并指定临期窗口
    pub fn with_window(approaching_window_days: i64) -> Self {
        Self {
            approaching_window_days,
        }
    }

    // ==========================================
    // 检查点派生
    // ==========================================

    /// 从截止日派生提醒检查点
    ///
    /// 规则:
    /// 1) 每个去重后的提前量产出一个检查点: deadline - horizon 天
    /// 2) 早于参照日的检查点不再浮现 (等于参照日的保留)
    /// 3) 输出按检查点日期升序
    ///
    /// 提前量集合为空时序列为空,无失败路径
    #[instrument(skip(self, deadline))]
    pub fn derive_checkpoints(
        &self,
        deadline: &UploadDeadline,
        reference_now: NaiveDate,
        horizon_days: &[u32],
    ) -> impl Iterator<Item = ReminderCheckpoint> {
        let upload_by = deadline.upload_by;

        // 提前量大的检查点日期早 => 降序提前量即升序日期
        let mut horizons: Vec<u32> = horizon_days.to_vec();
        horizons.sort_unstable_by(|a, b| b.cmp(a));
        horizons.dedup();

        horizons.into_iter().filter_map(move |horizon| {
            let checkpoint_date = upload_by - Duration::days(i64::from(horizon));
            if checkpoint_date < reference_now {
                return None;
            }
            Some(ReminderCheckpoint {
                checkpoint_date,
                horizon_days: horizon,
                label: Self::checkpoint_label(horizon),
            })
        })
    }

    /// 检查点通知文案
    fn checkpoint_label(horizon_days: u32) -> String {
        match horizon_days {
            0 => "Distributor upload due today".to_string(),
            1 => "Distributor upload due tomorrow".to_string(),
            n => format!("Distributor upload due in {} days", n),
        }
    }

    // ==========================================
    // 临期 / 超期判定
    // ==========================================

    /// 截止日是否临近
    ///
    /// 口径: upload_by ∈ (today, today + window],即还剩 1..=window 天
    /// 当天到期不算"临近" (由 horizon=0 的检查点单独覆盖)
    pub fn is_deadline_approaching(&self, upload_by: NaiveDate, today: NaiveDate) -> bool {
        let days_until = (upload_by - today).num_days();
        (1..=self.approaching_window_days).contains(&days_until)
    }

    /// 截止日是否已过
    pub fn is_deadline_overdue(&self, upload_by: NaiveDate, today: NaiveDate) -> bool {
        upload_by < today
    }

    /// 上传是否逾期未完成 (已完成的上传不算逾期)
    pub fn is_upload_overdue(
        &self,
        upload_by: NaiveDate,
        upload_status: UploadStatus,
        today: NaiveDate,
    ) -> bool {
        self.is_deadline_overdue(upload_by, today) && !upload_status.is_complete()
    }

    /// 距截止日的有符号天数
    pub fn days_until(&self, upload_by: NaiveDate, today: NaiveDate) -> i64 {
        (upload_by - today).num_days()
    }
}

impl Default for ReminderEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试 (边界口径)
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_approaching_window_boundaries() {
        let engine = ReminderEngine::new();
        let upload_by = day(2025, 10, 31);

        // 当天到期: 不算临近
        assert!(!engine.is_deadline_approaching(upload_by, day(2025, 10, 31)));
        // 剩 1 天 / 剩 7 天: 临近
        assert!(engine.is_deadline_approaching(upload_by, day(2025, 10, 30)));
        assert!(engine.is_deadline_approaching(upload_by, day(2025, 10, 24)));
        // 剩 8 天: 超出窗口
        assert!(!engine.is_deadline_approaching(upload_by, day(2025, 10, 23)));
        // 已过期: 不算临近
        assert!(!engine.is_deadline_approaching(upload_by, day(2025, 11, 1)));
    }

    #[test]
    fn test_custom_window() {
        let engine = ReminderEngine::with_window(3);
        let upload_by = day(2025, 10, 31);

        assert!(engine.is_deadline_approaching(upload_by, day(2025, 10, 28)));
        assert!(!engine.is_deadline_approaching(upload_by, day(2025, 10, 27)));
    }

    #[test]
    fn test_overdue_is_strict() {
        let engine = ReminderEngine::new();
        let upload_by = day(2025, 10, 31);

        // 当天不算超期
        assert!(!engine.is_deadline_overdue(upload_by, day(2025, 10, 31)));
        assert!(engine.is_deadline_overdue(upload_by, day(2025, 11, 1)));
    }

    #[test]
    fn test_upload_overdue_respects_status() {
        let engine = ReminderEngine::new();
        let upload_by = day(2025, 10, 31);
        let today = day(2025, 11, 3);

        assert!(engine.is_upload_overdue(upload_by, UploadStatus::NotStarted, today));
        assert!(engine.is_upload_overdue(upload_by, UploadStatus::Failed, today));
        assert!(!engine.is_upload_overdue(upload_by, UploadStatus::Uploaded, today));
        assert!(!engine.is_upload_overdue(upload_by, UploadStatus::Live, today));
    }

    #[test]
    fn test_checkpoint_labels() {
        assert_eq!(
            ReminderEngine::checkpoint_label(0),
            "Distributor upload due today"
        );
        assert_eq!(
            ReminderEngine::checkpoint_label(1),
            "Distributor upload due tomorrow"
        );
        assert_eq!(
            ReminderEngine::checkpoint_label(7),
            "Distributor upload due in 7 days"
        );
    }
}
