// ==========================================
// 音乐发行计划系统 - 分发商领域模型
// ==========================================
// 依据: Release_Planner_PRD_v0.4 - 分发商档案与交付策略
// ==========================================
// 红线: 全部为值对象,构造后不可变,引擎不持久化
// ==========================================

use crate::domain::types::WeekendAdjust;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// DistributorKind - 分发商目录
// ==========================================
// 用途: 内置分发商档案 (展示名/官网/最短上传提前期)
// 说明: 自定义分发商走 Other + DistributorPolicy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistributorKind {
    DistroKid,
    CdBaby,
    TuneCore,
    Amuse,
    Ditto,
    Awal,
    UnitedMasters,
    Stem,
    Landr,
    Other,
}

impl DistributorKind {
    /// 展示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            DistributorKind::DistroKid => "DistroKid",
            DistributorKind::CdBaby => "CD Baby",
            DistributorKind::TuneCore => "TuneCore",
            DistributorKind::Amuse => "Amuse",
            DistributorKind::Ditto => "Ditto Music",
            DistributorKind::Awal => "AWAL",
            DistributorKind::UnitedMasters => "UnitedMasters",
            DistributorKind::Stem => "Stem",
            DistributorKind::Landr => "LANDR",
            DistributorKind::Other => "Other",
        }
    }

    /// 官网地址
    pub fn website(&self) -> &'static str {
        match self {
            DistributorKind::DistroKid => "https://distrokid.com",
            DistributorKind::CdBaby => "https://cdbaby.com",
            DistributorKind::TuneCore => "https://tunecore.com",
            DistributorKind::Amuse => "https://amuse.io",
            DistributorKind::Ditto => "https://dittomusic.com",
            DistributorKind::Awal => "https://awal.com",
            DistributorKind::UnitedMasters => "https://unitedmasters.com",
            DistributorKind::Stem => "https://stem.is",
            DistributorKind::Landr => "https://landr.com",
            DistributorKind::Other => "",
        }
    }

    /// 最短上传提前期 (天)
    ///
    /// 口径: 分发商建议的编辑歌单提报窗口,不是平台硬性下限
    pub fn min_upload_days(&self) -> i64 {
        match self {
            DistributorKind::Amuse | DistributorKind::Landr => 14,
            DistributorKind::Awal => 28,
            _ => 21,
        }
    }

    /// 按目录档案生成默认策略 (周末不调整)
    pub fn default_policy(&self) -> DistributorPolicy {
        DistributorPolicy {
            default_lead_days: self.min_upload_days(),
            weekend_adjust: WeekendAdjust::None,
        }
    }

    /// 常用分发商 (创建项目时优先展示)
    pub fn popular() -> &'static [DistributorKind] {
        &[
            DistributorKind::DistroKid,
            DistributorKind::CdBaby,
            DistributorKind::TuneCore,
        ]
    }
}

impl fmt::Display for DistributorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ==========================================
// DistributorPolicy - 分发商交付策略
// ==========================================
// 不变量: default_lead_days >= 0 (由 DeadlineEngine 校验)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributorPolicy {
    pub default_lead_days: i64, // 发行前须上传的名义天数

    #[serde(default)]
    pub weekend_adjust: WeekendAdjust, // 候选日落在周末时的移位策略
}

impl DistributorPolicy {
    pub fn new(default_lead_days: i64, weekend_adjust: WeekendAdjust) -> Self {
        Self {
            default_lead_days,
            weekend_adjust,
        }
    }
}

// ==========================================
// DeadlineQuery - 单次计算输入
// ==========================================
// policy 缺省 => 系统默认 21 天 / 周末不调整
// lead_days_override 只替换提前天数,不关闭周末调整
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineQuery {
    pub release_date: NaiveDate,

    #[serde(default)]
    pub policy: Option<DistributorPolicy>,

    #[serde(default)]
    pub lead_days_override: Option<i64>,
}

impl DeadlineQuery {
    pub fn new(release_date: NaiveDate) -> Self {
        Self {
            release_date,
            policy: None,
            lead_days_override: None,
        }
    }

    pub fn with_policy(mut self, policy: DistributorPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn with_lead_days_override(mut self, lead_days: i64) -> Self {
        self.lead_days_override = Some(lead_days);
        self
    }
}

// ==========================================
// UploadDeadline - 计算输出
// ==========================================
// 值对象: 除日期本身外没有身份,引擎不持久化
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadDeadline {
    pub upload_by: NaiveDate,
}

impl UploadDeadline {
    pub fn new(upload_by: NaiveDate) -> Self {
        Self { upload_by }
    }

    /// 距截止日的有符号天数 (截止日已过则为负)
    ///
    /// 参照日由调用方显式传入,本核心不读取系统时钟
    pub fn days_until(&self, reference: NaiveDate) -> i64 {
        (self.upload_by - reference).num_days()
    }
}

impl fmt::Display for UploadDeadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.upload_by)
    }
}

// ==========================================
// ReminderCheckpoint - 提醒检查点
// ==========================================
// 由 ReminderEngine 从 UploadDeadline 派生,驱动提前通知
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderCheckpoint {
    pub checkpoint_date: NaiveDate, // deadline - horizon_days
    pub horizon_days: u32,          // 距截止日的提前量
    pub label: String,              // 通知文案
}
