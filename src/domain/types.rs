// ==========================================
// 音乐发行计划系统 - 领域类型定义
// ==========================================
// 依据: Release_Planner_PRD_v0.4 - 领域模型
// 序列化格式: SCREAMING_SNAKE_CASE (与存储层一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 周末调整策略 (Weekend Adjustment)
// ==========================================
// 红线: 只检查候选日期当天的星期,调整只应用一次
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekendAdjust {
    None,                // 不调整
    PreviousBusinessDay, // 提前到周五
    NextBusinessDay,     // 顺延到周一
}

impl Default for WeekendAdjust {
    fn default() -> Self {
        WeekendAdjust::None
    }
}

impl fmt::Display for WeekendAdjust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekendAdjust::None => write!(f, "NONE"),
            WeekendAdjust::PreviousBusinessDay => write!(f, "PREVIOUS_BUSINESS_DAY"),
            WeekendAdjust::NextBusinessDay => write!(f, "NEXT_BUSINESS_DAY"),
        }
    }
}

// ==========================================
// 发行类型 (Release Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReleaseType {
    Single, // 单曲
    Ep,     // EP
    Album,  // 专辑
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseType::Single => write!(f, "SINGLE"),
            ReleaseType::Ep => write!(f, "EP"),
            ReleaseType::Album => write!(f, "ALBUM"),
        }
    }
}

// ==========================================
// 任务状态 (Task Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,    // 未开始
    InProgress, // 进行中
    Completed,  // 已完成
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "PENDING"),
            TaskStatus::InProgress => write!(f, "IN_PROGRESS"),
            TaskStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

// ==========================================
// 任务阶段 (Task Phase)
// ==========================================
// 用途: 任务清单分组展示 (模板引擎输出)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPhase {
    PreProduction, // 前期筹备
    Production,    // 制作
    Distribution,  // 分发
    Promotion,     // 宣传
    PostRelease,   // 发行后
}

impl fmt::Display for TaskPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskPhase::PreProduction => write!(f, "PRE_PRODUCTION"),
            TaskPhase::Production => write!(f, "PRODUCTION"),
            TaskPhase::Distribution => write!(f, "DISTRIBUTION"),
            TaskPhase::Promotion => write!(f, "PROMOTION"),
            TaskPhase::PostRelease => write!(f, "POST_RELEASE"),
        }
    }
}

// ==========================================
// 任务优先级 (Task Priority)
// ==========================================
// 红线: 等级制,不是评分制
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,      // 可选
    Medium,   // 一般
    High,     // 重要
    Critical, // 关键路径
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "LOW"),
            TaskPriority::Medium => write!(f, "MEDIUM"),
            TaskPriority::High => write!(f, "HIGH"),
            TaskPriority::Critical => write!(f, "CRITICAL"),
        }
    }
}

// ==========================================
// 日历事件类型 (Event Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Release,  // 发行日
    UploadBy, // 分发商上传截止日
    TaskDue,  // 任务到期日
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Release => write!(f, "RELEASE"),
            EventType::UploadBy => write!(f, "UPLOAD_BY"),
            EventType::TaskDue => write!(f, "TASK_DUE"),
        }
    }
}

// ==========================================
// 上传状态 (Upload Status)
// ==========================================
// 用途: 分发商上传进度跟踪; 完成态不再触发提醒
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UploadStatus {
    NotStarted, // 未开始
    InProgress, // 进行中
    Uploaded,   // 已上传
    Processing, // 分发商处理中
    Live,       // 已上线
    Failed,     // 上传失败
}

impl UploadStatus {
    /// 上传是否已完成 (已上传或已上线)
    pub fn is_complete(&self) -> bool {
        matches!(self, UploadStatus::Uploaded | UploadStatus::Live)
    }

    /// 是否需要用户处理 (未开始或失败)
    pub fn needs_action(&self) -> bool {
        matches!(self, UploadStatus::NotStarted | UploadStatus::Failed)
    }

    /// 展示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            UploadStatus::NotStarted => "Not Started",
            UploadStatus::InProgress => "In Progress",
            UploadStatus::Uploaded => "Uploaded",
            UploadStatus::Processing => "Processing",
            UploadStatus::Live => "Live",
            UploadStatus::Failed => "Failed",
        }
    }
}

impl Default for UploadStatus {
    fn default() -> Self {
        UploadStatus::NotStarted
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadStatus::NotStarted => write!(f, "NOT_STARTED"),
            UploadStatus::InProgress => write!(f, "IN_PROGRESS"),
            UploadStatus::Uploaded => write!(f, "UPLOADED"),
            UploadStatus::Processing => write!(f, "PROCESSING"),
            UploadStatus::Live => write!(f, "LIVE"),
            UploadStatus::Failed => write!(f, "FAILED"),
        }
    }
}
