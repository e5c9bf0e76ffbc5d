// ==========================================
// 音乐发行计划系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================
// 红线: 单一错误类别,不做泛化兜底捕获
// 引擎只校验一种条件: 提前天数为负
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("字段值错误 (field={field}): {message}")]
    InvalidArgument {
        field: &'static str,
        message: String,
    },
}

impl EngineError {
    /// 负数天数错误 (唯一的校验失败路径)
    pub fn negative_days(field: &'static str, value: i64) -> Self {
        EngineError::InvalidArgument {
            field,
            message: format!("天数不能为负: {}", value),
        }
    }
}
