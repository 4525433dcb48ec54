//! 命令契约统一错误定义
//!
//! 守卫（guard）本身从不返回错误；此处的错误只服务于清单解析与 `run` 的实现方。
//!
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CommandError {
    // --- 结构校验 ---
    #[error("not an object: found={found}")]
    NotAnObject { found: &'static str },

    #[error("missing required property: {0}")]
    MissingProperty(&'static str),

    #[error("invalid snowflake: {0}")]
    InvalidSnowflake(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    // --- 执行期 ---
    #[error("execution: {0}")]
    Execution(String),

    #[error("interaction: {0}")]
    Interaction(String),
}

/// 统一 Result 类型别名
pub type CommandResult<T> = Result<T, CommandError>;
