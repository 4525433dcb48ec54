//! 斜杠命令插件契约（dispatch-command）
//!
//! 定义插件作者实现的 [`Command`](command::Command) 结构契约，以及宿主在注册前用于校验未知值的
//! 守卫 [`is_command`](guard::is_command)。
//!
//! 命令执行、权限裁决、UI 渲染与消息过滤均由宿主框架负责，本 crate 只声明它们的形状。
//!
pub mod command;
pub mod context;
pub mod error;
pub mod guard;
pub mod interaction;
pub mod manifest;
pub mod message_filter;
pub mod permission;
pub mod snowflake;
pub mod ui;

pub use command::{Command, CommandData};
pub use context::RunContext;
pub use error::{CommandError, CommandResult};
pub use guard::{PropertyProbe, is_command};
pub use permission::{Permission, PermissionHandler};
