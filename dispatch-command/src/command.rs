use crate::{
    context::RunContext, error::CommandResult, permission::PermissionHandler, snowflake::Snowflake,
};
use async_trait::async_trait;
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 应用命令类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandKind {
    /// 斜杠命令
    #[default]
    ChatInput,
    /// 用户右键菜单
    User,
    /// 消息右键菜单
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandOptionKind {
    SubCommand,
    SubCommandGroup,
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Mentionable,
    Number,
    Attachment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOptionChoice {
    pub name: String,
    pub value: Value,
}

/// 命令参数
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOption {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: CommandOptionKind,
    #[builder(default)]
    #[serde(default)]
    pub required: bool,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<CommandOptionChoice>,
    /// 子命令 / 子命令组的嵌套参数
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

/// 命令元数据（名称、描述、参数、类型）
///
/// 由宿主注册到平台；守卫只检查 `name` 是否存在，不校验其余字段。
///
/// ```rust
/// use dispatch_command::command::{CommandData, CommandKind};
///
/// let data = CommandData::builder()
///     .name("ping")
///     .description("Replies with pong")
///     .build();
/// assert_eq!(data.kind, CommandKind::ChatInput);
/// assert!(data.options.is_empty());
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandData {
    #[builder(into)]
    pub name: String,
    #[builder(into, default)]
    #[serde(default)]
    pub description: String,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
    #[builder(default)]
    #[serde(rename = "type", default)]
    pub kind: CommandKind,
}

/// 斜杠命令插件（Command）
///
/// 插件作者实现该 trait，在启动时交给宿主框架；本 crate 不创建、不修改、也不执行命令。
/// - `run`：命令被调用后由宿主执行；
/// - `allowed_roles` / `allowed_users`：静态权限，缺省为 `None`（不限制）；
/// - `permission_handler`：动态权限，构造后只读（通过 `&self` 暴露）。
///
/// 来自动态加载等编译期无法约束的来源时，先用 [`is_command`](crate::guard::is_command)
/// 做结构检查。
#[async_trait]
pub trait Command: Send + Sync {
    fn data(&self) -> &CommandData;

    fn name(&self) -> &str {
        &self.data().name
    }

    async fn run(&self, ctx: RunContext<'_>) -> CommandResult<()>;

    fn allowed_roles(&self) -> Option<&[Snowflake]> {
        None
    }

    fn allowed_users(&self) -> Option<&[Snowflake]> {
        None
    }

    fn permission_handler(&self) -> Option<&dyn PermissionHandler> {
        None
    }
}
