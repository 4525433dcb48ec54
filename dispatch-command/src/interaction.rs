//! 交互（Interaction）
//!
//! 宿主框架在命令被调用时构造的交互对象。本 crate 只声明其形状，从不构造、校验或响应。
//!
use crate::snowflake::Snowflake;
use bon::Builder;
use serde::{Deserialize, Serialize};

/// 斜杠命令交互
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInteraction {
    pub id: Snowflake,
    #[builder(into)]
    pub command_name: String,
    pub user_id: Snowflake,
    pub channel_id: Snowflake,
    /// 私信场景下为空
    pub guild_id: Option<Snowflake>,
    #[builder(default)]
    #[serde(default)]
    pub member_roles: Vec<Snowflake>,
}

/// 上下文菜单交互（用户菜单或消息菜单）
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenuInteraction {
    pub id: Snowflake,
    #[builder(into)]
    pub command_name: String,
    pub user_id: Snowflake,
    pub channel_id: Snowflake,
    pub guild_id: Option<Snowflake>,
    #[builder(default)]
    #[serde(default)]
    pub member_roles: Vec<Snowflake>,
    /// 被右键选中的用户或消息
    pub target_id: Snowflake,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Interaction {
    Command(CommandInteraction),
    ContextMenu(ContextMenuInteraction),
}

impl Interaction {
    pub fn id(&self) -> Snowflake {
        match self {
            Self::Command(i) => i.id,
            Self::ContextMenu(i) => i.id,
        }
    }

    pub fn command_name(&self) -> &str {
        match self {
            Self::Command(i) => &i.command_name,
            Self::ContextMenu(i) => &i.command_name,
        }
    }

    pub fn user_id(&self) -> Snowflake {
        match self {
            Self::Command(i) => i.user_id,
            Self::ContextMenu(i) => i.user_id,
        }
    }

    pub fn guild_id(&self) -> Option<Snowflake> {
        match self {
            Self::Command(i) => i.guild_id,
            Self::ContextMenu(i) => i.guild_id,
        }
    }

    pub fn member_roles(&self) -> &[Snowflake] {
        match self {
            Self::Command(i) => &i.member_roles,
            Self::ContextMenu(i) => &i.member_roles,
        }
    }

    pub fn is_context_menu(&self) -> bool {
        matches!(self, Self::ContextMenu(_))
    }

    /// 仅斜杠命令交互会交给权限处理器
    pub fn as_command(&self) -> Option<&CommandInteraction> {
        match self {
            Self::Command(i) => Some(i),
            Self::ContextMenu(_) => None,
        }
    }
}

impl From<CommandInteraction> for Interaction {
    fn from(value: CommandInteraction) -> Self {
        Self::Command(value)
    }
}

impl From<ContextMenuInteraction> for Interaction {
    fn from(value: ContextMenuInteraction) -> Self {
        Self::ContextMenu(value)
    }
}
