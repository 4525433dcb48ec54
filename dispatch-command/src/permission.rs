//! 权限判定结果与权限处理器
//!
//! 处理器只产出判定结果；结合 `allowed_roles` / `allowed_users` 做最终裁决属于宿主职责。
//!
use crate::interaction::CommandInteraction;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// 处理器返回 `false` 且未给出原因时使用的拒绝说明
pub const DEFAULT_DENIAL_REASON: &str = "you are not allowed to use this command";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum Permission {
    Allowed,
    /// 携带面向用户的拒绝原因
    Denied(String),
}

impl Permission {
    pub fn denied(reason: impl Into<String>) -> Self {
        Self::Denied(reason.into())
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    pub fn denial_reason(&self) -> Option<&str> {
        match self {
            Self::Allowed => None,
            Self::Denied(reason) => Some(reason),
        }
    }
}

impl From<bool> for Permission {
    fn from(allowed: bool) -> Self {
        if allowed {
            Self::Allowed
        } else {
            Self::Denied(DEFAULT_DENIAL_REASON.to_string())
        }
    }
}

impl From<String> for Permission {
    fn from(reason: String) -> Self {
        Self::Denied(reason)
    }
}

impl From<&str> for Permission {
    fn from(reason: &str) -> Self {
        Self::Denied(reason.to_string())
    }
}

/// 权限处理器
///
/// 同步闭包（返回 `bool`、`String`、`&'static str` 或 `Permission`）通过通用实现直接可用；
/// 需要异步查询的处理器自行实现该 trait。
#[async_trait]
pub trait PermissionHandler: Send + Sync {
    async fn check(&self, interaction: &CommandInteraction) -> Permission;
}

#[async_trait]
impl<F, R> PermissionHandler for F
where
    F: Fn(&CommandInteraction) -> R + Send + Sync,
    R: Into<Permission> + Send,
{
    async fn check(&self, interaction: &CommandInteraction) -> Permission {
        (self)(interaction).into()
    }
}
