//! 命令清单（Command Manifest）
//!
//! 宿主从配置文件或动态加载结果中读取插件描述时使用：先过守卫，再反序列化出类型化的元数据。
//! `run` 保持不透明，通常是宿主自己能解析的处理器引用。
//!
use crate::command::CommandData;
use crate::error::{CommandError, CommandResult};
use crate::guard::{PropertyProbe, missing_properties};
use crate::snowflake::Snowflake;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandManifest {
    #[serde(flatten)]
    pub data: CommandData,
    pub run: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_roles: Option<Vec<Snowflake>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_users: Option<Vec<Snowflake>>,
}

impl CommandManifest {
    pub fn from_value(value: &Value) -> CommandResult<Self> {
        if !PropertyProbe::is_object(value) {
            return Err(CommandError::NotAnObject {
                found: value.kind(),
            });
        }

        if let Some(property) = missing_properties(value).first().copied() {
            return Err(CommandError::MissingProperty(property));
        }

        Ok(Self::deserialize(value)?)
    }

    pub fn from_json_str(raw: &str) -> CommandResult<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(&value)
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }
}
