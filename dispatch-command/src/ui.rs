//! UI 组件
//!
//! `Ui` 是插件产出的组件树，由宿主渲染为平台兼容的 `ActionRow`。
//! 渲染逻辑不在本 crate 内。
//!
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 插件声明的 UI（不透明组件树）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ui(pub Value);

impl Ui {
    pub fn new(tree: Value) -> Self {
        Self(tree)
    }

    pub fn tree(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Ui {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// 宿主渲染后的一行消息组件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionRow {
    #[serde(default)]
    pub components: Vec<Value>,
}

/// UI 注册能力（由宿主提供）
///
/// **每条消息至多调用一次。** 该约束由调用方保证，此处不做检查。
pub trait UiRegistrar: Send + Sync {
    fn register_ui(&self, ui: Ui) -> Vec<ActionRow>;
}
