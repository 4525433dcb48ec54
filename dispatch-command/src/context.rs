use crate::interaction::Interaction;
use crate::message_filter::{MessageFilter, MessageFilterRegistrar};
use crate::ui::{ActionRow, Ui, UiRegistrar};

/// 命令执行上下文（Run Context）
///
/// 宿主在调用 [`Command::run`](crate::command::Command::run) 时传入，承载：
/// - 触发本次执行的交互（斜杠命令或上下文菜单）；
/// - UI 注册能力：**每条消息至多调用一次**，由调用方保证；
/// - 消息过滤器注册能力：过滤器返回 `false` 的消息将被宿主删除。
///
/// 上下文只借用宿主的能力，不拥有它们。
#[derive(Clone, Copy)]
pub struct RunContext<'a> {
    interaction: &'a Interaction,
    ui: &'a dyn UiRegistrar,
    filters: &'a dyn MessageFilterRegistrar,
}

impl<'a> RunContext<'a> {
    pub fn new(
        interaction: &'a Interaction,
        ui: &'a dyn UiRegistrar,
        filters: &'a dyn MessageFilterRegistrar,
    ) -> Self {
        Self {
            interaction,
            ui,
            filters,
        }
    }

    pub fn interaction(&self) -> &'a Interaction {
        self.interaction
    }

    pub fn register_ui(&self, ui: Ui) -> Vec<ActionRow> {
        self.ui.register_ui(ui)
    }

    pub fn register_message_filters(&self, filters: Vec<MessageFilter>) {
        self.filters.register_message_filters(filters)
    }
}

impl std::fmt::Debug for RunContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunContext")
            .field("interaction", self.interaction)
            .finish_non_exhaustive()
    }
}
