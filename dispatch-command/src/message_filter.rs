//! 消息过滤器
//!
//! 过滤器接收频道内的每条消息；返回 `false` 时宿主删除该消息。
//!
use crate::snowflake::Snowflake;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub author_id: Snowflake,
    #[serde(default)]
    pub content: String,
}

type FilterFn = Arc<dyn Fn(&Message) -> bool + Send + Sync>;

/// 共享的消息谓词
#[derive(Clone)]
pub struct MessageFilter {
    f: FilterFn,
}

impl MessageFilter {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Message) -> bool + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// 是否保留该消息
    pub fn keep(&self, message: &Message) -> bool {
        (self.f)(message)
    }
}

impl fmt::Debug for MessageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageFilter").finish_non_exhaustive()
    }
}

/// 消息过滤器注册能力（由宿主提供）
pub trait MessageFilterRegistrar: Send + Sync {
    fn register_message_filters(&self, filters: Vec<MessageFilter>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_delegates_to_predicate() {
        let only_numbers = MessageFilter::new(|m| m.content.chars().all(|c| c.is_ascii_digit()));
        let msg = |content: &str| Message {
            id: Snowflake::new(1),
            channel_id: Snowflake::new(2),
            author_id: Snowflake::new(3),
            content: content.to_string(),
        };

        assert!(only_numbers.keep(&msg("42")));
        assert!(!only_numbers.keep(&msg("hello")));

        let cloned = only_numbers.clone();
        assert!(cloned.keep(&msg("7")));
    }
}
