//! 命令结构守卫（Guard）
//!
//! 在动态加载插件等编译期无法约束的边界上，判断任意值是否具备命令的最小结构：
//! 是对象，且存在 `name` 与 `run` 两个属性。
//!
//! 检查只看属性**是否存在**，不看类型与取值；多余属性不影响结果。
//! 守卫是全函数：任何输入都只返回 `bool`，不会 panic。
//!
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};
use tracing::trace;

/// 命令必须具备的属性
pub const REQUIRED_PROPERTIES: [&str; 2] = ["name", "run"];

/// 结构探测：能回答"是否为对象"与"是否存在某属性"的动态值
pub trait PropertyProbe {
    /// 非对象（null、未定义、基本类型）上不能访问属性
    fn is_object(&self) -> bool;

    /// 属性是否存在（值为 null 也算存在）
    fn has_property(&self, key: &str) -> bool;

    /// 值的运行时类别名称，用于日志与错误信息
    fn kind(&self) -> &'static str {
        if self.is_object() { "object" } else { "primitive" }
    }
}

/// 判断任意值是否可以被当作命令
///
/// ```rust
/// use dispatch_command::guard::is_command;
/// use serde_json::json;
///
/// assert!(is_command(&json!({ "name": "ping", "run": "handlers::ping" })));
/// assert!(!is_command(&json!({ "name": "ping" })));
/// assert!(!is_command(&json!(null)));
/// assert!(!is_command(&json!("ping")));
/// ```
pub fn is_command<T>(value: &T) -> bool
where
    T: PropertyProbe + ?Sized,
{
    if !value.is_object() {
        trace!(kind = value.kind(), "not a command: value is not an object");
        return false;
    }

    for property in REQUIRED_PROPERTIES {
        if !value.has_property(property) {
            trace!(property, "not a command: missing required property");
            return false;
        }
    }

    true
}

/// 缺失的必需属性（按 [`REQUIRED_PROPERTIES`] 顺序）
///
/// 非对象视为全部缺失；返回空列表当且仅当 [`is_command`] 为 `true`。
pub fn missing_properties<T>(value: &T) -> Vec<&'static str>
where
    T: PropertyProbe + ?Sized,
{
    if !value.is_object() {
        return REQUIRED_PROPERTIES.to_vec();
    }

    REQUIRED_PROPERTIES
        .into_iter()
        .filter(|property| !value.has_property(property))
        .collect()
}

impl PropertyProbe for Value {
    fn is_object(&self) -> bool {
        // 数组在结构上也是对象
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    fn has_property(&self, key: &str) -> bool {
        match self {
            Value::Object(map) => map.contains_key(key),
            Value::Array(items) => {
                key == "length" || array_index(key).is_some_and(|i| i < items.len())
            }
            _ => false,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// 规范形式的数组下标（"01" 不是下标）
fn array_index(key: &str) -> Option<usize> {
    let index = key.parse::<usize>().ok()?;
    (index.to_string() == key).then_some(index)
}

impl PropertyProbe for Map<String, Value> {
    fn is_object(&self) -> bool {
        true
    }

    fn has_property(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl<V, S: BuildHasher> PropertyProbe for HashMap<String, V, S> {
    fn is_object(&self) -> bool {
        true
    }

    fn has_property(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl<V> PropertyProbe for BTreeMap<String, V> {
    fn is_object(&self) -> bool {
        true
    }

    fn has_property(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

/// `None` 表示未定义
impl<T: PropertyProbe> PropertyProbe for Option<T> {
    fn is_object(&self) -> bool {
        self.as_ref().is_some_and(|v| v.is_object())
    }

    fn has_property(&self, key: &str) -> bool {
        self.as_ref().is_some_and(|v| v.has_property(key))
    }

    fn kind(&self) -> &'static str {
        match self {
            Some(v) => v.kind(),
            None => "undefined",
        }
    }
}

impl<T: PropertyProbe + ?Sized> PropertyProbe for &T {
    fn is_object(&self) -> bool {
        (**self).is_object()
    }

    fn has_property(&self, key: &str) -> bool {
        (**self).has_property(key)
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

impl<T: PropertyProbe + ?Sized> PropertyProbe for Box<T> {
    fn is_object(&self) -> bool {
        (**self).is_object()
    }

    fn has_property(&self, key: &str) -> bool {
        (**self).has_property(key)
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives_are_never_commands() {
        for value in [json!(null), json!(0), json!(1.5), json!("ping"), json!(true), json!(false)] {
            assert!(!is_command(&value), "{value} should not be a command");
        }
        let undefined: Option<Value> = None;
        assert!(!is_command(&undefined));
        assert_eq!(undefined.kind(), "undefined");
    }

    #[test]
    fn requires_both_properties() {
        assert!(!is_command(&json!({})));
        assert!(!is_command(&json!({ "name": "ping" })));
        assert!(!is_command(&json!({ "run": "handlers::ping" })));
        assert!(is_command(&json!({ "name": "ping", "run": "handlers::ping" })));
    }

    // 只看属性是否存在，不看取值类型
    #[test]
    fn presence_only() {
        assert!(is_command(&json!({ "name": null, "run": null })));
        assert!(is_command(&json!({ "name": 42, "run": [] })));
    }

    #[test]
    fn extra_properties_are_ignored() {
        let value = json!({
            "name": "ping",
            "run": "handlers::ping",
            "allowedRoles": ["123"],
            "unrelated": { "deep": true }
        });
        assert!(is_command(&value));
    }

    #[test]
    fn arrays_are_objects_without_command_properties() {
        let array = json!(["name", "run"]);
        // serde_json::Value 自带的 is_object 只认 Object，这里走探测 trait
        assert!(PropertyProbe::is_object(&array));
        assert!(array.has_property("length"));
        assert!(array.has_property("0"));
        assert!(array.has_property("1"));
        assert!(!array.has_property("2"));
        assert!(!array.has_property("01"));
        assert!(!is_command(&array));
    }

    #[test]
    fn maps_and_wrappers() {
        let mut map: HashMap<String, ()> = HashMap::new();
        map.insert("name".into(), ());
        assert!(!is_command(&map));
        map.insert("run".into(), ());
        assert!(is_command(&map));

        let tree: BTreeMap<String, i32> = [("name".to_string(), 1), ("run".to_string(), 2)].into();
        assert!(is_command(&tree));
        assert!(is_command(&Box::new(tree)));

        let json_map = json!({ "name": "x", "run": "y" }).as_object().cloned().unwrap();
        assert!(is_command(&json_map));
        assert!(is_command(&Some(json!({ "name": "x", "run": "y" }))));
    }

    #[test]
    fn missing_properties_reports_in_order() {
        assert_eq!(missing_properties(&json!("ping")), vec!["name", "run"]);
        assert_eq!(missing_properties(&json!({})), vec!["name", "run"]);
        assert_eq!(missing_properties(&json!({ "name": "ping" })), vec!["run"]);
        assert!(missing_properties(&json!({ "name": "ping", "run": 0 })).is_empty());
    }

    #[test]
    fn repeated_calls_agree() {
        let values = [json!({}), json!({ "name": "a", "run": "b" }), json!(null)];
        for value in &values {
            let first = is_command(value);
            for _ in 0..10 {
                assert_eq!(is_command(value), first);
            }
        }
    }

    #[test]
    fn concurrent_calls_are_safe() {
        let value = json!({ "name": "ping", "run": "handlers::ping" });
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(|| is_command(&value))).collect();
            for h in handles {
                assert!(h.join().unwrap());
            }
        });
    }
}
