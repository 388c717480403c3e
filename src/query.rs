// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 查询字符串模块
//!
//! 该模块负责 URL 查询字符串（Query String）的构建与解析：
//! - `to_query_str` 把有序键值对序列化为 `?key=value&...` 形式，
//!   值由强类型的 [`QueryValue`] 承载，布尔量渲染为小写、列表以逗号连接。
//! - `parse_query_str` 把查询字符串拆回解码后的键值对列表。
//!
//! 构建方向不做任何百分号转义，是否预先转义由调用方决定；
//! 解析方向则总是对键和值做解码（`+` 按空格处理）。

use std::fmt;

use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

use crate::escape::percent_unescape;

/// 查询参数值的强类型表示。
///
/// 常见的 Rust 标量和 `Vec` 都可以通过 `From`/`Into` 直接转入；
/// 动态来源的数据（如反序列化得到的 JSON）可经 `serde_json::Value` 兜底转换。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// 布尔值，渲染为小写的 `true` / `false`
    Bool(bool),
    /// 整数
    Int(i64),
    /// 浮点数
    Float(f64),
    /// 普通文本，原样渲染
    Text(String),
    /// 列表，渲染时以逗号连接各元素（如 `1,2,3`）
    List(Vec<QueryValue>),
}

impl fmt::Display for QueryValue {
    /// 将参数值格式化为查询字符串中使用的文本形式。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Bool(true) => write!(f, "true"),
            QueryValue::Bool(false) => write!(f, "false"),
            QueryValue::Int(i) => write!(f, "{}", i),
            QueryValue::Float(x) => write!(f, "{}", x),
            QueryValue::Text(s) => write!(f, "{}", s),
            QueryValue::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    write!(f, "{}", item)?;
                    if index < items.len() - 1 {
                        write!(f, ",")?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        QueryValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for QueryValue {
    /// 从 serde_json 的通用值转换，转换永不失败。
    ///
    /// 无法对应到具体变体的类型（`null`、嵌套对象）退化为其 JSON 文本表示。
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => QueryValue::Bool(b),
            Value::String(s) => QueryValue::Text(s),
            Value::Array(items) => {
                QueryValue::List(items.into_iter().map(QueryValue::from).collect())
            }
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    QueryValue::Int(i)
                } else if let Some(x) = n.as_f64() {
                    QueryValue::Float(x)
                } else {
                    QueryValue::Text(n.to_string())
                }
            }
            other => QueryValue::Text(other.to_string()),
        }
    }
}

/// 将有序键值对序列化为 URL 查询字符串。
///
/// 返回以 `?` 开头、`&` 分隔的查询串，键值对严格按传入顺序输出；
/// 入参为空时返回空字符串。本函数不做百分号转义，
/// 需要转义时由调用方先对键值调用 [`crate::escape::percent_escape`]。
pub fn to_query_str(params: &[(&str, QueryValue)]) -> String {
    if params.is_empty() {
        return String::new();
    }

    // 单次遍历拼接，值的文本化内联在循环中完成
    let mut query_str = String::from("?");
    for (key, value) in params {
        query_str.push_str(key);
        query_str.push('=');
        query_str.push_str(&value.to_string());
        query_str.push('&');
    }
    query_str.pop(); // 去掉末尾多余的 '&'

    query_str
}

/// 将查询字符串解析为解码后的键值对列表，永不失败。
///
/// 允许带或不带前导 `?`；空段（连续的 `&`）和空键会被跳过；
/// 没有 `=` 的段视为值为空字符串；键和值都经过
/// [`percent_unescape`] 解码（`+` 按空格处理）。
pub fn parse_query_str(query: &str) -> Vec<(String, String)> {
    let trimmed = query.strip_prefix('?').unwrap_or(query);
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut params = Vec::with_capacity(trimmed.matches('&').count() + 1);
    for pair in trimmed.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        if key.is_empty() {
            continue;
        }
        params.push((percent_unescape(key), percent_unescape(value)));
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_query_str_empty_params() {
        assert_eq!(to_query_str(&[]), "");
    }

    /// 验证键值对按传入顺序输出，且末尾没有多余的 '&'
    #[test]
    fn test_to_query_str_preserves_order() {
        let params = [
            ("order", QueryValue::from("desc")),
            ("page", QueryValue::from(2)),
            ("limit", QueryValue::from(50)),
        ];
        assert_eq!(to_query_str(&params), "?order=desc&page=2&limit=50");
    }

    #[test]
    fn test_to_query_str_single_param() {
        let params = [("id", QueryValue::from(1296))];
        assert_eq!(to_query_str(&params), "?id=1296");
    }

    /// 布尔值渲染为小写的 true / false
    #[test]
    fn test_to_query_str_renders_bools_lowercase() {
        let params = [
            ("detailed", QueryValue::from(false)),
            ("echo", QueryValue::from(true)),
        ];
        assert_eq!(to_query_str(&params), "?detailed=false&echo=true");
    }

    /// 列表以逗号连接，嵌套列表展平
    #[test]
    fn test_to_query_str_joins_lists_with_commas() {
        let params = [("things", QueryValue::from(vec![1, 2, 3]))];
        assert_eq!(to_query_str(&params), "?things=1,2,3");

        let nested = [(
            "mixed",
            QueryValue::List(vec![
                QueryValue::from(vec![1, 2]),
                QueryValue::from(true),
                QueryValue::from("x"),
            ]),
        )];
        assert_eq!(to_query_str(&nested), "?mixed=1,2,true,x");
    }

    /// 构建方向不做百分号转义，文本原样输出
    #[test]
    fn test_to_query_str_does_not_escape() {
        let params = [("q", QueryValue::from("hello world & more"))];
        assert_eq!(to_query_str(&params), "?q=hello world & more");
    }

    #[test]
    fn test_to_query_str_empty_text_value() {
        let params = [("marker", QueryValue::from(""))];
        assert_eq!(to_query_str(&params), "?marker=");
    }

    #[test]
    fn test_query_value_from_json() {
        assert_eq!(QueryValue::from(json!(true)).to_string(), "true");
        assert_eq!(QueryValue::from(json!(42)).to_string(), "42");
        assert_eq!(QueryValue::from(json!(1.5)).to_string(), "1.5");
        assert_eq!(QueryValue::from(json!("free text")).to_string(), "free text");
        assert_eq!(QueryValue::from(json!([1, "x", true])).to_string(), "1,x,true");
        assert_eq!(QueryValue::from(json!(null)).to_string(), "null");
        assert_eq!(QueryValue::from(json!({"a": 1})).to_string(), r#"{"a":1}"#);
    }

    /// 无标签反序列化应当落到形状匹配的变体上
    #[test]
    fn test_query_value_untagged_deserialize() {
        let values: Vec<QueryValue> =
            serde_json::from_str(r#"[7, "seven", true, 0.5, [1, 2]]"#).unwrap();
        assert_eq!(
            values,
            vec![
                QueryValue::Int(7),
                QueryValue::Text("seven".to_string()),
                QueryValue::Bool(true),
                QueryValue::Float(0.5),
                QueryValue::List(vec![QueryValue::Int(1), QueryValue::Int(2)]),
            ]
        );
    }

    #[test]
    fn test_parse_query_str_basic() {
        let params = parse_query_str("?a=1&b=two");
        assert_eq!(
            params,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "two".to_string()),
            ]
        );
    }

    /// 前导 '?' 可带可不带
    #[test]
    fn test_parse_query_str_optional_question_mark() {
        assert_eq!(parse_query_str("a=1"), parse_query_str("?a=1"));
    }

    /// 键和值都会解码，'+' 按空格处理
    #[test]
    fn test_parse_query_str_decodes_pairs() {
        let params = parse_query_str("q=hello+world&name=%E4%B8%AD%E6%96%87");
        assert_eq!(
            params,
            vec![
                ("q".to_string(), "hello world".to_string()),
                ("name".to_string(), "中文".to_string()),
            ]
        );
    }

    /// 空段与空键跳过，无 '=' 的段视为空值
    #[test]
    fn test_parse_query_str_degenerate_pairs() {
        let params = parse_query_str("a=1&&flag&=orphan&b=2");
        assert_eq!(
            params,
            vec![
                ("a".to_string(), "1".to_string()),
                ("flag".to_string(), "".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_query_str_empty_input() {
        assert!(parse_query_str("").is_empty());
        assert!(parse_query_str("?").is_empty());
    }

    /// 重复键原样保留，不做合并
    #[test]
    fn test_parse_query_str_keeps_duplicate_keys() {
        let params = parse_query_str("t=1&t=2");
        assert_eq!(
            params,
            vec![
                ("t".to_string(), "1".to_string()),
                ("t".to_string(), "2".to_string()),
            ]
        );
    }
}
