// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Exception 模块
//!
//! 该模块定义了各工具函数在输入不合法时返回的异常情况。
//!
//! ## 设计意图
//! - **错误分类**：区分"结构不符合固定格式"与"字段取值不构成真实时刻"两类解析失败。
//! - **语义映射**：每个变体对应一种具体的失败原因，便于上层模块将其转化为 `400 Bad Request` 一类的响应。
//! - **用户友好**：通过实现 `std::fmt::Display`，确保错误信息可以被安全地记录到日志或返回给客户端。

use std::fmt;

/// 工具函数解析输入过程中发生的异常类型。
///
/// 该枚举通常作为 `Result` 的 `Err` 部分返回，用于指示转换失败的具体原因。
#[derive(Debug, Copy, Clone)]
pub enum Exception {
    /// 输入字符串不符合 RFC 1123 规定的 HTTP 日期固定格式。
    /// 这通常发生在字段宽度不足、大小写形态错误或缺少 `GMT` 后缀时。
    MalformedHttpDate,
    /// 输入字符串结构正确，但字段取值不构成一个真实存在的 UTC 时刻
    /// （例如月份缩写无法识别、日期越界或星期与日期不一致）。
    ImpossibleHttpDate,
}

use Exception::*;

/// 为 `Exception` 实现 `Display` 特性，使其支持字符串格式化输出。
///
/// 工业实践中，这些描述信息常用于系统日志（Logging）以及发送给开发者的调试响应体中。
impl fmt::Display for Exception {
    /// 根据错误类型写入人类可读的描述文本。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedHttpDate => write!(f, "HTTP date doesn't match the RFC 1123 format"),
            ImpossibleHttpDate => write!(f, "HTTP date fields don't form a valid UTC time"),
        }
    }
}
