// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 通用参数与常量模块
//!
//! 该模块定义了 `shaneyale-webutil` 各工具函数共享的常量与静态表，包括：
//! - HTTP 日期（RFC 1123 固定格式）的格式串与结构校验正则。
//! - 百分号转义使用的转义字符集（即安全集的补集）。
//! - 弃用警告使用的专属日志 target。

use lazy_static::lazy_static;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

/// HTTP 日期的 chrono 格式串，形如 `Tue, 15 Nov 1994 12:45:26 GMT`。
///
/// 参考标准：[RFC 1123](https://www.rfc-editor.org/rfc/rfc1123)，
/// 即 HTTP 报文头（`Date`、`Last-Modified`、`Expires` 等字段）采用的固定格式。
pub const HTTP_DATE_FMT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// 弃用警告的专属日志 target。
///
/// 使用独立的 target 使这类警告有别于普通日志记录：
/// 消费方可以按 target 精确路由或过滤，而默认日志配置不会把它静默丢弃。
pub const DEPRECATION_TARGET: &str = "deprecation";

/// 百分号转义的转义字符集。
///
/// 除字母数字、RFC 3986 非保留标点（`-` `.` `_` `~`）
/// 以及安全集 `/` `:` `,` `=` `?` `&` 之外的所有字符都会被转义。
pub const URL_UNSAFE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/')
    .remove(b':')
    .remove(b',')
    .remove(b'=')
    .remove(b'?')
    .remove(b'&');

lazy_static! {
    /// HTTP 日期的结构校验正则。
    ///
    /// 仅检查各字段的精确宽度与形态（星期、月份必须是首字母大写的三字母缩写，
    /// 日期和时间字段必须补零到固定位数，结尾必须是字面量 `GMT`），
    /// 字段取值能否构成真实时刻由 chrono 在解析阶段进一步判定。
    pub static ref HTTP_DATE_RE: Regex =
        Regex::new(r"^[A-Z][a-z]{2}, \d{2} [A-Z][a-z]{2} \d{4} \d{2}:\d{2}:\d{2} GMT$").unwrap();
}
