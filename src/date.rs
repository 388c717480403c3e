use chrono::{DateTime, NaiveDateTime, Utc};
use log::debug;

use crate::{exception::Exception, param::*};

/// 将 UTC 时间戳格式化为 RFC 1123 固定格式的 HTTP 日期字符串，
/// 形如 `Tue, 15 Nov 1994 12:45:26 GMT`。
///
/// 类型标记 `DateTime<Utc>` 即"已是 UTC"的约定，本函数不做任何时区换算。
/// 该格式无法表达亚秒部分，格式化时直接截断。
pub fn dt_to_http(dt: &DateTime<Utc>) -> String {
    dt.format(HTTP_DATE_FMT).to_string()
}

/// 将 HTTP 日期字符串解析回 UTC 时间戳。
///
/// 解析采取两级校验：先用正则确保字符串结构与固定格式完全一致
/// （字段宽度、大小写形态、`GMT` 后缀），再交由 chrono 判定字段取值
/// 能否构成真实的 UTC 时刻（包括星期与日期的一致性）。
///
/// # 错误处理
/// - 结构不符合固定格式时返回 `Exception::MalformedHttpDate`。
/// - 结构正确但不构成真实时刻时返回 `Exception::ImpossibleHttpDate`。
pub fn http_date_to_dt(http_date: &str) -> Result<DateTime<Utc>, Exception> {
    if !HTTP_DATE_RE.is_match(http_date) {
        debug!("HTTP日期结构校验失败：{:?}", http_date);
        return Err(Exception::MalformedHttpDate);
    }

    match NaiveDateTime::parse_from_str(http_date, HTTP_DATE_FMT) {
        Ok(naive) => Ok(naive.and_utc()),
        Err(e) => {
            debug!("HTTP日期字段校验失败：{:?}，原因：{}", http_date, e);
            Err(Exception::ImpossibleHttpDate)
        }
    }
}

/// 以 HTTP 日期格式返回当前的 UTC 时间，可直接用于 `Date` 一类的响应头。
pub fn http_now() -> String {
    dt_to_http(&Utc::now())
}
