use percent_encoding::{percent_decode_str, utf8_percent_encode};

use crate::param::URL_UNSAFE_SET;

/// 对 URL 中的不安全字符做百分号转义，转义集见 [`URL_UNSAFE_SET`]。
///
/// 转义按 UTF-8 字节进行：非 ASCII 字符先落到字节层面，再逐字节转义。
pub fn percent_escape(url: &str) -> String {
    utf8_percent_encode(url, URL_UNSAFE_SET).to_string()
}

/// 解码百分号序列，同时把 `+` 当作空格处理，永不失败。
///
/// 无法按 UTF-8 解码的字节替换为 U+FFFD；无效的百分号序列原样保留。
pub fn percent_unescape(nstr: &str) -> String {
    // 没有待解码字符时跳过解码开销
    if !nstr.contains('%') && !nstr.contains('+') {
        return nstr.to_string();
    }

    // 先替换 '+'：转义形式 "%2B" 不受影响，仍会解码回 '+'
    let plus_decoded = nstr.replace('+', " ");
    percent_decode_str(&plus_decoded)
        .decode_utf8_lossy()
        .into_owned()
}
