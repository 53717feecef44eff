//! 調理時間の解析

use regex::Regex;
use std::sync::LazyLock;

// 最初に現れる「ASCII数字 + 単位」のみを見る
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*(hours?|hrs?|mins?)").expect("valid time regex"));

/// 自由記述の時間文字列を分に変換
///
/// "45 mins" → 45, "1 hour" → 60, 解析できない場合は 0。
/// "1 hour 30 min" のように複数あっても先頭の "1 hour" だけを使う。
pub fn parse_time(time: &str) -> u32 {
    let Some(caps) = TIME_RE.captures(time) else {
        return 0;
    };
    // 桁あふれは上限に丸める
    let value: u32 = caps[1].parse().unwrap_or(u32::MAX);
    if caps[2].to_lowercase().starts_with('h') {
        value.saturating_mul(60)
    } else {
        value
    }
}
