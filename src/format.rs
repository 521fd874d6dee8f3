//! 时长显示格式化

/// 整数不显示小数，非整数保留两位
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

/// 分钟数渲染为显示文本
///
/// 不足 60 分钟渲染为 `{n}分`，否则 `{h}时{m}分`；余数四舍五入到
/// 整分钟，进位出的 60 分并入小时。
pub fn format_minutes(minutes: f64) -> String {
    if minutes < 60.0 {
        return format!("{}分", format_number(minutes));
    }

    let mut hours = (minutes / 60.0).floor() as i64;
    let mut remaining = (minutes % 60.0).round() as i64;
    if remaining == 60 {
        hours += 1;
        remaining = 0;
    }
    format!("{}时{}分", hours, remaining)
}
