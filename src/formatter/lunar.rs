//! Lunar calendar style

use chrono::NaiveDate;

use crate::error::FormatError;
use crate::lunar::gregorian_to_lunar;

#[rustfmt::skip]
const CHINESE_NUMBERS: [&str; 31] = [
    "一", "二", "三", "四", "五", "六", "七", "八", "九", "十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "二十一", "二十二", "二十三", "二十四", "二十五", "二十六", "二十七", "二十八", "二十九", "三十",
    "三十一",
];

/// `2024年正月二十五日(农历)`
pub fn lunar(date: NaiveDate) -> Result<String, FormatError> {
    let lunar = gregorian_to_lunar(date)?;
    Ok(format!(
        "{}年{}{}日(农历)",
        lunar.year,
        lunar.month_name(),
        number_to_chinese(lunar.day)?
    ))
}

/// Chinese numeral word for a day of the month, 1 through 31.
pub fn number_to_chinese(day: u32) -> Result<&'static str, FormatError> {
    day.checked_sub(1)
        .and_then(|idx| CHINESE_NUMBERS.get(idx as usize))
        .copied()
        .ok_or(FormatError::InvalidLunarDay { day })
}
