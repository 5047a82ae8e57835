//! Gregorian styles in Chinese and US English

use chrono::{Datelike, NaiveDate};

use crate::locale::Locale;

/// `2024 年 3 月 5 日`
pub fn chinese_numeric(date: NaiveDate) -> String {
    format!("{} 年 {} 月 {} 日", date.year(), date.month(), date.day())
}

/// `2024年3月5日，星期二`
pub fn chinese_long_weekday(date: NaiveDate, locale: &Locale) -> String {
    format!(
        "{}年{}月{}日，{}",
        date.year(),
        date.month(),
        date.day(),
        locale.weekday_name(date.weekday(), true)
    )
}

/// `Mar 5, 2024`
pub fn us_short(date: NaiveDate, locale: &Locale) -> String {
    format!(
        "{} {}, {}",
        locale.month_name(date.month(), false),
        date.day(),
        date.year()
    )
}

/// `Tue, Mar 5, 2024`
pub fn us_short_weekday(date: NaiveDate, locale: &Locale) -> String {
    format!(
        "{}, {}",
        locale.weekday_name(date.weekday(), false),
        us_short(date, locale)
    )
}

/// `March 5th, 2024`
pub fn us_long_ordinal(date: NaiveDate, locale: &Locale) -> String {
    format!(
        "{} {}, {}",
        locale.month_name(date.month(), true),
        add_ordinal_suffix(date.day()),
        date.year()
    )
}

/// `March 5, 2024 (Tuesday)`
pub fn us_long_weekday(date: NaiveDate, locale: &Locale) -> String {
    format!(
        "{} {}, {} ({})",
        locale.month_name(date.month(), true),
        date.day(),
        date.year(),
        locale.weekday_name(date.weekday(), true)
    )
}

/// Append an English ordinal suffix: 1st, 2nd, 3rd, 4th.
///
/// 11, 12 and 13 always take `th`. Everything else follows the last digit,
/// so 101 is `101st`.
pub fn add_ordinal_suffix(day: u32) -> String {
    if (11..=13).contains(&day) {
        return format!("{}th", day);
    }

    let suffix = match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_ordinal_suffix() {
        assert_eq!(add_ordinal_suffix(1), "1st");
        assert_eq!(add_ordinal_suffix(2), "2nd");
        assert_eq!(add_ordinal_suffix(3), "3rd");
        assert_eq!(add_ordinal_suffix(4), "4th");
        assert_eq!(add_ordinal_suffix(11), "11th");
        assert_eq!(add_ordinal_suffix(12), "12th");
        assert_eq!(add_ordinal_suffix(13), "13th");
        assert_eq!(add_ordinal_suffix(21), "21st");
        assert_eq!(add_ordinal_suffix(22), "22nd");
        assert_eq!(add_ordinal_suffix(23), "23rd");
        assert_eq!(add_ordinal_suffix(30), "30th");
        assert_eq!(add_ordinal_suffix(101), "101st");
    }

    #[test]
    fn test_no_zero_padding() {
        assert_eq!(chinese_numeric(ymd(2024, 1, 1)), "2024 年 1 月 1 日");
        assert_eq!(us_short(ymd(2024, 1, 1), &Locale::en_us()), "Jan 1, 2024");
    }

    #[test]
    fn test_weekday_styles_on_sunday() {
        // 2023-12-31 was a Sunday
        let date = ymd(2023, 12, 31);
        assert_eq!(
            chinese_long_weekday(date, &Locale::zh_cn()),
            "2023年12月31日，星期日"
        );
        assert_eq!(us_short_weekday(date, &Locale::en_us()), "Sun, Dec 31, 2023");
        assert_eq!(
            us_long_weekday(date, &Locale::en_us()),
            "December 31, 2023 (Sunday)"
        );
    }

    #[test]
    fn test_us_long_ordinal_teens() {
        let en = Locale::en_us();
        assert_eq!(us_long_ordinal(ymd(2024, 7, 12), &en), "July 12th, 2024");
        assert_eq!(us_long_ordinal(ymd(2024, 8, 22), &en), "August 22nd, 2024");
        assert_eq!(us_long_ordinal(ymd(2024, 5, 31), &en), "May 31st, 2024");
    }
}
