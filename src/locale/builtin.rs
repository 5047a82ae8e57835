//! Built-in locale data.

use chrono::Weekday;

/// Locale settings for formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct Locale {
    pub tag: &'static str,
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
    pub day_names_short: [&'static str; 7],
    pub day_names_full: [&'static str; 7],
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            tag: "en-US",
            month_names_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            month_names_full: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            day_names_full: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
        }
    }

    /// Simplified Chinese locale.
    pub fn zh_cn() -> Self {
        Locale {
            tag: "zh-CN",
            month_names_short: [
                "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
            ],
            month_names_full: [
                "一月",
                "二月",
                "三月",
                "四月",
                "五月",
                "六月",
                "七月",
                "八月",
                "九月",
                "十月",
                "十一月",
                "十二月",
            ],
            day_names_short: ["周日", "周一", "周二", "周三", "周四", "周五", "周六"],
            day_names_full: [
                "星期日",
                "星期一",
                "星期二",
                "星期三",
                "星期四",
                "星期五",
                "星期六",
            ],
        }
    }

    /// Look up a built-in locale by BCP 47 tag, e.g. `en-US` or `zh_cn`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.replace('_', "-").to_ascii_lowercase().as_str() {
            "en" | "en-us" => Some(Self::en_us()),
            "zh" | "zh-cn" | "zh-hans" | "zh-hans-cn" => Some(Self::zh_cn()),
            _ => None,
        }
    }

    /// Name of a weekday, long (`Tuesday`, `星期二`) or short (`Tue`, `周二`).
    pub fn weekday_name(&self, weekday: Weekday, long: bool) -> &'static str {
        // Tables start at Sunday
        let idx = weekday.num_days_from_sunday() as usize;
        if long {
            self.day_names_full[idx]
        } else {
            self.day_names_short[idx]
        }
    }

    /// Name of a month (1-12), long or short.
    pub fn month_name(&self, month: u32, long: bool) -> &'static str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        if long {
            self.month_names_full[idx]
        } else {
            self.month_names_short[idx]
        }
    }
}
