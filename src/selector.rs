//! Output style selectors.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// One of the seven output styles, numbered the way the host form stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FormatSelector {
    /// `2024 年 3 月 5 日`
    ChineseNumeric = 0,
    /// `2024年3月5日，星期二`
    ChineseLongWeekday = 1,
    /// `Mar 5, 2024`
    UsShort = 2,
    /// `Tue, Mar 5, 2024`
    UsShortWeekday = 3,
    /// `March 5th, 2024`
    UsLongOrdinal = 4,
    /// `March 5, 2024 (Tuesday)`
    UsLongWeekday = 5,
    /// `2024年正月二十五日(农历)`
    Lunar = 6,
}

impl FormatSelector {
    /// Every selector, in selector order.
    pub const ALL: [FormatSelector; 7] = [
        FormatSelector::ChineseNumeric,
        FormatSelector::ChineseLongWeekday,
        FormatSelector::UsShort,
        FormatSelector::UsShortWeekday,
        FormatSelector::UsLongOrdinal,
        FormatSelector::UsLongWeekday,
        FormatSelector::Lunar,
    ];

    /// The integer stored by the host form.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Example rendering shown in the style picker.
    pub fn label(self) -> &'static str {
        match self {
            FormatSelector::ChineseNumeric => "2024 年 3 月 5 日",
            FormatSelector::ChineseLongWeekday => "2024年3月5日，星期二",
            FormatSelector::UsShort => "Mar 5, 2024",
            FormatSelector::UsShortWeekday => "Tue, Mar 5, 2024",
            FormatSelector::UsLongOrdinal => "March 5th, 2024",
            FormatSelector::UsLongWeekday => "March 5, 2024 (Tuesday)",
            FormatSelector::Lunar => "2024年正月二十五日(农历)",
        }
    }
}

impl TryFrom<i64> for FormatSelector {
    type Error = FormatError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(FormatError::UnknownSelector { value })
    }
}

impl From<FormatSelector> for i64 {
    fn from(selector: FormatSelector) -> Self {
        selector.index() as i64
    }
}

impl FromStr for FormatSelector {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| FormatError::InvalidSelector { raw: s.to_string() })?;
        Self::try_from(value)
    }
}

impl fmt::Display for FormatSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
