//! Date formatting engine

mod gregorian;
mod lunar;

pub use gregorian::add_ordinal_suffix;
pub use lunar::number_to_chinese;

use chrono::NaiveDate;

use crate::error::FormatError;
use crate::options::FormatOptions;
use crate::selector::FormatSelector;

/// Format a calendar date in the style chosen by `selector`.
///
/// Styles 0-5 are infallible. The lunar style fails for dates outside the
/// lunar table range.
pub fn format_date(
    date: NaiveDate,
    selector: FormatSelector,
    opts: &FormatOptions,
) -> Result<String, FormatError> {
    let zh = &opts.locale_zh;
    let en = &opts.locale_en;

    let text = match selector {
        FormatSelector::ChineseNumeric => gregorian::chinese_numeric(date),
        FormatSelector::ChineseLongWeekday => gregorian::chinese_long_weekday(date, zh),
        FormatSelector::UsShort => gregorian::us_short(date, en),
        FormatSelector::UsShortWeekday => gregorian::us_short_weekday(date, en),
        FormatSelector::UsLongOrdinal => gregorian::us_long_ordinal(date, en),
        FormatSelector::UsLongWeekday => gregorian::us_long_weekday(date, en),
        FormatSelector::Lunar => lunar::lunar(date)?,
    };

    Ok(text)
}
