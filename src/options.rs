//! Formatting and update options.

use chrono::FixedOffset;

use crate::locale::Locale;

/// Default cap on the number of rows fetched by one update run.
pub const DEFAULT_MAX_ROWS: usize = 5000;

/// Seconds east of UTC for the default reference zone (Asia/Shanghai).
const DEFAULT_OFFSET_SECS: i32 = 8 * 3600;

/// Options for formatting dates.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    /// Names used by the Chinese styles.
    pub locale_zh: Locale,
    /// Names used by the US English styles.
    pub locale_en: Locale,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            locale_zh: Locale::zh_cn(),
            locale_en: Locale::en_us(),
        }
    }
}

/// Options for an update run.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOptions {
    /// Maximum number of rows fetched. Rows past the cap are not processed.
    pub max_rows: usize,
    /// Zone used to turn stored instants into calendar dates.
    pub reference_offset: FixedOffset,
    /// Options passed through to the formatter.
    pub format: FormatOptions,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        UpdateOptions {
            max_rows: DEFAULT_MAX_ROWS,
            reference_offset: default_offset(),
            format: FormatOptions::default(),
        }
    }
}

impl UpdateOptions {
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    pub fn with_reference_offset(mut self, offset: FixedOffset) -> Self {
        self.reference_offset = offset;
        self
    }
}

fn default_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_OFFSET_SECS).expect("+08:00 is within a day")
}
