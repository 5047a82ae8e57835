//! Locale data for month and weekday names.

mod builtin;

pub use builtin::Locale;
