//! Day letters used in the "Meeting Patterns" column.
//!
//! Workday abbreviates class days with a single letter (`R` is Thursday).
//! Weekend letters are not part of the table and fail to parse.

use chrono::Weekday;

/// One supported class day: its pattern letter, its RFC 5545 `BYDAY` code and
/// the matching `chrono` weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayToken {
    pub letter: &'static str,
    pub code: &'static str,
    pub weekday: Weekday,
}

/// The complete set of recognized day letters.
pub const WEEKDAY_TOKENS: &[WeekdayToken] = &[
    WeekdayToken {
        letter: "M",
        code: "MO",
        weekday: Weekday::Mon,
    },
    WeekdayToken {
        letter: "T",
        code: "TU",
        weekday: Weekday::Tue,
    },
    WeekdayToken {
        letter: "W",
        code: "WE",
        weekday: Weekday::Wed,
    },
    WeekdayToken {
        letter: "R",
        code: "TH",
        weekday: Weekday::Thu,
    },
    WeekdayToken {
        letter: "F",
        code: "FR",
        weekday: Weekday::Fri,
    },
];

impl WeekdayToken {
    /// Look up a day letter. Matching is exact (`m` is not Monday).
    pub fn from_letter(letter: &str) -> Option<WeekdayToken> {
        WEEKDAY_TOKENS.iter().copied().find(|t| t.letter == letter)
    }
}

/// Comma-join the `BYDAY` codes of `tokens`, keeping their order.
pub fn by_day_list(tokens: &[WeekdayToken]) -> String {
    tokens.iter().map(|t| t.code).collect::<Vec<_>>().join(",")
}
