use serde::Serialize;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResponseCategory {
    Immediate,
    Fast,
    Normal,
    Slow,
    Ignored,
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResponseCategory::Immediate => "Immediate",
            ResponseCategory::Fast => "Fast",
            ResponseCategory::Normal => "Normal",
            ResponseCategory::Slow => "Slow",
            ResponseCategory::Ignored => "Ignored",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseTime {
    pub category: ResponseCategory,
    pub points: i32,
}

/// Categorize how quickly a contact responded.
///
/// Breakpoints are inclusive upper bounds in hours: 1, 24, 72, 168 (one week).
/// Anything slower counts as ignored.
pub fn categorize_response_time(hours: f64) -> ResponseTime {
    let (category, points) = if hours <= 1.0 {
        (ResponseCategory::Immediate, 5)
    } else if hours <= 24.0 {
        (ResponseCategory::Fast, 5)
    } else if hours <= 72.0 {
        (ResponseCategory::Normal, 2)
    } else if hours <= 168.0 {
        (ResponseCategory::Slow, 0)
    } else {
        (ResponseCategory::Ignored, -8)
    };
    ResponseTime { category, points }
}

/// Same as [`categorize_response_time`] for a parsed duration.
pub fn categorize_response_duration(elapsed: Duration) -> ResponseTime {
    categorize_response_time(elapsed.as_secs_f64() / 3600.0)
}

/// Engagement counts derived from a batch of raw response times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResponseTally {
    pub fast_responses: u32,
    pub ignored_notifications: u32,
    pub total_points: i32,
}

impl ResponseTally {
    pub fn from_hours(hours: &[f64]) -> Self {
        let mut tally = Self::default();
        for &h in hours {
            tally.record(categorize_response_time(h));
        }
        tally
    }

    pub fn record(&mut self, response: ResponseTime) {
        match response.category {
            ResponseCategory::Immediate | ResponseCategory::Fast => self.fast_responses += 1,
            ResponseCategory::Ignored => self.ignored_notifications += 1,
            ResponseCategory::Normal | ResponseCategory::Slow => {}
        }
        self.total_points += response.points;
    }
}
