use serde::{Deserialize, Serialize};

/// Travel time in seconds, as reported by the routing engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration(f64);

impl Duration {
    pub const fn from_seconds(secs: f64) -> Self {
        Self(secs)
    }

    pub const fn from_minutes(minutes: f64) -> Self {
        Self(minutes * 60.0)
    }

    pub const fn as_seconds(&self) -> f64 {
        self.0
    }

    /// Whole minutes, half a minute rounds up.
    pub fn as_rounded_minutes(&self) -> u64 {
        (self.0 / 60.0).round().max(0.0) as u64
    }
}

#[test]
fn rounded_minutes_1() {
    assert_eq!(Duration::from_seconds(0.0).as_rounded_minutes(), 0);
}

#[test]
fn rounded_minutes_2() {
    assert_eq!(Duration::from_seconds(89.0).as_rounded_minutes(), 1);
}

#[test]
fn rounded_minutes_3() {
    assert_eq!(Duration::from_seconds(90.0).as_rounded_minutes(), 2);
}

#[test]
fn rounded_minutes_4() {
    assert_eq!(Duration::from_minutes(12.0).as_rounded_minutes(), 12);
}
