//! Forecast model runs and their time offsets.

use crate::field::Field;
use chrono::{DateTime, Duration, DurationRound, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Hours between synoptic model runs (00/06/12/18 UTC).
pub const RUN_CYCLE_HOURS: u32 = 6;

/// Forecast horizon of the portal's mesoscale model, in hours.
pub const FORECAST_HORIZON_HOURS: u32 = 48;

/// A numerical model run identified by its reference time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRun {
    /// Model code (e.g. "mesoscale")
    pub model: String,
    /// Reference (initialization) time, UTC
    pub reftime: DateTime<Utc>,
}

impl ModelRun {
    pub fn new(model: impl Into<String>, reftime: DateTime<Utc>) -> Self {
        Self {
            model: model.into(),
            reftime,
        }
    }

    /// Wall-clock time a frame at `offset` hours is valid for.
    pub fn valid_time(&self, offset_hours: u32) -> DateTime<Utc> {
        self.reftime + Duration::hours(i64::from(offset_hours))
    }
}

/// The latest `count` synoptic run reference times not after `now`,
/// newest first.
pub fn recent_runs(now: DateTime<Utc>, count: usize) -> Vec<DateTime<Utc>> {
    let cycle = Duration::hours(i64::from(RUN_CYCLE_HOURS));
    let Ok(latest) = now.duration_trunc(cycle) else {
        return Vec::new();
    };
    (0..count).map(|i| latest - cycle * i as i32).collect()
}

/// Forecast offsets (hours since reftime) that have a map frame, from the
/// field's accumulation floor to the horizon, stepping by the accumulation
/// period (hourly for instantaneous fields).
pub fn offset_sequence(field: &Field, horizon_hours: u32) -> Vec<u32> {
    let step = field.accumulation_hours.unwrap_or(1).max(1);
    let mut offsets = Vec::new();
    let mut offset = field.offset_floor();
    while offset <= horizon_hours {
        offsets.push(offset);
        offset += step;
    }
    offsets
}

/// Initial slider offset for a freshly selected run.
///
/// A run from the current UTC day starts at the current hour so the first
/// frame shown is "now"; an older run starts at the field's accumulation
/// floor.
pub fn initial_offset(field: &Field, reftime: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    if reftime.date_naive() == now.date_naive() {
        now.hour()
    } else {
        field.offset_floor()
    }
}
