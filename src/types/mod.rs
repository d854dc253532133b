//! Public types for the Lunara API.

mod prediction;
mod record;

pub use prediction::{Phase, PhasePrediction};
pub use record::{
    CycleRecord, DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_DURATION, MAX_CYCLE_LENGTH, MIN_CYCLE_LENGTH,
};
