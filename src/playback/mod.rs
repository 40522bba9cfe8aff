//! Timeline playback: speed, frame timing and the playback state machine

pub mod clock;
pub mod engine;
pub mod speed;

pub use clock::{FrameClock, FrameRequest, FrameScheduler, ManualClock, MonotonicClock};
pub use engine::{FrameOutcome, PlaybackEngine, PlaybackState};
pub use speed::Speed;
