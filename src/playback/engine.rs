//! Timeline playback engine
//!
//! Owns the current year and the play/pause state machine. While playing it
//! keeps exactly one frame request outstanding; each delivered frame may
//! advance the year by one once enough wall time has passed since the last
//! advancement. Entering `Paused` by any path cancels the outstanding request
//! and forgets the timing baseline.

use std::time::Duration;

use crate::catalog::Catalog;
use crate::core::types::{clamp_year, TerritoryId, Year, MAX_YEAR, MIN_YEAR};

use super::clock::{FrameRequest, FrameScheduler};
use super::speed::Speed;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Paused,
    Playing,
}

/// What a delivered frame did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The request was cancelled or superseded; nothing changed
    Stale,
    /// First frame since entering Playing; timing baseline recorded
    Baseline,
    /// Not enough time has elapsed yet
    Waiting,
    /// The year moved forward by one
    Advanced { year: Year },
    /// The year moved forward onto a catalog record and playback paused
    AutoPaused { year: Year, territory: TerritoryId },
    /// Already at the final year; playback paused
    ReachedEnd,
}

#[derive(Debug)]
pub struct PlaybackEngine {
    current_year: Year,
    state: PlaybackState,
    speed: Speed,
    auto_pause: bool,
    /// Timestamp of the last advancement (or of the baseline frame)
    last_advance: Option<Duration>,
    frames: FrameScheduler,
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new(Speed::Normal, true)
    }
}

impl PlaybackEngine {
    pub fn new(speed: Speed, auto_pause: bool) -> Self {
        Self {
            current_year: MIN_YEAR,
            state: PlaybackState::Paused,
            speed,
            auto_pause,
            last_advance: None,
            frames: FrameScheduler::new(),
        }
    }

    pub fn current_year(&self) -> Year {
        self.current_year
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn auto_pause(&self) -> bool {
        self.auto_pause
    }

    /// The frame the host should deliver next, if any
    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.frames.pending()
    }

    /// Paused -> Playing. Returns false if already playing.
    pub fn play(&mut self) -> bool {
        if self.is_playing() {
            return false;
        }
        self.state = PlaybackState::Playing;
        self.last_advance = None;
        self.frames.request();
        tracing::info!(year = self.current_year, speed = %self.speed, "playback.play");
        true
    }

    /// Playing -> Paused. Returns false if already paused.
    pub fn pause(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.enter_paused();
        tracing::info!(year = self.current_year, "playback.pause");
        true
    }

    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Back to the first year, paused
    pub fn reset(&mut self) {
        self.enter_paused();
        self.current_year = MIN_YEAR;
        tracing::info!("playback.reset");
    }

    /// Jump to `year` (clamped into range), paused
    pub fn seek(&mut self, year: Year) {
        self.enter_paused();
        self.current_year = clamp_year(year);
        tracing::info!(year = self.current_year, "playback.seek");
    }

    /// Takes effect on the next frame; play state is untouched
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
        tracing::debug!(%speed, "playback.speed");
    }

    /// Takes effect at the next year boundary
    pub fn set_auto_pause(&mut self, enabled: bool) {
        self.auto_pause = enabled;
        tracing::debug!(enabled, "playback.auto_pause");
    }

    /// Drop any outstanding frame request and stop. Used on teardown.
    pub fn cancel(&mut self) {
        self.enter_paused();
    }

    fn enter_paused(&mut self) {
        self.state = PlaybackState::Paused;
        self.last_advance = None;
        self.frames.cancel();
    }

    /// Deliver a frame timestamp for `request`.
    ///
    /// At most one year advances per frame regardless of elapsed time.
    pub fn on_frame(
        &mut self,
        request: FrameRequest,
        timestamp: Duration,
        catalog: &Catalog,
    ) -> FrameOutcome {
        if !self.frames.consume(request) || !self.is_playing() {
            return FrameOutcome::Stale;
        }

        let outcome = self.advance(timestamp, catalog);

        if self.is_playing() {
            self.frames.request();
        }
        outcome
    }

    fn advance(&mut self, timestamp: Duration, catalog: &Catalog) -> FrameOutcome {
        let Some(last) = self.last_advance else {
            self.last_advance = Some(timestamp);
            return FrameOutcome::Baseline;
        };

        let elapsed = timestamp.saturating_sub(last);
        if elapsed < self.speed.year_interval() {
            return FrameOutcome::Waiting;
        }

        if self.current_year >= MAX_YEAR {
            self.enter_paused();
            tracing::info!(year = self.current_year, "playback.end");
            return FrameOutcome::ReachedEnd;
        }

        self.current_year += 1;
        self.last_advance = Some(timestamp);
        tracing::debug!(year = self.current_year, "playback.advance");

        match catalog.first_in_year(self.current_year) {
            Some(territory) if self.auto_pause => {
                self.enter_paused();
                tracing::info!(
                    year = self.current_year,
                    territory = %territory.id,
                    "playback.auto_pause"
                );
                FrameOutcome::AutoPaused {
                    year: self.current_year,
                    territory: territory.id.clone(),
                }
            }
            _ => FrameOutcome::Advanced {
                year: self.current_year,
            },
        }
    }
}
