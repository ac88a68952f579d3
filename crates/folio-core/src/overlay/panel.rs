//! Mounted/visible sequencing for the control-center panel.

use std::time::Duration;

use crate::config::OverlayConfig;
use crate::timer::{Timer, Timestamp, earliest};

/// Lifecycle phase of the panel.
///
/// `Opening` and `Closing` are the timed halves of the enter and exit
/// transitions: the panel is in the render tree but not at its final state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelPhase {
    #[default]
    Closed,
    /// Mounted, waiting one tick before becoming visible.
    Opening,
    /// Mounted and visible.
    Open,
    /// Hidden, unmounting when the exit transition ends.
    Closing,
}

impl PanelPhase {
    /// Panel exists in the render tree.
    pub fn is_mounted(self) -> bool {
        !matches!(self, PanelPhase::Closed)
    }

    /// Panel is at its final opacity/transform.
    pub fn is_visible(self) -> bool {
        matches!(self, PanelPhase::Open)
    }
}

/// Layout variant chosen when the panel opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    /// Dropdown anchored beneath the handle (desktop).
    Docked,
    /// Full-viewport sheet (narrow viewports).
    Fullscreen,
}

/// Timed open/close transitions of the panel.
#[derive(Debug, Clone)]
pub struct PanelTransition {
    phase: PanelPhase,
    /// Layout latched at open time, cleared on unmount.
    mode: Option<PanelMode>,
    enter: Timer,
    exit: Timer,
    open_delay: Duration,
    close_delay: Duration,
}

impl PanelTransition {
    pub fn new(config: &OverlayConfig) -> Self {
        Self {
            phase: PanelPhase::Closed,
            mode: None,
            enter: Timer::new(),
            exit: Timer::new(),
            open_delay: config.open_delay(),
            close_delay: config.close_delay(),
        }
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Layout of the mounted panel, if mounted.
    pub fn mode(&self) -> Option<PanelMode> {
        self.mode
    }

    pub fn is_mounted(&self) -> bool {
        self.phase.is_mounted()
    }

    pub fn is_visible(&self) -> bool {
        self.phase.is_visible()
    }

    /// Number of armed timers (at most one at any time).
    pub fn pending_timers(&self) -> usize {
        usize::from(self.enter.is_pending()) + usize::from(self.exit.is_pending())
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Timestamp> {
        earliest(self.enter.deadline(), self.exit.deadline())
    }

    /// Mount the panel and schedule it to become visible.
    ///
    /// Opening while closing cancels the pending unmount. Returns true if the
    /// phase changed.
    pub fn open(&mut self, now: Timestamp, mode: PanelMode) -> bool {
        match self.phase {
            PanelPhase::Opening | PanelPhase::Open => false,
            PanelPhase::Closed | PanelPhase::Closing => {
                self.exit.cancel();
                self.mode = Some(mode);
                self.phase = PanelPhase::Opening;
                self.enter.arm(now, self.open_delay);
                log::debug!("panel opening ({mode:?})");
                true
            }
        }
    }

    /// Hide the panel now and schedule the unmount.
    ///
    /// Calling this again while closing restarts the exit delay from `now`.
    /// Returns false if the panel was already closed.
    pub fn close(&mut self, now: Timestamp) -> bool {
        match self.phase {
            PanelPhase::Closed => false,
            PanelPhase::Opening | PanelPhase::Open | PanelPhase::Closing => {
                self.enter.cancel();
                self.phase = PanelPhase::Closing;
                self.exit.arm(now, self.close_delay);
                log::debug!("panel closing");
                true
            }
        }
    }

    /// Fire due transitions. Returns true if the phase changed.
    pub fn tick(&mut self, now: Timestamp) -> bool {
        if self.enter.poll(now) && self.phase == PanelPhase::Opening {
            self.phase = PanelPhase::Open;
            log::debug!("panel open");
            return true;
        }
        if self.exit.poll(now) && self.phase == PanelPhase::Closing {
            self.phase = PanelPhase::Closed;
            self.mode = None;
            log::debug!("panel closed");
            return true;
        }
        false
    }

    /// Drop everything immediately (component unmount).
    pub fn reset(&mut self) {
        self.enter.cancel();
        self.exit.cancel();
        self.phase = PanelPhase::Closed;
        self.mode = None;
    }
}
