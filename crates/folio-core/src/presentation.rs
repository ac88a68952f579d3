//! Slide presentation: wrapping navigation, slide direction, autoplay.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PresentationConfig;
use crate::input::{EventResponse, Key};
use crate::listeners::{ListenerKind, ListenerSet};
use crate::timer::{Interval, Timestamp};

/// Errors from slide navigation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("slide index {index} out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },
    #[error("presentation has no slides")]
    Empty,
}

pub type Result<T> = std::result::Result<T, NavigationError>;

/// One slide of the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub title: String,
    /// Background color as RGB.
    pub color: [u8; 3],
}

impl Slide {
    pub fn new(id: impl Into<String>, title: impl Into<String>, color: [u8; 3]) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color,
        }
    }
}

/// The portfolio's built-in deck.
pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new("about", "About me", [0x29, 0x53, 0x8D]),
        Slide::new("skills", "Skills", [0x75, 0x89, 0xEB]),
        Slide::new("projects", "Projects", [0x17, 0xBE, 0xD1]),
    ]
}

/// Direction of the last navigation, used to pick the slide-in side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// No navigation yet.
    #[default]
    Still,
    Forward,
    Backward,
}

impl Direction {
    /// +1, -1 or 0.
    pub fn sign(self) -> i8 {
        match self {
            Direction::Still => 0,
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Render description of the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideView<'a> {
    pub slide: &'a Slide,
    pub index: usize,
    pub len: usize,
    pub direction: Direction,
    pub autoplay: bool,
}

/// Presentation state.
#[derive(Debug, Clone)]
pub struct Presentation {
    slides: Vec<Slide>,
    current: usize,
    direction: Direction,
    autoplay: Interval,
}

impl Presentation {
    /// Create a presentation on the first slide with autoplay off.
    pub fn new(slides: Vec<Slide>, config: &PresentationConfig) -> Result<Self> {
        if slides.is_empty() {
            return Err(NavigationError::Empty);
        }
        Ok(Self::from_slides(slides, config))
    }

    /// Presentation over [`default_slides`].
    pub fn with_default_deck(config: &PresentationConfig) -> Self {
        Self::from_slides(default_slides(), config)
    }

    /// `slides` must be non-empty.
    fn from_slides(slides: Vec<Slide>, config: &PresentationConfig) -> Self {
        debug_assert!(!slides.is_empty());
        Self {
            slides,
            current: 0,
            direction: Direction::Still,
            autoplay: Interval::new(config.autoplay_interval()),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; a presentation holds at least one slide.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn is_autoplay(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Advance to the next slide, wrapping to the first.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.slides.len();
        self.direction = Direction::Forward;
        log::trace!("slide {} (next)", self.current);
    }

    /// Go back to the previous slide, wrapping to the last.
    pub fn previous(&mut self) {
        let len = self.slides.len();
        self.current = (self.current + len - 1) % len;
        self.direction = Direction::Backward;
        log::trace!("slide {} (previous)", self.current);
    }

    /// Jump to `index`. Returns false when already there.
    pub fn go_to(&mut self, index: usize) -> Result<bool> {
        if index >= self.slides.len() {
            log::warn!("rejected slide index {index}");
            return Err(NavigationError::OutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        if index == self.current {
            return Ok(false);
        }
        self.direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = index;
        Ok(true)
    }

    /// Turn autoplay on or off. Turning it on starts a fresh period from `now`.
    pub fn set_autoplay(&mut self, enabled: bool, now: Timestamp) {
        match (enabled, self.autoplay.is_running()) {
            (true, false) => {
                self.autoplay.start(now);
                log::debug!("autoplay on");
            }
            (false, true) => {
                self.autoplay.stop();
                log::debug!("autoplay off");
            }
            _ => {}
        }
    }

    pub fn toggle_autoplay(&mut self, now: Timestamp) {
        self.set_autoplay(!self.autoplay.is_running(), now);
    }

    /// Keyboard navigation.
    pub fn key_down(&mut self, key: &Key, now: Timestamp) -> EventResponse {
        match key {
            Key::ArrowLeft => {
                self.previous();
                EventResponse::HANDLED
            }
            Key::ArrowRight | Key::Space => {
                self.next();
                EventResponse::CONSUMED
            }
            Key::Escape => {
                self.set_autoplay(false, now);
                EventResponse::HANDLED
            }
            Key::Other(_) => EventResponse::IGNORED,
        }
    }

    /// Advance once per elapsed autoplay period. Returns the number of advances.
    pub fn tick(&mut self, now: Timestamp) -> u32 {
        let periods = self.autoplay.poll(now);
        for _ in 0..periods {
            self.next();
        }
        periods
    }

    /// Next autoplay deadline, if running.
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.autoplay.next_deadline()
    }

    pub fn required_listeners(&self) -> ListenerSet {
        ListenerSet::of(&[ListenerKind::KeyDown])
    }

    pub fn view(&self) -> SlideView<'_> {
        SlideView {
            slide: self.current_slide(),
            index: self.current,
            len: self.slides.len(),
            direction: self.direction,
            autoplay: self.is_autoplay(),
        }
    }

    /// Stop autoplay; the host drops the key listener.
    pub fn unmount(&mut self) {
        self.autoplay.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn deck() -> Presentation {
        Presentation::with_default_deck(&PresentationConfig::default())
    }

    #[test]
    fn test_default_deck() {
        let presentation = deck();
        assert_eq!(presentation.len(), 3);
        assert_eq!(presentation.current_slide().id, "about");
        assert_eq!(presentation.current_slide().color, [0x29, 0x53, 0x8D]);
        assert_eq!(presentation.direction(), Direction::Still);
        assert!(!presentation.is_autoplay());
    }

    #[test]
    fn test_right_arrow_wraps_forward() {
        let mut presentation = deck();

        presentation.key_down(&Key::ArrowRight, ms(0));
        presentation.key_down(&Key::ArrowRight, ms(0));
        assert_eq!(presentation.current(), 2);
        assert_eq!(presentation.direction().sign(), 1);

        presentation.key_down(&Key::ArrowRight, ms(0));
        assert_eq!(presentation.current(), 0);
        assert_eq!(presentation.direction(), Direction::Forward);
    }

    #[test]
    fn test_left_arrow_wraps_backward() {
        let mut presentation = deck();
        let response = presentation.key_down(&Key::ArrowLeft, ms(0));

        assert!(response.handled);
        assert!(!response.prevent_default);
        assert_eq!(presentation.current(), 2);
        assert_eq!(presentation.direction().sign(), -1);
    }

    #[test]
    fn test_space_prevents_default() {
        let mut presentation = deck();
        let response = presentation.key_down(&Key::Space, ms(0));

        assert!(response.prevent_default);
        assert_eq!(presentation.current(), 1);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut presentation = deck();
        let response = presentation.key_down(&Key::from_dom("a"), ms(0));

        assert_eq!(response, EventResponse::IGNORED);
        assert_eq!(presentation.current(), 0);
    }

    #[test]
    fn test_go_to_sets_direction() {
        let mut presentation = deck();

        assert_eq!(presentation.go_to(2), Ok(true));
        assert_eq!(presentation.direction(), Direction::Forward);
        assert_eq!(presentation.go_to(1), Ok(true));
        assert_eq!(presentation.direction(), Direction::Backward);
    }

    #[test]
    fn test_go_to_same_index_is_noop() {
        let mut presentation = deck();
        presentation.next();

        assert_eq!(presentation.go_to(1), Ok(false));
        assert_eq!(presentation.direction(), Direction::Forward);
    }

    #[test]
    fn test_go_to_out_of_range() {
        let mut presentation = deck();
        assert_eq!(
            presentation.go_to(3),
            Err(NavigationError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(presentation.current(), 0);
    }

    #[test]
    fn test_new_matches_default_deck() {
        let config = PresentationConfig::default();
        let built = Presentation::new(default_slides(), &config).unwrap();
        let default = Presentation::with_default_deck(&config);

        assert_eq!(built.slides(), default.slides());
        assert_eq!(built.current(), default.current());
        assert_eq!(built.is_autoplay(), default.is_autoplay());
    }

    #[test]
    fn test_empty_deck_rejected() {
        let result = Presentation::new(Vec::new(), &PresentationConfig::default());
        assert!(matches!(result, Err(NavigationError::Empty)));
    }

    #[test]
    fn test_autoplay_advances_each_period() {
        let mut presentation = deck();
        presentation.set_autoplay(true, ms(1000));

        assert_eq!(presentation.tick(ms(5999)), 0);
        assert_eq!(presentation.tick(ms(6000)), 1);
        assert_eq!(presentation.current(), 1);

        // Two periods observed at once
        assert_eq!(presentation.tick(ms(16000)), 2);
        assert_eq!(presentation.current(), 0);
        assert_eq!(presentation.next_deadline(), Some(ms(21000)));
    }

    #[test]
    fn test_autoplay_off_within_period_never_fires() {
        let mut presentation = deck();
        presentation.set_autoplay(true, ms(0));
        presentation.set_autoplay(false, ms(2000));

        assert_eq!(presentation.tick(ms(60_000)), 0);
        assert_eq!(presentation.current(), 0);
        assert_eq!(presentation.next_deadline(), None);
    }

    #[test]
    fn test_autoplay_restart_is_fresh_period() {
        let mut presentation = deck();
        presentation.toggle_autoplay(ms(0));
        presentation.toggle_autoplay(ms(4000));
        presentation.toggle_autoplay(ms(4500));

        assert_eq!(presentation.tick(ms(5000)), 0);
        assert_eq!(presentation.tick(ms(9500)), 1);
    }

    #[test]
    fn test_escape_stops_autoplay() {
        let mut presentation = deck();
        presentation.set_autoplay(true, ms(0));
        presentation.key_down(&Key::Escape, ms(100));

        assert!(!presentation.is_autoplay());
        assert_eq!(presentation.tick(ms(10_000)), 0);
    }

    #[test]
    fn test_unmount_stops_autoplay() {
        let mut presentation = deck();
        presentation.set_autoplay(true, ms(0));
        presentation.unmount();

        assert_eq!(presentation.next_deadline(), None);
    }

    #[test]
    fn test_view() {
        let mut presentation = deck();
        presentation.previous();
        let view = presentation.view();

        assert_eq!(view.index, 2);
        assert_eq!(view.len, 3);
        assert_eq!(view.slide.title, "Projects");
        assert_eq!(view.direction, Direction::Backward);
    }
}
