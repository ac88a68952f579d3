//! Browser-style tab strip with exactly one active tab.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabError {
    #[error("no tab with id {0}")]
    UnknownTab(String),
    #[error("cannot close the last tab")]
    LastTab,
    #[error("a tab strip needs at least one tab")]
    Empty,
    #[error("active tab {index} out of range for {len} tabs")]
    ActiveOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, TabError>;

/// Z-index of the active tab.
pub const ACTIVE_Z: i32 = 10;
/// Base z-index of inactive tabs; later tabs stack lower.
pub const INACTIVE_Z_BASE: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Tab {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Ordered tabs and the index of the active one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TabStripData")]
pub struct TabStrip {
    tabs: Vec<Tab>,
    active: usize,
}

/// Unchecked serialized form of a [`TabStrip`].
#[derive(Deserialize)]
struct TabStripData {
    tabs: Vec<Tab>,
    #[serde(default)]
    active: usize,
}

impl TryFrom<TabStripData> for TabStrip {
    type Error = TabError;

    fn try_from(data: TabStripData) -> Result<Self> {
        let mut strip = Self::new(data.tabs)?;
        if data.active >= strip.len() {
            return Err(TabError::ActiveOutOfRange {
                index: data.active,
                len: strip.len(),
            });
        }
        strip.active = data.active;
        Ok(strip)
    }
}

impl Default for TabStrip {
    /// Settings tab plus an empty tab, settings active.
    fn default() -> Self {
        Self {
            tabs: vec![
                Tab::new("tab-1", "Settings").with_icon("⚙"),
                Tab::new("tab-2", "New Tab"),
            ],
            active: 0,
        }
    }
}

impl TabStrip {
    /// Strip over `tabs` with the first one active.
    pub fn new(tabs: Vec<Tab>) -> Result<Self> {
        if tabs.is_empty() {
            return Err(TabError::Empty);
        }
        Ok(Self { tabs, active: 0 })
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Tab {
        &self.tabs[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().id == id
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.tabs
            .iter()
            .position(|tab| tab.id == id)
            .ok_or_else(|| TabError::UnknownTab(id.to_string()))
    }

    pub fn activate(&mut self, id: &str) -> Result<()> {
        self.active = self.index_of(id)?;
        Ok(())
    }

    /// Close a tab. Closing the active tab activates the first remaining one.
    pub fn close(&mut self, id: &str) -> Result<Tab> {
        let index = self.index_of(id)?;
        if self.tabs.len() <= 1 {
            log::warn!("refusing to close last tab {id}");
            return Err(TabError::LastTab);
        }

        let removed = self.tabs.remove(index);
        if index == self.active {
            self.active = 0;
        } else if index < self.active {
            self.active -= 1;
        }
        Ok(removed)
    }

    /// Append a new active tab and return its id.
    pub fn add(&mut self, title: impl Into<String>) -> &str {
        let id = format!("tab-{}", Uuid::new_v4());
        self.tabs.push(Tab::new(id, title));
        self.active = self.tabs.len() - 1;
        &self.tabs[self.active].id
    }

    /// Stacking order of the tab at `index`.
    pub fn z_order(&self, index: usize) -> i32 {
        if index == self.active {
            ACTIVE_Z
        } else {
            INACTIVE_Z_BASE - i32::try_from(index).unwrap_or(i32::MAX - INACTIVE_Z_BASE)
        }
    }
}

/// Which way the resume content slides when the folder tab changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchDirection {
    #[default]
    Next,
    Prev,
}

/// Folder tabs of the resume section.
///
/// Tabs keep a fixed order. Switching records the tab that was left and the
/// direction of travel through that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeTabs {
    order: Vec<String>,
    active: usize,
    previous: Option<usize>,
    direction: SwitchDirection,
}

impl Default for ResumeTabs {
    fn default() -> Self {
        Self {
            order: ["experience", "education", "projects"].map(String::from).to_vec(),
            active: 0,
            previous: None,
            direction: SwitchDirection::Next,
        }
    }
}

impl ResumeTabs {
    /// Tabs in display order; the first one starts active.
    pub fn new<I, S>(order: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let order: Vec<String> = order.into_iter().map(Into::into).collect();
        if order.is_empty() {
            return Err(TabError::Empty);
        }
        Ok(Self {
            order,
            active: 0,
            previous: None,
            direction: SwitchDirection::Next,
        })
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn active(&self) -> &str {
        &self.order[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The tab left by the last switch.
    pub fn previous(&self) -> Option<&str> {
        self.previous.map(|index| self.order[index].as_str())
    }

    pub fn direction(&self) -> SwitchDirection {
        self.direction
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.order.iter().position(|tab| tab == id)
    }

    /// Switch to `id`. Returns false when it is already active.
    pub fn select(&mut self, id: &str) -> Result<bool> {
        let index = self
            .index_of(id)
            .ok_or_else(|| TabError::UnknownTab(id.to_string()))?;
        if index == self.active {
            return Ok(false);
        }

        self.direction = if index > self.active {
            SwitchDirection::Next
        } else {
            SwitchDirection::Prev
        };
        self.previous = Some(self.active);
        self.active = index;
        log::trace!("resume tab {id} ({:?})", self.direction);
        Ok(true)
    }

    /// True for the active tab and every tab after it. Those folders stack
    /// behind the active one; unknown ids are never after it.
    pub fn is_after_active(&self, id: &str) -> bool {
        self.index_of(id).is_some_and(|index| index >= self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> TabStrip {
        TabStrip::new(vec![Tab::new("a", "A"), Tab::new("b", "B"), Tab::new("c", "C")]).unwrap()
    }

    #[test]
    fn test_default_strip() {
        let tabs = TabStrip::default();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs.active().title, "Settings");
        assert!(tabs.active().icon.is_some());
    }

    #[test]
    fn test_activate() {
        let mut tabs = strip();
        tabs.activate("c").unwrap();
        assert_eq!(tabs.active_index(), 2);
        assert!(tabs.is_active("c"));
        assert_eq!(tabs.activate("zzz"), Err(TabError::UnknownTab("zzz".into())));
        assert!(tabs.is_active("c"));
    }

    #[test]
    fn test_close_active_activates_first_remaining() {
        let mut tabs = strip();
        tabs.activate("b").unwrap();

        let closed = tabs.close("b").unwrap();
        assert_eq!(closed.id, "b");
        assert!(tabs.is_active("a"));
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut tabs = strip();
        tabs.activate("c").unwrap();
        tabs.close("a").unwrap();

        assert!(tabs.is_active("c"));
        assert_eq!(tabs.active_index(), 1);
    }

    #[test]
    fn test_last_tab_cannot_close() {
        let mut tabs = TabStrip::new(vec![Tab::new("only", "Only")]).unwrap();
        assert_eq!(tabs.close("only"), Err(TabError::LastTab));
        assert_eq!(tabs.len(), 1);
    }

    #[test]
    fn test_add_makes_active_with_unique_id() {
        let mut tabs = strip();
        let first = tabs.add("New Tab").to_string();
        let second = tabs.add("New Tab").to_string();

        assert_ne!(first, second);
        assert!(first.starts_with("tab-"));
        assert!(tabs.is_active(&second));
        assert_eq!(tabs.len(), 5);
    }

    #[test]
    fn test_z_order() {
        let mut tabs = strip();
        tabs.activate("b").unwrap();

        assert_eq!(tabs.z_order(0), 5);
        assert_eq!(tabs.z_order(1), ACTIVE_Z);
        assert_eq!(tabs.z_order(2), 3);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(TabStrip::new(Vec::new()), Err(TabError::Empty));
    }

    #[test]
    fn test_deserialize_validates() {
        let strip: TabStrip = toml::from_str(
            r#"
            active = 1
            [[tabs]]
            id = "a"
            title = "A"
            [[tabs]]
            id = "b"
            title = "B"
            "#,
        )
        .unwrap();
        assert!(strip.is_active("b"));

        assert!(toml::from_str::<TabStrip>("tabs = []\nactive = 0").is_err());
        let out_of_range = r#"
            active = 2
            [[tabs]]
            id = "a"
            title = "A"
            "#;
        assert!(toml::from_str::<TabStrip>(out_of_range).is_err());
    }

    fn resume() -> ResumeTabs {
        ResumeTabs::new(["experience", "education", "awards"]).unwrap()
    }

    #[test]
    fn test_resume_default() {
        let tabs = ResumeTabs::default();
        assert_eq!(tabs.order().len(), 3);
        assert_eq!(tabs.active(), "experience");
    }

    #[test]
    fn test_resume_starts_on_first_tab() {
        let tabs = resume();
        assert_eq!(tabs.active(), "experience");
        assert_eq!(tabs.previous(), None);
        assert_eq!(tabs.direction(), SwitchDirection::Next);
        assert!(ResumeTabs::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_resume_direction_follows_order() {
        let mut tabs = resume();

        assert_eq!(tabs.select("awards"), Ok(true));
        assert_eq!(tabs.direction(), SwitchDirection::Next);
        assert_eq!(tabs.previous(), Some("experience"));

        assert_eq!(tabs.select("education"), Ok(true));
        assert_eq!(tabs.direction(), SwitchDirection::Prev);
        assert_eq!(tabs.previous(), Some("awards"));
        assert_eq!(tabs.active_index(), 1);
    }

    #[test]
    fn test_resume_same_tab_is_noop() {
        let mut tabs = resume();
        tabs.select("education").unwrap();
        tabs.select("awards").unwrap();

        assert_eq!(tabs.select("awards"), Ok(false));
        assert_eq!(tabs.previous(), Some("education"));
        assert_eq!(tabs.direction(), SwitchDirection::Next);
    }

    #[test]
    fn test_resume_unknown_tab() {
        let mut tabs = resume();
        assert_eq!(tabs.select("hobbies"), Err(TabError::UnknownTab("hobbies".into())));
        assert_eq!(tabs.active(), "experience");
    }

    #[test]
    fn test_resume_tabs_after_active() {
        let mut tabs = resume();
        tabs.select("education").unwrap();

        assert!(!tabs.is_after_active("experience"));
        assert!(tabs.is_after_active("education"));
        assert!(tabs.is_after_active("awards"));
        assert!(!tabs.is_after_active("hobbies"));
    }
}
