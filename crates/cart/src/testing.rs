//! Recording collaborator doubles.
//!
//! Each double is a cheap handle over shared state: clone it, hand one copy
//! to the code under test and keep the other to inspect what was recorded.

use std::cell::RefCell;
use std::rc::Rc;

use tandoor_core::NotificationLevel;
use url::Url;

use crate::cart::CartSnapshot;
use crate::link::LinkOpener;
use crate::notify::{CartRenderer, NotificationSink};

/// A notification as received by a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    #[must_use]
    pub fn new(message: &str, level: NotificationLevel) -> Self {
        Self {
            message: message.to_owned(),
            level,
        }
    }
}

/// Notification sink that remembers every message.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.log.borrow().clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.log.borrow().last().cloned()
    }

    /// Notifications at `level`, oldest first.
    #[must_use]
    pub fn at_level(&self, level: NotificationLevel) -> Vec<Notification> {
        self.log
            .borrow()
            .iter()
            .filter(|n| n.level == level)
            .cloned()
            .collect()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, message: &str, level: NotificationLevel) {
        self.log.borrow_mut().push(Notification::new(message, level));
    }
}

/// Renderer that keeps every snapshot it was asked to draw.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    frames: Rc<RefCell<Vec<CartSnapshot>>>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of redraws so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.frames.borrow().len()
    }

    /// The most recent snapshot drawn.
    #[must_use]
    pub fn last(&self) -> Option<CartSnapshot> {
        self.frames.borrow().last().cloned()
    }
}

impl CartRenderer for RecordingRenderer {
    fn render(&self, snapshot: &CartSnapshot) {
        self.frames.borrow_mut().push(snapshot.clone());
    }
}

/// Link opener that records URLs instead of navigating.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Rc<RefCell<Vec<Url>>>,
}

impl RecordingOpener {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, oldest first.
    #[must_use]
    pub fn opened(&self) -> Vec<Url> {
        self.opened.borrow().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &Url) {
        self.opened.borrow_mut().push(url.clone());
    }
}
