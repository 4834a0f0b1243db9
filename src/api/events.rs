//! AR session events and per-session state
//!
//! The host AR runtime reports plane tracking, frame updates, failures and
//! location fixes. Events are delivered to registered handlers; none of the
//! route geometry depends on them.

use crate::core::GeoPoint;
use std::collections::BTreeSet;

/// Events produced by the host AR runtime and location source
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// New plane anchors were detected
    PlaneAdded { anchor_ids: Vec<String> },
    /// Transform or extent of tracked planes changed
    PlaneUpdated { anchor_ids: Vec<String> },
    /// Plane anchors are no longer tracked
    PlaneRemoved { anchor_ids: Vec<String> },
    /// A camera frame was processed
    FrameUpdated { timestamp_ms: u64 },
    /// The session stopped with an error
    SessionFailed { reason: String },
    /// Tracking was suspended, e.g. the app went to the background
    SessionInterrupted,
    InterruptionEnded,
    /// New user location fix
    LocationUpdated { location: GeoPoint },
}

/// Handler for session events.
///
/// Every method defaults to a no-op so handlers implement only what they
/// need. `handle` dispatches an event to the matching method.
pub trait SessionEventHandler: Send {
    fn on_plane_added(&mut self, _anchor_ids: &[String], _context: &SessionContext) {}

    fn on_plane_updated(&mut self, _anchor_ids: &[String], _context: &SessionContext) {}

    fn on_plane_removed(&mut self, _anchor_ids: &[String], _context: &SessionContext) {}

    fn on_frame_updated(&mut self, _timestamp_ms: u64, _context: &SessionContext) {}

    fn on_session_failed(&mut self, _reason: &str, _context: &SessionContext) {}

    fn on_session_interrupted(&mut self, _context: &SessionContext) {}

    fn on_interruption_ended(&mut self, _context: &SessionContext) {}

    fn on_location_updated(&mut self, _location: &GeoPoint, _context: &SessionContext) {}

    /// Called once per session, on the first location fix
    fn on_first_fix(&mut self, _location: &GeoPoint, _context: &SessionContext) {}

    fn handle(&mut self, event: &SessionEvent, context: &SessionContext) {
        match event {
            SessionEvent::PlaneAdded { anchor_ids } => self.on_plane_added(anchor_ids, context),
            SessionEvent::PlaneUpdated { anchor_ids } => self.on_plane_updated(anchor_ids, context),
            SessionEvent::PlaneRemoved { anchor_ids } => self.on_plane_removed(anchor_ids, context),
            SessionEvent::FrameUpdated { timestamp_ms } => self.on_frame_updated(*timestamp_ms, context),
            SessionEvent::SessionFailed { reason } => self.on_session_failed(reason, context),
            SessionEvent::SessionInterrupted => self.on_session_interrupted(context),
            SessionEvent::InterruptionEnded => self.on_interruption_ended(context),
            SessionEvent::LocationUpdated { location } => self.on_location_updated(location, context),
        }
    }
}

/// State owned by one overlay session and passed to whoever needs it
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    last_location: Option<GeoPoint>,
    first_fix_taken: bool,
    interrupted: bool,
    failure: Option<String>,
    last_frame_ms: Option<u64>,
    tracked_planes: BTreeSet<String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_location(&self) -> Option<GeoPoint> {
        self.last_location
    }

    /// True exactly once per context, for the first caller
    pub fn take_first_fix(&mut self) -> bool {
        if self.first_fix_taken {
            false
        } else {
            self.first_fix_taken = true;
            true
        }
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn last_frame_ms(&self) -> Option<u64> {
        self.last_frame_ms
    }

    pub fn tracked_planes(&self) -> impl Iterator<Item = &str> {
        self.tracked_planes.iter().map(String::as_str)
    }

    pub fn tracked_plane_count(&self) -> usize {
        self.tracked_planes.len()
    }

    /// Fold an event into the context
    pub fn apply(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::PlaneAdded { anchor_ids } | SessionEvent::PlaneUpdated { anchor_ids } => {
                self.tracked_planes.extend(anchor_ids.iter().cloned());
            }
            SessionEvent::PlaneRemoved { anchor_ids } => {
                for id in anchor_ids {
                    self.tracked_planes.remove(id);
                }
            }
            SessionEvent::FrameUpdated { timestamp_ms } => self.last_frame_ms = Some(*timestamp_ms),
            SessionEvent::SessionFailed { reason } => self.failure = Some(reason.clone()),
            SessionEvent::SessionInterrupted => self.interrupted = true,
            SessionEvent::InterruptionEnded => self.interrupted = false,
            SessionEvent::LocationUpdated { location } => self.last_location = Some(*location),
        }
    }
}
