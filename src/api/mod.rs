//! Overlay API for host applications
//!
//! This module turns route plans into renderable scenes and connects the
//! overlay to the AR session's event stream. It includes scene composition,
//! event handling, snapshot publication and output formatting.

pub mod types;
pub mod scene;
pub mod events;
pub mod session;
pub mod formatting;

pub use types::{OutputFormat, OverlayError, OverlayResult};
pub use scene::{Primitive, SceneBuilder, SceneSnapshot};
pub use events::{SessionContext, SessionEvent, SessionEventHandler};
pub use session::{HandlerHandle, OverlaySession, SnapshotReader};
pub use formatting::{formatter_for, JsonFormatter, SceneFormatter, TextFormatter};
