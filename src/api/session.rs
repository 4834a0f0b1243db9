//! Overlay session: owns the route, the configuration and the published scene
//!
//! Every change to the route or the configuration triggers a full rebuild.
//! The new scene is published by swapping an `Arc`, so readers on other
//! threads either see the previous snapshot or the new one, never a mix.

use crate::api::events::{SessionContext, SessionEvent, SessionEventHandler};
use crate::api::scene::{SceneBuilder, SceneSnapshot};
use crate::api::types::OverlayResult;
use crate::core::{GeoPoint, RoutePlan};
use crate::processing::route_plan_from_response;
use crate::utils::config::{ConfigurationManager, OverlayConfig};
use crate::validation::CoordinateValidator;
use log::{debug, info, warn};
use std::sync::{Arc, RwLock};

/// Handler registration handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerHandle(u32);

impl HandlerHandle {
    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Read side of the published scene, cheap to clone across threads
#[derive(Debug, Clone, Default)]
pub struct SnapshotReader {
    current: Arc<RwLock<Arc<SceneSnapshot>>>,
}

impl SnapshotReader {
    /// The latest published snapshot
    pub fn load(&self) -> Arc<SceneSnapshot> {
        let guard = self.current.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    fn publish(&self, snapshot: SceneSnapshot) -> Arc<SceneSnapshot> {
        let snapshot = Arc::new(snapshot);
        let mut guard = self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::clone(&snapshot);
        snapshot
    }
}

/// One AR overlay session
pub struct OverlaySession {
    builder: SceneBuilder,
    context: SessionContext,
    route: Option<RoutePlan>,
    published: SnapshotReader,
    handlers: Vec<(HandlerHandle, Box<dyn SessionEventHandler>)>,
    handler_counter: u32,
}

impl OverlaySession {
    pub fn new(config: OverlayConfig) -> OverlayResult<Self> {
        let validation = ConfigurationManager::validate_config(&config);
        if let Some(error) = validation.errors.into_iter().next() {
            return Err(error.into());
        }

        Ok(Self {
            builder: SceneBuilder::new(config),
            context: SessionContext::new(),
            route: None,
            published: SnapshotReader::default(),
            handlers: Vec::new(),
            handler_counter: 0,
        })
    }

    pub fn config(&self) -> &OverlayConfig {
        self.builder.config()
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn route(&self) -> Option<&RoutePlan> {
        self.route.as_ref()
    }

    /// Current scene
    pub fn snapshot(&self) -> Arc<SceneSnapshot> {
        self.published.load()
    }

    /// Handle for a renderer that reads scenes from another thread
    pub fn reader(&self) -> SnapshotReader {
        self.published.clone()
    }

    /// Replace the route and rebuild the scene.
    ///
    /// Invalid coordinates are rejected and leave the current scene in
    /// place. A route without a reference point is accepted and publishes
    /// an empty scene.
    pub fn set_route(&mut self, plan: RoutePlan) -> OverlayResult<Arc<SceneSnapshot>> {
        let warnings = CoordinateValidator::validate_plan(&plan).into_result()?;
        for warning in warnings {
            warn!("{}", warning);
        }

        info!("route set: {} sections, {} points", plan.sections.len(), plan.point_count());
        self.route = Some(plan);
        Ok(self.rebuild())
    }

    /// Build the route from a directions response ending at `destination`.
    /// The last known location leads the route when the configuration asks
    /// for it.
    pub fn set_route_from_directions(&mut self, json: &str, destination: GeoPoint) -> OverlayResult<Arc<SceneSnapshot>> {
        let origin = if self.config().prepend_origin {
            self.context.last_location()
        } else {
            None
        };
        if origin.is_none() && self.config().prepend_origin {
            debug!("no location fix yet; route starts at the first decoded point");
        }

        let plan = route_plan_from_response(json, origin, destination)?;
        self.set_route(plan)
    }

    /// Drop the route and publish an empty scene
    pub fn clear_route(&mut self) -> Arc<SceneSnapshot> {
        self.route = None;
        self.rebuild()
    }

    /// Apply a new configuration and rebuild the scene
    pub fn update_config(&mut self, config: OverlayConfig) -> OverlayResult<Arc<SceneSnapshot>> {
        let validation = ConfigurationManager::validate_config(&config);
        if let Some(error) = validation.errors.into_iter().next() {
            return Err(error.into());
        }

        self.builder = SceneBuilder::new(config);
        Ok(self.rebuild())
    }

    pub fn register_handler(&mut self, handler: Box<dyn SessionEventHandler>) -> HandlerHandle {
        self.handler_counter += 1;
        let handle = HandlerHandle(self.handler_counter);
        self.handlers.push((handle, handler));
        handle
    }

    /// Returns false when the handle is unknown
    pub fn unregister_handler(&mut self, handle: HandlerHandle) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _)| *h != handle);
        self.handlers.len() != before
    }

    /// Update the session context, then notify handlers in registration order
    pub fn dispatch(&mut self, event: SessionEvent) {
        self.context.apply(&event);

        match &event {
            SessionEvent::SessionFailed { reason } => warn!("AR session failed: {}", reason),
            SessionEvent::SessionInterrupted => info!("AR session interrupted"),
            SessionEvent::InterruptionEnded => info!("AR session interruption ended"),
            SessionEvent::PlaneAdded { anchor_ids } => debug!("{} planes detected", anchor_ids.len()),
            _ => {}
        }

        let first_fix = match &event {
            SessionEvent::LocationUpdated { location } if self.context.take_first_fix() => Some(*location),
            _ => None,
        };

        for (_, handler) in self.handlers.iter_mut() {
            handler.handle(&event, &self.context);
            if let Some(location) = &first_fix {
                handler.on_first_fix(location, &self.context);
            }
        }
    }

    fn rebuild(&mut self) -> Arc<SceneSnapshot> {
        let snapshot = match &self.route {
            Some(plan) => self.builder.build(plan),
            None => SceneSnapshot::default(),
        };
        self.published.publish(snapshot)
    }
}
