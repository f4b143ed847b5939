use alloc::sync::Arc;

use crate::types::{BoundaryEvent, Extent, FastForward};

/// A zero-argument boundary-event callback.
pub type EventCallback = Arc<dyn Fn() + Send + Sync>;

/// A continuous in-viewport progress callback.
///
/// The argument is the node's normalized position in the viewport, in
/// [-1, 1]: +1 as the node's leading edge enters at the far boundary, -1 as
/// its trailing edge leaves at the near boundary.
pub type ProgressCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// A boundary query returning a node's current absolute extent along the
/// tracked axis.
pub type BoundsFn = Arc<dyn Fn() -> Extent + Send + Sync>;

/// A hook invoked exactly once when a node is destroyed.
pub type RemoveHook = Arc<dyn Fn() + Send + Sync>;

/// A boundary-event callback, optionally capped to a firing limit.
///
/// A capped handler fires at most `limit` times; once the limit is
/// exhausted the node's event-armed flag is cleared permanently and the
/// handler never fires again.
#[derive(Clone)]
pub struct EventHandler {
    pub(crate) callback: EventCallback,
    pub(crate) remaining: Option<u32>,
}

impl EventHandler {
    pub fn new(callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            callback: Arc::new(callback),
            remaining: None,
        }
    }

    pub fn capped(callback: impl Fn() + Send + Sync + 'static, limit: u32) -> Self {
        Self {
            callback: Arc::new(callback),
            remaining: Some(limit),
        }
    }

    /// Remaining firings, or `None` for an uncapped handler.
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }
}

impl core::fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventHandler")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// The per-node callback set, keyed by axis-agnostic boundary events.
///
/// Axis specializations provide name translation ([`crate::VerticalDispatch`]
/// maps "top" onto the negative side, [`crate::HorizontalDispatch`] maps
/// "left"); the engine itself only ever sees this enum-indexed form.
#[derive(Clone, Default)]
pub struct DispatchSet {
    pub negative_enter: Option<EventHandler>,
    pub negative_exit: Option<EventHandler>,
    pub positive_enter: Option<EventHandler>,
    pub positive_exit: Option<EventHandler>,
    pub progress: Option<ProgressCallback>,
    pub fast_forward: FastForward,
}

impl DispatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_negative_enter(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.negative_enter = Some(EventHandler::new(callback));
        self
    }

    pub fn with_negative_exit(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.negative_exit = Some(EventHandler::new(callback));
        self
    }

    pub fn with_positive_enter(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.positive_enter = Some(EventHandler::new(callback));
        self
    }

    pub fn with_positive_exit(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.positive_exit = Some(EventHandler::new(callback));
        self
    }

    /// Installs a handler for `event`, replacing any existing one.
    pub fn with_handler(mut self, event: BoundaryEvent, handler: EventHandler) -> Self {
        *self.slot_mut(event) = Some(handler);
        self
    }

    pub fn with_progress(mut self, callback: impl Fn(f64) + Send + Sync + 'static) -> Self {
        self.progress = Some(Arc::new(callback));
        self
    }

    pub fn with_fast_forward(mut self, policy: FastForward) -> Self {
        self.fast_forward = policy;
        self
    }

    pub fn handler(&self, event: BoundaryEvent) -> Option<&EventHandler> {
        match event {
            BoundaryEvent::NegativeEnter => self.negative_enter.as_ref(),
            BoundaryEvent::NegativeExit => self.negative_exit.as_ref(),
            BoundaryEvent::PositiveEnter => self.positive_enter.as_ref(),
            BoundaryEvent::PositiveExit => self.positive_exit.as_ref(),
        }
    }

    fn slot_mut(&mut self, event: BoundaryEvent) -> &mut Option<EventHandler> {
        match event {
            BoundaryEvent::NegativeEnter => &mut self.negative_enter,
            BoundaryEvent::NegativeExit => &mut self.negative_exit,
            BoundaryEvent::PositiveEnter => &mut self.positive_enter,
            BoundaryEvent::PositiveExit => &mut self.positive_exit,
        }
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        [Option<EventHandler>; 4],
        Option<ProgressCallback>,
        FastForward,
    ) {
        (
            [
                self.negative_enter,
                self.negative_exit,
                self.positive_enter,
                self.positive_exit,
            ],
            self.progress,
            self.fast_forward,
        )
    }
}

impl core::fmt::Debug for DispatchSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DispatchSet")
            .field("negative_enter", &self.negative_enter)
            .field("negative_exit", &self.negative_exit)
            .field("positive_enter", &self.positive_enter)
            .field("positive_exit", &self.positive_exit)
            .field("has_progress", &self.progress.is_some())
            .field("fast_forward", &self.fast_forward)
            .finish()
    }
}

/// Registration options for [`crate::Tracker::add_node`].
///
/// `reference` is the host's opaque handle for the node: it is the
/// de-duplication key at registration and the removal key afterwards.
pub struct NodeOptions<R = u64> {
    pub reference: R,
    pub bounds: BoundsFn,
    pub dispatch: DispatchSet,
    /// Symmetric padding applied to both sides of the queried extent.
    pub offset: u64,
    pub on_remove: Option<RemoveHook>,
}

impl<R> NodeOptions<R> {
    pub fn new(reference: R, bounds: impl Fn() -> Extent + Send + Sync + 'static) -> Self {
        Self {
            reference,
            bounds: Arc::new(bounds),
            dispatch: DispatchSet::new(),
            offset: 0,
            on_remove: None,
        }
    }

    pub fn with_dispatch(mut self, dispatch: DispatchSet) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_on_remove(mut self, on_remove: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_remove = Some(Arc::new(on_remove));
        self
    }
}

impl<R: Clone> Clone for NodeOptions<R> {
    fn clone(&self) -> Self {
        Self {
            reference: self.reference.clone(),
            bounds: Arc::clone(&self.bounds),
            dispatch: self.dispatch.clone(),
            offset: self.offset,
            on_remove: self.on_remove.clone(),
        }
    }
}

impl<R: core::fmt::Debug> core::fmt::Debug for NodeOptions<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeOptions")
            .field("reference", &self.reference)
            .field("dispatch", &self.dispatch)
            .field("offset", &self.offset)
            .field("has_on_remove", &self.on_remove.is_some())
            .finish_non_exhaustive()
    }
}
