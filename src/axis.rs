//! Axis specializations: vertical ("top"/"bottom") and horizontal
//! ("left"/"right") renamings of the axis-agnostic engine. Only name
//! translation lives here, no extra logic.

use crate::engine::{NodeId, NodeRef, Tracker};
use crate::key::SlotKey;
use crate::options::{DispatchSet, EventHandler, NodeOptions};
use crate::types::{BoundaryEvent, FastForward, PositionClass, ScrollDirection, ViewportState};

/// Scroll direction along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalDirection {
    TowardTop,
    TowardBottom,
}

impl From<ScrollDirection> for VerticalDirection {
    fn from(direction: ScrollDirection) -> Self {
        match direction {
            ScrollDirection::TowardNegative => Self::TowardTop,
            ScrollDirection::TowardPositive => Self::TowardBottom,
        }
    }
}

/// Scroll direction along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalDirection {
    TowardLeft,
    TowardRight,
}

impl From<ScrollDirection> for HorizontalDirection {
    fn from(direction: ScrollDirection) -> Self {
        match direction {
            ScrollDirection::TowardNegative => Self::TowardLeft,
            ScrollDirection::TowardPositive => Self::TowardRight,
        }
    }
}

/// Builds a [`DispatchSet`] with vertical-axis event names: "top" is the
/// negative side, "bottom" the positive one.
#[derive(Clone, Debug, Default)]
pub struct VerticalDispatch {
    inner: DispatchSet,
}

impl VerticalDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_enter(self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.handler(BoundaryEvent::NegativeEnter, EventHandler::new(callback))
    }

    pub fn with_top_enter_capped(
        self,
        callback: impl Fn() + Send + Sync + 'static,
        limit: u32,
    ) -> Self {
        self.handler(
            BoundaryEvent::NegativeEnter,
            EventHandler::capped(callback, limit),
        )
    }

    pub fn with_top_exit(self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.handler(BoundaryEvent::NegativeExit, EventHandler::new(callback))
    }

    pub fn with_top_exit_capped(
        self,
        callback: impl Fn() + Send + Sync + 'static,
        limit: u32,
    ) -> Self {
        self.handler(
            BoundaryEvent::NegativeExit,
            EventHandler::capped(callback, limit),
        )
    }

    pub fn with_bottom_enter(self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.handler(BoundaryEvent::PositiveEnter, EventHandler::new(callback))
    }

    pub fn with_bottom_enter_capped(
        self,
        callback: impl Fn() + Send + Sync + 'static,
        limit: u32,
    ) -> Self {
        self.handler(
            BoundaryEvent::PositiveEnter,
            EventHandler::capped(callback, limit),
        )
    }

    pub fn with_bottom_exit(self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.handler(BoundaryEvent::PositiveExit, EventHandler::new(callback))
    }

    pub fn with_bottom_exit_capped(
        self,
        callback: impl Fn() + Send + Sync + 'static,
        limit: u32,
    ) -> Self {
        self.handler(
            BoundaryEvent::PositiveExit,
            EventHandler::capped(callback, limit),
        )
    }

    pub fn with_progress(mut self, callback: impl Fn(f64) + Send + Sync + 'static) -> Self {
        self.inner = self.inner.with_progress(callback);
        self
    }

    pub fn with_fast_forward(mut self, policy: FastForward) -> Self {
        self.inner = self.inner.with_fast_forward(policy);
        self
    }

    fn handler(mut self, event: BoundaryEvent, handler: EventHandler) -> Self {
        self.inner = self.inner.with_handler(event, handler);
        self
    }
}

impl From<VerticalDispatch> for DispatchSet {
    fn from(dispatch: VerticalDispatch) -> Self {
        dispatch.inner
    }
}

/// Builds a [`DispatchSet`] with horizontal-axis event names: "left" is the
/// negative side, "right" the positive one.
#[derive(Clone, Debug, Default)]
pub struct HorizontalDispatch {
    inner: DispatchSet,
}

impl HorizontalDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_left_enter(self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.handler(BoundaryEvent::NegativeEnter, EventHandler::new(callback))
    }

    pub fn with_left_enter_capped(
        self,
        callback: impl Fn() + Send + Sync + 'static,
        limit: u32,
    ) -> Self {
        self.handler(
            BoundaryEvent::NegativeEnter,
            EventHandler::capped(callback, limit),
        )
    }

    pub fn with_left_exit(self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.handler(BoundaryEvent::NegativeExit, EventHandler::new(callback))
    }

    pub fn with_left_exit_capped(
        self,
        callback: impl Fn() + Send + Sync + 'static,
        limit: u32,
    ) -> Self {
        self.handler(
            BoundaryEvent::NegativeExit,
            EventHandler::capped(callback, limit),
        )
    }

    pub fn with_right_enter(self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.handler(BoundaryEvent::PositiveEnter, EventHandler::new(callback))
    }

    pub fn with_right_enter_capped(
        self,
        callback: impl Fn() + Send + Sync + 'static,
        limit: u32,
    ) -> Self {
        self.handler(
            BoundaryEvent::PositiveEnter,
            EventHandler::capped(callback, limit),
        )
    }

    pub fn with_right_exit(self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.handler(BoundaryEvent::PositiveExit, EventHandler::new(callback))
    }

    pub fn with_right_exit_capped(
        self,
        callback: impl Fn() + Send + Sync + 'static,
        limit: u32,
    ) -> Self {
        self.handler(
            BoundaryEvent::PositiveExit,
            EventHandler::capped(callback, limit),
        )
    }

    pub fn with_progress(mut self, callback: impl Fn(f64) + Send + Sync + 'static) -> Self {
        self.inner = self.inner.with_progress(callback);
        self
    }

    pub fn with_fast_forward(mut self, policy: FastForward) -> Self {
        self.inner = self.inner.with_fast_forward(policy);
        self
    }

    fn handler(mut self, event: BoundaryEvent, handler: EventHandler) -> Self {
        self.inner = self.inner.with_handler(event, handler);
        self
    }
}

impl From<HorizontalDispatch> for DispatchSet {
    fn from(dispatch: HorizontalDispatch) -> Self {
        dispatch.inner
    }
}

/// A vertical-axis tracker: "top" maps onto the negative side, "bottom" onto
/// the positive one, and the scroll direction reads as toward top/bottom.
pub struct VerticalTracker<R = NodeRef> {
    inner: Tracker<R>,
}

impl<R: SlotKey + core::fmt::Debug> core::fmt::Debug for VerticalTracker<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("VerticalTracker").field(&self.inner).finish()
    }
}

impl<R: SlotKey> Default for VerticalTracker<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SlotKey> VerticalTracker<R> {
    pub fn new() -> Self {
        Self {
            inner: Tracker::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Tracker::with_capacity(capacity),
        }
    }

    pub fn add_node(&mut self, options: NodeOptions<R>) -> Option<NodeId> {
        self.inner.add_node(options)
    }

    pub fn remove_node(&mut self, reference: &R) -> bool {
        self.inner.remove_node(reference)
    }

    pub fn update_viewport_layout(&mut self, range_start: u64, range_end: u64) {
        self.inner.update_viewport_layout(range_start, range_end);
    }

    pub fn update_positions(&mut self, total_extent: u64) {
        self.inner.update_positions(total_extent);
    }

    pub fn handle_scroll(&mut self, scroll_value: u64) {
        self.inner.handle_scroll(scroll_value);
    }

    pub fn direction(&self) -> Option<VerticalDirection> {
        self.inner.direction().map(VerticalDirection::from)
    }

    pub fn position_class(&self, reference: &R) -> Option<PositionClass> {
        self.inner.position_class(reference)
    }

    pub fn viewport(&self) -> Option<ViewportState> {
        self.inner.viewport()
    }

    pub fn tracker(&self) -> &Tracker<R> {
        &self.inner
    }

    pub fn tracker_mut(&mut self) -> &mut Tracker<R> {
        &mut self.inner
    }

    pub fn into_tracker(self) -> Tracker<R> {
        self.inner
    }
}

/// A horizontal-axis tracker: "left" maps onto the negative side, "right"
/// onto the positive one, and the scroll direction reads as toward
/// left/right.
pub struct HorizontalTracker<R = NodeRef> {
    inner: Tracker<R>,
}

impl<R: SlotKey + core::fmt::Debug> core::fmt::Debug for HorizontalTracker<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("HorizontalTracker")
            .field(&self.inner)
            .finish()
    }
}

impl<R: SlotKey> Default for HorizontalTracker<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SlotKey> HorizontalTracker<R> {
    pub fn new() -> Self {
        Self {
            inner: Tracker::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Tracker::with_capacity(capacity),
        }
    }

    pub fn add_node(&mut self, options: NodeOptions<R>) -> Option<NodeId> {
        self.inner.add_node(options)
    }

    pub fn remove_node(&mut self, reference: &R) -> bool {
        self.inner.remove_node(reference)
    }

    pub fn update_viewport_layout(&mut self, range_start: u64, range_end: u64) {
        self.inner.update_viewport_layout(range_start, range_end);
    }

    pub fn update_positions(&mut self, total_extent: u64) {
        self.inner.update_positions(total_extent);
    }

    pub fn handle_scroll(&mut self, scroll_value: u64) {
        self.inner.handle_scroll(scroll_value);
    }

    pub fn direction(&self) -> Option<HorizontalDirection> {
        self.inner.direction().map(HorizontalDirection::from)
    }

    pub fn position_class(&self, reference: &R) -> Option<PositionClass> {
        self.inner.position_class(reference)
    }

    pub fn viewport(&self) -> Option<ViewportState> {
        self.inner.viewport()
    }

    pub fn tracker(&self) -> &Tracker<R> {
        &self.inner
    }

    pub fn tracker_mut(&mut self) -> &mut Tracker<R> {
        &mut self.inner
    }

    pub fn into_tracker(self) -> Tracker<R> {
        self.inner
    }
}
