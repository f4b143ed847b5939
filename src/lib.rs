//! A headless viewport-intersection tracking engine for scroll-driven UIs.
//!
//! This crate tracks, for a large and dynamically changing set of nodes, when
//! each node's absolute position crosses the boundaries of the visible
//! viewport during scrolling. Native intersection primitives can silently
//! skip fast-moving elements between two samples; `scrollwatch` instead
//! re-classifies every tracked node on each scroll sample and resolves jumps
//! straight across the viewport ("fast-forward") explicitly.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - per-node boundary queries (absolute start/end along the tracked axis)
//! - the viewport's visible range on layout changes
//! - the current scroll position, once per coalesced scroll sample
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod axis;
mod dispatch;
mod engine;
mod key;
mod options;
mod pool;
mod table;
mod types;


pub use axis::{
    HorizontalDirection, HorizontalDispatch, HorizontalTracker, VerticalDirection,
    VerticalDispatch, VerticalTracker,
};
pub use engine::{NodeId, NodeRef, Tracker};
pub use options::{
    BoundsFn, DispatchSet, EventCallback, EventHandler, NodeOptions, ProgressCallback, RemoveHook,
};
pub use pool::IdPool;
pub use table::{CellWidth, ControlTable};
pub use types::{
    BoundaryEvent, Extent, FastForward, PositionClass, ScrollDirection, ScrollState, ViewportState,
};

#[doc(hidden)]
pub use key::SlotKey;
