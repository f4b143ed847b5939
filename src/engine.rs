use alloc::vec::Vec;

use crate::dispatch::classify;
use crate::key::{KeyMap, SlotKey};
use crate::options::{BoundsFn, EventHandler, NodeOptions, ProgressCallback, RemoveHook};
use crate::pool::IdPool;
use crate::table::{CellWidth, ControlTable};
use crate::types::{PositionClass, ScrollDirection, ScrollState, ViewportState};

/// Internal dense node id. Stable for a node's lifetime and reused after
/// removal; not the node's physical table slot, which may move.
pub type NodeId = u32;

/// Default external reference type for hosts that key nodes by plain ids.
pub type NodeRef = u64;

// Control-table row layout.
pub(crate) const F_ID: usize = 0;
pub(crate) const F_START: usize = 1;
pub(crate) const F_END: usize = 2;
pub(crate) const F_LAST_CLASS: usize = 3;
pub(crate) const F_IN_VIEWPORT: usize = 4;
pub(crate) const F_FAST_FORWARD: usize = 5;
pub(crate) const F_NEGATIVE_ENTER: usize = 6;
pub(crate) const F_NEGATIVE_EXIT: usize = 7;
pub(crate) const F_POSITIVE_ENTER: usize = 8;
pub(crate) const F_POSITIVE_EXIT: usize = 9;
pub(crate) const F_PROGRESS: usize = 10;
pub(crate) const STRIDE: usize = 11;

pub(crate) struct NodeEntry<R> {
    pub(crate) reference: R,
    pub(crate) bounds: BoundsFn,
    pub(crate) offset: u64,
    pub(crate) handlers: [Option<EventHandler>; 4],
    pub(crate) progress: Option<ProgressCallback>,
    pub(crate) on_remove: Option<RemoveHook>,
}

/// A viewport-intersection tracking engine for one scroll axis.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; nodes are opaque references plus a
///   boundary-query function.
/// - Your adapter drives it: `update_viewport_layout` on layout changes and
///   `handle_scroll` once per coalesced scroll sample.
/// - All callbacks fire synchronously inside `handle_scroll`.
///
/// For axis-named event registration ("top-enter", "left-exit", ...) see
/// [`crate::VerticalTracker`] and [`crate::HorizontalTracker`].
pub struct Tracker<R = NodeRef> {
    pub(crate) table: ControlTable<NodeId>,
    ids: IdPool,
    refs: KeyMap<R, NodeId>,
    pub(crate) entries: Vec<Option<NodeEntry<R>>>,
    pub(crate) viewport: Option<ViewportState>,
    pub(crate) last_scroll: u64,
    pub(crate) direction: Option<ScrollDirection>,
    pub(crate) pending_removals: Vec<NodeId>,
}

impl<R: SlotKey> Default for Tracker<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SlotKey> Tracker<R> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a tracker sized for roughly `capacity` simultaneous nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: ControlTable::new(STRIDE, capacity),
            ids: IdPool::with_capacity(capacity as u32),
            refs: KeyMap::new(),
            entries: Vec::new(),
            viewport: None,
            last_scroll: 0,
            direction: None,
            pending_removals: Vec::new(),
        }
    }

    /// Registers a node and returns its internal id, or `None` if
    /// `options.reference` is already registered (logged, no state change).
    ///
    /// The boundary query runs immediately; if the viewport layout is
    /// already known the node is classified against it at the current
    /// scroll position, otherwise it stays `NotReady` until the first
    /// subsequent scroll sample. Registration itself never fires events.
    pub fn add_node(&mut self, options: NodeOptions<R>) -> Option<NodeId> {
        if self.refs.contains_key(&options.reference) {
            swwarn!("add_node: reference already registered");
            return None;
        }

        let id = self.ids.get();
        self.ids.consume(id);

        let NodeOptions {
            reference,
            bounds,
            dispatch,
            offset,
            on_remove,
        } = options;
        let (handlers, progress, fast_forward) = dispatch.into_parts();

        let extent = bounds().padded(offset);
        let class = match self.viewport {
            Some(vp) => classify(
                extent.start,
                extent.end,
                self.last_scroll,
                self.last_scroll.saturating_add(vp.size()),
            ),
            None => PositionClass::NotReady,
        };

        let armed = |h: &Option<EventHandler>| -> u64 {
            match h {
                Some(handler) => (handler.remaining != Some(0)) as u64,
                None => 0,
            }
        };
        let mut fields = [0u64; STRIDE];
        fields[F_ID] = id as u64;
        fields[F_START] = extent.start;
        fields[F_END] = extent.end;
        fields[F_LAST_CLASS] = class.as_cell();
        fields[F_IN_VIEWPORT] = (class == PositionClass::InViewport) as u64;
        fields[F_FAST_FORWARD] = fast_forward.as_cell();
        fields[F_NEGATIVE_ENTER] = armed(&handlers[0]);
        fields[F_NEGATIVE_EXIT] = armed(&handlers[1]);
        fields[F_POSITIVE_ENTER] = armed(&handlers[2]);
        fields[F_POSITIVE_EXIT] = armed(&handlers[3]);
        fields[F_PROGRESS] = progress.is_some() as u64;
        self.table.add(id, &fields);

        if self.entries.len() <= id as usize {
            self.entries.resize_with(id as usize + 1, || None);
        }
        self.entries[id as usize] = Some(NodeEntry {
            reference: reference.clone(),
            bounds,
            offset,
            handlers,
            progress,
            on_remove,
        });
        self.refs.insert(reference, id);

        swdebug!(id, nodes = self.table.len(), "add_node");
        Some(id)
    }

    /// Unregisters a node by its external reference.
    ///
    /// Returns `false` (logged, no-op) if the reference is not tracked.
    /// The node's removal hook, if any, fires exactly once.
    pub fn remove_node(&mut self, reference: &R) -> bool {
        let Some(&id) = self.refs.get(reference) else {
            swwarn!("remove_node: reference not registered");
            return false;
        };
        self.remove_by_id(id);
        true
    }

    pub(crate) fn remove_by_id(&mut self, id: NodeId) {
        let Some(entry) = self.entries.get_mut(id as usize).and_then(Option::take) else {
            swwarn!(id, "remove_by_id: id not registered");
            return;
        };
        self.table.remove(&id);
        self.refs.remove(&entry.reference);
        self.ids.release(id);
        swdebug!(id, nodes = self.table.len(), "remove_node");
        if let Some(hook) = entry.on_remove {
            hook();
        }
    }

    /// Updates the viewport's authoritative visible range.
    ///
    /// This does not reclassify nodes by itself; classification is driven by
    /// the next `handle_scroll` sample (and consulted by `add_node`).
    pub fn update_viewport_layout(&mut self, range_start: u64, range_end: u64) {
        swdebug!(range_start, range_end, "update_viewport_layout");
        self.viewport = Some(ViewportState {
            range_start,
            range_end,
        });
    }

    /// Widens the control table's backing buffer so positions up to
    /// `total_extent` stay representable.
    ///
    /// Call this when the page's total tracked extent outgrows the current
    /// element width. Values already clipped by a narrower buffer are not
    /// re-derived here; refresh node bounds afterwards if needed.
    pub fn update_positions(&mut self, total_extent: u64) {
        let width = CellWidth::for_max(total_extent);
        if width > self.table.width() {
            swdebug!(total_extent, "update_positions: widening table");
            self.table.widen_to(width);
        }
    }

    /// Re-runs one node's boundary query and rewrites its stored extent.
    ///
    /// Returns `false` (logged, no-op) if the reference is not tracked. The
    /// node's class is untouched; the next scroll sample reclassifies.
    pub fn refresh_bounds(&mut self, reference: &R) -> bool {
        let Some(&id) = self.refs.get(reference) else {
            swwarn!("refresh_bounds: reference not registered");
            return false;
        };
        let Some(entry) = self.entries.get(id as usize).and_then(Option::as_ref) else {
            return false;
        };
        let extent = (entry.bounds)().padded(entry.offset);
        self.table.write(&id, F_START, extent.start);
        self.table.write(&id, F_END, extent.end);
        true
    }

    /// Re-runs every node's boundary query. See [`Self::refresh_bounds`].
    pub fn refresh_all_bounds(&mut self) {
        for slot in 0..self.table.len() {
            let Some(&id) = self.table.key_at(slot) else {
                continue;
            };
            let Some(entry) = self.entries.get(id as usize).and_then(Option::as_ref) else {
                continue;
            };
            let extent = (entry.bounds)().padded(entry.offset);
            self.table.write_at(slot, F_START, extent.start);
            self.table.write_at(slot, F_END, extent.end);
        }
    }

    /// Scroll direction as of the last sample, `None` before the first
    /// moving sample.
    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    pub fn scroll_offset(&self) -> u64 {
        self.last_scroll
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.last_scroll,
            direction: self.direction,
        }
    }

    /// The viewport's visible range, `None` before the first layout update.
    pub fn viewport(&self) -> Option<ViewportState> {
        self.viewport
    }

    pub fn viewport_size(&self) -> u64 {
        self.viewport.map(|vp| vp.size()).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn contains(&self, reference: &R) -> bool {
        self.refs.contains_key(reference)
    }

    pub fn node_id(&self, reference: &R) -> Option<NodeId> {
        self.refs.get(reference).copied()
    }

    /// The node's classification as of the last evaluation.
    pub fn position_class(&self, reference: &R) -> Option<PositionClass> {
        let id = self.node_id(reference)?;
        self.table
            .read(&id, F_LAST_CLASS)
            .map(PositionClass::from_cell)
    }

    pub fn in_viewport(&self, reference: &R) -> Option<bool> {
        let id = self.node_id(reference)?;
        self.table.read(&id, F_IN_VIEWPORT).map(|v| v != 0)
    }

    /// Element width of the control table's backing buffer.
    pub fn cell_width(&self) -> CellWidth {
        self.table.width()
    }
}

impl<R: SlotKey + core::fmt::Debug> core::fmt::Debug for Tracker<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracker")
            .field("nodes", &self.table.len())
            .field("viewport", &self.viewport)
            .field("last_scroll", &self.last_scroll)
            .field("direction", &self.direction)
            .field("cell_width", &self.table.width())
            .finish_non_exhaustive()
    }
}
