//! Scroll-sample evaluation: classification, transition dispatch, and the
//! continuous in-viewport progress signal.

use alloc::sync::Arc;
use core::cmp;

use crate::engine::{
    F_END, F_FAST_FORWARD, F_IN_VIEWPORT, F_LAST_CLASS, F_NEGATIVE_ENTER, F_PROGRESS, F_START,
    NodeId, Tracker,
};
use crate::key::SlotKey;
use crate::types::{BoundaryEvent, FastForward, PositionClass, ScrollDirection};

/// Classifies a node extent against the visible window `[view_start,
/// view_end]`. Both boundaries are inclusive: a node whose trailing edge
/// sits exactly at `view_start` is still in the viewport.
pub(crate) fn classify(start: u64, end: u64, view_start: u64, view_end: u64) -> PositionClass {
    if end < view_start {
        PositionClass::InNegativeArea
    } else if start > view_end {
        PositionClass::InPositiveArea
    } else {
        PositionClass::InViewport
    }
}

/// Normalized in-viewport position: +1 as the leading edge enters at the far
/// boundary, -1 as the trailing edge leaves at the near boundary
/// (`end == scroll`).
fn normalized_position(start: u64, end: u64, scroll: u64, view_size: u64) -> f64 {
    let span = view_size.saturating_add(end.saturating_sub(start));
    if span == 0 {
        return -1.0;
    }
    let p = (2.0 * end.saturating_sub(scroll) as f64) / span as f64 - 1.0;
    p.clamp(-1.0, 1.0)
}

impl<R: SlotKey> Tracker<R> {
    /// Evaluates one scroll sample.
    ///
    /// Infers the scroll direction, reclassifies every active node against
    /// `[scroll_value, scroll_value + viewport_size]`, fires transition
    /// events (resolving viewport-skipping jumps per each node's
    /// [`FastForward`] policy), updates the in-viewport cache, and invokes
    /// continuous-progress callbacks for nodes currently in the viewport.
    ///
    /// Callbacks run synchronously, in table-scan order. Nodes whose last
    /// armed capped handler exhausts during the scan are removed after the
    /// scan completes (their removal hooks fire then).
    ///
    /// Before the first `update_viewport_layout`, only the sample and
    /// direction are recorded.
    pub fn handle_scroll(&mut self, scroll_value: u64) {
        self.direction = match scroll_value.cmp(&self.last_scroll) {
            cmp::Ordering::Greater => Some(ScrollDirection::TowardPositive),
            cmp::Ordering::Less => Some(ScrollDirection::TowardNegative),
            cmp::Ordering::Equal => self.direction,
        };
        self.last_scroll = scroll_value;

        let Some(vp) = self.viewport else {
            swtrace!(scroll_value, "handle_scroll: no viewport layout yet");
            return;
        };
        let view_size = vp.size();
        let view_end = scroll_value.saturating_add(view_size);
        swtrace!(scroll_value, nodes = self.table.len(), "handle_scroll");

        for slot in 0..self.table.len() {
            let start = self.table.read_at(slot, F_START);
            let end = self.table.read_at(slot, F_END);
            let last = PositionClass::from_cell(self.table.read_at(slot, F_LAST_CLASS));
            let current = classify(start, end, scroll_value, view_end);

            if current != last && last != PositionClass::NotReady {
                self.fire_transition(slot, last, current);
            }

            self.table.write_at(slot, F_LAST_CLASS, current.as_cell());
            self.table.write_at(
                slot,
                F_IN_VIEWPORT,
                (current == PositionClass::InViewport) as u64,
            );

            if current == PositionClass::InViewport && self.table.read_at(slot, F_PROGRESS) != 0 {
                self.fire_progress(slot, normalized_position(start, end, scroll_value, view_size));
            }
        }

        self.drain_pending_removals();
    }

    fn fire_transition(&mut self, slot: usize, last: PositionClass, current: PositionClass) {
        use BoundaryEvent::*;
        use PositionClass::*;

        match (last, current) {
            (InViewport, InNegativeArea) => self.fire_event(slot, NegativeExit),
            (InViewport, InPositiveArea) => self.fire_event(slot, PositiveExit),
            (InNegativeArea, InViewport) => self.fire_event(slot, NegativeEnter),
            (InPositiveArea, InViewport) => self.fire_event(slot, PositiveEnter),
            // The node skipped over the viewport entirely within one sample.
            (InNegativeArea, InPositiveArea) | (InPositiveArea, InNegativeArea) => {
                let toward_positive = last == InNegativeArea;
                match FastForward::from_cell(self.table.read_at(slot, F_FAST_FORWARD)) {
                    FastForward::SkipBoth => {}
                    FastForward::ExecuteLast => {
                        let exit = if toward_positive {
                            PositiveExit
                        } else {
                            NegativeExit
                        };
                        self.fire_event(slot, exit);
                    }
                    FastForward::ExecuteBoth => {
                        let (enter, exit) = if toward_positive {
                            (NegativeEnter, PositiveExit)
                        } else {
                            (PositiveEnter, NegativeExit)
                        };
                        self.fire_event(slot, enter);
                        self.fire_event(slot, exit);
                    }
                }
            }
            _ => {}
        }
    }

    fn fire_event(&mut self, slot: usize, event: BoundaryEvent) {
        let flag_field = F_NEGATIVE_ENTER + event.index();
        if self.table.read_at(slot, flag_field) == 0 {
            return;
        }
        let Some(&id) = self.table.key_at(slot) else {
            return;
        };
        let Some(entry) = self.entries.get_mut(id as usize).and_then(Option::as_mut) else {
            return;
        };
        let Some(handler) = entry.handlers[event.index()].as_mut() else {
            return;
        };

        let callback = Arc::clone(&handler.callback);
        let exhausted = match handler.remaining.as_mut() {
            Some(remaining) => {
                *remaining = remaining.saturating_sub(1);
                *remaining == 0
            }
            None => false,
        };

        if exhausted {
            self.table.write_at(slot, flag_field, 0);
            if !self.has_armed_events(slot) && self.table.read_at(slot, F_PROGRESS) == 0 {
                self.queue_removal(id);
            }
        }

        callback();
    }

    fn fire_progress(&mut self, slot: usize, position: f64) {
        let Some(&id) = self.table.key_at(slot) else {
            return;
        };
        let callback = self
            .entries
            .get(id as usize)
            .and_then(Option::as_ref)
            .and_then(|entry| entry.progress.as_ref())
            .map(Arc::clone);
        if let Some(callback) = callback {
            callback(position);
        }
    }

    fn has_armed_events(&self, slot: usize) -> bool {
        (0..4).any(|i| self.table.read_at(slot, F_NEGATIVE_ENTER + i) != 0)
    }

    fn queue_removal(&mut self, id: NodeId) {
        if !self.pending_removals.contains(&id) {
            self.pending_removals.push(id);
        }
    }

    fn drain_pending_removals(&mut self) {
        if self.pending_removals.is_empty() {
            return;
        }
        let pending = core::mem::take(&mut self.pending_removals);
        for id in pending {
            swdebug!(id, "removing exhausted node");
            self.remove_by_id(id);
        }
    }
}
