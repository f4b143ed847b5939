/// Where a node sits relative to the visible viewport along the tracked axis.
///
/// `NotReady` is the only transient state: a node holds it between
/// registration and its first classification, and never again afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionClass {
    NotReady,
    /// Entirely before the viewport's visible range (above / left of it).
    InNegativeArea,
    InViewport,
    /// Entirely beyond the viewport's visible range (below / right of it).
    InPositiveArea,
}

impl PositionClass {
    pub(crate) fn as_cell(self) -> u64 {
        match self {
            Self::NotReady => 0,
            Self::InNegativeArea => 1,
            Self::InViewport => 2,
            Self::InPositiveArea => 3,
        }
    }

    pub(crate) fn from_cell(value: u64) -> Self {
        match value {
            1 => Self::InNegativeArea,
            2 => Self::InViewport,
            3 => Self::InPositiveArea,
            _ => Self::NotReady,
        }
    }
}

/// Axis-agnostic scroll direction, inferred from consecutive samples.
///
/// `TowardPositive` means the scroll value is increasing (down for the
/// vertical axis, right for the horizontal one).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    TowardNegative,
    TowardPositive,
}

/// How to resolve a node that skipped over the viewport entirely between two
/// scroll samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FastForward {
    /// Fire nothing.
    #[default]
    SkipBoth,
    /// Fire only the exit event of the destination side.
    ExecuteLast,
    /// Fire the enter event of the side passed through, then the exit event
    /// of the side left, in that order.
    ExecuteBoth,
}

impl FastForward {
    pub(crate) fn as_cell(self) -> u64 {
        match self {
            Self::SkipBoth => 0,
            Self::ExecuteLast => 1,
            Self::ExecuteBoth => 2,
        }
    }

    pub(crate) fn from_cell(value: u64) -> Self {
        match value {
            1 => Self::ExecuteLast,
            2 => Self::ExecuteBoth,
            _ => Self::SkipBoth,
        }
    }
}

/// The four boundary-crossing events a node can fire.
///
/// Axis specializations rename these ("top-enter" is `NegativeEnter` on the
/// vertical axis, "left-enter" on the horizontal one) without changing the
/// dispatch logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryEvent {
    NegativeEnter,
    NegativeExit,
    PositiveEnter,
    PositiveExit,
}

impl BoundaryEvent {
    pub(crate) fn index(self) -> usize {
        match self {
            Self::NegativeEnter => 0,
            Self::NegativeExit => 1,
            Self::PositiveEnter => 2,
            Self::PositiveExit => 3,
        }
    }
}

/// A node's absolute start/end positions along the tracked axis.
///
/// Both bounds participate inclusively in classification; well-formed nodes
/// have `end >= start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub start: u64,
    pub end: u64,
}

impl Extent {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn size(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Expands the extent symmetrically by `offset` on both sides.
    pub(crate) fn padded(self, offset: u64) -> Self {
        Self {
            start: self.start.saturating_sub(offset),
            end: self.end.saturating_add(offset),
        }
    }
}

/// A lightweight, serializable snapshot of the viewport's visible range.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub range_start: u64,
    pub range_end: u64,
}

impl ViewportState {
    pub fn size(&self) -> u64 {
        self.range_end.saturating_sub(self.range_start)
    }
}

/// A lightweight, serializable snapshot of the last scroll sample.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    pub direction: Option<ScrollDirection>,
}
