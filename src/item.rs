//! Item identity and the per-item attributes handed to the host view.

use core::fmt;

use crate::geometry::{Point, Rect, Size};

/// Position of one cell in the dataset.
///
/// Orders by section, then by item within the section; that order is the
/// left-to-right, top-to-bottom layout order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemIndex {
    pub section: usize,
    pub item: usize,
}

impl ItemIndex {
    pub const fn new(section: usize, item: usize) -> Self { ItemIndex { section, item } }
}

impl From<usize> for ItemIndex {
    /// Item in section 0.
    fn from(item: usize) -> Self { ItemIndex { section: 0, item } }
}

impl fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}

/// Snapshot of one item's simulated geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemAttributes {
    pub index: ItemIndex,
    /// Current simulated center.
    pub center: Point,
    pub size: Size,
}

impl ItemAttributes {
    pub fn frame(&self) -> Rect { Rect::centered(self.center, self.size) }
}
