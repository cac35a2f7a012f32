//! Grid layout whose items hang on springs and lag behind scrolling.
//!
//! [`SpringyLayout`] computes each item's natural position in a uniform
//! grid, attaches a spring there on the first pass, and on every bounds
//! change pushes each spring by a share of the scroll delta that depends on
//! how far the item sits from the touch point.
//!
//! # Lifecycle
//!
//! The layout starts [`LayoutState::Uninitialized`]. The first successful
//! [`prepare`](SpringyLayout::prepare) creates the spring set and moves to
//! [`LayoutState::Active`]. Later passes reuse the existing springs, so
//! simulated momentum survives re-layout. Only
//! [`teardown`](SpringyLayout::teardown) returns to `Uninitialized`.

use alloc::vec::Vec;

use crate::config::{BoundsResponse, GridConfig, ScrollConfig, SpringParams};
use crate::dynamics::DynamicsEngine;
use crate::error::LayoutError;
use crate::geometry::{Point, Rect, Size};
use crate::item::{ItemAttributes, ItemIndex};
use crate::observer::StepObserver;

/// Share of touch distance that resists scrolling.
pub fn resistance(anchor: Point, touch: Point, scale: f64) -> f64 {
    touch.manhattan(anchor) / scale
}

/// Vertical displacement applied to a spring for a scroll of `scroll_delta`.
///
/// Picks whichever of `scroll_delta` and `scroll_delta * resistance` is
/// smaller in magnitude, so the result always lies between zero and the
/// raw delta. Zero resistance therefore yields zero displacement.
pub fn scroll_displacement(scroll_delta: f64, resistance: f64) -> f64 {
    let resisted = scroll_delta * resistance;
    if scroll_delta < 0.0 {
        scroll_delta.max(resisted)
    } else {
        scroll_delta.min(resisted)
    }
}

/// Natural grid positions for a sorted, deduplicated item list.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct GridPlacement {
    /// Cell centers in layout order.
    pub anchors: Vec<(ItemIndex, Point)>,
    pub content_size: Size,
}

impl GridPlacement {
    /// Lay `items` out left to right, top to bottom. Each section is its own
    /// block of rows wrapped in the section insets; the next section starts
    /// below the previous one's bottom inset.
    ///
    /// `items` must be sorted and free of duplicates.
    pub(crate) fn compute(items: &[ItemIndex], config: &GridConfig) -> Self {
        let columns = config.columns();
        let insets = config.section_insets;
        let step_x = config.column_width + config.interitem_spacing;
        let step_y = config.row_height + config.line_spacing;

        let mut anchors = Vec::with_capacity(items.len());
        let mut bottom = 0.0;
        let mut widest_row = 0;

        for section in items.chunk_by(|a, b| a.section == b.section) {
            let rows = section.len().div_ceil(columns);
            widest_row = widest_row.max(section.len().min(columns));

            let top = bottom + insets.top;
            for (k, &index) in section.iter().enumerate() {
                let (row, col) = (k / columns, k % columns);
                let center = Point::new(
                    insets.left + col as f64 * step_x + config.column_width * 0.5,
                    top + row as f64 * step_y + config.row_height * 0.5,
                );
                anchors.push((index, center));
            }
            bottom = top + rows as f64 * step_y - config.line_spacing + insets.bottom;
        }

        let content_size = if widest_row == 0 {
            Size::ZERO
        } else {
            let row_width = widest_row as f64 * step_x - config.interitem_spacing;
            Size::new(config.available_width.max(insets.horizontal() + row_width), bottom)
        };

        GridPlacement { anchors, content_size }
    }

    /// Natural cell of `index`, if it was placed.
    fn anchor_of(&self, index: ItemIndex) -> Option<Point> {
        self.anchors
            .binary_search_by_key(&index, |&(i, _)| i)
            .ok()
            .map(|slot| self.anchors[slot].1)
    }
}

/// Observable lifecycle of a [`SpringyLayout`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutState {
    /// No springs exist yet.
    Uninitialized,
    /// Springs exist and receive scroll and tick updates.
    Active,
}

#[derive(Debug)]
struct ActiveLayout {
    config: GridConfig,
    engine: DynamicsEngine,
    placement: GridPlacement,
}

#[derive(Debug, Default)]
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
struct SyncCounts {
    created: usize,
    moved: usize,
    pruned: usize,
}

impl ActiveLayout {
    /// Bring the spring set in line with `placement`.
    ///
    /// An unchanged placement touches nothing. Otherwise springs of removed
    /// items are destroyed, new items get a spring at rest on their cell, and
    /// kept springs whose cell moved are retargeted there with their position
    /// and velocity intact.
    fn sync_springs(
        &mut self,
        items: &[ItemIndex],
        placement: GridPlacement,
    ) -> Result<SyncCounts, LayoutError> {
        let mut counts = SyncCounts::default();
        if placement == self.placement {
            return Ok(counts);
        }

        counts.pruned = self.engine.retain(|index| items.binary_search(index).is_ok());
        for &(index, anchor) in &placement.anchors {
            if self.engine.ensure_spring(index, anchor)? {
                counts.created += 1;
            } else if self.placement.anchor_of(index) != Some(anchor) {
                self.engine.update_target(index, anchor)?;
                counts.moved += 1;
            }
        }
        self.placement = placement;
        Ok(counts)
    }
}

#[derive(Debug)]
enum Stage {
    Uninitialized,
    Active(ActiveLayout),
}

/// Springy grid layout driven by a host view.
#[derive(Debug)]
pub struct SpringyLayout {
    stage: Stage,
    spring: SpringParams,
    scroll: ScrollConfig,
    content_size: Size,
}

impl SpringyLayout {
    /// Layout with default spring and scroll settings.
    pub fn new() -> Self {
        SpringyLayout {
            stage: Stage::Uninitialized,
            spring: SpringParams::default(),
            scroll: ScrollConfig::default(),
            content_size: Size::ZERO,
        }
    }

    pub fn with_settings(spring: SpringParams, scroll: ScrollConfig) -> Result<Self, LayoutError> {
        spring.validate()?;
        scroll.validate()?;
        Ok(SpringyLayout { spring, scroll, ..Self::new() })
    }

    /// Lay out `items` and make sure each one has a spring.
    ///
    /// Calling this again with the same items changes nothing. When the
    /// item set changes, springs for removed items are destroyed and kept
    /// springs whose cell moved are retargeted to it, keeping their momentum.
    /// The grid config is fixed once the
    /// layout is active, and a different one is rejected with
    /// [`LayoutError::ConfigLocked`].
    pub fn prepare<I>(&mut self, items: I, config: GridConfig) -> Result<(), LayoutError>
    where
        I: IntoIterator<Item = ItemIndex>,
    {
        config.validate()?;
        if let Stage::Active(active) = &self.stage {
            if active.config != config {
                return Err(LayoutError::ConfigLocked);
            }
        }

        let mut items: Vec<ItemIndex> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        let placement = GridPlacement::compute(&items, &config);

        let mut active = match core::mem::replace(&mut self.stage, Stage::Uninitialized) {
            Stage::Active(active) => active,
            Stage::Uninitialized => {
                #[cfg(feature = "tracing")]
                tracing::debug!(items = items.len(), "springy layout activated");
                ActiveLayout {
                    config,
                    engine: DynamicsEngine::new(config.item_size(), self.spring)?,
                    placement: GridPlacement::default(),
                }
            }
        };

        let synced = active.sync_springs(&items, placement);
        self.content_size = active.placement.content_size;
        self.stage = Stage::Active(active);
        let _sync = synced?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            items = items.len(),
            created = _sync.created,
            moved = _sync.moved,
            pruned = _sync.pruned,
            "prepared springy layout"
        );

        Ok(())
    }

    /// Attributes the host should render for `region`. Empty before the
    /// first `prepare`.
    pub fn attributes_for_region(&self, region: Rect) -> impl Iterator<Item = ItemAttributes> + '_ {
        self.engine()
            .into_iter()
            .flat_map(move |engine| engine.items_intersecting(region))
    }

    pub fn attributes_for_item(&self, index: ItemIndex) -> Result<ItemAttributes, LayoutError> {
        match self.engine() {
            Some(engine) => engine.attributes_for(index),
            None => Err(LayoutError::NotFound { index }),
        }
    }

    /// React to the host's scroll origin moving from `old_origin_y` to
    /// `new_origin_y` while the pointer is at `touch`.
    ///
    /// Always returns `false`: the springs animate the change on subsequent
    /// ticks, so a full layout pass is never needed. A non-finite delta or
    /// touch location leaves every spring untouched.
    pub fn on_bounds_change(&mut self, old_origin_y: f64, new_origin_y: f64, touch: Point) -> bool {
        let ScrollConfig { resistance_scale, response } = self.scroll;
        let Stage::Active(active) = &mut self.stage else {
            return false;
        };

        let scroll_delta = new_origin_y - old_origin_y;
        if !scroll_delta.is_finite() || !touch.x.is_finite() || !touch.y.is_finite() {
            return false;
        }
        for spring in active.engine.springs_mut() {
            let r = resistance(spring.anchor(), touch, resistance_scale);
            let target = spring.position().offset_y(scroll_displacement(scroll_delta, r));
            match response {
                BoundsResponse::Retarget => spring.set_target(target),
                BoundsResponse::Displace => spring.displace(target),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            scroll_delta,
            springs = active.engine.len(),
            "bounds change perturbed springs"
        );

        false
    }

    /// Step the simulation by `dt` seconds. Call once per rendering frame.
    pub fn advance(&mut self, dt: f64) {
        if let Stage::Active(active) = &mut self.stage {
            active.engine.advance(dt);
        }
    }

    pub fn advance_observed<O: StepObserver>(&mut self, dt: f64, observer: &mut O) {
        if let Stage::Active(active) = &mut self.stage {
            active.engine.advance_observed(dt, observer);
        }
    }

    /// Discard every spring and return to `Uninitialized`.
    pub fn teardown(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            springs = self.engine().map_or(0, DynamicsEngine::len),
            "springy layout torn down"
        );
        self.stage = Stage::Uninitialized;
        self.content_size = Size::ZERO;
    }

    pub fn state(&self) -> LayoutState {
        match self.stage {
            Stage::Uninitialized => LayoutState::Uninitialized,
            Stage::Active(_) => LayoutState::Active,
        }
    }

    /// Total size of the laid-out grid, for the host's scrollable area.
    pub fn content_size(&self) -> Size { self.content_size }

    pub fn engine(&self) -> Option<&DynamicsEngine> {
        match &self.stage {
            Stage::Active(active) => Some(&active.engine),
            Stage::Uninitialized => None,
        }
    }

    pub fn grid_config(&self) -> Option<&GridConfig> {
        match &self.stage {
            Stage::Active(active) => Some(&active.config),
            Stage::Uninitialized => None,
        }
    }

    pub fn spring_params(&self) -> SpringParams { self.spring }
    pub fn scroll_config(&self) -> ScrollConfig { self.scroll }

    /// True once every spring has come to rest, or when nothing is laid out.
    pub fn is_settled(&self, eps_pos: f64, eps_vel: f64) -> bool {
        self.engine().map_or(true, |engine| engine.is_settled(eps_pos, eps_vel))
    }
}

impl Default for SpringyLayout {
    fn default() -> Self {
        Self::new()
    }
}
