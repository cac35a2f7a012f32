//! Owner of every spring in a layout, stepped by the host's rendering clock.

use alloc::collections::BTreeMap;

use crate::config::SpringParams;
use crate::error::LayoutError;
use crate::geometry::{Point, Rect, Size};
use crate::item::{ItemAttributes, ItemIndex};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::spring::SpringModel;

/// The spring set for one layout instance.
///
/// Has no clock of its own: the host calls [`advance`](Self::advance) once
/// per frame. Springs are kept in index order so queries are deterministic.
#[derive(Clone, Debug)]
pub struct DynamicsEngine {
    springs: BTreeMap<ItemIndex, SpringModel>,
    item_size: Size,
    params: SpringParams,
}

impl DynamicsEngine {
    pub fn new(item_size: Size, params: SpringParams) -> Result<Self, LayoutError> {
        params.validate()?;
        Ok(DynamicsEngine { springs: BTreeMap::new(), item_size, params })
    }

    /// Attach `index` to `anchor` unless it already has a spring. Returns
    /// whether a spring was created; existing springs keep their state.
    pub fn ensure_spring(&mut self, index: ItemIndex, anchor: Point) -> Result<bool, LayoutError> {
        if self.springs.contains_key(&index) {
            return Ok(false);
        }
        let spring = SpringModel::new(index, anchor, self.params)?;
        self.springs.insert(index, spring);
        Ok(true)
    }

    /// Attributes of every item whose center lies in `region` or whose frame
    /// overlaps it. Lazy and side-effect free; call again to restart.
    pub fn items_intersecting(&self, region: Rect) -> impl Iterator<Item = ItemAttributes> + '_ {
        let size = self.item_size;
        self.springs
            .values()
            .map(move |spring| spring.attributes(size))
            .filter(move |attrs| region.contains(attrs.center) || region.intersects(&attrs.frame()))
    }

    pub fn attributes_for(&self, index: ItemIndex) -> Result<ItemAttributes, LayoutError> {
        self.springs
            .get(&index)
            .map(|spring| spring.attributes(self.item_size))
            .ok_or(LayoutError::NotFound { index })
    }

    /// Step every spring by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.advance_observed(dt, &mut NoOpStepObserver);
    }

    pub fn advance_observed<O: StepObserver>(&mut self, dt: f64, observer: &mut O) {
        for spring in self.springs.values_mut() {
            spring.step(dt);
            observer.on_spring_stepped(&spring.attributes(self.item_size));
        }
        observer.on_step_complete(self.springs.len());
    }

    pub fn update_target(&mut self, index: ItemIndex, anchor: Point) -> Result<(), LayoutError> {
        self.spring_mut(index)?.set_target(anchor);
        Ok(())
    }

    pub fn displace_item(&mut self, index: ItemIndex, position: Point) -> Result<(), LayoutError> {
        self.spring_mut(index)?.displace(position);
        Ok(())
    }

    pub fn spring(&self, index: ItemIndex) -> Option<&SpringModel> { self.springs.get(&index) }

    fn spring_mut(&mut self, index: ItemIndex) -> Result<&mut SpringModel, LayoutError> {
        self.springs.get_mut(&index).ok_or(LayoutError::NotFound { index })
    }

    pub fn springs(&self) -> impl Iterator<Item = &SpringModel> + '_ { self.springs.values() }

    pub fn springs_mut(&mut self) -> impl Iterator<Item = &mut SpringModel> + '_ {
        self.springs.values_mut()
    }

    /// Destroy the spring for an item that left the dataset.
    pub fn remove(&mut self, index: ItemIndex) -> Option<SpringModel> { self.springs.remove(&index) }

    /// Keep only springs whose index satisfies `keep`. Returns how many were removed.
    pub fn retain<P: FnMut(&ItemIndex) -> bool>(&mut self, mut keep: P) -> usize {
        let before = self.springs.len();
        self.springs.retain(|index, _| keep(index));
        before - self.springs.len()
    }

    pub fn contains(&self, index: ItemIndex) -> bool { self.springs.contains_key(&index) }
    pub fn len(&self) -> usize { self.springs.len() }
    pub fn is_empty(&self) -> bool { self.springs.is_empty() }
    pub fn item_size(&self) -> Size { self.item_size }
    pub fn params(&self) -> SpringParams { self.params }

    /// True when every spring is within `eps_pos` of its anchor and slower
    /// than `eps_vel`. Vacuously true with no springs.
    pub fn is_settled(&self, eps_pos: f64, eps_vel: f64) -> bool {
        self.springs.values().all(|s| s.is_settled(eps_pos, eps_vel))
    }

    pub fn clear(&mut self) { self.springs.clear(); }
}
