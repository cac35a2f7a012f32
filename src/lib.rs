//! Spring-attached grid layout with distance-weighted scroll lag.
//!
//! `springy` lays items out in a uniform grid and hangs each one on a
//! zero-length damped spring anchored at its grid position. When the host
//! view scrolls, every spring is pushed by a share of the scroll delta that
//! depends on the item's distance from the touch point, and the springs
//! settle back over the following frames. The host drives the simulation
//! with its own clock and asks for the attributes of whatever is visible.
//!
//! # Features
//!
//! - **Closed-form springs**: exact damped-oscillator steps, no Euler drift
//! - **Idempotent layout passes**: springs are created once and keep their
//!   momentum across re-layout
//! - **Sectioned flow grid**: multi-column rows with spacing and insets
//! - **Observable**: monitor simulation ticks via the `StepObserver` trait
//! - **`no_std` compatible**: only needs `alloc`
//!
//! ```
//! use springy::{GridConfig, ItemIndex, Point, Rect, SpringyLayout};
//!
//! let mut layout = SpringyLayout::new();
//! layout.prepare((0..20).map(ItemIndex::from), GridConfig::default())?;
//!
//! layout.on_bounds_change(0.0, 40.0, Point::new(150.0, 300.0));
//! layout.advance(1.0 / 60.0);
//!
//! let visible: Vec<_> = layout.attributes_for_region(Rect::new(0.0, 0.0, 320.0, 480.0)).collect();
//! assert!(!visible.is_empty());
//! # Ok::<(), springy::LayoutError>(())
//! ```

#![no_std]

extern crate alloc;

pub mod geometry;
pub mod item;
pub mod spring;
pub mod dynamics;
pub mod layout;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use geometry::{Point, Size, Rect, EdgeInsets};
pub use item::{ItemIndex, ItemAttributes};
pub use spring::SpringModel;
pub use dynamics::DynamicsEngine;
pub use layout::{SpringyLayout, LayoutState, resistance, scroll_displacement};
pub use observer::{StepObserver, NoOpStepObserver};
pub use config::{GridConfig, SpringParams, ScrollConfig, BoundsResponse, DEFAULT_RESISTANCE_SCALE};
pub use error::{LayoutError, ErrorKind};
