//! Animation support for selection changes.
//!
//! Animations are declarative: the control hands a [`Transaction`] carrying
//! an [`AnimationSpec`] to the surface and never steps frames itself.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_segments::animation::{AnimationSpec, LayerChange, Transaction};
//! use horizon_segments_render::{LayerRole, Rect};
//!
//! let mut transaction = Transaction::animated(AnimationSpec::linear(Duration::from_millis(150)));
//! transaction.push(LayerChange::Frame {
//!     role: LayerRole::Strip,
//!     frame: Rect::new(60.0, 37.0, 60.0, 3.0),
//! });
//! assert!(transaction.is_animated());
//! assert_eq!(transaction.frame_for(LayerRole::Strip), Some(Rect::new(60.0, 37.0, 60.0, 3.0)));
//! ```

mod transaction;

pub use transaction::{AnimationSpec, Easing, LayerChange, Transaction};
