//! Batched layer changes.
//!
//! Selection changes never mutate the surface directly. They describe what
//! should change as a [`Transaction`]: a list of [`LayerChange`]s, an
//! optional rectangle to scroll into view, and an optional
//! [`AnimationSpec`]. The surface and viewport apply it, animating when a
//! spec is present.

use std::time::Duration;

use horizon_segments_render::{Color, LayerRole, Rect, Scene};

/// The timing curve of an animated transaction.
///
/// Indicator moves run at constant speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
}

/// How long and along which curve a transaction animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl AnimationSpec {
    /// A linear animation of the given length.
    pub fn linear(duration: Duration) -> Self {
        Self {
            duration,
            easing: Easing::Linear,
        }
    }
}

/// A single property change on one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerChange {
    /// Move or resize the layer.
    Frame { role: LayerRole, frame: Rect },
    /// Change the fill colour.
    Background { role: LayerRole, color: Color },
    /// Change the text colour.
    Foreground { role: LayerRole, color: Color },
}

impl LayerChange {
    /// The layer this change targets.
    pub fn role(&self) -> LayerRole {
        match *self {
            LayerChange::Frame { role, .. }
            | LayerChange::Background { role, .. }
            | LayerChange::Foreground { role, .. } => role,
        }
    }

    /// Apply the final value of this change to a scene.
    ///
    /// Returns `false` if the scene has no matching layer or the layer has
    /// no such property.
    pub fn apply_to(&self, scene: &mut Scene) -> bool {
        let Some(layer) = scene.layer_mut(self.role()) else {
            return false;
        };
        match *self {
            LayerChange::Frame { frame, .. } => {
                layer.set_frame(frame);
                true
            }
            LayerChange::Background { color, .. } => layer.set_background(color),
            LayerChange::Foreground { color, .. } => layer.set_foreground(color),
        }
    }
}

/// A batch of layer changes applied together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transaction {
    changes: Vec<LayerChange>,
    scroll_target: Option<Rect>,
    animation: Option<AnimationSpec>,
}

impl Transaction {
    /// A transaction applied without animation.
    pub fn immediate() -> Self {
        Self::default()
    }

    /// A transaction animated with `spec`.
    pub fn animated(spec: AnimationSpec) -> Self {
        Self {
            animation: Some(spec),
            ..Self::default()
        }
    }

    /// Add a change.
    pub fn push(&mut self, change: LayerChange) {
        self.changes.push(change);
    }

    /// Request that `rect` (in content coordinates) be scrolled into view as
    /// part of this transaction.
    pub fn set_scroll_target(&mut self, rect: Rect) {
        self.scroll_target = Some(rect);
    }

    /// The changes in application order.
    #[inline]
    pub fn changes(&self) -> &[LayerChange] {
        &self.changes
    }

    /// The rectangle to scroll into view, if any.
    #[inline]
    pub fn scroll_target(&self) -> Option<Rect> {
        self.scroll_target
    }

    /// The animation, if this transaction is animated.
    #[inline]
    pub fn animation(&self) -> Option<AnimationSpec> {
        self.animation
    }

    /// Whether this transaction animates.
    #[inline]
    pub fn is_animated(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the transaction does nothing.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.scroll_target.is_none()
    }

    /// The last frame this transaction sets for `role`.
    pub fn frame_for(&self, role: LayerRole) -> Option<Rect> {
        self.changes.iter().rev().find_map(|change| match *change {
            LayerChange::Frame { role: r, frame } if r == role => Some(frame),
            _ => None,
        })
    }

    /// Apply the final state of every change to `scene`.
    ///
    /// Returns how many changes found a matching layer property.
    pub fn apply_to(&self, scene: &mut Scene) -> usize {
        self.changes
            .iter()
            .filter(|change| change.apply_to(scene))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_segments_render::{Layer, Primitive, Size};

    fn scene_with_cover() -> Scene {
        let mut scene = Scene::new(Size::new(300.0, 40.0));
        scene.push(Layer::new(
            LayerRole::Cover,
            Rect::ZERO,
            Primitive::Fill {
                color: Color::BLACK,
                opacity: 0.2,
            },
        ));
        scene
    }

    #[test]
    fn test_apply_to_scene() {
        let mut scene = scene_with_cover();
        let mut transaction = Transaction::immediate();
        transaction.push(LayerChange::Frame {
            role: LayerRole::Cover,
            frame: Rect::new(10.0, 0.0, 50.0, 40.0),
        });
        transaction.push(LayerChange::Frame {
            role: LayerRole::Strip,
            frame: Rect::new(10.0, 37.0, 50.0, 3.0),
        });
        transaction.push(LayerChange::Foreground {
            role: LayerRole::Cover,
            color: Color::RED,
        });

        assert_eq!(transaction.apply_to(&mut scene), 1);
        assert_eq!(
            scene.layer(LayerRole::Cover).map(|l| l.frame()),
            Some(Rect::new(10.0, 0.0, 50.0, 40.0))
        );
    }

    #[test]
    fn test_frame_for_takes_last() {
        let mut transaction = Transaction::animated(AnimationSpec::linear(Duration::from_millis(150)));
        assert!(transaction.is_empty());
        transaction.push(LayerChange::Frame {
            role: LayerRole::Strip,
            frame: Rect::ZERO,
        });
        transaction.push(LayerChange::Frame {
            role: LayerRole::Strip,
            frame: Rect::new(1.0, 2.0, 3.0, 4.0),
        });
        assert!(transaction.is_animated());
        assert_eq!(
            transaction.frame_for(LayerRole::Strip),
            Some(Rect::new(1.0, 2.0, 3.0, 4.0))
        );
        assert_eq!(transaction.frame_for(LayerRole::Cover), None);
    }
}
