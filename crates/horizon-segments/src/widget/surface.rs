//! The drawing surface the control renders into.

use horizon_segments_render::Scene;

use crate::animation::Transaction;

/// A retained-mode surface.
///
/// The control calls [`present`](Self::present) once per layout pass with
/// the complete scene, and [`apply`](Self::apply) for every selection
/// change in between. Implementations animate the changes when the
/// transaction carries an animation spec.
pub trait LayerSurface {
    /// Replace everything on the surface with `scene`.
    fn present(&mut self, scene: &Scene);

    /// Apply property changes to the presented layers.
    fn apply(&mut self, transaction: &Transaction);
}

/// A [`LayerSurface`] that keeps the resulting scene and a log of every
/// transaction. Useful headless and in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    scene: Scene,
    present_count: usize,
    transactions: Vec<Transaction>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The scene as it looks after all applied transactions.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// How many times a scene was presented.
    pub fn present_count(&self) -> usize {
        self.present_count
    }

    /// Every transaction applied since the last [`clear`](Self::clear).
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    /// Forget recorded transactions. The scene is kept.
    pub fn clear(&mut self) {
        self.transactions.clear();
    }
}

impl LayerSurface for RecordingSurface {
    fn present(&mut self, scene: &Scene) {
        self.scene = scene.clone();
        self.present_count += 1;
    }

    fn apply(&mut self, transaction: &Transaction) {
        transaction.apply_to(&mut self.scene);
        self.transactions.push(transaction.clone());
    }
}
