//! The segmented control.
//!
//! [`SegmentControl`] owns the segments, the style and the selection. It
//! draws into a [`LayerSurface`] and scrolls a [`ScrollViewport`], both
//! supplied by the host.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_segments::prelude::*;
//!
//! let mut control = SegmentControl::headless(
//!     Size::new(320.0, 44.0),
//!     Arc::new(ApproximateTextMeasure::new()),
//! );
//! control.set_segments(["News", "Sports", "Weather"]);
//! control.value_changed.connect(|index| println!("selected {index}"));
//!
//! control.set_selected_index(1);
//! assert_eq!(control.selected_index(), 1);
//! assert_eq!(control.selected_segment().and_then(|s| s.as_text()), Some("Sports"));
//! ```
//!
//! # Signals
//!
//! - `value_changed(i32)`: emitted with the new index whenever a valid
//!   segment becomes selected, before the delegate is told.

use std::sync::{Arc, Weak};

use horizon_segments_core::Signal;
use horizon_segments_core::logging::targets;
use horizon_segments_render::{Point, Rect, Scene, Size, TextMeasure};

use crate::animation::Transaction;
use crate::widget::hit_test::HitTester;
use crate::widget::layout::{LayoutEngine, LayoutResult};
use crate::widget::scene::build_scene;
use crate::widget::segment::{SegmentContent, SegmentModel};
use crate::widget::selection::{
    NO_SELECTION, SelectionContext, SelectionController, SelectionOutcome, SelectionState,
};
use crate::widget::style::SegmentControlStyle;
use crate::widget::surface::{LayerSurface, RecordingSurface};
use crate::widget::viewport::{ScrollState, ScrollViewport};

/// Read access to a control's segments, handed to the delegate.
pub trait SegmentAccess {
    fn segment_count(&self) -> usize;

    /// The content at `index`, if it exists.
    fn segment(&self, index: usize) -> Option<&SegmentContent>;

    fn selected_index(&self) -> i32;

    /// The content of the selected segment, if the selection is valid.
    fn selected_segment(&self) -> Option<&SegmentContent>;
}

/// Receives committed selection changes.
///
/// The control holds its delegate weakly; dropping the delegate silently
/// detaches it.
pub trait SegmentControlDelegate: Send + Sync {
    /// A valid segment was selected. `old_index` may be `-1` or otherwise
    /// out of range.
    fn selection_changed(&self, control: &dyn SegmentAccess, new_index: i32, old_index: i32);
}

/// A horizontal row of selectable segments.
pub struct SegmentControl<S = RecordingSurface, V = ScrollState>
where
    S: LayerSurface,
    V: ScrollViewport,
{
    segments: Vec<SegmentModel>,
    style: SegmentControlStyle,
    selection: SelectionController,
    measure: Arc<dyn TextMeasure>,
    surface: S,
    viewport: V,
    layout: LayoutResult,
    scene: Scene,
    needs_layout: bool,
    delegate: Option<Weak<dyn SegmentControlDelegate>>,

    /// Emitted with the new index after every committed selection change.
    pub value_changed: Signal<i32>,
}

impl SegmentControl<RecordingSurface, ScrollState> {
    /// A control with a recording surface and a plain scroll state, for
    /// headless use.
    pub fn headless(viewport_size: Size, measure: Arc<dyn TextMeasure>) -> Self {
        Self::new(RecordingSurface::new(), ScrollState::new(viewport_size), measure)
    }
}

impl<S: LayerSurface, V: ScrollViewport> SegmentControl<S, V> {
    /// Create an empty control with the default style.
    pub fn new(surface: S, viewport: V, measure: Arc<dyn TextMeasure>) -> Self {
        Self {
            segments: Vec::new(),
            style: SegmentControlStyle::default(),
            selection: SelectionController::new(),
            measure,
            surface,
            viewport,
            layout: LayoutResult::EMPTY,
            scene: Scene::default(),
            needs_layout: true,
            delegate: None,
            value_changed: Signal::new(),
        }
    }

    /// Builder-style style setter.
    pub fn with_style(mut self, style: SegmentControlStyle) -> Self {
        self.set_style(style);
        self
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Replace all segments.
    ///
    /// Clearing the list also clears the selection.
    pub fn set_segments<I>(&mut self, contents: I)
    where
        I: IntoIterator,
        I::Item: Into<SegmentContent>,
    {
        self.segments = contents
            .into_iter()
            .map(|content| SegmentModel::new(content.into()))
            .collect();
        self.set_needs_layout();
        if self.segments.is_empty() {
            self.set_selected_index(NO_SELECTION);
        }
    }

    /// The laid-out segments.
    pub fn segments(&self) -> &[SegmentModel] {
        &self.segments
    }

    pub fn count(&self) -> usize {
        self.segments.len()
    }

    // =========================================================================
    // Style
    // =========================================================================

    pub fn style(&self) -> &SegmentControlStyle {
        &self.style
    }

    /// Replace the style. Takes effect on the next layout pass.
    pub fn set_style(&mut self, style: SegmentControlStyle) {
        self.style = style;
        self.set_needs_layout();
    }

    /// Modify the style in place. Takes effect on the next layout pass.
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use horizon_segments::prelude::*;
    /// # let mut control = SegmentControl::headless(Size::new(320.0, 44.0), Arc::new(ApproximateTextMeasure::new()));
    /// control.update_style(|style| {
    ///     style.indicator = IndicatorStyle::Strip;
    ///     style.separator.enabled = true;
    /// });
    /// assert!(control.needs_layout());
    /// ```
    pub fn update_style(&mut self, f: impl FnOnce(&mut SegmentControlStyle)) {
        f(&mut self.style);
        self.set_needs_layout();
    }

    // =========================================================================
    // Delegate
    // =========================================================================

    /// Set the delegate. Only a weak reference is kept.
    pub fn set_delegate<D: SegmentControlDelegate + 'static>(&mut self, delegate: &Arc<D>) {
        let weak: Weak<dyn SegmentControlDelegate> = Arc::<D>::downgrade(delegate);
        self.delegate = Some(weak);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The raw selected index; `-1` when nothing is selected.
    pub fn selected_index(&self) -> i32 {
        self.selection.selected_index()
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.state(self.segments.len())
    }

    /// The selected segment's content, if the selection is valid.
    pub fn selected_segment(&self) -> Option<&SegmentContent> {
        self.selection_state()
            .index()
            .map(|index| self.segments[index].content())
    }

    /// Select a segment.
    ///
    /// Selecting the current index does nothing. An out-of-range index
    /// (including `-1`) clears the selection and collapses the indicator
    /// without notifying anyone. A valid new index moves the indicator,
    /// emits [`value_changed`](Self::value_changed) and then tells the
    /// delegate.
    pub fn set_selected_index(&mut self, index: i32) {
        self.layout_if_needed();

        let container = self.viewport.viewport_size();
        let outcome = self.selection.select(
            index,
            &SelectionContext {
                segments: &self.segments,
                style: &self.style,
                layout: &self.layout,
                container,
                scene: &self.scene,
            },
        );

        match outcome {
            SelectionOutcome::Unchanged => {}
            SelectionOutcome::Cleared { transaction } => self.commit(&transaction),
            SelectionOutcome::Changed {
                new,
                old,
                transaction,
            } => {
                self.commit(&transaction);
                let new = new as i32;
                self.value_changed.emit(new);
                if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
                    delegate.selection_changed(&*self, new, old);
                }
            }
        }
    }

    fn commit(&mut self, transaction: &Transaction) {
        if let Some(target) = transaction.scroll_target() {
            self.viewport
                .scroll_rect_to_visible(target, transaction.is_animated());
        }
        transaction.apply_to(&mut self.scene);
        self.surface.apply(transaction);
    }

    // =========================================================================
    // Touch
    // =========================================================================

    /// Handle the end of a touch at `location` in viewport coordinates.
    ///
    /// Returns the index that was hit, or `None` when the touch fell
    /// outside the content or there are no segments.
    pub fn touch_released(&mut self, location: Point) -> Option<usize> {
        self.layout_if_needed();

        let offset = self.viewport.content_offset();
        let point = location.offset(offset.x, offset.y);
        if !Rect::from_size(self.layout.content_size).contains(point) {
            tracing::debug!(
                target: targets::HIT_TEST,
                x = point.x,
                y = point.y,
                "touch outside content"
            );
            return None;
        }

        let separator = self.style.layout_config(Size::ZERO).separator_space();
        let index = HitTester::new(&self.segments, separator).index_at(point)?;
        self.set_selected_index(index as i32);
        Some(index)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Schedule a layout pass.
    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Run a layout pass if one is scheduled.
    pub fn layout_if_needed(&mut self) {
        if self.needs_layout {
            self.layout();
        }
    }

    /// Recompute all geometry and present a fresh scene.
    pub fn layout(&mut self) {
        let container = self.viewport.viewport_size();
        let config = self.style.layout_config(container);
        let result = LayoutEngine::new(self.measure.as_ref()).layout(&mut self.segments, &config);

        self.viewport.set_content_size(result.content_size);
        self.viewport.set_content_inset(result.content_inset());

        self.scene = build_scene(
            &self.segments,
            &result,
            &self.style,
            self.selection.selected_index(),
            container,
        );
        self.surface.present(&self.scene);

        self.layout = result;
        self.needs_layout = false;
    }

    /// The result of the last layout pass.
    pub fn layout_result(&self) -> &LayoutResult {
        &self.layout
    }

    /// The scene as last presented, with later transactions applied.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access to the viewport. Schedules a layout pass, since the
    /// viewport size may change.
    pub fn viewport_mut(&mut self) -> &mut V {
        self.set_needs_layout();
        &mut self.viewport
    }
}

impl<S: LayerSurface, V: ScrollViewport> SegmentAccess for SegmentControl<S, V> {
    fn segment_count(&self) -> usize {
        self.segments.len()
    }

    fn segment(&self, index: usize) -> Option<&SegmentContent> {
        self.segments.get(index).map(SegmentModel::content)
    }

    fn selected_index(&self) -> i32 {
        self.selection.selected_index()
    }

    fn selected_segment(&self) -> Option<&SegmentContent> {
        SegmentControl::selected_segment(self)
    }
}

static_assertions::assert_impl_all!(SegmentControl: Send, Sync);
