//! The selection state machine.
//!
//! The selected index is a raw `i32`, where `-1` (or any out-of-range
//! value) means nothing is selected. Setting it yields one of three
//! outcomes:
//!
//! | From          | To                  | Outcome                                     |
//! |---------------|---------------------|---------------------------------------------|
//! | any `i`       | `i`                 | [`SelectionOutcome::Unchanged`]             |
//! | any           | out of range        | [`SelectionOutcome::Cleared`], indicators collapse in place |
//! | any `j != i`  | valid `i`           | [`SelectionOutcome::Changed`], indicator moves |
//!
//! A change animates only when animation is enabled and the previous index
//! was itself valid; the first selection always snaps into place.

use horizon_segments_core::Property;
use horizon_segments_core::logging::targets;
use horizon_segments_render::{LayerRole, Scene, Size};

use crate::animation::{AnimationSpec, LayerChange, Transaction};
use crate::widget::indicator::{self, resolve};
use crate::widget::layout::LayoutResult;
use crate::widget::scene::foreground_color;
use crate::widget::segment::SegmentModel;
use crate::widget::style::SegmentControlStyle;

/// The index value meaning "nothing selected".
pub const NO_SELECTION: i32 = -1;

/// Typed view of a raw selected index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Unselected,
    Selected(usize),
}

impl SelectionState {
    /// Interpret `index` against a list of `count` segments.
    pub fn from_index(index: i32, count: usize) -> Self {
        match usize::try_from(index) {
            Ok(i) if i < count => SelectionState::Selected(i),
            _ => SelectionState::Unselected,
        }
    }

    /// The selected position, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            SelectionState::Selected(i) => Some(*i),
            SelectionState::Unselected => None,
        }
    }
}

/// Everything a transition needs to know about the current layout.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    pub segments: &'a [SegmentModel],
    pub style: &'a SegmentControlStyle,
    pub layout: &'a LayoutResult,
    pub container: Size,
    /// The scene currently on the surface. Collapsing keeps the indicators'
    /// current origins.
    pub scene: &'a Scene,
}

/// The result of setting the selected index.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// The index was already selected.
    Unchanged,
    /// The new index is out of range. Indicators collapse; nobody is
    /// notified.
    Cleared { transaction: Transaction },
    /// A valid segment became selected.
    Changed {
        new: usize,
        old: i32,
        transaction: Transaction,
    },
}

/// Owns the selected index and computes transitions.
#[derive(Debug, Clone)]
pub struct SelectionController {
    selected: Property<i32>,
}

impl SelectionController {
    /// Start with nothing selected.
    pub fn new() -> Self {
        Self {
            selected: Property::new(NO_SELECTION),
        }
    }

    /// The raw selected index.
    #[inline]
    pub fn selected_index(&self) -> i32 {
        self.selected.get()
    }

    /// The selection interpreted against `count` segments.
    pub fn state(&self, count: usize) -> SelectionState {
        SelectionState::from_index(self.selected_index(), count)
    }

    /// Set the selected index and describe the resulting transition.
    pub fn select(&self, index: i32, ctx: &SelectionContext<'_>) -> SelectionOutcome {
        let Some(old) = self.selected.replace(index) else {
            tracing::trace!(target: targets::SELECTION, index, "selection unchanged");
            return SelectionOutcome::Unchanged;
        };

        let Some(segment) = resolve(ctx.segments, index) else {
            tracing::debug!(
                target: targets::SELECTION,
                index,
                old,
                count = ctx.segments.len(),
                "selection cleared"
            );
            return SelectionOutcome::Cleared {
                transaction: collapse_indicators(ctx.scene),
            };
        };
        let new = index as usize;
        let style = ctx.style;

        let old_segment = resolve(ctx.segments, old);
        let animated = style.animation.enabled && old_segment.is_some();
        let mut transaction = if animated {
            Transaction::animated(AnimationSpec::linear(style.animation.duration))
        } else {
            Transaction::immediate()
        };

        if animated && ctx.layout.overflows(ctx.container.width) {
            transaction.set_scroll_target(indicator::scroll_target(segment.frame(), ctx.container));
        }

        let config = style.indicator_config();
        transaction.push(LayerChange::Frame {
            role: config.role(),
            frame: config.indicator_rect(ctx.segments, index, ctx.container.height),
        });
        if let Some(color) = config.cycle_color(new) {
            transaction.push(LayerChange::Background {
                role: config.role(),
                color,
            });
        }

        if let Some(previous) = old_segment
            && let Some(color) = foreground_color(previous.content(), style, false)
        {
            transaction.push(LayerChange::Foreground {
                role: LayerRole::Content(old as usize),
                color,
            });
        }
        if let Some(color) = foreground_color(segment.content(), style, true) {
            transaction.push(LayerChange::Foreground {
                role: LayerRole::Content(new),
                color,
            });
        }

        tracing::debug!(
            target: targets::SELECTION,
            new,
            old,
            animated,
            scroll = transaction.scroll_target().is_some(),
            "selection changed"
        );
        SelectionOutcome::Changed {
            new,
            old,
            transaction,
        }
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

/// Reset both indicators to zero width, keeping origin and height.
fn collapse_indicators(scene: &Scene) -> Transaction {
    let mut transaction = Transaction::immediate();
    for role in [LayerRole::Strip, LayerRole::Cover] {
        if let Some(layer) = scene.layer(role) {
            transaction.push(LayerChange::Frame {
                role,
                frame: indicator::collapse(layer.frame()),
            });
        }
    }
    transaction
}

static_assertions::assert_impl_all!(SelectionController: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::layout::LayoutEngine;
    use crate::widget::scene::build_scene;
    use crate::widget::segment::{SegmentContent, StyledText};
    use crate::widget::style::{Distribution, IndicatorStyle};
    use horizon_segments_render::{ApproximateTextMeasure, Color, Icon, Rect};
    use std::time::Duration;

    struct Fixture {
        segments: Vec<SegmentModel>,
        style: SegmentControlStyle,
        layout: LayoutResult,
        container: Size,
        scene: Scene,
    }

    impl Fixture {
        fn new(widths: &[f32], style: SegmentControlStyle, container: Size) -> Self {
            let measure = ApproximateTextMeasure::new();
            let mut segments: Vec<SegmentModel> = widths
                .iter()
                .map(|&w| SegmentModel::new(Icon::with_size(Size::new(w, 20.0)).into()))
                .collect();
            let layout = LayoutEngine::new(&measure)
                .layout(&mut segments, &style.layout_config(container));
            let scene = build_scene(&segments, &layout, &style, NO_SELECTION, container);
            Self {
                segments,
                style,
                layout,
                container,
                scene,
            }
        }

        fn ctx(&self) -> SelectionContext<'_> {
            SelectionContext {
                segments: &self.segments,
                style: &self.style,
                layout: &self.layout,
                container: self.container,
                scene: &self.scene,
            }
        }
    }

    fn left_style() -> SegmentControlStyle {
        let mut style = SegmentControlStyle::default();
        style.distribution = Distribution::Left;
        style.segment.insets = Default::default();
        style
    }

    #[test]
    fn test_selection_state() {
        assert_eq!(SelectionState::from_index(-1, 3), SelectionState::Unselected);
        assert_eq!(SelectionState::from_index(3, 3), SelectionState::Unselected);
        assert_eq!(SelectionState::from_index(2, 3), SelectionState::Selected(2));
        assert_eq!(SelectionState::Selected(2).index(), Some(2));
    }

    #[test]
    fn test_first_selection_is_immediate() {
        let fixture = Fixture::new(&[60.0, 70.0, 90.0], left_style(), Size::new(300.0, 40.0));
        let controller = SelectionController::new();

        match controller.select(1, &fixture.ctx()) {
            SelectionOutcome::Changed {
                new,
                old,
                transaction,
            } => {
                assert_eq!((new, old), (1, -1));
                assert!(!transaction.is_animated());
                assert_eq!(
                    transaction.frame_for(LayerRole::Cover),
                    Some(Rect::new(60.0, 0.0, 70.0, 40.0))
                );
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(controller.selected_index(), 1);
    }

    #[test]
    fn test_change_between_valid_indices_animates() {
        let fixture = Fixture::new(&[60.0, 70.0, 90.0], left_style(), Size::new(300.0, 40.0));
        let controller = SelectionController::new();
        controller.select(0, &fixture.ctx());

        match controller.select(2, &fixture.ctx()) {
            SelectionOutcome::Changed { transaction, .. } => {
                let spec = transaction.animation().unwrap();
                assert_eq!(spec.duration, Duration::from_millis(150));
                // Content fits, so no scrolling.
                assert_eq!(transaction.scroll_target(), None);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_disabled_animation_is_immediate() {
        let mut style = left_style();
        style.animation.enabled = false;
        let fixture = Fixture::new(&[60.0, 70.0], style, Size::new(300.0, 40.0));
        let controller = SelectionController::new();
        controller.select(0, &fixture.ctx());

        match controller.select(1, &fixture.ctx()) {
            SelectionOutcome::Changed { transaction, .. } => assert!(!transaction.is_animated()),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_overflow_scrolls_to_centre_segment() {
        let fixture = Fixture::new(
            &[100.0, 100.0, 100.0, 100.0, 100.0],
            left_style(),
            Size::new(300.0, 40.0),
        );
        let controller = SelectionController::new();
        controller.select(0, &fixture.ctx());

        match controller.select(3, &fixture.ctx()) {
            SelectionOutcome::Changed { transaction, .. } => {
                assert_eq!(
                    transaction.scroll_target(),
                    Some(Rect::new(200.0, 0.0, 300.0, 40.0))
                );
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_same_index_is_unchanged() {
        let fixture = Fixture::new(&[60.0, 70.0], left_style(), Size::new(300.0, 40.0));
        let controller = SelectionController::new();

        assert!(matches!(
            controller.select(1, &fixture.ctx()),
            SelectionOutcome::Changed { .. }
        ));
        assert_eq!(
            controller.select(1, &fixture.ctx()),
            SelectionOutcome::Unchanged
        );
        assert_eq!(
            controller.select(NO_SELECTION, &fixture.ctx()),
            SelectionOutcome::Cleared {
                transaction: collapse_indicators(&fixture.scene)
            }
        );
    }

    #[test]
    fn test_out_of_range_collapses_in_place() {
        let mut style = left_style();
        style.indicator = IndicatorStyle::Strip;
        let mut fixture = Fixture::new(&[60.0, 70.0], style, Size::new(300.0, 40.0));
        fixture.scene = build_scene(
            &fixture.segments,
            &fixture.layout,
            &fixture.style,
            1,
            fixture.container,
        );
        let controller = SelectionController::new();
        controller.select(1, &fixture.ctx());

        match controller.select(5, &fixture.ctx()) {
            SelectionOutcome::Cleared { transaction } => {
                assert!(!transaction.is_animated());
                let strip = transaction.frame_for(LayerRole::Strip).unwrap();
                assert_eq!(strip, Rect::new(60.0, 37.0, 0.0, 3.0));
                // Cover style is not in use, so there is no cover layer.
                assert_eq!(transaction.frame_for(LayerRole::Cover), None);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(controller.selected_index(), 5);
        assert_eq!(controller.state(2), SelectionState::Unselected);
    }

    #[test]
    fn test_strip_color_cycle_and_text_colors() {
        let mut style = left_style();
        style.indicator = IndicatorStyle::Strip;
        style.strip.colors = vec![Color::RED, Color::BLUE];
        let measure = ApproximateTextMeasure::new();
        let container = Size::new(600.0, 40.0);
        let mut segments: Vec<SegmentModel> = ["A", "B", "C", "D", "E", "F"]
            .into_iter()
            .map(|text| SegmentModel::new(text.into()))
            .collect();
        let layout = LayoutEngine::new(&measure).layout(&mut segments, &style.layout_config(container));
        let scene = build_scene(&segments, &layout, &style, NO_SELECTION, container);
        let ctx = SelectionContext {
            segments: &segments,
            style: &style,
            layout: &layout,
            container,
            scene: &scene,
        };

        let controller = SelectionController::new();
        controller.select(4, &ctx);
        match controller.select(5, &ctx) {
            SelectionOutcome::Changed { transaction, .. } => {
                let changes = transaction.changes();
                assert!(changes.contains(&LayerChange::Background {
                    role: LayerRole::Strip,
                    color: Color::BLUE,
                }));
                assert!(changes.contains(&LayerChange::Foreground {
                    role: LayerRole::Content(4),
                    color: style.segment.foreground,
                }));
                assert!(changes.contains(&LayerChange::Foreground {
                    role: LayerRole::Content(5),
                    color: style.segment.foreground_selected,
                }));
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_styled_text_and_icon_foregrounds() {
        let style = left_style();
        let measure = ApproximateTextMeasure::new();
        let container = Size::new(600.0, 40.0);
        let contents: Vec<SegmentContent> = vec![
            StyledText::new("Sale", Color::RED, Color::BLUE).into(),
            Icon::with_size(Size::new(24.0, 24.0)).into(),
            "Home".into(),
        ];
        let mut segments: Vec<SegmentModel> = contents.into_iter().map(SegmentModel::new).collect();
        let layout = LayoutEngine::new(&measure).layout(&mut segments, &style.layout_config(container));
        let scene = build_scene(&segments, &layout, &style, NO_SELECTION, container);
        let ctx = SelectionContext {
            segments: &segments,
            style: &style,
            layout: &layout,
            container,
            scene: &scene,
        };
        let foregrounds = |outcome: SelectionOutcome| match outcome {
            SelectionOutcome::Changed { transaction, .. } => transaction
                .changes()
                .iter()
                .filter_map(|change| match change {
                    LayerChange::Foreground { role, color } => Some((*role, *color)),
                    _ => None,
                })
                .collect::<Vec<_>>(),
            other => panic!("unexpected outcome {other:?}"),
        };

        let controller = SelectionController::new();
        assert_eq!(
            foregrounds(controller.select(0, &ctx)),
            vec![(LayerRole::Content(0), Color::BLUE)]
        );
        assert_eq!(
            foregrounds(controller.select(2, &ctx)),
            vec![
                (LayerRole::Content(0), Color::RED),
                (LayerRole::Content(2), style.segment.foreground_selected),
            ]
        );
        assert_eq!(
            foregrounds(controller.select(1, &ctx)),
            vec![(LayerRole::Content(2), style.segment.foreground)]
        );
        assert_eq!(
            foregrounds(controller.select(0, &ctx)),
            vec![(LayerRole::Content(0), Color::BLUE)]
        );
    }
}
