//! The three layout presets.
//!
//! Every preset arranges the same leaf widgets; presets differ only in the
//! heading text, heading font size and outer padding. Orientation decides the
//! arrangement:
//!
//! - portrait: one centred column of heading, image, boxes, button and list;
//! - landscape: a split pane with the list in a narrow side pane (20%) and the
//!   rest in an independently scrolling main pane (80%), where the image and
//!   the boxes sit side by side.
//!
//! [`LayoutPlan`] is the pure description of that choice; [`preset_view`]
//! turns a plan into views.

use floem::{AnyView, HasViewId, prelude::*};

use crate::{
    orientation::Orientation,
    size_class::SizeClass,
    state::WidgetKey,
    widgets::{
        BoxAxis, WidgetContext, image_edge, responsive_boxes, responsive_button, responsive_image,
        responsive_list, side_pane_list,
    },
};

pub const SIDE_PANE_WEIGHT: f32 = 0.2;
pub const MAIN_PANE_WEIGHT: f32 = 0.8;
pub const PANE_PADDING: f64 = 8.0;
pub const SPLIT_ROW_KEY: WidgetKey = WidgetKey::new("split-pane");
pub const SIDE_PANE_KEY: WidgetKey = WidgetKey::new("split-pane.side");
pub const MAIN_PANE_KEY: WidgetKey = WidgetKey::new("split-pane.main");

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetStyle {
    pub heading_font_size: f64,
    pub padding: f64,
}

impl PresetStyle {
    pub const SMALL: PresetStyle = PresetStyle {
        heading_font_size: 20.0,
        padding: 16.0,
    };
    pub const MEDIUM: PresetStyle = PresetStyle {
        heading_font_size: 24.0,
        padding: 16.0,
    };
    pub const LARGE: PresetStyle = PresetStyle {
        heading_font_size: 28.0,
        padding: 32.0,
    };

    pub fn for_class(class: SizeClass) -> Self {
        match class {
            SizeClass::Small => Self::SMALL,
            SizeClass::Medium => Self::MEDIUM,
            SizeClass::Large => Self::LARGE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrangement {
    SingleColumn,
    SplitPane,
}

impl From<Orientation> for Arrangement {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => Arrangement::SingleColumn,
            Orientation::Landscape => Arrangement::SplitPane,
        }
    }
}

/// Everything that varies between preset renders, computed up front.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    pub size_class: SizeClass,
    pub orientation: Orientation,
    pub style: PresetStyle,
    pub heading: String,
    pub arrangement: Arrangement,
    pub image_edge: f64,
    pub box_axis: BoxAxis,
}

impl LayoutPlan {
    pub fn new(size_class: SizeClass, orientation: Orientation) -> Self {
        let heading = match orientation {
            Orientation::Portrait => format!("{} Screen Layout", size_class.label()),
            Orientation::Landscape => format!("{} Screen Landscape Mode", size_class.label()),
        };
        Self {
            size_class,
            orientation,
            style: PresetStyle::for_class(size_class),
            heading,
            arrangement: orientation.into(),
            image_edge: image_edge(orientation),
            box_axis: orientation.into(),
        }
    }
}

fn heading(plan: &LayoutPlan) -> impl IntoView + use<> {
    let PresetStyle {
        heading_font_size,
        padding,
    } = plan.style;
    text(plan.heading.clone()).style(move |s| s.font_size(heading_font_size).padding(padding))
}

fn single_column(plan: &LayoutPlan, cx: &WidgetContext) -> AnyView {
    let padding = plan.style.padding;
    (
        heading(plan),
        responsive_image(&cx.assets.image, plan.image_edge, &cx.store),
        responsive_boxes(plan.box_axis, &cx.store),
        responsive_button(&cx.store),
        responsive_list(),
    )
        .v_stack()
        .style(move |s| s.size_full().padding(padding).items_center())
        .into_any()
}

fn split_pane(plan: &LayoutPlan, cx: &WidgetContext) -> AnyView {
    let padding = plan.style.padding;

    let side = side_pane_list().container().style(|s| {
        s.flex_basis(0)
            .flex_grow(SIDE_PANE_WEIGHT)
            .min_width(0)
            .height_full()
            .padding(PANE_PADDING)
    });
    cx.store.bind_view(SIDE_PANE_KEY, side.view_id());

    let main = (
        heading(plan),
        (
            responsive_image(&cx.assets.image, plan.image_edge, &cx.store),
            responsive_boxes(plan.box_axis, &cx.store),
        )
            .h_stack()
            .style(|s| s.items_center()),
        responsive_button(&cx.store),
    )
        .v_stack()
        .style(|s| s.width_full().items_center())
        .scroll()
        .style(|s| {
            s.flex_basis(0)
                .flex_grow(MAIN_PANE_WEIGHT)
                .min_width(0)
                .height_full()
                .padding(PANE_PADDING)
        });
    cx.store.bind_view(MAIN_PANE_KEY, main.view_id());

    let row = (side, main)
        .h_stack()
        .style(move |s| s.size_full().padding(padding).justify_evenly());
    cx.store.bind_view(SPLIT_ROW_KEY, row.view_id());
    row.into_any()
}

/// Builds the views for `plan`.
pub fn preset_view(plan: &LayoutPlan, cx: &WidgetContext) -> AnyView {
    tracing::trace!(heading = %plan.heading, arrangement = ?plan.arrangement, "building preset");
    match plan.arrangement {
        Arrangement::SingleColumn => single_column(plan, cx),
        Arrangement::SplitPane => split_pane(plan, cx),
    }
}

pub fn small_layout(orientation: Orientation, cx: &WidgetContext) -> AnyView {
    preset_view(&LayoutPlan::new(SizeClass::Small, orientation), cx)
}

pub fn medium_layout(orientation: Orientation, cx: &WidgetContext) -> AnyView {
    preset_view(&LayoutPlan::new(SizeClass::Medium, orientation), cx)
}

pub fn large_layout(orientation: Orientation, cx: &WidgetContext) -> AnyView {
    preset_view(&LayoutPlan::new(SizeClass::Large, orientation), cx)
}

/// Dispatches to the preset for `size_class`.
pub fn layout_for(size_class: SizeClass, orientation: Orientation, cx: &WidgetContext) -> AnyView {
    match size_class {
        SizeClass::Small => small_layout(orientation, cx),
        SizeClass::Medium => medium_layout(orientation, cx),
        SizeClass::Large => large_layout(orientation, cx),
    }
}
