use floem::{AnyView, HasViewId, prelude::*};

use crate::{
    orientation::Orientation,
    state::{StateStore, WidgetKey},
};

pub const BOX_COUNT: usize = 3;
pub const BOX_EDGE: f64 = 100.0;
pub const BOX_BORDER: f64 = 5.0;
pub const BOX_GROUP_PADDING: f64 = 16.0;
pub const BOX_GROUP_KEY: WidgetKey = WidgetKey::new("responsive-boxes");
pub const BOX_KEYS: [WidgetKey; BOX_COUNT] = [
    WidgetKey::new("responsive-boxes.1"),
    WidgetKey::new("responsive-boxes.2"),
    WidgetKey::new("responsive-boxes.3"),
];

/// Direction the boxes are laid out in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxAxis {
    Row,
    Column,
}

impl From<Orientation> for BoxAxis {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Landscape => BoxAxis::Row,
            Orientation::Portrait => BoxAxis::Column,
        }
    }
}

pub fn box_labels() -> [String; BOX_COUNT] {
    std::array::from_fn(|idx| format!("Box {}", idx + 1))
}

fn bordered_box(label: String, key: WidgetKey, store: &StateStore) -> impl IntoView + use<> {
    let view = text(label).container().style(|s| {
        s.size(BOX_EDGE, BOX_EDGE)
            .aspect_ratio(1.0_f32)
            .flex_shrink(0.0)
            .border(BOX_BORDER)
            .border_color(palette::css::BLACK)
            .items_center()
            .justify_center()
    });
    store.bind_view(key, view.view_id());
    view
}

pub fn responsive_boxes(axis: BoxAxis, store: &StateStore) -> AnyView {
    let labels = box_labels();
    let [first, second, third] =
        std::array::from_fn(|idx| bordered_box(labels[idx].clone(), BOX_KEYS[idx], store));
    let group = match axis {
        BoxAxis::Row => (first, second, third)
            .h_stack()
            .style(|s| s.flex_grow(1.0).padding(BOX_GROUP_PADDING).justify_evenly())
            .into_any(),
        BoxAxis::Column => (first, second, third)
            .v_stack()
            .style(|s| s.width_full().padding(BOX_GROUP_PADDING).items_center())
            .into_any(),
    };
    store.bind_view(BOX_GROUP_KEY, group.view_id());
    group
}
