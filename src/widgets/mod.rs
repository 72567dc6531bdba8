//! Leaf widgets shared by every layout preset.
//!
//! Only [`responsive_button`] holds state, and that state lives in the
//! [`StateStore`] rather than in the view, so presets can rebuild these
//! widgets freely.

mod boxes;
mod button;
mod image;
mod list;

pub use boxes::{
    BOX_BORDER, BOX_COUNT, BOX_EDGE, BOX_GROUP_KEY, BOX_GROUP_PADDING, BOX_KEYS, BoxAxis,
    box_labels, responsive_boxes,
};
pub use button::{
    BUTTON_PADDING, BUTTON_WIDTH, COUNTER_KEY, CounterState, counter_label, responsive_button,
};
pub use image::{IMAGE_DESCRIPTION, IMAGE_KEY, IMAGE_PADDING, image_edge, responsive_image};
pub use list::{
    ITEM_FONT_SIZE, ITEM_HEIGHT, ITEM_PADDING, LIST_ITEM_COUNT, LIST_PADDING, StaticListModel,
    responsive_list, side_pane_list,
};

use crate::{assets::Assets, state::StateStore};

/// Handles the leaf widgets need while a preset is being built.
#[derive(Clone)]
pub struct WidgetContext {
    pub assets: Assets,
    pub store: StateStore,
}
