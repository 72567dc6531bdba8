use std::rc::Rc;

use floem::prelude::*;

pub const LIST_ITEM_COUNT: usize = 20;
pub const ITEM_FONT_SIZE: f64 = 18.0;
pub const ITEM_PADDING: f64 = 8.0;
// rows must share one height for the virtual stack
pub const ITEM_HEIGHT: f64 = ITEM_FONT_SIZE * 1.4 + 2.0 * ITEM_PADDING;
pub const LIST_PADDING: f64 = 16.0;

/// The fixed rows "Item 1" through "Item 20".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticListModel {
    items: Rc<[String]>,
}

impl Default for StaticListModel {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticListModel {
    pub fn new() -> Self {
        Self {
            items: (1..=LIST_ITEM_COUNT).map(|n| format!("Item {n}")).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn label(&self, idx: usize) -> Option<&str> {
        self.items.get(idx).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

/// Lazily materialised rows; only the ones inside the viewport get views.
fn rows(model: StaticListModel) -> impl IntoView {
    let count = model.len() as i32;
    VirtualStack::with_view(
        move || 0..count,
        move |idx| {
            let label = model.label(idx as usize).unwrap_or_default().to_string();
            text(label).style(|s| {
                s.font_size(ITEM_FONT_SIZE)
                    .padding(ITEM_PADDING)
                    .height(ITEM_HEIGHT)
                    .width_full()
            })
        },
    )
    .style(|s| s.flex_col().width_full())
}

/// Full-width list placed inline with the rest of the content.
pub fn responsive_list() -> impl IntoView {
    rows(StaticListModel::new()).scroll().style(|s| {
        s.width_full()
            .padding(LIST_PADDING)
            .flex_grow(1.0)
            .flex_basis(0)
            .min_height(0)
    })
}

/// The list as the narrow pane of a split layout. Sizing within the row is
/// left to the caller.
pub fn side_pane_list() -> impl IntoView {
    rows(StaticListModel::new())
        .scroll()
        .style(|s| s.height_full())
}
