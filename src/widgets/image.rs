use floem::{HasViewId, prelude::*};

use crate::{
    assets::ImageAsset,
    orientation::Orientation,
    state::{StateStore, WidgetKey},
};

pub const IMAGE_PADDING: f64 = 16.0;
pub const IMAGE_KEY: WidgetKey = WidgetKey::new("responsive-image");
/// Name the image view carries in floem's inspector.
pub const IMAGE_DESCRIPTION: &str = "Sample Image";

/// Edge length of the square the image is drawn in.
pub fn image_edge(orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Landscape => 200.0,
        Orientation::Portrait => 100.0,
    }
}

/// Draws `image` in an `edge` x `edge` square.
pub fn responsive_image(
    image: &ImageAsset,
    edge: f64,
    store: &StateStore,
) -> impl IntoView + use<> {
    let bytes = image.bytes().to_vec();
    let view = img(move || bytes.clone())
        .style(move |s| s.size(edge, edge).flex_shrink(0.0).padding(IMAGE_PADDING))
        .debug_name(IMAGE_DESCRIPTION);
    store.bind_view(IMAGE_KEY, view.view_id());
    view
}
