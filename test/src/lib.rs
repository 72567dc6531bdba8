//! Testing utilities for the adaptive layouts application.
//!
//! [`AppFixture`] mounts the real root view in floem's headless harness so
//! tests can resize the "window" and click widgets without a display.
//!
//! # Example
//!
//! ```rust,ignore
//! use adaptive_layouts_test::prelude::*;
//! use serial_test::serial;
//!
//! #[test]
//! #[serial]
//! fn test_rotation_keeps_clicks() {
//!     let mut app = AppFixture::new(300.0, 600.0);
//!     app.click_counter();
//!     app.resize(600.0, 300.0);
//!     assert_eq!(app.counter().count(), 1);
//! }
//! ```

use adaptive_layouts::{
    AdaptiveRoot, AppConfig, Assets, Environment, Orientation, SizeClass, StateStore, WidgetKey,
    widgets::{COUNTER_KEY, CounterState},
};
use floem::{ViewId, kurbo::Rect, prelude::*};
use floem_test::TestHarness;

/// Prelude module for convenient imports in tests.
pub mod prelude {
    pub use super::AppFixture;
    pub use adaptive_layouts::{
        AppConfig, Orientation, OrientationSource, PresetStyle, ScreenMeasurement, SizeClass,
        WidgetKey,
        presets::{MAIN_PANE_KEY, SIDE_PANE_KEY, SPLIT_ROW_KEY},
        widgets::{
            BOX_EDGE, BOX_GROUP_KEY, BOX_KEYS, COUNTER_KEY, CounterState, IMAGE_KEY, counter_label,
        },
    };
    pub use floem::prelude::*;
    pub use floem_test::TestHarness;
}

/// The application root mounted in a headless window.
pub struct AppFixture {
    pub harness: TestHarness,
    environment: RwSignal<Environment>,
    store: StateStore,
}

impl AppFixture {
    /// Mount with the bundled configuration at the given window size.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_config(AppConfig::default(), width, height)
    }

    pub fn with_config(config: AppConfig, width: f64, height: f64) -> Self {
        let assets = Assets::bundled().expect("bundled assets resolve");
        let root = AdaptiveRoot::new(config, assets);
        let environment = root.environment();
        let store = root.store();

        let harness = TestHarness::new_with_size(root.into_view(), width, height);
        let mut fixture = Self {
            harness,
            environment,
            store,
        };
        fixture.settle();
        fixture
    }

    /// Runs update passes until the resize-driven preset swap has landed.
    fn settle(&mut self) {
        // layout -> on_resize -> environment -> dyn_container rebuild -> layout
        self.harness.rebuild();
        self.harness.rebuild();
    }

    /// Simulates the host resizing or rotating the window.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.harness.set_size(width, height);
        self.settle();
    }

    pub fn environment(&self) -> Environment {
        self.environment.get_untracked()
    }

    pub fn layout_key(&self) -> (SizeClass, Orientation) {
        self.environment().layout_key()
    }

    pub fn counter(&self) -> CounterState {
        CounterState::from_store(&self.store)
    }

    /// The view currently rendering the counter button.
    pub fn counter_view(&self) -> Option<ViewId> {
        self.view(COUNTER_KEY)
    }

    /// The live view bound to `key` by the current preset, if it has one.
    pub fn view(&self, key: WidgetKey) -> Option<ViewId> {
        self.store.view(key)
    }

    /// Window-space layout rectangle of the live view bound to `key`.
    ///
    /// # Panics
    ///
    /// Panics if the current preset does not render `key`.
    pub fn rect(&self, key: WidgetKey) -> Rect {
        let id = self
            .view(key)
            .unwrap_or_else(|| panic!("{key} is not rendered by the current preset"));
        self.harness.get_layout_rect(id)
    }

    /// Clicks the centre of the live counter button.
    pub fn click_counter(&mut self) {
        let center = self.rect(COUNTER_KEY).center();
        self.harness.click(center.x, center.y);
        self.harness.rebuild();
    }
}
