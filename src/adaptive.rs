//! The adaptive root view.
//!
//! The root fills the window and measures itself on every layout. Each
//! measurement is turned into an [`Environment`]; the preset subtree is keyed
//! on the environment's `(SizeClass, Orientation)` pair and rebuilt only when
//! that pair changes.

use floem::{
    prelude::*,
    reactive::{Memo, create_memo},
};

use crate::{
    assets::Assets,
    config::AppConfig,
    orientation::{Orientation, OrientationProbe},
    presets::layout_for,
    size_class::{ScreenMeasurement, SizeClass},
    state::StateStore,
    widgets::WidgetContext,
};

/// Inputs of a single render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub measurement: ScreenMeasurement,
    pub orientation: Orientation,
    pub size_class: SizeClass,
}

impl Environment {
    pub fn measure(config: &AppConfig, measurement: ScreenMeasurement) -> Self {
        Self {
            measurement,
            orientation: config.orientation.orientation(measurement),
            size_class: config.breakpoints.classify(measurement),
        }
    }

    /// The part of the environment that selects a preset.
    pub fn layout_key(&self) -> (SizeClass, Orientation) {
        (self.size_class, self.orientation)
    }
}

pub struct AdaptiveRoot {
    config: AppConfig,
    assets: Assets,
    store: StateStore,
    environment: RwSignal<Environment>,
}

impl AdaptiveRoot {
    /// Must be called inside the scope that should own widget state, which
    /// for an application is the window's root scope.
    pub fn new(config: AppConfig, assets: Assets) -> Self {
        let initial = Environment::measure(&config, config.window.size().into());
        tracing::info!(
            size_class = %initial.size_class,
            orientation = %initial.orientation,
            "initial environment from configured window size"
        );
        Self {
            config,
            assets,
            store: StateStore::new(),
            environment: RwSignal::new(initial),
        }
    }

    pub fn environment(&self) -> RwSignal<Environment> {
        self.environment
    }

    pub fn store(&self) -> StateStore {
        self.store.clone()
    }

    pub fn layout_key(&self) -> (SizeClass, Orientation) {
        self.environment.with_untracked(Environment::layout_key)
    }

    /// Feeds a new measurement in. Returns `true` when the preset changes.
    pub fn remeasure(&self, measurement: ScreenMeasurement) -> bool {
        remeasure(&self.config, self.environment, measurement)
    }

    pub fn into_view(self) -> impl IntoView {
        let AdaptiveRoot {
            config,
            assets,
            store,
            environment,
        } = self;
        let cx = WidgetContext { assets, store };

        let layout_key: Memo<(SizeClass, Orientation)> =
            create_memo(move |_| environment.with(Environment::layout_key));

        dyn_container(
            move || layout_key.get(),
            move |(size_class, orientation)| {
                cx.store.clear_views();
                layout_for(size_class, orientation, &cx)
            },
        )
        .style(|s| s.size_full())
        .on_resize(move |rect| {
            remeasure(&config, environment, rect.size().into());
        })
    }
}

fn remeasure(
    config: &AppConfig,
    environment: RwSignal<Environment>,
    measurement: ScreenMeasurement,
) -> bool {
    let previous = environment.get_untracked();
    if previous.measurement == measurement {
        return false;
    }
    let next = Environment::measure(config, measurement);
    tracing::trace!(%measurement, "remeasured");

    let changed = previous.layout_key() != next.layout_key();
    if changed {
        tracing::debug!(
            %measurement,
            from = ?previous.layout_key(),
            to = ?next.layout_key(),
            "switching layout preset"
        );
    }
    environment.set(next);
    changed
}

/// Builds the adaptive root for a window.
pub fn adaptive_app(config: AppConfig, assets: Assets) -> impl IntoView {
    AdaptiveRoot::new(config, assets).into_view()
}
