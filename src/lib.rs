//! # Adaptive Layouts
//!
//! A small floem application that rearranges the same handful of widgets
//! depending on the size and orientation of its window.
//!
//! The window's content area is measured on every layout and classified into a
//! [`SizeClass`] by a configurable [`Breakpoints`] table:
//!
//! | class    | width / height                                   |
//! |----------|--------------------------------------------------|
//! | `Small`  | either side at most 480                          |
//! | `Medium` | wider than 480 and at most 1024 tall             |
//! | `Large`  | wider than 480 and taller than 1024              |
//!
//! Together with the [`Orientation`] this picks one of three presets. Portrait
//! presets stack everything in one column; landscape presets split the window
//! into a narrow list pane and a wide content pane.
//!
//! ```rust,ignore
//! use adaptive_layouts::{AppConfig, Assets, adaptive_app};
//! use floem::Application;
//!
//! let config = AppConfig::bundled()?;
//! let assets = Assets::bundled()?;
//! let window = config.window_config();
//! Application::new()
//!     .window(move |_| adaptive_app(config, assets), Some(window))
//!     .run();
//! ```
//!
//! Widget state that has to survive a preset switch, such as the click
//! counter, is kept in a [`StateStore`] keyed by [`WidgetKey`] rather than in
//! the views themselves.

pub mod adaptive;
pub mod assets;
pub mod config;
pub mod error;
pub mod orientation;
pub mod presets;
pub mod size_class;
pub mod state;
pub mod widgets;

pub use adaptive::{AdaptiveRoot, Environment, adaptive_app};
pub use assets::{Assets, ImageAsset};
pub use config::{AppConfig, WindowSettings};
pub use error::{AssetError, ConfigError, Error, Result};
pub use orientation::{Orientation, OrientationProbe, OrientationSource};
pub use presets::{LayoutPlan, PresetStyle};
pub use size_class::{Breakpoints, ScreenMeasurement, SizeClass};
pub use state::{StateStore, WidgetKey};
