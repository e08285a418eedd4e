//! kOS Core Library
//!
//! Script value model, suffix dispatch and the script-side half of kOS GUI
//! widgets. The render-side half lives in `kos-host`.

pub mod communicate;
pub mod config;
pub mod delegate;
pub mod error;
pub mod gui;
pub mod structure;
pub mod value;
pub mod widget;

// Re-export commonly used types
pub use communicate::{link, RenderPort, ScriptPort, ToRender, ToScript};
pub use config::GuiConfig;
pub use delegate::Delegate;
pub use error::{KosError, KosResult};
pub use gui::Gui;
pub use structure::Structure;
pub use value::{BooleanValue, Convertible, Primitive, PrimitiveKind, Value};
pub use widget::{WidgetId, WidgetKind, WidgetSpec, WidgetStyle};
