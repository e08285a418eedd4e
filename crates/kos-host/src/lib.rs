//! kOS host crate: the render-side half of script GUIs
//!
//! Holds the widget mirror that the host's render loop draws each frame and
//! the loop that reconciles it with the script side. Nothing here runs
//! script code; delegates fire in `Gui::sync` on the script side.

pub mod render_loop;
pub mod tree;
pub mod ui;

pub use kos_core::{Gui, GuiConfig, KosResult};
pub use render_loop::{FrameStats, RenderLoop};
pub use tree::{ButtonView, Node, NodeKind, RenderTree};
pub use ui::{DrawCall, ImmediateUi, ScriptedUi};

/// Create a GUI and the render loop linked to it
pub fn attach(config: GuiConfig) -> (Gui, RenderLoop) {
    let (script, render) = kos_core::link();
    let render_loop = RenderLoop::new(&config, render);
    (Gui::new(config, script), render_loop)
}

/// Run one render frame and then let the script side catch up.
pub fn step<U: ImmediateUi>(gui: &mut Gui, render: &mut RenderLoop, ui: &mut U) -> KosResult<FrameStats> {
    let stats = render.frame(ui);
    gui.sync()?;
    Ok(stats)
}
