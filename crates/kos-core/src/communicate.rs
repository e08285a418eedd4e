//! Script/render communication
//!
//! Script execution and the host's render loop never touch each other's
//! fields. Each side owns its state and posts messages to the other; the
//! receiver applies them at its own sync point (the render side once per
//! frame, the script side in `Gui::sync`). Queues are FIFO per direction.

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::{trace, warn};

use crate::widget::{WidgetId, WidgetSpec};

/// Script -> render
#[derive(Debug, Clone, PartialEq)]
pub enum ToRender {
    /// A widget was added to the tree
    Spawn(WidgetSpec),

    SetText { id: WidgetId, text: String },

    /// Toggle/exclusive mode changed on a button
    Configure {
        id: WidgetId,
        toggle: bool,
        exclusive: bool,
    },

    /// Reconcile a button's visible-pressed state with its logical state
    SetPressedVisible { id: WidgetId, on: bool },
}

impl ToRender {
    pub fn widget(&self) -> WidgetId {
        match self {
            ToRender::Spawn(spec) => spec.id,
            ToRender::SetText { id, .. }
            | ToRender::Configure { id, .. }
            | ToRender::SetPressedVisible { id, .. } => *id,
        }
    }
}

/// Render -> script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToScript {
    /// Visible state changed on the render side; bring logical state along
    SyncPressed { id: WidgetId, on: bool },

    /// A push button was clicked
    Clicked { id: WidgetId },

    /// A toggle button was flipped by the user
    Toggled { id: WidgetId, on: bool },
}

impl ToScript {
    pub fn widget(&self) -> WidgetId {
        match self {
            ToScript::SyncPressed { id, .. }
            | ToScript::Clicked { id }
            | ToScript::Toggled { id, .. } => *id,
        }
    }
}

/// Sending half of one direction
#[derive(Debug)]
pub struct Outbox<M> {
    tx: Sender<M>,
}

impl<M> Clone for Outbox<M> {
    fn clone(&self) -> Self {
        Outbox { tx: self.tx.clone() }
    }
}

impl<M: std::fmt::Debug> Outbox<M> {
    /// Post a message. A closed peer (e.g. a window already torn down) is not
    /// an error for the poster; the message is dropped.
    pub fn post(&self, msg: M) {
        trace!("post {:?}", msg);
        if let Err(err) = self.tx.send(msg) {
            warn!("peer gone, dropping {:?}", err.into_inner());
        }
    }
}

/// Receiving half of one direction
#[derive(Debug)]
pub struct Inbox<M> {
    rx: Receiver<M>,
}

impl<M> Inbox<M> {
    /// Take the next pending message, if any
    pub fn try_next(&self) -> Option<M> {
        match self.rx.try_recv() {
            Ok(msg) => Some(msg),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Take up to `budget` pending messages, oldest first
    pub fn drain(&self, budget: usize) -> Vec<M> {
        let mut out = Vec::with_capacity(budget.min(self.rx.len()));
        while out.len() < budget {
            match self.try_next() {
                Some(msg) => out.push(msg),
                None => break,
            }
        }
        out
    }

    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

/// Script side endpoints
#[derive(Debug)]
pub struct ScriptPort {
    pub outbox: Outbox<ToRender>,
    pub inbox: Inbox<ToScript>,
}

/// Render side endpoints
#[derive(Debug)]
pub struct RenderPort {
    pub outbox: Outbox<ToScript>,
    pub inbox: Inbox<ToRender>,
}

/// Create a connected pair of ports
pub fn link() -> (ScriptPort, RenderPort) {
    let (to_render_tx, to_render_rx) = unbounded();
    let (to_script_tx, to_script_rx) = unbounded();
    (
        ScriptPort {
            outbox: Outbox { tx: to_render_tx },
            inbox: Inbox { rx: to_script_rx },
        },
        RenderPort {
            outbox: Outbox { tx: to_script_tx },
            inbox: Inbox { rx: to_render_rx },
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_respects_budget_and_order() {
        let (script, render) = link();
        for i in 0..5 {
            script.outbox.post(ToRender::SetPressedVisible {
                id: WidgetId(i),
                on: true,
            });
        }
        let first = render.inbox.drain(3);
        assert_eq!(first.len(), 3);
        assert_eq!(
            first[0],
            ToRender::SetPressedVisible {
                id: WidgetId(0),
                on: true
            }
        );
        assert_eq!(render.inbox.pending(), 2);
        let rest = render.inbox.drain(10);
        assert_eq!(
            rest.last(),
            Some(&ToRender::SetPressedVisible {
                id: WidgetId(4),
                on: true
            })
        );
    }

    #[test]
    fn posting_to_a_dropped_peer_is_silent() {
        let (script, render) = link();
        drop(render);
        script.outbox.post(ToRender::SetText {
            id: WidgetId(0),
            text: "gone".into(),
        });
        assert!(script.inbox.try_next().is_none());
    }
}
