//! Drag gestures as scoped pointer subscriptions.
//!
//! A gesture registers one global pointer subscription when it starts and
//! releases it when the gesture value is dropped. [`PointerCapture`] holds
//! at most one gesture and hands it out by value on release, so a gesture
//! cannot outlive its pointer-up and listeners cannot pile up across drags.

use std::cell::Cell;
use std::rc::Rc;

use crate::panel::PanelId;

// =============================================================================
// LISTENER REGISTRY
// =============================================================================

/// Registry of active global pointer subscriptions.
///
/// The host consults [`PointerListeners::active`] to decide whether pointer
/// moves outside a panel should be routed to the drag code at all.
#[derive(Debug, Clone, Default)]
pub struct PointerListeners {
    active: Rc<Cell<usize>>,
}

impl PointerListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscription; it is released when the guard drops.
    pub fn subscribe(&self) -> Subscription {
        self.active.set(self.active.get() + 1);
        Subscription {
            active: Rc::clone(&self.active),
        }
    }

    /// Number of live subscriptions.
    pub fn active(&self) -> usize {
        self.active.get()
    }
}

/// Guard for one registered pointer subscription.
#[derive(Debug)]
pub struct Subscription {
    active: Rc<Cell<usize>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.set(self.active.get().saturating_sub(1));
    }
}

// =============================================================================
// GESTURE
// =============================================================================

/// One pointer-down to pointer-up drag on a panel's handle.
#[derive(Debug)]
pub struct DragGesture {
    panel: PanelId,
    start_y: f64,
    start_size: f64,
    _subscription: Subscription,
}

impl DragGesture {
    pub fn panel(&self) -> PanelId {
        self.panel
    }

    pub fn start_y(&self) -> f64 {
        self.start_y
    }

    pub fn start_size(&self) -> f64 {
        self.start_size
    }

    /// Size for pointer position `y`, always re-based on the drag-start size.
    pub fn target_size(&self, y: f64) -> f64 {
        self.start_size + (y - self.start_y)
    }
}

// =============================================================================
// CAPTURE
// =============================================================================

/// Owner of the (at most one) active drag gesture.
#[derive(Debug, Default)]
pub struct PointerCapture {
    listeners: PointerListeners,
    active: Option<DragGesture>,
}

impl PointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture. A gesture that never saw its pointer-up is ended first.
    ///
    /// Returns the stale gesture's panel if one was replaced.
    pub fn begin(&mut self, panel: PanelId, start_y: f64, start_size: f64) -> Option<PanelId> {
        let stale = self.end();
        if let Some(prev) = stale {
            tracing::debug!(%prev, "ending stale drag gesture");
        }
        self.active = Some(DragGesture {
            panel,
            start_y,
            start_size,
            _subscription: self.listeners.subscribe(),
        });
        tracing::debug!(%panel, start_y, start_size, "drag gesture started");
        stale
    }

    /// Target `(panel, size)` for a pointer move, or `None` when idle.
    pub fn on_move(&self, y: f64) -> Option<(PanelId, f64)> {
        self.active
            .as_ref()
            .map(|gesture| (gesture.panel, gesture.target_size(y)))
    }

    /// End the active gesture, releasing its subscription.
    pub fn end(&mut self) -> Option<PanelId> {
        let gesture = self.active.take()?;
        let panel = gesture.panel;
        drop(gesture);
        tracing::debug!(%panel, "drag gesture ended");
        Some(panel)
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn gesture(&self) -> Option<&DragGesture> {
        self.active.as_ref()
    }

    pub fn listeners(&self) -> &PointerListeners {
        &self.listeners
    }
}

// =============================================================================
// TESTS
// =============================================================================
