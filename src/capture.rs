//! Pointer capture - the process-wide move/up subscriptions held during a gesture.
//!
//! While a drag or resize is in flight the pointer routinely leaves the
//! overlay's bounds, so the controller needs the window-level move/up stream.
//! The host owns one [`PointerCapture`] per window and hands clones to its
//! controllers. A controller acquires a [`CaptureGuard`] when a session begins
//! and the guard unsubscribes on drop, which covers every exit path: `end`,
//! cancellation, teardown and dropping the controller itself.
//!
//! ## Lifecycle
//!
//! ```text
//! begin()  -> capture.acquire(owner)   (count + 1)
//! end()    -> guard dropped            (count - 1)
//! cancel() -> guard dropped            (count - 1)
//! drop     -> guard dropped            (count - 1)
//! ```

use crate::pointer::PointerKind;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// Opaque id of one live subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone)]
struct Subscription {
    owner: &'static str,
    kind: PointerKind,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    live: HashMap<SubscriptionId, Subscription>,
}

/// Shared handle to the window's listener registry.
#[derive(Debug, Clone, Default)]
pub struct PointerCapture {
    registry: Arc<Mutex<Registry>>,
}

impl PointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to global move/up (or touchmove/touchend) events.
    pub fn acquire(&self, owner: &'static str, kind: PointerKind) -> CaptureGuard {
        let mut registry = self.registry.lock();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.live.insert(id, Subscription { owner, kind });
        trace!(owner, ?kind, live = registry.live.len(), "Pointer capture acquired");

        CaptureGuard {
            id,
            registry: Arc::clone(&self.registry),
        }
    }

    /// Number of subscriptions currently held across all controllers.
    pub fn active_subscriptions(&self) -> usize {
        self.registry.lock().live.len()
    }

    /// True while any controller is tracking a gesture.
    pub fn is_captured(&self) -> bool {
        self.active_subscriptions() > 0
    }

    /// Owners of the live subscriptions, for diagnostics.
    pub fn owners(&self) -> Vec<&'static str> {
        self.registry.lock().live.values().map(|s| s.owner).collect()
    }

    fn release(registry: &Mutex<Registry>, id: SubscriptionId) {
        let mut registry = registry.lock();
        if let Some(sub) = registry.live.remove(&id) {
            trace!(owner = sub.owner, kind = ?sub.kind, live = registry.live.len(), "Pointer capture released");
        }
    }
}

/// RAII subscription; releases exactly once when dropped.
#[derive(Debug)]
#[must_use = "dropping the guard releases the pointer capture immediately"]
pub struct CaptureGuard {
    id: SubscriptionId,
    registry: Arc<Mutex<Registry>>,
}

impl CaptureGuard {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        PointerCapture::release(&self.registry, self.id);
    }
}
