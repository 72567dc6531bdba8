//! Widget state keyed by logical identity.
//!
//! Signals created while a layout preset is being built belong to the preset's
//! scope, and `dyn_container` disposes that scope whenever the preset is
//! swapped. State that must outlive a swap is created through a
//! [`StateStore`] instead: the store owns a scope of its own (normally the
//! root view's) and hands out the same signal for the same [`WidgetKey`] no
//! matter where in the tree the widget currently sits.

use std::{any::Any, cell::RefCell, fmt, rc::Rc};

use floem::{
    ViewId,
    reactive::{RwSignal, Scope},
};
use rustc_hash::FxHashMap;

/// Stable identifier of a stateful widget.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WidgetKey(&'static str);

impl WidgetKey {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

impl fmt::Display for WidgetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

struct StoreInner {
    scope: Scope,
    slots: RefCell<FxHashMap<WidgetKey, Box<dyn Any>>>,
    views: RefCell<FxHashMap<WidgetKey, ViewId>>,
}

/// Identity-keyed signal store. Cheap to clone; clones share storage.
#[derive(Clone)]
pub struct StateStore {
    inner: Rc<StoreInner>,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore {
    /// Creates a store whose signals live in the current reactive scope.
    pub fn new() -> Self {
        Self::in_scope(Scope::current())
    }

    pub fn in_scope(scope: Scope) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                scope,
                slots: RefCell::new(FxHashMap::default()),
                views: RefCell::new(FxHashMap::default()),
            }),
        }
    }

    /// Returns the signal stored under `key`, creating it with `init` on first
    /// use. `init` is not called when the key already holds a signal.
    pub fn signal<T: 'static>(&self, key: WidgetKey, init: impl FnOnce() -> T) -> RwSignal<T> {
        if let Some(signal) = self
            .inner
            .slots
            .borrow()
            .get(&key)
            .and_then(|slot| slot.downcast_ref::<RwSignal<T>>())
        {
            return *signal;
        }

        if self.inner.slots.borrow().contains_key(&key) {
            tracing::warn!(%key, "widget key reused with a different state type, replacing");
        }

        let signal = self.inner.scope.create_rw_signal(init());
        self.inner.slots.borrow_mut().insert(key, Box::new(signal));
        tracing::trace!(%key, "created widget state");
        signal
    }

    pub fn contains(&self, key: WidgetKey) -> bool {
        self.inner.slots.borrow().contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.inner.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records which view currently renders the widget for `key`.
    ///
    /// The mapping is replaced on every rebuild; together with
    /// [`StateStore::clear_views`] it only ever points at live views.
    pub fn bind_view(&self, key: WidgetKey, id: ViewId) {
        self.inner.views.borrow_mut().insert(key, id);
    }

    /// Forgets every bound view. Widget state is untouched.
    pub fn clear_views(&self) {
        self.inner.views.borrow_mut().clear();
    }

    pub fn view(&self, key: WidgetKey) -> Option<ViewId> {
        self.inner.views.borrow().get(&key).copied()
    }
}
