//! Timers and fetch-on-mount work owned by a view.
//!
//! Everything scheduled here stops touching view state once the owning
//! component unmounts: intervals are dropped, and spawned futures see
//! their [`ViewLifetime`] end.

use gloo_timers::callback::Interval;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Debug)]
pub struct ViewLifetime(Rc<Cell<bool>>);

impl ViewLifetime {
    pub fn new() -> Self {
        ViewLifetime(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn end(&self) {
        self.0.set(false);
    }

    /// Runs `update` only while the view is still mounted.
    pub fn run_if_alive(&self, update: impl FnOnce()) {
        if self.is_alive() {
            update();
        }
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

/// A lifetime that ends when the calling component unmounts, for work
/// spawned from event handlers rather than on mount.
#[hook]
pub fn use_view_lifetime() -> ViewLifetime {
    let lifetime = use_memo(|_| ViewLifetime::new(), ());
    {
        let lifetime = lifetime.clone();
        use_effect_with_deps(move |_| move || lifetime.end(), ());
    }
    (*lifetime).clone()
}

/// Calls `tick` right away and then every `period_ms` until unmount.
#[hook]
pub fn use_interval_task<F: Fn() + 'static>(period_ms: u32, tick: F) {
    use_effect_with_deps(
        move |period| {
            tick();
            let interval = Interval::new(*period, move || tick());
            move || drop(interval)
        },
        period_ms,
    );
}

/// Spawns `task` once on mount. The task gets the view's lifetime and must
/// check it before writing state.
#[hook]
pub fn use_mount_task<F, Fut>(task: F)
where
    F: FnOnce(ViewLifetime) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    use_effect_with_deps(
        move |_| {
            let lifetime = ViewLifetime::new();
            spawn_local(task(lifetime.clone()));
            move || lifetime.end()
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::ViewLifetime;
    use std::cell::Cell;

    #[test]
    fn updates_stop_after_the_view_ends() {
        let lifetime = ViewLifetime::new();
        let spawned = lifetime.clone();
        let updates = Cell::new(0);

        spawned.run_if_alive(|| updates.set(updates.get() + 1));
        lifetime.end();
        spawned.run_if_alive(|| updates.set(updates.get() + 1));

        assert_eq!(updates.get(), 1);
        assert!(!spawned.is_alive());
    }
}
