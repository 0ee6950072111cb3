//! Application Context
//!
//! Shared request bookkeeping provided via Leptos Context API.

use futures::future::AbortHandle;
use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct DmContext {
    /// Id of the newest request - read.
    /// Responses and progress tagged with an older id are ignored.
    pub generation: ReadSignal<u32>,
    /// Id of the newest request - write
    set_generation: WriteSignal<u32>,
    /// Abort handle of the request in flight
    abort: StoredValue<Option<AbortHandle>>,
    /// Use the streaming endpoint - read
    pub live_progress: ReadSignal<bool>,
    /// Use the streaming endpoint - write
    set_live_progress: WriteSignal<bool>,
}

impl DmContext {
    pub fn new(
        generation: (ReadSignal<u32>, WriteSignal<u32>),
        live_progress: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            generation: generation.0,
            set_generation: generation.1,
            abort: StoredValue::new(None),
            live_progress: live_progress.0,
            set_live_progress: live_progress.1,
        }
    }

    /// Register a new request and return its id
    pub fn start(&self, handle: AbortHandle) -> u32 {
        self.abort_running();
        self.abort.set_value(Some(handle));
        self.set_generation.update(|g| *g += 1);
        self.generation.get_untracked()
    }

    /// Whether `id` is still the request the UI is waiting for
    pub fn is_current(&self, id: u32) -> bool {
        self.generation.get_untracked() == id
    }

    /// Forget the handle of a request that finished on its own
    pub fn finish(&self, id: u32) {
        if self.is_current(id) {
            self.abort.set_value(None);
        }
    }

    /// Close the running request; anything it still produces is discarded
    pub fn cancel(&self) {
        self.abort_running();
        self.set_generation.update(|g| *g += 1);
    }

    pub fn set_live_progress(&self, enabled: bool) {
        self.set_live_progress.set(enabled);
    }

    fn abort_running(&self) {
        if let Some(handle) = self.abort.try_update_value(Option::take).flatten() {
            handle.abort();
        }
    }
}

pub fn use_dm_context() -> DmContext {
    use_context::<DmContext>().expect("DmContext should be provided")
}
