use client::{RemoteSlice, Resource, SliceState, Store};
use dioxus::prelude::*;

use crate::auth::{use_auth, AuthContext};

/// Subscribe a view to a slice and fetch the collection on mount.
///
/// Returns the signal holding the latest snapshot. Call [`publish`] after
/// a mutation to copy the slice's new state into it.
pub fn use_slice<R: Resource>(store: &Store, slice: &RemoteSlice<R>) -> Signal<SliceState<R>> {
    let auth = use_auth();
    let mut state = use_signal(|| slice.snapshot());

    let store = store.clone();
    let slice = slice.clone();
    use_future(move || {
        let store = store.clone();
        let slice = slice.clone();
        let mut auth = auth;
        async move {
            state.with_mut(SliceState::pending);
            let _ = slice.fetch_all().await;
            state.set(slice.snapshot());
            auth.sync(store.session());
        }
    });

    state
}

/// Copy a slice's current state into its view signal, and the session
/// into the auth context (a 401 signs the user out).
pub fn publish<R: Resource>(state: &mut Signal<SliceState<R>>, slice: &RemoteSlice<R>, store: &Store) {
    state.set(slice.snapshot());
    if let Some(mut auth) = try_consume_context::<AuthContext>() {
        auth.sync(store.session());
    }
}
