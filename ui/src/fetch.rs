//! The one data-loading hook every read screen uses.
//!
//! [`use_endpoint`] runs a typed endpoint call and exposes the result as
//! signals. The producer closure re-runs whenever a signal it reads changes
//! (a selected season, a route parameter); the restart drops the in-flight
//! future, so a stale response can never land on the new state. Returning
//! `None` means "nothing to load yet" and leaves the hook idle.

use std::future::Future;

use dioxus::prelude::*;

use api::ApiError;

/// Handle to a loaded endpoint: the decoded value, the last error, and a
/// loading flag, plus [`Endpoint::refetch`] for reloading after a mutation.
///
/// On refetch failure the previous `data` is kept so the screen keeps showing
/// something while the error surfaces.
pub struct Endpoint<T: 'static> {
    pub data: Signal<Option<T>>,
    pub error: Signal<Option<String>>,
    pub loading: Signal<bool>,
    loader: Resource<()>,
}

// Derived impls would demand `T: Clone`, but only the signals are copied.
impl<T> Clone for Endpoint<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Endpoint<T> {}

impl<T> Endpoint<T> {
    /// Re-run the current request.
    pub fn refetch(&self) {
        let mut loader = self.loader;
        loader.restart();
    }
}

/// Load data through `produce`, which builds the request future from whatever
/// reactive state it reads. `None` skips the load.
pub fn use_endpoint<T, F, Fut>(produce: F) -> Endpoint<T>
where
    T: 'static,
    F: Fn() -> Option<Fut> + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let mut data = use_signal(|| None::<T>);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let loader = use_resource(move || {
        // Called synchronously so signal reads register as dependencies.
        let request = produce();
        async move {
            let Some(request) = request else { return };
            loading.set(true);
            match request.await {
                Ok(value) => {
                    data.set(Some(value));
                    error.set(None);
                }
                Err(err) => {
                    tracing::warn!("fetch failed: {err}");
                    error.set(Some(describe(&err)));
                }
            }
            loading.set(false);
        }
    });

    Endpoint {
        data,
        error,
        loading,
        loader,
    }
}

pub(crate) fn describe(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
        ApiError::Network(_) => "Could not reach the server".to_string(),
        other => other.to_string(),
    }
}
