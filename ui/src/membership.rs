//! Optimism with a receipt: the membership toggle behind likes and follows.
//!
//! A like, a team follow and a player follow are all the same edit: add or
//! remove the acting user's id in a server-side list. [`use_membership`] holds
//! the local copy of that list and flips it only after the server acknowledges
//! the request, then keeps the toggle disabled a moment longer to swallow
//! double taps.

use std::future::Future;

use dioxus::prelude::*;

use api::ApiError;

/// How long the toggle stays guarded after the server acknowledges.
pub const GUARD_RELEASE_MS: u64 = 300;

/// Local view of a server-side membership list plus the re-entrancy guard.
#[derive(Clone, Copy)]
pub struct Membership {
    members: Signal<Vec<String>>,
    pending: Signal<bool>,
}

impl Membership {
    /// Replace the list wholesale, e.g. when the parent entity loads.
    pub fn sync(&mut self, members: Vec<String>) {
        self.members.set(members);
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.members.read().iter().any(|m| m == user_id)
    }

    pub fn count(&self) -> usize {
        self.members.read().len()
    }

    pub fn is_pending(&self) -> bool {
        *self.pending.read()
    }

    /// Flip `user_id`'s membership. `join` and `leave` are the endpoint pair;
    /// whichever matches the desired direction is awaited, the other dropped
    /// unpolled. The local list is patched only on success.
    ///
    /// A toggle already in flight (or inside the guard window) is a no-op.
    pub fn toggle<J, L>(&mut self, user_id: String, join: J, leave: L)
    where
        J: Future<Output = Result<(), ApiError>> + 'static,
        L: Future<Output = Result<(), ApiError>> + 'static,
    {
        if *self.pending.read() {
            return;
        }
        self.pending.set(true);

        let mut members = self.members;
        let mut pending = self.pending;
        let joining = joins(&self.members.read(), &user_id);

        spawn(async move {
            let outcome = if joining { join.await } else { leave.await };
            match outcome {
                Ok(()) => apply(&mut members.write(), user_id, joining),
                Err(err) => tracing::warn!("membership toggle failed: {err}"),
            }

            sleep_ms(GUARD_RELEASE_MS).await;
            pending.set(false);
        });
    }
}

/// Direction for one toggle, read off the snapshot: join when absent.
fn joins(members: &[String], user_id: &str) -> bool {
    !members.iter().any(|m| m == user_id)
}

/// Patch the local list after the server acknowledged the toggle.
fn apply(members: &mut Vec<String>, user_id: String, joining: bool) {
    if joining {
        if !members.iter().any(|m| m == &user_id) {
            members.push(user_id);
        }
    } else {
        members.retain(|m| m != &user_id);
    }
}

/// A membership list, usually seeded empty and synced once the entity loads.
pub fn use_membership() -> Membership {
    let members = use_signal(Vec::new);
    let pending = use_signal(|| false);
    Membership { members, pending }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn direction_comes_from_the_snapshot() {
        let members = ids(&["u1", "u2"]);
        assert!(!joins(&members, "u1"));
        assert!(joins(&members, "u3"));
        assert!(joins(&[], "u1"));
    }

    #[test]
    fn acknowledged_join_patches_the_list_once() {
        let mut members = ids(&["u1"]);
        apply(&mut members, "u2".to_string(), true);
        assert_eq!(members, ids(&["u1", "u2"]));
        // a duplicate acknowledgement must not double-count
        apply(&mut members, "u2".to_string(), true);
        assert_eq!(members, ids(&["u1", "u2"]));
    }

    #[test]
    fn acknowledged_leave_removes_every_occurrence() {
        let mut members = ids(&["u1", "u2", "u1"]);
        apply(&mut members, "u1".to_string(), false);
        assert_eq!(members, ids(&["u2"]));
        apply(&mut members, "u1".to_string(), false);
        assert_eq!(members, ids(&["u2"]));
    }
}
