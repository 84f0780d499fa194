//! Remote Resource State
//!
//! One state machine for every page-level fetch instead of ad hoc
//! loading/error booleans: `Idle → Loading → Ready | Failed`.

use leptos::*;

use crate::api::ApiError;

/// Lifecycle of a server-fetched resource.
#[derive(Clone, Debug, PartialEq)]
pub enum Remote<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Idle | Remote::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Idle
    }
}

/// Drive `target` through `Loading → Ready/Failed` with the given fetch.
/// Writes go through `try_set`, so a response arriving after the owning
/// page unmounted is a silent no-op.
pub fn load_into<T, F>(target: RwSignal<Remote<T>>, fut: F)
where
    T: 'static,
    F: std::future::Future<Output = Result<T, ApiError>> + 'static,
{
    let _ = target.try_set(Remote::Loading);
    spawn_local(async move {
        let next = match fut.await {
            Ok(value) => Remote::Ready(value),
            Err(e) => Remote::Failed(e.to_string()),
        };
        let _ = target.try_set(next);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_and_loading_count_as_loading() {
        assert!(Remote::<i32>::Idle.is_loading());
        assert!(Remote::<i32>::Loading.is_loading());
        assert!(!Remote::Ready(1).is_loading());
        assert!(!Remote::<i32>::Failed("x".into()).is_loading());
    }

    #[test]
    fn test_ready_and_error_accessors() {
        let ready: Remote<Vec<i32>> = Remote::Ready(vec![1, 2]);
        assert_eq!(ready.ready(), Some(&vec![1, 2]));
        assert_eq!(ready.error(), None);

        let failed: Remote<Vec<i32>> = Remote::Failed("network error".into());
        assert_eq!(failed.ready(), None);
        assert_eq!(failed.error(), Some("network error"));
    }
}
