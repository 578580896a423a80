//! The three-phase lifecycle around an async operation.

use std::fmt::{Debug, Display};
use std::future::Future;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use super::Store;
use crate::error::StoreError;

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl RequestStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestStatus::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }
}

/// Identifies one invocation of an async operation across its events
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub u64);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum AsyncPhase<T> {
    Pending {
        #[serde(rename = "requestId")]
        request_id: RequestId,
    },
    Fulfilled {
        #[serde(rename = "requestId")]
        request_id: RequestId,
        payload: T,
    },
    Rejected {
        #[serde(rename = "requestId")]
        request_id: RequestId,
        error: String,
    },
}

impl<T> AsyncPhase<T> {
    /// The suffix of the action kind, e.g. `fetchPosts/pending`
    pub fn name(&self) -> &'static str {
        match self {
            AsyncPhase::Pending { .. } => "pending",
            AsyncPhase::Fulfilled { .. } => "fulfilled",
            AsyncPhase::Rejected { .. } => "rejected",
        }
    }

    pub fn request_id(&self) -> RequestId {
        match self {
            AsyncPhase::Pending { request_id }
            | AsyncPhase::Fulfilled { request_id, .. }
            | AsyncPhase::Rejected { request_id, .. } => *request_id,
        }
    }
}

/// Status and last error of one kind of request, as kept in a section
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RequestState {
    pub status: RequestStatus,
    pub error: Option<String>,
}

impl RequestState {
    /// The request state after `phase` has been applied. A new pending
    /// request clears the previous error.
    pub fn after<T>(phase: &AsyncPhase<T>) -> Self {
        match phase {
            AsyncPhase::Pending { .. } => RequestState {
                status: RequestStatus::Loading,
                error: None,
            },
            AsyncPhase::Fulfilled { .. } => RequestState {
                status: RequestStatus::Succeeded,
                error: None,
            },
            AsyncPhase::Rejected { error, .. } => RequestState {
                status: RequestStatus::Failed,
                error: Some(error.clone()),
            },
        }
    }
}

/// Dispatch the `Pending` event for `future`, then run it on the tokio
/// runtime and send `Fulfilled` or `Rejected` back through the store's
/// dispatcher.
///
/// `future` is not polled before `Pending` has been applied. There is no
/// timeout and no cancellation; the terminal event is sent even if nobody
/// cares about it anymore.
///
/// Must be called from within a tokio runtime.
pub fn dispatch_async<S, A, T, E, Fut, W>(
    store: &Store<S, A>,
    future: Fut,
    wrap: W,
) -> Result<JoinHandle<()>, StoreError>
where
    S: 'static,
    A: Debug + Send + 'static,
    T: Send + 'static,
    E: Display,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    W: Fn(AsyncPhase<T>) -> A + Send + 'static,
{
    let request_id = store.next_request_id();
    store.dispatch(wrap(AsyncPhase::Pending { request_id }))?;

    let dispatcher = store.dispatcher();
    Ok(tokio::spawn(async move {
        let phase = match future.await {
            Ok(payload) => AsyncPhase::Fulfilled {
                request_id,
                payload,
            },
            Err(e) => AsyncPhase::Rejected {
                request_id,
                error: e.to_string(),
            },
        };
        let request_id = phase.request_id();
        log::debug!("request {} {}", request_id.0, phase.name());
        if dispatcher.send(wrap(phase)).is_err() {
            log::debug!("store gone before request {} finished", request_id.0);
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct Fetch(AsyncPhase<Vec<u32>>);

    #[derive(Debug, Default, PartialEq)]
    struct Numbers {
        items: Vec<u32>,
        request: RequestState,
    }

    fn reduce(state: &Arc<Numbers>, action: &Fetch) -> Arc<Numbers> {
        let mut items = state.items.clone();
        if let AsyncPhase::Fulfilled { payload, .. } = &action.0 {
            items.extend(payload);
        }
        Arc::new(Numbers {
            items,
            request: RequestState::after(&action.0),
        })
    }

    #[tokio::test]
    async fn test_fulfilled_lifecycle() {
        let store = Store::new(Numbers::default(), reduce);
        let handle = dispatch_async(&store, async { Ok::<_, String>(vec![1, 2]) }, Fetch).unwrap();
        assert_eq!(store.get_state().request.status, RequestStatus::Loading);

        handle.await.unwrap();
        assert_eq!(store.process_pending().unwrap(), 1);
        let state = store.get_state();
        assert_eq!(state.request.status, RequestStatus::Succeeded);
        assert_eq!(state.items, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_rejected_lifecycle() {
        let store = Store::new(Numbers::default(), reduce);
        dispatch_async(
            &store,
            async { Err::<Vec<u32>, _>("Request failed with status code 500") },
            Fetch,
        )
        .unwrap();
        store.process_next().await.unwrap();
        let state = store.get_state();
        assert_eq!(state.request.status, RequestStatus::Failed);
        assert_eq!(
            state.request.error.as_deref(),
            Some("Request failed with status code 500")
        );
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_phase_serialization() {
        let phase: AsyncPhase<Vec<u32>> = AsyncPhase::Rejected {
            request_id: RequestId(3),
            error: "boom".to_string(),
        };
        let json = serde_json::to_value(&phase).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"phase": "rejected", "requestId": 3, "error": "boom"})
        );
    }

    #[tokio::test]
    async fn test_phases_share_request_id() {
        fn record(
            state: &Arc<Vec<(RequestId, &'static str)>>,
            action: &Fetch,
        ) -> Arc<Vec<(RequestId, &'static str)>> {
            let mut seen = Vec::clone(state);
            seen.push((action.0.request_id(), action.0.name()));
            Arc::new(seen)
        }

        let store = Store::new(Vec::new(), record);
        let handle = dispatch_async(&store, async { Ok::<_, String>(vec![7]) }, Fetch).unwrap();
        handle.await.unwrap();
        store.process_pending().unwrap();

        let seen = store.get_state();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, seen[1].0);
        assert_eq!(seen[0].1, "pending");
        assert_eq!(seen[1].1, "fulfilled");
    }
}
