//! The counter section: a number, a few synchronous ways to change it and
//! one that goes through the (simulated) backend.

mod action;
mod reducer;

pub use action::CounterAction;
pub use reducer::{reduce, State as CounterState};

use tokio::task::JoinHandle;

use crate::environment::Environment;
use crate::error::StoreError;
use crate::state::{Action, AppStore, RootState};
use crate::store::{dispatch_async, RequestState};

pub fn select_count(state: &RootState) -> i64 {
    state.counter.value
}

pub fn select_counter_status(state: &RootState) -> &RequestState {
    &state.counter.request
}

/// Ask the backend for `amount` and add whatever comes back
pub fn increment_async(
    store: &AppStore,
    environment: &Environment,
    amount: i64,
) -> Result<JoinHandle<()>, StoreError> {
    let model = environment.model.clone();
    dispatch_async(
        store,
        async move { model.fetch_count(amount).await },
        |phase| Action::Counter(CounterAction::IncrementAsync(phase)),
    )
}

/// Add `amount` only if the current count is odd
pub fn increment_if_odd(store: &AppStore, amount: i64) -> Result<(), StoreError> {
    let current = select_count(&store.get_state());
    if current % 2 != 0 {
        store.dispatch(Action::Counter(CounterAction::IncrementByAmount(amount)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::create_store;

    #[test]
    fn test_increment_if_odd() {
        let store = create_store();
        increment_if_odd(&store, 5).unwrap();
        assert_eq!(select_count(&store.get_state()), 0);

        store
            .dispatch(Action::Counter(CounterAction::Increment))
            .unwrap();
        increment_if_odd(&store, 5).unwrap();
        assert_eq!(select_count(&store.get_state()), 6);
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!(
            Action::Counter(CounterAction::IncrementByAmount(2)).kind(),
            "counter/incrementByAmount"
        );
        assert_eq!(
            Action::Counter(CounterAction::IncrementAsync(crate::store::AsyncPhase::Pending {
                request_id: crate::store::RequestId(1)
            }))
            .kind(),
            "counter/incrementAsync/pending"
        );
    }
}
