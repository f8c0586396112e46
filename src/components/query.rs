use crate::{api, task::use_task_scope};
use futures::Future;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum QueryStatus<T> {
	Pending,
	Success(T),
	Failed(String),
}

impl<T> QueryStatus<T> {
	pub fn from_result(result: Result<T, api::Error>, action: &str) -> Self {
		match result {
			Ok(value) => Self::Success(value),
			Err(err) => Self::Failed(format!("Error {action}: {err}")),
		}
	}
}

/// Runs `fetch` whenever `deps` change. The previous request is aborted when `deps` change again
/// or the component unmounts, so a late response never overwrites a newer one.
#[hook]
pub fn use_query<D, T, F, Fut>(deps: D, action: &'static str, fetch: F) -> UseStateHandle<QueryStatus<T>>
where
	D: PartialEq + Clone + 'static,
	T: 'static,
	F: Fn(D) -> Fut + 'static,
	Fut: Future<Output = Result<T, api::Error>> + 'static,
{
	let status = use_state(|| QueryStatus::Pending);
	let scope = use_task_scope();
	let fetch = yew_hooks::use_latest(fetch);
	use_effect_with(deps, {
		let status = status.clone();
		move |deps: &D| {
			status.set(QueryStatus::Pending);
			let pending = (*fetch.current())(deps.clone());
			let handle = scope.spawn_abortable(action, async move {
				status.set(QueryStatus::from_result(pending.await, action));
				Ok(())
			});
			move || handle.abort()
		}
	});
	status
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn failure_text() {
		let status = QueryStatus::<()>::from_result(Err(api::Error::Timeout(15_000)), "loading applications");
		assert_eq!(
			status,
			QueryStatus::Failed("Error loading applications: Request timed out after 15000 ms.".into())
		);
	}
}
