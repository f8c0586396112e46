use futures::{
	future::{abortable, AbortHandle, Aborted},
	Future,
};
use std::{cell::RefCell, collections::BTreeMap, rc::Rc};
use yew::prelude::*;

#[derive(Default)]
struct Pending {
	next_id: usize,
	handles: BTreeMap<usize, AbortHandle>,
}

/// Owns the futures a component started, so they can be aborted when it goes away.
#[derive(Clone, Default)]
pub struct Scope(Rc<RefCell<Pending>>);
impl PartialEq for Scope {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl Scope {
	/// Number of tracked futures which have neither finished nor been aborted.
	pub fn pending(&self) -> usize {
		self.0.borrow().handles.len()
	}

	/// Wraps `pending` so it stops at the next await point once the scope is aborted.
	/// Errors are logged under `name`; the returned future always completes with `()`.
	pub fn track<F>(&self, name: impl Into<String>, pending: F) -> impl Future<Output = ()> + 'static
	where
		F: Future<Output = anyhow::Result<()>> + 'static,
	{
		self.track_abortable(name, pending).0
	}

	/// Like [`Scope::track`], also returning the handle which aborts only this future.
	pub fn track_abortable<F>(
		&self,
		name: impl Into<String>,
		pending: F,
	) -> (impl Future<Output = ()> + 'static, AbortHandle)
	where
		F: Future<Output = anyhow::Result<()>> + 'static,
	{
		let name = name.into();
		let (pending, handle) = abortable(pending);
		let id = {
			let mut state = self.0.borrow_mut();
			let id = state.next_id;
			state.next_id += 1;
			state.handles.insert(id, handle.clone());
			id
		};
		let state = self.0.clone();
		let tracked = async move {
			match pending.await {
				Ok(Ok(())) => {}
				Ok(Err(err)) => log::error!(target: "task", "{name} failed: {err:?}"),
				Err(Aborted) => log::debug!(target: "task", "{name} was aborted"),
			}
			state.borrow_mut().handles.remove(&id);
		};
		(tracked, handle)
	}

	pub fn spawn<F>(&self, name: impl Into<String>, pending: F)
	where
		F: Future<Output = anyhow::Result<()>> + 'static,
	{
		wasm_bindgen_futures::spawn_local(self.track(name, pending));
	}

	/// Spawns `pending` and returns the handle which aborts it, e.g. when its result goes stale.
	pub fn spawn_abortable<F>(&self, name: impl Into<String>, pending: F) -> AbortHandle
	where
		F: Future<Output = anyhow::Result<()>> + 'static,
	{
		let (tracked, handle) = self.track_abortable(name, pending);
		wasm_bindgen_futures::spawn_local(tracked);
		handle
	}

	pub fn abort_all(&self) {
		let handles = std::mem::take(&mut self.0.borrow_mut().handles);
		for handle in handles.into_values() {
			handle.abort();
		}
	}
}

/// A task scope tied to the calling component, aborting everything still in flight on unmount.
#[hook]
pub fn use_task_scope() -> Scope {
	let scope = use_memo((), |_| Scope::default());
	yew_hooks::use_unmount({
		let scope = scope.clone();
		move || scope.abort_all()
	});
	(*scope).clone()
}

#[cfg(test)]
mod test {
	use super::*;
	use futures::executor::block_on;

	#[test]
	fn finished_are_released() {
		let scope = Scope::default();
		let tracked = scope.track("ok", async { Ok(()) });
		assert_eq!(scope.pending(), 1);
		block_on(tracked);
		assert_eq!(scope.pending(), 0);
	}

	#[test]
	fn abort_stops_pending() {
		let scope = Scope::default();
		let finished = Rc::new(RefCell::new(false));
		let tracked = scope.track("never", {
			let finished = finished.clone();
			async move {
				futures::future::pending::<()>().await;
				*finished.borrow_mut() = true;
				Ok(())
			}
		});
		scope.abort_all();
		assert_eq!(scope.pending(), 0);
		block_on(tracked);
		assert!(!*finished.borrow());
	}

	#[test]
	fn superseded_cannot_write() {
		let scope = Scope::default();
		let shown = Rc::new(RefCell::new(None::<u32>));
		let (first, first_handle) = scope.track_abortable("application 1", {
			let shown = shown.clone();
			async move {
				*shown.borrow_mut() = Some(1);
				Ok(())
			}
		});
		let (second, _) = scope.track_abortable("application 2", {
			let shown = shown.clone();
			async move {
				*shown.borrow_mut() = Some(2);
				Ok(())
			}
		});
		first_handle.abort();
		assert_eq!(scope.pending(), 2);
		block_on(second);
		block_on(first);
		assert_eq!(*shown.borrow(), Some(2));
		assert_eq!(scope.pending(), 0);
	}

	#[test]
	fn errors_are_contained() {
		let scope = Scope::default();
		block_on(scope.track("fails", async { Err(anyhow::anyhow!("boom")) }));
		assert_eq!(scope.pending(), 0);
	}
}
