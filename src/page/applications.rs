use crate::{
	api::{self, ApiClient},
	auth::use_auth,
	components::{auth::SignedInOnly, use_query, Feedback, FeedbackAlert, QueryStatus, Spinner},
	config::Config,
	data::{Application, Id},
	page::Route,
	task::use_task_scope,
};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

static REPORT_MESSAGE: &str = "Requesting report";

/// Client carrying the signed in user's credential.
#[hook]
fn use_staff_client() -> Rc<dyn Fn() -> Result<ApiClient, api::Error>> {
	let config = use_context::<Rc<Config>>().unwrap();
	let auth = use_auth();
	Rc::new(move || ApiClient::new(&config, auth.credential().as_deref()))
}

#[function_component]
pub fn Applications() -> Html {
	html! {
		<SignedInOnly>
			<h1 class="mb-4">{"Applications"}</h1>
			<ReportButton />
			<ApplicationList />
		</SignedInOnly>
	}
}

/// Logs the outcome of a create-report request and turns it into what the button shows.
/// A failure only changes the feedback, the session is left alone.
fn report_feedback(result: &Result<serde_json::Value, api::Error>) -> Feedback {
	match result {
		Ok(response) => log::info!(target: "report", "Successfully generated report: {response}"),
		Err(err) => log::error!(target: "report", "Error generating report: {err}"),
	}
	Feedback::from_result(result, "generating report")
}

#[function_component]
fn ReportButton() -> Html {
	let client = use_staff_client();
	let feedback = use_state_eq(Feedback::default);
	let scope = use_task_scope();
	let onclick = Callback::from({
		let feedback = feedback.clone();
		move |_: MouseEvent| {
			if feedback.is_sending() {
				return;
			}
			feedback.set(Feedback::Sending);
			let client = client.clone();
			let feedback = feedback.clone();
			scope.spawn("create report", async move {
				let result = async { (client)()?.create_report(REPORT_MESSAGE).await }.await;
				match &result {
					Ok(response) => log::info!(target: "report", "Successfully generated report: {response}"),
					Err(err) => log::error!(target: "report", "Error generating report: {err}"),
				}
				feedback.set(Feedback::from_result(&result, "generating report"));
				Ok(())
			});
		}
	});
	html! {
		<div class="mb-4">
			<button class="btn btn-outline-primary" disabled={feedback.is_sending()} {onclick}>
				{"Generate Report"}
			</button>
			<FeedbackAlert feedback={(*feedback).clone()} success="Report sent to main email" />
		</div>
	}
}

#[function_component]
fn ApplicationList() -> Html {
	let client = use_staff_client();
	let status = use_query((), "loading applications", move |_| {
		let client = client.clone();
		async move { (client)()?.applications().await }
	});
	match &*status {
		QueryStatus::Pending => html!(<Spinner label="Loading applications..." />),
		QueryStatus::Failed(text) => html!(<div class="alert alert-danger" role="alert">{text.clone()}</div>),
		QueryStatus::Success(applications) if applications.is_empty() => html!(<p>{"No applications yet."}</p>),
		QueryStatus::Success(applications) => html! {
			<div class="list-group">
				{applications.iter().map(|application| html!(<ApplicationRow application={application.clone()} />)).collect::<Html>()}
			</div>
		},
	}
}

#[derive(Clone, PartialEq, Properties)]
struct ApplicationRowProps {
	application: Application,
}

#[function_component]
fn ApplicationRow(ApplicationRowProps { application }: &ApplicationRowProps) -> Html {
	let summary = html! {
		<div class="d-flex w-100 justify-content-between">
			<span>
				<strong>{&application.name}</strong>
				<span class="text-body-secondary ms-2">{&application.email}</span>
			</span>
			<span class="badge text-bg-secondary">{application.status_label()}</span>
		</div>
	};
	match &application.id {
		Some(id) => html! {
			<Link<Route> classes={classes!("list-group-item", "list-group-item-action")} to={Route::ApplicationDetail { id: id.to_string() }}>
				{summary}
			</Link<Route>>
		},
		None => html!(<div class="list-group-item">{summary}</div>),
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct ApplicationDetailProps {
	pub id: AttrValue,
}

#[function_component]
pub fn ApplicationDetail(ApplicationDetailProps { id }: &ApplicationDetailProps) -> Html {
	html! {
		<SignedInOnly>
			<Link<Route> classes={classes!("btn", "btn-link", "px-0", "mb-3")} to={Route::Applications}>
				{"Back to applications"}
			</Link<Route>>
			<ApplicationView id={id.clone()} />
		</SignedInOnly>
	}
}

#[function_component]
fn ApplicationView(ApplicationDetailProps { id }: &ApplicationDetailProps) -> Html {
	let client = use_staff_client();
	let status = use_query(Id::from(id.as_str()), "loading application", move |id| {
		let client = client.clone();
		async move { (client)()?.application(&id).await }
	});
	let application = match &*status {
		QueryStatus::Pending => return html!(<Spinner label="Loading application..." />),
		QueryStatus::Failed(text) => return html!(<div class="alert alert-danger" role="alert">{text.clone()}</div>),
		QueryStatus::Success(application) => application,
	};
	let row = |label: &'static str, value: String| {
		html! {<>
			<dt class="col-sm-3">{label}</dt>
			<dd class="col-sm-9">{value}</dd>
		</>}
	};
	html! {
		<div class="card">
			<div class="card-body">
				<h2 class="card-title">{&application.name}</h2>
				<dl class="row mb-0">
					{row("Email", application.email.clone())}
					{row("Phone", application.phone.clone())}
					{row("Pet", application.pet_id.as_ref().map(Id::to_string).unwrap_or_default())}
					{row("Status", application.status_label().to_owned())}
					{row("Message", application.message.clone())}
				</dl>
			</div>
		</div>
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		api::{Error, REQUEST_TIMEOUT_MS},
		auth::{Gate, Status},
		config::test_config,
		session::{MemorySessionStore, SessionStore},
	};

	#[test]
	fn report_success() {
		let result = Ok(serde_json::json!({ "message": "sent" }));
		assert_eq!(report_feedback(&result), Feedback::Sent);
	}

	#[test]
	fn report_server_error_is_shown() {
		let store = Rc::new(MemorySessionStore::with_credential("token"));
		store.insert("theme", "dark");
		let gate = Gate::new(store.clone(), Rc::new(test_config()));
		assert_eq!(gate.resolve(None), Status::SignedIn);

		let url = "https://api.example.com/prod/create-report".to_owned();
		let feedback = report_feedback(&Err(Error::Status(url, 502)));
		assert_eq!(
			feedback.error_text(),
			Some("Error generating report: https://api.example.com/prod/create-report responded with status 502.")
		);
		assert!(!feedback.is_sending());

		assert_eq!(gate.resolve(None), Status::SignedIn);
		assert_eq!(store.get().unwrap(), Some("token".to_owned()));
		assert_eq!(store.value("theme"), Some("dark".to_owned()));
		assert_eq!(store.len(), 2);
	}

	#[test]
	fn report_timeout_is_shown() {
		let feedback = report_feedback(&Err(Error::Timeout(REQUEST_TIMEOUT_MS)));
		assert_eq!(
			feedback.error_text(),
			Some("Error generating report: Request timed out after 15000 ms.")
		);
	}
}
