use crate::api;
use yew::prelude::*;

/// Outcome of a one-shot request (report, form submission) as shown next to the button that sent it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Feedback {
	#[default]
	Idle,
	Sending,
	Sent,
	Failed(String),
}

impl Feedback {
	/// `action` completes the sentence "Error {action}: ...".
	pub fn from_result<T>(result: &Result<T, api::Error>, action: &str) -> Self {
		match result {
			Ok(_) => Self::Sent,
			Err(err) => Self::Failed(format!("Error {action}: {err}")),
		}
	}

	pub fn is_sending(&self) -> bool {
		matches!(self, Self::Sending)
	}

	pub fn error_text(&self) -> Option<&str> {
		match self {
			Self::Failed(text) => Some(text.as_str()),
			_ => None,
		}
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct FeedbackAlertProps {
	pub feedback: Feedback,
	pub success: AttrValue,
}

#[function_component]
pub fn FeedbackAlert(FeedbackAlertProps { feedback, success }: &FeedbackAlertProps) -> Html {
	match feedback {
		Feedback::Idle | Feedback::Sending => html!(),
		Feedback::Sent => html!(<div class="alert alert-success mt-3" role="alert">{success.clone()}</div>),
		Feedback::Failed(text) => html!(<div class="alert alert-danger mt-3" role="alert">{text.clone()}</div>),
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn success() {
		let result: Result<serde_json::Value, api::Error> = Ok(serde_json::json!({"ok": true}));
		assert_eq!(Feedback::from_result(&result, "generating report"), Feedback::Sent);
	}

	#[test]
	fn failure_text() {
		let result: Result<(), api::Error> = Err(api::Error::Status("https://api.example.com/prod/create-report".into(), 502));
		let feedback = Feedback::from_result(&result, "generating report");
		assert_eq!(
			feedback.error_text(),
			Some("Error generating report: https://api.example.com/prod/create-report responded with status 502.")
		);
	}
}
