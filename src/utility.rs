use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Reads the value of the form control an event was fired on.
pub trait InputExt {
	fn target_element<T: JsCast>(&self) -> Option<T>;

	fn input_value(&self) -> Option<String> {
		if let Some(input) = self.target_element::<HtmlInputElement>() {
			return Some(input.value());
		}
		if let Some(select) = self.target_element::<HtmlSelectElement>() {
			return Some(select.value());
		}
		self.target_element::<HtmlTextAreaElement>().map(|text_area| text_area.value())
	}
}

impl InputExt for web_sys::Event {
	fn target_element<T: JsCast>(&self) -> Option<T> {
		self.target()?.dyn_into::<T>().ok()
	}
}
