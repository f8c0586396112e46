use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

#[derive(Clone, Debug)]
pub struct Config {
	level: LevelFilter,
	prefer_target: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			level: match cfg!(debug_assertions) {
				true => LevelFilter::Debug,
				false => LevelFilter::Info,
			},
			prefer_target: false,
		}
	}
}

impl Config {
	pub fn with_level(mut self, level: LevelFilter) -> Self {
		self.level = level;
		self
	}

	/// Prefix every line with the record's target (e.g. `[auth]`) instead of its module path.
	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}

	fn format(&self, record: &Record) -> String {
		let origin = match self.prefer_target {
			true => record.target(),
			false => record.module_path().unwrap_or_else(|| record.target()),
		};
		format!("[{:>5}] [{origin}] {}", record.level(), record.args())
	}
}

struct ConsoleLogger(Config);

impl Log for ConsoleLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= self.0.level
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let line = JsValue::from_str(&self.0.format(record));
		match record.level() {
			Level::Error => web_sys::console::error_1(&line),
			Level::Warn => web_sys::console::warn_1(&line),
			Level::Info => web_sys::console::info_1(&line),
			Level::Debug => web_sys::console::log_1(&line),
			Level::Trace => web_sys::console::debug_1(&line),
		}
	}

	fn flush(&self) {}
}

/// Routes the `log` facade to the browser console. Later calls are ignored.
pub fn init(config: Config) {
	let level = config.level;
	if log::set_boxed_logger(Box::new(ConsoleLogger(config))).is_ok() {
		log::set_max_level(level);
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn line(config: &Config, level: Level) -> String {
		config.format(
			&Record::builder()
				.level(level)
				.target("auth")
				.module_path(Some("pet_shelter_client::auth"))
				.args(format_args!("Signed out."))
				.build(),
		)
	}

	#[test]
	fn module_path_by_default() {
		let config = Config::default();
		assert_eq!(line(&config, Level::Info), "[ INFO] [pet_shelter_client::auth] Signed out.");
	}

	#[test]
	fn target_when_preferred() {
		let config = Config::default().prefer_target();
		assert_eq!(line(&config, Level::Warn), "[ WARN] [auth] Signed out.");
	}

	#[test]
	fn level_filter() {
		let logger = ConsoleLogger(Config::default().with_level(LevelFilter::Warn));
		let metadata = Metadata::builder().level(Level::Info).build();
		assert!(!logger.enabled(&metadata));
		let metadata = Metadata::builder().level(Level::Error).build();
		assert!(logger.enabled(&metadata));
	}
}
