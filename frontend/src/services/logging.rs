use log::{Level, LevelFilter, Log, Metadata, Record};

/// Component-tagged logging. Everything ends up in the browser console
/// through the `log` facade, so messages from `shared` share the same sink.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!(target: component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!(target: component, "{}", message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!(target: component, "{}", message);
    }
}

struct ConsoleLog;

impl Log for ConsoleLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

static CONSOLE_LOG: ConsoleLog = ConsoleLog;

/// Install the console sink. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&CONSOLE_LOG).is_ok() {
        log::set_max_level(level);
    }
}

fn format_line(target: &str, message: &str) -> String {
    format!("[{}] {}", target, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_prefixes_component() {
        assert_eq!(
            format_line("expense-form", "Expense created"),
            "[expense-form] Expense created"
        );
    }
}
