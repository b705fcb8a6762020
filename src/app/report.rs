/// Receives the settings report, one informational line per call.
pub trait PropertyLog {
    fn info(&self, line: &str);
}

/// Forwards report lines to the `log` facade at INFO level.
pub struct LogFacade;

impl PropertyLog for LogFacade {
    fn info(&self, line: &str) {
        log::info!("{}", line);
    }
}

pub(crate) fn field_line(label: &str, value: &str) -> String {
    let value = if value.is_empty() { "(not set)" } else { value };
    format!("- {:<28}: {}", label, value)
}

pub(crate) fn tags_line(label: &str, tags: &[String]) -> String {
    field_line(label, &tags.join(", "))
}
