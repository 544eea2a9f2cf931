//! Turns a received `LogEvent` into the line printed by the sink.
use crate::types::{LogEvent, Severity};
use colored::{ColoredString, Colorize};
use serde_json::Value;

/// Renders one sink line: `[timestamp] LEVEL [server] message`.
pub fn render_line(timestamp: &str, event: &LogEvent) -> String {
    format!(
        "[{}] {} [{}] {}",
        timestamp,
        severity_label(event.level()),
        event.server_name(),
        interpolate(event.message(), event.args())
    )
}

fn severity_label(level: Severity) -> ColoredString {
    let label = format!("{:<8}", level.as_str().to_uppercase());
    match level {
        Severity::Debug => label.dimmed(),
        Severity::Info => label.green(),
        Severity::Warning => label.yellow(),
        Severity::Error => label.red(),
        Severity::Critical => label.red().bold(),
    }
}

/// Substitutes `%s`-style placeholders in `template` with `args`, in order.
///
/// `%s`, `%d`, `%i` and `%r` each take the next argument and `%%` is a literal
/// percent sign. Placeholders with no argument left are kept verbatim and
/// leftover arguments are ignored. Without arguments the template is returned
/// unchanged.
pub fn interpolate(template: &str, args: &[Value]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(conv @ ('s' | 'd' | 'i' | 'r')) => {
                chars.next();
                match args.next() {
                    Some(arg) => out.push_str(&display_arg(arg)),
                    None => {
                        out.push('%');
                        out.push(conv);
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    out
}

fn display_arg(arg: &Value) -> String {
    match arg {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
