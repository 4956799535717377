use crate::attachment::Attachment;
use regex::Regex;
use std::sync::LazyLock;

static REMINDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\([^()]*\)").expect("reminder pattern is valid"));

/// Strip parenthesised reminder text from the body
///
/// Lines that held nothing but reminder text are dropped entirely.
pub fn reminder_text(mut attachment: Attachment) -> Attachment {
    attachment.text = attachment.text.as_deref().map(strip_reminders);
    attachment
}

fn strip_reminders(text: &str) -> String {
    text.lines()
        .filter_map(|line| {
            let stripped = REMINDER.replace_all(line, "");
            if stripped.trim().is_empty() && !line.trim().is_empty() {
                None
            } else {
                Some(stripped.into_owned())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
