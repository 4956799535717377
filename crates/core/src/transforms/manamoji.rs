use crate::attachment::Attachment;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("symbol pattern is valid"));

/// Replace card symbols like `{G}` or `{W/U}` with `:mana-g:` / `:mana-wu:` emoji
pub fn manamoji(mut attachment: Attachment) -> Attachment {
    attachment.title = replace_symbols(&attachment.title);
    attachment.text = attachment.text.as_deref().map(replace_symbols);
    attachment
}

fn replace_symbols(input: &str) -> String {
    SYMBOL
        .replace_all(input, |caps: &Captures| {
            let code: String = caps[1]
                .chars()
                .filter(|c| *c != '/')
                .flat_map(char::to_lowercase)
                .collect();
            format!(":mana-{code}:")
        })
        .into_owned()
}
