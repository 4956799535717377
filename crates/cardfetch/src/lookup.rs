use crate::assembly::resolve_all;
use crate::client::CardClient;
use crate::config::Config;
use crate::prelude::{eprintln, println, *};
use cardfetch_core::attachment::Attachment;
use cardfetch_core::variant::{CardResponse, ResponseKind};
use colored::Colorize;
use prettytable::row;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct LookupOptions {
    /// Card names (or search expressions for `search`), each resolved independently
    #[arg(required = true)]
    pub terms: Vec<String>,

    /// Output as a JSON chat payload (`{"attachments": [...]}`)
    #[arg(long)]
    pub json: bool,
}

pub async fn run(kind: ResponseKind, options: LookupOptions, global: crate::Global) -> Result<()> {
    let config = Config::from_env()?.with_overrides(global.base_url.clone())?;
    let endpoints = config.endpoints();
    let client = CardClient::new()?;

    let cards: Vec<CardResponse> = options
        .terms
        .iter()
        .map(|term| CardResponse::new(kind, term.as_str(), endpoints.clone()))
        .collect();

    if global.verbose {
        for card in &cards {
            eprintln!("GET {}", card.url());
        }
        eprintln!();
    }

    let mut attachments = Vec::new();
    let mut failures = 0;
    for (card, result) in cards.iter().zip(resolve_all(&client, &cards).await) {
        match result {
            Ok(attachment) => attachments.push(attachment),
            Err(err) => {
                failures += 1;
                eprintln!(
                    "{} {}: {}",
                    "error".red().bold(),
                    card.term().bright_white(),
                    err
                );
            }
        }
    }

    if options.json {
        println!("{}", format_attachments_json(&attachments)?);
    } else {
        for attachment in &attachments {
            println!("{}", format_attachment_text(attachment));
        }
    }

    if failures > 0 {
        return Err(eyre!("{} of {} lookups failed", failures, cards.len()));
    }

    Ok(())
}

/// Build the chat payload JSON for a set of attachments
fn format_attachments_json(attachments: &[Attachment]) -> Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({ "attachments": attachments }))
        .map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Build formatted terminal output for one attachment
fn format_attachment_text(attachment: &Attachment) -> String {
    let mut result = String::new();

    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&f!("{}\n", attachment.title.white().bold()));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_cyan()));

    if let Some(link) = &attachment.title_link {
        result.push_str(&f!("{}: {}\n", "URL".green(), link.cyan().underline()));
    }

    if let Some(image) = &attachment.image_url {
        result.push_str(&f!("{}: {}\n", "Image".green(), image.cyan().underline()));
    }

    if let Some(text) = attachment.text.as_deref().filter(|t| !t.is_empty()) {
        result.push_str(&f!("\n{}\n", text.bright_white()));
    }

    if !attachment.fields.is_empty() {
        let mut table = new_table();
        for field in &attachment.fields {
            table.add_row(row![
                field.title.as_deref().unwrap_or("").green(),
                field.value
            ]);
        }
        result.push_str(&f!("\n{}", table));
    }

    if let Some(footer) = &attachment.footer {
        result.push_str(&f!("\n{}\n", footer.bright_black()));
    }

    result
}
