use crate::attachment::Attachment;

pub const FOOTER_TEXT: &str = "Scryfall";
pub const FOOTER_ICON: &str = "https://scryfall.com/favicon.ico";

/// Stamp the attribution footer unless one is already present
pub fn footer(mut attachment: Attachment) -> Attachment {
    if attachment.footer.is_none() {
        attachment.footer = Some(FOOTER_TEXT.to_string());
        attachment.footer_icon = Some(FOOTER_ICON.to_string());
    }
    attachment
}
