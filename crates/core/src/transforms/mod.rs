//! Attachment rewrite transforms
//!
//! Each transform is a pure, total `Attachment -> Attachment` function. A
//! [`TransformChain`] binds an ordered list of them to a response variant.

mod ability_words;
mod footer;
mod manamoji;
mod reminder_text;

pub use ability_words::ability_words;
pub use footer::{footer, FOOTER_ICON, FOOTER_TEXT};
pub use manamoji::manamoji;
pub use reminder_text::reminder_text;

use crate::attachment::Attachment;

/// A single attachment rewrite
pub type Transform = fn(Attachment) -> Attachment;

/// Ordered sequence of transforms applied left to right
#[derive(Debug, Clone, Default)]
pub struct TransformChain {
    transforms: Vec<Transform>,
}

impl TransformChain {
    pub fn new(transforms: Vec<Transform>) -> Self {
        Self { transforms }
    }

    /// Append a transform that runs after the existing ones
    pub fn then(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Run every transform once, each one seeing the previous one's output
    pub fn apply(&self, attachment: Attachment) -> Attachment {
        if self.transforms.is_empty() {
            return attachment;
        }

        self.transforms
            .iter()
            .fold(attachment, |current, transform| transform(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn append_a(mut attachment: Attachment) -> Attachment {
        attachment.title.push('A');
        attachment
    }

    fn append_b(mut attachment: Attachment) -> Attachment {
        attachment.title.push('B');
        attachment
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = TransformChain::default();
        let attachment = Attachment::new("Opt").with_text("Scry 1.");
        assert!(chain.is_empty());
        assert_eq!(chain.apply(attachment.clone()), attachment);
    }

    #[test]
    fn test_chain_applies_in_order() {
        let chain = TransformChain::new(vec![append_a, append_b]);
        assert_eq!(chain.apply(Attachment::new("x")).title, "xAB");

        let reversed = TransformChain::default().then(append_b).then(append_a);
        assert_eq!(reversed.apply(Attachment::new("x")).title, "xBA");
    }

    #[test]
    fn test_chain_runs_each_transform_once() {
        let chain = TransformChain::default().then(append_a).then(append_a);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.apply(Attachment::new("")).title, "AA");
    }

    #[test]
    fn test_full_text_chain() {
        let chain = TransformChain::new(vec![footer, manamoji, reminder_text, ability_words]);
        let attachment = Attachment::new("Lotus Cobra {1}{G}")
            .with_text("Creature — Snake\nLandfall — Whenever a land enters the battlefield under your control, you may add one mana of any color. (Mana abilities.)\n2/1");

        let result = chain.apply(attachment);

        assert_eq!(result.title, "Lotus Cobra :mana-1::mana-g:");
        let text = result.text.unwrap();
        assert!(text.starts_with("Creature — Snake\n_<"));
        assert!(!text.contains("(Mana abilities.)"));
        assert!(text.ends_with("\n2/1"));
        assert_eq!(result.footer.as_deref(), Some(FOOTER_TEXT));
    }

    #[test]
    fn test_reapplying_chain_does_not_double_stamp_footer() {
        let chain = TransformChain::default().then(footer);
        let once = chain.apply(Attachment::new("Opt"));
        let twice = chain.apply(once.clone());
        assert_eq!(once, twice);
    }
}
