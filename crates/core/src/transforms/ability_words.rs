use crate::attachment::Attachment;
use regex::{Captures, Regex};
use std::sync::LazyLock;

const SEARCH_URL: &str = "https://scryfall.com/search?q=";

const ABILITY_WORDS: &[&str] = &[
    "adamant",
    "addendum",
    "alliance",
    "battalion",
    "bloodrush",
    "celebration",
    "channel",
    "chroma",
    "cohort",
    "constellation",
    "converge",
    "corrupted",
    "council's dilemma",
    "coven",
    "delirium",
    "domain",
    "eminence",
    "enrage",
    "fateful hour",
    "ferocious",
    "formidable",
    "grandeur",
    "hellbent",
    "heroic",
    "imprint",
    "inspired",
    "join forces",
    "kinship",
    "landfall",
    "lieutenant",
    "magecraft",
    "metalcraft",
    "morbid",
    "pack tactics",
    "parley",
    "radiance",
    "raid",
    "rally",
    "revolt",
    "secret council",
    "spell mastery",
    "strive",
    "sweep",
    "tempting offer",
    "threshold",
    "undergrowth",
    "will of the council",
];

static ABILITY_WORD: LazyLock<Regex> = LazyLock::new(|| {
    let words = ABILITY_WORDS
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?mi)^({words})(\s+—)")).expect("ability word pattern is valid")
});

/// Turn a leading ability word ("Landfall — ...") into an italic search link
pub fn ability_words(mut attachment: Attachment) -> Attachment {
    attachment.text = attachment.text.as_deref().map(link_ability_words);
    attachment
}

fn link_ability_words(text: &str) -> String {
    ABILITY_WORD
        .replace_all(text, |caps: &Captures| {
            let word = &caps[1];
            let query = format!("o:\"{word} —\"");
            format!(
                "_<{SEARCH_URL}{}|{word}>_{}",
                urlencoding::encode(&query),
                &caps[2]
            )
        })
        .into_owned()
}
