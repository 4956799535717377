//! Response variants
//!
//! A [`CardResponse`] binds a search term to one of four presentation kinds.
//! Each kind decides how the term becomes a query, how the upstream response
//! becomes an [`Attachment`], and which transforms run afterwards. Everything
//! here is pure: fetching happens in the shell crate.

use crate::attachment::{Attachment, Field};
use crate::query::{build_url, Endpoints, QueryDescriptor};
use crate::transforms::{ability_words, footer, manamoji, reminder_text, TransformChain};
use crate::upstream::{
    SearchList, UpstreamError, UpstreamResponse, CARD_IMAGE_HEADER, CARD_URL_HEADER,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of search results rendered as fields
pub const MAX_RESULTS: usize = 25;

/// Error raised when an upstream body does not have the expected shape
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed upstream body: {0}")]
    MalformedBody(String),
}

/// Presentation kind of a card response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// Card name, rules text and link
    Text,
    /// Card name and image
    Image,
    /// Card name and marketplace price links
    Price,
    /// Multi-result search listing
    Multi,
}

impl ResponseKind {
    /// Default transform chain for this kind
    pub fn default_transforms(self) -> TransformChain {
        match self {
            ResponseKind::Text => {
                TransformChain::new(vec![footer, manamoji, reminder_text, ability_words])
            }
            ResponseKind::Image => TransformChain::new(vec![footer, manamoji]),
            ResponseKind::Price | ResponseKind::Multi => TransformChain::default().then(footer),
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResponseKind::Text => "text",
            ResponseKind::Image => "image",
            ResponseKind::Price => "price",
            ResponseKind::Multi => "multi",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ResponseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ResponseKind::Text),
            "image" => Ok(ResponseKind::Image),
            "price" => Ok(ResponseKind::Price),
            "multi" | "search" => Ok(ResponseKind::Multi),
            other => Err(format!("Unknown response kind: {other}")),
        }
    }
}

/// Marketplace linked from price responses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSource {
    pub name: String,
    /// Search URL the percent-encoded card name is appended to
    pub search_url: String,
}

impl PriceSource {
    pub fn new(name: impl Into<String>, search_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            search_url: search_url.into(),
        }
    }

    /// Default marketplaces: paper (US and EU) and online
    pub fn defaults() -> Vec<PriceSource> {
        vec![
            PriceSource::new(
                "TCGplayer",
                "https://www.tcgplayer.com/search/magic/product?q=",
            ),
            PriceSource::new(
                "Cardmarket",
                "https://www.cardmarket.com/en/Magic/Products/Search?searchString=",
            ),
            PriceSource::new(
                "Cardhoarder",
                "https://www.cardhoarder.com/cards?data%5Bsearch%5D=",
            ),
        ]
    }

    fn field(&self, card_name: &str) -> Field {
        Field::short(
            self.name.clone(),
            format!(
                "<{}{}|Check price>",
                self.search_url,
                urlencoding::encode(card_name)
            ),
        )
    }
}

/// A search term bound to a response kind, its endpoints and its transforms
#[derive(Debug, Clone)]
pub struct CardResponse {
    kind: ResponseKind,
    term: String,
    endpoints: Endpoints,
    transforms: TransformChain,
    price_sources: Vec<PriceSource>,
}

impl CardResponse {
    pub fn new(kind: ResponseKind, term: impl Into<String>, endpoints: Endpoints) -> Self {
        Self {
            kind,
            term: term.into(),
            endpoints,
            transforms: kind.default_transforms(),
            price_sources: PriceSource::defaults(),
        }
    }

    /// Replace the bound transform chain
    pub fn with_transforms(mut self, transforms: TransformChain) -> Self {
        self.transforms = transforms;
        self
    }

    /// Replace the marketplaces linked by price responses
    pub fn with_price_sources(mut self, sources: Vec<PriceSource>) -> Self {
        self.price_sources = sources;
        self
    }

    pub fn kind(&self) -> ResponseKind {
        self.kind
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn transforms(&self) -> &TransformChain {
        &self.transforms
    }

    pub fn query_descriptor(&self) -> QueryDescriptor {
        match self.kind {
            ResponseKind::Text | ResponseKind::Image | ResponseKind::Price => {
                QueryDescriptor::new()
                    .param("fuzzy", self.term.as_str())
                    .param("format", "text")
            }
            // "++" asks for every printing instead of one per card
            ResponseKind::Multi => QueryDescriptor::new().param("q", format!("++{}", self.term)),
        }
    }

    pub fn endpoint(&self) -> &str {
        match self.kind {
            ResponseKind::Multi => &self.endpoints.search,
            _ => &self.endpoints.named,
        }
    }

    pub fn url(&self) -> String {
        build_url(self.endpoint(), &self.query_descriptor())
    }

    /// Convert an upstream response into an untransformed attachment
    ///
    /// Any non-200 response becomes a "No results" attachment. Only a 200
    /// search body that is not valid JSON is an error.
    pub fn parse_attachment(&self, response: &UpstreamResponse) -> Result<Attachment, ParseError> {
        if !response.is_ok() {
            return Ok(no_results_with_details(&self.term, response.body()));
        }

        let title_link = response.header(CARD_URL_HEADER).map(str::to_string);

        let attachment = match self.kind {
            ResponseKind::Text => {
                let (title, text) = split_first_line(response.body());
                Attachment::new(title)
                    .with_text(text)
                    .with_title_link(title_link)
            }
            ResponseKind::Image => Attachment::new(extract_title(response.body()))
                .with_title_link(title_link)
                .with_image_url(response.header(CARD_IMAGE_HEADER).map(str::to_string)),
            ResponseKind::Price => {
                let title = extract_title(response.body());
                let fields = self
                    .price_sources
                    .iter()
                    .map(|source| source.field(&title))
                    .collect();
                Attachment::new(title)
                    .with_fields(fields)
                    .with_title_link(title_link)
            }
            ResponseKind::Multi => parse_search_results(&self.term, response.body())?,
        };

        Ok(attachment)
    }

    /// Apply the bound transform chain once
    pub fn finish(&self, attachment: Attachment) -> Attachment {
        self.transforms.apply(attachment)
    }
}

/// Split a text body into its first line and the remaining lines
pub fn split_first_line(body: &str) -> (&str, &str) {
    body.split_once('\n').unwrap_or((body, ""))
}

/// Card name from the first body line, without the trailing mana cost
///
/// "Lightning Bolt {R}" becomes "Lightning Bolt".
pub fn extract_title(body: &str) -> String {
    let (first_line, _) = split_first_line(body);
    first_line
        .split_once('{')
        .map_or(first_line, |(name, _)| name)
        .trim()
        .to_string()
}

/// "No results" attachment carrying the upstream error detail when available
pub fn no_results_with_details(term: &str, body: &str) -> Attachment {
    let details = serde_json::from_str::<UpstreamError>(body)
        .ok()
        .and_then(|err| err.details)
        .unwrap_or_else(|| "unknown reason".to_string());

    Attachment::new(format!("No results for {term}, ({details})"))
}

/// Build a search listing attachment from a 200 search body
pub fn parse_search_results(term: &str, body: &str) -> Result<Attachment, ParseError> {
    let list: SearchList =
        serde_json::from_str(body).map_err(|e| ParseError::MalformedBody(e.to_string()))?;

    let Some(cards) = list.data else {
        return Ok(Attachment::new(format!("No results for {term}")));
    };

    let fields: Vec<Field> = cards
        .iter()
        .take(MAX_RESULTS)
        .map(|card| {
            Field::value(format!(
                "<{}|{}> - {}",
                card.scryfall_uri, card.name, card.set_name
            ))
        })
        .collect();

    Ok(Attachment::new(format!(
        "{term} showing {} of {}",
        fields.len(),
        list.total_cards
    ))
    .with_fields(fields))
}
