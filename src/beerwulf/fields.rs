//! Field table for beer product pages.
//!
//! Every record field is described by where its raw value lives (a
//! [`Lookup`]) and how that raw value becomes a typed one (a transform
//! function). Changing a page layout means editing a rule here, not the
//! parser.

use super::selectors::{self, Css};
use crate::error::ExtractError;
use scraper::{ElementRef, Html};
use tracing::trace;

/// Where the raw text of a field is found.
pub enum Lookup {
    /// Text of the first element matching the selector.
    Text(&'static Css),
    /// An attribute of the first element matching the selector.
    Attr(&'static Css, &'static str),
    /// Text of the element right after the term whose text equals `label`.
    Definition { term: &'static Css, label: &'static str },
}

impl Lookup {
    fn resolve(&self, document: &Html, field: &'static str) -> Result<String, ExtractError> {
        match self {
            Lookup::Text(css) => first(document, css, field).map(|e| e.text().collect()),
            Lookup::Attr(css, attr) => first(document, css, field)?
                .value()
                .attr(attr)
                .map(String::from)
                .ok_or(ExtractError::MissingAttribute { field, attr: *attr }),
            Lookup::Definition { term, label } => document
                .select(term.get())
                .find(|dt| dt.text().collect::<String>().trim() == *label)
                .and_then(|dt| dt.next_siblings().find_map(ElementRef::wrap))
                .map(|dd| dd.text().collect())
                .ok_or_else(|| {
                    ExtractError::missing(field, format!("{}:contains({:?}) + *", term.source, label))
                }),
        }
    }
}

fn first<'a>(
    document: &'a Html,
    css: &Css,
    field: &'static str,
) -> Result<ElementRef<'a>, ExtractError> {
    document.select(css.get()).next().ok_or_else(|| ExtractError::missing(field, css.source))
}

/// A field read from text and coerced by `transform`.
pub struct TextField<T> {
    pub field: &'static str,
    pub lookup: Lookup,
    pub transform: fn(&'static str, &str) -> Result<T, ExtractError>,
}

impl<T> TextField<T> {
    pub fn extract(&self, document: &Html) -> Result<T, ExtractError> {
        let raw = self.lookup.resolve(document, self.field)?;
        trace!("{} raw value: {:?}", self.field, raw);
        (self.transform)(self.field, &raw)
    }
}

/// A field given by which step of a scale is marked active.
///
/// The value is the active step's index over the step count, in percent.
pub struct ScaleField {
    pub field: &'static str,
    pub scale: &'static Css,
    pub step: &'static Css,
    pub active_class: &'static str,
}

impl ScaleField {
    pub fn extract(&self, document: &Html) -> Result<f64, ExtractError> {
        let scale = first(document, self.scale, self.field)?;
        let steps: Vec<ElementRef> = scale.select(self.step.get()).collect();

        if steps.is_empty() {
            return Err(ExtractError::EmptyScale { field: self.field });
        }

        let position = steps
            .iter()
            .position(|step| step.value().classes().any(|c| c == self.active_class))
            .ok_or_else(|| {
                ExtractError::missing(
                    self.field,
                    format!("{} {}.{}", self.scale.source, self.step.source, self.active_class),
                )
            })?;

        trace!("{}: step {} of {}", self.field, position, steps.len());
        Ok(position as f64 / steps.len() as f64 * 100.0)
    }
}

pub static NAME: TextField<String> =
    TextField { field: "name", lookup: Lookup::Text(&selectors::NAME), transform: trimmed };

pub static PRICE: TextField<f64> =
    TextField { field: "price", lookup: Lookup::Text(&selectors::PRICE), transform: currency_amount };

pub static VOLUME: TextField<u32> = TextField {
    field: "volume",
    lookup: Lookup::Definition { term: &selectors::TERM, label: "Contenu" },
    transform: centiliters,
};

pub static RATING: TextField<u32> = TextField {
    field: "rating",
    lookup: Lookup::Attr(&selectors::STARS, "data-percent"),
    transform: percent,
};

pub static COLOR_INTENSITY: ScaleField = ScaleField {
    field: "colorIntensity",
    scale: &selectors::EBC_SCALE,
    step: &selectors::EBC_STEP,
    active_class: "active",
};

/// Surrounding whitespace removed.
pub fn trimmed(_field: &'static str, text: &str) -> Result<String, ExtractError> {
    Ok(text.trim().to_string())
}

/// "€ 2,29" -> 2.29: drops the two-character currency prefix and reads a
/// decimal comma.
pub fn currency_amount(field: &'static str, text: &str) -> Result<f64, ExtractError> {
    let amount: String = text.trim().chars().skip(2).collect();
    amount.trim().replace(',', ".").parse().map_err(|_| ExtractError::number(field, text.trim()))
}

/// "33cl" -> 33: drops the two-character unit suffix.
pub fn centiliters(field: &'static str, text: &str) -> Result<u32, ExtractError> {
    let text = text.trim();
    let len = text.chars().count();
    if len <= 2 {
        return Err(ExtractError::number(field, text));
    }
    let amount: String = text.chars().take(len - 2).collect();
    amount.trim().parse().map_err(|_| ExtractError::number(field, text))
}

/// "70" -> 70.
pub fn percent(field: &'static str, text: &str) -> Result<u32, ExtractError> {
    text.trim().parse().map_err(|_| ExtractError::number(field, text.trim()))
}
