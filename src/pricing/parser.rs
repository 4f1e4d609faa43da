//! HTML parser for pricing tables.
//!
//! Two table layouts are understood:
//!
//! * one row per plan, with a header row labelling the columns
//!   (`Plan | Price | Storage | Databases`);
//! * one column per plan, with the plan names in the header row and the
//!   first column labelling each row (`Price`, `Storage`, `Databases`).
//!
//! Labels are matched case-insensitively, in English or French.

use super::models::{Plan, PriceTable};
use super::selectors;
use crate::error::ExtractError;
use crate::fetch::Page;
use scraper::ElementRef;
use tracing::{debug, trace};

/// What a header or row label refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Name,
    Price,
    Storage,
    Databases,
}

impl Label {
    /// Matches whole words, so "Basement" or "Priceless" are not labels.
    fn detect(text: &str) -> Option<Self> {
        let text = text.to_lowercase();
        let words: Vec<&str> =
            text.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()).collect();
        let has = |candidates: &[&str]| words.iter().any(|w| candidates.contains(w));

        if has(&["price", "prices", "prix", "tarif"]) {
            Some(Label::Price)
        } else if has(&["storage", "stockage", "disk", "space", "espace"]) {
            Some(Label::Storage)
        } else if has(&["database", "databases", "db", "base", "bases"]) {
            Some(Label::Databases)
        } else if has(&["plan", "plans", "name", "offre", "offres", "formule"]) {
            Some(Label::Name)
        } else {
            None
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Label::Name => "plan",
            Label::Price => "price",
            Label::Storage => "storage",
            Label::Databases => "databases",
        }
    }
}

/// Column positions for the row-per-plan layout.
struct Columns {
    name: usize,
    price: usize,
    storage: usize,
    databases: usize,
}

impl Columns {
    fn from_header(header: &[String]) -> Result<Self, ExtractError> {
        let find = |label: Label| {
            header
                .iter()
                .position(|cell| Label::detect(cell) == Some(label))
                .ok_or(ExtractError::MissingColumn { label: label.as_str() })
        };

        Ok(Self {
            name: find(Label::Name).unwrap_or(0),
            price: find(Label::Price)?,
            storage: find(Label::Storage)?,
            databases: find(Label::Databases)?,
        })
    }
}

/// Parses the first table of a pricing page into a [`PriceTable`].
///
/// The header row decides the layout: when it labels the price, storage and
/// databases columns, every body row is a plan. Otherwise the table is read
/// with one column per plan, provided its rows carry those labels.
pub fn parse_price_table(html: &str) -> Result<PriceTable, ExtractError> {
    let page = Page::parse(html);

    let table = page
        .document()
        .select(&selectors::TABLE)
        .next()
        .ok_or_else(|| ExtractError::missing("plans", "table"))?;

    let rows: Vec<Vec<String>> = table
        .select(&selectors::ROW)
        .filter(|row| !is_note_row(*row))
        .map(row_cells)
        .filter(|cells| cells.iter().any(|c| !c.is_empty()))
        .collect();

    let Some((header, body)) = rows.split_first() else {
        return Err(ExtractError::NoPlans);
    };

    let table = match Columns::from_header(header) {
        Ok(columns) => {
            debug!("Reading pricing table with one row per plan");
            parse_plan_rows(&columns, body)?
        }
        Err(_) if is_transposed(body) => {
            debug!("Reading pricing table with one column per plan");
            parse_plan_columns(header, body)?
        }
        Err(err) => return Err(err),
    };

    if table.is_empty() {
        return Err(ExtractError::NoPlans);
    }

    Ok(table)
}

/// Footer rows and single cells spanning several columns carry notes, not plans.
fn is_note_row(row: ElementRef) -> bool {
    let in_footer = row
        .ancestors()
        .filter_map(|node| node.value().as_element())
        .any(|element| element.name() == "tfoot");

    if in_footer {
        return true;
    }

    let mut cells = row.select(&selectors::CELL);
    match (cells.next(), cells.next()) {
        (Some(cell), None) => cell
            .value()
            .attr("colspan")
            .and_then(|span| span.trim().parse::<u32>().ok())
            .is_some_and(|span| span > 1),
        _ => false,
    }
}

fn row_cells(row: ElementRef) -> Vec<String> {
    row.select(&selectors::CELL).map(cell_text).collect()
}

/// Cell text with runs of whitespace collapsed.
fn cell_text(cell: ElementRef) -> String {
    cell.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
}

/// True when the body has a row labelled for each of price, storage and databases.
fn is_transposed(body: &[Vec<String>]) -> bool {
    [Label::Price, Label::Storage, Label::Databases].into_iter().all(|label| {
        body.iter().any(|row| row.first().and_then(|c| Label::detect(c)) == Some(label))
    })
}

fn parse_plan_rows(columns: &Columns, body: &[Vec<String>]) -> Result<PriceTable, ExtractError> {
    let mut table = PriceTable::new();

    for row in body {
        let cell = |index: usize, field: &'static str| {
            row.get(index).ok_or_else(|| ExtractError::missing(field, "td"))
        };

        let name = cell(columns.name, "plan")?;
        let plan = Plan::new(
            cell(columns.price, "price")?.as_str(),
            cell(columns.storage, "storage")?.as_str(),
            parse_databases(cell(columns.databases, "databases")?)?,
        );

        trace!("Plan {}: {:?}", name, plan);
        table.insert(name.as_str(), plan).map_err(|(name, _)| ExtractError::DuplicatePlan(name))?;
    }

    Ok(table)
}

fn parse_plan_columns(header: &[String], body: &[Vec<String>]) -> Result<PriceTable, ExtractError> {
    let row_for = |label: Label| {
        body.iter()
            .find(|row| row.first().and_then(|c| Label::detect(c)) == Some(label))
            .ok_or(ExtractError::MissingColumn { label: label.as_str() })
    };

    let prices = row_for(Label::Price)?;
    let storages = row_for(Label::Storage)?;
    let databases = row_for(Label::Databases)?;

    let mut table = PriceTable::new();

    for (index, name) in header.iter().enumerate().skip(1) {
        if name.is_empty() {
            continue;
        }

        let cell = |row: &[String], field: &'static str| {
            row.get(index).cloned().ok_or_else(|| ExtractError::missing(field, "td"))
        };

        let plan = Plan::new(
            cell(prices.as_slice(), "price")?,
            cell(storages.as_slice(), "storage")?,
            parse_databases(&cell(databases.as_slice(), "databases")?)?,
        );

        trace!("Plan {}: {:?}", name, plan);
        table.insert(name.as_str(), plan).map_err(|(name, _)| ExtractError::DuplicatePlan(name))?;
    }

    Ok(table)
}

/// Reads the first run of digits, so "25", "25 databases" and "x25" all give 25.
fn parse_databases(text: &str) -> Result<u32, ExtractError> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().map_err(|_| ExtractError::number("databases", text))
}
