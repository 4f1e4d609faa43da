//! Output formatting for beers and price tables (table, JSON, markdown, CSV).

use crate::beerwulf::Beer;
use crate::config::OutputFormat;
use crate::pricing::PriceTable;

/// Formats extraction results for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single beer.
    pub fn format_beer(&self, beer: &Beer) -> String {
        match self.format {
            OutputFormat::Json => json(beer),
            OutputFormat::Table => self.table_single(beer),
            OutputFormat::Markdown => self.markdown_single(beer),
            OutputFormat::Csv => self.csv_beers(std::slice::from_ref(beer)),
        }
    }

    /// Formats a list of beers.
    pub fn format_beers(&self, beers: &[Beer]) -> String {
        if beers.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => BEER_CSV_HEADER.to_string(),
                _ => "No beers found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => json(beers),
            OutputFormat::Table => self.table_beers(beers),
            OutputFormat::Markdown => self.markdown_beers(beers),
            OutputFormat::Csv => self.csv_beers(beers),
        }
    }

    /// Formats a pricing table.
    pub fn format_prices(&self, table: &PriceTable) -> String {
        match self.format {
            OutputFormat::Json => json(table),
            OutputFormat::Table => self.table_prices(table),
            OutputFormat::Markdown => self.markdown_prices(table),
            OutputFormat::Csv => self.csv_prices(table),
        }
    }

    // Table formatting

    fn table_single(&self, beer: &Beer) -> String {
        [
            format!("Name:    {}", beer.name),
            format!("Price:   {:.2} EUR", beer.price),
            format!("Volume:  {}cl", beer.volume),
            format!("Rating:  {}%", beer.rating),
            format!("Color:   {:.1}% EBC", beer.color_intensity),
        ]
        .join("\n")
    }

    fn table_beers(&self, beers: &[Beer]) -> String {
        let price_width = 8;
        let volume_width = 6;
        let rating_width = 6;
        let color_width = 6;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:>price_width$}  {:>volume_width$}  {:>rating_width$}  {:>color_width$}  {}",
            "Price", "Volume", "Rating", "EBC %", "Name"
        ));
        lines.push(format!(
            "{:-<price_width$}  {:-<volume_width$}  {:-<rating_width$}  {:-<color_width$}  {:-<40}",
            "", "", "", "", ""
        ));

        for beer in beers {
            lines.push(format!(
                "{:>price_width$.2}  {:>volume_width$}  {:>rating_width$}  {:>color_width$.1}  {}",
                beer.price,
                format!("{}cl", beer.volume),
                format!("{}%", beer.rating),
                beer.color_intensity,
                beer.name
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} beers", beers.len()));

        lines.join("\n")
    }

    fn table_prices(&self, table: &PriceTable) -> String {
        if table.is_empty() {
            return "No plans found.".to_string();
        }

        let name_width = table.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(4).max(4);

        let mut lines = Vec::new();
        lines.push(format!("{:<name_width$}  {:>8}  {:>8}  {:>9}", "Plan", "Price", "Storage", "Databases"));
        lines.push(format!("{:-<name_width$}  {:-<8}  {:-<8}  {:-<9}", "", "", "", ""));

        for (name, plan) in table.iter() {
            lines.push(format!(
                "{:<name_width$}  {:>8}  {:>8}  {:>9}",
                name, plan.price, plan.storage, plan.databases
            ));
        }

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_single(&self, beer: &Beer) -> String {
        [
            format!("## {}", beer.name),
            String::new(),
            format!("- **Price:** {:.2} EUR", beer.price),
            format!("- **Volume:** {}cl", beer.volume),
            format!("- **Rating:** {}%", beer.rating),
            format!("- **Color:** {:.1}% EBC", beer.color_intensity),
        ]
        .join("\n")
    }

    fn markdown_beers(&self, beers: &[Beer]) -> String {
        let mut lines = Vec::new();

        lines.push("| Name | Price | Volume | Rating | EBC % |".to_string());
        lines.push("|------|-------|--------|--------|-------|".to_string());

        for beer in beers {
            lines.push(format!(
                "| {} | {:.2} | {}cl | {}% | {:.1} |",
                beer.name.replace('|', "\\|"),
                beer.price,
                beer.volume,
                beer.rating,
                beer.color_intensity
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} beers found*", beers.len()));

        lines.join("\n")
    }

    fn markdown_prices(&self, table: &PriceTable) -> String {
        let mut lines = Vec::new();

        lines.push("| Plan | Price | Storage | Databases |".to_string());
        lines.push("|------|-------|---------|-----------|".to_string());

        for (name, plan) in table.iter() {
            lines.push(format!(
                "| {} | {} | {} | {} |",
                name, plan.price, plan.storage, plan.databases
            ));
        }

        lines.join("\n")
    }

    // CSV formatting

    fn csv_beers(&self, beers: &[Beer]) -> String {
        let mut lines = vec![BEER_CSV_HEADER.to_string()];

        for beer in beers {
            lines.push(format!(
                "{},{},{},{},{}",
                csv_escape(&beer.name),
                beer.price,
                beer.volume,
                beer.rating,
                beer.color_intensity
            ));
        }

        lines.join("\n")
    }

    fn csv_prices(&self, table: &PriceTable) -> String {
        let mut lines = vec!["plan,price,storage,databases".to_string()];

        for (name, plan) in table.iter() {
            lines.push(format!(
                "{},{},{},{}",
                csv_escape(name),
                csv_escape(&plan.price),
                csv_escape(&plan.storage),
                plan.databases
            ));
        }

        lines.join("\n")
    }
}

const BEER_CSV_HEADER: &str = "name,price,volume,rating,colorIntensity";

fn json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::Plan;

    fn make_beer() -> Beer {
        Beer {
            name: "Brew Age Affenkönig".to_string(),
            price: 3.49,
            volume: 33,
            rating: 70,
            color_intensity: 4.0 / 13.0 * 100.0,
        }
    }

    fn make_table() -> PriceTable {
        let mut table = PriceTable::new();
        table.insert("Personal", Plan::new("$5", "1GB", 1)).unwrap();
        table.insert("Small Business", Plan::new("$25", "10GB", 5)).unwrap();
        table
    }

    #[test]
    fn test_table_single() {
        let output = Formatter::new(OutputFormat::Table).format_beer(&make_beer());
        assert!(output.contains("Name:    Brew Age Affenkönig"));
        assert!(output.contains("Price:   3.49 EUR"));
        assert!(output.contains("Volume:  33cl"));
        assert!(output.contains("Color:   30.8% EBC"));
    }

    #[test]
    fn test_table_beers() {
        let output = Formatter::new(OutputFormat::Table).format_beers(&[make_beer(), make_beer()]);
        assert!(output.contains("Price"));
        assert!(output.contains("Brew Age Affenkönig"));
        assert!(output.contains("Total: 2 beers"));
    }

    #[test]
    fn test_empty_beers() {
        assert_eq!(Formatter::new(OutputFormat::Json).format_beers(&[]), "[]");
        assert_eq!(Formatter::new(OutputFormat::Table).format_beers(&[]), "No beers found.");
        assert_eq!(Formatter::new(OutputFormat::Csv).format_beers(&[]), BEER_CSV_HEADER);
    }

    #[test]
    fn test_json_beer() {
        let output = Formatter::new(OutputFormat::Json).format_beer(&make_beer());
        let parsed: Beer = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, make_beer());
        assert!(output.contains("\"colorIntensity\""));
    }

    #[test]
    fn test_markdown_beers() {
        let output = Formatter::new(OutputFormat::Markdown).format_beers(&[make_beer()]);
        assert!(output.starts_with("| Name | Price |"));
        assert!(output.contains("| Brew Age Affenkönig | 3.49 | 33cl | 70% | 30.8 |"));
        assert!(output.contains("*1 beers found*"));
    }

    #[test]
    fn test_csv_beers_escapes_names() {
        let mut beer = make_beer();
        beer.name = "Stout, \"Imperial\"".to_string();
        let output = Formatter::new(OutputFormat::Csv).format_beers(&[beer]);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], BEER_CSV_HEADER);
        assert!(lines[1].starts_with("\"Stout, \"\"Imperial\"\"\",3.49,33,70,"));
    }

    #[test]
    fn test_prices_table() {
        let output = Formatter::new(OutputFormat::Table).format_prices(&make_table());
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Plan"));
        assert!(lines[2].starts_with("Personal"));
        assert!(lines[3].contains("10GB"));
    }

    #[test]
    fn test_prices_json() {
        let output = Formatter::new(OutputFormat::Json).format_prices(&make_table());
        let parsed: PriceTable = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, make_table());
    }

    #[test]
    fn test_prices_csv_and_markdown() {
        let csv = Formatter::new(OutputFormat::Csv).format_prices(&make_table());
        assert_eq!(csv, "plan,price,storage,databases\nPersonal,$5,1GB,1\nSmall Business,$25,10GB,5");

        let md = Formatter::new(OutputFormat::Markdown).format_prices(&make_table());
        assert!(md.contains("| Personal | $5 | 1GB | 1 |"));
    }

    #[test]
    fn test_empty_prices_table() {
        let output = Formatter::new(OutputFormat::Table).format_prices(&PriceTable::new());
        assert_eq!(output, "No plans found.");
    }
}
