//! Plain-text and JSON rendering of resort records.
//!
//! Every function returns the full output as a `String` ending in a newline
//! so handlers can print it in one call and tests can assert on it.

use skidir_core::ResortRecord;

use crate::OutputFormat;

const NO_RESULTS: &str = "No ski resorts match your search criteria. Try adjusting your filters.";
const NAME_WIDTH: usize = 28;
const LOCATION_WIDTH: usize = 26;

/// Render search results with the "Found N" summary (text formats only).
pub(crate) fn search_results(
    resorts: &[ResortRecord],
    format: OutputFormat,
) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return json(resorts);
    }

    let plural = if resorts.len() == 1 { "" } else { "s" };
    let mut lines = vec![format!("Found {} ski resort{plural}", resorts.len())];

    if resorts.is_empty() {
        lines.push(NO_RESULTS.to_string());
    } else {
        lines.push(String::new());
        match format {
            OutputFormat::Table => lines.extend(table(resorts)),
            OutputFormat::Cards | OutputFormat::Json => {
                for (i, resort) in resorts.iter().enumerate() {
                    if i > 0 {
                        lines.push(String::new());
                    }
                    lines.extend(card(resort));
                }
            }
        }
    }

    Ok(finish(&lines))
}

/// Render a single resort; `table` renders a one-row table.
pub(crate) fn single(resort: &ResortRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => json(resort),
        OutputFormat::Table => Ok(finish(&table(std::slice::from_ref(resort)))),
        OutputFormat::Cards => Ok(finish(&card(resort))),
    }
}

pub(crate) fn states(counts: &[(String, usize)]) -> String {
    if counts.is_empty() {
        return "no resorts loaded\n".to_string();
    }
    let mut lines = vec![format!("{:<20}RESORTS", "STATE")];
    lines.extend(
        counts
            .iter()
            .map(|(state, count)| format!("{state:<20}{count}")),
    );
    finish(&lines)
}

fn json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

fn finish(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn table(resorts: &[ResortRecord]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<NAME_WIDTH$}{:<LOCATION_WIDTH$}{:>9}{:>7}{:>8}{:>8}",
        "NAME", "LOCATION", "SUMMIT", "LIFTS", "TRAILS", "ACRES"
    )];
    for resort in resorts {
        lines.push(format!(
            "{:<NAME_WIDTH$}{:<LOCATION_WIDTH$}{:>9}{:>7}{:>8}{:>8}",
            truncate(&resort.name, NAME_WIDTH - 2),
            truncate(&resort.display_location(), LOCATION_WIDTH - 2),
            with_commas(resort.elevation.summit),
            resort.lifts.total,
            resort.trails.total,
            with_commas(resort.skiable_acres),
        ));
    }
    lines
}

fn card(resort: &ResortRecord) -> Vec<String> {
    let mut lines = vec![resort.name.clone(), resort.display_location()];
    if let Some(description) = resort.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(description.to_string());
    }

    lines.push(String::new());
    lines.push(format!(
        "  Summit:            {} ft",
        with_commas(resort.elevation.summit)
    ));
    lines.push(format!(
        "  Base:              {} ft",
        with_commas(resort.elevation.base)
    ));
    lines.push(format!(
        "  Vertical drop:     {} ft",
        with_commas(resort.elevation.vertical)
    ));
    lines.push(format!(
        "  Skiable acres:     {}",
        with_commas(resort.skiable_acres)
    ));

    lines.push(String::new());
    lines.push("  Lifts & Trails".to_string());
    lines.push(format!("  Total lifts:       {}", resort.lifts.total));
    lines.push(format!("  Chairlifts:        {}", resort.lifts.chairlifts));
    if let Some(gondolas) = resort.lifts.gondolas.filter(|g| *g > 0) {
        lines.push(format!("  Gondolas:          {gondolas}"));
    }
    lines.push(format!("  Total trails:      {}", resort.trails.total));

    let trails = &resort.trails;
    for (label, count) in [
        ("Beginner", trails.beginner),
        ("Intermediate", trails.intermediate),
        ("Advanced", trails.advanced),
        ("Expert", trails.expert),
    ] {
        lines.push(format!(
            "    {label:<16}{count:>4}  {:>5.1}%",
            trails.share(count)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "  Snowmaking:        {}% of trails",
        resort.snowmaking.percentage
    ));
    if let Some(price) = resort.lift_ticket_price {
        lines.push(format!("  Adult lift ticket: {}", format_price(price.adult)));
    }
    if let Some(website) = resort.website.as_deref().filter(|w| !w.is_empty()) {
        lines.push(format!("  Website:           {website}"));
    }
    lines
}

/// `$129` for whole amounts, `$129.5` otherwise.
fn format_price(price: f64) -> String {
    if price.fract().abs() < f64::EPSILON {
        format!("${price:.0}")
    } else {
        format!("${price}")
    }
}

/// Thousands separators: `4241` -> `4,241`.
fn with_commas(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max - 3).collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
