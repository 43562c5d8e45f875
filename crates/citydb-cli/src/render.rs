//! Plain-text rendering of cities and reports.

use citydb_core::theme::Theme;
use citydb_core::{City, RepoStats};
use std::io::{self, Write};

/// Inserts `,` between groups of three digits of an unsigned integer string.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1234567` → `1,234,567`
pub fn format_count(n: impl Into<u128>) -> String {
    group_digits(&n.into().to_string())
}

/// Two decimals with thousands separators: `1234.5` → `1,234.50`
pub fn format_decimal(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{}.{frac}", group_digits(int))
}

pub fn describe(city: &City) -> String {
    format!(
        "{} - {} km², {} inhabitants",
        city.name(),
        format_decimal(city.area()),
        format_count(city.population())
    )
}

/// Writes an aligned three-column table.
pub fn write_table<W: Write>(out: &mut W, cities: &[&City]) -> io::Result<()> {
    if cities.is_empty() {
        return writeln!(out, "No cities.");
    }

    let rows: Vec<(&str, String, String)> = cities
        .iter()
        .map(|c| (c.name(), format_decimal(c.area()), format_count(c.population())))
        .collect();

    let headers = ("Name", "Area (km²)", "Population");
    let w_name = rows
        .iter()
        .map(|r| r.0.chars().count())
        .chain([headers.0.len()])
        .max()
        .unwrap_or_default();
    let w_area = rows
        .iter()
        .map(|r| r.1.len())
        .chain([headers.1.chars().count()])
        .max()
        .unwrap_or_default();
    let w_pop = rows
        .iter()
        .map(|r| r.2.len())
        .chain([headers.2.len()])
        .max()
        .unwrap_or_default();

    writeln!(
        out,
        "{:<w_name$}  {:>w_area$}  {:>w_pop$}",
        headers.0, headers.1, headers.2
    )?;
    writeln!(out, "{}", "-".repeat(w_name + w_area + w_pop + 4))?;
    for (name, area, pop) in &rows {
        writeln!(out, "{name:<w_name$}  {area:>w_area$}  {pop:>w_pop$}")?;
    }
    Ok(())
}

pub fn write_stats<W: Write>(out: &mut W, stats: &RepoStats) -> io::Result<()> {
    writeln!(out, "Repository statistics:")?;
    writeln!(out, "  Cities: {}", stats.cities)?;
    writeln!(out, "  Total population: {}", format_count(stats.total_population))?;
    writeln!(out, "  Total area: {} km²", format_decimal(stats.total_area))
}

pub fn write_theme<W: Write>(out: &mut W, theme: Theme) -> io::Result<()> {
    let p = theme.palette();
    writeln!(
        out,
        "Theme: {theme} (bg {}, fg {}, button_bg {}, button_fg {})",
        p.bg, p.fg, p.button_bg, p.button_fg
    )
}
