//! Output formatting for CLI display
//!
//! Text renderings of points, countries, and pages used by the shell and the
//! one-shot commands. Optional fields are only rendered when present.

use crate::catalog::{Country, CountryDetails};
use crate::geo::Coordinate;
use crate::points::Point;
use crate::view::{PageView, Surface, ViewStatus};
use colored::Colorize;

/// Format an integer with `,` thousands separators
#[must_use]
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a coordinate with four decimals
#[must_use]
pub fn format_coordinate(coordinate: &Coordinate) -> String {
    format!("{:.4}, {:.4}", coordinate.lat(), coordinate.lng())
}

/// One-line list entry for a point, numbered from 1
#[must_use]
pub fn point_line(index: usize, point: &Point, selected: bool, quiet: bool) -> String {
    if quiet {
        return point.display_name().to_string();
    }

    let marker = if selected { "*" } else { " " };
    let name = if point.is_enriched() {
        point.display_name().green().bold()
    } else {
        point.display_name().normal()
    };
    format!(
        "{marker}{:>4}. {name} ({})",
        index + 1,
        format_coordinate(&point.coordinate()).dimmed()
    )
}

fn detail_lines(details: &CountryDetails) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(region) = &details.region {
        lines.push(format!("  Region:     {region}"));
    }
    if let Some(capital) = &details.capital {
        lines.push(format!("  Capital:    {capital}"));
    }
    if let Some(population) = details.population {
        lines.push(format!("  Population: {}", format_population(population)));
    }
    if let Some(flag) = &details.flag_url {
        lines.push(format!("  Flag:       {}", flag.dimmed()));
    }
    lines
}

/// Multi-line detail card for a point
#[must_use]
pub fn point_card(point: &Point) -> String {
    let mut lines = vec![
        point.display_name().bold().to_string(),
        format!("  Coordinates: {}", format_coordinate(&point.coordinate())),
    ];
    lines.extend(detail_lines(point.details()));
    lines.join("\n")
}

/// One-line catalog entry for a country
#[must_use]
pub fn country_line(country: &Country, quiet: bool) -> String {
    if quiet {
        return country.common_name.clone();
    }

    let location = country.reference.as_ref().map_or_else(
        || "no coordinates".red().to_string(),
        |c| format_coordinate(c).dimmed().to_string(),
    );
    match &country.details.region {
        Some(region) => format!("  {} [{region}] ({location})", country.common_name),
        None => format!("  {} ({location})", country.common_name),
    }
}

/// Header for the list surface, e.g. `Points (3)`
#[must_use]
pub fn list_header(view: &PageView<'_>) -> String {
    format!("Points ({})", view.filtered_len())
        .bold()
        .to_string()
}

/// Message for a view with nothing visible, if any
#[must_use]
pub fn status_message(view: &PageView<'_>) -> Option<&'static str> {
    match view.status() {
        ViewStatus::NoPoints => Some("No points yet. Click the map or pick a country."),
        ViewStatus::NoMatches => Some("No point matches your search."),
        ViewStatus::Showing => None,
    }
}

/// Pagination footer, empty when everything fits on one page
#[must_use]
pub fn page_footer(view: &PageView<'_>) -> String {
    if !view.is_paginated() {
        return String::new();
    }

    let prev = if view.has_prev() {
        "< prev".normal()
    } else {
        "< prev".dimmed()
    };
    let next = if view.has_next() {
        "next >".normal()
    } else {
        "next >".dimmed()
    };
    format!(
        "{prev}  Page {} of {}  {next}",
        view.current_page(),
        view.total_pages()
    )
}

/// Full rendering of the current page for either surface
#[must_use]
pub fn render_page(
    view: &PageView<'_>,
    surface: Surface,
    selected: Option<usize>,
    quiet: bool,
) -> String {
    let mut lines = Vec::new();
    if !quiet {
        lines.push(match surface {
            Surface::List => list_header(view),
            Surface::Map => format!("Markers ({})", view.visible().len())
                .bold()
                .to_string(),
        });
    }

    if let Some(message) = status_message(view) {
        if !quiet {
            lines.push(format!("  {}", message.yellow()));
        }
    } else {
        for entry in view.visible() {
            lines.push(point_line(
                entry.index,
                entry.point,
                selected == Some(entry.index),
                quiet,
            ));
        }
    }

    let footer = page_footer(view);
    if !quiet && !footer.is_empty() {
        lines.push(footer);
    }
    lines.join("\n")
}
