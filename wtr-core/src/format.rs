//! Table formatting for weather lookups.

use std::fmt;

use crate::model::{CurrentConditions, DailyForecast, WeatherPayload};

/// A titled text table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DisplayTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the table for one location.
///
/// `week` decides the columns even when no payload was found, in which case
/// the table has headers but no rows.
pub fn build_table(payload: Option<&WeatherPayload>, week: bool, name: &str) -> DisplayTable {
    let (title, headers) = if week {
        (format!("Weekly forecast for {name}"), vec!["Date", "Temperature", "Description"])
    } else {
        (format!("Weather in {name}"), vec!["Temperature", "Description"])
    };

    let rows = match (payload, week) {
        (Some(WeatherPayload::Forecast(days)), true) => days.iter().map(forecast_row).collect(),
        (Some(WeatherPayload::Current(current)), false) => vec![current_row(current)],
        _ => Vec::new(),
    };

    DisplayTable { title, headers: headers.into_iter().map(String::from).collect(), rows }
}

/// Name shown in the title: the resolved display name, or the capitalized query.
pub fn title_name(display_name: Option<&str>, query: &str) -> String {
    match display_name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => capitalize(query),
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn forecast_row(day: &DailyForecast) -> Vec<String> {
    vec![
        day.date.format("%B %d, %Y").to_string(),
        format!("{:.1}°C - {:.1}°C", day.min_c, day.max_c),
        capitalize(&day.description),
    ]
}

fn current_row(current: &CurrentConditions) -> Vec<String> {
    vec![format!("{:.1}°C", current.temperature_c), capitalize(&current.description)]
}

impl fmt::Display for DisplayTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let border = widths.iter().fold(String::from("+"), |mut acc, w| {
            acc.push_str(&"-".repeat(w + 2));
            acc.push('+');
            acc
        });

        writeln!(f, "{}", self.title)?;
        writeln!(f, "{border}")?;
        write_row(f, &self.headers, &widths)?;
        writeln!(f, "{border}")?;
        for row in &self.rows {
            write_row(f, row, &widths)?;
        }
        write!(f, "{border}")
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    write!(f, "|")?;
    for (cell, &width) in cells.iter().zip(widths) {
        write!(f, " {cell:<width$} |")?;
    }
    writeln!(f)
}
