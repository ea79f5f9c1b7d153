//! Chart data for the metrics page: stable update counts per Fedora release,
//! one series per update type.

use serde::Serialize;

use crate::error::ShellError;
use crate::models::ReleaseStats;
use crate::utils::script_safe_json;

/// Update types in series order, with their chart labels.
pub const UPDATE_TYPES: &[(&str, &str)] = &[
    ("bugfix", "Bug fixes"),
    ("enhancement", "Enhancements"),
    ("security", "Security updates"),
    ("newpackage", "New packages"),
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Series {
    pub data: Vec<(usize, u64)>,
    pub label: &'static str,
}

/// JSON strings handed to the charting script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPayload {
    pub data: String,
    pub ticks: String,
}

fn count_for(stats: &ReleaseStats, update_type: &str) -> u64 {
    match update_type {
        "bugfix" => stats.bugfix,
        "enhancement" => stats.enhancement,
        "security" => stats.security,
        "newpackage" => stats.newpackage,
        _ => 0,
    }
}

/// Fedora releases only, oldest first.
pub fn charted_releases(releases: &[ReleaseStats]) -> Vec<&ReleaseStats> {
    let mut charted: Vec<&ReleaseStats> =
        releases.iter().filter(|r| r.name.starts_with('F')).collect();
    charted.sort_by_key(|r| r.version_int);
    charted
}

pub fn series(releases: &[&ReleaseStats]) -> Vec<Series> {
    UPDATE_TYPES
        .iter()
        .map(|&(update_type, label)| Series {
            data: releases
                .iter()
                .enumerate()
                .map(|(i, release)| (i, count_for(release, update_type)))
                .collect(),
            label,
        })
        .collect()
}

pub fn ticks<'a>(releases: &[&'a ReleaseStats]) -> Vec<(usize, &'a str)> {
    releases
        .iter()
        .enumerate()
        .map(|(i, &release)| (i, release.name.as_str()))
        .collect()
}

pub fn chart_payload(releases: &[ReleaseStats]) -> Result<ChartPayload, ShellError> {
    let charted = charted_releases(releases);
    let data = serde_json::to_string(&series(&charted))?;
    let ticks = serde_json::to_string(&ticks(&charted))?;
    tracing::debug!(releases = charted.len(), "Built metrics chart payload");

    Ok(ChartPayload {
        data: script_safe_json(&data),
        ticks: script_safe_json(&ticks),
    })
}
