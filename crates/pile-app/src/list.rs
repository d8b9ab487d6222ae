// Rust guideline compliant 2026-10-19

//! Listing, filtering, and pagination helpers for piles.
//!
//! Effective status is computed once per entry here, at the read
//! boundary; filters see the derived status, never the stored one.

use crate::error::{AppError, Result};
use crate::view::PileEntryView;
use chrono::{DateTime, Utc};
use pile_core::validation::validate_pagination;
use pile_core::{effective_statuses, PileEntry, Status};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

/// Field a listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Playtime in minutes.
    Playtime,
    /// Positive review percentage; unrated games always sort last.
    Rating,
    /// Entry creation time.
    CreatedAt,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    #[default]
    Desc,
}

/// List options for filtering, sorting, and paginating a pile.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Filter by effective status.
    pub status: Option<Status>,
    /// Filter by genre (case-insensitive).
    pub genre: Option<String>,
    /// Sort field; creation time when absent.
    pub sort: Option<SortField>,
    /// Sort direction.
    pub direction: SortDirection,
    /// Entries to skip.
    pub offset: usize,
    /// Maximum entries to return.
    pub limit: usize,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            status: None,
            genre: None,
            sort: None,
            direction: SortDirection::Desc,
            offset: 0,
            limit: 100,
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize)]
pub struct PilePage {
    /// Entries on this page.
    pub entries: Vec<PileEntryView>,
    /// Entries matching the filters, across all pages.
    pub total: usize,
    /// Offset of this page.
    pub offset: usize,
    /// Page size requested.
    pub limit: usize,
}

/// Parses a status filter value.
///
/// # Errors
///
/// Returns an error if the status is invalid.
pub fn parse_status(value: &str) -> Result<Status> {
    Ok(value.parse()?)
}

/// Parses a sort field (`playtime`, `rating`, `created_at`).
///
/// # Errors
///
/// Returns an error if the field is not sortable.
pub fn parse_sort_field(value: &str) -> Result<SortField> {
    match value.to_lowercase().as_str() {
        "playtime" => Ok(SortField::Playtime),
        "rating" => Ok(SortField::Rating),
        "created_at" => Ok(SortField::CreatedAt),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid sort field: {}. Must be one of: playtime, rating, created_at",
            value
        ))),
    }
}

/// Parses a sort direction (`asc`, `desc`).
///
/// # Errors
///
/// Returns an error if the direction is invalid.
pub fn parse_sort_direction(value: &str) -> Result<SortDirection> {
    match value.to_lowercase().as_str() {
        "asc" => Ok(SortDirection::Asc),
        "desc" => Ok(SortDirection::Desc),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid sort direction: {}. Must be asc or desc",
            value
        ))),
    }
}

/// Builds one page of a pile listing.
///
/// # Arguments
///
/// * `entries` - The stored pile
/// * `options` - Filters, sort, and pagination
/// * `now` - The current instant, used for effective status
///
/// # Returns
///
/// The requested page and the total number of matching entries.
///
/// # Errors
///
/// Returns an error if the pagination parameters are out of range.
pub fn list_pile(
    entries: &[PileEntry],
    options: &ListOptions,
    now: DateTime<Utc>,
) -> Result<PilePage> {
    let (offset, limit) = validate_pagination(options.offset, options.limit)?;

    let views: Vec<PileEntryView> = entries
        .iter()
        .zip(effective_statuses(entries, now))
        .map(|(entry, status)| PileEntryView::new(entry, status))
        .collect();

    let mut views = apply_filters(views, options);
    sort_views(&mut views, options.sort, options.direction);

    let total = views.len();
    let entries = views.into_iter().skip(offset).take(limit).collect();

    Ok(PilePage {
        entries,
        total,
        offset,
        limit,
    })
}

fn apply_filters(views: Vec<PileEntryView>, options: &ListOptions) -> Vec<PileEntryView> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    let predicate = |view: &PileEntryView| {
        if let Some(status) = options.status {
            if view.status != status {
                return false;
            }
        }

        if let Some(ref genre) = options.genre {
            if !view.game.genres.iter().any(|g| g.eq_ignore_ascii_case(genre)) {
                return false;
            }
        }

        true
    };

    if views.len() >= PARALLEL_THRESHOLD {
        views.into_par_iter().filter(|v| predicate(v)).collect()
    } else {
        views.into_iter().filter(predicate).collect()
    }
}

fn directed<T: Ord>(a: T, b: T, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => a.cmp(&b),
        SortDirection::Desc => b.cmp(&a),
    }
}

/// Orders optional values by direction, keeping `None` last either way.
fn nulls_last<T: Ord>(a: Option<T>, b: Option<T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(a, b, direction),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn sort_views(views: &mut [PileEntryView], field: Option<SortField>, direction: SortDirection) {
    match field {
        Some(SortField::Playtime) => views.sort_by(|a, b| {
            directed(a.playtime_minutes, b.playtime_minutes, direction)
        }),
        Some(SortField::Rating) => views.sort_by(|a, b| {
            nulls_last(a.game.rating_percent, b.game.rating_percent, direction)
        }),
        Some(SortField::CreatedAt) => {
            views.sort_by(|a, b| nulls_last(a.created_at, b.created_at, direction))
        }
        None => views.sort_by(|a, b| nulls_last(a.created_at, b.created_at, SortDirection::Desc)),
    }
}
