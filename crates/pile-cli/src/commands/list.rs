// Rust guideline compliant 2026-10-19

//! Implementation of the `pile list` command.
//!
//! Lists a user's pile with optional filtering by effective status and
//! genre, sorting, and pagination.

use crate::commands::open_repo;
use crate::OutputFormatter;
use anyhow::Result;
use chrono::Utc;
use pile_app::{list_pile, parse_sort_direction, parse_sort_field, parse_status, ListOptions};
use std::path::Path;

/// Filters and paging requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    /// Status filter.
    pub status: Option<String>,
    /// Genre filter.
    pub genre: Option<String>,
    /// Sort field.
    pub sort: Option<String>,
    /// Sort direction.
    pub direction: Option<String>,
    /// Page size; the configured default when absent.
    pub limit: Option<usize>,
    /// Entries to skip.
    pub offset: usize,
}

/// Lists a user's pile.
///
/// # Errors
///
/// Returns an error if:
/// - The `.pile` directory does not exist
/// - A filter, sort, or paging value is invalid
/// - The pile cannot be read
pub fn execute(
    root: Option<&Path>,
    steam_id: &str,
    args: ListArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let repo = open_repo(root)?;
    let config = repo.load_config()?;
    let options = build_options(args, config.default_page_limit)?;

    let entries = repo.open_storage(steam_id)?.load_all()?;
    let page = list_pile(&entries, &options, Utc::now())?;

    println!("{}", formatter.format_page(&page));
    Ok(())
}

fn build_options(args: ListArgs, default_limit: usize) -> Result<ListOptions> {
    let mut options = ListOptions {
        offset: args.offset,
        limit: args.limit.unwrap_or(default_limit),
        genre: args.genre,
        ..ListOptions::default()
    };

    if let Some(status) = args.status {
        options.status = Some(parse_status(&status)?);
    }
    if let Some(sort) = args.sort {
        options.sort = Some(parse_sort_field(&sort)?);
    }
    if let Some(direction) = args.direction {
        options.direction = parse_sort_direction(&direction)?;
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pile_app::{SortDirection, SortField};
    use pile_core::Status;

    #[test]
    fn test_build_options_defaults() {
        let options = build_options(ListArgs::default(), 25).unwrap();
        assert_eq!(options.limit, 25);
        assert_eq!(options.direction, SortDirection::Desc);
        assert!(options.sort.is_none());
    }

    #[test]
    fn test_build_options_parses_values() {
        let args = ListArgs {
            status: Some("abandoned".to_string()),
            sort: Some("rating".to_string()),
            direction: Some("asc".to_string()),
            limit: Some(5),
            ..ListArgs::default()
        };
        let options = build_options(args, 100).unwrap();
        assert_eq!(options.status, Some(Status::Abandoned));
        assert_eq!(options.sort, Some(SortField::Rating));
        assert_eq!(options.direction, SortDirection::Asc);
        assert_eq!(options.limit, 5);
    }

    #[test]
    fn test_build_options_rejects_bad_status() {
        let args = ListArgs {
            status: Some("shelved".to_string()),
            ..ListArgs::default()
        };
        assert!(build_options(args, 100).is_err());
    }
}
