// Rust guideline compliant 2026-10-19

//! Backlog statistics computed over effective status.
//!
//! Every figure here classifies entries by their effective status, so a
//! stale Unplayed game that derivation reports as Abandoned no longer counts
//! as unplayed.

use crate::oracle::effective_statuses;
use crate::{PileEntry, Status};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Assumed hours needed to finish an average game.
const AVERAGE_GAME_HOURS: f64 = 20.0;

/// Assumed hours of play per week.
const HOURS_PER_WEEK: f64 = 2.0;

/// Playtime (minutes) above which a game counts as genuinely played.
const PLAYED_MINUTES: u32 = 60;

/// A game paired with a price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedGame {
    /// Game name.
    pub name: String,
    /// Price used for backlog value.
    pub price: f64,
}

/// A game paired with its purchase date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatedGame {
    /// Game name.
    pub name: String,
    /// Purchase date.
    pub purchase_date: DateTime<Utc>,
}

/// The blunt summary of a pile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RealityCheck {
    /// Games in the pile.
    pub total_games: usize,
    /// Games whose effective status is Unplayed.
    pub unplayed_games: usize,
    /// Years needed to clear the unplayed games at the assumed pace.
    pub completion_years: f64,
    /// Value of the unplayed games.
    pub money_wasted: f64,
    /// The priciest unplayed game, if any has a price.
    pub most_expensive_unplayed: Option<PricedGame>,
    /// The unplayed game bought longest ago, if any has a purchase date.
    pub oldest_unplayed: Option<DatedGame>,
}

/// Points contributed by each shame component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShameBreakdown {
    /// Two points per unplayed game.
    pub unplayed_games: f64,
    /// Half a point per unit of money wasted.
    pub money_wasted: f64,
    /// Ten points per year to complete, capped at 100.
    pub time_to_complete: f64,
    /// Three extra points per game never launched.
    pub never_played: f64,
}

/// Rank band for a shame score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShameRank {
    /// Score below 50.
    #[serde(rename = "Casual Collector")]
    CasualCollector,
    /// Score below 100.
    #[serde(rename = "Sale Victim")]
    SaleVictim,
    /// Score below 200.
    #[serde(rename = "Serial Buyer")]
    SerialBuyer,
    /// Score below 400.
    #[serde(rename = "Pile Builder")]
    PileBuilder,
    /// Everything above.
    #[serde(rename = "The Pile Master")]
    PileMaster,
}

impl ShameRank {
    /// Maps a score to its rank band.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 50.0 {
            ShameRank::CasualCollector
        } else if score < 100.0 {
            ShameRank::SaleVictim
        } else if score < 200.0 {
            ShameRank::SerialBuyer
        } else if score < 400.0 {
            ShameRank::PileBuilder
        } else {
            ShameRank::PileMaster
        }
    }

    /// Display name of the rank.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            ShameRank::CasualCollector => "Casual Collector",
            ShameRank::SaleVictim => "Sale Victim",
            ShameRank::SerialBuyer => "Serial Buyer",
            ShameRank::PileBuilder => "Pile Builder",
            ShameRank::PileMaster => "The Pile Master",
        }
    }

    /// Message shown alongside the rank.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ShameRank::CasualCollector => "You have a reasonable relationship with your backlog",
            ShameRank::SaleVictim => "Steam sales got the better of you",
            ShameRank::SerialBuyer => "You collect games like Pokemon cards",
            ShameRank::PileBuilder => "Your backlog has structural integrity",
            ShameRank::PileMaster => "Your pile of shame is visible from space",
        }
    }
}

/// A user's shame score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShameScore {
    /// Total score.
    pub score: f64,
    /// Per-component points.
    pub breakdown: ShameBreakdown,
    /// Rank band.
    pub rank: ShameRank,
    /// Message for the rank.
    pub message: String,
}

/// Purchase count for one genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    /// Genre name.
    pub genre: String,
    /// Games bought in the genre.
    pub count: usize,
}

/// Behavioral patterns derived from a pile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BehavioralInsights {
    /// Observed buying patterns.
    pub buying_patterns: Vec<String>,
    /// Top five bought genres, most bought first.
    pub genre_preferences: Vec<GenreCount>,
    /// Percentage of games completed.
    pub completion_rate: f64,
    /// Genre with the largest share of unplayed purchases.
    pub most_neglected_genre: Option<String>,
    /// Suggestions.
    pub recommendations: Vec<String>,
}

/// Counts genres while remembering first-seen order for stable tie-breaks.
#[derive(Debug, Default)]
struct GenreCounter {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl GenreCounter {
    fn add(&mut self, genres: &[String]) {
        for genre in genres {
            let count = self.counts.entry(genre.clone()).or_insert_with(|| {
                self.order.push(genre.clone());
                0
            });
            *count += 1;
        }
    }

    fn get(&self, genre: &str) -> usize {
        self.counts.get(genre).copied().unwrap_or(0)
    }

    fn most_common(&self, limit: usize) -> Vec<GenreCount> {
        let mut ranked: Vec<GenreCount> = self
            .order
            .iter()
            .map(|genre| GenreCount {
                genre: genre.clone(),
                count: self.get(genre),
            })
            .collect();
        // Stable: equal counts keep first-seen order.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(limit);
        ranked
    }
}

fn classify(entries: &[PileEntry], now: DateTime<Utc>) -> Vec<(&PileEntry, Status)> {
    entries
        .iter()
        .zip(effective_statuses(entries, now))
        .collect()
}

/// Computes the reality check for a pile.
///
/// # Arguments
///
/// * `entries` - The user's pile
/// * `now` - The current instant, used for effective status
///
/// # Returns
///
/// The reality check figures.
pub fn reality_check(entries: &[PileEntry], now: DateTime<Utc>) -> RealityCheck {
    let unplayed: Vec<&PileEntry> = classify(entries, now)
        .into_iter()
        .filter(|(_, status)| *status == Status::Unplayed)
        .map(|(entry, _)| entry)
        .collect();

    let money_wasted = unplayed.iter().map(|entry| entry.effective_price()).sum();

    let mut most_expensive_unplayed: Option<PricedGame> = None;
    for entry in &unplayed {
        let price = entry.effective_price();
        let current_max = most_expensive_unplayed.as_ref().map_or(0.0, |game| game.price);
        if price > current_max {
            most_expensive_unplayed = Some(PricedGame {
                name: entry.game.name.clone(),
                price,
            });
        }
    }

    let oldest_unplayed = unplayed
        .iter()
        .filter_map(|entry| entry.purchase_date.map(|date| (entry, date)))
        .fold(None::<(&&PileEntry, DateTime<Utc>)>, |oldest, (entry, date)| match oldest {
            Some((_, oldest_date)) if oldest_date <= date => oldest,
            _ => Some((entry, date)),
        })
        .map(|(entry, date)| DatedGame {
            name: entry.game.name.clone(),
            purchase_date: date,
        });

    let completion_years =
        unplayed.len() as f64 * AVERAGE_GAME_HOURS / (HOURS_PER_WEEK * 52.0);

    RealityCheck {
        total_games: entries.len(),
        unplayed_games: unplayed.len(),
        completion_years,
        money_wasted,
        most_expensive_unplayed,
        oldest_unplayed,
    }
}

/// Computes the shame score for a pile.
///
/// # Arguments
///
/// * `entries` - The user's pile
/// * `now` - The current instant, used for effective status
///
/// # Returns
///
/// The score, its breakdown, and the rank band.
pub fn shame_score(entries: &[PileEntry], now: DateTime<Utc>) -> ShameScore {
    let reality = reality_check(entries, now);

    let never_played_count = classify(entries, now)
        .into_iter()
        .filter(|(entry, status)| entry.playtime_minutes == 0 && *status == Status::Unplayed)
        .count();

    let breakdown = ShameBreakdown {
        unplayed_games: reality.unplayed_games as f64 * 2.0,
        money_wasted: reality.money_wasted * 0.5,
        time_to_complete: (reality.completion_years * 10.0).min(100.0),
        never_played: never_played_count as f64 * 3.0,
    };

    let score = breakdown.unplayed_games
        + breakdown.money_wasted
        + breakdown.time_to_complete
        + breakdown.never_played;
    let rank = ShameRank::from_score(score);

    ShameScore {
        score,
        breakdown,
        rank,
        message: rank.message().to_string(),
    }
}

/// Derives behavioral insights from a pile.
///
/// # Arguments
///
/// * `entries` - The user's pile
/// * `now` - The current instant, used for effective status
///
/// # Returns
///
/// Buying patterns, genre preferences, and recommendations. An empty pile
/// yields empty insights.
pub fn insights(entries: &[PileEntry], now: DateTime<Utc>) -> BehavioralInsights {
    if entries.is_empty() {
        return BehavioralInsights::default();
    }

    let classified = classify(entries, now);
    let total = entries.len() as f64;

    let mut bought = GenreCounter::default();
    let mut played = GenreCounter::default();
    for (entry, status) in &classified {
        bought.add(&entry.game.genres);
        if entry.playtime_minutes > PLAYED_MINUTES
            && !matches!(status, Status::Unplayed | Status::Abandoned)
        {
            played.add(&entry.game.genres);
        }
    }

    let mut most_neglected_genre: Option<(String, f64)> = None;
    for genre in &bought.order {
        let bought_count = bought.get(genre) as f64;
        let ratio = (bought_count - played.get(genre) as f64) / bought_count;
        if most_neglected_genre
            .as_ref()
            .map_or(true, |(_, best)| ratio > *best)
        {
            most_neglected_genre = Some((genre.clone(), ratio));
        }
    }
    let most_neglected_genre = most_neglected_genre.map(|(genre, _)| genre);

    let completed = classified
        .iter()
        .filter(|(_, status)| *status == Status::Completed)
        .count();
    let completion_rate = completed as f64 / total * 100.0;

    let indie_ratio = entries
        .iter()
        .filter(|entry| {
            entry
                .purchase_price
                .is_some_and(|price| price != 0.0 && price < 20.0)
        })
        .count() as f64
        / total;

    let free_games = entries
        .iter()
        .filter(|entry| entry.purchase_price.map_or(true, |price| price == 0.0))
        .count();

    let unplayed_value: f64 = classified
        .iter()
        .filter(|(_, status)| *status == Status::Unplayed)
        .map(|(entry, _)| entry.effective_price())
        .sum();

    let mut buying_patterns = Vec::new();
    if bought.get("RPG") > 3 && played.get("RPG") < 2 {
        buying_patterns.push("You buy RPGs but rarely commit to their epic length".to_string());
    }
    if bought.get("Action") > bought.get("Strategy") && played.get("Strategy") > played.get("Action") {
        buying_patterns.push("You buy action games but actually prefer strategy".to_string());
    }
    if indie_ratio > 0.7 {
        buying_patterns.push("You're an indie game collector with refined taste".to_string());
    }
    if free_games > 10 {
        buying_patterns.push("You never miss a free game, do you?".to_string());
    }

    let mut recommendations = Vec::new();
    if completion_rate < 20.0 {
        recommendations.push("Try finishing one game before buying three more".to_string());
    }
    if let Some(genre) = &most_neglected_genre {
        recommendations.push(format!(
            "Stop buying {} games until you play the ones you have",
            genre
        ));
    }
    if entries.len() > 50 {
        recommendations
            .push("Consider the Pile amnesty program for games you'll never play".to_string());
    }
    if unplayed_value > 100.0 {
        recommendations.push(format!(
            "You have ${:.0} worth of unplayed games. That's a nice vacation!",
            unplayed_value
        ));
    }

    BehavioralInsights {
        buying_patterns,
        genre_preferences: bought.most_common(5),
        completion_rate,
        most_neglected_genre,
        recommendations,
    }
}
