use std::collections::HashSet;

use crate::favorites::state::FavoriteEntry;

/// Summary figures for the favorites page header.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FavoritesStats {
    pub count: usize,
    /// Mean `vote_average`; 0.0 for an empty list.
    pub average_rating: f64,
    /// Distinct release years. Entries without a date don't count.
    pub distinct_years: usize,
}

impl FavoritesStats {
    pub fn from_entries(entries: &[FavoriteEntry]) -> Self {
        if entries.is_empty() {
            return Self::default();
        }

        let total: f64 = entries.iter().map(|e| e.vote_average).sum();
        let years: HashSet<i32> = entries.iter().filter_map(|e| e.release_year()).collect();

        Self {
            count: entries.len(),
            average_rating: total / entries.len() as f64,
            distinct_years: years.len(),
        }
    }

    /// Average rating with one decimal, e.g. "7.5".
    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MovieId;
    use chrono::Utc;

    fn entry(id: u64, date: &str, rating: f64) -> FavoriteEntry {
        FavoriteEntry {
            id: MovieId(id),
            title: format!("Movie {}", id),
            poster_path: None,
            release_date: date.to_string(),
            vote_average: rating,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn empty_list_has_zero_stats() {
        let stats = FavoritesStats::from_entries(&[]);
        assert_eq!(stats, FavoritesStats::default());
        assert_eq!(stats.average_label(), "0.0");
    }

    #[test]
    fn averages_and_counts_years() {
        let stats = FavoritesStats::from_entries(&[
            entry(1, "1999-03-31", 8.0),
            entry(2, "1999-10-15", 7.0),
            entry(3, "2010-07-15", 9.0),
            entry(4, "", 6.0),
        ]);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.average_label(), "7.5");
        assert_eq!(stats.distinct_years, 2);
    }
}
