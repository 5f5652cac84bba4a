use super::{mode, value_counts};
use crate::models::TripTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    /// `None` when the city file has no gender column.
    pub genders: Option<Vec<(String, usize)>>,
    /// `None` when the column is missing or holds no values for this selection.
    pub birth_years: Option<BirthYearStats>,
}

/// Blank cells are skipped; implausible birth years are reported as they are.
pub fn user_stats(table: &TripTable) -> UserStats {
    let trips = &table.trips;

    let user_types = value_counts(trips.iter().filter_map(|t| t.user_type.clone()));

    let genders = table
        .has_gender
        .then(|| value_counts(trips.iter().filter_map(|t| t.gender.clone())));

    let birth_years = if table.has_birth_year {
        let years = || trips.iter().filter_map(|t| t.birth_year);
        match (years().min(), years().max(), mode(years())) {
            (Some(earliest), Some(most_recent), Some(most_common)) => Some(BirthYearStats {
                earliest,
                most_recent,
                most_common,
            }),
            _ => None,
        }
    } else {
        None
    };

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}
