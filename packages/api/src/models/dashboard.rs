use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Aggregates behind the home screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub athletes_by_category: Vec<CategoryCount>,
    pub total_athletes: u64,
    pub active_athletes: u64,
    pub total_users: u64,
    pub reference_year: i32,
}

impl DashboardData {
    /// Active athletes as a rounded percentage of all athletes; 0 when there are none.
    pub fn active_percentage(&self) -> u64 {
        if self.total_athletes == 0 {
            return 0;
        }
        (self.active_athletes as f64 / self.total_athletes as f64 * 100.0).round() as u64
    }

    /// The category with most athletes. On a tie the later entry wins; an empty
    /// breakdown yields `-` with a count of 0.
    pub fn top_category(&self) -> CategoryCount {
        let mut entries = self.athletes_by_category.iter();
        let Some(first) = entries.next() else {
            return CategoryCount {
                category: "-".to_string(),
                count: 0,
            };
        };
        entries
            .fold(first, |prev, current| {
                if prev.count > current.count {
                    prev
                } else {
                    current
                }
            })
            .clone()
    }

    /// Share of all athletes in one category, 0..=100, unrounded (bar widths).
    pub fn category_share(&self, entry: &CategoryCount) -> f64 {
        if self.total_athletes == 0 {
            return 0.0;
        }
        entry.count as f64 / self.total_athletes as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str, count: u64) -> CategoryCount {
        CategoryCount {
            category: category.to_string(),
            count,
        }
    }

    fn sample() -> DashboardData {
        serde_json::from_str(
            r#"{
                "athletesByCategory": [
                    {"category": "Sub-11", "count": 4},
                    {"category": "Sub-13", "count": 9},
                    {"category": "Sub-15", "count": 9},
                    {"category": "Adulto", "count": 2}
                ],
                "totalAthletes": 24,
                "activeAthletes": 17,
                "totalUsers": 5,
                "referenceYear": 2025
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_active_percentage() {
        assert_eq!(sample().active_percentage(), 71);

        let empty = DashboardData {
            athletes_by_category: vec![],
            total_athletes: 0,
            active_athletes: 0,
            total_users: 1,
            reference_year: 2025,
        };
        assert_eq!(empty.active_percentage(), 0);
        assert_eq!(empty.top_category(), entry("-", 0));
    }

    #[test]
    fn test_top_category_tie_goes_to_later_entry() {
        assert_eq!(sample().top_category(), entry("Sub-15", 9));
    }

    #[test]
    fn test_category_share() {
        let data = sample();
        assert_eq!(data.category_share(&entry("Sub-11", 4)), 4.0 / 24.0 * 100.0);
        assert_eq!(data.category_share(&entry("Adulto", 12)), 50.0);
    }
}
