//! GitHub GraphQL wire types for the contribution calendar query.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::{FetchError, FetchResult};
use crate::models::DayRecord;

pub const CONTRIBUTIONS_QUERY: &str = r#"
  query GitHubContributions($username: String!, $from: DateTime!, $to: DateTime!) {
    user(login: $username) {
      contributionsCollection(from: $from, to: $to) {
        contributionCalendar {
          totalContributions
          weeks {
            contributionDays {
              contributionCount
              date
              weekday
            }
          }
        }
      }
    }
  }
"#;

#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: QueryVariables<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryVariables<'a> {
    pub username: &'a str,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseData {
    #[serde(default)]
    pub user: Option<UserNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNode {
    pub contributions_collection: Option<ContributionsCollection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    pub contribution_calendar: Option<ContributionCalendar>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    #[serde(default)]
    pub total_contributions: u64,
    #[serde(default)]
    pub weeks: Vec<ContributionWeek>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    #[serde(default)]
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub contribution_count: u32,
    #[serde(default)]
    pub date: String,
    pub weekday: u8,
}

impl GraphQlResponse {
    /// Unwrap the calendar, turning GraphQL errors into [`FetchError::GraphQl`].
    pub fn into_calendar(self, year: i32) -> FetchResult<Option<ContributionCalendar>> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            return Err(FetchError::GraphQl {
                year,
                messages: errors.into_iter().map(|e| e.message).collect(),
            });
        }

        Ok(self
            .data
            .and_then(|d| d.user)
            .and_then(|u| u.contributions_collection)
            .and_then(|c| c.contribution_calendar))
    }
}

/// Flatten calendar weeks into one record per day.
///
/// Days without a date are skipped. The weekday is taken from the API and the
/// year is derived from the date.
pub fn flatten_calendar(calendar: &ContributionCalendar) -> FetchResult<Vec<DayRecord>> {
    let mut records = Vec::with_capacity(calendar.weeks.len() * 7);

    for day in calendar.weeks.iter().flat_map(|w| &w.contribution_days) {
        if day.date.is_empty() {
            continue;
        }
        let date = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d")
            .map_err(|e| FetchError::Decode(format!("invalid date '{}': {}", day.date, e)))?;
        records.push(DayRecord {
            date,
            count: day.contribution_count,
            weekday: day.weekday,
            year: date.year(),
        });
    }

    Ok(records)
}
