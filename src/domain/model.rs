use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// How a team is billed. Stored on disk as the boolean `FullSalary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum BillingTier {
    FullSalary,
    #[default]
    Reduced,
}

impl BillingTier {
    /// Daily cost rate in currency units.
    pub fn daily_rate(self) -> f64 {
        match self {
            BillingTier::FullSalary => 10.0,
            BillingTier::Reduced => 5.0,
        }
    }

    pub fn is_full_salary(self) -> bool {
        matches!(self, BillingTier::FullSalary)
    }
}

impl From<bool> for BillingTier {
    fn from(full_salary: bool) -> Self {
        if full_salary {
            BillingTier::FullSalary
        } else {
            BillingTier::Reduced
        }
    }
}

impl From<BillingTier> for bool {
    fn from(tier: BillingTier) -> Self {
        tier.is_full_salary()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Programmer {
    pub first_name: String,
    pub last_name: String,
    pub activity: String,
    #[serde(with = "start_date_serde")]
    pub start_date: NaiveDateTime,
    /// Days spent on the current activity so far.
    pub duration: i64,
}

impl Programmer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        activity: impl Into<String>,
        start_date: NaiveDateTime,
        duration: i64,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            activity: activity.into(),
            start_date,
            duration,
        }
    }

    /// `None` when the sum falls outside chrono's calendar.
    pub fn end_date(&self) -> Option<NaiveDateTime> {
        TimeDelta::try_days(self.duration)
            .and_then(|delta| self.start_date.checked_add_signed(delta))
    }

    pub fn total_cost(&self, tier: BillingTier) -> f64 {
        tier.daily_rate() * self.duration as f64
    }
}

impl fmt::Display for Programmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is working on {}.",
            self.first_name, self.last_name, self.activity
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectTeam {
    pub team_name: String,
    #[serde(rename = "FullSalary", default)]
    pub tier: BillingTier,
    #[serde(default, deserialize_with = "null_as_default")]
    pub programmers: Vec<Programmer>,
}

impl ProjectTeam {
    pub fn new(team_name: impl Into<String>, tier: BillingTier) -> Self {
        Self {
            team_name: team_name.into(),
            tier,
            programmers: Vec::new(),
        }
    }

    pub fn add_programmer(&mut self, programmer: Programmer) {
        self.programmers.push(programmer);
    }

    pub fn total_cost(&self, programmer: &Programmer) -> f64 {
        programmer.total_cost(self.tier)
    }
}

/// The whole company: teams in file order, each owning its programmers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    teams: Vec<ProjectTeam>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_teams(teams: Vec<ProjectTeam>) -> Self {
        Self { teams }
    }

    pub fn teams(&self) -> &[ProjectTeam] {
        &self.teams
    }

    pub fn add_team(&mut self, team: ProjectTeam) {
        self.teams.push(team);
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn programmers(&self) -> impl Iterator<Item = &Programmer> {
        self.teams.iter().flat_map(|team| team.programmers.iter())
    }

    /// Adds one day to every programmer. Not idempotent: run it once per period.
    /// Durations are unbounded; `i64::MAX` wraps instead of panicking.
    pub fn advance(&mut self) {
        for team in &mut self.teams {
            for programmer in &mut team.programmers {
                programmer.duration = programmer.duration.wrapping_add(1);
            }
        }
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn programmer_count(&self) -> usize {
        self.teams.iter().map(|team| team.programmers.len()).sum()
    }

    pub fn total_days_consumed(&self) -> i64 {
        self.programmers()
            .fold(0i64, |total, p| total.wrapping_add(p.duration))
    }

    // Same sum as total_days_consumed. There is no separate contracted-days
    // figure in the data, so both report lines show the same number.
    pub fn total_days_in_charge(&self) -> i64 {
        self.programmers()
            .fold(0i64, |total, p| total.wrapping_add(p.duration))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Serde helper for `StartDate`.
///
/// Writes `2024-01-01T00:00:00`. Reads that, RFC 3339 with an offset (the
/// offset is dropped, wall-clock time kept) or a bare `2024-01-01`.
mod start_date_serde {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid StartDate '{}'", raw)))
    }

    pub(super) fn parse(raw: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw, FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
    }
}
