use crate::core::Ledger;
use chrono::NaiveDateTime;
use std::fmt::{self, Write as _};
use std::io::Write;

pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// One programmer line, with every derived value already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgrammerLine {
    pub last_name: String,
    pub first_name: String,
    pub activity: String,
    pub start: String,
    /// `None` when the end date is beyond the calendar.
    pub end: Option<String>,
    pub duration: i64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamSection {
    pub team_name: String,
    pub lines: Vec<ProgrammerLine>,
}

/// A snapshot of the ledger as text-ready values. Building it never mutates the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub team_count: usize,
    pub programmer_count: usize,
    pub days_consumed: i64,
    pub days_in_charge: i64,
    pub teams: Vec<TeamSection>,
}

impl Report {
    pub fn build(ledger: &Ledger, date_format: &str) -> Self {
        let teams = ledger
            .teams()
            .iter()
            .map(|team| TeamSection {
                team_name: team.team_name.clone(),
                lines: team
                    .programmers
                    .iter()
                    .map(|p| ProgrammerLine {
                        last_name: p.last_name.clone(),
                        first_name: p.first_name.clone(),
                        activity: p.activity.clone(),
                        start: format_date(&p.start_date, date_format),
                        end: p.end_date().map(|end| format_date(&end, date_format)),
                        duration: p.duration,
                        total_cost: team.total_cost(p),
                    })
                    .collect(),
            })
            .collect();

        Self {
            team_count: ledger.team_count(),
            programmer_count: ledger.programmer_count(),
            days_consumed: ledger.total_days_consumed(),
            days_in_charge: ledger.total_days_in_charge(),
            teams,
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}", self)
    }
}

/// Falls back to [`DEFAULT_DATE_FORMAT`] when `format` cannot render a naive date-time.
fn format_date(date: &NaiveDateTime, format: &str) -> String {
    let mut rendered = String::new();
    if write!(rendered, "{}", date.format(format)).is_ok() {
        return rendered;
    }
    tracing::warn!("Date format '{}' not usable here, using {}", format, DEFAULT_DATE_FORMAT);
    date.format(DEFAULT_DATE_FORMAT).to_string()
}

impl fmt::Display for ProgrammerLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}, {}, in charge of {} from {} to {} (duration: {}), this month: {} days (total cost = {:.1}$).",
            self.last_name,
            self.first_name,
            self.activity,
            self.start,
            self.end.as_deref().unwrap_or("out of range"),
            self.duration,
            self.duration,
            self.total_cost
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IT COMPANY - Report:")?;
        writeln!(
            f,
            "IT Company is actually composed of {} Project Teams and {} Programmers",
            self.team_count, self.programmer_count
        )?;
        writeln!(
            f,
            "This month {} days have been consumed by {} programmers and {} days still in charge.",
            self.days_consumed, self.programmer_count, self.days_in_charge
        )?;
        writeln!(f, "PROJECT TEAMS DETAILS:")?;

        for team in &self.teams {
            writeln!(f, "{}:", team.team_name)?;
            for line in &team.lines {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}
