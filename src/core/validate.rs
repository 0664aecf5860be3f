//! Data-quality checks on a loaded program.
//!
//! The layout engine tolerates bad sessions (it drops unparseable ones and
//! draws inverted ones with a minimum height); this module reports them so
//! the content source can be fixed.

use crate::models::program::Program;
use crate::models::session::Session;
use crate::utils::time::minutes_between;
use chrono::TimeZone;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnparseableStart { key: String, raw: String },
    UnparseableEnd { key: String, raw: String },
    NonPositiveDuration { key: String, minutes: i64 },
    DuplicateSlug(String),
    DuplicateStage(String),
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::UnparseableStart { key, raw } => {
                write!(f, "'{key}': unparseable start '{raw}' (session hidden)")
            }
            Issue::UnparseableEnd { key, raw } => {
                write!(f, "'{key}': unparseable end '{raw}' (session hidden)")
            }
            Issue::NonPositiveDuration { key, minutes } => {
                write!(f, "'{key}': ends {minutes} min after it starts")
            }
            Issue::DuplicateSlug(slug) => write!(f, "slug '{slug}' is used by more than one session"),
            Issue::DuplicateStage(name) => write!(f, "stage '{name}' appears more than once"),
        }
    }
}

fn check_session<Tz: TimeZone>(session: &Session, tz: &Tz) -> Option<Issue> {
    let key = session.key().to_string();

    let Some(start) = session.start_in(tz) else {
        return Some(Issue::UnparseableStart {
            key,
            raw: session.start.clone(),
        });
    };
    let Some(end) = session.end_in(tz) else {
        return Some(Issue::UnparseableEnd {
            key,
            raw: session.end.clone(),
        });
    };

    (end <= start).then(|| Issue::NonPositiveDuration {
        key,
        minutes: minutes_between(&start, &end).round() as i64,
    })
}

/// All issues in input order: per-session problems first, then duplicates.
pub fn validate<Tz: TimeZone>(program: &Program, tz: &Tz) -> Vec<Issue> {
    let mut issues: Vec<Issue> = program
        .sessions()
        .filter_map(|s| check_session(s, tz))
        .collect();

    let mut seen = HashSet::new();
    issues.extend(
        program
            .sessions()
            .filter_map(|s| s.slug.as_deref())
            .filter(|slug| !seen.insert(*slug))
            .map(|slug| Issue::DuplicateSlug(slug.to_string())),
    );

    let mut seen = HashSet::new();
    issues.extend(
        program
            .stages
            .iter()
            .filter(|st| !seen.insert(st.name.as_str()))
            .map(|st| Issue::DuplicateStage(st.name.clone())),
    );

    issues
}
