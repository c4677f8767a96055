//! Query engine over one user's picture collection
//!
//! Two independent search modes run against the union of a user's
//! pictures across all albums, deduplicated by identity:
//!
//! - **Tag search**: a textual query in the [`TagQuery`] grammar,
//!   matched against each picture's canonical tag strings
//! - **Date search**: an inclusive calendar-date range matched against
//!   each picture's capture time
//!
//! Both return picture ids in first-match scan order with set
//! semantics: a picture shared into several albums appears at most
//! once. Results can be materialized into a new album with
//! [`User::create_album_from`](crate::model::User::create_album_from),
//! which links the same picture instances by reference.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};

use crate::model::{PictureId, User};

pub mod error;
pub mod parser;

pub use error::QueryError;
pub use parser::TagQuery;

/// Find every picture of `user` satisfying the tag query in `raw`
///
/// # Errors
///
/// Returns `QueryError::EmptyQuery` or `QueryError::MalformedQuery`
/// when the input does not parse; an empty result is not an error.
pub fn search_by_tags(user: &User, raw: &str) -> Result<Vec<PictureId>, QueryError> {
    let query = TagQuery::parse(raw)?;
    Ok(user
        .distinct_pictures()
        .into_iter()
        .filter(|(_, picture)| query.matches(picture.tags()))
        .map(|(id, _)| id)
        .collect())
}

/// Find every picture of `user` captured within `[start, end]`
///
/// Both dates convert to local midnight; the range is inclusive at both
/// ends, so a picture captured exactly at either boundary is included.
///
/// # Errors
///
/// Returns `QueryError::InvalidDateRange` if `start` is after `end`.
pub fn search_by_date(
    user: &User,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<PictureId>, QueryError> {
    if start > end {
        return Err(QueryError::InvalidDateRange);
    }
    let start = local_midnight(start);
    let end = local_midnight(end);

    Ok(user
        .distinct_pictures()
        .into_iter()
        .filter(|(_, picture)| matches!(picture.in_date_range(start, end), Ok(true)))
        .map(|(id, _)| id)
        .collect())
}

fn local_midnight(date: NaiveDate) -> DateTime<Local> {
    let midnight = date.and_time(NaiveTime::MIN);
    match midnight.and_local_timezone(Local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        // Midnight skipped by a DST transition; fall back to UTC midnight
        LocalResult::None => Local.from_utc_datetime(&midnight),
    }
}
