//! Submission validation.
//!
//! Uses Stillwater's `Validation` to collect every problem with a
//! submission before picking the one reported to the caller.

use super::error::ChallengeError;
use crate::core::CHALLENGE_DAYS;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ChallengeError>>;

/// A submission that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub index: usize,
    pub count: u32,
}

pub fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

fn check_index(index: usize) -> Check {
    if index < CHALLENGE_DAYS {
        Validation::success(())
    } else {
        Validation::fail(ChallengeError::DayOutOfRange { index })
    }
}

fn check_count(raw: &str, count: Option<u32>) -> Check {
    match count {
        Some(_) => Validation::success(()),
        None => Validation::fail(ChallengeError::InvalidCount {
            input: raw.to_string(),
        }),
    }
}

/// Validate a raw submission.
///
/// When both the index and the count are bad, the index error wins: it
/// points at a caller bug rather than user input.
pub fn validate_submission(index: usize, raw: &str) -> Result<Submission, ChallengeError> {
    let count = parse_count(raw);
    let checks = vec![check_index(index), check_count(raw, count)];

    match (Validation::all_vec(checks), count) {
        (Validation::Success(_), Some(count)) => Ok(Submission { index, count }),
        (Validation::Failure(errors), _) => Err(errors
            .iter()
            .cloned()
            .min_by_key(ChallengeError::precedence)
            .unwrap_or_else(|| ChallengeError::InvalidCount {
                input: raw.to_string(),
            })),
        (Validation::Success(_), None) => Err(ChallengeError::InvalidCount {
            input: raw.to_string(),
        }),
    }
}
