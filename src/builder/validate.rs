//! Configuration checks using Validation.
//!
//! Every check runs; all violations are reported together instead of
//! stopping at the first one.

use super::error::{BuildError, ConfigViolation};
use crate::catalog::Item;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Checked = Validation<(), NonEmptyVec<ConfigViolation>>;

fn require(condition: bool, violation: ConfigViolation) -> Checked {
    if condition {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

fn history_limit(limit: Option<usize>) -> Checked {
    require(limit != Some(0), ConfigViolation::ZeroHistoryLimit)
}

/// Validate single-item settings.
pub(crate) fn single_item(price: u64, limit: Option<usize>) -> Checked {
    let checks = vec![
        require(
            price > 0,
            ConfigViolation::ZeroPrice {
                id: "item".to_string(),
            },
        ),
        history_limit(limit),
    ];
    Validation::all_vec(checks).map(|_| ())
}

/// Validate a catalog, accumulating ALL violations.
pub(crate) fn catalog(items: &[Item], limit: Option<usize>) -> Checked {
    let mut checks = Vec::with_capacity(items.len() * 3 + 1);
    let mut seen = HashSet::new();

    for item in items {
        let id = item.id.as_str();
        checks.push(require(!id.trim().is_empty(), ConfigViolation::BlankItemId));
        checks.push(require(
            item.price > 0,
            ConfigViolation::ZeroPrice { id: id.to_string() },
        ));
        checks.push(require(
            seen.insert(id),
            ConfigViolation::DuplicateItem { id: id.to_string() },
        ));
    }
    checks.push(history_limit(limit));

    Validation::all_vec(checks).map(|_| ())
}

/// Collapse a validation into a build result.
pub(crate) fn into_result(checked: Checked) -> Result<(), BuildError> {
    match checked {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(BuildError::InvalidConfig(
            errors.iter().cloned().collect(),
        )),
    }
}
