//! Golden fixture tables.
//!
//! A case fixes `pages`, `edges` and `neighbors` and lists the rendered
//! sequence expected for every current page `1..=pages`, in order.
//! Parsing only; reading the file is the caller's business.

use serde::Deserialize;

use crate::builder::build;
use crate::domain::PaginationArgs;
use crate::error::PaginationError;
use crate::hashing::sequence_hash;
use crate::invariants::{validate_sequence, InvariantViolation};
use crate::render::render;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoldenCase {
    pub name: String,
    pub pages: i64,
    pub edges: i64,
    pub neighbors: i64,
    pub expected: Vec<String>,
}

/// What went wrong for one current page of a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowFailure {
    Rejected(PaginationError),
    Rendered { expected: String, actual: String },
    Invariant(InvariantViolation),
    Nondeterministic { first: String, second: String },
    /// The table has no row for a page the case covers.
    MissingRow,
    /// The table has a row past the case's last page.
    ExtraRow { expected: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    pub page: i64,
    pub fingerprint: Option<String>,
    pub failures: Vec<RowFailure>,
}

impl RowOutcome {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parse a JSON array of golden cases.
pub fn parse_cases(json: &str) -> Result<Vec<GoldenCase>, serde_json::Error> {
    serde_json::from_str(json)
}

impl GoldenCase {
    pub fn args(&self, page: i64) -> PaginationArgs {
        PaginationArgs::new(page, self.pages)
            .with_edges(self.edges)
            .with_neighbors(self.neighbors)
    }

    /// Rebuild every row twice and compare against the table.
    ///
    /// One outcome per page `1..=pages` plus one per surplus row, so a
    /// table of the wrong length never passes.
    pub fn replay(&self) -> Vec<RowOutcome> {
        let covered = self.pages.max(0);
        let rows = covered.max(self.expected.len() as i64);
        (1..=rows)
            .map(|page| {
                let expected = self.expected.get((page - 1) as usize);
                if page > covered {
                    RowOutcome {
                        page,
                        fingerprint: None,
                        failures: vec![RowFailure::ExtraRow {
                            expected: expected.cloned().unwrap_or_default(),
                        }],
                    }
                } else {
                    self.replay_row(page, expected.map(String::as_str))
                }
            })
            .collect()
    }

    fn replay_row(&self, page: i64, expected: Option<&str>) -> RowOutcome {
        let args = self.args(page);
        let mut failures = Vec::new();

        let first = match build(&args) {
            Ok(items) => items,
            Err(e) => {
                return RowOutcome {
                    page,
                    fingerprint: None,
                    failures: vec![RowFailure::Rejected(e)],
                }
            }
        };

        let actual = render(&first, args.current_page());
        match expected {
            Some(expected) if actual != expected => failures.push(RowFailure::Rendered {
                expected: expected.to_string(),
                actual,
            }),
            Some(_) => {}
            None => failures.push(RowFailure::MissingRow),
        }

        if let Err(v) = validate_sequence(&first, args.pages, args.current_page()) {
            failures.push(RowFailure::Invariant(v));
        }

        let h1 = sequence_hash(&first);
        match build(&args) {
            Ok(second) => {
                let h2 = sequence_hash(&second);
                if h1 != h2 {
                    failures.push(RowFailure::Nondeterministic {
                        first: h1.clone(),
                        second: h2,
                    });
                }
            }
            Err(e) => failures.push(RowFailure::Rejected(e)),
        }

        RowOutcome {
            page,
            fingerprint: Some(h1),
            failures,
        }
    }
}
