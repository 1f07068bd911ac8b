//! Duplicate-content candidates between the `/clinic/` and `/clinics/` URL structures.
//!
//! Each old-structure URL is rewritten to the new structure by textual
//! substitution and looked up among the new-structure URLs of the same table.

use crate::classify::{
    is_new_structure, is_old_structure, NEW_CLINIC_SEGMENT, OLD_CLINIC_SEGMENT,
};
use crate::page::PageTable;

/// How a rewritten candidate is compared with the new-structure URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Candidate is a substring of some new URL. Also flags superstrings, e.g.
    /// `/clinics/foo` against `/clinics/foobar`.
    #[default]
    Substring,
    /// Candidate equals some new URL.
    Exact,
}

impl MatchMode {
    fn hit(self, candidate: &str, new_url: &str) -> bool {
        match self {
            MatchMode::Substring => new_url.contains(candidate),
            MatchMode::Exact => new_url == candidate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePair {
    pub old_url: String,
    pub new_url: String,
}

/// Old/new URL lists plus the pairs found between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateScan {
    pub old_urls: Vec<String>,
    pub new_urls: Vec<String>,
    pub pairs: Vec<DuplicatePair>,
}

/// Rewrites every `/clinic/` in `old_url` to `/clinics/`.
pub fn candidate_new_url(old_url: &str) -> String {
    old_url.replace(OLD_CLINIC_SEGMENT, NEW_CLINIC_SEGMENT)
}

pub fn find_duplicates(table: &PageTable, mode: MatchMode) -> DuplicateScan {
    let old_urls: Vec<String> = table
        .urls()
        .filter(|u| is_old_structure(u))
        .map(String::from)
        .collect();
    let new_urls: Vec<String> = table
        .urls()
        .filter(|u| is_new_structure(u))
        .map(String::from)
        .collect();

    let pairs: Vec<DuplicatePair> = old_urls
        .iter()
        .filter_map(|old| {
            let candidate = candidate_new_url(old);
            new_urls
                .iter()
                .any(|new| mode.hit(&candidate, new))
                .then(|| DuplicatePair {
                    old_url: old.clone(),
                    new_url: candidate,
                })
        })
        .collect();

    tracing::debug!(
        old = old_urls.len(),
        new = new_urls.len(),
        pairs = pairs.len(),
        ?mode,
        "duplicate scan done"
    );

    DuplicateScan {
        old_urls,
        new_urls,
        pairs,
    }
}
