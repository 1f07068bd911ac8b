//! Redirect targets for old-structure clinic URLs.
//!
//! The site answers `/clinic/:slug` with a permanent redirect to
//! `/clinics/:slug`, and a bare `/clinic` with `/clinics`. Deeper paths have
//! no rule. This module applies that rule to the export so each legacy URL
//! can be checked against what the crawler saw under the new structure.

use url::Url;

use crate::classify::{is_new_structure, is_old_structure};
use crate::page::PageTable;

/// A legacy URL and where the redirect rule sends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectEntry {
    pub old_url: String,
    /// `None` when the URL does not fit `/clinic` or `/clinic/:slug`.
    pub target: Option<String>,
    /// Target appears verbatim among the table's new-structure URLs.
    pub target_in_export: bool,
}

/// Applies the `/clinic/:slug` → `/clinics/:slug` rule. Query and fragment are dropped.
pub fn redirect_target(old_url: &str) -> Option<String> {
    let mut url = Url::parse(old_url).ok()?;
    let segments: Vec<String> = url.path_segments()?.map(String::from).collect();

    let path = match segments.as_slice() {
        [clinic] if clinic == "clinic" => "/clinics".to_string(),
        [clinic, slug] if clinic == "clinic" && slug.is_empty() => "/clinics".to_string(),
        [clinic, slug] if clinic == "clinic" => format!("/clinics/{slug}"),
        [clinic, slug, tail] if clinic == "clinic" && !slug.is_empty() && tail.is_empty() => {
            format!("/clinics/{slug}")
        }
        _ => return None,
    };

    url.set_path(&path);
    url.set_query(None);
    url.set_fragment(None);
    Some(url.into())
}

/// Redirect entries for every old-structure URL, in table order.
pub fn redirect_map(table: &PageTable) -> Vec<RedirectEntry> {
    let new_urls: Vec<&str> = table
        .urls()
        .filter(|u| is_new_structure(u))
        .collect();

    let entries: Vec<RedirectEntry> = table
        .urls()
        .filter(|u| is_old_structure(u))
        .map(|old| {
            let target = redirect_target(old);
            let target_in_export = target
                .as_deref()
                .is_some_and(|t| new_urls.contains(&t));
            RedirectEntry {
                old_url: old.to_string(),
                target,
                target_in_export,
            }
        })
        .collect();

    tracing::debug!(
        entries = entries.len(),
        unmatched = entries.iter().filter(|e| e.target.is_none()).count(),
        "redirect map built"
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageRecord;

    #[test]
    fn slug_moves_to_plural_path() {
        assert_eq!(
            redirect_target("https://example.com/clinic/foo").as_deref(),
            Some("https://example.com/clinics/foo")
        );
        assert_eq!(
            redirect_target("https://example.com/clinic/foo/").as_deref(),
            Some("https://example.com/clinics/foo")
        );
    }

    #[test]
    fn bare_clinic_goes_to_listing() {
        assert_eq!(
            redirect_target("https://example.com/clinic/").as_deref(),
            Some("https://example.com/clinics")
        );
        assert_eq!(
            redirect_target("https://example.com/clinic").as_deref(),
            Some("https://example.com/clinics")
        );
    }

    #[test]
    fn query_and_fragment_are_dropped() {
        assert_eq!(
            redirect_target("https://example.com/clinic/foo?utm=x#top").as_deref(),
            Some("https://example.com/clinics/foo")
        );
    }

    #[test]
    fn deeper_or_foreign_paths_have_no_rule() {
        assert_eq!(redirect_target("https://example.com/clinic/foo/reviews"), None);
        assert_eq!(redirect_target("https://example.com/en/clinic/foo"), None);
        assert_eq!(redirect_target("/clinic/foo"), None);
    }

    #[test]
    fn map_marks_targets_seen_in_export() {
        let table: PageTable = [
            "https://e.test/clinic/a",
            "https://e.test/clinics/a",
            "https://e.test/clinic/b",
            "https://e.test/clinic/b/reviews/",
        ]
        .iter()
        .map(|u| PageRecord::new(*u, None))
        .collect();

        let map = redirect_map(&table);
        assert_eq!(map.len(), 3);
        assert_eq!(map[0].target.as_deref(), Some("https://e.test/clinics/a"));
        assert!(map[0].target_in_export);
        assert_eq!(map[1].target.as_deref(), Some("https://e.test/clinics/b"));
        assert!(!map[1].target_in_export);
        assert_eq!(map[2].target, None);
        assert!(!map[2].target_in_export);
    }
}
