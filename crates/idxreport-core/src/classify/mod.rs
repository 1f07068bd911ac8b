//! URL classification into the fixed, overlapping page categories.
//!
//! Membership is plain substring containment on the raw URL. No case folding,
//! trailing-slash or query-string handling is applied.

mod buckets;

pub use buckets::{Bucket, CategoryBuckets};

use crate::page::PageTable;

/// Path fragment of the legacy clinic URLs.
pub const OLD_CLINIC_SEGMENT: &str = "/clinic/";
/// Path fragment of the current clinic URLs.
pub const NEW_CLINIC_SEGMENT: &str = "/clinics/";

/// Page categories, in the order their tests run for each URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    OldUrlStructure,
    ClinicPages,
    ReviewPages,
    EducationPages,
    ConditionPages,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::OldUrlStructure,
        Category::ClinicPages,
        Category::ReviewPages,
        Category::EducationPages,
        Category::ConditionPages,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::OldUrlStructure => "Old URL Structure (/clinic/)",
            Category::ClinicPages => "Clinic Pages",
            Category::ReviewPages => "Review Pages",
            Category::EducationPages => "Education Pages",
            Category::ConditionPages => "Condition Pages",
        }
    }

    pub fn matches(self, url: &str) -> bool {
        match self {
            Category::OldUrlStructure => is_old_structure(url),
            Category::ClinicPages => is_new_structure(url),
            Category::ReviewPages => url.contains("/reviews/"),
            Category::EducationPages => url.contains("/education/"),
            Category::ConditionPages => url.contains("/conditions/"),
        }
    }
}

/// `/clinic/` present and `/clinics/` absent.
pub fn is_old_structure(url: &str) -> bool {
    url.contains(OLD_CLINIC_SEGMENT) && !url.contains(NEW_CLINIC_SEGMENT)
}

pub fn is_new_structure(url: &str) -> bool {
    url.contains(NEW_CLINIC_SEGMENT)
}

/// Categories `url` belongs to, in test order. May be empty.
pub fn categories_of(url: &str) -> impl Iterator<Item = Category> + '_ {
    Category::ALL.into_iter().filter(move |c| c.matches(url))
}

/// Single pass over the table, appending each URL to every bucket it matches.
pub fn classify(table: &PageTable) -> CategoryBuckets {
    let mut buckets = CategoryBuckets::default();
    for url in table.urls() {
        for category in categories_of(url) {
            buckets.push(category, url);
        }
    }
    for bucket in buckets.iter() {
        tracing::debug!(
            category = bucket.category.label(),
            count = bucket.urls.len(),
            "bucket filled"
        );
    }
    buckets
}
