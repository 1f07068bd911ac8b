//! Insertion-ordered category buckets.

use super::Category;

/// URLs matching one category, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub category: Category,
    pub urls: Vec<String>,
}

/// Category → URLs, iterated in the order categories were first hit.
///
/// A bucket only exists once a URL has been added to it, so categories with no
/// matches never show up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBuckets {
    buckets: Vec<Bucket>,
}

impl CategoryBuckets {
    pub fn push(&mut self, category: Category, url: &str) {
        match self.buckets.iter_mut().find(|b| b.category == category) {
            Some(bucket) => bucket.urls.push(url.to_string()),
            None => self.buckets.push(Bucket {
                category,
                urls: vec![url.to_string()],
            }),
        }
    }

    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.urls.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
