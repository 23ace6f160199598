//! Joke query filter.
//!
//! A [`Filter`] is assembled from the form state at the moment a search is
//! submitted and handed to the API client. Blank inputs never make it into a
//! filter: every field is either `None` or holds a non-empty value.

/// Search constraints sent with a joke query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Free-text search, trimmed.
    pub search: Option<String>,
    /// Category value, trimmed.
    pub category: Option<String>,
    /// Selected tag values in selector order, without blanks or duplicates.
    pub tags: Option<Vec<String>>,
}

impl Filter {
    /// Builds a filter from raw input values, dropping blank fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use jokebox::domain::Filter;
    ///
    /// let filter = Filter::new("", "classic", vec!["pun".to_string(), " ".to_string()]);
    /// assert!(filter.search.is_none());
    /// assert_eq!(filter.category.as_deref(), Some("classic"));
    /// assert_eq!(filter.tags, Some(vec!["pun".to_string()]));
    /// ```
    #[must_use]
    pub fn new<I, S>(search: &str, category: &str, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.as_ref().trim();
            if !tag.is_empty() && !selected.iter().any(|t| t == tag) {
                selected.push(tag.to_string());
            }
        }

        Self {
            search: non_blank(search),
            category: non_blank(category),
            tags: (!selected.is_empty()).then_some(selected),
        }
    }

    /// The empty filter, which asks the server for an unconstrained random joke.
    #[must_use]
    pub fn random() -> Self {
        Self::default()
    }

    /// Returns `true` when no constraint is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.search.is_none() && self.category.is_none() && self.tags.is_none()
    }

    /// Returns the query parameters in wire order: `search`, `category`, `tags`.
    ///
    /// Tags are joined with commas into a single `tags` parameter.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(tags) = &self.tags {
            pairs.push(("tags", tags.join(",")));
        }
        pairs
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_omitted() {
        let filter = Filter::new("   ", "", Vec::<String>::new());
        assert!(filter.is_empty());
        assert!(filter.query_pairs().is_empty());
    }

    #[test]
    fn only_set_fields_produce_pairs() {
        let cases = [
            (("chicken", "", vec![]), vec!["search"]),
            (("", "classic", vec![]), vec!["category"]),
            (("", "", vec!["pun"]), vec!["tags"]),
            (("road", "", vec!["pun", "dad"]), vec!["search", "tags"]),
            (("road", "classic", vec!["dad"]), vec!["search", "category", "tags"]),
        ];

        for ((search, category, tags), expected) in cases {
            let filter = Filter::new(search, category, tags);
            let keys: Vec<&str> = filter.query_pairs().iter().map(|(k, _)| *k).collect();
            assert_eq!(keys, expected, "search={search:?} category={category:?}");
            assert!(filter.query_pairs().iter().all(|(_, v)| !v.is_empty()));
        }
    }

    #[test]
    fn tags_are_joined_in_order_without_duplicates() {
        let filter = Filter::new("", "", ["pun", "dad", "pun"]);
        assert_eq!(
            filter.query_pairs(),
            vec![("tags", "pun,dad".to_string())]
        );
    }

    #[test]
    fn random_filter_is_empty() {
        assert!(Filter::random().is_empty());
    }
}
