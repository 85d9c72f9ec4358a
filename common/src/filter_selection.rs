//! Keyword and per-category option selection for a directory page.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{search_category::SearchCategory, text_normalize::normalize_text};


pub type CategorySelection = BTreeMap<SearchCategory, BTreeSet<String>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterSelection {
    pub keyword: String,
    pub categories: CategorySelection,
}

impl FilterSelection {
    pub fn with_keyword(keyword: impl Into<String>) -> Self {
        Self { keyword: keyword.into(), ..Default::default() }
    }

    /// Replaces the options of one category. An empty set removes the category.
    pub fn set_options<I, S>(&mut self, category: SearchCategory, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: BTreeSet<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            self.categories.remove(&category);
        } else {
            self.categories.insert(category, options);
        }
    }

    pub fn toggle_option(&mut self, category: SearchCategory, option: &str) {
        let entry = self.categories.entry(category).or_default();
        if !entry.remove(option) {
            entry.insert(option.to_string());
        }
        if entry.is_empty() {
            self.categories.remove(&category);
        }
    }

    pub fn is_selected(&self, category: SearchCategory, option: &str) -> bool {
        self.categories.get(&category).is_some_and(|s| s.contains(option))
    }

    /// Categories with at least one selected option.
    pub fn active_categories(&self) -> impl Iterator<Item = (SearchCategory, &BTreeSet<String>)> {
        self.categories.iter().filter(|(_, s)| !s.is_empty()).map(|(c, s)| (*c, s))
    }

    pub fn selected_count(&self) -> usize {
        self.categories.values().map(BTreeSet::len).sum()
    }

    pub fn has_keyword(&self) -> bool {
        !normalize_text(&self.keyword).is_empty()
    }

    pub fn is_unconstrained(&self) -> bool {
        !self.has_keyword() && self.active_categories().next().is_none()
    }

    /// One entry per selected option. The same label can appear under
    /// several categories.
    pub fn chips(&self) -> Vec<(SearchCategory, String)> {
        self.active_categories()
            .flat_map(|(category, options)| options.iter().map(move |o| (category, o.clone())))
            .collect()
    }

    /// Drops one option from one category, pruning the category when it empties.
    pub fn remove_option(&mut self, category: SearchCategory, option: &str) {
        if let Some(options) = self.categories.get_mut(&category) {
            options.remove(option);
            if options.is_empty() {
                self.categories.remove(&category);
            }
        }
    }

    pub fn clear(&mut self) {
        self.keyword.clear();
        self.categories.clear();
    }
}
