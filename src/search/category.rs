// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Category alias registry.
//!
//! Maps many surface forms (codes, enum-style labels, keywords in a dozen
//! languages) to a small set of canonical category codes. The registry is
//! built once at startup and never mutated afterwards, so lookups need no
//! locking.

use crate::search::catalog::CATALOG;
use crate::search::normalize::normalize;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Stable canonical category code ("1".."12").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryCode(String);

impl CategoryCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered category with the forms it was registered with.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub code: CategoryCode,
    pub label: String,
    pub aliases: Vec<String>,
    pub keywords: Vec<String>,
}

/// Accumulates registrations; [`build`](Self::build) freezes the table.
#[derive(Debug, Default)]
pub struct CategoryRegistryBuilder {
    aliases: HashMap<String, CategoryCode>,
    categories: Vec<Category>,
    ignored: usize,
}

impl CategoryRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category with a display label.
    pub fn register_labeled(
        &mut self,
        code: &str,
        label: &str,
        keywords: &[&str],
        aliases: &[&str],
    ) -> &mut Self {
        let canonical = CategoryCode::new(code);

        self.insert_forms(code, &canonical);
        for alias in aliases {
            self.insert_forms(alias, &canonical);
        }
        for keyword in keywords {
            self.insert_forms(keyword, &canonical);
        }

        self.categories.push(Category {
            code: canonical,
            label: label.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        });
        self
    }

    /// Register a category; the first alias (or the code) becomes its label.
    pub fn register(&mut self, code: &str, keywords: &[&str], aliases: &[&str]) -> &mut Self {
        let label = aliases.first().copied().unwrap_or(code);
        self.register_labeled(code, label, keywords, aliases)
    }

    /// Insert trimmed verbatim, upper, lower and normalized forms. First write
    /// wins.
    fn insert_forms(&mut self, value: &str, code: &CategoryCode) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }

        let forms = [
            value.to_string(),
            value.to_uppercase(),
            value.to_lowercase(),
            normalize(value),
        ];

        for form in forms {
            match self.aliases.get(&form) {
                Some(existing) if existing != code => {
                    self.ignored += 1;
                    tracing::debug!(
                        alias = %form,
                        kept = %existing,
                        ignored = %code,
                        "Alias already registered, keeping first mapping"
                    );
                }
                Some(_) => {}
                None => {
                    self.aliases.insert(form, code.clone());
                }
            }
        }
    }

    pub fn build(self) -> CategoryRegistry {
        tracing::debug!(
            categories = self.categories.len(),
            aliases = self.aliases.len(),
            ignored = self.ignored,
            "Category registry built"
        );
        CategoryRegistry {
            aliases: self.aliases,
            categories: self.categories,
        }
    }
}

/// Immutable alias -> canonical code table.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    aliases: HashMap<String, CategoryCode>,
    categories: Vec<Category>,
}

impl CategoryRegistry {
    pub fn builder() -> CategoryRegistryBuilder {
        CategoryRegistryBuilder::new()
    }

    /// Build the registry from the compiled-in catalog.
    pub fn builtin() -> Self {
        let mut builder = Self::builder();
        for entry in CATALOG {
            builder.register_labeled(entry.code, entry.label, entry.keywords, entry.aliases);
        }
        builder.build()
    }

    /// Resolve any surface form to its canonical code.
    ///
    /// Surrounding whitespace is ignored, as it is on registration. Tries the
    /// verbatim value, then upper-case, lower-case and normalized forms.
    /// Unknown or blank input resolves to `None`.
    pub fn resolve(&self, value: &str) -> Option<&CategoryCode> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        self.aliases
            .get(value)
            .or_else(|| self.aliases.get(&value.to_uppercase()))
            .or_else(|| self.aliases.get(&value.to_lowercase()))
            .or_else(|| self.aliases.get(&normalize(value)))
    }

    /// Registered categories in registration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of distinct alias forms.
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}
