//! Query parameters, ordering, and pagination envelopes
//!
//! Collection endpoints accept `sort`, `direction`, `per_page`, and `page`.
//! Raw parameters are validated into a [`ListQuery`] (bad values are 422
//! field errors, not silently ignored), entities are ordered through the
//! [`Listable`] trait, and pages are wrapped in the `{data, links, meta}`
//! envelope.

use crate::core::error::{ApiError, FieldErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Hard ceiling on page size, whatever the client asks for.
pub const MAX_PER_PAGE: usize = 100;

/// Raw, unvalidated query parameters as extracted from the URL.
///
/// Numeric parameters arrive as strings so that a malformed value can be
/// reported as a field error instead of a generic extractor rejection.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ListParams {
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub per_page: Option<String>,
    pub page: Option<String>,
}

/// Sort direction, ascending unless requested otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Validated listing parameters
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Explicit sort field; `None` means newest-first default ordering
    pub sort: Option<String>,
    pub direction: SortDirection,
    pub per_page: usize,
    pub page: usize,
}

impl ListParams {
    /// Validate against the entity's sortable fields.
    pub fn validate(
        &self,
        sortable: &[&str],
        default_per_page: usize,
    ) -> Result<ListQuery, ApiError> {
        let mut errors = FieldErrors::new();

        let sort = match self.sort.as_deref() {
            None => None,
            Some(s) if sortable.contains(&s) => Some(s.to_string()),
            Some(_) => {
                errors.insert(
                    "sort".to_string(),
                    vec![format!(
                        "The sort field must be one of: {}.",
                        sortable.join(", ")
                    )],
                );
                None
            }
        };

        let direction = match self.direction.as_deref() {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(_) => {
                errors.insert(
                    "direction".to_string(),
                    vec!["The direction field must be asc or desc.".to_string()],
                );
                SortDirection::Asc
            }
        };

        // a misconfigured default must never reach the page arithmetic
        let default_per_page = default_per_page.clamp(1, MAX_PER_PAGE);

        let per_page = match self.per_page.as_deref() {
            None => default_per_page,
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n >= 1 => n.min(MAX_PER_PAGE),
                _ => {
                    errors.insert(
                        "per_page".to_string(),
                        vec!["The per_page field must be a positive integer.".to_string()],
                    );
                    default_per_page
                }
            },
        };

        let page = match self.page.as_deref() {
            None => 1,
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    errors.insert(
                        "page".to_string(),
                        vec!["The page field must be a positive integer.".to_string()],
                    );
                    1
                }
            },
        };

        if errors.is_empty() {
            Ok(ListQuery {
                sort,
                direction,
                per_page,
                page,
            })
        } else {
            Err(ApiError::Validation(errors))
        }
    }
}

/// Trait for entities that appear in sortable, paginated listings
pub trait Listable {
    fn listing_id(&self) -> Uuid;
    fn listing_created_at(&self) -> DateTime<Utc>;

    /// Compare two entities on a named sort field.
    ///
    /// Only called with fields the entity declared sortable.
    fn field_cmp(&self, other: &Self, field: &str) -> Ordering;
}

/// Order a listing in place.
///
/// With an explicit sort field, sorts by that field in the requested
/// direction; without one, newest-first by creation time. Either way ties
/// break by id ascending so the total ordering is deterministic.
pub fn order_listing<T: Listable>(items: &mut [T], query: &ListQuery) {
    match query.sort.as_deref() {
        Some(field) => items.sort_by(|a, b| {
            let ord = a.field_cmp(b, field);
            let ord = match query.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            };
            ord.then_with(|| a.listing_id().cmp(&b.listing_id()))
        }),
        None => items.sort_by(|a, b| {
            b.listing_created_at()
                .cmp(&a.listing_created_at())
                .then_with(|| a.listing_id().cmp(&b.listing_id()))
        }),
    }
}

/// Navigation links for a paginated collection
#[derive(Debug, Serialize)]
pub struct PageLinks {
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// One entry of the `meta.links` pager
#[derive(Debug, Serialize)]
pub struct MetaLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub current_page: usize,
    pub from: Option<usize>,
    pub last_page: usize,
    pub links: Vec<MetaLink>,
    pub path: String,
    pub per_page: usize,
    pub to: Option<usize>,
    pub total: usize,
}

/// The `{data, links, meta}` collection envelope
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub links: PageLinks,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    /// Slice an already-ordered collection into the requested page.
    ///
    /// `per_page` only changes how items group into pages, never their
    /// order. A page past the end yields an empty `data` array.
    pub fn from_items(all: Vec<T>, query: &ListQuery, path: &str) -> Self {
        let total = all.len();
        let per_page = query.per_page;
        let current_page = query.page;
        // an empty collection still reports one page
        let last_page = total.div_ceil(per_page).max(1);

        let start = (current_page - 1).saturating_mul(per_page);
        let data: Vec<T> = all.into_iter().skip(start).take(per_page).collect();

        let from = (!data.is_empty()).then_some(start + 1);
        let to = (!data.is_empty()).then_some(start + data.len());

        let page_url = |n: usize| format!("{path}?page={n}");
        let prev = (current_page > 1).then(|| page_url(current_page - 1));
        let next = (current_page < last_page).then(|| page_url(current_page + 1));

        let mut meta_links = Vec::with_capacity(last_page + 2);
        meta_links.push(MetaLink {
            url: prev.clone(),
            label: "&laquo; Previous".to_string(),
            active: false,
        });
        for n in 1..=last_page {
            meta_links.push(MetaLink {
                url: Some(page_url(n)),
                label: n.to_string(),
                active: n == current_page,
            });
        }
        meta_links.push(MetaLink {
            url: next.clone(),
            label: "Next &raquo;".to_string(),
            active: false,
        });

        Self {
            data,
            links: PageLinks {
                first: page_url(1),
                last: page_url(last_page),
                prev,
                next,
            },
            meta: PageMeta {
                current_page,
                from,
                last_page,
                links: meta_links,
                path: path.to_string(),
                per_page,
                to,
                total,
            },
        }
    }
}
