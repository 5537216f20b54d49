//! Translation of loose listing parameters into a structured `ListQuery`.
//!
//! The store never sees raw parameters: `store::filter_sql` renders a `ListQuery`
//! into SQL.

pub mod error;
pub mod filter;
pub mod search;

use crate::query::error::QueryError;
use crate::query::filter::{Condition, Field};
use crate::query::search::SearchExpr;
use log::debug;

/// Parameters that steer the listing instead of filtering on a field.
const CONTROL_PARAMS: [&str; 5] = ["select", "sort", "page", "limit", "search"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: Field,
    pub descending: bool,
}

impl SortKey {
    pub const NEWEST_FIRST: SortKey = SortKey {
        field: Field::CreatedAt,
        descending: true,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// All conditions must hold.
    pub conditions: Vec<Condition>,
    /// Full-text restriction; `None` when no non-blank `search` was sent.
    pub search: Option<SearchExpr>,
    /// Never empty; defaults to newest first.
    pub sort: Vec<SortKey>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
            search: None,
            sort: vec![SortKey::NEWEST_FIRST],
        }
    }
}

impl ListQuery {
    /// Builds a query from decoded query-string pairs, in the order they were sent.
    pub fn from_params(params: &[(String, String)]) -> Result<ListQuery, QueryError> {
        let mut query = ListQuery::default();

        for (key, value) in params {
            if CONTROL_PARAMS.contains(&key.as_str()) {
                continue;
            }
            query.conditions.push(Condition::parse(key, value)?);
        }

        if let Some(search) = last_value(params, "search").filter(|s| !s.trim().is_empty()) {
            query.search = Some(SearchExpr::parse(search));
        }

        if let Some(sort) = last_value(params, "sort") {
            let keys = parse_sort(sort);
            if !keys.is_empty() {
                query.sort = keys;
            }
        }

        Ok(query)
    }
}

fn last_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Parses `name,-rating` style sort lists. Unknown fields are skipped.
fn parse_sort(raw: &str) -> Vec<SortKey> {
    raw.split(',')
        .map(str::trim)
        .filter_map(|item| {
            let (name, descending) = match item.strip_prefix('-') {
                Some(name) => (name, true),
                None => (item.strip_prefix('+').unwrap_or(item), false),
            };
            match Field::from_name(name) {
                Some(field) => Some(SortKey { field, descending }),
                None => {
                    debug!("Ignoring unknown sort field '{}'", name);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter::{Operand, Operator, Target};

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_parameters_yield_newest_first() {
        let query = ListQuery::from_params(&[]).unwrap();
        assert!(query.conditions.is_empty());
        assert_eq!(query.search, None);
        assert_eq!(query.sort, vec![SortKey::NEWEST_FIRST]);
    }

    #[test]
    fn control_parameters_are_not_filters() {
        let query = ListQuery::from_params(&params(&[
            ("select", "name"),
            ("page", "2"),
            ("limit", "10"),
            ("sort", "rating"),
            ("search", "great"),
            ("status", "New"),
        ]))
        .unwrap();

        assert_eq!(query.conditions.len(), 1);
        assert_eq!(query.conditions[0].target, Target::Field(Field::Status));
        assert_eq!(query.search, Some(SearchExpr::parse("great")));
    }

    #[test]
    fn repeated_filters_accumulate() {
        let query =
            ListQuery::from_params(&params(&[("rating[gte]", "2"), ("rating[lt]", "5")])).unwrap();
        assert_eq!(query.conditions.len(), 2);
        assert_eq!(query.conditions[0].op, Operator::Gte);
        assert_eq!(query.conditions[1].operands, vec![Operand::Integer(5)]);
    }

    #[test]
    fn sort_list_honours_direction_and_skips_unknown_fields() {
        let query = ListQuery::from_params(&params(&[("sort", "category,-rating,shoeSize")])).unwrap();
        assert_eq!(
            query.sort,
            vec![
                SortKey {
                    field: Field::Category,
                    descending: false
                },
                SortKey {
                    field: Field::Rating,
                    descending: true
                },
            ]
        );
    }

    #[test]
    fn sort_with_no_known_field_keeps_default() {
        let query = ListQuery::from_params(&params(&[("sort", "bogus")])).unwrap();
        assert_eq!(query.sort, vec![SortKey::NEWEST_FIRST]);
    }

    #[test]
    fn blank_search_is_ignored_but_punctuation_only_matches_nothing() {
        let query = ListQuery::from_params(&params(&[("search", "  ")])).unwrap();
        assert_eq!(query.search, None);

        let query = ListQuery::from_params(&params(&[("search", "?!")])).unwrap();
        assert!(query.search.unwrap().is_empty());
    }

    #[test]
    fn last_search_parameter_wins() {
        let query =
            ListQuery::from_params(&params(&[("search", "slow"), ("search", "fast -late")])).unwrap();
        let search = query.search.unwrap();
        assert_eq!(search.words, vec!["fast".to_string()]);
        assert_eq!(search.excluded, vec![vec!["late".to_string()]]);
    }

    #[test]
    fn malformed_filter_fails_the_whole_query() {
        let err = ListQuery::from_params(&params(&[("category", "Product"), ("rating[gte", "4")]))
            .unwrap_err();
        assert_eq!(err, QueryError::MalformedKey("rating[gte".into()));
    }
}
