//! Renders a `ListQuery` as SQL over the `feedbacks` table (aliased `f`).
//!
//! Values are always bound as parameters; only column names from the fixed field
//! allow-list and operator tokens are ever spliced into the statement text.

use crate::query::filter::{Condition, Field, Operand, Operator, Target};
use crate::query::search::SearchExpr;
use crate::query::{ListQuery, SortKey};
use crate::store::feedbacks::to_stored_timestamp;
use rusqlite::types::Value;

/// `WHERE`/`ORDER BY` fragments plus the values bound to their placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFilter {
    pub where_clause: String,
    pub order_by: String,
    pub params: Vec<Value>,
}

fn column(field: Field) -> &'static str {
    match field {
        Field::Id => "f.id",
        Field::Name => "f.name",
        Field::Email => "f.email",
        Field::Rating => "f.rating",
        Field::Category => "f.category",
        Field::Message => "f.message",
        Field::Status => "f.status",
        Field::CreatedAt => "f.created_at",
        Field::UpdatedAt => "f.updated_at",
    }
}

fn comparison(op: Operator) -> &'static str {
    match op {
        Operator::Eq => "=",
        Operator::Gt => ">",
        Operator::Gte => ">=",
        Operator::Lt => "<",
        Operator::Lte => "<=",
        Operator::In => "IN",
    }
}

fn bind(operand: &Operand) -> Value {
    match operand {
        Operand::Text(text) => Value::Text(text.clone()),
        Operand::Integer(n) => Value::Integer(*n),
        Operand::Timestamp(at) => Value::Text(to_stored_timestamp(at)),
    }
}

const MATCH_NOTHING: &str = "0 = 1";

pub fn translate(query: &ListQuery) -> SqlFilter {
    let mut clauses = Vec::new();
    let mut params = Vec::new();

    for condition in &query.conditions {
        clauses.push(condition_sql(condition, &mut params));
    }

    if let Some(search) = &query.search {
        match match_expression(search) {
            Some(expression) => {
                clauses.push(
                    "f.seq IN (SELECT rowid FROM feedbacks_fts WHERE feedbacks_fts MATCH ?)"
                        .to_string(),
                );
                params.push(Value::Text(expression));
            }
            None => clauses.push(MATCH_NOTHING.to_string()),
        }
    }

    let where_clause = if clauses.is_empty() {
        "1 = 1".to_string()
    } else {
        clauses.join(" AND ")
    };

    SqlFilter {
        where_clause,
        order_by: order_by(&query.sort),
        params,
    }
}

fn condition_sql(condition: &Condition, params: &mut Vec<Value>) -> String {
    let Target::Field(field) = condition.target else {
        return MATCH_NOTHING.to_string();
    };
    let column = column(field);

    if condition.op == Operator::In {
        if condition.operands.is_empty() {
            return MATCH_NOTHING.to_string();
        }
        let placeholders = vec!["?"; condition.operands.len()].join(", ");
        params.extend(condition.operands.iter().map(bind));
        return format!("{column} IN ({placeholders})");
    }

    params.extend(condition.operands.iter().map(bind));
    format!("{column} {} ?", comparison(condition.op))
}

/// Renders a search as an FTS5 query. Every word or phrase is quoted so FTS5 reads it
/// as plain text. Required phrases take precedence over loose words; exclusions are
/// subtracted with `NOT`. `None` when nothing positive was asked for.
fn match_expression(search: &SearchExpr) -> Option<String> {
    let positive = if !search.phrases.is_empty() {
        search.phrases.iter().map(|p| quote(p)).collect::<Vec<_>>().join(" AND ")
    } else if !search.words.is_empty() {
        search
            .words
            .iter()
            .map(|w| quote(std::slice::from_ref(w)))
            .collect::<Vec<_>>()
            .join(" OR ")
    } else {
        return None;
    };

    if search.excluded.is_empty() {
        return Some(positive);
    }
    let excluded = search
        .excluded
        .iter()
        .map(|p| quote(p))
        .collect::<Vec<_>>()
        .join(" OR ");
    Some(format!("({positive}) NOT ({excluded})"))
}

fn quote(tokens: &[String]) -> String {
    format!("\"{}\"", tokens.join(" ").replace('"', "\"\""))
}

/// Ties fall back to insertion order, running the same way as the first key.
fn order_by(sort: &[SortKey]) -> String {
    let direction = |descending: bool| if descending { "DESC" } else { "ASC" };
    let tie_break = sort.first().map(|key| key.descending).unwrap_or(true);

    sort.iter()
        .map(|key| format!("{} {}", column(key.field), direction(key.descending)))
        .chain(std::iter::once(format!("f.seq {}", direction(tie_break))))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> ListQuery {
        let params: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ListQuery::from_params(&params).unwrap()
    }

    #[test]
    fn no_parameters_lists_everything_newest_first() {
        let sql = translate(&query(&[]));
        assert_eq!(sql.where_clause, "1 = 1");
        assert_eq!(sql.order_by, "f.created_at DESC, f.seq DESC");
        assert!(sql.params.is_empty());
    }

    #[test]
    fn range_and_equality_filters_bind_typed_values() {
        let sql = translate(&query(&[("rating[gte]", "4"), ("category", "Product")]));
        assert_eq!(sql.where_clause, "f.rating >= ? AND f.category = ?");
        assert_eq!(
            sql.params,
            vec![Value::Integer(4), Value::Text("Product".into())]
        );
    }

    #[test]
    fn membership_expands_placeholders() {
        let sql = translate(&query(&[("status[in]", "New,Read")]));
        assert_eq!(sql.where_clause, "f.status IN (?, ?)");
        assert_eq!(sql.params.len(), 2);
    }

    #[test]
    fn unknown_fields_and_empty_lists_match_nothing() {
        let sql = translate(&query(&[("colour", "red"), ("rating[in]", "")]));
        assert_eq!(sql.where_clause, "0 = 1 AND 0 = 1");
        assert!(sql.params.is_empty());
    }

    #[test]
    fn timestamps_bind_in_stored_form() {
        let sql = translate(&query(&[("createdAt[lt]", "2025-02-01")]));
        assert_eq!(
            sql.params,
            vec![Value::Text("2025-02-01T00:00:00.000000Z".into())]
        );
    }

    #[test]
    fn search_becomes_an_fts_subquery() {
        let sql = translate(&query(&[("search", "Excellent service")]));
        assert!(sql.where_clause.contains("feedbacks_fts MATCH ?"));
        assert_eq!(
            sql.params,
            vec![Value::Text("\"excellent\" OR \"service\"".into())]
        );
    }

    #[test]
    fn exclusions_and_phrases_use_fts_operators() {
        let sql = translate(&query(&[("search", "excellent fast -slow -\"too late\"")]));
        assert_eq!(
            sql.params,
            vec![Value::Text(
                "(\"excellent\" OR \"fast\") NOT (\"slow\" OR \"too late\")".into()
            )]
        );

        let sql = translate(&query(&[("search", "great \"build quality\" \"on time\"")]));
        assert_eq!(
            sql.params,
            vec![Value::Text("\"build quality\" AND \"on time\"".into())]
        );
    }

    #[test]
    fn search_without_positive_terms_matches_nothing() {
        let sql = translate(&query(&[("search", "-slow")]));
        assert_eq!(sql.where_clause, "0 = 1");
        assert!(sql.params.is_empty());
    }

    #[test]
    fn explicit_sort_ties_follow_the_first_key() {
        let sql = translate(&query(&[("sort", "rating,-createdAt")]));
        assert_eq!(
            sql.order_by,
            "f.rating ASC, f.created_at DESC, f.seq ASC"
        );
    }
}
