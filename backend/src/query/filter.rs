//! Typed filter expressions.
//!
//! Each listing parameter is parsed into a `(target, operator, operands)` triple. The
//! key grammar is `field` or `field[op]`; anything else is rejected instead of being
//! ignored. Operands are typed by the field they apply to so that `rating[gte]=4`
//! compares numbers, not strings.

use crate::query::error::QueryError;
use chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;

/// Record fields that can be filtered and sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Email,
    Rating,
    Category,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Text,
    Integer,
    Timestamp,
}

impl Field {
    /// Resolves a wire field name. `id` is accepted as an alias of `_id`.
    pub fn from_name(name: &str) -> Option<Field> {
        let field = match name {
            "_id" | "id" => Field::Id,
            "name" => Field::Name,
            "email" => Field::Email,
            "rating" => Field::Rating,
            "category" => Field::Category,
            "message" => Field::Message,
            "status" => Field::Status,
            "createdAt" => Field::CreatedAt,
            "updatedAt" => Field::UpdatedAt,
            _ => return None,
        };
        Some(field)
    }

    fn kind(&self) -> ValueKind {
        match self {
            Field::Rating => ValueKind::Integer,
            Field::CreatedAt | Field::UpdatedAt => ValueKind::Timestamp,
            _ => ValueKind::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(Operator::Eq),
            "gt" => Ok(Operator::Gt),
            "gte" => Ok(Operator::Gte),
            "lt" => Ok(Operator::Lt),
            "lte" => Ok(Operator::Lte),
            "in" => Ok(Operator::In),
            _ => Err(()),
        }
    }
}

/// What a condition applies to. Unknown names are kept rather than rejected; they
/// match no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Field(Field),
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Text(String),
    Integer(i64),
    Timestamp(DateTime<Utc>),
}

/// One parsed filter. `operands` holds exactly one value except for `Operator::In`,
/// where it may hold any number (including none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub target: Target,
    pub op: Operator,
    pub operands: Vec<Operand>,
}

impl Condition {
    pub fn parse(key: &str, value: &str) -> Result<Condition, QueryError> {
        let (name, op) = split_key(key)?;
        let target = match Field::from_name(name) {
            Some(field) => Target::Field(field),
            None => Target::Unknown(name.to_string()),
        };
        let kind = match &target {
            Target::Field(field) => field.kind(),
            Target::Unknown(_) => ValueKind::Text,
        };

        let operands = if op == Operator::In {
            value
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| parse_operand(key, item, kind))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            vec![parse_operand(key, value, kind)?]
        };

        Ok(Condition {
            target,
            op,
            operands,
        })
    }
}

/// Splits `field[op]` into its parts. A bare `field` means equality.
fn split_key(key: &str) -> Result<(&str, Operator), QueryError> {
    let malformed = || QueryError::MalformedKey(key.to_string());

    let Some(open) = key.find('[') else {
        if key.is_empty() || key.contains(']') {
            return Err(malformed());
        }
        return Ok((key, Operator::Eq));
    };

    let name = &key[..open];
    let rest = &key[open + 1..];
    let op = rest.strip_suffix(']').ok_or_else(malformed)?;
    if name.is_empty() || op.is_empty() || op.contains('[') || op.contains(']') {
        return Err(malformed());
    }

    let op = op.parse().map_err(|_| QueryError::UnknownOperator {
        param: key.to_string(),
        op: op.to_string(),
    })?;
    Ok((name, op))
}

fn parse_operand(param: &str, raw: &str, kind: ValueKind) -> Result<Operand, QueryError> {
    let invalid = |expected| QueryError::InvalidValue {
        param: param.to_string(),
        value: raw.to_string(),
        expected,
    };

    match kind {
        ValueKind::Text => Ok(Operand::Text(raw.to_string())),
        ValueKind::Integer => raw
            .trim()
            .parse()
            .map(Operand::Integer)
            .map_err(|_| invalid("a whole number")),
        ValueKind::Timestamp => parse_timestamp(raw.trim())
            .map(Operand::Timestamp)
            .ok_or_else(|| invalid("an RFC 3339 timestamp or a YYYY-MM-DD date")),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
