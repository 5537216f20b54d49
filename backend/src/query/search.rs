//! Parsing of the `search` parameter.
//!
//! The syntax is the usual text-search one: bare words match if any of them occurs,
//! a double-quoted run must occur as an exact phrase, and a leading `-` excludes the
//! word or phrase that follows. Words are lower-cased and split on non-alphanumeric
//! characters, so `fast-service` searches for `fast` or `service`.

/// A parsed search. Each phrase is a token sequence that must appear in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchExpr {
    /// Any one of these is enough.
    pub words: Vec<String>,
    /// All of these must occur. When present, `words` no longer restrict the match.
    pub phrases: Vec<Vec<String>>,
    /// None of these may occur.
    pub excluded: Vec<Vec<String>>,
}

impl SearchExpr {
    pub fn parse(raw: &str) -> SearchExpr {
        let mut expr = SearchExpr::default();
        let mut rest = raw.trim_start();

        while !rest.is_empty() {
            let negated = rest.starts_with('-');
            if negated {
                rest = &rest[1..];
            }

            let (chunk, is_phrase) = match rest.strip_prefix('"') {
                Some(quoted) => {
                    let end = quoted.find('"').unwrap_or(quoted.len());
                    let chunk = &quoted[..end];
                    rest = quoted.get(end + 1..).unwrap_or("");
                    (chunk, true)
                }
                None => {
                    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                    let chunk = &rest[..end];
                    rest = &rest[end..];
                    (chunk, false)
                }
            };

            let tokens = tokenize(chunk);
            if !tokens.is_empty() {
                match (negated, is_phrase) {
                    (true, _) => expr.excluded.push(tokens),
                    (false, true) => expr.phrases.push(tokens),
                    (false, false) => expr.words.extend(tokens),
                }
            }
            rest = rest.trim_start();
        }

        expr
    }

    /// True when nothing positive was asked for, which matches no record.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.phrases.is_empty()
    }
}

fn tokenize(raw: &str) -> Vec<String> {
    raw.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}
