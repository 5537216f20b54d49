//! Table layout of the feedback collection.
//!
//! `seq` is the SQLite row id and only orders records by insertion; `id` is the
//! identifier exposed on the wire. `feedbacks_fts` is an external-content FTS5 index
//! over the searchable text fields, kept in sync by triggers. Status changes do not
//! touch it.

/// Column list matching `feedbacks::feedback_from_row`.
pub const COLUMNS: &str = "id, name, email, rating, category, message, status, created_at, updated_at";

pub const MIGRATION: &str = r#"
CREATE TABLE IF NOT EXISTS feedbacks (
    seq         INTEGER PRIMARY KEY AUTOINCREMENT,
    id          TEXT NOT NULL UNIQUE,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL,
    rating      INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
    category    TEXT NOT NULL CHECK (category IN ('Product', 'Service', 'Support')),
    message     TEXT NOT NULL,
    status      TEXT NOT NULL DEFAULT 'New' CHECK (status IN ('New', 'Read', 'Resolved')),
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL,
    CHECK (created_at <= updated_at)
);

CREATE INDEX IF NOT EXISTS feedbacks_created_at ON feedbacks (created_at);

CREATE VIRTUAL TABLE IF NOT EXISTS feedbacks_fts USING fts5 (
    name,
    email,
    message,
    content = 'feedbacks',
    content_rowid = 'seq',
    tokenize = 'porter unicode61'
);

CREATE TRIGGER IF NOT EXISTS feedbacks_fts_insert AFTER INSERT ON feedbacks BEGIN
    INSERT INTO feedbacks_fts (rowid, name, email, message)
    VALUES (new.seq, new.name, new.email, new.message);
END;

CREATE TRIGGER IF NOT EXISTS feedbacks_fts_delete AFTER DELETE ON feedbacks BEGIN
    INSERT INTO feedbacks_fts (feedbacks_fts, rowid, name, email, message)
    VALUES ('delete', old.seq, old.name, old.email, old.message);
END;

CREATE TRIGGER IF NOT EXISTS feedbacks_fts_update AFTER UPDATE OF name, email, message ON feedbacks BEGIN
    INSERT INTO feedbacks_fts (feedbacks_fts, rowid, name, email, message)
    VALUES ('delete', old.seq, old.name, old.email, old.message);
    INSERT INTO feedbacks_fts (rowid, name, email, message)
    VALUES (new.seq, new.name, new.email, new.message);
END;
"#;
