//! SQL dialects.
//!
//! Generated statements are identical across dialects except for identifier
//! quoting. Statements always use `?` placeholders; drivers that number their
//! parameters rewrite them with [`rebind`].

use std::borrow::Cow;

use serde::Deserialize;

/// Database dialect an executor generates SQL for
///
/// Deserializes from its name through [`Dialect::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Dialect {
    /// MySQL / MariaDB: identifiers quoted with backticks
    Mysql,
    /// PostgreSQL: identifiers quoted with double quotes
    #[default]
    Postgres,
    /// Any other database: identifiers emitted as-is
    Generic,
}

impl Dialect {
    /// Parse a dialect name; unrecognized names map to [`Dialect::Generic`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Dialect::Mysql,
            "postgres" | "postgresql" => Dialect::Postgres,
            _ => Dialect::Generic,
        }
    }
}

impl From<String> for Dialect {
    fn from(name: String) -> Self {
        Dialect::from_name(name.trim())
    }
}

/// Quote an identifier for `dialect`.
///
/// An embedded quote character is doubled, so the result always parses as a
/// single identifier.
///
/// ```rust
/// use dbc::dialect::{quote_ident, Dialect};
///
/// assert_eq!(quote_ident(Dialect::Mysql, "role_id"), "`role_id`");
/// assert_eq!(quote_ident(Dialect::Postgres, "role_id"), "\"role_id\"");
/// assert_eq!(quote_ident(Dialect::Generic, "role_id"), "role_id");
/// ```
pub fn quote_ident(dialect: Dialect, ident: &str) -> String {
    let quote = match dialect {
        Dialect::Mysql => '`',
        Dialect::Postgres => '"',
        Dialect::Generic => return ident.to_string(),
    };

    let mut out = String::with_capacity(ident.len() + 2);
    out.push(quote);
    for c in ident.chars() {
        if c == quote {
            out.push(quote);
        }
        out.push(c);
    }
    out.push(quote);
    out
}

/// Rewrite `?` placeholders to `$1, $2, ...` for PostgreSQL.
///
/// Question marks inside string literals and quoted identifiers are left
/// alone. Other dialects get the query back unchanged.
pub fn rebind(dialect: Dialect, query: &str) -> Cow<'_, str> {
    if dialect != Dialect::Postgres || !query.contains('?') {
        return Cow::Borrowed(query);
    }

    let mut out = String::with_capacity(query.len() + 8);
    let mut index = 0;
    let mut quote: Option<char> = None;
    for c in query.chars() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
                out.push(c);
            }
            None => match c {
                '\'' | '"' | '`' => {
                    quote = Some(c);
                    out.push(c);
                }
                '?' => {
                    index += 1;
                    out.push('$');
                    out.push_str(&index.to_string());
                }
                _ => out.push(c),
            },
        }
    }
    Cow::Owned(out)
}
