use std::sync::OnceLock;

use regex::Regex;

/// Utility for parsing PostgreSQL constraint violation messages.
///
/// Constraint names in `migrations/` follow the PostgreSQL defaults
/// (`admins_email_key`, `empregos_ramo_id_fkey`), so the table and column
/// can be recovered from the name alone. The message text is only used
/// to pull out the offending value.
pub struct ConstraintParser;

struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            // Matches "Key (field)=(value)" pattern in PostgreSQL messages
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").expect("valid key/value regex"),
            column_name: Regex::new(r#"column "([^"]+)""#).expect("valid column regex"),
            table_name: Regex::new(r#"(?:table|relation) "([^"]+)""#).expect("valid table regex"),
        }
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

/// Tables whose constraint names can be split back into table and column.
const TABLES: &[&str] = &["empregos", "regioes", "admins", "ramos"];

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a unique violation into `(table, column, value)`.
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some((table, column)) =
            constraint_name.and_then(|c| Self::split_constraint_name(c, "_key"))
        {
            let value = Self::extract_key_value_from_message(message)
                .map(|(_, v)| v)
                .unwrap_or_else(|| "duplicate_value".to_string());
            return Some((table, column, value));
        }

        let (column, value) = Self::extract_key_value_from_message(message)?;
        let table = Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
        Some((table, column, value))
    }

    /// Parses a foreign key violation into `(table, column, referenced value)`.
    pub fn parse_foreign_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some((table, column)) =
            constraint_name.and_then(|c| Self::split_constraint_name(c, "_fkey"))
        {
            let value = Self::extract_key_value_from_message(message)
                .map(|(_, v)| v)
                .unwrap_or_else(|| "invalid_reference".to_string());
            return Some((table, column, value));
        }

        let (column, value) = Self::extract_key_value_from_message(message)?;
        let table = Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
        Some((table, column, value))
    }

    /// Parses a not-null violation into `(table, column)`.
    pub fn parse_not_null_violation(message: &str) -> Option<(String, String)> {
        let column = Self::extract_column_from_message(message)?;
        let table = Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
        Some((table, column))
    }

    /// Splits `<table>_<column>_<suffix>` using the known table names.
    ///
    /// `empregos_ramo_id_fkey` with suffix `_fkey` → `("empregos", "ramo_id")`.
    pub fn split_constraint_name(constraint_name: &str, suffix: &str) -> Option<(String, String)> {
        let body = constraint_name.strip_suffix(suffix)?;
        TABLES.iter().find_map(|table| {
            body.strip_prefix(table)
                .and_then(|rest| rest.strip_prefix('_'))
                .filter(|column| !column.is_empty())
                .map(|column| (table.to_string(), column.to_string()))
        })
    }

    pub fn extract_column_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn extract_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .table_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Extracts `(field, value)` from "Key (field)=(value)".
    pub fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        Self::patterns().key_value.captures(message).and_then(|caps| {
            let field = caps.get(1)?.as_str().to_string();
            let value = caps.get(2)?.as_str().to_string();
            Some((field, value))
        })
    }
}
