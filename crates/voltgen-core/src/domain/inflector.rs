//! Name inflection used across every generated artifact.
//!
//! Thin wrappers over the `Inflector` crate so call sites keep one naming
//! vocabulary; model-name validation lives here too.

use inflector::Inflector;

use crate::domain::error::DomainError;

/// Human label for a column: `email_verified_at` -> `Email Verified At`.
pub fn headline(column: &str) -> String {
    column.to_lowercase().to_title_case()
}

/// `blog_post`, `blog-post` or `blogPost` -> `BlogPost`.
pub fn studly(name: &str) -> String {
    name.to_pascal_case()
}

/// `BlogPost` -> `blogPost`.
pub fn camel(name: &str) -> String {
    name.to_camel_case()
}

/// `BlogPost` -> `blog_post`.
pub fn snake(name: &str) -> String {
    name.to_snake_case()
}

/// Plural of the last word of `name`, keeping the leading case.
///
/// Works on `BlogPost` as well as `Blog Post`.
pub fn plural(name: &str) -> String {
    let split_at = name
        .char_indices()
        .rev()
        .find(|(i, c)| *i > 0 && (c.is_uppercase() || *c == ' '))
        .map_or(0, |(i, c)| if c == ' ' { i + 1 } else { i });
    let (head, word) = name.split_at(split_at);

    // Inflector rules are lowercase only.
    let plural = word.to_lowercase().to_plural();
    if word.chars().next().is_some_and(char::is_uppercase) {
        format!("{head}{}", plural.to_pascal_case())
    } else {
        format!("{head}{plural}")
    }
}

/// `App\Models\User` -> `User`.
pub fn class_basename(class: &str) -> &str {
    class.rsplit('\\').next().unwrap_or(class)
}

/// Normalise a user-supplied model name to StudlyCase, rejecting anything
/// that cannot be a class name.
pub fn model_name(raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| DomainError::InvalidModelName {
        name: raw.to_string(),
        reason: reason.to_string(),
    };

    let first = trimmed.chars().next().ok_or_else(|| invalid("name is empty"))?;
    if !first.is_ascii_alphabetic() {
        return Err(invalid("must start with a letter"));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(invalid("only letters, digits, '_' and '-' are allowed"));
    }

    Ok(studly(trimmed))
}

/// Check that `value`, passed to `--{option}`, is a bare column identifier
/// that can be quoted into generated PHP and SQL.
pub fn column_name(option: &str, value: &str) -> Result<(), DomainError> {
    let mut chars = value.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(DomainError::invalid_column(option, value))
    }
}
