use crate::utils::error::{RegistryError, Result};
use chrono::NaiveDate;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if display.is_empty() {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A usable date format must render a date and parse it back unchanged.
pub fn validate_date_format(field_name: &str, format: &str) -> Result<()> {
    validate_non_empty_string(field_name, format)?;

    let sample = NaiveDate::from_ymd_opt(2001, 12, 31).ok_or_else(|| RegistryError::ConfigError {
        message: "sample date out of range".to_string(),
    })?;

    let mut rendered = String::new();
    if std::fmt::write(&mut rendered, format_args!("{}", sample.format(format))).is_err() {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: "Format contains an invalid specifier".to_string(),
        });
    }

    match NaiveDate::parse_from_str(&rendered, format) {
        Ok(parsed) if parsed == sample => Ok(()),
        _ => Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: "Format must contain year, month and day".to_string(),
        }),
    }
}

/// Human-readable layout for a chrono date format, e.g. `%d.%m.%Y` -> `DD.MM.YYYY`.
pub fn date_format_hint(format: &str) -> String {
    let mut hint = String::with_capacity(format.len() + 4);
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            hint.push(c);
            continue;
        }
        match chars.next() {
            Some('Y') => hint.push_str("YYYY"),
            Some('y') => hint.push_str("YY"),
            Some('m') => hint.push_str("MM"),
            Some('d') | Some('e') => hint.push_str("DD"),
            Some('b') | Some('h') => hint.push_str("Mon"),
            Some('B') => hint.push_str("Month"),
            Some('j') => hint.push_str("DDD"),
            Some('F') => hint.push_str("YYYY-MM-DD"),
            Some('%') => hint.push('%'),
            Some(other) => {
                hint.push('%');
                hint.push(other);
            }
            None => hint.push('%'),
        }
    }
    hint
}
