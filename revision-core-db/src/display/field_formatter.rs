use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use revision_core_api::error::{RevisionError, RevisionResult};

/// Display formatting rule for one field key.
///
/// Rules parse from the compact `kind:args` convention used in revision
/// formatting configuration, e.g. `"boolean:No|Yes"`,
/// `"datetime:%d/%m/%Y %H:%M"`, `"currency:$"`. `Custom` carries a
/// caller-supplied transform and has no textual spec.
#[derive(Clone)]
pub enum FormatRule {
    /// Render falsy raw values ("", "0", "false") as the first label,
    /// everything else as the second
    Boolean { falsy: String, truthy: String },
    /// Reformat a stored date or datetime with a chrono pattern
    DateTime { pattern: String },
    /// Prefix a decimal value with a currency symbol, two fraction digits
    Currency { symbol: String },
    /// Arbitrary caller-supplied transform
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl fmt::Debug for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean { falsy, truthy } => f
                .debug_struct("Boolean")
                .field("falsy", falsy)
                .field("truthy", truthy)
                .finish(),
            Self::DateTime { pattern } => {
                f.debug_struct("DateTime").field("pattern", pattern).finish()
            }
            Self::Currency { symbol } => {
                f.debug_struct("Currency").field("symbol", symbol).finish()
            }
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl FormatRule {
    /// Parse a `kind:args` rule spec.
    ///
    /// An unrecognized kind is a configuration error, never a silent
    /// pass-through.
    pub fn parse(spec: &str) -> RevisionResult<Self> {
        let (kind, args) = match spec.split_once(':') {
            Some((kind, args)) => (kind, Some(args)),
            None => (spec, None),
        };

        match kind {
            "boolean" => {
                let labels = args.unwrap_or("No|Yes");
                let (falsy, truthy) = labels.split_once('|').ok_or_else(|| {
                    RevisionError::ConfigurationError(format!(
                        "boolean format rule needs `falsy|truthy` labels, got `{labels}`"
                    ))
                })?;
                Ok(Self::Boolean {
                    falsy: falsy.to_string(),
                    truthy: truthy.to_string(),
                })
            }
            "date" | "datetime" => Ok(Self::DateTime {
                pattern: args.unwrap_or("%Y-%m-%d %H:%M:%S").to_string(),
            }),
            "currency" => Ok(Self::Currency {
                symbol: args.unwrap_or("$").to_string(),
            }),
            other => Err(RevisionError::ConfigurationError(format!(
                "unknown format rule kind: {other}"
            ))),
        }
    }

    fn apply(&self, value: &str) -> String {
        match self {
            Self::Boolean { falsy, truthy } => {
                if matches!(value, "" | "0" | "false") {
                    falsy.clone()
                } else {
                    truthy.clone()
                }
            }
            Self::DateTime { pattern } => reformat_timestamp(value, pattern),
            Self::Currency { symbol } => match Decimal::from_str(value) {
                Ok(amount) => format!("{symbol}{:.2}", amount.round_dp(2)),
                // non-numeric stored data is a data problem, not ours to hide
                Err(_) => value.to_string(),
            },
            Self::Custom(transform) => transform(value),
        }
    }
}

/// Apply the rule registered for `key`, if any. Keys without a rule pass
/// through unchanged.
pub fn format_field(key: &str, value: &str, rules: &HashMap<String, FormatRule>) -> String {
    match rules.get(key) {
        Some(rule) => rule.apply(value),
        None => value.to_string(),
    }
}

/// Stored timestamps arrive as RFC 3339, `%Y-%m-%d %H:%M:%S`, or a bare
/// date. Values that parse as none of these pass through unchanged.
fn reformat_timestamp(value: &str, pattern: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return ts.format(pattern).to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return ts.format(pattern).to_string();
    }
    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return day.format(pattern).to_string();
    }
    value.to_string()
}
