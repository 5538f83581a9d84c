//! Date field descriptors

use super::types::{ArgumentDef, FieldDescriptor, ResolveArgs, ResolveContext, ScalarType};
use crate::dates::{self, TimeUnit};
use crate::types::{JsonObject, JsonValue};
use std::sync::Arc;

/// Descriptor for a string field holding dates
///
/// Resolution, in order: `formatString` reformats the date, `fromNow`
/// renders a relative phrase, `difference` returns `now - date` in the named
/// unit. Without arguments (or for values that no longer parse) the stored
/// value is returned unchanged.
pub fn date_field() -> FieldDescriptor {
    FieldDescriptor::scalar(ScalarType::String)
        .with_args(date_args())
        .with_resolver(Arc::new(resolve_date))
}

fn date_args() -> Vec<ArgumentDef> {
    vec![
        ArgumentDef::new("formatString", ScalarType::String)
            .with_description("Format the date using tokens like YYYY-MM-DD"),
        ArgumentDef::new("fromNow", ScalarType::Boolean)
            .with_description("Render the date relative to now, e.g. \"in 3 days\""),
        ArgumentDef::new("difference", ScalarType::String).with_description(
            "Difference between now and the date in the given unit (years, months, weeks, days, hours, minutes, seconds); milliseconds otherwise",
        ),
    ]
}

fn resolve_date(record: &JsonObject, args: &ResolveArgs, ctx: &ResolveContext) -> Option<JsonValue> {
    let raw = record.get(&ctx.field_name).filter(|v| !v.is_null())?;
    let Some(parsed) = raw.as_str().and_then(dates::parse_date) else {
        return Some(raw.clone());
    };

    if let Some(format) = args.get("formatString").and_then(JsonValue::as_str) {
        return Some(JsonValue::String(dates::format_date(&parsed.instant, format)));
    }

    if args.get("fromNow").and_then(JsonValue::as_bool).unwrap_or(false) {
        return Some(JsonValue::String(dates::from_now(ctx.now, &parsed.instant)));
    }

    if let Some(unit) = args.get("difference").and_then(JsonValue::as_str) {
        let diff = dates::difference(ctx.now, &parsed.instant, TimeUnit::parse(unit));
        return Some(JsonValue::from(diff));
    }

    Some(raw.clone())
}
