use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::db::models::LabelKind;

pub fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("failed to parse {field}"))
}

pub fn parse_uuid(value: &str, field: &str) -> Result<Uuid> {
    Uuid::parse_str(value).with_context(|| format!("failed to parse {field}"))
}

pub fn parse_kind(value: &str) -> Result<LabelKind> {
    match value {
        "Category" => Ok(LabelKind::Category),
        "Brand" => Ok(LabelKind::Brand),
        "Color" => Ok(LabelKind::Color),
        "Fit" => Ok(LabelKind::Fit),
        "Satisfaction" => Ok(LabelKind::Satisfaction),
        "Size" => Ok(LabelKind::Size),
        other => Err(anyhow!("unknown label kind {other}")),
    }
}
