use std::path::PathBuf;

use anyhow::Context;
use time::{format_description::FormatItem, macros::format_description, UtcOffset};

const OFFSET_FORMAT: &[FormatItem<'static>] =
    format_description!("[offset_hour sign:mandatory]:[offset_minute]");

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding one JSON blob per store key. `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    /// Offset that defines where "today" starts and ends.
    pub utc_offset: UtcOffset,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);
        let data_dir = std::env::var("AURA_DATA_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let utc_offset = match std::env::var("AURA_UTC_OFFSET") {
            Ok(raw) => parse_offset(&raw)?,
            Err(_) => UtcOffset::current_local_offset().unwrap_or_else(|_| {
                tracing::warn!("local offset unavailable; day boundaries use UTC");
                UtcOffset::UTC
            }),
        };
        Ok(Self {
            host,
            port,
            data_dir,
            utc_offset,
        })
    }
}

pub fn parse_offset(raw: &str) -> anyhow::Result<UtcOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return Ok(UtcOffset::UTC);
    }
    UtcOffset::parse(raw, OFFSET_FORMAT)
        .with_context(|| format!("AURA_UTC_OFFSET must look like +HH:MM, got {raw:?}"))
}
