use time::OffsetDateTime;

/// Dates are stored as unix timestamps (seconds).
pub fn to_timestamp(value: OffsetDateTime) -> i64 {
    value.unix_timestamp()
}

pub fn from_timestamp(value: i64) -> crate::Result<OffsetDateTime> {
    Ok(OffsetDateTime::from_unix_timestamp(value)?)
}

pub fn from_opt_timestamp(value: Option<i64>) -> crate::Result<Option<OffsetDateTime>> {
    value.map(from_timestamp).transpose()
}
