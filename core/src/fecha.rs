//! Date rendering for registro timestamps.
//!
//! The service reports dates as free-form strings (RFC 3339 with or without
//! an offset, or a bare date). Parsing happens only at render time, so one
//! unparseable value degrades a single cell rather than the whole row.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder shown when a registro carries no date at all.
pub const FECHA_VACIA: &str = "N/A";

/// Placeholder shown when a date value exists but cannot be parsed.
pub const FECHA_INVALIDA: &str = "Fecha inválida";

/// Render a wire date as `dd/mm/yyyy`.
///
/// Missing or empty values render as [`FECHA_VACIA`], unparseable ones as
/// [`FECHA_INVALIDA`].
pub fn format_fecha(valor: Option<&str>) -> String {
    let valor = match valor {
        None => return FECHA_VACIA.to_string(),
        Some(v) if v.is_empty() => return FECHA_VACIA.to_string(),
        Some(v) => v,
    };
    match parse_fecha(valor) {
        Some(fecha) => fecha.format("%d/%m/%Y").to_string(),
        None => FECHA_INVALIDA.to_string(),
    }
}

/// Try the formats the service is known to emit, most specific first.
fn parse_fecha(valor: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(valor) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(valor, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(valor, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(valor, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_date_renders_placeholder() {
        assert_eq!(format_fecha(None), "N/A");
        assert_eq!(format_fecha(Some("")), "N/A");
    }

    #[test]
    fn rfc3339_with_offset() {
        assert_eq!(format_fecha(Some("2024-03-15T10:30:00Z")), "15/03/2024");
        assert_eq!(
            format_fecha(Some("2024-03-15T10:30:00+02:00")),
            "15/03/2024"
        );
    }

    #[test]
    fn naive_datetime_without_offset() {
        assert_eq!(format_fecha(Some("2024-03-15T10:30:00")), "15/03/2024");
        assert_eq!(
            format_fecha(Some("2024-03-15T10:30:00.123456")),
            "15/03/2024"
        );
        assert_eq!(format_fecha(Some("2024-03-15 10:30:00")), "15/03/2024");
    }

    #[test]
    fn bare_date() {
        assert_eq!(format_fecha(Some("2024-12-01")), "01/12/2024");
    }

    #[test]
    fn garbage_renders_invalid_marker() {
        assert_eq!(format_fecha(Some("mañana")), "Fecha inválida");
        assert_eq!(format_fecha(Some("15/03/2024")), "Fecha inválida");
        assert_eq!(format_fecha(Some("2024-13-45")), "Fecha inválida");
    }
}
