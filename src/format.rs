//! Pace and distance formatting for display

/// Format decimal minutes as `M'SS"`
///
/// Absent, negative and non-finite values render as `N/A`. Seconds are
/// rounded to the nearest whole second and a rounded 60 carries into the
/// minutes.
pub fn format_pace(decimal_minutes: Option<f64>) -> String {
    let value = match decimal_minutes {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => return "N/A".to_string(),
    };

    let mut minutes = value.floor() as u64;
    let mut seconds = ((value - value.floor()) * 60.0).round() as u64;
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }

    format!("{}'{:02}\"", minutes, seconds)
}

/// Minutes with one decimal, e.g. `5.0`
pub fn format_minutes(minutes: f64) -> String {
    format!("{:.1}", minutes)
}

/// Kilometres with three decimals, e.g. `0.667`
pub fn format_km(km: f64) -> String {
    format!("{:.3}", km)
}
