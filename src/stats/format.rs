//! Number formatting for panels

/// Record area in thousands: `828k sq mi`
pub fn area_thousands(area: f64) -> String {
    format!("{:.0}k sq mi", area / 1_000.0)
}

/// Aggregate area in millions: `1.72M`
pub fn area_millions(area: f64) -> String {
    format!("{:.2}M", area / 1_000_000.0)
}

/// Dollar amount in millions: `$15.0M`
pub fn dollars_millions(amount: u64) -> String {
    format!("${:.1}M", amount as f64 / 1_000_000.0)
}

/// Dollar amount in billions: `$0.4B`
pub fn dollars_billions(amount: u64) -> String {
    format!("${:.1}B", amount as f64 / 1_000_000_000.0)
}

/// Percentage with one decimal: `45.3%`
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}
