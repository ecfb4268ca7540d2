const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];
const BASE: f64 = 1024.0;

/// Human-readable byte size, base 1024, at most two decimals.
///
/// Sizes of a gigabyte or more stay in MB.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scaled = bytes as f64;
    while scaled >= BASE && unit < UNITS.len() - 1 {
        scaled /= BASE;
        unit += 1;
    }

    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}
