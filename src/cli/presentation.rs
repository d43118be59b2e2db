//! CLI presentation: report line and size formatting.

use crate::diff::{ChangeKind, ChangeRecord};

const SIZE_LEVELS: [(u64, char); 4] = [
    (1 << 40, 'T'),
    (1 << 30, 'G'),
    (1 << 20, 'M'),
    (1 << 10, 'K'),
];

/// Render a byte count in binary units.
///
/// Exact multiples of a unit print as integers ("4K"); everything else
/// keeps three decimals ("1.500K"), with the fraction expressed in
/// 1024ths of the unit. Sizes under 1K print as plain byte counts.
pub fn human_size(nbytes: u64) -> String {
    for (unit_size, suffix) in SIZE_LEVELS {
        if nbytes >= unit_size {
            let quot = nbytes / unit_size;
            let remainder = (nbytes - quot * unit_size) / (unit_size / 1024);
            if remainder == 0 {
                return format!("{}{}", quot, suffix);
            }
            return format!("{:.3}{}", quot as f64 + remainder as f64 / 1024.0, suffix);
        }
    }
    nbytes.to_string()
}

/// One report line: path, a tab, then the change tag and signed size.
pub fn format_change_line(record: &ChangeRecord) -> String {
    match record.kind {
        ChangeKind::Added => format!("{}\tnew +{}", record.path, human_size(record.bytes)),
        ChangeKind::Removed => format!("{}\tdel -{}", record.path, human_size(record.bytes)),
        ChangeKind::Grown => format!("{}\t+{}", record.path, human_size(record.bytes)),
    }
}
