//! Pure view-model formatting, kept out of the rendering shell so it can be
//! tested directly.

/// Human-readable byte count: whole bytes, then one decimal for KB/MB/GB.
pub fn format_size(bytes: i64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let bytes = bytes.max(0) as f64;
    if bytes < KB {
        format!("{bytes} B", bytes = bytes as i64)
    } else if bytes < MB {
        format!("{:.1} KB", bytes / KB)
    } else if bytes < GB {
        format!("{:.1} MB", bytes / MB)
    } else {
        format!("{:.1} GB", bytes / GB)
    }
}

/// Metadata line for a file row: size plus the expiry countdown.
pub fn file_meta(file: &api::FileRecord) -> String {
    format!(
        "{} · Expires: {}",
        format_size(file.size),
        api::expiry::expiry_label(file.expiry_date)
    )
}

/// Role badge text for a roster row.
pub fn role_label(is_admin: bool) -> &'static str {
    if is_admin {
        "Admin"
    } else {
        "User"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(532), "532 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024 / 2), "1.5 GB");
        assert_eq!(format_size(-1), "0 B");
    }

    #[test]
    fn file_meta_line() {
        let file = api::FileRecord {
            id: "f1".into(),
            name: "report.pdf".into(),
            size: 2048,
            content_type: "application/pdf".into(),
            upload_date: None,
            expiry_date: None,
        };
        assert_eq!(file_meta(&file), "2.0 KB · Expires: Never");
    }

    #[test]
    fn roles() {
        assert_eq!(role_label(true), "Admin");
        assert_eq!(role_label(false), "User");
    }
}
