/// Shortens a display name to `limit` characters, marking the cut with `...`.
pub fn ellipsize(name: &str, limit: usize) -> String {
    if name.chars().count() > limit {
        let head: String = name.chars().take(limit).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Rewrites a hosted media URL so the host serves it as an attachment.
pub fn download_url(media_url: &str) -> String {
    media_url.replacen("/upload/", "/upload/fl_attachment/", 1)
}
