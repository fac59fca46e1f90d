/// The fixed ignore set — OS-generated metadata files that are never
/// classified, counted, or reported.
///
/// Matching is case-insensitive because FAT/NTFS volumes preserve but do
/// not enforce case, so `Thumbs.db` and `THUMBS.DB` are the same artefact.
pub fn is_ignored(filename: &str) -> bool {
    let lower = filename.to_ascii_lowercase();
    lower == ".ds_store"
        || lower == "thumbs.db"
        || (lower.starts_with("thumbcache_") && lower.ends_with(".db"))
}
