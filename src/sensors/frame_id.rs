//! Frame-id canonicalization.

/// Strip exactly one leading `'/'` from a frame id.
///
/// Legacy sources prefix frame ids with a slash; downstream lookups expect
/// the bare name. A frame id that IS just `"/"` is returned unchanged (the
/// stripped form would be empty and invalid) and a diagnostic is logged.
pub fn strip_leading_slash(frame_id: &str) -> &str {
    match frame_id.strip_prefix('/') {
        Some("") => {
            log::error!(
                "The frame_id '{}' consists of a single '/' and cannot be canonicalized",
                frame_id
            );
            frame_id
        }
        Some(stripped) => stripped,
        None => frame_id,
    }
}
