//! Deterministic identity resolution from an email address.
//!
//! `resolve_profile` is a pure function: the same email (after
//! normalization) always yields byte-identical output, which sign-in,
//! sign-up, and tests all rely on.

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/initials/svg";
const AVATAR_STYLE: &str = "backgroundColor=6366f1&fontWeight=800";

/// Local-part marker for institutional accounts that map to a fixed profile.
const INSTITUTIONAL_MARKER: &str = "24r01a6658";

/// Display name and avatar derived from an email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProfile {
    pub display_name: String,
    pub avatar_ref: String,
}

/// Resolve a profile from an email address.
///
/// The email is normalized (trimmed, ASCII-lowercased) first, so inputs that
/// differ only in case or surrounding whitespace resolve identically. If the
/// local part contains the institutional marker, a fixed known profile is
/// returned. Otherwise the display name is derived by splitting the local
/// part on `.` or `_`, capitalizing each segment, and joining with spaces;
/// the avatar reference is seeded from that display name.
#[must_use]
pub fn resolve_profile(email: &str) -> ResolvedProfile {
    let normalized = email.trim().to_ascii_lowercase();
    let local_part = normalized.split('@').next().unwrap_or(&normalized);

    if local_part.contains(INSTITUTIONAL_MARKER) {
        return ResolvedProfile {
            display_name: "S. School".to_string(),
            avatar_ref: avatar_for_seed("SS"),
        };
    }

    let display_name = local_part
        .split(['.', '_'])
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    ResolvedProfile {
        avatar_ref: avatar_for_seed(&display_name),
        display_name,
    }
}

/// DiceBear initials avatar URL for a seed string.
fn avatar_for_seed(seed: &str) -> String {
    format!(
        "{AVATAR_BASE}?seed={}&{AVATAR_STYLE}",
        urlencoding::encode(seed)
    )
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("jane.doe@example.com", "Jane Doe")]
    #[case("jane_doe@example.com", "Jane Doe")]
    #[case("jane@example.com", "Jane")]
    #[case("j.r.r.tolkien@example.com", "J R R Tolkien")]
    fn display_name_derivation(#[case] email: &str, #[case] expected: &str) {
        assert_eq!(resolve_profile(email).display_name, expected);
    }

    #[rstest]
    #[case("jane.doe@example.com", "JANE.DOE@EXAMPLE.COM")]
    #[case("jane.doe@example.com", "  jane.doe@example.com  ")]
    #[case("jane.doe@example.com", " Jane.Doe@Example.Com ")]
    fn normalization_equivalence(#[case] canonical: &str, #[case] variant: &str) {
        assert_eq!(resolve_profile(canonical), resolve_profile(variant));
    }

    #[test]
    fn resolution_is_idempotent() {
        let first = resolve_profile("sam_smith@example.org");
        let second = resolve_profile("sam_smith@example.org");
        assert_eq!(first, second);
    }

    #[test]
    fn institutional_marker_maps_to_fixed_profile() {
        let profile = resolve_profile("24r01a6658@college.example");
        assert_eq!(profile.display_name, "S. School");
        assert!(profile.avatar_ref.contains("seed=SS"));

        // Marker anywhere in the local part counts.
        let embedded = resolve_profile("student.24r01a6658.cs@college.example");
        assert_eq!(embedded.display_name, "S. School");
    }

    #[test]
    fn avatar_seed_is_percent_encoded_display_name() {
        let profile = resolve_profile("jane.doe@example.com");
        assert!(profile.avatar_ref.contains("seed=Jane%20Doe"));
        assert!(profile.avatar_ref.starts_with(AVATAR_BASE));
    }

    #[test]
    fn empty_segments_are_skipped() {
        let profile = resolve_profile("jane..doe@example.com");
        assert_eq!(profile.display_name, "Jane Doe");
    }
}
