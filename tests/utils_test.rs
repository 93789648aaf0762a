use deezex::types::EntityKind;
use deezex::utils::*;

#[test]
fn test_extract_id_numeric_input() {
    // Numeric-only input is returned verbatim, untouched by any keyword logic
    assert_eq!(extract_id("123456789"), Some("123456789".to_string()));
    assert_eq!(extract_id("0"), Some("0".to_string()));

    // Surrounding whitespace is tolerated
    assert_eq!(extract_id("  42  "), Some("42".to_string()));
}

#[test]
fn test_extract_id_url_input() {
    // The trailing digit run of a URL-like input is extracted exactly
    assert_eq!(
        extract_id("https://www.deezer.com/en/playlist/908622995"),
        Some("908622995".to_string())
    );
    assert_eq!(
        extract_id("https://www.deezer.com/profile/2529"),
        Some("2529".to_string())
    );
    assert_eq!(extract_id("album/302127"), Some("302127".to_string()));
}

#[test]
fn test_extract_id_invalid_input() {
    // No digits at all
    assert_eq!(extract_id("not an id"), None);
    assert_eq!(extract_id(""), None);

    // The id has to be the trailing path segment
    assert_eq!(extract_id("https://www.deezer.com/playlist/abc"), None);
    assert_eq!(extract_id("https://www.deezer.com/playlist/123/tracks"), None);

    // Query parameters after the id break the trailing-digits rule
    assert_eq!(extract_id("https://www.deezer.com/playlist/123?utm=x"), None);
}

#[test]
fn test_classify_kind_keywords() {
    assert_eq!(
        classify_kind("https://www.deezer.com/en/album/302127"),
        Some(EntityKind::Album)
    );
    assert_eq!(
        classify_kind("https://www.deezer.com/en/playlist/908622995"),
        Some(EntityKind::Playlist)
    );
    assert_eq!(
        classify_kind("https://www.deezer.com/profile/2529"),
        Some(EntityKind::User)
    );
    assert_eq!(classify_kind("user/2529"), Some(EntityKind::User));
}

#[test]
fn test_classify_kind_priority_order() {
    // Fixed priority: album wins over playlist, playlist wins over user
    assert_eq!(
        classify_kind("playlist-of-album/1"),
        Some(EntityKind::Album)
    );
    assert_eq!(
        classify_kind("profile/2529/playlist/1"),
        Some(EntityKind::Playlist)
    );
}

#[test]
fn test_classify_kind_requires_keyword() {
    // A bare numeric id carries no kind: there is no numeric-only fallback,
    // the kind has to be stated explicitly via the subcommand
    assert_eq!(classify_kind("123456789"), None);
    assert_eq!(classify_kind("something-else/123"), None);
}

#[test]
fn test_resolve_numeric_id_for_any_kind() {
    for kind in [EntityKind::User, EntityKind::Playlist, EntityKind::Album] {
        let entity = resolve("123456789", kind).unwrap();
        assert_eq!(entity.kind, kind);
        assert_eq!(entity.id, "123456789");
    }
}

#[test]
fn test_resolve_url_with_matching_kind() {
    let entity = resolve(
        "https://www.deezer.com/en/playlist/908622995",
        EntityKind::Playlist,
    )
    .unwrap();
    assert_eq!(entity.kind, EntityKind::Playlist);
    assert_eq!(entity.id, "908622995");
}

#[test]
fn test_resolve_rejects_kind_mismatch() {
    // A playlist URL passed to the album command is refused, not reinterpreted
    let result = resolve(
        "https://www.deezer.com/en/playlist/908622995",
        EntityKind::Album,
    );
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("playlist"));
}

#[test]
fn test_resolve_rejects_unparseable_input() {
    let result = resolve("not an id", EntityKind::User);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not an id"));
}

#[test]
fn test_sanitize_filename_unsafe_characters() {
    assert_eq!(sanitize_filename("My/Mix"), "My_Mix");
    assert_eq!(sanitize_filename("a\\b:c*d?e"), "a_b_c_d_e");
    assert_eq!(sanitize_filename("\"<tag>\" | pipe"), "__tag__ _ pipe");

    // Control characters are mapped too
    assert_eq!(sanitize_filename("mix\u{0007}tape"), "mix_tape");
}

#[test]
fn test_sanitize_filename_plain_titles_unchanged() {
    assert_eq!(sanitize_filename("Summer Hits 2024"), "Summer Hits 2024");
    assert_eq!(sanitize_filename("  padded  "), "padded");
}

#[test]
fn test_sanitize_filename_empty_fallback() {
    assert_eq!(sanitize_filename(""), "playlist");
    assert_eq!(sanitize_filename("   "), "playlist");
}
