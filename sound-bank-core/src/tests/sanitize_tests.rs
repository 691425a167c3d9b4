use super::*;

fn mp3() -> Vec<String> {
    vec!["mp3".to_string()]
}

#[test]
fn category_rules() {
    assert_eq!(sanitize_category("Drums & Percussion"), "drums_and_percussion");
    assert_eq!(sanitize_category("UI Sounds"), "ui_sounds");
    assert_eq!(sanitize_category("Power-Ups"), "power_ups");
    assert_eq!(sanitize_category("Doors, Gates"), "doors_gates");
    assert_eq!(sanitize_category("Player's Hits"), "players_hits");
    assert_eq!(sanitize_category("Music"), "music");
}

#[test]
fn category_keeps_parentheses() {
    // Parenthesis removal only applies to asset names
    assert_eq!(sanitize_category("Misc (old)"), "misc_(old)");
}

#[test]
fn asset_name_rules() {
    assert_eq!(sanitize_asset_name("Hit (1).mp3", &mp3()), "hit_1");
    assert_eq!(sanitize_asset_name("Click.mp3", &mp3()), "click");
    assert_eq!(sanitize_asset_name("Coin & Jump-2.mp3", &mp3()), "coin_and_jump_2");
    assert_eq!(sanitize_asset_name("Don't Stop, Ever.mp3", &mp3()), "dont_stop_ever");
}

#[test]
fn asset_name_extension_is_case_insensitive() {
    assert_eq!(sanitize_asset_name("Laser.MP3", &mp3()), "laser");
}

#[test]
fn asset_name_unknown_extension_is_kept() {
    // Only configured extensions are stripped; the dot then fails validation
    assert_eq!(sanitize_asset_name("Laser.ogg", &mp3()), "laser.ogg");
    assert_eq!(
        check_fragment("laser.ogg"),
        Err(InvalidNameReason::UnsupportedCharacter('.'))
    );
}

#[test]
fn asset_name_multiple_extensions() {
    let exts = vec!["mp3".to_string(), "wav".to_string()];
    assert_eq!(sanitize_asset_name("Boom.wav", &exts), "boom");
    assert_eq!(sanitize_asset_name("Boom.mp3", &exts), "boom");
}

#[test]
fn unsupported_punctuation_is_rejected() {
    let name = sanitize_asset_name("Wow!.mp3", &mp3());
    assert_eq!(name, "wow!");
    assert_eq!(
        check_fragment(&name),
        Err(InvalidNameReason::UnsupportedCharacter('!'))
    );
    assert_eq!(
        check_fragment(&sanitize_category("Track #2")),
        Err(InvalidNameReason::UnsupportedCharacter('#'))
    );
}

#[test]
fn non_ascii_is_rejected() {
    assert!(matches!(
        check_fragment(&sanitize_asset_name("Café.mp3", &mp3())),
        Err(InvalidNameReason::UnsupportedCharacter('é'))
    ));
}

#[test]
fn empty_fragment_is_rejected() {
    assert_eq!(check_fragment(""), Err(InvalidNameReason::Empty));
    assert_eq!(
        check_fragment(&sanitize_asset_name("().mp3", &mp3())),
        Err(InvalidNameReason::Empty)
    );
}

#[test]
fn category_leading_digit() {
    assert_eq!(check_category_fragment("8bit"), Err(InvalidNameReason::LeadingDigit));
    assert_eq!(check_category_fragment("bits_8"), Ok(()));
    // Asset names follow the `__` separator, so digits are fine there
    assert_eq!(check_fragment("8bit"), Ok(()));
}
