use super::*;

#[test]
fn palette_matches_brand_hex_values() {
    assert_eq!(ColorToken::Cream.hex(), "#FFF7E6");
    assert_eq!(ColorToken::Aqua.hex(), "#AEE8E2");
    assert_eq!(ColorToken::Orange.hex(), "#F28C38");
    assert_eq!(ColorToken::Mustard.hex(), "#F2C849");
    assert_eq!(ColorToken::Teal.hex(), "#007C88");
    assert_eq!(ColorToken::Coral.hex(), "#F25D50");
    assert_eq!(ColorToken::Charcoal.hex(), "#2F2F2F");
    assert_eq!(ColorToken::Gold.hex(), "#D4A24C");
}

#[test]
fn names_round_trip_through_from_str_and_serde() {
    for token in ColorToken::ALL {
        assert_eq!(token.name().parse::<ColorToken>().unwrap(), token);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, format!("\"{}\"", token.name()));
        assert_eq!(serde_json::from_str::<ColorToken>(&json).unwrap(), token);
    }
    assert_eq!(" Teal ".parse::<ColorToken>().unwrap(), ColorToken::Teal);
}

#[test]
fn unknown_token_is_rejected() {
    assert!("magenta".parse::<ColorToken>().is_err());
    assert!(serde_json::from_str::<ColorToken>("\"magenta\"").is_err());
}
