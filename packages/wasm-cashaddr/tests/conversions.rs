use rstest::rstest;
use wasm_cashaddr::{
    display_address, is_valid, to_cash_address, to_legacy_address, Address, AddressVersion,
    CHARSET,
};

const PAIRS: &[(&str, &str)] = &[
    (
        "155fzsEBHy9Ri2bMQ8uuuR3tv1YzcDywd4",
        "bitcoincash:qqkv9wr69ry2p9l53lxp635va4h86wv435995w8p2h",
    ),
    (
        "3CWFddi6m4ndiGyKqzYvsFYagqDLPVMTzC",
        "bitcoincash:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq",
    ),
    (
        "mmRH4e9WW4ekZUP5HvBScfUyaSUjfQRyvD",
        "bchtest:qpqtmmfpw79thzq5z7s0spcd87uhn6d34uqqem83hf",
    ),
    (
        "2MzQwSSnBHWHqSAqtTVQ6v47XtaisrJa1Vc",
        "bchtest:pp8f7ww2g6y07ypp9r4yendrgyznysc9kqxh6acwu3",
    ),
    // https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md
    (
        "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu",
        "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a",
    ),
    (
        "1KXrWXciRDZUpQwQmuM1DbwsKDLYAYsVLR",
        "bitcoincash:qr95sy3j9xwd2ap32xkykttr4cvcu7as4y0qverfuy",
    ),
    (
        "16w1D5WRVKJuZUsSRzdLp9w3YGcgoxDXb",
        "bitcoincash:qqq3728yw0y47sqn6l2na30mcw6zm78dzqre909m2r",
    ),
    (
        "3LDsS579y7sruadqu11beEJoTjdFiFCdX4",
        "bitcoincash:pr95sy3j9xwd2ap32xkykttr4cvcu7as4yc93ky28e",
    ),
    (
        "31nwvkZwyPdgzjBJZXfDmSWsC4ZLKpYyUw",
        "bitcoincash:pqq3728yw0y47sqn6l2na30mcw6zm78dzq5ucqzc37",
    ),
];

#[test]
fn test_legacy_round_trip() {
    for &(legacy, cashaddr) in PAIRS {
        let cash = to_cash_address(legacy).unwrap();
        assert_eq!(cash, cashaddr, "legacy {}", legacy);
        assert_eq!(to_legacy_address(&cash).unwrap(), legacy);
    }
}

#[test]
fn test_cashaddr_round_trip() {
    for &(legacy, cashaddr) in PAIRS {
        let converted = to_legacy_address(cashaddr).unwrap();
        assert_eq!(converted, legacy, "cashaddr {}", cashaddr);
        assert_eq!(to_cash_address(&converted).unwrap(), cashaddr);
    }
}

#[test]
fn test_uppercase_equivalent() {
    for &(legacy, cashaddr) in PAIRS {
        let upper = cashaddr.to_uppercase();
        assert_eq!(to_legacy_address(&upper).unwrap(), legacy);
        assert_eq!(to_cash_address(&upper).unwrap(), cashaddr);
    }
}

#[test]
fn test_mixed_case_rejected_even_with_valid_checksum() {
    for &(_, cashaddr) in PAIRS {
        let (prefix, body) = cashaddr.split_once(':').unwrap();
        // uppercase a single letter of the body
        let pos = body.find(|c: char| c.is_ascii_lowercase()).unwrap();
        let mut mixed = body.to_string();
        mixed.replace_range(pos..pos + 1, &body[pos..pos + 1].to_uppercase());
        let mixed = format!("{}:{}", prefix, mixed);

        let err = to_legacy_address(&mixed).unwrap_err();
        assert_eq!(
            err.message(),
            "Cash address contains uppercase and lowercase characters"
        );
        assert!(!is_valid(&mixed));
    }
}

#[test]
fn test_single_character_substitution_is_detected() {
    for &(_, cashaddr) in PAIRS {
        let (prefix, body) = cashaddr.split_once(':').unwrap();
        for (pos, original) in body.char_indices() {
            let replacement = CHARSET.chars().find(|&c| c != original).unwrap();
            let mut garbled = body.to_string();
            garbled.replace_range(pos..pos + 1, &replacement.to_string());
            let garbled = format!("{}:{}", prefix, garbled);
            assert!(!is_valid(&garbled), "{} should be invalid", garbled);
        }
    }
}

#[test]
fn test_missing_prefix_means_bitcoincash() {
    for &(legacy, cashaddr) in PAIRS {
        let Some(body) = cashaddr.strip_prefix("bitcoincash:") else {
            continue;
        };
        let bare = Address::from_cash_str(body).unwrap();
        assert_eq!(bare, Address::parse(cashaddr).unwrap());
        assert_eq!(bare.to_legacy_string().unwrap(), legacy);
    }
}

#[test]
fn test_display_address_strips_prefix() {
    for &(legacy, cashaddr) in PAIRS {
        let expected = cashaddr.rsplit(':').next().unwrap();
        assert_eq!(display_address(legacy).unwrap(), expected);
        assert_eq!(display_address(cashaddr).unwrap(), expected);
        assert!(!display_address(legacy).unwrap().contains(':'));
    }
}

#[rstest]
#[case::legacy_p2sh("3CWFddi6m4ndiGyKqzYvsFYagqDLPVMTzC", AddressVersion::P2SH)]
#[case::legacy_p2pkh("155fzsEBHy9Ri2bMQ8uuuR3tv1YzcDywd4", AddressVersion::P2PKH)]
#[case::legacy_p2pkh_testnet("mmRH4e9WW4ekZUP5HvBScfUyaSUjfQRyvD", AddressVersion::P2PKHTestnet)]
#[case::legacy_p2sh_testnet("2MzQwSSnBHWHqSAqtTVQ6v47XtaisrJa1Vc", AddressVersion::P2SHTestnet)]
#[case::cash_p2sh(
    "bitcoincash:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq",
    AddressVersion::P2SH
)]
#[case::cash_p2pkh(
    "bitcoincash:qqkv9wr69ry2p9l53lxp635va4h86wv435995w8p2h",
    AddressVersion::P2PKH
)]
#[case::cash_p2pkh_testnet(
    "bchtest:qpqtmmfpw79thzq5z7s0spcd87uhn6d34uqqem83hf",
    AddressVersion::P2PKHTestnet
)]
#[case::cash_p2sh_testnet(
    "bchtest:pp8f7ww2g6y07ypp9r4yendrgyznysc9kqxh6acwu3",
    AddressVersion::P2SHTestnet
)]
fn test_valid(#[case] address: &str, #[case] version: AddressVersion) {
    assert!(is_valid(address));
    assert_eq!(Address::parse(address).unwrap().version(), version);
}

#[rstest]
#[case::mixed_case("bitcoincash:qqkv9wr69ry2p9l53lxP635va4h86wv435995w8p2H")]
#[case::bad("bad")]
#[case::bad_cashaddr("bitcoincash:bad")]
#[case::too_short("bitcoincash:zz")]
#[case::digits("bitcoincash:123")]
#[case::empty("")]
#[case::prefix_only("bitcoincash:")]
fn test_invalid(#[case] address: &str) {
    assert!(!is_valid(address));
    assert!(to_cash_address(address).is_err());
    assert!(to_legacy_address(address).is_err());
}
