//! Property tests for the share wire codec (§4.6): 37-byte encode/decode
//! and the 27-word phrase encoding built on top of it.

use num_bigint::BigUint;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use thresh39::domain::Threshold;
use thresh39::share::{Point, Share};
use thresh39::wordlist::Language;
use thresh39::{codec, field};

/// A share built from arbitrary-but-valid field components.
#[derive(Clone, Debug)]
struct ArbitraryShare(Share);

impl Arbitrary for ArbitraryShare {
    fn arbitrary(g: &mut Gen) -> Self {
        let x = (u8::arbitrary(g) % 128) + 2; // [2, 129]
        let threshold = (u8::arbitrary(g) % 16) + 2; // [2, 17]
        let version = u8::arbitrary(g) % 32; // [0, 31]
        let seed_checksum = u8::arbitrary(g);

        let mut y_bytes = [0u8; 32];
        for byte in &mut y_bytes {
            *byte = u8::arbitrary(g);
        }
        let mut y = BigUint::from_bytes_be(&y_bytes);
        if !field::is_valid_share_y(&y) {
            y = BigUint::from(1u8);
        }

        let point = Point::new(x, y).unwrap();
        let share = Share::new(point, Threshold::new(threshold).unwrap(), seed_checksum, version)
            .unwrap();
        ArbitraryShare(share)
    }
}

/// Every share survives a 37-byte encode/decode round trip unchanged.
#[quickcheck]
fn prop_wire_round_trip(share: ArbitraryShare) -> bool {
    let ArbitraryShare(share) = share;
    let bytes = codec::encode(&share);
    match codec::decode(&bytes) {
        Ok(decoded) => decoded == share,
        Err(_) => false,
    }
}

/// Every share survives an encode-to-phrase/decode-from-phrase round trip,
/// in every supported language.
#[quickcheck]
fn prop_phrase_round_trip(share: ArbitraryShare, lang_index: u8) -> bool {
    let ArbitraryShare(share) = share;
    let languages = [
        Language::English,
        Language::French,
        Language::Spanish,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::Czech,
        Language::Portuguese,
        Language::SimplifiedChinese,
        Language::TraditionalChinese,
    ];
    let lang = languages[lang_index as usize % languages.len()];

    let words = codec::encode_phrase(&share, lang);
    let decoded = match codec::decode_phrase(&words, lang) {
        Ok(decoded) => decoded,
        Err(_) => return false,
    };
    decoded == share
}

/// Flipping a single bit anywhere in the 37-byte wire form is caught by
/// the `share_checksum` with overwhelming probability.
#[quickcheck]
fn prop_bitflip_is_caught_by_checksum(share: ArbitraryShare, byte_index: u8, bit: u8) -> bool {
    let ArbitraryShare(share) = share;
    let mut bytes = codec::encode(&share);
    let idx = byte_index as usize % bytes.len();
    let bit_mask = 1u8 << (bit % 8);
    bytes[idx] ^= bit_mask;

    match codec::decode(&bytes) {
        Err(thresh39::ShamirError::ChecksumError { .. }) => true,
        // A bit flip confined to one of the metadata/checksum fields can,
        // with vanishing probability, still decode to a structurally valid
        // (if different) share rather than failing outright.
        Ok(decoded) => decoded != share,
        Err(_) => false,
    }
}

/// Wrong-length byte slices are always rejected before checksum work.
#[quickcheck]
fn prop_decode_rejects_non_37_byte_lengths(len: u8) -> bool {
    let len = len as usize;
    if len == codec::SHARE_BYTES {
        return true;
    }
    codec::decode(&vec![0u8; len]).is_err()
}
