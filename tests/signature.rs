use cryptal_ecc::EccError;
use cryptal_ecc::signatures::edwards::core::{
    check_signature, derive, private_key_to_public_key, raw_recover, raw_sign, sign, verify,
};
use cryptal_ecc::signatures::edwards::params::curve;
use cryptal_ecc::signatures::edwards::point::fast_multiply;
use cryptal_ecc::signatures::edwards::{PublicKey, RawSignature, Signature};
use cryptal_ecc::primitives::U256;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ZERO_SEED_PUBLIC_KEY: [u8; 32] = [
    0xe8, 0x21, 0x02, 0x8b, 0x6b, 0x1d, 0x42, 0xcd, 0xf1, 0x43, 0x06, 0x85, 0xb8, 0x78, 0x44, 0xd3,
    0xb1, 0x3d, 0x6a, 0x5a, 0x04, 0x9c, 0xc9, 0x50, 0x18, 0x23, 0x03, 0xdb, 0x1f, 0xbf, 0x2c, 0xcf,
];

const ZERO_SEED_EMPTY_SIGNATURE: [u8; 64] = [
    0xca, 0xf2, 0xa9, 0x3a, 0xc6, 0x3a, 0xdf, 0x68, 0xff, 0xe9, 0x04, 0xd6, 0x53, 0xbc, 0xc9, 0x5d,
    0xb4, 0x37, 0x31, 0x1c, 0x8c, 0x35, 0x2f, 0x23, 0x4f, 0xae, 0x41, 0xea, 0x95, 0x14, 0x6e, 0x8b,
    0x0b, 0x91, 0x94, 0x64, 0x62, 0x2e, 0x59, 0x28, 0x92, 0xa0, 0x75, 0xf2, 0x50, 0x53, 0x67, 0xd2,
    0xa5, 0x3a, 0xd6, 0x4a, 0x72, 0xdf, 0xe4, 0xde, 0xab, 0x60, 0xf0, 0x87, 0x5a, 0xce, 0xd5, 0xd4,
];

// Seed 00 01 02 .. 1f, message "hello world".
const COUNTING_SEED_PUBLIC_KEY: [u8; 32] = [
    0xf7, 0xd0, 0xf9, 0x10, 0xdb, 0x47, 0xbf, 0xfe, 0x37, 0x26, 0x5d, 0xb0, 0xfc, 0xda, 0xb7, 0x15,
    0xcd, 0xa5, 0x3c, 0xa0, 0x40, 0x0a, 0xb8, 0x03, 0x66, 0x8f, 0x35, 0xb0, 0x0a, 0xb4, 0xdd, 0x6a,
];

const COUNTING_SEED_SIGNATURE: [u8; 64] = [
    0xa4, 0x18, 0x81, 0x6b, 0xec, 0xb5, 0xc4, 0x68, 0x2c, 0x72, 0x20, 0xa5, 0x88, 0xe5, 0xe5, 0x50,
    0x0f, 0x28, 0x50, 0xa6, 0x11, 0xdb, 0x32, 0x33, 0x57, 0x1a, 0x8a, 0x66, 0xd4, 0x92, 0x00, 0x0b,
    0x0f, 0x39, 0x13, 0xea, 0xe3, 0x6b, 0xbf, 0x39, 0x33, 0x4a, 0x58, 0x13, 0x85, 0xa1, 0x9e, 0xf5,
    0x63, 0x32, 0xf2, 0x21, 0x29, 0x9b, 0x61, 0x43, 0xfe, 0xa4, 0x92, 0x17, 0x39, 0x31, 0x36, 0xe2,
];

fn counting_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    for (i, b) in seed.iter_mut().enumerate() {
        *b = i as u8;
    }
    seed
}

// -------------------------------------------------------
// 1. PINNED VECTORS
// -------------------------------------------------------

#[test]
fn zero_seed_public_key() {
    assert_eq!(
        private_key_to_public_key(&[0u8; 32]).to_bytes(),
        ZERO_SEED_PUBLIC_KEY
    );
}

#[test]
fn zero_seed_empty_message_signature() {
    let signature = sign(&[0u8; 32], b"");
    assert_eq!(signature.to_bytes(), ZERO_SEED_EMPTY_SIGNATURE);

    let public = PublicKey::from_bytes(ZERO_SEED_PUBLIC_KEY).to_point().unwrap();
    assert!(verify(&public, &ZERO_SEED_EMPTY_SIGNATURE, b""));
}

#[test]
fn counting_seed_vector() {
    let seed = counting_seed();

    assert_eq!(
        private_key_to_public_key(&seed).to_bytes(),
        COUNTING_SEED_PUBLIC_KEY
    );
    assert_eq!(sign(&seed, b"hello world").to_bytes(), COUNTING_SEED_SIGNATURE);

    let public = PublicKey::from_bytes(COUNTING_SEED_PUBLIC_KEY).to_point().unwrap();
    assert!(verify(&public, &COUNTING_SEED_SIGNATURE, b"hello world"));
}

// -------------------------------------------------------
// 2. KEY DERIVATION
// -------------------------------------------------------

#[test]
fn derived_scalar_is_clamped() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..8 {
        let mut seed = [0u8; 32];
        rng.fill(&mut seed);

        let (a, public) = derive(&seed);

        assert_eq!(a.bits(), 255, "bit 254 set, bit 255 clear");
        assert!(!a.bit(0) && !a.bit(1) && !a.bit(2));
        assert_eq!(fast_multiply(&curve().base, &a), public);
        assert!(public.is_on_curve());
    }
}

#[test]
fn public_key_matches_derived_point() {
    let seed = counting_seed();
    let (_, public) = derive(&seed);

    assert_eq!(private_key_to_public_key(&seed), PublicKey::from_point(&public));
}

// -------------------------------------------------------
// 3. SIGN / VERIFY PROPERTIES
// -------------------------------------------------------

#[test]
fn sign_verify_random_seeds() {
    let mut rng = StdRng::seed_from_u64(0x5151);

    for len in [0usize, 1, 31, 32, 33, 200] {
        let mut seed = [0u8; 32];
        rng.fill(&mut seed);

        let mut message = vec![0u8; len];
        rng.fill(message.as_mut_slice());

        let (_, public) = derive(&seed);
        let signature = sign(&seed, &message);

        assert!(verify(&public, &signature.to_bytes(), &message), "len = {len}");
    }
}

#[test]
fn signing_is_deterministic() {
    let seed = counting_seed();

    let first = sign(&seed, b"determinism");
    let second = sign(&seed, b"determinism");

    assert_eq!(first, second);
    assert_ne!(first, sign(&seed, b"determinism!"));
}

#[test]
fn scalar_is_fixed_width() {
    let mut rng = StdRng::seed_from_u64(8);

    for _ in 0..8 {
        let mut seed = [0u8; 32];
        rng.fill(&mut seed);

        let signature = sign(&seed, b"width");
        let s = U256::from(signature.s_bytes()).to_biguint();

        assert_eq!(signature.to_bytes().len(), 64);
        assert!(s < curve().l);
    }
}

#[test]
fn tampered_signature_is_rejected() {
    let public = PublicKey::from_bytes(ZERO_SEED_PUBLIC_KEY).to_point().unwrap();

    for byte in [0usize, 5, 31, 32, 44, 63] {
        for bit in [0u8, 3, 7] {
            let mut tampered = ZERO_SEED_EMPTY_SIGNATURE;
            tampered[byte] ^= 1 << bit;

            assert!(
                !verify(&public, &tampered, b""),
                "flip of bit {bit} in byte {byte} must be detected"
            );
        }
    }
}

#[test]
fn tampered_message_is_rejected() {
    let seed = counting_seed();
    let (_, public) = derive(&seed);
    let signature = sign(&seed, b"hello world").to_bytes();

    let mut message = b"hello world".to_vec();
    for i in 0..message.len() {
        message[i] ^= 0x01;
        assert!(!verify(&public, &signature, &message));
        message[i] ^= 0x01;
    }

    assert!(verify(&public, &signature, &message));
}

#[test]
fn wrong_public_key_is_rejected() {
    let (_, other) = derive(&counting_seed());

    assert!(!verify(&other, &ZERO_SEED_EMPTY_SIGNATURE, b""));
}

// -------------------------------------------------------
// 4. REJECTION REASONS
// -------------------------------------------------------

#[test]
fn wrong_length_is_reported() {
    let public = PublicKey::from_bytes(ZERO_SEED_PUBLIC_KEY).to_point().unwrap();

    assert_eq!(
        check_signature(&public, &ZERO_SEED_EMPTY_SIGNATURE[..63], b""),
        Err(EccError::InvalidSignatureLength(63))
    );
    assert!(!verify(&public, &[], b""));

    let mut long = ZERO_SEED_EMPTY_SIGNATURE.to_vec();
    long.push(0);
    assert!(!verify(&public, &long, b""));
}

#[test]
fn scalar_out_of_range_is_reported() {
    let public = PublicKey::from_bytes(ZERO_SEED_PUBLIC_KEY).to_point().unwrap();
    let c = curve();

    // s + ℓ satisfies the same equation but is not canonical.
    let s = U256::from(Signature::from_bytes(ZERO_SEED_EMPTY_SIGNATURE).s_bytes()).to_biguint();
    let mut forged = ZERO_SEED_EMPTY_SIGNATURE;
    forged[32..].copy_from_slice(&U256::from_biguint_wrapping(&(s + &c.l)).to_bytes());

    assert_eq!(
        check_signature(&public, &forged, b""),
        Err(EccError::SignatureScalarOutOfRange)
    );
}

#[test]
fn undecodable_commitment_is_reported() {
    let public = PublicKey::from_bytes(ZERO_SEED_PUBLIC_KEY).to_point().unwrap();

    let mut forged = ZERO_SEED_EMPTY_SIGNATURE;
    forged[..32].fill(0);
    forged[31] = 2;

    assert_eq!(
        check_signature(&public, &forged, b""),
        Err(EccError::InvalidPointEncoding)
    );
}

#[test]
fn mismatch_is_reported() {
    let public = PublicKey::from_bytes(ZERO_SEED_PUBLIC_KEY).to_point().unwrap();

    assert_eq!(
        check_signature(&public, &ZERO_SEED_EMPTY_SIGNATURE, b"not empty"),
        Err(EccError::SignatureMismatch)
    );
    assert_eq!(
        check_signature(&public, &ZERO_SEED_EMPTY_SIGNATURE, b""),
        Ok(())
    );
}

// -------------------------------------------------------
// 5. UNSUPPORTED RAW ECDSA
// -------------------------------------------------------

#[test]
fn raw_ecdsa_is_unsupported() {
    let raw = RawSignature {
        v: 27,
        r: U256::from([1u8; 32]),
        s: U256::from([2u8; 32]),
    };

    for seed in [[0u8; 32], counting_seed()] {
        assert!(matches!(
            raw_sign(&[0xab; 32], &seed),
            Err(EccError::OperationNotSupported(_))
        ));
    }
    assert!(matches!(
        raw_recover(&[0xab; 32], &raw),
        Err(EccError::OperationNotSupported(_))
    ));
}
