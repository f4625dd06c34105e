pub mod cipher;
pub mod error;
pub mod key;
pub mod traversal;

pub use cipher::{decode, encode, Mode};
pub use error::CipherError;

// -----------------------------------------------------------------------------
// TEST
// -----------------------------------------------------------------------------
#[test]
fn test_pyramid_round_trip() {
    let msg = "Attack at Dawn! 07:00";
    let key = vec![2, 1, 3];

    let coded = encode(msg, Some(&key));
    assert_ne!(coded, msg);
    assert_eq!(coded.len(), msg.len());

    assert_eq!(decode(&coded, Some(&key)), msg);
}
