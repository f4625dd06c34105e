use crate::traversal::{self, FIXED_LETTER, ORDER};

/// Sens de la transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

/// Réduit la clé brute modulo la longueur de la table.
///
/// Clé absente ou vide = défaut monoalphabétique `[1]` (un pas par
/// lettre). `rem_euclid` garantit un résultat positif, donc les clés
/// négatives se comportent comme la rotation positive équivalente.
fn normalize_key(key: Option<&[i64]>) -> Vec<i64> {
    let len = ORDER.len() as i64;
    match key {
        Some(k) if !k.is_empty() => k.iter().map(|n| n.rem_euclid(len)).collect(),
        _ => vec![1],
    }
}

fn shift_char(ch: char, steps: i64, mode: Mode) -> char {
    // Les non-lettres passent tels quels
    if !ch.is_alphabetic() {
        return ch;
    }
    let upper = ch.to_ascii_uppercase();
    if upper == FIXED_LETTER {
        return ch;
    }
    // Lettre hors de la table (alphabet étendu ?) : on laisse passer
    let Some(idx) = traversal::position_of(upper) else {
        return ch;
    };
    let len = ORDER.len() as i64;
    let delta = match mode {
        Mode::Encode => steps.rem_euclid(len),
        Mode::Decode => -steps.rem_euclid(len),
    };
    let out = traversal::letter_at((idx as i64 + delta).rem_euclid(len) as usize);
    if ch.is_ascii_uppercase() {
        out
    } else {
        out.to_ascii_lowercase()
    }
}

fn transform(text: &str, key: Option<&[i64]>, mode: Mode) -> String {
    let k = normalize_key(key);
    let mut out = String::with_capacity(text.len());
    let mut ki = 0;
    for ch in text.chars() {
        out.push(shift_char(ch, k[ki], mode));
        // Le curseur de clé n'avance que sur les lettres
        if ch.is_alphabetic() {
            ki = (ki + 1) % k.len();
        }
    }
    out
}

/// Encode un message : chaque lettre avance le long de l'ordre de
/// parcours du nombre de pas donné par la clé (cyclique).
pub fn encode(text: &str, key: Option<&[i64]>) -> String {
    transform(text, key, Mode::Encode)
}

/// Décode un message : inverse exact de `encode` pour la même clé.
pub fn decode(text: &str, key: Option<&[i64]>) -> String {
    transform(text, key, Mode::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_encode_mono() {
        // Chaque lettre avance d'un pas le long de l'ordre
        assert_eq!(encode("HELLO", Some(&[1])), "OBGGX");
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let msg = "Hello, World! 123";
        let coded = encode(msg, Some(&[1]));
        assert_eq!(coded.len(), msg.len());
        assert_eq!(decode(&coded, Some(&[1])), msg);
    }

    #[test]
    fn test_fixed_letter_is_unchanged() {
        assert_eq!(encode("zebra", Some(&[1])), "zbakd");
        assert_eq!(encode("ZZzz", Some(&[7])), "ZZzz");
        assert_eq!(decode("ZZzz", Some(&[7])), "ZZzz");
    }

    #[test]
    fn test_polyalphabetic_key_cycles() {
        // Pas de 1, 2, 3 sur A, B, C
        assert_eq!(encode("ABC", Some(&[1, 2, 3])), "DDX");
        assert_eq!(decode("DDX", Some(&[1, 2, 3])), "ABC");
        // La clé reboucle sur la 4e lettre
        let coded = encode("ABCA", Some(&[1, 2, 3]));
        assert_eq!(&coded[..1], &encode("A", Some(&[1]))[..]);
        assert_eq!(&coded[3..], &encode("A", Some(&[1]))[..]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(encode("", Some(&[1])), "");
        assert_eq!(decode("", None), "");
    }

    #[test]
    fn test_default_key_is_one_step() {
        let msg = "Attack at dawn";
        assert_eq!(encode(msg, None), encode(msg, Some(&[1])));
        assert_eq!(encode(msg, Some(&[])), encode(msg, Some(&[1])));
    }

    #[test]
    fn test_key_modulo_normalization() {
        let msg = "Rendezvous at the pyramid";
        assert_eq!(encode(msg, Some(&[26])), encode(msg, Some(&[1])));
        assert_eq!(encode(msg, Some(&[-1])), decode(msg, Some(&[1])));
        assert_eq!(encode(msg, Some(&[100])), encode(msg, Some(&[100 % 25])));
    }

    #[test]
    fn test_zero_key_is_identity() {
        let msg = "Nothing moves, 0 steps!";
        assert_eq!(encode(msg, Some(&[0])), msg);
        assert_eq!(encode(msg, Some(&[0, 25, -25])), msg);
    }

    #[test]
    fn test_case_preserved() {
        let coded = encode("AbCdE", Some(&[3]));
        for (i, ch) in coded.chars().enumerate() {
            if i % 2 == 0 {
                assert!(ch.is_ascii_uppercase());
            } else {
                assert!(ch.is_ascii_lowercase());
            }
        }
    }

    #[test]
    fn test_non_letters_pass_through_in_place() {
        let coded = encode("a1b2-c3!", Some(&[4]));
        assert_eq!(coded.len(), 8);
        for i in [1, 3, 4, 6, 7] {
            assert_eq!(coded.as_bytes()[i], b"a1b2-c3!"[i]);
        }
    }

    #[test]
    fn test_key_cursor_skips_non_letters() {
        // Les non-lettres intercalées ne décalent pas l'alignement de la clé
        let key = [2, 5, 11];
        let plain = encode("ABCDEF", Some(&key));
        let spaced = encode("A B-C, D1E F!", Some(&key));
        let letters: String = spaced.chars().filter(|c| c.is_alphabetic()).collect();
        assert_eq!(letters, plain);
    }

    #[test]
    fn test_random_keys_round_trip() {
        let mut rng = rand::rng();
        let msg = "The quick brown fox jumps over the lazy dog, 42 times!";
        for _ in 0..50 {
            let len = rng.random_range(1..8);
            let key: Vec<i64> = (0..len).map(|_| rng.random_range(-100..100)).collect();
            let coded = encode(msg, Some(&key));
            assert_eq!(coded.len(), msg.len());
            assert_eq!(decode(&coded, Some(&key)), msg);
        }
    }
}
