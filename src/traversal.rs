/// Ordre de parcours de la pyramide (chemin d'encodage vers la droite).
///
/// 25 lettres distinctes : chaque lettre a une position cyclique dans
/// [0, 25). La 26e lettre (`Z`) est en dehors de la pyramide.
pub const ORDER: &[u8] = b"QJEBADIPYRKFCHOXSLGNWTMVU";

/// La lettre hors de la pyramide : elle se code elle-même (Z -> Z).
pub const FIXED_LETTER: char = 'Z';

const POSITIONS: [i8; 26] = {
    let mut table: [i8; 26] = [-1; 26];
    let mut i = 0;
    while i < ORDER.len() {
        table[(ORDER[i] - b'A') as usize] = i as i8;
        i += 1;
    }
    table
};

/// Position d'une lettre majuscule dans l'ordre de parcours.
///
/// `None` pour la lettre fixe et pour tout caractère hors de la table.
pub fn position_of(letter: char) -> Option<usize> {
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let pos = POSITIONS[(letter as u8 - b'A') as usize];
    if pos < 0 {
        None
    } else {
        Some(pos as usize)
    }
}

/// Lettre à la position donnée, prise modulo la longueur de la table.
pub fn letter_at(position: usize) -> char {
    ORDER[position % ORDER.len()] as char
}
