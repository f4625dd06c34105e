use rand::Rng;

use crate::error::CipherError;
use crate::traversal::ORDER;

/// Parse une séquence de clé "2,1,3" venant de la ligne de commande.
///
/// Les espaces autour des nombres sont ignorés, les éléments vides
/// aussi. Une chaîne sans aucun nombre vaut `None` (défaut mono en
/// aval). Un élément non entier est une erreur de format, le moteur
/// n'est jamais invoqué avec.
pub fn parse_key(raw: &str) -> Result<Option<Vec<i64>>, CipherError> {
    let mut key = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let n = token
            .parse::<i64>()
            .map_err(|_| CipherError::InvalidKeyToken(token.to_string()))?;
        key.push(n);
    }
    Ok(if key.is_empty() { None } else { Some(key) })
}

/// Génère une clé polyalphabétique aléatoire de `len` éléments,
/// chacun dans [1, 25).
pub fn random_key(len: usize) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| rng.random_range(1..ORDER.len() as i64))
        .collect()
}
