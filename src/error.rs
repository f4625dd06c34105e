use thiserror::Error;

/// Erreurs levées à la frontière, avant d'invoquer le moteur.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Invalid key token: {0:?} is not an integer")]
    InvalidKeyToken(String),

    #[error("Invalid mode: {0:?} (use e or d)")]
    UnknownMode(String),
}
