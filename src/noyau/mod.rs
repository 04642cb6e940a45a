//! Noyau calculatrice quatre opérations
//!
//! Organisation interne :
//! - ecran.rs        : surface d'affichage injectée (trait + mémoire)
//! - jetons.rs       : validation + découpe du tampon
//! - eval.rs         : réduction en deux passes (* / puis + -)
//! - verrou.rs       : verrou temporisé (Libre -> Bloque -> Libre)
//! - calculatrice.rs : mutateurs + calcul + tic

pub mod calculatrice;
pub mod ecran;
pub mod eval;
pub mod jetons;
pub mod verrou;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calculatrice::Calculatrice;
pub use ecran::{Ecran, EcranMemoire};
