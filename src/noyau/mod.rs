//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - touches.rs : actions logiques + correspondance clavier
//! - moteur.rs  : état + transitions (saisie, chaînage d'opérateurs)
//! - format.rs  : correction des résultats + rendu écran + palier de taille
//!
//! Flux : touche brute -> Touche -> EtatCalc::appliquer -> format

pub mod format;
pub mod moteur;
pub mod touches;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use format::{formater_affichage, taille_pour, TailleAffichage};
pub use moteur::EtatCalc;
pub use touches::{depuis_clavier, Op, Touche};
