//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - touche.rs  : événements d’entrée typés (Touche, Operateur)
//! - moteur.rs  : machine à états (écran, opérande, opérateur en attente)
//! - format.rs  : affichage du résultat (arrondi 7 décimales, zéros retirés)

pub mod format;
pub mod moteur;
pub mod touche;

#[cfg(test)]
mod tests_moteur;


// API publique minimale
pub use moteur::{calculer, Moteur};
pub use touche::{Operateur, Touche};
