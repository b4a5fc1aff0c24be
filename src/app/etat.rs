//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur de calcul et servir de dispatcheur — une touche
//! reçue de la vue = un appel moteur. Aucun singleton : le moteur est
//! instancié ici explicitement et vit le temps de la session.
//!
//! Contrats :
//! - Aucune logique d’affichage ici (la vue relit `ecran()` après chaque touche).
//! - Une pression à la fois, sur le fil UI : pas de verrou nécessaire.

use crate::noyau::{Moteur, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    moteur: Moteur,
}

impl AppCalc {
    /// Dispatche une pression de bouton vers le moteur.
    pub fn appuyer(&mut self, touche: Touche) {
        self.moteur.recevoir(touche);
    }

    /// Numéral à afficher (tampon de saisie et sortie à la fois).
    pub fn ecran(&self) -> &str {
        self.moteur.ecran.as_str()
    }
}
