//! src/noyau/moteur.rs
//!
//! Moteur de la calculatrice (machine à états, sans vue).
//!
//! Rôle : tenir l’écran (chaîne affichée), l’opérande gauche et l’opérateur
//! en attente, et appliquer les touches une par une.
//!
//! Contrats :
//! - Aucune logique d’affichage ici (la vue relit `ecran` après chaque touche).
//! - Opérations déterministes, totales, sans effet de bord caché.
//! - `ecran` contient un numéral décimal valide (un seul '.', signe '-'
//!   optionnel en tête) tant qu’on reste sur le chemin nominal ; les valeurs
//!   flottantes limites (inf, NaN) y transitent telles quelles, sans état
//!   d’erreur dédié.

use super::format::formater_resultat;
use super::touche::{Operateur, Touche};

/// État du moteur. Cycle en deux temps :
/// saisie du premier opérande → opérateur choisi (attente du second)
/// → saisie du second → évaluation au prochain opérateur ou "=".
#[derive(Clone, Debug, PartialEq)]
pub struct Moteur {
    /// Numéral affiché ; sert à la fois de tampon de saisie et de sortie.
    pub ecran: String,

    /// Opérande gauche de l’opération en attente ; None tant qu’aucun
    /// opérateur n’a été choisi (ou après `effacer`).
    pub premier_operande: Option<f64>,

    /// Opération choisie, en attente du second opérande.
    pub operateur: Option<Operateur>,

    /// true juste après le choix d’un opérateur : la prochaine saisie de
    /// chiffre REMPLACE l’écran au lieu d’y être ajoutée.
    pub attente_second: bool,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            ecran: "0".to_string(),
            premier_operande: None,
            operateur: None,
            attente_second: false,
        }
    }
}

impl Moteur {
    /* ------------------------ Dispatch ------------------------ */

    /// Applique une touche. Match exhaustif : une touche non gérée
    /// est une erreur de compilation, pas un cas silencieux.
    pub fn recevoir(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.saisir_chiffre(c),
            Touche::Point => self.saisir_point(),
            Touche::Operation(op) => self.appliquer_operateur(Some(op)),
            Touche::Egal => self.appliquer_operateur(None),
            Touche::Effacer => self.effacer(),
            Touche::PlusMoins => self.plus_moins(),
            Touche::Pourcentage => self.pourcentage(),
        }
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un chiffre à l’écran.
    ///
    /// - en attente du second opérande : remplace l’écran et lève l’attente ;
    /// - écran à "0" : remplace (pas de zéro de tête) ;
    /// - sinon : ajoute en fin.
    pub fn saisir_chiffre(&mut self, chiffre: char) {
        // Garde-fou : tout sauf '0'..='9' est ignoré (inatteignable via Touche).
        if !chiffre.is_ascii_digit() {
            return;
        }

        if self.attente_second {
            self.ecran.clear();
            self.ecran.push(chiffre);
            self.attente_second = false;
        } else if self.ecran == "0" {
            self.ecran.clear();
            self.ecran.push(chiffre);
        } else {
            self.ecran.push(chiffre);
        }
    }

    /// Ajoute le point décimal (idempotent : jamais deux '.' à l’écran).
    pub fn saisir_point(&mut self) {
        if self.attente_second {
            self.ecran = "0.".to_string();
            self.attente_second = false;
            return;
        }

        if !self.ecran.contains('.') {
            self.ecran.push('.');
        }
    }

    /* ------------------------ Opérations ------------------------ */

    /// Choix d’un opérateur (`Some`) ou égal (`None`).
    ///
    /// - opérateur déjà en attente ET second opérande pas encore saisi :
    ///   on remplace simplement l’opérateur (changement d’avis, sans calcul) ;
    /// - pas encore de premier opérande : l’écran devient le premier opérande ;
    /// - premier opérande + opérateur + second opérande saisi : on évalue,
    ///   l’écran affiche le résultat (arrondi 7 décimales, zéros de fin
    ///   retirés) et le résultat devient le premier opérande du tour suivant.
    ///
    /// Après égal (`None`), plus d’opérateur en attente : un égal de plus
    /// est un passage à vide, et une saisie de chiffre repart à neuf.
    pub fn appliquer_operateur(&mut self, suivant: Option<Operateur>) {
        // Un écran malformé (ne devrait pas arriver) donne NaN, propagé
        // silencieusement dans l’arithmétique — pas de panique.
        let saisie: f64 = self.ecran.parse().unwrap_or(f64::NAN);

        if self.operateur.is_some() && self.attente_second {
            self.operateur = suivant;
            return;
        }

        match (self.premier_operande, self.operateur) {
            (None, _) if !saisie.is_nan() => {
                self.premier_operande = Some(saisie);
            }
            (Some(premier), Some(op)) => {
                let resultat = calculer(premier, saisie, op);
                self.ecran = formater_resultat(resultat);
                self.premier_operande = Some(resultat);
            }
            _ => {}
        }

        self.attente_second = true;
        self.operateur = suivant;
    }

    /// Remise à zéro totale : état identique à un moteur neuf.
    pub fn effacer(&mut self) {
        *self = Self::default();
    }

    /// Bascule le signe de l’écran. Édition de chaîne pure : on préfixe ou
    /// retire un '-' de tête, sans re-parse ni renormalisation ("0" -> "-0").
    pub fn plus_moins(&mut self) {
        if let Some(reste) = self.ecran.strip_prefix('-') {
            self.ecran = reste.to_string();
        } else {
            self.ecran.insert(0, '-');
        }
    }

    /// Divise l’écran par 100. Pas d’arrondi supplémentaire : d’éventuels
    /// artefacts de représentation flottante restent visibles.
    pub fn pourcentage(&mut self) {
        let valeur: f64 = self.ecran.parse().unwrap_or(f64::NAN);
        self.ecran = (valeur / 100.0).to_string();
    }
}

/// Applique une opération binaire. La division par zéro suit la sémantique
/// flottante standard (±inf, NaN).
pub fn calculer(a: f64, b: f64, op: Operateur) -> f64 {
    match op {
        Operateur::Addition => a + b,
        Operateur::Soustraction => a - b,
        Operateur::Multiplication => a * b,
        Operateur::Division => a / b,
    }
}
