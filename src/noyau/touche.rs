// src/noyau/touche.rs
//
// Événements d’entrée typés.
//
// Contrat : la vue (ou n’importe quel dispatcheur) traduit un clic de bouton
// en une `Touche`, et le moteur la consomme par match exhaustif — une touche
// inconnue est donc impossible une fois typée. Le seul point d’entrée
// “texte” est l’impl FromStr, qui rejette les clés non reconnues
// (CleInconnue, à ignorer côté dispatcheur).

use std::str::FromStr;

/// Les quatre opérations binaires de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

/// Une pression de bouton, sous forme typée.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Un chiffre '0'..='9'.
    Chiffre(char),
    /// Le point décimal.
    Point,
    /// Choix d’un opérateur binaire.
    Operation(Operateur),
    /// Égal : force l’évaluation de l’opération en attente.
    Egal,
    /// Remise à zéro totale.
    Effacer,
    /// Bascule du signe (±).
    PlusMoins,
    /// Division par 100 (%).
    Pourcentage,
}

/// Identifiant de touche externe non reconnu. Contrat du dispatcheur :
/// une clé inconnue est ignorée, jamais une erreur visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CleInconnue;

impl FromStr for Touche {
    type Err = CleInconnue;

    /// Mappe un identifiant de touche externe vers un événement typé.
    ///
    /// Identifiants reconnus : "0".."9", "decimal", "add", "subtract",
    /// "multiply", "divide", "equals", "clear", "plusMinus", "percentage".
    fn from_str(cle: &str) -> Result<Self, CleInconnue> {
        match cle {
            "decimal" => Ok(Self::Point),
            "add" => Ok(Self::Operation(Operateur::Addition)),
            "subtract" => Ok(Self::Operation(Operateur::Soustraction)),
            "multiply" => Ok(Self::Operation(Operateur::Multiplication)),
            "divide" => Ok(Self::Operation(Operateur::Division)),
            "equals" => Ok(Self::Egal),
            "clear" => Ok(Self::Effacer),
            "plusMinus" => Ok(Self::PlusMoins),
            "percentage" => Ok(Self::Pourcentage),
            _ => {
                // Chiffre : exactement un caractère '0'..='9'.
                let mut it = cle.chars();
                match (it.next(), it.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Ok(Self::Chiffre(c)),
                    _ => Err(CleInconnue),
                }
            }
        }
    }
}
