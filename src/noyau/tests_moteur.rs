//! Tests unitaires du moteur : chaque opération publique, plus les
//! invariants de saisie et les valeurs flottantes limites.
//!
//! Notes (aligné avec l’état actuel du noyau) :
//! - L’écran est un tampon de chaîne : on vérifie des chaînes, pas des f64,
//!   sauf pour `calculer` qui est purement numérique.
//! - Pas d’état d’erreur : division par zéro et NaN s’affichent tels quels.

use super::moteur::{calculer, Moteur};
use super::touche::Operateur;

/// Moteur neuf avec une suite de chiffres déjà saisie.
fn moteur_avec(chiffres: &str) -> Moteur {
    let mut m = Moteur::default();
    for c in chiffres.chars() {
        m.saisir_chiffre(c);
    }
    m
}

/* ------------------------ Saisie de chiffres ------------------------ */

#[test]
fn chiffres_concatenes() {
    let m = moteur_avec("53");
    assert_eq!(m.ecran, "53");
}

#[test]
fn zero_de_tete_remplace() {
    // le "0" initial ne devient jamais un zéro de tête
    let m = moteur_avec("7");
    assert_eq!(m.ecran, "7");

    let m = moteur_avec("0");
    assert_eq!(m.ecran, "0");

    let m = moteur_avec("007");
    assert_eq!(m.ecran, "7");
}

#[test]
fn chiffre_apres_operateur_remplace_l_ecran() {
    let mut m = moteur_avec("5");
    m.appliquer_operateur(Some(Operateur::Addition));
    m.saisir_chiffre('3');
    assert_eq!(m.ecran, "3");
    assert!(!m.attente_second);
}

#[test]
fn caractere_non_chiffre_ignore() {
    let mut m = moteur_avec("5");
    m.saisir_chiffre('x');
    m.saisir_chiffre('.');
    assert_eq!(m.ecran, "5");
}

/* ------------------------ Point décimal ------------------------ */

#[test]
fn point_idempotent() {
    let mut m = moteur_avec("1");
    m.saisir_point();
    m.saisir_point();
    assert_eq!(m.ecran, "1.");

    m.saisir_chiffre('5');
    m.saisir_point();
    assert_eq!(m.ecran, "1.5");
}

#[test]
fn point_apres_operateur_ouvre_zero_point() {
    let mut m = moteur_avec("2");
    m.appliquer_operateur(Some(Operateur::Multiplication));
    m.saisir_point();
    assert_eq!(m.ecran, "0.");
    assert!(!m.attente_second);
}

/* ------------------------ Opérateurs + égal ------------------------ */

#[test]
fn addition_simple() {
    let mut m = moteur_avec("5");
    m.appliquer_operateur(Some(Operateur::Addition));
    m.saisir_chiffre('3');
    m.appliquer_operateur(None); // égal
    assert_eq!(m.ecran, "8");
    assert_eq!(m.premier_operande, Some(8.0));
    assert_eq!(m.operateur, None);
}

#[test]
fn changement_d_operateur_sans_calcul() {
    // 5, +, - : le premier choix est abandonné au profit du dernier
    let mut m = moteur_avec("5");
    m.appliquer_operateur(Some(Operateur::Addition));
    m.appliquer_operateur(Some(Operateur::Soustraction));
    assert_eq!(m.ecran, "5"); // rien n’a été calculé
    assert_eq!(m.operateur, Some(Operateur::Soustraction));

    m.saisir_chiffre('3');
    m.appliquer_operateur(None);
    assert_eq!(m.ecran, "2");
}

#[test]
fn enchainement_evalue_de_gauche_a_droite() {
    // 5 + 3 + 2 = : le second "+" évalue déjà 5+3
    let mut m = moteur_avec("5");
    m.appliquer_operateur(Some(Operateur::Addition));
    m.saisir_chiffre('3');
    m.appliquer_operateur(Some(Operateur::Addition));
    assert_eq!(m.ecran, "8");
    assert_eq!(m.premier_operande, Some(8.0));

    m.saisir_chiffre('2');
    m.appliquer_operateur(None);
    assert_eq!(m.ecran, "10");
}

#[test]
fn egal_repete_est_un_passage_a_vide() {
    let mut m = moteur_avec("5");
    m.appliquer_operateur(Some(Operateur::Addition));
    m.saisir_chiffre('3');
    m.appliquer_operateur(None);
    let apres_premier_egal = m.clone();

    m.appliquer_operateur(None);
    assert_eq!(m.ecran, apres_premier_egal.ecran);
    assert_eq!(m.premier_operande, apres_premier_egal.premier_operande);
    assert_eq!(m.operateur, None);
}

#[test]
fn chiffre_apres_egal_repart_a_neuf() {
    let mut m = moteur_avec("5");
    m.appliquer_operateur(Some(Operateur::Addition));
    m.saisir_chiffre('3');
    m.appliquer_operateur(None);

    m.saisir_chiffre('9');
    assert_eq!(m.ecran, "9");
}

/* ------------------------ Arrondi + affichage ------------------------ */

#[test]
fn division_arrondie_a_sept_decimales() {
    let mut m = moteur_avec("1");
    m.appliquer_operateur(Some(Operateur::Division));
    m.saisir_chiffre('3');
    m.appliquer_operateur(None);
    assert_eq!(m.ecran, "0.3333333");
}

#[test]
fn resultat_entier_sans_zeros_de_fin() {
    let mut m = moteur_avec("7");
    m.appliquer_operateur(Some(Operateur::Multiplication));
    m.saisir_chiffre('8');
    m.appliquer_operateur(None);
    assert_eq!(m.ecran, "56");
}

#[test]
fn artefact_flottant_masque_par_l_arrondi() {
    // 0.1 + 0.2 vaut 0.30000000000000004 en f64 ; l’écran affiche "0.3"
    let mut m = Moteur::default();
    m.saisir_point();
    m.saisir_chiffre('1');
    m.appliquer_operateur(Some(Operateur::Addition));
    m.saisir_point();
    m.saisir_chiffre('2');
    m.appliquer_operateur(None);
    assert_eq!(m.ecran, "0.3");
}

/* ------------------------ Valeurs limites ------------------------ */

#[test]
fn division_par_zero_affiche_inf() {
    let mut m = moteur_avec("5");
    m.appliquer_operateur(Some(Operateur::Division));
    m.saisir_chiffre('0');
    m.appliquer_operateur(None);
    assert_eq!(m.ecran, "inf");
}

#[test]
fn zero_sur_zero_affiche_nan() {
    let mut m = moteur_avec("0");
    m.appliquer_operateur(Some(Operateur::Division));
    // l’écran reste "0" : saisir '0' remplace "0" par "0"
    m.saisir_chiffre('0');
    m.appliquer_operateur(None);
    assert_eq!(m.ecran, "NaN");
}

/* ------------------------ Effacer / signe / pourcentage ------------------------ */

#[test]
fn effacer_remet_a_neuf() {
    let mut m = moteur_avec("5");
    m.appliquer_operateur(Some(Operateur::Addition));
    m.saisir_chiffre('3');
    m.effacer();
    assert_eq!(m, Moteur::default());
    assert_eq!(m.ecran, "0");
}

#[test]
fn plus_moins_involutif() {
    let mut m = moteur_avec("42");
    m.plus_moins();
    assert_eq!(m.ecran, "-42");
    m.plus_moins();
    assert_eq!(m.ecran, "42");
}

#[test]
fn plus_moins_est_une_edition_de_chaine() {
    // pas de renormalisation : "0" devient "-0"
    let mut m = Moteur::default();
    m.plus_moins();
    assert_eq!(m.ecran, "-0");
    m.plus_moins();
    assert_eq!(m.ecran, "0");
}

#[test]
fn pourcentage_divise_par_cent() {
    let mut m = moteur_avec("50");
    m.pourcentage();
    assert_eq!(m.ecran, "0.5");

    let mut m = moteur_avec("7");
    m.pourcentage();
    assert_eq!(m.ecran, "0.07");
}

/* ------------------------ calculer (pur) ------------------------ */

#[test]
fn calculer_les_quatre_operations() {
    assert_eq!(calculer(5.0, 3.0, Operateur::Addition), 8.0);
    assert_eq!(calculer(5.0, 3.0, Operateur::Soustraction), 2.0);
    assert_eq!(calculer(7.0, 8.0, Operateur::Multiplication), 56.0);
    assert_eq!(calculer(9.0, 3.0, Operateur::Division), 3.0);
}

#[test]
fn calculer_division_par_zero() {
    assert_eq!(calculer(5.0, 0.0, Operateur::Division), f64::INFINITY);
    assert_eq!(calculer(-5.0, 0.0, Operateur::Division), f64::NEG_INFINITY);
    assert!(calculer(0.0, 0.0, Operateur::Division).is_nan());
}
