// src/noyau/format.rs

/// Formate un résultat d’opération pour l’écran.
///
/// Arrondi à 7 décimales, puis re-parse pour retirer les zéros de fin
/// (et le ".0" des entiers) : 56.0000000 -> "56", 1/3 -> "0.3333333".
///
/// Les valeurs non finies (division par zéro, indéterminé) sont rendues
/// telles quelles : "inf", "-inf", "NaN". Pas d’état d’erreur dédié.
pub fn formater_resultat(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }

    let arrondi = format!("{x:.7}");
    // Le re-parse d’un "{:.7}" fini ne peut pas échouer ; on retombe sur x
    // plutôt que de paniquer si jamais il échouait.
    let valeur: f64 = arrondi.parse().unwrap_or(x);
    valeur.to_string()
}
