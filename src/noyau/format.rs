// src/noyau/format.rs

/// Met en forme un résultat pour l'affichage : conversion décimale standard,
/// puis suppression d'un éventuel suffixe ".0" (un résultat entier s'affiche
/// sans partie décimale). Tout le reste garde la conversion par défaut du
/// runtime, sans arrondi ajouté.
pub fn formate_nombre(valeur: f64) -> String {
    let texte = format!("{valeur}");
    match texte.strip_suffix(".0") {
        Some(sans) => sans.to_string(),
        None => texte,
    }
}

#[cfg(test)]
mod tests {
    use super::formate_nombre;

    #[test]
    fn entier_sans_suffixe_decimal() {
        assert_eq!(formate_nombre(2.0), "2");
        assert_eq!(formate_nombre(-3.0), "-3");
        assert_eq!(formate_nombre(0.0), "0");
    }

    #[test]
    fn decimales_conservees() {
        assert_eq!(formate_nombre(0.25), "0.25");
        assert_eq!(formate_nombre(-1.5), "-1.5");
    }

    #[test]
    fn bruit_flottant_laisse_tel_quel() {
        // la conversion par défaut du runtime fait foi
        assert_eq!(formate_nombre(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(formate_nombre(0.1 + 0.2), "0.30000000000000004");
    }
}
