// src/noyau/operation.rs

use std::fmt;

/// Les quatre opérations binaires du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    /// Symbole affiché dans la zone d'attente (et sur le bouton du pavé).
    pub fn symbole(self) -> char {
        match self {
            Operateur::Addition => '+',
            Operateur::Soustraction => '−',
            Operateur::Multiplication => '×',
            Operateur::Division => '÷',
        }
    }

    /// Applique l'opération aux deux opérandes.
    ///
    /// La division par zéro et tout résultat non fini sont des échecs :
    /// l'appelant laisse alors son état tel quel.
    pub fn applique(self, gauche: f64, droite: f64) -> Result<f64, ErreurCalcul> {
        if self == Operateur::Division && droite == 0.0 {
            return Err(ErreurCalcul::DivisionParZero);
        }

        let resultat = match self {
            Operateur::Addition => gauche + droite,
            Operateur::Soustraction => gauche - droite,
            Operateur::Multiplication => gauche * droite,
            Operateur::Division => gauche / droite,
        };

        if !resultat.is_finite() {
            return Err(ErreurCalcul::ResultatNonFini);
        }
        Ok(resultat)
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// Échec d'évaluation. Contrat côté UI : avalé, sans toucher à l'affichage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurCalcul {
    DivisionParZero,
    ResultatNonFini,
}

impl fmt::Display for ErreurCalcul {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurCalcul::DivisionParZero => write!(f, "division par zéro"),
            ErreurCalcul::ResultatNonFini => write!(f, "résultat non fini"),
        }
    }
}

impl std::error::Error for ErreurCalcul {}

#[cfg(test)]
mod tests {
    use super::{ErreurCalcul, Operateur};

    #[test]
    fn applique_les_quatre_operations() {
        assert_eq!(Operateur::Addition.applique(2.0, 3.0), Ok(5.0));
        assert_eq!(Operateur::Soustraction.applique(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operateur::Multiplication.applique(2.0, 3.0), Ok(6.0));
        assert_eq!(Operateur::Division.applique(1.0, 4.0), Ok(0.25));
    }

    #[test]
    fn division_par_zero_echoue() {
        assert_eq!(
            Operateur::Division.applique(5.0, 0.0),
            Err(ErreurCalcul::DivisionParZero)
        );
        // -0.0 compte aussi comme zéro
        assert_eq!(
            Operateur::Division.applique(0.0, -0.0),
            Err(ErreurCalcul::DivisionParZero)
        );
    }

    #[test]
    fn debordement_echoue() {
        assert_eq!(
            Operateur::Multiplication.applique(f64::MAX, f64::MAX),
            Err(ErreurCalcul::ResultatNonFini)
        );
    }

    #[test]
    fn symboles_affiches() {
        assert_eq!(Operateur::Addition.symbole(), '+');
        assert_eq!(Operateur::Soustraction.symbole(), '−');
        assert_eq!(Operateur::Multiplication.symbole(), '×');
        assert_eq!(Operateur::Division.symbole(), '÷');
    }
}
