//! src/app/etat.rs
//!
//! État UI (sans vue) : la machine du noyau + le routage des touches.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par noyau::Moteur.
//! - Un clic = un événement `Touche` = une transition du moteur.
//! - L'échec d'évaluation est avalé : l'affichage reste tel quel.

use crate::noyau::{Moteur, Operateur};

/// Une touche du pavé (1 bouton = 1 variante).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    InverseSigne,
    RetourArriere,
    EffaceSaisie,
    EffaceTout,
    Operation(Operateur),
    Egal,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    moteur: Moteur,
}

impl AppCalc {
    /// Texte de l'opérande en cours (zone principale).
    pub fn texte_saisie(&self) -> &str {
        self.moteur.texte_saisie()
    }

    /// Texte de l'opération en attente (zone discrète au-dessus).
    pub fn texte_attente(&self) -> String {
        self.moteur.texte_attente()
    }

    /// Remise à zéro complète, comme le bouton "C". Exposée pour le
    /// raccourci global (Échap) géré dans app.rs.
    pub fn efface_tout(&mut self) {
        self.moteur.efface_tout();
    }

    /// Route une touche vers le moteur.
    pub fn appuie(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.moteur.chiffre(c),
            Touche::Point => self.moteur.point(),
            Touche::InverseSigne => self.moteur.inverse_signe(),
            Touche::RetourArriere => self.moteur.retour_arriere(),
            Touche::EffaceSaisie => self.moteur.efface_saisie(),
            Touche::EffaceTout => self.moteur.efface_tout(),
            Touche::Operation(op) => self.moteur.operateur(op),
            Touche::Egal => {
                // contrat "échec silencieux" : l'état n'a pas bougé
                let _ = self.moteur.egal();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCalc, Touche};
    use crate::noyau::Operateur;

    #[test]
    fn routage_complet_d_un_calcul() {
        let mut app = AppCalc::default();
        for touche in [
            Touche::Chiffre('2'),
            Touche::Operation(Operateur::Addition),
            Touche::Chiffre('3'),
            Touche::Egal,
        ] {
            app.appuie(touche);
        }
        assert_eq!(app.texte_saisie(), "5");
        assert_eq!(app.texte_attente(), "2 + 3 =");
    }

    #[test]
    fn egal_sur_division_par_zero_avale() {
        let mut app = AppCalc::default();
        for touche in [
            Touche::Chiffre('5'),
            Touche::Operation(Operateur::Division),
            Touche::Egal,
        ] {
            app.appuie(touche);
        }
        assert_eq!(app.texte_saisie(), "0");
        assert_eq!(app.texte_attente(), "5 ÷ ");
    }
}
