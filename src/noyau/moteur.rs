// src/noyau/moteur.rs

use super::attente::Attente;
use super::format::formate_nombre;
use super::lecture::lit_nombre;
use super::operation::{ErreurCalcul, Operateur};
use super::saisie::Saisie;

/// Machine d'accumulation d'expression : une saisie, une opération en
/// attente.
///
/// Chaque méthode correspond à une touche du pavé et se termine avant la
/// suivante. Les deux sorties observables sont `texte_saisie` (opérande en
/// cours) et `texte_attente` (opération engagée, ou trace "a op b =" après
/// évaluation).
#[derive(Clone, Debug, Default)]
pub struct Moteur {
    saisie: Saisie,
    attente: Attente,
}

impl Moteur {
    pub fn nouveau() -> Self {
        Self::default()
    }

    /// Borne d'affichage non standard (16 par défaut).
    pub fn avec_longueur_max(longueur_max: usize) -> Self {
        Self {
            saisie: Saisie::avec_longueur_max(longueur_max),
            attente: Attente::Vide,
        }
    }

    /* ------------------------ Sorties observables ------------------------ */

    pub fn texte_saisie(&self) -> &str {
        self.saisie.texte()
    }

    pub fn texte_attente(&self) -> String {
        self.attente.texte()
    }

    /* ------------------------ Édition de la saisie ------------------------ */

    /// Une trace "… =" encore affichée est effacée dès que l'on recommence à
    /// éditer : la frappe ouvre un nouveau calcul.
    fn efface_trace_evaluee(&mut self) {
        if self.attente.est_evaluee() {
            self.attente = Attente::Vide;
        }
    }

    pub fn chiffre(&mut self, c: char) {
        self.efface_trace_evaluee();
        self.saisie.chiffre(c);
    }

    pub fn point(&mut self) {
        self.efface_trace_evaluee();
        self.saisie.point();
    }

    pub fn inverse_signe(&mut self) {
        self.efface_trace_evaluee();
        self.saisie.inverse_signe();
    }

    pub fn retour_arriere(&mut self) {
        self.efface_trace_evaluee();
        self.saisie.retour_arriere();
    }

    /// CE : la saisie seulement, l'attente reste.
    pub fn efface_saisie(&mut self) {
        self.efface_trace_evaluee();
        self.saisie.raz();
    }

    /// C : remise à zéro complète.
    pub fn efface_tout(&mut self) {
        self.saisie.raz();
        self.attente = Attente::Vide;
    }

    /* ------------------------ Opérateurs et évaluation ------------------------ */

    pub fn operateur(&mut self, op: Operateur) {
        match self.attente {
            // Premier opérateur, ou reprise après une trace "=" : la saisie
            // devient l'opérande gauche.
            Attente::Vide | Attente::Evaluee { .. } => self.engage(op),

            // L'opérateur change avant l'opérande droit : on remplace juste
            // le symbole, la saisie ne bouge pas.
            Attente::Engagee { gauche, op: courant } if courant != op => {
                self.attente = Attente::Engagee { gauche, op };
            }

            // Même opérateur : évaluation immédiate, puis on enchaîne avec
            // le résultat comme opérande gauche. En cas d'échec, rien ne
            // bouge.
            Attente::Engagee { gauche, .. } => {
                let droite = lit_nombre(self.saisie.texte());
                if let Ok(resultat) = op.applique(gauche, droite) {
                    self.attente = Attente::Engagee {
                        gauche: resultat,
                        op,
                    };
                    self.saisie.raz();
                }
            }
        }
    }

    fn engage(&mut self, op: Operateur) {
        let gauche = lit_nombre(self.saisie.texte());
        self.attente = Attente::Engagee { gauche, op };
        self.saisie.raz();
    }

    /// "=" : évalue l'opération engagée avec la saisie comme opérande droit.
    ///
    /// Sans opération engagée (attente vide ou trace déjà affichée), ne fait
    /// rien. En cas d'échec (division par zéro, résultat non fini), l'état
    /// reste tel quel et l'erreur remonte à l'appelant, libre de l'ignorer.
    pub fn egal(&mut self) -> Result<Option<String>, ErreurCalcul> {
        let (gauche, op) = match self.attente {
            Attente::Engagee { gauche, op } => (gauche, op),
            _ => return Ok(None),
        };

        let droite = lit_nombre(self.saisie.texte());
        let resultat = op.applique(gauche, droite)?;
        let texte = formate_nombre(resultat);

        self.attente = Attente::Evaluee { gauche, op, droite };
        self.saisie.remplace(&texte);
        Ok(Some(texte))
    }
}

#[cfg(test)]
mod tests {
    use super::{ErreurCalcul, Moteur, Operateur};

    #[test]
    fn engage_puis_evalue() {
        let mut m = Moteur::nouveau();
        m.chiffre('2');
        m.operateur(Operateur::Addition);
        assert_eq!(m.texte_saisie(), "0");
        assert_eq!(m.texte_attente(), "2 + ");

        m.chiffre('3');
        assert_eq!(m.egal(), Ok(Some("5".to_string())));
        assert_eq!(m.texte_saisie(), "5");
        assert_eq!(m.texte_attente(), "2 + 3 =");
    }

    #[test]
    fn egal_sans_attente_ne_fait_rien() {
        let mut m = Moteur::nouveau();
        m.chiffre('5');
        assert_eq!(m.egal(), Ok(None));
        assert_eq!(m.texte_saisie(), "5");
        assert_eq!(m.texte_attente(), "");
    }

    #[test]
    fn egal_sur_trace_ne_fait_rien() {
        let mut m = Moteur::nouveau();
        m.chiffre('2');
        m.operateur(Operateur::Addition);
        m.chiffre('3');
        let _ = m.egal();
        assert_eq!(m.egal(), Ok(None));
        assert_eq!(m.texte_saisie(), "5");
        assert_eq!(m.texte_attente(), "2 + 3 =");
    }

    #[test]
    fn echec_laisse_tout_en_place() {
        let mut m = Moteur::nouveau();
        m.chiffre('5');
        m.operateur(Operateur::Division);
        assert_eq!(m.egal(), Err(ErreurCalcul::DivisionParZero));
        assert_eq!(m.texte_saisie(), "0");
        assert_eq!(m.texte_attente(), "5 ÷ ");
    }

    #[test]
    fn operande_gauche_engage_sans_zeros_trainants() {
        let mut m = Moteur::nouveau();
        m.chiffre('5');
        m.point();
        m.operateur(Operateur::Multiplication);
        assert_eq!(m.texte_attente(), "5 × ");
    }

    #[test]
    fn borne_configurable() {
        let mut m = Moteur::avec_longueur_max(4);
        for c in "123456".chars() {
            m.chiffre(c);
        }
        assert_eq!(m.texte_saisie(), "1234");
    }
}
