//! Parcours complets au pavé : chaque séquence est rejouée touche par touche
//! et les deux zones d'affichage sont vérifiées à l'arrivée.
//!
//! Notation compacte des séquences :
//! - chiffres et '.' : tels quels
//! - '+', '-', 'x', '/' : les quatre opérateurs
//! - '=' : égal ; '~' : inverse le signe ; '<' : retour arrière
//! - 'C' : efface tout ; 'E' : efface la saisie seulement

use super::moteur::Moteur;
use super::operation::Operateur;

fn pianote(moteur: &mut Moteur, touches: &str) {
    for t in touches.chars() {
        match t {
            '0'..='9' => moteur.chiffre(t),
            '.' => moteur.point(),
            '+' => moteur.operateur(Operateur::Addition),
            '-' => moteur.operateur(Operateur::Soustraction),
            'x' => moteur.operateur(Operateur::Multiplication),
            '/' => moteur.operateur(Operateur::Division),
            '=' => {
                let _ = moteur.egal();
            }
            '~' => moteur.inverse_signe(),
            '<' => moteur.retour_arriere(),
            'C' => moteur.efface_tout(),
            'E' => moteur.efface_saisie(),
            autre => panic!("touche inconnue dans le scénario : {autre:?}"),
        }
    }
}

fn apres(touches: &str) -> Moteur {
    let mut m = Moteur::nouveau();
    pianote(&mut m, touches);
    m
}

fn assert_ecrans(touches: &str, saisie: &str, attente: &str) {
    let m = apres(touches);
    assert_eq!(m.texte_saisie(), saisie, "saisie après {touches:?}");
    assert_eq!(m.texte_attente(), attente, "attente après {touches:?}");
}

/* ------------------------ Frappe de l'opérande ------------------------ */

#[test]
fn parcours_zero_de_tete_absorbe() {
    assert_ecrans("05", "5", "");
    assert_ecrans("007", "7", "");
}

#[test]
fn parcours_point_idempotent() {
    assert_ecrans("1.2.3", "1.23", "");
    assert_ecrans("..", "0.", "");
}

#[test]
fn parcours_signe_involution() {
    assert_ecrans("12~", "-12", "");
    assert_ecrans("12~~", "12", "");
    assert_ecrans("0~", "0", "");
}

#[test]
fn parcours_retour_arriere() {
    assert_ecrans("123<", "12", "");
    assert_ecrans("5<", "0", "");
    assert_ecrans("1~<", "0", "");
    assert_ecrans("<", "0", "");
}

#[test]
fn parcours_borne_de_longueur() {
    let m = apres("12345678901234567890");
    assert_eq!(m.texte_saisie(), "1234567890123456");

    let m = apres("1234567890123456~7");
    assert_eq!(m.texte_saisie(), "-1234567890123456");
    assert_eq!(m.texte_saisie().len(), 17);
}

/* ------------------------ Opérateurs et égal ------------------------ */

#[test]
fn parcours_evaluation_simple() {
    assert_ecrans("2+3=", "5", "2 + 3 =");
}

#[test]
fn parcours_remplacement_d_operateur() {
    // + puis × avant tout opérande droit : seul le symbole change
    assert_ecrans("2+x", "0", "2 × ");
    assert_ecrans("2+x3=", "6", "2 × 3 =");
}

#[test]
fn parcours_remplacement_apres_frappe_du_droit() {
    // l'opérande droit déjà tapé reste en saisie, l'opérateur change
    assert_ecrans("2+3x", "3", "2 × ");
    assert_ecrans("2+3x=", "6", "2 × 3 =");
}

#[test]
fn parcours_chaine_meme_operateur() {
    // évaluation de gauche à droite : 2+3=5 puis 5+4=9
    assert_ecrans("2+3+", "0", "5 + ");
    assert_ecrans("2+3+4=", "9", "5 + 4 =");
}

#[test]
fn parcours_chaine_division() {
    assert_ecrans("8/2/", "0", "4 ÷ ");
    assert_ecrans("8/2/2=", "2", "4 ÷ 2 =");
}

#[test]
fn parcours_egal_sans_operation() {
    assert_ecrans("5=", "5", "");
    assert_ecrans("2+3==", "5", "2 + 3 =");
}

/* ------------------------ Après la trace "=" ------------------------ */

#[test]
fn parcours_frappe_apres_egal_efface_la_trace() {
    // la trace part, la saisie (le résultat) reste éditable
    assert_ecrans("2+3=7", "57", "");
    assert_ecrans("2+3=.", "5.", "");
    assert_ecrans("2+3=~", "-5", "");
    assert_ecrans("2+3=<", "0", "");
}

#[test]
fn parcours_operateur_apres_egal_reprend_le_resultat() {
    assert_ecrans("2+3=x", "0", "5 × ");
    assert_ecrans("2+3=x4=", "20", "5 × 4 =");
}

/* ------------------------ Échecs d'évaluation ------------------------ */

#[test]
fn parcours_division_par_zero_sans_effet() {
    // l'écran est identique avant et après le "="
    assert_ecrans("5/0", "0", "5 ÷ ");
    assert_ecrans("5/0=", "0", "5 ÷ ");
}

#[test]
fn parcours_division_par_zero_en_chaine_sans_effet() {
    assert_ecrans("8/2/=", "0", "4 ÷ ");
    assert_ecrans("8/2//", "0", "4 ÷ ");
}

/* ------------------------ Mise en forme ------------------------ */

#[test]
fn parcours_zeros_traines_supprimes() {
    assert_ecrans("1/4=", "0.25", "1 ÷ 4 =");
    assert_ecrans("4/2=", "2", "4 ÷ 2 =");
}

#[test]
fn parcours_operande_gauche_nettoye() {
    // "5." engagé s'affiche "5", "2.50" s'affiche "2.5"
    assert_ecrans("5.+", "0", "5 + ");
    assert_ecrans("2.50+", "0", "2.5 + ");
}

#[test]
fn parcours_negatifs() {
    assert_ecrans("5~+3=", "-2", "-5 + 3 =");
    assert_ecrans("2-5=", "-3", "2 − 5 =");
}

/* ------------------------ Effacements ------------------------ */

#[test]
fn parcours_efface_tout() {
    assert_ecrans("2+3C", "0", "");
    assert_ecrans("2+3=C", "0", "");
    assert_ecrans("12.3~C", "0", "");
}

#[test]
fn parcours_efface_saisie_garde_l_attente() {
    assert_ecrans("2+31E", "0", "2 + ");
    assert_ecrans("2+31E4=", "6", "2 + 4 =");
}

#[test]
fn parcours_efface_saisie_apres_egal_efface_la_trace() {
    assert_ecrans("2+3=E", "0", "");
}
