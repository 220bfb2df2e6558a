//! Tests fuzz safe : robustesse + déterminisme sur des séquences de touches.
//!
//! But : marteler la machine sans faire chauffer la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariants après CHAQUE frappe :
//!   - la saisie se lit toujours comme un nombre fini
//!   - la borne d'affichage tient (16, +1 avec signe)
//!   - la zone d'attente est vide, ouverte ("… op ") ou close ("… =")
//!   - aucune transition ne panique, l'échec d'évaluation ne change rien

use std::time::{Duration, Instant};

use super::lecture::lit_nombre;
use super::moteur::Moteur;
use super::operation::Operateur;
use super::saisie::LONGUEUR_MAX_DEFAUT;

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Frappes aléatoires ------------------------ */

const OPERATEURS: [Operateur; 4] = [
    Operateur::Addition,
    Operateur::Soustraction,
    Operateur::Multiplication,
    Operateur::Division,
];

fn frappe_au_hasard(rng: &mut Rng, moteur: &mut Moteur) {
    match rng.pick(16) {
        // les chiffres dominent, comme au pavé
        0..=7 => {
            let c = char::from(b'0' + rng.pick(10) as u8);
            moteur.chiffre(c);
        }
        8 => moteur.point(),
        9 => moteur.inverse_signe(),
        10 => moteur.retour_arriere(),
        11 => moteur.efface_saisie(),
        12 => moteur.efface_tout(),
        13 | 14 => {
            let op = OPERATEURS[rng.pick(4) as usize];
            moteur.operateur(op);
        }
        _ => {
            let _ = moteur.egal();
        }
    }
}

fn check_invariants(moteur: &Moteur) {
    let saisie = moteur.texte_saisie();

    assert!(!saisie.is_empty(), "saisie jamais vide");

    let borne = LONGUEUR_MAX_DEFAUT + usize::from(saisie.starts_with('-'));
    assert!(
        saisie.len() <= borne,
        "borne dépassée: {saisie:?} ({} > {borne})",
        saisie.len()
    );

    assert!(
        lit_nombre(saisie).is_finite(),
        "saisie illisible: {saisie:?}"
    );

    let attente = moteur.texte_attente();
    assert!(
        attente.is_empty() || attente.ends_with(' ') || attente.ends_with('='),
        "attente mal formée: {attente:?}"
    );
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_sous_frappes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut moteur = Moteur::nouveau();

    for _ in 0..600 {
        budget(t0, max);
        frappe_au_hasard(&mut rng, &mut moteur);
        check_invariants(&moteur);
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let rejoue = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut moteur = Moteur::nouveau();
        for _ in 0..300 {
            frappe_au_hasard(&mut rng, &mut moteur);
        }
        (moteur.texte_saisie().to_string(), moteur.texte_attente())
    };

    // même seed => mêmes frappes => mêmes écrans
    assert_eq!(rejoue(0xBADC0DE_u64), rejoue(0xBADC0DE_u64));
}

#[test]
fn fuzz_safe_echec_d_evaluation_sans_effet() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xD1CE_u64);
    let mut moteur = Moteur::nouveau();

    for _ in 0..400 {
        budget(t0, max);
        frappe_au_hasard(&mut rng, &mut moteur);

        let avant = (moteur.texte_saisie().to_string(), moteur.texte_attente());
        if moteur.egal().is_err() {
            // échec avalé : rien n'a bougé
            let apres = (moteur.texte_saisie().to_string(), moteur.texte_attente());
            assert_eq!(avant, apres, "un échec d'évaluation a mutilé l'état");
        }
        check_invariants(&moteur);
    }
}
