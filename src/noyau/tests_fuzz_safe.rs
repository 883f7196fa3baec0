//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - séquences bornées
//! - budget temps global
//! - invariants après chaque frappe : affichage jamais vide, au plus un
//!   point, rendu écran total (jamais de panique), saisie bornée

use std::time::{Duration, Instant};

use super::format::{formater_affichage, taille_pour};
use super::moteur::{EtatCalc, MAX_CHIFFRES};
use super::touches::{Op, Touche};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

/// Touche aléatoire, chiffres sur-représentés (comme une vraie frappe).
fn touche_aleatoire(rng: &mut Rng) -> Touche {
    match rng.pick(16) {
        0..=6 => Touche::Chiffre((b'0' + rng.pick(10) as u8) as char),
        7 => Touche::Decimale,
        8 => Touche::Op(Op::Add),
        9 => Touche::Op(Op::Sub),
        10 => Touche::Op(Op::Mul),
        11 => Touche::Op(Op::Div),
        12 => Touche::Egal,
        13 => Touche::Del,
        14 => Touche::Negation,
        _ => {
            if rng.coin() {
                Touche::Pourcent
            } else {
                Touche::Clear
            }
        }
    }
}

fn check_invariants(etat: &EtatCalc) {
    assert!(!etat.affichage.is_empty(), "affichage vide");
    assert!(
        etat.affichage.matches('.').count() <= 1,
        "plus d'un point: {:?}",
        etat.affichage
    );

    // rendu total : jamais de panique, jamais vide
    let rendu = formater_affichage(&etat.affichage);
    assert!(!rendu.is_empty(), "rendu vide pour {:?}", etat.affichage);
    let _ = taille_pour(&rendu);
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_et_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let rejouer = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut etat = EtatCalc::default();
        for _ in 0..500 {
            budget(t0, max);
            etat.appliquer(touche_aleatoire(&mut rng));
            check_invariants(&etat);
        }
        etat
    };

    // Même seed => même séquence => même état final (déterminisme)
    let a = rejouer(0xC0FFEE_u64);
    let b = rejouer(0xC0FFEE_u64);
    assert_eq!(a, b, "le rejeu d'une seed doit reproduire l'état");
}

#[test]
fn fuzz_safe_saisie_seule_bornee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // chiffres + point seulement : la saisie directe reste bornée
    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut etat = EtatCalc::default();

    for _ in 0..200 {
        budget(t0, max);

        let t = if rng.pick(8) == 0 {
            Touche::Decimale
        } else {
            Touche::Chiffre((b'0' + rng.pick(10) as u8) as char)
        };
        etat.appliquer(t);

        let chiffres = etat.affichage.chars().filter(char::is_ascii_digit).count();
        assert!(
            chiffres <= MAX_CHIFFRES,
            "saisie au-delà de la borne: {:?}",
            etat.affichage
        );
        check_invariants(&etat);
    }
}

#[test]
fn fuzz_safe_clear_apres_historique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // quel que soit l'historique, AC redonne exactement l'état initial
    let mut rng = Rng::new(0xFACADE_u64);

    for _ in 0..50 {
        budget(t0, max);

        let mut etat = EtatCalc::default();
        let longueur = 1 + rng.pick(40) as usize;
        for _ in 0..longueur {
            etat.appliquer(touche_aleatoire(&mut rng));
        }

        etat.appliquer(Touche::Clear);
        assert_eq!(etat, EtatCalc::default());
    }
}
