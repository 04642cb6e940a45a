//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la calculatrice sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées
//! - budget temps global
//! - on accepte les erreurs attendues (division par zéro, motif invalide)
//! - invariant clé : écran occupé => message connu, et tic restaure
//!   EXACTEMENT le tampon d'avant l'erreur

use std::time::{Duration, Instant};

use super::calculatrice::Calculatrice;
use super::ecran::{Ecran, EcranMemoire};
use super::eval::MSG_DIVISION_ZERO;
use super::jetons::MSG_EXPRESSION_INVALIDE;
use super::verrou::DUREE_MESSAGE;

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

/* ------------------------ Génération (bornée) ------------------------ */

const OPERATEURS: [char; 4] = ['+', '-', '*', '/'];

/// Opérande conforme au motif : 1-3 chiffres, éventuellement '.' + 0-2 chiffres.
/// "0" est sur-représenté pour que les divisions par zéro sortent vraiment.
fn gen_operande(rng: &mut Rng) -> String {
    if rng.pick(5) == 0 {
        return "0".to_string();
    }

    let mut s = String::new();
    for _ in 0..=rng.pick(3) {
        s.push(char::from(b'0' + rng.pick(10) as u8));
    }
    if rng.coin() {
        s.push('.');
        for _ in 0..rng.pick(3) {
            s.push(char::from(b'0' + rng.pick(10) as u8));
        }
    }
    s
}

/// Tape une expression valide (alternance stricte) ; retourne les
/// opérandes et opérateurs tapés, pour l'oracle de référence.
fn tape_expression_valide(
    calc: &mut Calculatrice<EcranMemoire>,
    rng: &mut Rng,
) -> (Vec<f64>, Vec<char>) {
    let n = 1 + rng.pick(5) as usize;
    let mut operandes = Vec::with_capacity(n);
    let mut operateurs = Vec::new();

    for i in 0..n {
        if i > 0 {
            let op = OPERATEURS[rng.pick(4) as usize];
            calc.ajoute_operateur(op);
            operateurs.push(op);
        }
        let texte = gen_operande(rng);
        for c in texte.chars() {
            if c == '.' {
                calc.ajoute_decimal();
            } else {
                calc.ajoute_chiffre(c);
            }
        }
        // même conversion que la découpe
        operandes.push(
            texte
                .parse::<f64>()
                .unwrap_or_else(|_| panic!("opérande générée non analysable: {texte:?}")),
        );
    }

    (operandes, operateurs)
}

/// Oracle indépendant : deux passes gauche -> droite sur des listes
/// parallèles. Mêmes opérations f64 dans le même ordre => égalité exacte.
fn oracle(operandes: &[f64], operateurs: &[char]) -> Result<f64, ()> {
    let mut nombres = operandes.to_vec();
    let mut ops = operateurs.to_vec();

    for cibles in [['*', '/'], ['+', '-']] {
        let mut i = 0;
        while i < ops.len() {
            if !cibles.contains(&ops[i]) {
                i += 1;
                continue;
            }
            let (a, b) = (nombres[i], nombres[i + 1]);
            let v = match ops[i] {
                '*' => a * b,
                '/' => {
                    if b == 0.0 {
                        return Err(());
                    }
                    a / b
                }
                '+' => a + b,
                '-' => a - b,
                _ => unreachable!(),
            };
            nombres[i] = v;
            nombres.remove(i + 1);
            ops.remove(i);
        }
    }

    Ok(nombres[0])
}

/// Touche arbitraire (pour les séquences non guidées).
fn appuie_touche_arbitraire(calc: &mut Calculatrice<EcranMemoire>, rng: &mut Rng) {
    match rng.pick(8) {
        0..=3 => calc.ajoute_chiffre(char::from(b'0' + rng.pick(10) as u8)),
        4 => calc.ajoute_operateur(OPERATEURS[rng.pick(4) as usize]),
        5 => calc.ajoute_decimal(),
        6 => calc.efface_dernier(),
        _ => {
            if rng.pick(4) == 0 {
                calc.remise_a_zero();
            } else {
                calc.ajoute_chiffre(char::from(b'0' + rng.pick(10) as u8));
            }
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_valides_contre_oracle() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for tour in 0..200 {
        budget(t0, max);

        let mut calc = Calculatrice::new(EcranMemoire::default());
        let (operandes, operateurs) = tape_expression_valide(&mut calc, &mut rng);
        let tampon = calc.ecran().texte().to_string();

        let maintenant = tour as f64;
        calc.calcule(maintenant);

        match oracle(&operandes, &operateurs) {
            Ok(valeur) => {
                assert_eq!(
                    calc.ecran().texte(),
                    format!("{valeur}"),
                    "tampon={tampon:?}"
                );
                assert!(!calc.ecran().occupe());
                seen_ok += 1;
            }
            Err(()) => {
                assert_eq!(calc.ecran().texte(), MSG_DIVISION_ZERO, "tampon={tampon:?}");
                assert!(calc.ecran().occupe());

                // restauration exacte à l'échéance
                calc.tic(maintenant + DUREE_MESSAGE);
                assert_eq!(calc.ecran().texte(), tampon);
                assert!(!calc.ecran().occupe());
                seen_div0 += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_sequences_arbitraires_invariant_erreur() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for tour in 0..150 {
        budget(t0, max);

        let mut calc = Calculatrice::new(EcranMemoire::default());
        for _ in 0..rng.pick(24) {
            appuie_touche_arbitraire(&mut calc, &mut rng);
        }

        let tampon = calc.ecran().texte().to_string();
        let maintenant = tour as f64 * 10.0;
        calc.calcule(maintenant);

        if calc.ecran().occupe() {
            // erreur : message connu, puis restauration EXACTE
            let texte = calc.ecran().texte().to_string();
            assert!(
                texte == MSG_EXPRESSION_INVALIDE || texte == MSG_DIVISION_ZERO,
                "message inattendu: {texte:?} (tampon={tampon:?})"
            );
            calc.tic(maintenant + DUREE_MESSAGE);
            assert_eq!(calc.ecran().texte(), tampon);
            assert!(!calc.ecran().occupe());
        } else if tampon.is_empty() {
            // tampon vide : no-op
            assert_eq!(calc.ecran().texte(), "");
        } else {
            // succès : l'écran porte une valeur f64 affichable
            let texte = calc.ecran().texte();
            assert!(
                texte.parse::<f64>().is_ok(),
                "résultat non numérique: {texte:?} (tampon={tampon:?})"
            );
        }
    }
}

#[test]
fn fuzz_safe_aucune_mutation_pendant_le_blocage() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xFEED_u64);

    let mut calc = Calculatrice::new(EcranMemoire::avec_texte("abc"));
    calc.calcule(0.0);
    assert_eq!(calc.ecran().texte(), MSG_EXPRESSION_INVALIDE);

    for _ in 0..300 {
        budget(t0, max);
        appuie_touche_arbitraire(&mut calc, &mut rng);
        calc.calcule(1.0);
        assert_eq!(calc.ecran().texte(), MSG_EXPRESSION_INVALIDE);
        assert!(calc.ecran().occupe());
    }

    calc.tic(DUREE_MESSAGE);
    assert_eq!(calc.ecran().texte(), "abc");
}
