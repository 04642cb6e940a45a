// src/noyau/eval.rs
//
// Réduction en deux passes (gauche -> droite)
// -------------------------------------------
// Passe 1 : chaque triplet a * b / a / b est remplacé sur place par son
//           résultat (les éléments restants gardent leur ordre relatif).
// Passe 2 : idem pour + et -.
//
// Division par zéro : tout le calcul est abandonné (la passe + / - ne
// tourne jamais), message exact "Divided by 0".
//
// Arithmétique : f64 (IEEE-754 double), rien d'exact ici.

use super::jetons::{Jeton, Op, MSG_EXPRESSION_INVALIDE};

/// Message affiché sur division par zéro.
pub const MSG_DIVISION_ZERO: &str = "Divided by 0";

/// Réduit une liste de jetons (alternance validée par `decoupe`) en une
/// seule valeur.
pub fn reduit(mut jetons: Vec<Jeton>) -> Result<f64, String> {
    reduit_passe(&mut jetons, &[Op::Fois, Op::Divise])?;
    reduit_passe(&mut jetons, &[Op::Plus, Op::Moins])?;

    match jetons.as_slice() {
        [Jeton::Nombre(valeur)] => Ok(*valeur),
        // Inatteignable si la découpe a validé l'alternance.
        _ => Err(MSG_EXPRESSION_INVALIDE.into()),
    }
}

/// Une passe gauche -> droite : réduit chaque opérateur de `cibles`,
/// saute les autres.
fn reduit_passe(jetons: &mut Vec<Jeton>, cibles: &[Op]) -> Result<(), String> {
    let mut i = 1;
    while i < jetons.len() {
        let op = match jetons.get(i) {
            Some(Jeton::Operateur(op)) => *op,
            _ => return Err(MSG_EXPRESSION_INVALIDE.into()),
        };

        if !cibles.contains(&op) {
            i += 2;
            continue;
        }

        let (a, b) = match (jetons.get(i - 1), jetons.get(i + 1)) {
            (Some(Jeton::Nombre(a)), Some(Jeton::Nombre(b))) => (*a, *b),
            _ => return Err(MSG_EXPRESSION_INVALIDE.into()),
        };

        let valeur = match op {
            Op::Plus => a + b,
            Op::Moins => a - b,
            Op::Fois => a * b,
            Op::Divise => {
                // == 0.0 attrape aussi -0.0
                if b == 0.0 {
                    return Err(MSG_DIVISION_ZERO.into());
                }
                a / b
            }
        };

        // Triplet -> résultat ; on reste sur place : le résultat peut
        // précéder un autre opérateur ciblé.
        jetons[i - 1] = Jeton::Nombre(valeur);
        jetons.drain(i..=i + 1);
    }

    Ok(())
}
