// src/noyau/jetons.rs
//
// Validation + découpe de l'expression affichée
// ---------------------------------------------
// Le tampon est une alternance stricte :
//   opérande, " op ", opérande, " op ", ...
// soit, vu comme motif : ^\d+(\.\d*)?( [+\-*/] \d+(\.\d*)?)*$
//
// Pas de parenthèses, pas de signe unaire : tout écart est une erreur,
// avec pour message exactement le texte affiché à l'utilisateur.

/// Message affiché quand le tampon ne respecte pas le motif.
pub const MSG_EXPRESSION_INVALIDE: &str = "Invalid mathematical expression";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Operateur(Op),
}

/// Vrai si `c` est l'un des quatre opérateurs du pavé.
pub fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Découpe une expression en jetons, en validant le motif complet.
/// La liste retournée alterne Nombre / Operateur et se termine par un Nombre.
pub fn decoupe(expression: &str) -> Result<Vec<Jeton>, String> {
    let morceaux: Vec<&str> = expression.split(' ').collect();

    // Alternance stricte => toujours un nombre impair de morceaux.
    if morceaux.len() % 2 == 0 {
        return Err(MSG_EXPRESSION_INVALIDE.into());
    }

    let mut jetons = Vec::with_capacity(morceaux.len());
    for (i, morceau) in morceaux.iter().enumerate() {
        if i % 2 == 0 {
            jetons.push(Jeton::Nombre(lit_operande(morceau)?));
        } else {
            jetons.push(Jeton::Operateur(lit_operateur(morceau)?));
        }
    }

    Ok(jetons)
}

/// Opérande : \d+(\.\d*)? — au moins un chiffre de tête, puis éventuellement
/// un point décimal suivi de zéro ou plusieurs chiffres ("5." passe, ".5" non).
fn lit_operande(texte: &str) -> Result<f64, String> {
    let octets = texte.as_bytes();
    let mut i = 0;

    while i < octets.len() && octets[i].is_ascii_digit() {
        i += 1;
    }
    if i == 0 {
        return Err(MSG_EXPRESSION_INVALIDE.into());
    }

    if i < octets.len() {
        if octets[i] != b'.' {
            return Err(MSG_EXPRESSION_INVALIDE.into());
        }
        i += 1;
        while i < octets.len() && octets[i].is_ascii_digit() {
            i += 1;
        }
        // reste après la partie fractionnaire (deuxième '.', lettre, ...)
        if i < octets.len() {
            return Err(MSG_EXPRESSION_INVALIDE.into());
        }
    }

    texte
        .parse::<f64>()
        .map_err(|_| MSG_EXPRESSION_INVALIDE.into())
}

fn lit_operateur(texte: &str) -> Result<Op, String> {
    match texte {
        "+" => Ok(Op::Plus),
        "-" => Ok(Op::Moins),
        "*" => Ok(Op::Fois),
        "/" => Ok(Op::Divise),
        _ => Err(MSG_EXPRESSION_INVALIDE.into()),
    }
}
