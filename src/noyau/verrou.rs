// src/noyau/verrou.rs
//
// Verrou temporisé (machine à états)
// ----------------------------------
// Libre -> Bloque { restauration, échéance } -> Libre
//
// Remplace un timer à callback : le temps est INJECTÉ (secondes f64,
// typiquement `input.time` d'egui), le noyau ne lit jamais d'horloge.
// `tic(maintenant)` effectue la transition de retour quand l'échéance
// est passée et rend le texte à restaurer.
//
// Une deuxième erreur pendant le blocage est impossible par construction :
// mutations et calcul sont des no-ops tant que l'écran est occupé.

/// Durée d'affichage d'un message d'erreur (secondes).
pub const DUREE_MESSAGE: f64 = 4.0;

/// Durée de surbrillance d'une touche pressée au clavier (secondes).
pub const DUREE_SURBRILLANCE: f64 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub enum Verrou {
    Libre,
    Bloque { restauration: String, echeance: f64 },
}

impl Verrou {
    /// Arme le verrou : le texte courant sera restauré à l'échéance.
    pub fn arme(restauration: String, maintenant: f64) -> Self {
        Verrou::Bloque {
            restauration,
            echeance: maintenant + DUREE_MESSAGE,
        }
    }

    pub fn bloque(&self) -> bool {
        matches!(self, Verrou::Bloque { .. })
    }

    /// Temps restant avant l'échéance (pour planifier un repaint),
    /// None si libre.
    pub fn reste(&self, maintenant: f64) -> Option<f64> {
        match self {
            Verrou::Libre => None,
            Verrou::Bloque { echeance, .. } => Some((echeance - maintenant).max(0.0)),
        }
    }

    /// Transition Bloque -> Libre si l'échéance est passée.
    /// Rend alors le texte à restaurer.
    pub fn tic(&mut self, maintenant: f64) -> Option<String> {
        match self {
            Verrou::Bloque { echeance, .. } if maintenant >= *echeance => {
                let ancien = std::mem::replace(self, Verrou::Libre);
                match ancien {
                    Verrou::Bloque { restauration, .. } => Some(restauration),
                    Verrou::Libre => None,
                }
            }
            _ => None,
        }
    }
}
