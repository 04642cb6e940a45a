//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la calculatrice (noyau) et l'état purement visuel de la
//! vue, à savoir les surbrillances "touche pressée" déclenchées par le
//! clavier physique.
//!
//! Contrats :
//! - Aucune notion d'egui ici (testable sans rendu).
//! - Le temps est injecté partout (secondes f64), jamais lu.

use crate::noyau::verrou::DUREE_SURBRILLANCE;
use crate::noyau::{Calculatrice, EcranMemoire};

/// Touches du pavé (écran + clavier physique).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    Chiffre(char),
    Operateur(char),
    Decimal,
    Efface,
    Remise,
    Egal,
}

impl Touche {
    /// Correspondance caractère tapé -> touche du pavé.
    /// (Backspace, Entrée et Échap arrivent en événements clavier, pas en texte.)
    pub fn depuis_char(c: char) -> Option<Touche> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '+' | '-' | '*' | '/' => Some(Touche::Operateur(c)),
            '.' => Some(Touche::Decimal),
            '=' => Some(Touche::Egal),
            'r' | 'R' | 'c' | 'C' => Some(Touche::Remise),
            _ => None,
        }
    }
}

pub struct AppCalc {
    pub calc: Calculatrice<EcranMemoire>,

    // Surbrillances "touche pressée" (clavier physique) : touche -> échéance.
    surbrillances: Vec<(Touche, f64)>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            calc: Calculatrice::new(EcranMemoire::default()),
            surbrillances: Vec::new(),
        }
    }
}

impl AppCalc {
    /// Appui (souris ou clavier) : dispatch vers la calculatrice.
    pub fn appuie(&mut self, touche: Touche, maintenant: f64) {
        match touche {
            Touche::Chiffre(c) => self.calc.ajoute_chiffre(c),
            Touche::Operateur(c) => self.calc.ajoute_operateur(c),
            Touche::Decimal => self.calc.ajoute_decimal(),
            Touche::Efface => self.calc.efface_dernier(),
            Touche::Remise => self.calc.remise_a_zero(),
            Touche::Egal => self.calc.calcule(maintenant),
        }
    }

    /// Appui venu du clavier physique : même effet, plus une surbrillance
    /// brève de la touche équivalente à l'écran.
    pub fn appuie_clavier(&mut self, touche: Touche, maintenant: f64) {
        self.appuie(touche, maintenant);
        self.surbrillances.retain(|(t, _)| *t != touche);
        self.surbrillances
            .push((touche, maintenant + DUREE_SURBRILLANCE));
    }

    pub fn est_surbrillante(&self, touche: Touche, maintenant: f64) -> bool {
        self.surbrillances
            .iter()
            .any(|(t, echeance)| *t == touche && *echeance > maintenant)
    }

    /// Purge des surbrillances expirées (à chaque frame).
    pub fn purge_surbrillances(&mut self, maintenant: f64) {
        self.surbrillances.retain(|(_, echeance)| *echeance > maintenant);
    }

    /// Prochaine échéance (verrou ou surbrillance) : la vue s'en sert pour
    /// planifier un repaint sans attendre une nouvelle saisie.
    pub fn prochaine_echeance(&self, maintenant: f64) -> Option<f64> {
        let mut reste = self.calc.reste_verrou(maintenant);
        for (_, echeance) in &self.surbrillances {
            let r = (echeance - maintenant).max(0.0);
            reste = Some(match reste {
                Some(v) => v.min(r),
                None => r,
            });
        }
        reste
    }
}
