// src/noyau/calculatrice.rs
//
// La calculatrice quatre opérations
// ---------------------------------
// Rôle :
// - Mutateurs du tampon (chiffre, opérateur " op ", point, retour arrière,
//   remise à zéro) : tous no-ops quand l'écran est occupé.
// - `calcule` : validation (jetons.rs) puis réduction (eval.rs) ; sur
//   erreur, affiche le message et arme le verrou temporisé (verrou.rs).
// - `tic` : à appeler régulièrement (chaque frame) avec le temps courant ;
//   restaure l'écran à l'échéance du verrou.
//
// L'écran est injecté (trait Ecran) : la logique ne connaît aucune
// surface de rendu.

use super::ecran::Ecran;
use super::eval::reduit;
use super::jetons::{decoupe, est_operateur};
use super::verrou::Verrou;

pub struct Calculatrice<E: Ecran> {
    ecran: E,
    verrou: Verrou,
}

impl<E: Ecran> Calculatrice<E> {
    pub fn new(ecran: E) -> Self {
        Self {
            ecran,
            verrou: Verrou::Libre,
        }
    }

    /// Accès lecture à l'écran (la vue s'en sert à chaque frame).
    pub fn ecran(&self) -> &E {
        &self.ecran
    }

    /* ------------------------ Mutateurs du tampon ------------------------ */

    /// Ajoute le caractère tel quel (la validation attendra `calcule`).
    pub fn ajoute_chiffre(&mut self, chiffre: char) {
        if self.ecran.occupe() {
            return;
        }
        let mut texte = self.ecran.texte().to_string();
        texte.push(chiffre);
        self.ecran.set_texte(&texte);
    }

    /// Ajoute l'opérateur entouré d'espaces simples : `" op "`.
    pub fn ajoute_operateur(&mut self, operateur: char) {
        if self.ecran.occupe() {
            return;
        }
        let mut texte = self.ecran.texte().to_string();
        texte.push(' ');
        texte.push(operateur);
        texte.push(' ');
        self.ecran.set_texte(&texte);
    }

    pub fn ajoute_decimal(&mut self) {
        self.ajoute_chiffre('.');
    }

    /// Retour arrière.
    /// Si l'avant-dernier caractère est un opérateur, le tampon se termine
    /// par " op X" incomplet côté gauche du curseur : on retire les trois
    /// caractères espace-opérateur-espace d'un coup. Sinon, un seul.
    pub fn efface_dernier(&mut self) {
        if self.ecran.occupe() {
            return;
        }
        let chars: Vec<char> = self.ecran.texte().chars().collect();
        if chars.is_empty() {
            return;
        }

        let garde = if chars.len() >= 2 && est_operateur(chars[chars.len() - 2]) {
            chars.len().saturating_sub(3)
        } else {
            chars.len() - 1
        };

        let nouveau: String = chars[..garde].iter().collect();
        self.ecran.set_texte(&nouveau);
    }

    pub fn remise_a_zero(&mut self) {
        if self.ecran.occupe() {
            return;
        }
        self.ecran.set_texte("");
    }

    /* ------------------------ Calcul ------------------------ */

    /// Évalue le tampon. No-op si occupé ou vide.
    /// Succès : le tampon devient la valeur (Display de f64).
    /// Échec : message affiché DUREE_MESSAGE secondes, puis restauration.
    pub fn calcule(&mut self, maintenant: f64) {
        if self.ecran.occupe() {
            return;
        }

        let expression = self.ecran.texte().to_string();
        if expression.is_empty() {
            return;
        }

        match decoupe(&expression).and_then(reduit) {
            Ok(valeur) => self.ecran.set_texte(&format!("{valeur}")),
            Err(message) => self.affiche_et_attend(&message, maintenant),
        }
    }

    /* ------------------------ Verrou temporisé ------------------------ */

    /// Avance le temps : restaure l'écran si l'échéance du verrou est passée.
    pub fn tic(&mut self, maintenant: f64) {
        if let Some(restauration) = self.verrou.tic(maintenant) {
            self.ecran.set_texte(&restauration);
            self.ecran.set_occupe(false);
        }
    }

    /// Temps restant avant la fin du blocage (None si libre).
    pub fn reste_verrou(&self, maintenant: f64) -> Option<f64> {
        self.verrou.reste(maintenant)
    }

    /// Affiche `message`, verrouille l'écran, et mémorise le texte courant
    /// pour le restaurer à l'échéance.
    fn affiche_et_attend(&mut self, message: &str, maintenant: f64) {
        self.verrou = Verrou::arme(self.ecran.texte().to_string(), maintenant);
        self.ecran.set_texte(message);
        self.ecran.set_occupe(true);
    }
}
