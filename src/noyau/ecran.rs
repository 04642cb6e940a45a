// src/noyau/ecran.rs
//
// Surface d'affichage (injection de dépendance)
// ---------------------------------------------
// Rôle :
// - Découpler la logique (calculatrice.rs) de toute surface de rendu.
// - Le texte affiché EST le tampon d'expression : pas d'état dupliqué.
// - `occupe` : verrou d'attente pendant l'affichage d'un message ;
//   tant qu'il est levé, toute mutation est un no-op.

/// Surface d'affichage minimale vue par la calculatrice.
pub trait Ecran {
    fn texte(&self) -> &str;
    fn set_texte(&mut self, texte: &str);
    fn occupe(&self) -> bool;
    fn set_occupe(&mut self, occupe: bool);
}

/// Implémentation mémoire : suffit pour la vue egui (qui lit `texte()`
/// à chaque frame) et pour les tests.
#[derive(Clone, Debug, Default)]
pub struct EcranMemoire {
    texte: String,
    occupe: bool,
}

impl EcranMemoire {
    /// Écran pré-rempli (utile en test : contenu arbitraire, même invalide).
    pub fn avec_texte(texte: &str) -> Self {
        Self {
            texte: texte.to_string(),
            occupe: false,
        }
    }
}

impl Ecran for EcranMemoire {
    fn texte(&self) -> &str {
        &self.texte
    }

    fn set_texte(&mut self, texte: &str) {
        self.texte.clear();
        self.texte.push_str(texte);
    }

    fn occupe(&self) -> bool {
        self.occupe
    }

    fn set_occupe(&mut self, occupe: bool) {
        self.occupe = occupe;
    }
}
