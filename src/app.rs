// src/app.rs
//
// Calculatrice de poche — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Backspace/Entrée/texte sont gérés dans vue.rs (avec les surbrillances).
// - Ici, seulement le raccourci global Échap.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global : ESC = remise à zéro (comme "C").
        let (esc, maintenant) = ctx.input(|i| (i.key_pressed(egui::Key::Escape), i.time));
        if esc {
            self.appuie_clavier(etat::Touche::Remise, maintenant);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
