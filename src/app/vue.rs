// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé : C, DEL, les quatre opérateurs, chiffres, '.', '='
// - Clavier physique : chiffres, + - * / . = R C (en texte),
//   Backspace et Entrée (en événements clavier)
//   => même action + surbrillance ~100 ms de la touche écran
// - Écran : champ monospace lecture seule ; le texte affiché EST le tampon
//   (et, pendant un blocage, le message d'erreur)

use eframe::egui;

use super::etat::{AppCalc, Touche};
use crate::noyau::Ecran;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let maintenant = ui.input(|i| i.time);

        // Le temps avance : échéance du verrou + surbrillances.
        self.calc.tic(maintenant);
        self.purge_surbrillances(maintenant);

        self.clavier_physique(ui.ctx(), maintenant);

        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice de poche");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui, maintenant);

        // Repaint planifié : verrou et surbrillances expirent sans saisie.
        if let Some(reste) = self.prochaine_echeance(maintenant) {
            ui.ctx()
                .request_repaint_after(std::time::Duration::from_secs_f64(reste.max(0.01)));
        }
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(2.0 * ui.text_style_height(&egui::TextStyle::Monospace));
                ui.monospace(self.calc.ecran().texte());
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(
                    ui,
                    "C",
                    Touche::Remise,
                    "Remise à zéro (clavier: R, C ou Échap)",
                    maintenant,
                );
                self.bouton(
                    ui,
                    "DEL",
                    Touche::Efface,
                    "Efface le dernier symbole (clavier: Backspace)",
                    maintenant,
                );
                self.bouton(ui, "/", Touche::Operateur('/'), "", maintenant);
                self.bouton(ui, "*", Touche::Operateur('*'), "", maintenant);
                ui.end_row();

                self.bouton(ui, "7", Touche::Chiffre('7'), "", maintenant);
                self.bouton(ui, "8", Touche::Chiffre('8'), "", maintenant);
                self.bouton(ui, "9", Touche::Chiffre('9'), "", maintenant);
                self.bouton(ui, "-", Touche::Operateur('-'), "", maintenant);
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'), "", maintenant);
                self.bouton(ui, "5", Touche::Chiffre('5'), "", maintenant);
                self.bouton(ui, "6", Touche::Chiffre('6'), "", maintenant);
                self.bouton(ui, "+", Touche::Operateur('+'), "", maintenant);
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'), "", maintenant);
                self.bouton(ui, "2", Touche::Chiffre('2'), "", maintenant);
                self.bouton(ui, "3", Touche::Chiffre('3'), "", maintenant);
                self.bouton(
                    ui,
                    "=",
                    Touche::Egal,
                    "Calcule (clavier: Entrée ou =)",
                    maintenant,
                );
                ui.end_row();

                self.bouton(ui, "0", Touche::Chiffre('0'), "", maintenant);
                self.bouton(ui, ".", Touche::Decimal, "", maintenant);
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /// Un bouton du pavé : surbrillance si la touche clavier équivalente
    /// vient d'être pressée ; clic souris = appui direct.
    fn bouton(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        touche: Touche,
        astuce: &str,
        maintenant: f64,
    ) {
        let mut bouton = egui::Button::new(label);
        if self.est_surbrillante(touche, maintenant) {
            bouton = bouton.fill(ui.visuals().selection.bg_fill);
        }

        let mut resp = ui.add_sized([56.0, 32.0], bouton);
        if !astuce.is_empty() {
            resp = resp.on_hover_text(astuce);
        }

        if resp.clicked() {
            self.appuie(touche, maintenant);
        }
    }

    /* ------------------------ Clavier physique ------------------------ */

    fn clavier_physique(&mut self, ctx: &egui::Context, maintenant: f64) {
        let evenements = ctx.input(|i| i.events.clone());

        for evenement in evenements {
            match evenement {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        if let Some(touche) = Touche::depuis_char(c) {
                            self.appuie_clavier(touche, maintenant);
                        }
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => {
                    self.appuie_clavier(Touche::Efface, maintenant);
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => {
                    self.appuie_clavier(Touche::Egal, maintenant);
                }
                _ => {}
            }
        }
    }
}
