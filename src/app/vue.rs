// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Tactile : gros boutons, grille 4 colonnes façon calculette de poche
// - L’écran relit `ecran()` à chaque frame : toute pression est donc
//   reflétée immédiatement (contrat “afficher après chaque touche”)
//
// Note :
// - Pas de raccourcis clavier : la calculette est pilotée boutons seulement.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Operateur, Touche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice de poche");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /// Écran : cadre monospace, aligné à droite comme une calculette.
    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(self.ecran()).monospace().size(32.0));
                });
            });
    }

    /// Pavé 4 colonnes :
    ///   C  ±  %  ÷
    ///   7  8  9  ×
    ///   4  5  6  −
    ///   1  2  3  +
    ///   0     .  =
    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculette")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "C", "Remise à zéro totale", Touche::Effacer);
                self.bouton_action(ui, "±", "Bascule du signe", Touche::PlusMoins);
                self.bouton_action(ui, "%", "Divise par 100", Touche::Pourcentage);
                self.bouton(ui, "÷", Touche::Operation(Operateur::Division));
                ui.end_row();

                self.bouton(ui, "7", Touche::Chiffre('7'));
                self.bouton(ui, "8", Touche::Chiffre('8'));
                self.bouton(ui, "9", Touche::Chiffre('9'));
                self.bouton(ui, "×", Touche::Operation(Operateur::Multiplication));
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'));
                self.bouton(ui, "5", Touche::Chiffre('5'));
                self.bouton(ui, "6", Touche::Chiffre('6'));
                self.bouton(ui, "−", Touche::Operation(Operateur::Soustraction));
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'));
                self.bouton(ui, "2", Touche::Chiffre('2'));
                self.bouton(ui, "3", Touche::Chiffre('3'));
                self.bouton(ui, "+", Touche::Operation(Operateur::Addition));
                ui.end_row();

                self.bouton(ui, "0", Touche::Chiffre('0'));
                ui.label("");
                self.bouton(ui, ".", Touche::Point);
                self.bouton(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([56.0, 40.0], egui::Button::new(label));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let resp = ui
            .add_sized([56.0, 40.0], egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
