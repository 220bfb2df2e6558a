// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Deux zones d'affichage : attente (discrète) au-dessus, saisie en grand.
// - Pavé 4 colonnes, disposition de la calculatrice classique :
//     C  CE  ←  ÷
//     1  2   3  ×
//     4  5   6  −
//     7  8   9  +
//     ±  0   .  =
// - La vue ne calcule rien : elle lit deux textes et route des `Touche`.

use eframe::egui;

use super::etat::{AppCalc, Touche};
use crate::noyau::Operateur;

/// Hauteur des boutons du pavé.
const HAUTEUR_BOUTON: f32 = 56.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecrans(ui);
        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    /* ------------------------ Écrans ------------------------ */

    fn ui_ecrans(&mut self, ui: &mut egui::Ui) {
        // Zone d'attente : discrète, alignée à droite. Un espace quand elle
        // est vide, pour garder une hauteur stable.
        let attente = self.texte_attente();
        let texte_attente = if attente.is_empty() {
            " "
        } else {
            attente.as_str()
        };
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(texte_attente).size(16.0).weak());
        });

        // Zone de saisie : grande, alignée à droite, cadre stable.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.texte_saisie())
                            .size(36.0)
                            .monospace(),
                    );
                });
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let largeur = (ui.available_width() - 3.0 * 6.0) / 4.0;

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche(ui, largeur, "C", Touche::EffaceTout);
                self.touche(ui, largeur, "CE", Touche::EffaceSaisie);
                self.touche(ui, largeur, "←", Touche::RetourArriere);
                self.touche(ui, largeur, "÷", Touche::Operation(Operateur::Division));
                ui.end_row();

                self.touche(ui, largeur, "1", Touche::Chiffre('1'));
                self.touche(ui, largeur, "2", Touche::Chiffre('2'));
                self.touche(ui, largeur, "3", Touche::Chiffre('3'));
                self.touche(ui, largeur, "×", Touche::Operation(Operateur::Multiplication));
                ui.end_row();

                self.touche(ui, largeur, "4", Touche::Chiffre('4'));
                self.touche(ui, largeur, "5", Touche::Chiffre('5'));
                self.touche(ui, largeur, "6", Touche::Chiffre('6'));
                self.touche(ui, largeur, "−", Touche::Operation(Operateur::Soustraction));
                ui.end_row();

                self.touche(ui, largeur, "7", Touche::Chiffre('7'));
                self.touche(ui, largeur, "8", Touche::Chiffre('8'));
                self.touche(ui, largeur, "9", Touche::Chiffre('9'));
                self.touche(ui, largeur, "+", Touche::Operation(Operateur::Addition));
                ui.end_row();

                self.touche(ui, largeur, "+/-", Touche::InverseSigne);
                self.touche(ui, largeur, "0", Touche::Chiffre('0'));
                self.touche(ui, largeur, ".", Touche::Point);
                self.touche(ui, largeur, "=", Touche::Egal);
                ui.end_row();
            });
    }

    fn touche(&mut self, ui: &mut egui::Ui, largeur: f32, label: &str, touche: Touche) {
        let bouton = egui::Button::new(egui::RichText::new(label).size(20.0));
        if ui.add_sized([largeur, HAUTEUR_BOUTON], bouton).clicked() {
            self.appuie(touche);
        }
    }
}
