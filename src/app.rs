// src/app.rs
//
// Module App (racine)
// -------------------
// Rôle :
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs : use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Le pavé est pensé pour le clic (natif comme web) : pas de gestion clavier
// ici, hormis le raccourci global Échap.

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Échap = remise à zéro complète (comme le bouton "C").
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.efface_tout();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
