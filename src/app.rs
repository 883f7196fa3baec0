// src/app.rs
//
// Calculatrice Standard - module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Clavier (safe natif + web):
// - les caractères imprimables arrivent en Event::Text
//   (chiffres, ".", "+", "-", "*", "x", "×", "/", "÷", "=", "%")
// - Enter / Escape / Backspace / Delete arrivent en Event::Key
// - chaque frappe reconnue pose la surbrillance; tout relâchement la lève
// - les touches non reconnues passent au travers sans toucher l'état

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::{depuis_clavier, Touche};

/// Frappe clavier d'une frame, dans l'ordre d'arrivée des événements.
enum Frappe {
    Appui(Touche),
    Relache,
}

/// Relit la file d'événements egui de la frame et la traduit en frappes
/// logiques via le noyau (zéro ou une action par touche).
fn frappes_de_la_frame(ctx: &egui::Context) -> Vec<Frappe> {
    ctx.input(|i| {
        let mut out = Vec::new();

        for ev in &i.events {
            match ev {
                egui::Event::Text(texte) => {
                    // un Event::Text peut porter plusieurs caractères (collage)
                    for c in texte.chars() {
                        let mut tampon = [0u8; 4];
                        if let Some(t) = depuis_clavier(c.encode_utf8(&mut tampon)) {
                            out.push(Frappe::Appui(t));
                        }
                    }
                }

                egui::Event::Key {
                    key,
                    pressed: true,
                    ..
                } => {
                    // seulement les touches sans Event::Text associé;
                    // les autres Key (chiffres, etc.) doublonnent le Text
                    let nom = match key {
                        egui::Key::Enter => "Enter",
                        egui::Key::Escape => "Escape",
                        egui::Key::Backspace => "Backspace",
                        egui::Key::Delete => "Delete",
                        _ => continue,
                    };
                    if let Some(t) = depuis_clavier(nom) {
                        out.push(Frappe::Appui(t));
                    }
                }

                egui::Event::Key { pressed: false, .. } => out.push(Frappe::Relache),

                _ => {}
            }
        }

        out
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for frappe in frappes_de_la_frame(ctx) {
            match frappe {
                Frappe::Appui(touche) => {
                    self.touche_active = Some(touche);
                    self.appuyer(touche);
                }
                Frappe::Relache => self.touche_active = None,
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
