// src/app/vue.rs
//
// Vue (UI egui) - natif + web
// ---------------------------
// Objectifs :
// - écran sombre, texte à droite, taille adaptée à la longueur rendue
// - pavé 4 colonnes x 5 lignes, zéro double largeur
// - trois familles de couleurs: fonctions / chiffres / opérateurs
// - surbrillance: touche_active (clavier seulement; les clics ont
//   déjà le retour visuel des boutons egui)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Op, Touche};

/* ------------------------ Géométrie ------------------------ */

const LARGEUR_BOUTON: f32 = 64.0;
const HAUTEUR_BOUTON: f32 = 56.0;
const ESPACEMENT: f32 = 4.0;
const HAUTEUR_ECRAN: f32 = 88.0;

fn largeur_pave() -> f32 {
    4.0 * LARGEUR_BOUTON + 3.0 * ESPACEMENT
}

/* ------------------------ Couleurs ------------------------ */

const FOND_ECRAN: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);

const FOND_FONCTION: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);
const FOND_FONCTION_ACTIF: egui::Color32 = egui::Color32::from_rgb(209, 213, 219);

const FOND_CHIFFRE: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);
const FOND_CHIFFRE_ACTIF: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);

const FOND_OPERATEUR: egui::Color32 = egui::Color32::from_rgb(249, 115, 22);
const FOND_OPERATEUR_ACTIF: egui::Color32 = egui::Color32::from_rgb(251, 146, 60);

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        self.ui_ecran(ui);
        ui.add_space(2.0);
        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let texte = self.texte_affiche();
        let points = self.taille_affichage().en_points();

        egui::Frame::group(ui.style())
            .fill(FOND_ECRAN)
            .show(ui, |ui| {
                ui.set_min_width(largeur_pave());
                ui.set_min_height(HAUTEUR_ECRAN);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(texte)
                            .monospace()
                            .size(points)
                            .color(egui::Color32::WHITE),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let chiffre = Touche::Chiffre;

        self.ligne(
            ui,
            [
                Touche::Clear,
                Touche::Negation,
                Touche::Pourcent,
                Touche::Op(Op::Div),
            ],
        );
        self.ligne(ui, [chiffre('7'), chiffre('8'), chiffre('9'), Touche::Op(Op::Mul)]);
        self.ligne(ui, [chiffre('4'), chiffre('5'), chiffre('6'), Touche::Op(Op::Sub)]);
        self.ligne(ui, [chiffre('1'), chiffre('2'), chiffre('3'), Touche::Op(Op::Add)]);

        // dernière ligne : zéro double largeur
        ui.horizontal(|ui| {
            self.bouton(ui, chiffre('0'), LARGEUR_BOUTON * 2.0 + ESPACEMENT);
            self.bouton(ui, Touche::Decimale, LARGEUR_BOUTON);
            self.bouton(ui, Touche::Egal, LARGEUR_BOUTON);
        });
    }

    fn ligne(&mut self, ui: &mut egui::Ui, touches: [Touche; 4]) {
        ui.horizontal(|ui| {
            for t in touches {
                self.bouton(ui, t, LARGEUR_BOUTON);
            }
        });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche, largeur: f32) {
        let genre = Genre::pour(touche);
        let actif = self.touche_active == Some(touche);

        let resp = ui.add_sized(
            [largeur, HAUTEUR_BOUTON],
            egui::Button::new(
                egui::RichText::new(touche.etiquette())
                    .size(20.0)
                    .color(genre.texte()),
            )
            .fill(genre.fond(actif)),
        );

        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}

/// Famille visuelle d'une touche (détermine fond + couleur du texte).
#[derive(Clone, Copy, Debug)]
enum Genre {
    Fonction,
    Chiffre,
    Operateur,
}

impl Genre {
    fn pour(touche: Touche) -> Self {
        match touche {
            Touche::Clear | Touche::Negation | Touche::Pourcent | Touche::Del => Genre::Fonction,
            Touche::Chiffre(_) | Touche::Decimale => Genre::Chiffre,
            Touche::Op(_) | Touche::Egal => Genre::Operateur,
        }
    }

    fn fond(self, actif: bool) -> egui::Color32 {
        match (self, actif) {
            (Genre::Fonction, false) => FOND_FONCTION,
            (Genre::Fonction, true) => FOND_FONCTION_ACTIF,
            (Genre::Chiffre, false) => FOND_CHIFFRE,
            (Genre::Chiffre, true) => FOND_CHIFFRE_ACTIF,
            (Genre::Operateur, false) => FOND_OPERATEUR,
            (Genre::Operateur, true) => FOND_OPERATEUR_ACTIF,
        }
    }

    fn texte(self) -> egui::Color32 {
        match self {
            Genre::Fonction => egui::Color32::BLACK,
            Genre::Chiffre | Genre::Operateur => egui::Color32::WHITE,
        }
    }
}
