//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter l'état du moteur + la surbrillance transitoire de touche.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par le noyau.
//! - La surbrillance est purement visuelle, aucun effet sur le calcul.
//! - État créé au montage du widget, muté en place à chaque action,
//!   détruit au démontage. Aucune persistance.

use crate::noyau::{formater_affichage, taille_pour, EtatCalc, TailleAffichage, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    /// État du moteur (noyau).
    pub etat: EtatCalc,

    /// Touche en surbrillance (frappe clavier). Posée à l'appui,
    /// levée au relâchement. Les clics gardent le retour visuel egui.
    pub touche_active: Option<Touche>,
}

impl AppCalc {
    /// Applique une touche (bouton ou clavier) au moteur.
    pub fn appuyer(&mut self, touche: Touche) {
        self.etat.appliquer(touche);
    }

    /// Texte rendu pour l'écran (milliers groupés, décimales tronquées).
    pub fn texte_affiche(&self) -> String {
        formater_affichage(&self.etat.affichage)
    }

    /// Palier de taille pour le texte rendu.
    pub fn taille_affichage(&self) -> TailleAffichage {
        taille_pour(&self.texte_affiche())
    }
}
