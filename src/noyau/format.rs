// src/noyau/format.rs
//
// Formatage de l'affichage:
// - correction des résultats calculés (borne "entier sûr" + précision)
// - nombre <-> texte (sentinelles ∞ / -∞ / indéfini, -0 normalisé)
// - rendu écran : milliers groupés + partie décimale tronquée
// - palier de taille de police selon la longueur rendue

/// Seuil "entier sûr" IEEE double (2^53 - 1).
pub const SEUIL_ENTIER_SUR: f64 = 9_007_199_254_740_991.0;

/// Précision max d'un résultat calculé (chiffres après le point).
const DECIMALES_RESULTAT: usize = 10;

/// Caractères max de la partie décimale à l'écran.
const DECIMALES_ECRAN: usize = 8;

/// Séparateur de milliers (convention française).
const SEP_MILLIERS: char = ' ';

/* ------------------------ Sentinelles ------------------------ */

pub const INFINI: &str = "∞";
pub const INFINI_NEG: &str = "-∞";
pub const INDEFINI: &str = "indéfini";

fn est_sentinelle(s: &str) -> bool {
    matches!(s, INFINI | INFINI_NEG | INDEFINI)
}

/* ------------------------ Correction des résultats ------------------------ */

/// Corrige un résultat calculé avant affichage:
/// - ±∞ / NaN passent tels quels (l'écran rend leur sentinelle)
/// - magnitude finie au-delà du seuil entier sûr: bornée à ±seuil
/// - plus de 10 chiffres après le point: arrondi à 10
pub fn corrige_resultat(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }

    if x.abs() > SEUIL_ENTIER_SUR {
        return if x > 0.0 {
            SEUIL_ENTIER_SUR
        } else {
            -SEUIL_ENTIER_SUR
        };
    }

    let txt = format!("{x}");
    if let Some(pos) = txt.find('.') {
        if txt.len() - pos - 1 > DECIMALES_RESULTAT {
            let echelle = 10f64.powi(DECIMALES_RESULTAT as i32);
            return (x * echelle).round() / echelle;
        }
    }

    x
}

/* ------------------------ Nombre <-> texte ------------------------ */

/// Rend un nombre en texte d'affichage brut (sans séparateurs).
/// NaN => "indéfini" ; ±∞ => "∞"/"-∞" ; -0 => "0".
pub fn nombre_en_texte(x: f64) -> String {
    if x.is_nan() {
        return INDEFINI.to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { INFINI } else { INFINI_NEG }.to_string();
    }
    if x == 0.0 {
        // évite "-0" (signe sans information)
        return "0".to_string();
    }
    format!("{x}")
}

/// Relit le texte d'affichage brut en nombre. Total: les sentinelles
/// redonnent leur valeur IEEE, tout reste illisible (ex: "-" après ⌫)
/// vaut 0.
pub fn texte_en_nombre(s: &str) -> f64 {
    match s {
        INDEFINI => f64::NAN,
        INFINI => f64::INFINITY,
        INFINI_NEG => f64::NEG_INFINITY,
        _ => s.parse().unwrap_or(0.0),
    }
}

/* ------------------------ Rendu écran ------------------------ */

/// Groupe une suite de chiffres par milliers depuis la droite.
fn grouper_milliers(chiffres: &str) -> String {
    let n = chiffres.chars().count();
    let mut out = String::with_capacity(n + n / 3);

    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(SEP_MILLIERS);
        }
        out.push(c);
    }
    out
}

/// Rendu écran du texte brut:
/// - partie entière groupée par milliers
/// - partie décimale tronquée à 8 caractères
/// - le point saisi reste visible ("7." s'affiche "7.")
/// - les sentinelles passent telles quelles
pub fn formater_affichage(brut: &str) -> String {
    if est_sentinelle(brut) {
        return brut.to_string();
    }

    let (signe, corps) = match brut.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", brut),
    };

    match corps.split_once('.') {
        Some((entier, frac)) => {
            let frac_ecran: String = frac.chars().take(DECIMALES_ECRAN).collect();
            format!("{signe}{}.{frac_ecran}", grouper_milliers(entier))
        }
        None => format!("{signe}{}", grouper_milliers(corps)),
    }
}

/* ------------------------ Palier de taille ------------------------ */

/// Palier discret de taille d'affichage (plus le texte est long,
/// plus la police est petite). Valeur de retour consommée par la vue,
/// jamais un état global.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TailleAffichage {
    Geante,        // longueur <= 8
    Grande,        // 9..=10
    Moyenne,       // 11..=13
    Intermediaire, // 14..=16
    Petite,        // 17..=20
    Minuscule,     // >= 21
}

impl TailleAffichage {
    pub fn depuis_longueur(longueur: usize) -> Self {
        match longueur {
            0..=8 => TailleAffichage::Geante,
            9..=10 => TailleAffichage::Grande,
            11..=13 => TailleAffichage::Moyenne,
            14..=16 => TailleAffichage::Intermediaire,
            17..=20 => TailleAffichage::Petite,
            _ => TailleAffichage::Minuscule,
        }
    }

    /// Taille de police (points) pour la zone d'affichage.
    pub fn en_points(self) -> f32 {
        match self {
            TailleAffichage::Geante => 48.0,
            TailleAffichage::Grande => 35.0,
            TailleAffichage::Moyenne => 28.0,
            TailleAffichage::Intermediaire => 22.0,
            TailleAffichage::Petite => 18.0,
            TailleAffichage::Minuscule => 14.0,
        }
    }
}

/// Palier pour un texte rendu (longueur en caractères, pas en octets).
pub fn taille_pour(texte: &str) -> TailleAffichage {
    TailleAffichage::depuis_longueur(texte.chars().count())
}
