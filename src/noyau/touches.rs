// src/noyau/touches.rs

/// Opérateur binaire du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Symbole affiché sur le bouton correspondant.
    pub fn symbole(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "−",
            Op::Mul => "×",
            Op::Div => "÷",
        }
    }
}

/// Action logique produite par une touche (clavier ou bouton).
///
/// C'est le vocabulaire complet que le moteur accepte; la vue ne fait
/// que traduire ses clics en `Touche`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char), // garanti '0'..='9' par construction
    Decimale,
    Op(Op),
    Egal,
    Clear,
    Del,
    Negation,
    Pourcent,
}

impl Touche {
    /// Étiquette du bouton sur le pavé.
    pub fn etiquette(self) -> String {
        match self {
            Touche::Chiffre(c) => c.to_string(),
            Touche::Decimale => ".".to_string(),
            Touche::Op(op) => op.symbole().to_string(),
            Touche::Egal => "=".to_string(),
            Touche::Clear => "AC".to_string(),
            Touche::Del => "⌫".to_string(),
            Touche::Negation => "+/-".to_string(),
            Touche::Pourcent => "%".to_string(),
        }
    }
}

/// Traduit un nom de touche brut en action logique.
///
/// Contrat:
/// - zéro ou une action par touche; `None` pour tout ce qui n'est pas reconnu
///   (aucun changement d'état, le comportement par défaut reste intact)
/// - alias: `*`, `x`, `×` => Mul ; `/`, `÷` => Div ; `=`, `Enter` => Egal ;
///   `Escape` => Clear ; `Backspace`, `Delete` => Del
/// - `+/-` n'a pas de touche clavier (bouton seulement)
pub fn depuis_clavier(nom: &str) -> Option<Touche> {
    match nom {
        "." => Some(Touche::Decimale),

        "+" => Some(Touche::Op(Op::Add)),
        "-" => Some(Touche::Op(Op::Sub)),
        "*" | "x" | "×" => Some(Touche::Op(Op::Mul)),
        "/" | "÷" => Some(Touche::Op(Op::Div)),

        "=" | "Enter" => Some(Touche::Egal),

        "Escape" => Some(Touche::Clear),
        "Backspace" | "Delete" => Some(Touche::Del),

        "%" => Some(Touche::Pourcent),

        _ => {
            // Chiffres 0..9 : exactement un caractère ASCII
            let mut it = nom.chars();
            match (it.next(), it.next()) {
                (Some(c), None) if c.is_ascii_digit() => Some(Touche::Chiffre(c)),
                _ => None,
            }
        }
    }
}
