use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::error::KeyError;

/// Display locales supported by the console front end, selected by
/// explicit key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    Ar,
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Fr => &FR,
            Locale::Ar => &AR,
            Locale::En => &EN,
        }
    }
}

impl FromStr for Locale {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fr" => Ok(Locale::Fr),
            "ar" => Ok(Locale::Ar),
            "en" => Ok(Locale::En),
            other => Err(KeyError::ConfigError {
                field: "locale".to_string(),
                reason: format!("unknown locale '{}', expected fr, ar or en", other),
            }),
        }
    }
}

pub struct Labels {
    pub title: &'static str,
    pub prompt: &'static str,
    pub account: &'static str,
    pub key_ccp: &'static str,
    pub key_rip: &'static str,
    pub full_rip: &'static str,
    pub no_result: &'static str,
    pub hint_empty: &'static str,
    pub hint_too_long: &'static str,
    pub hint_digits_only: &'static str,
    pub notice: &'static str,
}

static FR: Labels = Labels {
    title: "Calculateur de numéro CCP (Algérie Poste)",
    prompt: "Numéro CCP (chiffres uniquement)",
    account: "Numéro CCP",
    key_ccp: "Clé CCP",
    key_rip: "Clé RIP",
    full_rip: "RIP complet",
    no_result: "—",
    hint_empty: "Saisissez un numéro de compte",
    hint_too_long: "Saisissez au plus 10 chiffres",
    hint_digits_only: "Chiffres uniquement",
    notice: "Important : cette calculatrice n'a aucun lien officiel avec Algérie Poste ou avec une entité officielle.",
};

static AR: Labels = Labels {
    title: "حاسبة رقم CCP (بريد الجزائر)",
    prompt: "رقم CCP (أرقام فقط)",
    account: "رقم CCP",
    key_ccp: "مفتاح CCP",
    key_rip: "مفتاح RIP",
    full_rip: "RIP كامل",
    no_result: "—",
    hint_empty: "أدخل رقم الحساب",
    hint_too_long: "أدخل 10 أرقام كحد أقصى",
    hint_digits_only: "أرقام فقط",
    notice: "مهم: هذه الحاسبة لا علاقة رسمية لها ببريد الجزائر أو أي جهة رسمية أخرى.",
};

static EN: Labels = Labels {
    title: "CCP Number Calculator (Algeria Poste)",
    prompt: "CCP number (digits only)",
    account: "CCP number",
    key_ccp: "CCP key",
    key_rip: "RIP key",
    full_rip: "Complete RIP",
    no_result: "—",
    hint_empty: "Enter an account number",
    hint_too_long: "Enter at most 10 digits",
    hint_digits_only: "Digits only",
    notice: "Important: this calculator has no official relationship with Algeria Poste or any official entity.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("fr".parse::<Locale>().unwrap(), Locale::Fr);
        assert_eq!("AR".parse::<Locale>().unwrap(), Locale::Ar);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_each_locale_has_its_own_labels() {
        assert_ne!(Locale::Fr.labels().title, Locale::En.labels().title);
        assert_ne!(Locale::Ar.labels().title, Locale::En.labels().title);
        assert_eq!(Locale::default(), Locale::Fr);
    }
}
