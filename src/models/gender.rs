use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parses a user's onboarding answer. Case-insensitive, surrounding
    /// whitespace ignored. Anything outside the fixed vocabulary is `None`.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

/// Which partner gender a user wants to be matched with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Male,
    Female,
    Any,
}

impl Preference {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "male" => Some(Preference::Male),
            "female" => Some(Preference::Female),
            "any" => Some(Preference::Any),
            _ => None,
        }
    }

    /// Whether a partner of the given gender satisfies this preference.
    /// An unset gender (open-matching mode) is accepted only by `Any`.
    pub fn accepts(&self, gender: Option<Gender>) -> bool {
        match self {
            Preference::Any => true,
            Preference::Male => gender == Some(Gender::Male),
            Preference::Female => gender == Some(Gender::Female),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Gender::parse("  Female "), Some(Gender::Female));
        assert_eq!(Gender::parse("OTHER"), Some(Gender::Other));
        assert_eq!(Preference::parse("Any"), Some(Preference::Any));
    }

    #[test]
    fn parse_rejects_unknown_words() {
        assert_eq!(Gender::parse("purple"), None);
        assert_eq!(Preference::parse("other"), None);
        assert_eq!(Gender::parse(""), None);
    }

    #[test]
    fn any_accepts_everyone_including_unset() {
        assert!(Preference::Any.accepts(Some(Gender::Male)));
        assert!(Preference::Any.accepts(Some(Gender::Other)));
        assert!(Preference::Any.accepts(None));
    }

    #[test]
    fn narrow_preference_rejects_unset_gender() {
        assert!(Preference::Male.accepts(Some(Gender::Male)));
        assert!(!Preference::Male.accepts(Some(Gender::Female)));
        assert!(!Preference::Female.accepts(None));
    }
}
