//! Locale selection and landing-page copy.
//!
//! The public site lives under `/{locale}`. Unknown segments render English
//! rather than a 404 so shared links with stale locales still land somewhere.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    /// Parse a route segment (`en`, `fr-CA`, ...). Region suffixes are ignored.
    pub fn from_segment(segment: &str) -> Option<Self> {
        let lang = segment.split(['-', '_']).next().unwrap_or_default();
        match lang.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    pub fn resolve(segment: Option<&str>) -> Self {
        segment.and_then(Self::from_segment).unwrap_or_default()
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    pub fn home_path(self) -> String {
        format!("/{}", self.code())
    }

    pub fn copy(self) -> &'static LandingCopy {
        match self {
            Self::En => &EN,
            Self::Fr => &FR,
        }
    }
}

/// Every string shown on the landing page.
#[derive(Debug)]
pub struct LandingCopy {
    pub nav_services: &'static str,
    pub nav_how: &'static str,
    pub nav_join: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,
    pub services_title: &'static str,
    pub services: [(&'static str, &'static str); 4],
    pub how_title: &'static str,
    pub steps: [(&'static str, &'static str); 3],
    pub cta_title: &'static str,
    pub cta_body: &'static str,
    pub cta_button: &'static str,
    pub footer: &'static str,
}

static EN: LandingCopy = LandingCopy {
    nav_services: "Services",
    nav_how: "How it works",
    nav_join: "Become a pro",
    hero_title: "Home repairs, handled.",
    hero_subtitle: "Book vetted local pros for plumbing, electrical, painting and more. Upfront prices, guaranteed work.",
    hero_cta: "Book a repair",
    services_title: "Popular services",
    services: [
        ("Plumbing", "Leaks, clogs, water heaters and fixture installs."),
        ("Electrical", "Outlets, lighting, panels and safety checks."),
        ("Painting", "Interior and exterior, one room or the whole house."),
        ("Handyman", "Mounting, assembly and the small jobs that pile up."),
    ],
    how_title: "How it works",
    steps: [
        ("Describe the job", "Tell us what needs fixing and when suits you."),
        ("Get matched", "We pair you with a rated pro near you."),
        ("Pay when it's done", "Release payment only once you're happy."),
    ],
    cta_title: "Are you a tradesperson?",
    cta_body: "Join the marketplace and fill your calendar with local jobs.",
    cta_button: "Apply now",
    footer: "HomeFix. All rights reserved.",
};

static FR: LandingCopy = LandingCopy {
    nav_services: "Services",
    nav_how: "Comment ça marche",
    nav_join: "Devenir pro",
    hero_title: "Vos réparations, on s'en occupe.",
    hero_subtitle: "Réservez des pros locaux vérifiés pour la plomberie, l'électricité, la peinture et plus. Prix clairs, travail garanti.",
    hero_cta: "Réserver une réparation",
    services_title: "Services populaires",
    services: [
        ("Plomberie", "Fuites, bouchons, chauffe-eau et installations."),
        ("Électricité", "Prises, éclairage, tableaux et contrôles de sécurité."),
        ("Peinture", "Intérieur et extérieur, une pièce ou toute la maison."),
        ("Bricolage", "Fixations, montage et tous les petits travaux."),
    ],
    how_title: "Comment ça marche",
    steps: [
        ("Décrivez le besoin", "Dites-nous quoi réparer et quand."),
        ("Trouvez votre pro", "Nous vous associons à un pro noté près de chez vous."),
        ("Payez à la fin", "Le paiement n'est libéré qu'une fois satisfait."),
    ],
    cta_title: "Vous êtes artisan ?",
    cta_body: "Rejoignez la plateforme et remplissez votre agenda de chantiers locaux.",
    cta_button: "Postuler",
    footer: "HomeFix. Tous droits réservés.",
};
