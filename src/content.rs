use chrono::{DateTime, Datelike};

/// Navigation targets. Every variant maps to exactly one element id on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    Skills,
    About,
    Experience,
    Education,
    Projects,
    Languages,
    Contact,
}

impl Anchor {
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::Skills => "skills",
            Anchor::About => "about",
            Anchor::Experience => "experience",
            Anchor::Education => "education",
            Anchor::Projects => "projects",
            Anchor::Languages => "languages",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Id of the section wrapping every timeline entry. Not a nav target.
pub const TIMELINE_SECTION_ID: &str = "timeline";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Anchor,
}

pub static NAV_LINKS: [NavLink; 8] = [
    NavLink {
        label: "Home",
        target: Anchor::Home,
    },
    NavLink {
        label: "Compétences",
        target: Anchor::Skills,
    },
    NavLink {
        label: "À propos",
        target: Anchor::About,
    },
    NavLink {
        label: "Expérience",
        target: Anchor::Experience,
    },
    NavLink {
        label: "Formation",
        target: Anchor::Education,
    },
    NavLink {
        label: "Projets",
        target: Anchor::Projects,
    },
    NavLink {
        label: "Langues",
        target: Anchor::Languages,
    },
    NavLink {
        label: "Contact",
        target: Anchor::Contact,
    },
];

/// Which half of the center line a card sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Left cards hug the center line, so their text is right-aligned.
    pub fn card_class(self) -> &'static str {
        match self {
            Side::Left => "ml-0 mr-auto text-right",
            Side::Right => "ml-auto mr-0 text-left",
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            Side::Left => "right-[-10px]",
            Side::Right => "left-[-10px]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillLeaf {
    pub title: &'static str,
    pub description: &'static str,
    pub side: Side,
}

pub static SKILLS: [SkillLeaf; 4] = [
    SkillLeaf {
        title: "Langages",
        description: "Python, Java, C, PHP, JS, Kotlin",
        side: Side::Left,
    },
    SkillLeaf {
        title: "Web & Mobile",
        description: "HTML, CSS, React, RN, PowerApps",
        side: Side::Right,
    },
    SkillLeaf {
        title: "Base de données",
        description: "SQL, Firebase, REST API",
        side: Side::Left,
    },
    SkillLeaf {
        title: "Outils",
        description: "Git, Postman, Power BI",
        side: Side::Right,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub flag: &'static str,
    pub name: &'static str,
    pub level: &'static str,
    /// 0..=100
    pub percent: u8,
}

impl Language {
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.percent.min(100))
    }
}

pub static LANGUAGES: [Language; 4] = [
    Language {
        flag: "🇫🇷",
        name: "Français",
        level: "Natif",
        percent: 100,
    },
    Language {
        flag: "🇬🇧",
        name: "Anglais",
        level: "TOEIC 920",
        percent: 90,
    },
    Language {
        flag: "🇩🇪",
        name: "Allemand",
        level: "Limité",
        percent: 40,
    },
    Language {
        flag: "🇪🇸",
        name: "Espagnol",
        level: "Notions",
        percent: 30,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Professional,
    Education,
}

impl EntryKind {
    /// The nav anchor carried by the first timeline entry of this kind.
    pub fn anchor(self) -> Anchor {
        match self {
            EntryKind::Professional => Anchor::Experience,
            EntryKind::Education => Anchor::Education,
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            EntryKind::Professional => "bg-indigo-50 border-l-4 border-indigo-400",
            EntryKind::Education => "bg-green-50 border-l-4 border-green-400",
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            EntryKind::Professional => "bg-indigo-500",
            EntryKind::Education => "bg-green-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub kind: EntryKind,
    pub title: &'static str,
    pub place: &'static str,
    pub date: &'static str,
    pub items: &'static [&'static str],
    pub side: Side,
}

pub static TIMELINE: [TimelineEntry; 6] = [
    TimelineEntry {
        kind: EntryKind::Professional,
        title: "Développeur d’applications",
        place: "Emerson GRISS SA",
        date: "2024 – 2025",
        items: &[
            "Développement Power Apps",
            "Digitalisation qualité",
            "Maintenance corrective",
        ],
        side: Side::Right,
    },
    TimelineEntry {
        kind: EntryKind::Education,
        title: "EIL Côte d’Opale",
        place: "Ingénieur Informatique",
        date: "2020 – 2025",
        items: &[
            "Développement fullstack",
            "Méthodologie Agile",
            "Gestion de projet",
        ],
        side: Side::Right,
    },
    TimelineEntry {
        kind: EntryKind::Professional,
        title: "Assistant Ingénieur",
        place: "Emerson GRISS SA",
        date: "2024",
        items: &["Application Power Apps", "Suivi qualité automatisé"],
        side: Side::Left,
    },
    TimelineEntry {
        kind: EntryKind::Education,
        title: "Politechnika Opolska",
        place: "Mobilité Erasmus",
        date: "2024",
        items: &["Projets internationaux", "Culture numérique"],
        side: Side::Right,
    },
    TimelineEntry {
        kind: EntryKind::Professional,
        title: "Développeur Informatique",
        place: "Ascometal",
        date: "2022",
        items: &["Optimisation production", "Outil ligne interne"],
        side: Side::Left,
    },
    TimelineEntry {
        kind: EntryKind::Education,
        title: "Lycée Jean Bart",
        place: "Bac Scientifique",
        date: "2017 – 2020",
        items: &["Maths", "Physique", "Spé NSI"],
        side: Side::Left,
    },
];

/// The anchor id for the entry at `index`, if it is the first of its kind.
pub fn timeline_anchor(entries: &[TimelineEntry], index: usize) -> Option<&'static str> {
    let kind = entries.get(index)?.kind;
    let first = entries.iter().position(|e| e.kind == kind)?;
    (first == index).then(|| kind.anchor().id())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

pub static PROJECTS: [Project; 6] = [
    Project {
        title: "Distributeur Automatique",
        description: "Arduino + capteurs pour nourrir un animal. Détection de présence et planification horaire.",
        tech: &["Arduino", "C", "Electronique"],
    },
    Project {
        title: "E-commerce React",
        description: "Boutique responsive avec panier, filtres, et intégration d'une API produit.",
        tech: &["React", "Tailwind", "FakeStore API"],
    },
    Project {
        title: "Tic Tac Toe IA",
        description: "Jeu de morpion avec intelligence artificielle (Minimax).",
        tech: &["JavaScript", "IA", "Algorithmie"],
    },
    Project {
        title: "Application Power Apps",
        description: "Développement pour Emerson : gestion qualité et process internes.",
        tech: &["Power Apps", "Dataverse", "UX"],
    },
    Project {
        title: "Culture Géo Kotlin",
        description: "Application Android avec quiz interactifs et système de progression.",
        tech: &["Kotlin", "Jetpack Compose", "SQLite"],
    },
    Project {
        title: "Dashboard Power BI",
        description: "Visualisation de données industrielles. Indicateurs dynamiques et KPI qualité.",
        tech: &["Power BI", "SQL", "Excel"],
    },
];

pub struct Profile {
    pub name: &'static str,
    pub first_name: &'static str,
    pub job_title: &'static str,
    pub tagline: &'static str,
    pub typed: &'static [&'static str],
    pub availability: &'static str,
    pub about: &'static str,
    pub face_image: &'static str,
    pub about_image: &'static str,
    pub cv_path: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Florian Beyen",
    first_name: "Florian",
    job_title: "Ingénieur informatique",
    tagline: "Ingénieur informatique passionné par le design produit, l’UX/UI, et le développement web & mobile.",
    typed: &[
        "Je crée des applications.",
        "Je conçois des interfaces modernes.",
        "Je développe des solutions performantes.",
    ],
    availability: "Disponible pour une offre d'emploi à partir de Septembre 2025.",
    about: "Diplômé en ingénierie informatique, passionné par les technologies numériques, curieux, autonome et motivé à relever de nouveaux défis. Fort de plusieurs expériences en développement d'applications et projets techniques, je cherche à évoluer dans un environnement stimulant.",
    face_image: "/florian_face.jpeg",
    about_image: "/florian.png",
    cv_path: "/cv.pdf",
};

const FALLBACK_YEAR: i32 = 2025;

/// Year of the build, taken from the `BUILD_TIME` stamp written by build.rs.
pub fn copyright_year() -> i32 {
    year_of(env!("BUILD_TIME"))
}

fn year_of(timestamp: &str) -> i32 {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.year())
        .unwrap_or(FALLBACK_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_links_are_unique() {
        let targets = NAV_LINKS.iter().map(|l| l.target).collect::<HashSet<_>>();
        assert_eq!(targets.len(), NAV_LINKS.len());
        let ids = NAV_LINKS
            .iter()
            .map(|l| l.target.id())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), NAV_LINKS.len());
        assert!(!ids.contains(TIMELINE_SECTION_ID));
    }

    #[test]
    fn test_nav_link_order() {
        let labels = NAV_LINKS.iter().map(|l| l.label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec![
                "Home",
                "Compétences",
                "À propos",
                "Expérience",
                "Formation",
                "Projets",
                "Langues",
                "Contact"
            ]
        );
        assert_eq!(Anchor::Languages.href(), "#languages");
    }

    #[test]
    fn test_language_bar_widths() {
        let widths = LANGUAGES.iter().map(|l| l.bar_style()).collect::<Vec<_>>();
        assert_eq!(
            widths,
            vec!["width: 100%", "width: 90%", "width: 40%", "width: 30%"]
        );
        let over = Language {
            flag: "",
            name: "",
            level: "",
            percent: 250,
        };
        assert_eq!(over.bar_style(), "width: 100%");
    }

    #[test]
    fn test_timeline_anchors_first_of_kind() {
        let anchors = (0..TIMELINE.len())
            .map(|i| timeline_anchor(&TIMELINE, i))
            .collect::<Vec<_>>();
        assert_eq!(
            anchors,
            vec![
                Some("experience"),
                Some("education"),
                None,
                None,
                None,
                None
            ]
        );
        assert_eq!(timeline_anchor(&TIMELINE, TIMELINE.len()), None);
        assert_eq!(timeline_anchor(&[], 0), None);
    }

    #[test]
    fn test_side_classes() {
        assert_eq!(Side::Left.card_class(), "ml-0 mr-auto text-right");
        assert_eq!(Side::Right.dot_class(), "left-[-10px]");
        assert!(EntryKind::Professional.card_class().contains("indigo"));
        assert!(EntryKind::Education.dot_class().contains("green"));
    }

    #[test]
    fn test_static_counts() {
        assert_eq!(SKILLS.len(), 4);
        assert_eq!(LANGUAGES.len(), 4);
        assert_eq!(TIMELINE.len(), 6);
        assert_eq!(PROJECTS.len(), 6);
        assert!(PROJECTS.iter().all(|p| p.tech.len() == 3));
    }

    #[test]
    fn test_copyright_year() {
        assert_eq!(year_of("2026-03-01T12:00:00+00:00"), 2026);
        assert_eq!(year_of("not a timestamp"), FALLBACK_YEAR);
        assert!(copyright_year() >= FALLBACK_YEAR);
    }
}
