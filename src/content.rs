//! Copy shown on the page. Everything here is fixed at compile time.

pub const ISSUE_SECTION: &str = "issue";
pub const FEATURES_SECTION: &str = "features";
pub const BEHAVIOR_SECTION: &str = "behavior";
pub const COMMUNITY_SECTION: &str = "community";

/// Accent color of an icon badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Emerald,
    Amber,
    Rose,
    Orange,
    Indigo,
    Red,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Emerald => "tone-emerald",
            Tone::Amber => "tone-amber",
            Tone::Rose => "tone-rose",
            Tone::Orange => "tone-orange",
            Tone::Indigo => "tone-indigo",
            Tone::Red => "tone-red",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub section_id: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

#[derive(Debug, PartialEq)]
pub struct AggressionType {
    pub title: &'static str,
    pub description: &'static str,
    pub solution: &'static str,
    pub glyph: &'static str,
    pub tone: Tone,
}

#[derive(Debug, PartialEq)]
pub struct GuidelineCategory {
    pub category: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct InfoCard {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct AppFeature {
    pub glyph: &'static str,
    pub tone: Tone,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "The Issue", section_id: ISSUE_SECTION },
    NavLink { name: "App Features", section_id: FEATURES_SECTION },
    NavLink { name: "Behavior Guide", section_id: BEHAVIOR_SECTION },
    NavLink { name: "Community", section_id: COMMUNITY_SECTION },
];

pub const AGGRESSION_TYPES: &[AggressionType] = &[
    AggressionType {
        title: "Territorial Aggression",
        description: "Dogs mark territories. Intruders (people or other dogs) may trigger defense. Watch for dogs urinating on vehicles.",
        solution: "Wash marked tires. Use tyre baths with diluted KMnO4 at entry points.",
        glyph: "📍",
        tone: Tone::Emerald,
    },
    AggressionType {
        title: "Fear Aggression",
        description: "Occurs when dogs are startled, threatened, or approached too quickly. Stick-wielding can provoke them.",
        solution: "Don't stare. Don't use sticks to scare. Move slowly and chatter to announce presence.",
        glyph: "⚠",
        tone: Tone::Amber,
    },
    AggressionType {
        title: "Maternal Aggression",
        description: "Nursing mothers are extremely protective of puppies. They may attack if you get too close.",
        solution: "Stay away from nursing mothers and their litters. Respect their space.",
        glyph: "♥",
        tone: Tone::Rose,
    },
    AggressionType {
        title: "Food Aggression",
        description: "Dogs are irritable when hungry or eating. Open food carrying can make you a target.",
        solution: "Never disturb a feeding dog. Avoid carrying food openly in hand.",
        glyph: "🍖",
        tone: Tone::Orange,
    },
    AggressionType {
        title: "Predatory Chase",
        description: "Running triggers a dog's natural chase instinct. Panic creates a dangerous cycle.",
        solution: "Stop running. Stand still or walk calmly. 'Be boring' to the dog.",
        glyph: "⚡",
        tone: Tone::Indigo,
    },
    AggressionType {
        title: "Disease (Rabies)",
        description: "Blank look, drooling, dropped jaw. Unprovoked attacks on inanimate objects.",
        solution: "Stay away immediately. Call the municipality or our Helpline. Do not touch.",
        glyph: "💉",
        tone: Tone::Red,
    },
];

pub const GUIDELINES: &[GuidelineCategory] = &[
    GuidelineCategory {
        category: "For Residents",
        points: &[
            "Cooperate with ABC (Animal Birth Control) dog catchers.",
            "Do not feed stray dogs at random spots; use designated areas.",
            "Segregate waste. Do not throw food leftovers in open drains.",
            "Check under your car before starting; dogs often sleep there.",
            "Avoid running in areas with known dog packs.",
        ],
    },
    GuidelineCategory {
        category: "For Communities (RWAs)",
        points: &[
            "Designate feeding spots away from play areas and senior zones.",
            "Fix feeding times (e.g., 8-9 AM, 5-6 PM) to reduce loitering.",
            "Install dog-proof dustbins to prevent scavenging.",
            "Ensure proper street lighting in dark corners.",
            "Display Dog Helpline numbers prominently.",
        ],
    },
];

pub const LEGAL_FACTS: &[&str] = &[
    "Relocating stray dogs is illegal under Supreme Court directives.",
    "Sterilized dogs must be returned to their original territory.",
    "Feeding animals is a compassionate gesture protected by law, but must be done responsibly.",
    "Cruelty (beating, kicking, starving) is a punishable offense under the PCA Act, 1960.",
];

/// How many legal facts fit on the quick-check card over the features image.
pub const LEGAL_QUICK_CHECK_LEN: usize = 3;

pub fn legal_quick_check() -> &'static [&'static str] {
    &LEGAL_FACTS[..LEGAL_QUICK_CHECK_LEN.min(LEGAL_FACTS.len())]
}

pub const CONFLICT_CAUSES: &[InfoCard] = &[
    InfoCard {
        glyph: "👥",
        title: "Misunderstanding Behavior",
        description: "Many conflicts arise because humans misinterpret a dog's fear or hunger as aggression. Running or using sticks often triggers attacks.",
    },
    InfoCard {
        glyph: "🗑",
        title: "Improper Waste Disposal",
        description: "Open garbage dumps attract stray dogs. Abundant food leads to higher reproduction rates and larger packs in residential areas.",
    },
    InfoCard {
        glyph: "ℹ",
        title: "Lack of Awareness",
        description: "Residents often don't know the legal framework (ABC Rules 2023) or the difference between a pet, a stray, and a feral dog.",
    },
];

pub const APP_FEATURES: &[AppFeature] = &[
    AppFeature {
        glyph: "📞",
        tone: Tone::Red,
        title: "SOS Helpline Button",
        description: "One-touch reporting for dog bites or aggressive packs. Alerts nearby security and the designated \"Colony Caretaker\".",
    },
    AppFeature {
        glyph: "📍",
        tone: Tone::Emerald,
        title: "Designated Feeding Maps",
        description: "Locate approved feeding spots away from play areas. Coordinate feeding times to prevent conflict.",
    },
    AppFeature {
        glyph: "🛡",
        tone: Tone::Indigo,
        title: "ABC Program Tracker",
        description: "Track sterilization status of community dogs. Help dog catchers identify unsterilized dogs.",
    },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Resources",
        links: &["ABC Rules 2023", "AWBI Website", "Emergency Contacts", "Legal Rights"],
    },
    FooterColumn {
        heading: "Company",
        links: &["About Us", "Careers", "Privacy Policy", "Contact"],
    },
];

pub const SOCIAL_LINKS: &[&str] = &["Twitter", "LinkedIn", "Instagram"];

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?auto=format&fit=crop&q=80&w=1000";
pub const FEATURES_IMAGE: &str =
    "https://images.unsplash.com/photo-1577563908411-5077b6dc7624?auto=format&fit=crop&q=80&w=1000";
pub const COMMUNITY_IMAGE: &str =
    "https://images.unsplash.com/photo-1558929996-da64ba858215?auto=format&fit=crop&q=80&w=1500";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn aggression_table_has_six_complete_entries() {
        assert_eq!(AGGRESSION_TYPES.len(), 6);
        for item in AGGRESSION_TYPES {
            assert!(!item.title.trim().is_empty());
            assert!(!item.description.trim().is_empty(), "{}", item.title);
            assert!(!item.solution.trim().is_empty(), "{}", item.title);
            assert!(!item.glyph.is_empty(), "{}", item.title);
        }
    }

    #[test]
    fn guideline_table_has_two_categories_with_points() {
        assert_eq!(GUIDELINES.len(), 2);
        assert_eq!(GUIDELINES[0].category, "For Residents");
        assert_eq!(GUIDELINES[1].category, "For Communities (RWAs)");
        for section in GUIDELINES {
            assert_eq!(section.points.len(), 5, "{}", section.category);
            assert!(section.points.iter().all(|p| !p.trim().is_empty()));
        }
    }

    #[test]
    fn quick_check_shows_first_three_legal_facts() {
        assert_eq!(LEGAL_FACTS.len(), 4);
        assert!(LEGAL_FACTS.iter().all(|f| !f.trim().is_empty()));
        assert_eq!(legal_quick_check(), &LEGAL_FACTS[..3]);
    }

    #[test]
    fn nav_links_point_at_distinct_sections() {
        let ids: HashSet<_> = NAV_LINKS.iter().map(|l| l.section_id).collect();
        assert_eq!(NAV_LINKS.len(), 4);
        assert_eq!(
            ids,
            HashSet::from([ISSUE_SECTION, FEATURES_SECTION, BEHAVIOR_SECTION, COMMUNITY_SECTION])
        );
        assert_eq!(NAV_LINKS[0].href(), "#issue");
    }

    #[test]
    fn secondary_tables_are_filled() {
        assert_eq!(CONFLICT_CAUSES.len(), 3);
        assert_eq!(APP_FEATURES.len(), 3);
        assert_eq!(SOCIAL_LINKS.len(), 3);
        assert_eq!(FOOTER_COLUMNS.len(), 2);
        for column in FOOTER_COLUMNS {
            assert_eq!(column.links.len(), 4, "{}", column.heading);
        }
    }

    #[test]
    fn tones_map_to_distinct_classes() {
        let tones = [Tone::Emerald, Tone::Amber, Tone::Rose, Tone::Orange, Tone::Indigo, Tone::Red];
        let classes: HashSet<_> = tones.iter().map(|t| t.class()).collect();
        assert_eq!(classes.len(), tones.len());
    }
}
