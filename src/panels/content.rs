//! Static copy shown in the overlay panels.
use crate::shapes::ShapeVariant;

pub const CONTACT_EMAIL: &str = "yousef@keyframeglobal.com";

#[derive(Debug)]
pub struct ContactCard {
    pub title: &'static str,
    pub label: &'static str,
    pub display: &'static str,
    pub url: &'static str,
}

impl ContactCard {
    /// Mail links replace the current page; everything else opens a new tab.
    pub fn opens_in_new_tab(&self) -> bool {
        !self.url.starts_with("mailto:")
    }
}

#[derive(Debug)]
pub struct ServiceCard {
    pub title: &'static str,
    pub desc: &'static str,
    pub detail: &'static str,
    /// Spans two grid columns on desktop.
    pub wide: bool,
}

#[derive(Debug)]
pub struct ServiceContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_text: &'static str,
    pub cta_link: &'static str,
    pub cards: [ServiceCard; 4],
}

#[derive(Debug, Clone, Copy)]
pub enum DashboardContent {
    Contact(&'static [ContactCard]),
    Service(&'static ServiceContent),
}

impl DashboardContent {
    pub fn title(&self) -> &'static str {
        match self {
            DashboardContent::Contact(_) => "CONTACT",
            DashboardContent::Service(s) => s.title,
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            DashboardContent::Contact(_) => "INITIATE DIRECT CONNECTION",
            DashboardContent::Service(s) => s.subtitle,
        }
    }
}

pub static CONTACT_CARDS: [ContactCard; 3] = [
    ContactCard {
        title: "EMAIL",
        label: "PROJECTS & INQUIRIES",
        display: CONTACT_EMAIL,
        url: "mailto:yousef@keyframeglobal.com",
    },
    ContactCard {
        title: "SCHEDULER",
        label: "BOOK A FREE CONSULTATION",
        display: "calendly.com/keyframeglobal",
        url: "https://calendly.com/keyframeglobal/30min",
    },
    ContactCard {
        title: "FREELANCER",
        label: "CONNECT PROFESSIONALLY",
        display: "freelancer.com/u/YousefBa",
        url: "https://www.freelancer.com/u/YousefBa/Keyframe-Global",
    },
];

const fn card(title: &'static str, desc: &'static str, detail: &'static str, wide: bool) -> ServiceCard {
    ServiceCard {
        title,
        desc,
        detail,
        wide,
    }
}

static STUDIO: ServiceContent = ServiceContent {
    title: "STUDIO",
    subtitle: "PRODUCTION & VFX",
    cta_text: "START PRODUCTION",
    cta_link: "mailto:yousef@keyframeglobal.com?subject=Inquiry: Studio Services",
    cards: [
        card("Narrative Post", "Story-Driven Editing", "Precision cutting that shapes the narrative arc.", true),
        card("Visual Effects", "Seamless Compositing", "High-fidelity digital enhancements & cleanups.", false),
        card("Color Grading", "Cinematic Finishing", "Distinct color science for mood and impact.", false),
        card("Sound Design", "Immersive Audio", "Sonic texturing that drives emotional response.", true),
    ],
};

static STRATEGY: ServiceContent = ServiceContent {
    title: "STRATEGY",
    subtitle: "GROWTH ARCHITECTURE",
    cta_text: "BUILD STRATEGY",
    cta_link: "mailto:yousef@keyframeglobal.com?subject=Inquiry: Strategy & Growth",
    cards: [
        card("Brand Positioning", "Market Distinction", "Defining your unique voice in the noise.", true),
        card("Content Roadmaps", "Asset Deployment", "Strategic planning for long-term engagement.", false),
        card("Audience Intel", "Data-Driven Insights", "Deep decoding of your target customer base.", false),
        card("Campaign Sprints", "High-Velocity Plans", "Rapid execution frameworks for quick wins.", true),
    ],
};

static DESIGN: ServiceContent = ServiceContent {
    title: "DESIGN",
    subtitle: "VISUAL EVOLUTION",
    cta_text: "START DESIGN",
    cta_link: "mailto:yousef@keyframeglobal.com?subject=Inquiry: Design Project",
    cards: [
        card("Web Architecture", "Interactive Experiences", "Code-driven, responsive digital environments.", true),
        card("Visual Identity", "Brand Systems", "Logo marks and typography that define brands.", false),
        card("UI/UX Prototypes", "User Flow", "Intuitive interfaces designed for conversion.", false),
        card("Motion Graphics", "Kinetic Assets", "Dynamic animation for modern storytelling.", true),
    ],
};

static GLOBAL: ServiceContent = ServiceContent {
    title: "GLOBAL",
    subtitle: "WORLDWIDE NETWORK",
    cta_text: "JOIN NETWORK",
    cta_link: "mailto:yousef@keyframeglobal.com?subject=Inquiry: Global Network",
    cards: [
        card("Remote Scaling", "24/7 Cycles", "Distributed teams for non-stop production.", true),
        card("Localization", "Cultural Adaptation", "Translating assets for regional relevance.", false),
        card("Cloud Workflows", "Zero-Latency", "Instant asset synchronization and delivery.", false),
        card("Staff Augmentation", "Elite Talent", "Injecting vetted experts into your workflow.", true),
    ],
};

pub fn dashboard_for(shape: ShapeVariant) -> DashboardContent {
    match shape {
        ShapeVariant::Idle => DashboardContent::Contact(&CONTACT_CARDS),
        ShapeVariant::Studio => DashboardContent::Service(&STUDIO),
        ShapeVariant::Strategy => DashboardContent::Service(&STRATEGY),
        ShapeVariant::Design => DashboardContent::Service(&DESIGN),
        ShapeVariant::Global => DashboardContent::Service(&GLOBAL),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

#[derive(Debug)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub kind: MediaKind,
    pub desc: &'static str,
    pub accent: [u8; 3],
}

pub static PROJECTS: [Project; 6] = [
    Project {
        title: "NEON RUNNER",
        category: "COMMERCIAL",
        kind: MediaKind::Video,
        desc: "High-octane commercial spot featuring dynamic motion tracking and neon aesthetics.",
        accent: [0xcc, 0xff, 0x00],
    },
    Project {
        title: "APEX ARCHITECTURE",
        category: "WEB DESIGN",
        kind: MediaKind::Image,
        desc: "Minimalist architectural portfolio website with WebGL interactions.",
        accent: [0x00, 0xe0, 0xff],
    },
    Project {
        title: "CYBER BREW",
        category: "BRANDING",
        kind: MediaKind::Image,
        desc: "Complete brand identity for a cyberpunk-themed coffee chain.",
        accent: [0xff, 0x00, 0x55],
    },
    Project {
        title: "VELOCITY 2.0",
        category: "MOTION GRAPHICS",
        kind: MediaKind::Video,
        desc: "Explainer video using 2.5D animation techniques for a tech startup.",
        accent: [0xcc, 0xff, 0x00],
    },
    Project {
        title: "ECHO FASHION",
        category: "CAMPAIGN",
        kind: MediaKind::Video,
        desc: "Social media campaign driving 300% engagement increase.",
        accent: [0x00, 0xe0, 0xff],
    },
    Project {
        title: "ORBITAL TECH",
        category: "UI/UX",
        kind: MediaKind::Image,
        desc: "Dashboard design for a satellite tracking SaaS platform.",
        accent: [0xff, 0x00, 0x55],
    },
];

#[derive(Debug)]
pub struct Client {
    pub name: &'static str,
    pub industry: &'static str,
}

pub static CLIENTS: [Client; 6] = [
    Client { name: "TechNova", industry: "SaaS" },
    Client { name: "Velocorp", industry: "Automotive" },
    Client { name: "Al-Binaa", industry: "Construction" },
    Client { name: "Pure Flow", industry: "Beverage" },
    Client { name: "Jordan Start", industry: "Incubator" },
    Client { name: "Hyperion", industry: "Logistics" },
];

#[derive(Debug)]
pub struct Review {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub static REVIEWS: [Review; 3] = [
    Review {
        text: "Keyframe Global transformed our vague idea into a visual masterpiece. The ROI on the video ad was immediate.",
        author: "Sarah J., CEO of TechNova",
        role: "SERIES A STARTUP",
    },
    Review {
        text: "Professional, sharp, and incredibly fast. They don't just edit; they understand business strategy.",
        author: "Omar K., Marketing Director",
        role: "CORPORATE",
    },
    Review {
        text: "The branding package gave us the credibility we needed to pitch to international investors.",
        author: "Layla M., Founder",
        role: "ECOMMERCE",
    },
];

#[derive(Debug)]
pub struct LegacySection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    /// Highlighted callouts rendered under the paragraphs as `(title, body)`.
    pub callouts: &'static [(&'static str, &'static str)],
}

pub static LEGACY: [LegacySection; 5] = [
    LegacySection {
        heading: "The Corporate Foundation",
        paragraphs: &["KEYFRAME was forged in the high-pressure retail and luxury markets of Qatar. Our strategic approach comes from managing entire brand ecosystems, not just making \"nice posts.\""],
        callouts: &[
            ("Group Marketing Leadership", "Our founder served as Group Marketing Manager for United Village Food (Qatar), orchestrating the strategy for a portfolio including Wooden Bakery, Bun Al Ameed (Al Abed Roastery), and Village Markets."),
            ("Luxury Standards", "We hold a track record of executing high-end visual production for BMW and Maserati, delivering content that meets the strictest global brand guidelines."),
        ],
    },
    LegacySection {
        heading: "Major Infrastructure & Entertainment",
        paragraphs: &["Beyond retail, our history includes managing the digital and visual identity for large-scale logistics and entertainment entities."],
        callouts: &[
            (":: PROJECT 01  Smith's Drive-In Movie Theater", "Spearheaded the digital, website build and visual presence for Smith's Drive-In Movie Theater, California, USA."),
            (":: PROJECT 02  Confidential International Entity", "Retained as a strategic partner for a high-profile international entertainment brand (name withheld under NDA)."),
        ],
    },
    LegacySection {
        heading: "Global Validation",
        paragraphs: &["Our methodology is verified on a global scale. We rank in the Top 3% Worldwide on Freelancer.com with a perfect 5-Star Rating, having delivered complex projects for clients across Qatar, the USA, and Lebanon."],
        callouts: &[],
    },
    LegacySection {
        heading: "The Technical Edge: Data Over Perception",
        paragraphs: &["Trained by National Geographic and Canon experts during his tenure at CNA-Q, our founder developed a disciplined eye for composition, but our agency's unique strength lies in a scientific approach to color."],
        callouts: &[("The Scientific Method", "\"We don't trust our eyes; we trust the data. We build brand identities using precise hexadecimal codes and mathematical color theory.\"")],
    },
    LegacySection {
        heading: "A History of Leadership",
        paragraphs: &[
            "Our standards were developed in an academic environment of excellence. As the former leadership behind the CNA-Q Photography Club, we established a training curriculum that produced national award winners.",
            "That same culture of mentorship and award-winning rigor is the DNA of KEYFRAME. We don't just deliver work; we engineer success.",
        ],
        callouts: &[(":: Art for Impact", "Photography exhibits at CNA-Q sold printed works and directed the proceeds to scholarships for high-GPA students facing financial hardship.")],
    },
];

pub const LEGACY_INTRO: &str = "For KEYFRAME, loyalty is not just a sentiment. It is a business strategy. After more than a decade at the highest levels of the Gulf market, our leadership returned to Jordan to bring \"Global Standards\" directly into the Jordanian industrial sector.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_shows_contact_cards() {
        match dashboard_for(ShapeVariant::Idle) {
            DashboardContent::Contact(cards) => {
                assert_eq!(cards.len(), 3);
                assert!(!cards[0].opens_in_new_tab());
                assert!(cards[1].opens_in_new_tab());
                assert!(cards[2].opens_in_new_tab());
            }
            other => panic!("expected contact cards, got {:?}", other),
        }
    }

    #[test]
    fn every_service_has_four_cards_and_a_mail_cta() {
        for shape in ShapeVariant::SERVICES {
            match dashboard_for(shape) {
                DashboardContent::Service(content) => {
                    assert_eq!(content.title, shape.label());
                    assert!(content.cta_link.starts_with("mailto:"));
                    assert_eq!(content.cards.iter().filter(|c| c.wide).count(), 2);
                }
                other => panic!("{:?} has no service content: {:?}", shape, other),
            }
        }
    }

    #[test]
    fn six_projects() {
        assert_eq!(PROJECTS.len(), 6);
        assert_eq!(PROJECTS.iter().filter(|p| p.kind == MediaKind::Video).count(), 3);
    }
}
