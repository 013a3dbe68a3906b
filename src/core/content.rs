//! Static site content
//!
//! Slide lists, section anchors and the card data rendered by the landing
//! page. Everything here is fixed at compile time; image paths are resolved
//! against the `public/` assets directory.

use derive_more::Display;

use crate::core::counter::CounterLabel;
use crate::core::rotator::ResponsiveSlides;

const UPLOADS: &str = "/lovable-uploads";

/// Anchors of the scrollable page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SectionId {
    #[display("team")]
    Team,
    #[display("research")]
    Research,
    #[display("courses")]
    Courses,
    #[display("slbail")]
    Slbail,
    #[display("news")]
    News,
    #[display("services")]
    Services,
    #[display("advisors")]
    Advisors,
    #[display("success-stories")]
    SuccessStories,
}

/// What a navigation entry does when chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Section(SectionId),
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Label in the desktop header
    pub label: &'static str,
    /// Label in the full-screen mobile menu
    pub mobile_label: &'static str,
    pub target: NavTarget,
}

pub const NAV_ITEMS: [NavItem; 9] = [
    NavItem { label: "Our Team", mobile_label: "Our Team", target: NavTarget::Section(SectionId::Team) },
    NavItem { label: "Research", mobile_label: "Research Areas", target: NavTarget::Section(SectionId::Research) },
    NavItem { label: "Our Academy", mobile_label: "Our Academy", target: NavTarget::Section(SectionId::Courses) },
    NavItem { label: "SLBAIL", mobile_label: "SLBAIL", target: NavTarget::Section(SectionId::Slbail) },
    NavItem { label: "News", mobile_label: "Latest News & Updates", target: NavTarget::Section(SectionId::News) },
    NavItem { label: "Our Services", mobile_label: "Our Services", target: NavTarget::Section(SectionId::Services) },
    NavItem { label: "Contact Us", mobile_label: "Contact Us", target: NavTarget::Contact },
    NavItem { label: "Our Advisors", mobile_label: "Our Advisors", target: NavTarget::Section(SectionId::Advisors) },
    NavItem { label: "Success Stories", mobile_label: "Success Stories", target: NavTarget::Section(SectionId::SuccessStories) },
];

/// Footer quick links
pub const QUICK_LINKS: [(&str, SectionId); 4] = [
    ("Our Team", SectionId::Team),
    ("Research", SectionId::Research),
    ("Courses", SectionId::Courses),
    ("Services", SectionId::Services),
];

pub const PROGRAMS: [&str; 4] = [
    "Certificate Courses",
    "Workshops",
    "Research Projects",
    "Collaborations",
];

pub const CONTACT_EMAIL: &str = "info@bioinformatics.lk";
pub const CONTACT_PHONES: [&str; 2] = ["0765617680", "0775297815"];
pub const COMMUNITY_URL: &str = "https://chat.whatsapp.com/Dpa932BSJiE6cAWUTsQuI0";
pub const SHOWCASE_VIDEO_URL: &str = "https://player.vimeo.com/video/1089037562?badge=0&autopause=0&player_id=0&app_id=58479&autoplay=1&muted=1&loop=1&background=1";
pub const LOGO_PATH: &str = "/lovable-uploads/new_logo_insilico.png";
pub const PARTNERS_IMAGE: &str = "/lovable-uploads/Partners.jpg";

/// Hero statistics: label and target
pub const COUNTER_TARGETS: [(CounterLabel, u32); 4] = [
    (CounterLabel::Courses, 6),
    (CounterLabel::Students, 10),
    (CounterLabel::Projects, 5),
    (CounterLabel::Partnerships, 5),
];

/// An image slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub src: &'static str,
    pub alt: &'static str,
}

const fn slide(src: &'static str, alt: &'static str) -> Slide {
    Slide { src, alt }
}

const TEAM_PHOTOS_WIDE: [Slide; 5] = [
    slide("/lovable-uploads/Photo 01.jpg", "Team photo 1"),
    slide("/lovable-uploads/Photo 03.jpg", "Team photo 3"),
    slide("/lovable-uploads/Photo 04.jpg", "Team photo 4"),
    slide("/lovable-uploads/Photo 06.jpg", "Team photo 6"),
    slide("/lovable-uploads/Photo 09.jpg", "Team photo 9"),
];

const TEAM_PHOTOS_NARROW: [Slide; 9] = [
    slide("/lovable-uploads/Photo 01.jpg", "Team photo 1"),
    slide("/lovable-uploads/Photo 02.jpg", "Team photo 2"),
    slide("/lovable-uploads/Photo 03.jpg", "Team photo 3"),
    slide("/lovable-uploads/Photo 04.jpg", "Team photo 4"),
    slide("/lovable-uploads/Photo 05.jpg", "Team photo 5"),
    slide("/lovable-uploads/Photo 06.jpg", "Team photo 6"),
    slide("/lovable-uploads/Photo 07.jpg", "Team photo 7"),
    slide("/lovable-uploads/Photo 08.jpg", "Team photo 8"),
    slide("/lovable-uploads/Photo 09.jpg", "Team photo 9"),
];

/// "Be a Part of the Future" carousel; phones get the longer list
pub const TEAM_PHOTOS: ResponsiveSlides<Slide> =
    ResponsiveSlides::new(&TEAM_PHOTOS_WIDE, &TEAM_PHOTOS_NARROW);

/// Academy rotator slides
pub const ACADEMY_SLIDES: [Slide; 4] = [
    slide("/lovable-uploads/Our academy 01.jpg", "Our Academy - Learning Environment"),
    slide("/lovable-uploads/Our academy 02.jpg", "Our Academy - Research Facilities"),
    slide("/lovable-uploads/Photo 11.jpg", "Bioinformatics Research"),
    slide("/lovable-uploads/Photo 10.jpg", "Drug Discovery Process"),
];

pub const SLBAIL_BACKDROP: &str = "/lovable-uploads/Photo 12.jpg";

/// Title plus long-form text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub title: &'static str,
    pub description: &'static str,
}

/// "What We Offer" accordion panels
pub const OFFER_TOPICS: [Topic; 4] = [
    Topic {
        title: "Expert Education and Valid Certificates",
        description: "Gain access to world-class education guided by domain experts. Our programs are designed to equip you with in-demand skills and award internationally recognized certifications that validate your expertise in bioinformatics and related disciplines.",
    },
    Topic {
        title: "Research Publications",
        description: "We open doors to the scientific world by offering opportunities to:\n\n• Publish your research in reputed international journals\n• Present at global conferences\n• Collaborate on cutting-edge research projects in bioinformatics, cheminformatics, and drug discovery.",
    },
    Topic {
        title: "Internship Opportunities",
        description: "Work on real-world open-source projects that matter. We connect you with:\n\n• Global research teams\n• Drug discovery collaborations\n• Hands-on projects that build both your academic and industry portfolios",
    },
    Topic {
        title: "Startup Support & Innovation Ecosystem",
        description: "At Insilico.lk, we are cultivating Sri Lanka's first bioinformatics startup ecosystem. We empower students and researchers to:\n\n• Turn innovative ideas into marketable products or services\n• Receive mentorship, networking, and funding guidance\n• Launch their own bioinformatics startups from idea to impact",
    },
];

/// Research areas with their flagship project
pub const RESEARCH_AREAS: [Topic; 3] = [
    Topic {
        title: "Bioinformatics",
        description: "Identification of Active Compounds in Sri Lankan Medicinal Plants as Antivirals Against African Swine Fever",
    },
    Topic {
        title: "Cheminformatics",
        description: "Development of globally accessible comprehensive database with an AI-integrated web platform cataloging endemic medicinal plants with detailed information.",
    },
    Topic {
        title: "AI-driven Drug Discovery",
        description: "Discovery of Antiviral Compounds from Sri Lankan Medicinal Plants and Deep Learning Based De Novo Design and Bioactivity Prediction of Natural-Product-Inspired Inhibitors Against Livestock and Aquaculture Viral Diseases.",
    },
];

pub const SERVICES: [Topic; 6] = [
    Topic {
        title: "Network Pharmacology",
        description: "Network Pharmacology is a cutting-edge approach integrating systems biology and pharmacology to understand drug actions and interactions at a network level. It helps identify key targets, predict drug efficacy, and uncover new therapeutic pathways.",
    },
    Topic {
        title: "Molecular Docking",
        description: "Molecular Docking is a computational technique that predicts the preferred orientation of a small molecule (ligand) when bound to a target protein (receptor). It helps in drug discovery by estimating binding affinity and identifying potential drug candidates.",
    },
    Topic {
        title: "Molecular Dynamics Simulation",
        description: "Molecular Dynamics (MD) Simulation is a computational method that models the physical movements of atoms and molecules over time, helping to understand biomolecular behavior, stability, and interactions at the atomic level.",
    },
    Topic {
        title: "AI and ML in Drug Discovery",
        description: "Artificial Intelligence (AI) and Machine Learning (ML) accelerate drug discovery by analyzing vast datasets to predict drug-target interactions, optimize lead compounds, and identify novel candidates more efficiently than traditional methods.",
    },
    Topic {
        title: "Research Article Writing",
        description: "Professional research article writing involves crafting scientifically accurate, clear, and well-structured manuscripts for publication in peer-reviewed journals. This includes literature review, data interpretation, and formatting to journal standards.",
    },
    Topic {
        title: "Drug Formulation Development",
        description: "Drug Formulation Development involves designing and producing stable, effective, and safe pharmaceutical formulations, optimizing drug delivery, dosage form, and bioavailability to meet therapeutic needs.",
    },
];

/// A slide of the SLBAIL lab carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabTopic {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// Gradient classes for the title badge
    pub color: &'static str,
}

pub const LAB_TOPICS: [LabTopic; 4] = [
    LabTopic {
        id: "ai-agents",
        title: "AI Agents",
        description: "Advanced artificial intelligence systems for automated research and analysis. Explore cutting-edge AI technologies for drug discovery and computational biology.",
        image: "/lovable-uploads/slbail01.png",
        color: "from-purple-600 to-blue-600",
    },
    LabTopic {
        id: "bioinformatics",
        title: "Bioinformatics and Cheminformatics",
        description: "Computational analysis of biological and chemical data for drug discovery. Integrate molecular biology with computational methods.",
        image: "/lovable-uploads/slbail02.png",
        color: "from-blue-600 to-cyan-600",
    },
    LabTopic {
        id: "computational-chemistry",
        title: "Computational Chemistry",
        description: "Molecular modeling and simulation for chemical research and development. Advanced computational techniques for molecular analysis.",
        image: "/lovable-uploads/slbail03.png",
        color: "from-cyan-600 to-teal-600",
    },
    LabTopic {
        id: "cmpaat-database",
        title: "CMPAAT Botanical Database",
        description: "Comprehensive database of medicinal plants and their therapeutic properties. Access extensive botanical and pharmacological data.",
        image: "/lovable-uploads/slbail04.png",
        color: "from-teal-600 to-green-600",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub qualification: &'static str,
    pub image: &'static str,
    pub url: &'static str,
}

pub const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Dr. Lakmal Ranathunga",
        qualification: "PhD in Veterinary Medicine",
        image: "/lovable-uploads/99dec8fe-51c3-46ea-af63-6bd557692e29.png",
        url: "https://agri.pdn.ac.lk/ansc/staff/academic_staff_detail/35",
    },
    TeamMember {
        name: "Mrs. Saumya Poorni",
        qualification: "PhD in Aquaculture (Reading)",
        image: "/lovable-uploads/a0ce1ac5-e01f-4cc3-a67a-42a5bc885eda.png",
        url: "https://www.linkedin.com/in/saumya-poorni-73009a314/",
    },
    TeamMember {
        name: "Mr. Anuththara Gamage",
        qualification: "B.Sc Honours, Lead Engineering Scientist at Standard Seed Corporation",
        image: "/lovable-uploads/b42b66f6-f7c5-4932-af71-ccf28ed41fbf.png",
        url: "https://www.linkedin.com/in/anu-gamage-62192b201/",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisor {
    pub name: &'static str,
    /// May be empty
    pub title: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub image: &'static str,
}

pub const ADVISORS: [Advisor; 6] = [
    Advisor {
        name: "Dr. Lakmal Ranathunga",
        title: "Lecturer/Entrepreneur/Researcher",
        experience: "10+ years of experience in Bioinformatics and Virology",
        education: "PhD CNU South Korea",
        image: "/lovable-uploads/CNU.png",
    },
    Advisor {
        name: "Dr. Sul Sharif",
        title: "Computer Scientist/Organic Chemist/CSO and co-founder of SSC",
        experience: "10+ years of experience in Cheminformatics and Artificial Intelligence",
        education: "PhD UMB U.S.A",
        image: "/lovable-uploads/UMB.png",
    },
    Advisor {
        name: "Dr. Pabasara Kalansooriya",
        title: "Senior Lecturer/Researcher",
        experience: "10+ years of experience in Medicinal Chemistry",
        education: "PhD UQ Australia",
        image: "/lovable-uploads/UQ.png",
    },
    Advisor {
        name: "Dr. Paween Mahinthichaichan",
        title: "Former FDA/Researcher",
        experience: "10+ years of experience in Biophysics",
        education: "PhD UI U.S.A",
        image: "/lovable-uploads/UI.png",
    },
    Advisor {
        name: "Mr. Nishan Karassik",
        title: "CIO and founder of Phylos Bioscience",
        experience: "10+ years of experience in Biotech entrepreneurship",
        education: "Bsc UO U.S.A",
        image: "/lovable-uploads/UO.png",
    },
    Advisor {
        name: "Dr. Sisira Amarasinghe",
        title: "",
        experience: "10+ years of experience in Information Systems",
        education: "PhD UM U.S.A",
        image: "/lovable-uploads/UM.png",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const NEWS: [NewsItem; 3] = [
    NewsItem {
        title: "Our Student's Achievement in the Graphical Abstract Competition 2024",
        description: "This course in Bioinformatics was helpful for our student in becoming the second runner-up in the graphical abstract competition at the Faculty of Agriculture Undergraduate Research Symposium 2024.",
        image: "/lovable-uploads/99cc8013-24dd-4850-bb4a-f02ad8490859.png",
    },
    NewsItem {
        title: "Outstanding Poster Presentation Award at ICIET 2024",
        description: "We are excited to share that our student secured first place for Outstanding Poster Presentation at the International Conference on Innovation and Emerging Technologies (ICIET) held at the Faculty of Technology, University of Sri Jayawardenapura, on the 21st and 22nd of November 2024.",
        image: "/lovable-uploads/dce54d2b-edfc-4cf2-ae59-e84b70adfc14.png",
    },
    NewsItem {
        title: "Research Collaboration Announced",
        description: "Partnership with local and international institutions to advance bioinformatics research capabilities.",
        image: "/lovable-uploads/84227a92-d6f9-4c5c-9a93-d1233db16dfc.png",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub name: &'static str,
    pub role: &'static str,
    pub testimonial: &'static str,
    pub image: &'static str,
}

pub const SUCCESS_STORIES: [Story; 3] = [
    Story {
        name: "Saumya Poorni",
        role: "PhD Student",
        testimonial: "The bioinformatics course transformed my research approach. The practical skills I gained have been invaluable in my PhD work.",
        image: "/lovable-uploads/78dd8c5b-2728-4fb3-b89b-94b50424e57f.png",
    },
    Story {
        name: "Kasuni Karunarathne",
        role: "Demonstrator at UoP",
        testimonial: "This course in Bioinformatics was helpful in becoming the second runner-up in the graphical abstract competition at the Faculty of Agriculture Undergraduate Research Symposium 2024.",
        image: "/lovable-uploads/c68aaa61-6fe8-4e0f-90ef-ec26edcaf4c6.png",
    },
    Story {
        name: "Dharani Ariyasinghe",
        role: "Research Student",
        testimonial: "A beginner course in Bioinformatics changed my vision in drug discovery and opened new pathways in my career.",
        image: "/lovable-uploads/bd937a38-24e6-4ada-8518-99144be047af.png",
    },
];

/// A step of the academy learning journey
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStage {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const COURSE_PIPELINE: [PipelineStage; 5] = [
    PipelineStage {
        title: "Core Foundations",
        summary: "Molecular biology, programming and statistics for life scientists",
    },
    PipelineStage {
        title: "Bioinformatics",
        summary: "Sequence analysis, genomics and proteomics workflows",
    },
    PipelineStage {
        title: "Cheminformatics",
        summary: "Molecular descriptors, docking and virtual screening",
    },
    PipelineStage {
        title: "Computational Biology",
        summary: "Molecular dynamics, network pharmacology and modelling",
    },
    PipelineStage {
        title: "AI in Life Sciences",
        summary: "Machine learning for drug discovery and SDG-aligned team projects",
    },
];

/// Whether `path` points into the uploaded assets folder
pub fn is_upload(path: &str) -> bool {
    path.starts_with(UPLOADS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_ids_match_anchors() {
        assert_eq!(SectionId::SuccessStories.to_string(), "success-stories");
        assert_eq!(SectionId::Courses.to_string(), "courses");
    }

    #[test]
    fn test_nav_covers_every_section_once() {
        let sections: Vec<SectionId> = NAV_ITEMS
            .iter()
            .filter_map(|item| match item.target {
                NavTarget::Section(id) => Some(id),
                NavTarget::Contact => None,
            })
            .collect();
        let unique: HashSet<SectionId> = sections.iter().copied().collect();

        assert_eq!(sections.len(), 8);
        assert_eq!(unique.len(), 8);
        assert_eq!(
            NAV_ITEMS.iter().filter(|i| i.target == NavTarget::Contact).count(),
            1
        );
    }

    #[test]
    fn test_team_photo_lists_by_viewport() {
        assert_eq!(TEAM_PHOTOS.select(false).len(), 5);
        assert_eq!(TEAM_PHOTOS.select(true).len(), 9);
    }

    #[test]
    fn test_every_image_is_an_upload() {
        let images = TEAM_PHOTOS
            .select(true)
            .iter()
            .chain(TEAM_PHOTOS.select(false))
            .chain(ACADEMY_SLIDES.iter())
            .map(|s| s.src)
            .chain(LAB_TOPICS.iter().map(|t| t.image))
            .chain(TEAM.iter().map(|m| m.image))
            .chain(ADVISORS.iter().map(|a| a.image))
            .chain(NEWS.iter().map(|n| n.image))
            .chain(SUCCESS_STORIES.iter().map(|s| s.image))
            .chain([LOGO_PATH, PARTNERS_IMAGE, SLBAIL_BACKDROP]);

        for image in images {
            assert!(is_upload(image), "{image}");
        }
    }

    #[test]
    fn test_accordion_has_four_topics() {
        assert_eq!(OFFER_TOPICS.len(), 4);
        assert!(OFFER_TOPICS.iter().all(|t| !t.description.is_empty()));
    }

    #[test]
    fn test_counter_targets_match_site_defaults() {
        let set = crate::core::counter::CounterSet::new(COUNTER_TARGETS);

        assert_eq!(set, crate::core::counter::CounterSet::site_defaults());
    }
}
