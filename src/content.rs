//! Compiled-in portfolio content.
//!
//! Pure data; nothing here has behavior beyond lookups.

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub bio: &'static str,
}

pub struct Job {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub struct Study {
    pub institution: &'static str,
    pub qualification: &'static str,
    pub period: &'static str,
    pub detail: &'static str,
}

pub struct Certificate {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

pub struct TechGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub struct Metric {
    pub value: u32,
    pub label: &'static str,
}

/// Titled problem or solution write-up on a case-study page.
pub struct Narrative {
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
}

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    AppStore,
    PlayStore,
    GitHub,
    Demo,
    Pdf,
    YouTube,
    TikTok,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::AppStore => "App Store",
            LinkKind::PlayStore => "Play Store",
            LinkKind::GitHub => "GitHub",
            LinkKind::Demo => "Live Demo",
            LinkKind::Pdf => "Report",
            LinkKind::YouTube => "YouTube",
            LinkKind::TikTok => "TikTok",
        }
    }
}

pub struct ProjectLink {
    pub kind: LinkKind,
    pub url: &'static str,
}

pub struct Project {
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    /// `0xRRGGBB`
    pub brand_color: u32,
    pub problem: Narrative,
    pub solution: Narrative,
    pub features: &'static [Feature],
    pub additional_features: &'static [&'static str],
    pub stack: &'static [&'static str],
    pub impact: &'static [Metric],
    pub links: &'static [ProjectLink],
}

pub struct ContactLink {
    pub label: &'static str,
    pub value: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Sam Rivera",
    role: "Software Engineer",
    tagline: "Building mobile and web products that people come back to.",
    location: "Cape Town, South Africa",
    bio: "I design and ship full-stack applications, from embedded prototypes to production mobile apps. \
          I care about clear interfaces, fast feedback loops, and products that solve a real problem.",
};

pub const JOBS: &[Job] = &[
    Job {
        company: "MOHARA",
        role: "Software Engineer Intern",
        period: "2024",
        highlights: &[
            "Built role-based access control with distinct permissions for admins, managers and members",
            "Shipped dashboard features end to end, from schema changes to UI",
            "Paired with senior engineers on code review and release planning",
        ],
    },
    Job {
        company: "Moshal Program",
        role: "Career Champion",
        period: "2023 - 2024",
        highlights: &[
            "Ran career workshops for first-year engineering students",
            "Coordinated mentorship pairings across faculties",
        ],
    },
];

pub const STUDIES: &[Study] = &[Study {
    institution: "University of Cape Town",
    qualification: "BSc Computer Science and Computer Engineering",
    period: "2021 - 2024",
    detail: "Focus on software systems, embedded design and machine learning.",
}];

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        name: "AWS Cloud Practitioner",
        issuer: "Amazon Web Services",
        year: "2024",
    },
    Certificate {
        name: "Machine Learning Specialization",
        issuer: "DeepLearning.AI",
        year: "2023",
    },
];

pub const TECH_STACK: &[TechGroup] = &[
    TechGroup {
        category: "Frontend",
        items: &["React", "Next.js", "TypeScript", "Tailwind CSS", "React Native"],
    },
    TechGroup {
        category: "Backend",
        items: &["tRPC", "Node.js", "FastAPI", "Flask"],
    },
    TechGroup {
        category: "Database",
        items: &["PostgreSQL", "MySQL", "Redis"],
    },
    TechGroup {
        category: "Tools",
        items: &["Git", "GitHub", "Docker"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "uni-info-sa",
        name: "Uni Info SA",
        tagline: "An AI-powered South African university advisor",
        brand_color: 0x5AB5E1,
        problem: Narrative {
            title: "Too many universities, too little guidance",
            description: "Prospective students struggle to compare admission requirements across universities.",
            points: &[
                "Requirements differ per institution and faculty",
                "Application deadlines are easy to miss",
                "Bursary information is scattered across many sites",
            ],
        },
        solution: Narrative {
            title: "A conversational admissions advisor",
            description: "A chat assistant that answers admission questions and computes eligibility.",
            points: &[
                "Degree suggestions from subjects and marks",
                "Calendar reminders for every deadline",
                "One searchable bursary list",
            ],
        },
        features: &[
            Feature {
                title: "Program search",
                description: "Filter degrees by faculty, city and entry score.",
            },
            Feature {
                title: "Point-score calculator",
                description: "See eligibility per faculty from your current marks.",
            },
            Feature {
                title: "Saved shortlists",
                description: "Keep a shortlist in sync across devices.",
            },
        ],
        additional_features: &["Community Q&A", "Events", "News feed", "Favourites"],
        stack: &["React Native", "Expo", "Rasa", "Flask", "MySQL", "Docker"],
        impact: &[
            Metric {
                value: 4000,
                label: "Downloads",
            },
            Metric {
                value: 26,
                label: "Universities covered",
            },
        ],
        links: &[
            ProjectLink {
                kind: LinkKind::AppStore,
                url: "https://apps.example.com/uni-info-sa",
            },
            ProjectLink {
                kind: LinkKind::PlayStore,
                url: "https://play.example.com/uni-info-sa",
            },
            ProjectLink {
                kind: LinkKind::YouTube,
                url: "https://video.example.com/uni-info-sa",
            },
        ],
    },
    Project {
        slug: "biki",
        name: "Biki",
        tagline: "Nutrition tracking with barcode scanning",
        brand_color: 0x4CAF50,
        problem: Narrative {
            title: "Food logging is tedious",
            description: "Logging meals by hand is slow enough that most people give up within a week.",
            points: &[
                "Manual entry takes minutes per meal",
                "Local products are missing from most databases",
            ],
        },
        solution: Narrative {
            title: "Scan, snap, done",
            description: "Scan a barcode or snap a photo and get a full macro breakdown in seconds.",
            points: &[
                "Barcode lookup against open food databases",
                "Missing products can be contributed back",
            ],
        },
        features: &[
            Feature {
                title: "Barcode lookup",
                description: "Instant nutrition facts from the product barcode.",
            },
            Feature {
                title: "Photo estimates",
                description: "Rough macros from a photo of the plate.",
            },
            Feature {
                title: "Trends",
                description: "Daily and weekly macro charts.",
            },
        ],
        additional_features: &["Meal history", "Custom goals"],
        stack: &["React Native", "Expo", "FastAPI", "SQLAlchemy", "PostgreSQL"],
        impact: &[Metric {
            value: 100,
            label: "Items contributed to open food data",
        }],
        links: &[
            ProjectLink {
                kind: LinkKind::GitHub,
                url: "https://github.com/example/biki",
            },
            ProjectLink {
                kind: LinkKind::Demo,
                url: "https://biki.example.com",
            },
        ],
    },
    Project {
        slug: "safe-pay",
        name: "SafePay",
        tagline: "Escrow payments for peer-to-peer marketplaces",
        brand_color: 0x6A63F6,
        problem: Narrative {
            title: "Trust on informal marketplaces",
            description: "Buyers and sellers on informal marketplaces have no protection against fraud.",
            points: &["Payment before delivery is a gamble", "Disputes have no referee"],
        },
        solution: Narrative {
            title: "Escrow by default",
            description: "Funds are held in escrow until both parties confirm the hand-over.",
            points: &["Release on mutual confirmation", "Built-in dispute workflow"],
        },
        features: &[
            Feature {
                title: "Escrow wallet",
                description: "Money moves only when both sides agree.",
            },
            Feature {
                title: "Trust scores",
                description: "Ratings built from completed trades.",
            },
        ],
        additional_features: &[],
        stack: &["Next.js", "tRPC", "PostgreSQL"],
        impact: &[Metric {
            value: 1,
            label: "Hackathon win",
        }],
        links: &[ProjectLink {
            kind: LinkKind::GitHub,
            url: "https://github.com/example/safe-pay",
        }],
    },
    Project {
        slug: "sea-clear",
        name: "SeaClear",
        tagline: "Autonomous marine litter detection",
        brand_color: 0x5B9BD5,
        problem: Narrative {
            title: "Surveys that do not scale",
            description: "Underwater litter surveys are manual, expensive and infrequent.",
            points: &["Divers review footage by hand"],
        },
        solution: Narrative {
            title: "Vision on the vehicle",
            description: "An embedded vision pipeline that classifies debris from ROV footage.",
            points: &["Runs on the vehicle", "Exports survey maps"],
        },
        features: &[Feature {
            title: "On-device inference",
            description: "Classification without a network link.",
        }],
        additional_features: &["Survey map export"],
        stack: &["Python", "TensorFlow", "Docker"],
        impact: &[Metric {
            value: 87,
            label: "% Final-year project mark",
        }],
        links: &[
            ProjectLink {
                kind: LinkKind::GitHub,
                url: "https://github.com/example/sea-clear",
            },
            ProjectLink {
                kind: LinkKind::Pdf,
                url: "https://example.com/sea-clear.pdf",
            },
        ],
    },
    Project {
        slug: "grid-smart",
        name: "GridSmart",
        tagline: "Load-shedding aware home energy planning",
        brand_color: 0x1F3A52,
        problem: Narrative {
            title: "Planning around power cuts",
            description: "Households cannot plan appliance use around scheduled power cuts.",
            points: &["Schedules change at short notice"],
        },
        solution: Narrative {
            title: "Forecast-driven reminders",
            description: "Schedules are combined with usage history to suggest when to run heavy loads.",
            points: &["Schedule sync", "Push reminders"],
        },
        features: &[Feature {
            title: "Usage forecasts",
            description: "Predicted load per hour of the day.",
        }],
        additional_features: &[],
        stack: &["React Native", "Node.js", "Redis"],
        impact: &[],
        links: &[],
    },
];

pub const CONTACT: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        value: "hello@example.com",
    },
    ContactLink {
        label: "GitHub",
        value: "github.com/example",
    },
    ContactLink {
        label: "LinkedIn",
        value: "linkedin.com/in/example",
    },
];

pub fn project_by_slug(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_slugs_are_unique() {
        let slugs: HashSet<_> = PROJECTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), PROJECTS.len());
    }

    #[test]
    fn lookup_by_slug() {
        let project = project_by_slug("biki").expect("biki exists");
        assert_eq!(project.name, "Biki");
        assert_eq!(project.links[0].kind.label(), "GitHub");
        assert!(project_by_slug("missing").is_none());
    }

    #[test]
    fn every_project_has_a_story() {
        for project in PROJECTS {
            assert!(!project.problem.title.is_empty(), "{}", project.slug);
            assert!(!project.solution.points.is_empty(), "{}", project.slug);
            assert!(!project.features.is_empty(), "{}", project.slug);
        }
    }
}
