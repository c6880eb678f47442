//! Static site content. Everything the sections render comes from here;
//! nothing is fetched at runtime.

use chrono::NaiveDate;

use crate::engine::gallery::{MediaItem, MediaKind};

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "AI Product Manager",
        company: "TechGiant Inc.",
        quote: "DevConnect has completely transformed how we approach learning and building in tech. The bootcamp is practical yet powerful, allowing participants to create real-world projects with minimal barriers.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "CTO",
        company: "FutureTech Solutions",
        quote: "We explored several tech programs before choosing DevConnect. The difference was clear: the focus on reliability and performance is unmatched. Every session has delivered consistent value for participants.",
        rating: 5,
    },
    Testimonial {
        name: "Jessica Williams",
        role: "Head of Operations",
        company: "Streamline Enterprises",
        quote: "The support team at DevConnect deserves special mention. Whenever participants have questions, the team is responsive and incredibly helpful. It's rare to find this level of mentorship in a bootcamp.",
        rating: 4,
    },
    Testimonial {
        name: "David Rodriguez",
        role: "Lead Developer",
        company: "InnovateAI",
        quote: "As developers, we appreciate the structured curriculum and hands-on approach. DevConnect strikes the perfect balance between guidance and freedom, letting us build projects exactly the way we need.",
        rating: 5,
    },
    Testimonial {
        name: "Emma Thompson",
        role: "Digital Transformation Director",
        company: "Global Retail Group",
        quote: "DevConnect helped us tackle projects we once thought were too complex to solve. Our skills and confidence have grown noticeably since joining the program.",
        rating: 5,
    },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub avatar: &'static str,
    pub twitter: Option<&'static str>,
    pub github: Option<&'static str>,
    pub linkedin: Option<&'static str>,
    pub email: Option<&'static str>,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Adedeji K.",
        role: "Blockchain Developer",
        bio: "Specialized in blockchain development, smart contracts, and decentralized systems.",
        avatar: "https://static.vecteezy.com/system/resources/previews/024/183/502/non_2x/male-avatar-portrait-of-a-young-man-with-a-beard-illustration-of-male-character-in-modern-color-style-vector.jpg",
        twitter: None,
        github: None,
        linkedin: None,
        email: None,
    },
    TeamMember {
        name: "A. Adebayo",
        role: "Lead Developer",
        bio: "Passionate developer driving innovation and growth in Africa's tech ecosystem.",
        avatar: "https://static.vecteezy.com/system/resources/previews/024/183/525/non_2x/avatar-of-a-man-portrait-of-a-young-guy-illustration-of-male-character-in-modern-color-style-vector.jpg",
        twitter: Some("https://twitter.com/dev_bayz"),
        github: Some("https://github.com/Bayzng"),
        linkedin: Some("https://www.linkedin.com/in/abdulakeem-adebayo-678530199"),
        email: Some("meet.bayzng@gmail.com"),
    },
    TeamMember {
        name: "I. Omolara",
        role: "Head of Operations",
        bio: "Leading strategy and execution to drive growth and efficiency across all teams.",
        avatar: "https://t4.ftcdn.net/jpg/09/99/29/97/360_F_999299711_eLb2AXXKyMwRjEkeyPgVFkRVowIJNi2W.jpg",
        twitter: None,
        github: None,
        linkedin: None,
        email: None,
    },
    TeamMember {
        name: "Ella Johnson",
        role: "Event Lead",
        bio: "Driving impactful tech events that connect and inspire communities.",
        avatar: "https://t4.ftcdn.net/jpg/11/66/06/77/360_F_1166067709_2SooAuPWXp20XkGev7oOT7nuK1VThCsN.jpg",
        twitter: None,
        github: None,
        linkedin: None,
        email: None,
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Free,
    Paid,
}

pub struct EventInfo {
    pub name: &'static str,
    pub date: NaiveDate,
    pub time: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub kind: EventKind,
    pub image: &'static str,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid event date")
}

pub fn events() -> Vec<EventInfo> {
    vec![
        EventInfo {
            name: "Tech Conference 2026",
            date: date(2026, 10, 17),
            time: "10:00 AM",
            location: "Kwasu Auditorium",
            description: "Join us for an exciting day of tech talks and networking.",
            kind: EventKind::Free,
            image: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?q=80&w=2071&auto=format&fit=crop",
        },
        EventInfo {
            name: "Founders Happy Hour",
            date: date(2026, 11, 6),
            time: "6:00 PM",
            location: "DevConnect Hub",
            description: "Watch startups pitch their ideas to top investors.",
            kind: EventKind::Paid,
            image: "https://images.unsplash.com/photo-1511578314322-379afb476865?q=80&w=2940&auto=format&fit=crop",
        },
        EventInfo {
            name: "Dev Meetup",
            date: date(2026, 11, 28),
            time: "2:00 PM",
            location: "School Campus",
            description: "Hands-on workshop on building AI models from scratch.",
            kind: EventKind::Free,
            image: "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?q=80&w=2070&auto=format&fit=crop",
        },
    ]
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MilestoneStatus {
    Completed,
    Current,
    Upcoming,
}

impl MilestoneStatus {
    pub fn label(self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "Completed",
            MilestoneStatus::Current => "Current",
            MilestoneStatus::Upcoming => "Upcoming",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "completed",
            MilestoneStatus::Current => "current",
            MilestoneStatus::Upcoming => "upcoming",
        }
    }
}

pub struct Milestone {
    pub quarter: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: MilestoneStatus,
}

pub const ROADMAP: &[Milestone] = &[
    Milestone {
        quarter: "2025 Q4",
        title: "DevConnect Hub",
        description: "Initial launch with core bootcamp sessions and foundational tech workshops.",
        status: MilestoneStatus::Completed,
    },
    Milestone {
        quarter: "2026 Q1",
        title: "Expanded Ecosystem",
        description: "An expanded ecosystem with new workshops and richer learning experiences.",
        status: MilestoneStatus::Completed,
    },
    Milestone {
        quarter: "2026 Q2",
        title: "Tech Event",
        description: "A gathering of developers, innovators, and tech enthusiasts shaping the future of software, Web3, and AI.",
        status: MilestoneStatus::Current,
    },
    Milestone {
        quarter: "2026 Q3",
        title: "Custom Agent Builder",
        description: "Low-code tool for creating specialized agents for unique workflows.",
        status: MilestoneStatus::Upcoming,
    },
    Milestone {
        quarter: "2026 Q4",
        title: "Enterprise Suite",
        description: "Advanced security, compliance, and management features for large organizations.",
        status: MilestoneStatus::Upcoming,
    },
];

pub struct Brand {
    pub name: &'static str,
    pub blurb: &'static str,
}

pub const BRANDS: &[Brand] = &[
    Brand { name: "CryptoFi", blurb: "Advanced AI models and research for autonomous agents." },
    Brand { name: "Metamorphosis", blurb: "Interconnected AI infrastructure for enterprise solutions." },
    Brand { name: "Mizzle", blurb: "Scalable AI deployment systems for global operations." },
    Brand { name: "Palkadot", blurb: "Synthetic data generation for autonomous agent training." },
    Brand { name: "Sandbox", blurb: "Big data processing and analytics for AI systems." },
];

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Active Users", value: "5K+", icon: "👥" },
    Stat { label: "Tasks Automated", value: "10K+", icon: "⚙️" },
    Stat { label: "Onboarded to Web3", value: "10K", icon: "⏱️" },
    Stat { label: "Client Satisfaction", value: "99.8%", icon: "🤝" },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What is DevConnect?",
        answer: "DevConnect is a coding hub and innovation community where individuals can learn software development from beginner to expert level. We also specialize in organizing blockchain events and building strong, engaging tech communities.",
    },
    FaqEntry {
        question: "Who can join DevConnect?",
        answer: "Anyone interested in technology, software development, or blockchain can join DevConnect — whether you're a complete beginner, an experienced developer, or part of a growing tech startup.",
    },
    FaqEntry {
        question: "What does DevConnect offer?",
        answer: "DevConnect offers hands-on coding programs, workshops, and mentorship sessions. We also host blockchain events, community meetups, and developer challenges to help members learn, collaborate, and grow.",
    },
    FaqEntry {
        question: "Does DevConnect support collaborations?",
        answer: "Yes! Collaboration is at the heart of DevConnect. We create opportunities for developers, entrepreneurs, and tech enthusiasts to connect, share ideas, and build impactful projects together.",
    },
    FaqEntry {
        question: "How can I join or register?",
        answer: "You can register easily through our online platform. Simply sign up, choose your program or event, and you're set to begin your DevConnect journey.",
    },
    FaqEntry {
        question: "Is there support for new members?",
        answer: "Absolutely. Our team provides ongoing support, resources, and mentorship to help both new and existing members succeed in their learning and community engagement.",
    },
];

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub long_description: &'static str,
    pub benefits: &'static [&'static str],
    pub steps: &'static [&'static str],
    pub image: &'static str,
    pub gallery: &'static [&'static str],
    pub icon: &'static str,
    pub price: &'static str,
    pub months: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "frontend",
        title: "Frontend Development",
        blurb: "Building responsive, interactive, and user-friendly interfaces.",
        long_description: "At DevConnect Hub, frontend development is more than just code — it's about creating engaging experiences. Learn to craft sleek, responsive, and interactive interfaces that captivate users. With hands-on guidance and modern frameworks, we help you transform your ideas into stunning digital realities.",
        benefits: &[
            "Responsive designs that adapt to all devices",
            "Interactive and dynamic user experiences",
            "Clean, maintainable, and scalable code",
            "Integration with backend and APIs",
        ],
        steps: &[
            "UI/UX planning and wireframing",
            "Frontend architecture and setup",
            "Component development and integration",
            "Testing and deployment",
        ],
        image: "https://images.unsplash.com/photo-1552664730-d307ca884978?q=80&w=2940&auto=format&fit=crop",
        gallery: &[
            "https://images.unsplash.com/photo-1553877522-43269d4ea984?q=80&w=2940&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1556761175-4b46a572b786?q=80&w=2940&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=5304&auto=format&fit=crop",
        ],
        icon: "🖥️",
        price: "300,000",
        months: "3",
    },
    Service {
        id: "backend",
        title: "Backend Development",
        blurb: "Powering applications with secure and scalable backend systems.",
        long_description: "The strength of every great app lies in its backend. At DevConnect Hub, you'll master how to build secure, scalable, and efficient systems. Learn to design APIs, manage databases, and create server-side logic that ensures everything runs smoothly behind the scenes.",
        benefits: &[
            "Secure and optimized databases",
            "Scalable server-side architecture",
            "API design and integration",
            "Authentication and authorization systems",
        ],
        steps: &[
            "System design and architecture planning",
            "Database modeling and integration",
            "API development and testing",
            "Optimization and deployment",
        ],
        image: "https://images.unsplash.com/photo-1528605248644-14dd04022da1?q=80&w=2940&auto=format&fit=crop",
        gallery: &[
            "https://images.unsplash.com/photo-1511632765486-a01980e01a18?q=80&w=2940&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1543269865-cbf427effbad?q=80&w=2940&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1517457373958-b7bdd4587205?q=80&w=2940&auto=format&fit=crop",
        ],
        icon: "🗄️",
        price: "200,000",
        months: "3",
    },
    Service {
        id: "blockchain",
        title: "Blockchain Development",
        blurb: "Building decentralized applications for the future of the web.",
        long_description: "The future is decentralized — and DevConnect Hub is your launchpad. Learn to design and deploy smart contracts, build dApps, and integrate tokens into powerful blockchain solutions. Our training puts you at the heart of Web3 innovation and equips you with the skills to shape tomorrow.",
        benefits: &[
            "Smart contract development and deployment",
            "dApp architecture and integration",
            "Secure wallet and payment solutions",
            "Scalable blockchain infrastructures",
        ],
        steps: &[
            "Define blockchain use case",
            "Smart contract design and testing",
            "dApp frontend integration",
            "Deployment on blockchain networks",
        ],
        image: "https://images.unsplash.com/photo-1515187029135-18ee286d815b?q=80&w=2940&auto=format&fit=crop",
        gallery: &[
            "https://images.unsplash.com/photo-1511578314322-379afb476865?q=80&w=2940&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1540575467063-178a50c2df87?q=80&w=2940&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?q=80&w=2940&auto=format&fit=crop",
        ],
        icon: "⛓️",
        price: "400,000",
        months: "3",
    },
    Service {
        id: "uiux",
        title: "UI/UX Design",
        blurb: "Designing intuitive interfaces that put users first.",
        long_description: "Great products are built on great design. At DevConnect Hub, you'll learn how to create intuitive, user-centered experiences that combine beauty with functionality. From wireframes to prototypes, we guide you in designing digital journeys that feel natural and impactful.",
        benefits: &[
            "User-centered design principles",
            "Interactive wireframes and prototypes",
            "Clean and modern visual design",
            "Improved usability and accessibility",
        ],
        steps: &[
            "User research and journey mapping",
            "Wireframing and prototyping",
            "Visual design and iteration",
            "Usability testing and handoff",
        ],
        image: "https://images.unsplash.com/photo-1586717791821-3f44a563fa4c?q=80&w=2940&auto=format&fit=crop",
        gallery: &[
            "https://images.unsplash.com/photo-1507679799987-c73779587ccf?q=80&w=2071&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1522542550221-31fd19575a2d?q=80&w=2940&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1559028012-481c04fa702d?q=80&w=2936&auto=format&fit=crop",
        ],
        icon: "🎨",
        price: "250,000",
        months: "3",
    },
    Service {
        id: "community",
        title: "Community & Events",
        blurb: "Workshops, meetups, and blockchain events that grow the ecosystem.",
        long_description: "DevConnect is a community first. We organize hands-on workshops, hackathons, and blockchain events that bring developers, founders, and enthusiasts together — spaces where ideas are shared, teams form, and the next generation of builders finds its footing.",
        benefits: &[
            "Regular meetups and developer challenges",
            "Speaker sessions with industry practitioners",
            "Hackathons with real prizes and mentoring",
            "A network that outlasts any single event",
        ],
        steps: &[
            "Join the community platform",
            "Pick the events that fit your track",
            "Build and present with a team",
            "Stay connected through the hub",
        ],
        image: "https://images.unsplash.com/photo-1505373877841-8d25f7d46678?q=80&w=2912&auto=format&fit=crop",
        gallery: &[
            "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?q=80&w=2071&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1540575467063-178a50c2df87?q=80&w=2940&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1475721027785-f74eccf877e2?q=80&w=2940&auto=format&fit=crop",
        ],
        icon: "🎪",
        price: "Free",
        months: "ongoing",
    },
];

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.id == id)
}

pub fn gallery_items() -> Vec<MediaItem> {
    vec![
        MediaItem {
            id: "team-collaboration".to_owned(),
            kind: MediaKind::Image,
            source: "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?q=80&w=2070&auto=format&fit=crop".to_owned(),
            caption: "Team collaboration".to_owned(),
            category: Some("teamwork".to_owned()),
            thumbnail: None,
        },
        MediaItem {
            id: "community-video".to_owned(),
            kind: MediaKind::Video,
            source: "/media/devconnect.mp4".to_owned(),
            caption: "Community highlights".to_owned(),
            category: Some("technology".to_owned()),
            thumbnail: Some("https://images.unsplash.com/photo-1664575599730-0814817939de?q=80&w=2070&auto=format&fit=crop".to_owned()),
        },
        MediaItem {
            id: "team-meeting".to_owned(),
            kind: MediaKind::Image,
            source: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?q=80&w=2071&auto=format&fit=crop".to_owned(),
            caption: "Team meeting".to_owned(),
            category: Some("teamwork".to_owned()),
            thumbnail: None,
        },
        MediaItem {
            id: "business-professional".to_owned(),
            kind: MediaKind::Image,
            source: "https://images.unsplash.com/photo-1507679799987-c73779587ccf?q=80&w=2071&auto=format&fit=crop".to_owned(),
            caption: "Business professional".to_owned(),
            category: Some("business".to_owned()),
            thumbnail: None,
        },
        MediaItem {
            id: "corporate-video".to_owned(),
            kind: MediaKind::Video,
            source: "/media/devconnect.mp4".to_owned(),
            caption: "Corporate showcase".to_owned(),
            category: Some("business".to_owned()),
            thumbnail: Some("https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=2070&auto=format&fit=crop".to_owned()),
        },
        MediaItem {
            id: "vr-headset".to_owned(),
            kind: MediaKind::Image,
            source: "https://images.unsplash.com/photo-1508385082359-f38ae991e8f2?q=80&w=2187&auto=format&fit=crop".to_owned(),
            caption: "Exploring VR".to_owned(),
            category: Some("technology".to_owned()),
            thumbnail: None,
        },
        MediaItem {
            id: "laptop-work".to_owned(),
            kind: MediaKind::Image,
            source: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=5304&auto=format&fit=crop".to_owned(),
            caption: "Deep in the build".to_owned(),
            category: Some("technology".to_owned()),
            thumbnail: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn gallery_ids_are_unique() {
        let items = gallery_items();
        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn service_ids_are_unique_and_resolvable() {
        let ids: HashSet<&str> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
        for service in SERVICES {
            assert!(find_service(service.id).is_some());
        }
        assert!(find_service("nope").is_none());
    }

    #[test]
    fn ratings_fit_the_five_star_scale() {
        for t in TESTIMONIALS {
            assert!(t.rating >= 1 && t.rating <= 5);
        }
    }

    #[test]
    fn video_items_carry_posters() {
        for item in gallery_items() {
            if item.kind == MediaKind::Video {
                assert!(item.thumbnail.is_some());
            }
        }
    }
}
