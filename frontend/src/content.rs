//! Copy and mock data shown on the page.

/// Accent colours from the stylesheet palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Pink,
    Blue,
    Green,
    Purple,
    Orange,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Pink => "accent-pink",
            Accent::Blue => "accent-blue",
            Accent::Green => "accent-green",
            Accent::Purple => "accent-purple",
            Accent::Orange => "accent-orange",
        }
    }
}

pub struct NavItem {
    pub label: &'static str,
    pub id: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", id: "home" },
    NavItem { label: "About", id: "about" },
    NavItem { label: "Skills", id: "skills" },
    NavItem { label: "Experience", id: "experience" },
    NavItem { label: "Projects", id: "projects" },
    NavItem { label: "Contact", id: "contact" },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: "https://github.com" },
    SocialLink { label: "LinkedIn", href: "https://linkedin.com" },
    SocialLink { label: "X", href: "https://x.com" },
    SocialLink { label: "Dribbble", href: "https://dribbble.com" },
];

pub const OWNER_NAME: &str = "Anushka Kumari";
pub const OWNER_TITLE: &str = "Creative Developer";

pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Clean Code",
        description: "Writing maintainable, scalable code with best practices",
        accent: Accent::Pink,
    },
    Highlight {
        title: "Creative Design",
        description: "Crafting beautiful interfaces that engage users",
        accent: Accent::Blue,
    },
    Highlight {
        title: "Performance",
        description: "Optimizing for speed and seamless experiences",
        accent: Accent::Green,
    },
    Highlight {
        title: "Dedication",
        description: "Passionate about continuous learning and growth",
        accent: Accent::Purple,
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

pub const STATS: &[Stat] = &[
    Stat { value: "5+", label: "Years Experience", accent: Accent::Pink },
    Stat { value: "50+", label: "Projects Completed", accent: Accent::Blue },
    Stat { value: "30+", label: "Happy Clients", accent: Accent::Purple },
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub accent: Accent,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        accent: Accent::Pink,
        skills: &[
            Skill { name: "Yew", level: 95 },
            Skill { name: "TypeScript", level: 90 },
            Skill { name: "WebAssembly", level: 88 },
            Skill { name: "Canvas & WebGL", level: 82 },
            Skill { name: "CSS", level: 95 },
        ],
    },
    SkillCategory {
        title: "Backend",
        accent: Accent::Blue,
        skills: &[
            Skill { name: "Rust", level: 88 },
            Skill { name: "Axum", level: 85 },
            Skill { name: "PostgreSQL", level: 80 },
            Skill { name: "GraphQL", level: 75 },
            Skill { name: "REST APIs", level: 92 },
        ],
    },
    SkillCategory {
        title: "Tools & DevOps",
        accent: Accent::Green,
        skills: &[
            Skill { name: "Git", level: 90 },
            Skill { name: "Docker", level: 78 },
            Skill { name: "AWS", level: 72 },
            Skill { name: "CI/CD", level: 80 },
            Skill { name: "Figma", level: 85 },
        ],
    },
    SkillCategory {
        title: "Other",
        accent: Accent::Purple,
        skills: &[
            Skill { name: "Python", level: 75 },
            Skill { name: "WebGL", level: 70 },
            Skill { name: "Testing", level: 82 },
            Skill { name: "Agile", level: 88 },
            Skill { name: "UI/UX", level: 78 },
        ],
    },
];

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub accent: Accent,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        role: "Senior Frontend Developer",
        company: "TechCorp Inc.",
        location: "San Francisco, CA",
        period: "2022 - Present",
        description: "Leading the frontend team, architecting scalable web applications and building canvas animations. Reduced load time by 40% through performance work.",
        tech_stack: &["Rust", "Yew", "WebAssembly", "GraphQL", "AWS"],
        accent: Accent::Pink,
    },
    Experience {
        role: "Full Stack Developer",
        company: "StartupHub",
        location: "New York, NY",
        period: "2020 - 2022",
        description: "Built and maintained several web applications from scratch alongside designers and product managers. Set up CI/CD pipelines and automated testing.",
        tech_stack: &["Axum", "Diesel", "PostgreSQL", "Docker", "Tailwind"],
        accent: Accent::Blue,
    },
    Experience {
        role: "Frontend Developer",
        company: "Digital Agency",
        location: "Los Angeles, CA",
        period: "2019 - 2020",
        description: "Developed responsive web applications for clients across industries, with a focus on accessible interfaces and smooth interactions.",
        tech_stack: &["TypeScript", "JavaScript", "SCSS", "Redux", "Figma"],
        accent: Accent::Purple,
    },
    Experience {
        role: "Junior Developer",
        company: "WebDev Studios",
        location: "Remote",
        period: "2018 - 2019",
        description: "Started out building websites and learning modern web technologies in an agile team.",
        tech_stack: &["HTML", "CSS", "JavaScript", "jQuery", "WordPress"],
        accent: Accent::Green,
    },
];

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub accent: Accent,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Master of Computer Science",
        institution: "Stanford University",
        period: "2016 - 2018",
        description: "Specialized in Human-Computer Interaction and Web Technologies. Thesis on immersive web experiences using WebGL.",
        achievements: &["GPA: 3.9/4.0", "Dean's List", "Research Assistant"],
        accent: Accent::Pink,
    },
    Education {
        degree: "Bachelor of Science in Software Engineering",
        institution: "MIT",
        period: "2012 - 2016",
        description: "Foundation in software development, algorithms and system design. Regular at hackathons and coding competitions.",
        achievements: &["Magna Cum Laude", "ACM Member", "Hackathon Winner"],
        accent: Accent::Blue,
    },
];

pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification { name: "AWS Solutions Architect", issuer: "Amazon Web Services", year: "2023" },
    Certification { name: "Google Cloud Professional", issuer: "Google", year: "2022" },
    Certification { name: "Rust Advanced Concepts", issuer: "Ferrous Systems", year: "2021" },
    Certification { name: "TypeScript Master", issuer: "Microsoft", year: "2020" },
];

pub struct ProjectStats {
    pub stars: u32,
    pub forks: u32,
    pub views: u32,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub demo_url: &'static str,
    pub repo_url: &'static str,
    pub tech_stack: &'static [&'static str],
    pub stats: ProjectStats,
    pub featured: bool,
    pub accent: Accent,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "3D Portfolio Experience",
        description: "An immersive portfolio with interactive 3D elements, particle animations and smooth transitions.",
        image: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=600&fit=crop",
        demo_url: "https://example.com",
        repo_url: "https://github.com",
        tech_stack: &["Rust", "Yew", "Canvas", "WebAssembly"],
        stats: ProjectStats { stars: 234, forks: 45, views: 1200 },
        featured: true,
        accent: Accent::Pink,
    },
    Project {
        title: "AI Chat Application",
        description: "Real-time AI chat with natural language processing, voice commands and multi-language support.",
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&h=600&fit=crop",
        demo_url: "https://example.com",
        repo_url: "https://github.com",
        tech_stack: &["Axum", "OpenAI", "WebSocket", "Tailwind"],
        stats: ProjectStats { stars: 189, forks: 32, views: 890 },
        featured: true,
        accent: Accent::Blue,
    },
    Project {
        title: "E-commerce Platform",
        description: "Full-stack shop with real-time inventory, secure payments and an admin dashboard.",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&h=600&fit=crop",
        demo_url: "https://example.com",
        repo_url: "https://github.com",
        tech_stack: &["Yew", "Axum", "Stripe", "PostgreSQL"],
        stats: ProjectStats { stars: 156, forks: 28, views: 670 },
        featured: false,
        accent: Accent::Purple,
    },
    Project {
        title: "Task Management App",
        description: "Collaborative task board with live updates and drag-and-drop.",
        image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=800&h=600&fit=crop",
        demo_url: "https://example.com",
        repo_url: "https://github.com",
        tech_stack: &["Leptos", "SQLite", "Tokio"],
        stats: ProjectStats { stars: 112, forks: 19, views: 450 },
        featured: false,
        accent: Accent::Green,
    },
    Project {
        title: "Weather Dashboard",
        description: "Weather dashboard with interactive maps, 7-day forecasts and location alerts.",
        image: "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b?w=800&h=600&fit=crop",
        demo_url: "https://example.com",
        repo_url: "https://github.com",
        tech_stack: &["Vue.js", "OpenWeather API", "Chart.js", "Leaflet"],
        stats: ProjectStats { stars: 98, forks: 15, views: 380 },
        featured: false,
        accent: Accent::Orange,
    },
    Project {
        title: "Music Streaming App",
        description: "Music streaming with playlists, audio visualization and social features.",
        image: "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=800&h=600&fit=crop",
        demo_url: "https://example.com",
        repo_url: "https://github.com",
        tech_stack: &["React Native", "Node.js", "MongoDB", "AWS S3"],
        stats: ProjectStats { stars: 145, forks: 24, views: 560 },
        featured: false,
        accent: Accent::Pink,
    },
];

pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo { label: "Email", value: "hello@example.com", href: Some("mailto:hello@example.com") },
    ContactInfo { label: "Phone", value: "+1 (555) 123-4567", href: Some("tel:+15551234567") },
    ContactInfo { label: "Location", value: "San Francisco, CA", href: None },
];
