/// In-page anchors, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::About => "#about",
            Section::Skills => "#skills",
            Section::Projects => "#projects",
            Section::Contact => "#contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GitHub,
    LinkedIn,
    Twitter,
    Email,
    Phone,
    Location,
    ExternalLink,
    Heart,
    React,
    TypeScript,
    JavaScript,
    NodeJs,
    Tailwind,
    Git,
    Docker,
    MongoDb,
}

impl Icon {
    /// Icon font class. Brand logos come from devicon, glyphs from the
    /// site's own `extra-*` set in `input.css`.
    pub fn css_class(self) -> &'static str {
        match self {
            Icon::GitHub => "devicon-github-plain",
            Icon::LinkedIn => "devicon-linkedin-plain",
            Icon::Twitter => "devicon-twitter-original",
            Icon::Email => "extra-email",
            Icon::Phone => "extra-phone",
            Icon::Location => "extra-location",
            Icon::ExternalLink => "extra-external",
            Icon::Heart => "extra-heart",
            Icon::React => "devicon-react-original",
            Icon::TypeScript => "devicon-typescript-plain",
            Icon::JavaScript => "devicon-javascript-plain",
            Icon::NodeJs => "devicon-nodejs-plain",
            Icon::Tailwind => "devicon-tailwindcss-original",
            Icon::Git => "devicon-git-plain",
            Icon::Docker => "devicon-docker-plain",
            Icon::MongoDb => "devicon-mongodb-plain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub url: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
    /// Proficiency as a percentage.
    pub level: Option<u8>,
    pub color: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub source_url: &'static str,
    pub live_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub pitch: &'static str,
    pub bio: &'static str,
    pub photo: &'static str,
    pub resume: &'static str,
    pub more_projects_url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Ali Elgazzar",
    title: "Frontend Engineer",
    pitch: "I build beautiful, responsive, and user-friendly web applications using modern technologies like React, TypeScript, and Node.js.",
    bio: "Front-End Software Engineer with professional experience in designing and developing dynamic, responsive web applications using React.js, TypeScript, JavaScript, and modern UI frameworks. Proficient in translating business requirements into intuitive user experiences, optimizing application performance, and ensuring cross-browser compatibility. Strong collaborator in agile environments, with a focus on clean code, scalability, and user-centric design. Eager to continuously grow full-stack development skills and contribute to impactful software solutions.",
    photo: "/me.jpg",
    resume: "/resume.pdf",
    more_projects_url: "https://github.com/AliElgazzar",
};

pub const HERO_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::GitHub,
        url: "https://github.com/AliElgazzar",
        label: "GitHub",
    },
    SocialLink {
        icon: Icon::LinkedIn,
        url: "https://www.linkedin.com/in/ali-elgazzar-1b853221a/",
        label: "LinkedIn",
    },
];

pub const FOOTER_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::GitHub,
        url: "https://github.com/AliElgazzar",
        label: "GitHub",
    },
    SocialLink {
        icon: Icon::LinkedIn,
        url: "https://www.linkedin.com/in/ali-elgazzar-1b853221a/",
        label: "LinkedIn",
    },
    SocialLink {
        icon: Icon::Twitter,
        url: "https://twitter.com/AliElgazzar",
        label: "Twitter",
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Master's Degree in Computer Science",
        school: "Maharishi International University",
        period: "2024-2026",
    },
    Education {
        degree: "Bachelor's Degree in Mechatronics Engineering",
        school: "Benha University",
        period: "2017-2022",
    },
];

pub const EXPERIENCE: &[Job] = &[Job {
    role: "Front-end Engineer",
    company: "Enozom Software",
    period: "2022-2024",
    highlights: &[
        "Developed responsive web apps with React, TypeScript, and Tailwind CSS.",
        "Led front-end development for microservice-based features.",
        "Designed and built reusable, modular UI components.",
        "Improved front-end performance via lazy loading and code splitting.",
    ],
}];

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "React",
        icon: Icon::React,
        level: Some(90),
        color: Some("#61DAFB"),
    },
    Skill {
        name: "TypeScript",
        icon: Icon::TypeScript,
        level: Some(85),
        color: Some("#3178C6"),
    },
    Skill {
        name: "JavaScript",
        icon: Icon::JavaScript,
        level: Some(90),
        color: Some("#F7DF1E"),
    },
    Skill {
        name: "Node.js",
        icon: Icon::NodeJs,
        level: Some(80),
        color: Some("#339933"),
    },
    Skill {
        name: "Tailwind CSS",
        icon: Icon::Tailwind,
        level: Some(85),
        color: Some("#06B6D4"),
    },
    Skill {
        name: "Git",
        icon: Icon::Git,
        level: Some(85),
        color: Some("#F05032"),
    },
    Skill {
        name: "Docker",
        icon: Icon::Docker,
        level: Some(75),
        color: Some("#2496ED"),
    },
    Skill {
        name: "MongoDB",
        icon: Icon::MongoDb,
        level: Some(80),
        color: Some("#47A248"),
    },
];

pub const ADDITIONAL_SKILLS: &[&str] = &[
    "HTML5",
    "CSS3",
    "SASS/SCSS",
    "Redux",
    "GraphQL",
    "REST APIs",
    "Jest",
    "Webpack",
    "Responsive Design",
    "UI/UX Design",
    "Agile Methodologies",
    "Problem Solving",
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Smart Fitness & Workout Tracker",
        description: "A comprehensive web application designed to empower users in managing their fitness journey through intelligent workout tracking, routine planning, and AI-powered insights. The platform ensures secure user authentication and delivers a highly responsive user experience.",
        image: "/projects/fitness-tracker-placeholder.svg",
        technologies: &[
            "Angular (v20)",
            "TypeScript",
            "Node.js",
            "Express.js",
            "MongoDB Atlas",
            "JWT Authentication",
            "OpenAI API (GPT-4o-mini)",
            "Vector Search (RAG)",
            "Angular Signals",
        ],
        features: &[
            "Secure User Authentication with JWT (Login/Signup)",
            "Personalized Workout Routine Creation & Management",
            "Detailed Workout Logging & Progress Tracking",
            "AI-Powered Exercise Suggestions (Function Calling)",
            "AI-Driven Workout Plan Generation (Function Calling)",
            "Intelligent Fitness Q&A via RAG from Curated Knowledge Base",
            "Type-Safe Frontend & Backend Architecture",
            "Lazy-Loaded Routing for Optimized Performance",
            "Responsive UI with External Styles",
        ],
        source_url: "https://github.com/AliElgazzar/fitness-tracker-app",
        live_url: "https://fitness-tracker-demo.com",
    },
    Project {
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.",
        image: "/projects/placeholder.svg",
        technologies: &["React", "TypeScript", "Firebase", "Tailwind CSS"],
        features: &[],
        source_url: "https://github.com/AliElgazzar/taskmanager",
        live_url: "https://taskmanager-demo.com",
    },
    Project {
        title: "Portfolio Website",
        description: "A modern, responsive portfolio website built with Rust and Leptos, featuring smooth animations and dark mode support.",
        image: "/projects/placeholder.svg",
        technologies: &["Rust", "Leptos", "Tailwind CSS", "WebAssembly"],
        features: &[],
        source_url: "https://github.com/AliElgazzar/portfolio",
        live_url: "https://portfolio-demo.com",
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: Icon::Email,
        title: "Email",
        text: "alielgazzar559@gmail.com",
        link: Some("mailto:alielgazzar559@gmail.com"),
    },
    ContactChannel {
        icon: Icon::Phone,
        title: "Phone",
        text: "+1 (641) 233-0023",
        link: None,
    },
    ContactChannel {
        icon: Icon::Location,
        title: "Location",
        text: "New York, NY, USA",
        link: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_map_to_matching_anchors() {
        for section in Section::ALL {
            assert_eq!(section.anchor(), format!("#{}", section.id()));
        }
        let ids = Section::ALL.map(Section::id);
        assert_eq!(ids, ["home", "about", "skills", "projects", "contact"]);
    }

    #[test]
    fn skill_levels_are_percentages() {
        for skill in SKILLS {
            if let Some(level) = skill.level {
                assert!(level <= 100, "{} has level {}", skill.name, level);
            }
        }
    }

    #[test]
    fn external_links_are_absolute() {
        let urls = HERO_LINKS
            .iter()
            .chain(FOOTER_LINKS)
            .map(|l| l.url)
            .chain(PROJECTS.iter().flat_map(|p| [p.source_url, p.live_url]));
        for url in urls {
            assert!(url.starts_with("https://"), "{url} is not absolute");
        }
        for channel in CONTACT_CHANNELS {
            if let Some(link) = channel.link {
                assert!(link.starts_with("mailto:") || link.starts_with("https://"));
            }
        }
    }

    #[test]
    fn project_titles_are_unique() {
        let mut titles = PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), PROJECTS.len());
    }
}
