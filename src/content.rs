//! What the page says. Plain static data; the sections in `app` map it into
//! views.

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub portrait: &'static str,
    pub resume_path: &'static str,
    pub resume_filename: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Jordan Avery",
    role: "Software Developer & Data Analyst",
    tagline: "I build scalable applications, APIs, and cloud-native solutions with over 3+ years of experience",
    summary: "Software Developer and Data Analyst specializing in full-stack development, cloud architecture, and data-driven solutions. Experienced in Java, Python, JavaScript, and modern cloud platforms.",
    email: "hello@jordanavery.dev",
    location: "Remote",
    portrait: "/portrait.png",
    resume_path: "/resume.pdf",
    resume_filename: "Jordan_Avery_Resume.pdf",
    github: "https://github.com/jordan-avery",
    linkedin: "https://www.linkedin.com/in/jordan-avery/",
};

/// schema.org `Person` description for the page head.
pub fn person_schema() -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": PROFILE.name,
        "jobTitle": PROFILE.role,
        "email": format!("mailto:{}", PROFILE.email),
        "sameAs": [PROFILE.github, PROFILE.linkedin],
    })
    .to_string()
}

/// Height of the fixed header; scroll targets land just below it.
pub const HEADER_HEIGHT: f64 = 80.0;

/// Where to scroll so a section starting at `offset_top` sits right under
/// the header.
pub fn scroll_offset(offset_top: f64, header_height: f64) -> f64 {
    (offset_top - header_height).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "About",
        section: "about",
    },
    NavItem {
        label: "Experience",
        section: "experience",
    },
    NavItem {
        label: "Projects",
        section: "projects",
    },
    NavItem {
        label: "Skills",
        section: "skills",
    },
    NavItem {
        label: "Contact",
        section: "contact",
    },
];

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static ABOUT: [&str; 2] = [
    "I'm a developer who enjoys the whole path from a rough idea to a service running in production. Most of my work sits where web applications meet the cloud: APIs, data pipelines and the interfaces people use every day.",
    "Outside of shipping features I like digging into data, automating the boring parts of delivery and helping teams move faster with better tooling.",
];

pub static HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        icon: "💻",
        title: "Full-stack",
        description: "React and TypeScript on the front, Python, Node.js and Java behind it.",
    },
    Highlight {
        icon: "☁️",
        title: "Cloud-native",
        description: "Serverless functions, containers and CI/CD on AWS and GCP.",
    },
    Highlight {
        icon: "📊",
        title: "Data-driven",
        description: "Pipelines, warehouses and dashboards that turn data into decisions.",
    },
];

pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub static EXPERIENCE: [Job; 4] = [
    Job {
        title: "Cloud AI Engineer",
        company: "Northwind Labs",
        period: "May 2025 – Present",
        location: "Remote",
        kind: "Full-time",
        description: "AI-driven cloud infrastructure and conversational AI integration",
        achievements: &[
            "Engineered REST APIs for AI-driven automation workflows and real-time data exchange",
            "Built chatbot middleware services enabling conversational AI across multiple channels",
            "Implemented OAuth2.0 and JWT authentication for secure API access control",
            "Developed serverless functions for real-time data processing",
            "Managed CI/CD pipelines for microservices using GitHub Actions and Docker",
        ],
        technologies: &[
            "AWS Lambda",
            "Cloud Functions",
            "OAuth2.0",
            "JWT",
            "BigQuery",
            "DynamoDB",
            "Docker",
            "GitHub Actions",
        ],
    },
    Job {
        title: "Software Developer",
        company: "Bluepeak Systems",
        period: "May 2024 – May 2025",
        location: "Remote",
        kind: "Full-time",
        description: "Scalable cloud-native API infrastructure on GCP",
        achievements: &[
            "Designed and deployed API services on GCP using RESTful and GraphQL standards",
            "Built backend services with Python/Flask and PostgreSQL for high query performance",
            "Implemented JWT-based authentication and automated data ingestion pipelines",
        ],
        technologies: &["Python", "Flask", "GraphQL", "PostgreSQL", "GCP", "Docker"],
    },
    Job {
        title: "Senior Software Developer",
        company: "Meridian Digital",
        period: "Oct 2020 – Dec 2022",
        location: "Remote",
        kind: "Full-time",
        description: "Web development for healthcare and pharma clients",
        achievements: &[
            "Led development of 100+ web pages, delivering a 30% performance improvement",
            "Built responsive UI components with React Hooks and efficient state management",
            "Enhanced SEO performance by 25% and increased user engagement by 40%",
        ],
        technologies: &["React.js", "Node.js", "JavaScript", "PHP", "Bootstrap"],
    },
    Job {
        title: "Software Developer Intern",
        company: "Lumen Works",
        period: "Aug 2020 – Sept 2020",
        location: "Remote",
        kind: "Internship",
        description: "Full-stack web application development",
        achievements: &[
            "Designed a full-stack web application for customer profile management",
            "Built RESTful API endpoints for CRUD operations and data processing",
            "Connected APIs to a Power BI dashboard for data visualization",
        ],
        technologies: &["TypeScript", "Flask", "Python", "PostgreSQL", "Power BI"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

impl Project {
    /// Stable slug for test ids, e.g. "Cloud Cost Radar" -> "cloud-cost-radar".
    pub fn slug(&self) -> String {
        self.title
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Cloud Cost Radar",
        description: "Dashboard that ingests billing exports and flags cost anomalies across cloud accounts.",
        image: "/projects/cost-radar.png",
        technologies: &["Python", "BigQuery", "React", "Cloud Run"],
        achievements: &[
            "Daily anomaly detection over billing exports",
            "Per-team cost attribution with drill-down charts",
            "Slack alerts for budget thresholds",
        ],
        live_url: Some("https://cost-radar.jordanavery.dev"),
        github_url: Some("https://github.com/jordan-avery/cost-radar"),
    },
    Project {
        title: "Support Bot Gateway",
        description: "Middleware that routes customer conversations between chat channels and LLM backends.",
        image: "/projects/bot-gateway.png",
        technologies: &["Node.js", "TypeScript", "Redis", "Docker"],
        achievements: &[
            "Single API for web chat, SMS and email channels",
            "Pluggable model providers with fallbacks",
            "Conversation analytics exported to the warehouse",
        ],
        live_url: None,
        github_url: Some("https://github.com/jordan-avery/bot-gateway"),
    },
    Project {
        title: "Clinic Scheduler",
        description: "Appointment booking for small clinics with reminders and a staff calendar.",
        image: "/projects/clinic-scheduler.png",
        technologies: &["React", "Flask", "PostgreSQL", "JWT"],
        achievements: &[
            "Role-based access for staff and patients",
            "Automated email and SMS reminders",
            "Calendar sync with external providers",
        ],
        live_url: Some("https://clinic.jordanavery.dev"),
        github_url: None,
    },
];

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILLS: [SkillGroup; 5] = [
    SkillGroup {
        title: "Languages",
        skills: &["Java", "Python", "JavaScript", "TypeScript", "SQL"],
    },
    SkillGroup {
        title: "Frontend",
        skills: &["React", "HTML", "CSS", "Tailwind", "Bootstrap"],
    },
    SkillGroup {
        title: "Backend",
        skills: &["Node.js", "Flask", "GraphQL", "REST", "PostgreSQL", "Redis"],
    },
    SkillGroup {
        title: "Cloud & DevOps",
        skills: &["AWS", "GCP", "Docker", "GitHub Actions", "Terraform"],
    },
    SkillGroup {
        title: "Data",
        skills: &["BigQuery", "DynamoDB", "Power BI", "Pandas"],
    },
];

pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub static CONTACT_LINKS: [ContactLink; 2] = [
    ContactLink {
        icon: "devicon-linkedin-plain",
        label: "LinkedIn",
        value: "Connect with me",
        href: PROFILE.linkedin,
    },
    ContactLink {
        icon: "devicon-github-original",
        label: "GitHub",
        value: "jordan-avery",
        href: PROFILE.github,
    },
];

pub static SERVICES: [Highlight; 4] = [
    Highlight {
        icon: "🌐",
        title: "Full-stack web development",
        description: "Modern web applications with React, Node.js, and TypeScript",
    },
    Highlight {
        icon: "🗄️",
        title: "Cloud-native API development",
        description: "Scalable REST APIs and microservices architecture",
    },
    Highlight {
        icon: "📈",
        title: "Data analysis and visualization",
        description: "Transform data into actionable insights and compelling visuals",
    },
    Highlight {
        icon: "⚙️",
        title: "DevOps and automation solutions",
        description: "CI/CD pipelines, containerization, and infrastructure automation",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(1200.0, HEADER_HEIGHT), 1120.0);
        assert_eq!(scroll_offset(30.0, HEADER_HEIGHT), 0.0);
    }

    #[test]
    fn test_person_schema() {
        let schema: serde_json::Value =
            serde_json::from_str(&person_schema()).expect("schema should be valid JSON");
        assert_eq!(schema["@type"], "Person");
        assert_eq!(schema["name"], PROFILE.name);
        assert_eq!(schema["sameAs"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_project_slug() {
        assert_eq!(PROJECTS[0].slug(), "cloud-cost-radar");
    }

    #[test]
    fn test_nav_targets_are_unique() {
        let mut sections = NAV_ITEMS.iter().map(|n| n.section).collect::<Vec<_>>();
        sections.sort();
        sections.dedup();
        assert_eq!(sections.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_projects_link_somewhere() {
        for project in &PROJECTS {
            assert!(project.live_url.is_some() || project.github_url.is_some());
        }
    }
}
