//! Static page content: the records the sections render.
//!
//! Everything here is fixed at compile time. Copy that only appears once
//! (hero headline, section intros) lives inline in the components instead.

pub const OWNER_NAME: &str = "Parth Borate";
pub const OWNER_TITLE: &str = "Technical Consultant & Cloud Architect";

pub const ACCENT_BLUE: &str = "#2d62ff";
pub const ACCENT_CYAN: &str = "#00e5ff";
pub const ACCENT_MAGENTA: &str = "#ff0055";

#[derive(Debug, Clone, Copy)]
pub struct Job {
    pub company: &'static str,
    pub location: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

pub const JOBS: &[Job] = &[
    Job {
        company: "Mainline Information Systems",
        location: "Remote, India",
        role: "Technical Consultant",
        period: "Jan 2022 – Jun 2024",
        achievements: &[
            "Led MongoDB scripts for automated data management, improving reporting accuracy by 35%",
            "Spearheaded Auto Reply feature for BCR using AWS stack, benefiting 1,000+ customers with $100,000+ cost savings",
            "Deployed cloud services using AWS, Docker, and Kubernetes, achieving 50% improvement in deployment efficiency",
            "Developed RESTful APIs using Java, Spring Boot, and Hibernate, leading to 25% increase in user engagement",
            "Managed microservices in Java and Kotlin resulting in 30% reduction in development time",
        ],
    },
    Job {
        company: "Xenstack",
        location: "India",
        role: "Cloud and DevOps Engineer",
        period: "Jun 2020 – Dec 2021",
        achievements: &[
            "Implemented CI/CD pipelines using Jenkins and GitLab CI, reducing deployment time by 40%",
            "Managed cloud infrastructure on AWS and Azure, ensuring 99.9% uptime",
            "Automated infrastructure provisioning using Terraform and Ansible",
            "Implemented monitoring and logging solutions using Prometheus and Grafana",
            "Collaborated with development teams to optimize application performance",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct School {
    pub institution: &'static str,
    pub location: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const SCHOOLS: &[School] = &[
    School {
        institution: "University of Illinois at Chicago",
        location: "Chicago, USA",
        degree: "Master of Science, Management Information Systems",
        period: "Aug 2024 – Present",
        highlights: &[
            "Focusing on advanced information systems and cloud technologies",
            "Coursework in Data Analytics, Cloud Computing, and Enterprise Systems",
        ],
    },
    School {
        institution: "University of Pune",
        location: "Pune, India",
        degree: "Bachelor of Engineering in Computer Engineering",
        period: "Graduated May 2020",
        highlights: &[
            "Strong foundation in computer science fundamentals",
            "Active participant in coding competitions and hackathons",
            "Graduated with honors",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Course {
    pub name: &'static str,
    pub provider: &'static str,
}

pub const CONTINUOUS_LEARNING: &[Course] = &[
    Course {
        name: "AWS Certified",
        provider: "Amazon Web Services",
    },
    Course {
        name: "Kubernetes Fundamentals",
        provider: "Linux Foundation",
    },
    Course {
        name: "Docker Mastery",
        provider: "Udemy",
    },
    Course {
        name: "DevOps Professional",
        provider: "Coursera",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub demo: Option<&'static str>,
    pub repo: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "VR Earth and Moon Explorer",
        description: "An innovative VR application developed for the Indian Space Research Organization (ISRO), allowing users to explore and interact with detailed 3D models of Earth and the Moon on both Android and Windows platforms.",
        image: "/project-vr-earth.jpg",
        tags: &["C#", "Java", "DBMS", "Unity", "VR SDKs"],
        achievements: &[
            "Awarded First Prize at the National Smart India Hackathon",
            "Successfully combined advanced VR technology with educational content",
            "Showcased the potential of virtual reality in space exploration",
        ],
        demo: Some("#"),
        repo: Some("#"),
    },
    Project {
        title: "Assembly Line Simulator in VR",
        description: "A comprehensive VR simulator for Techno Spark ASM, providing an interactive virtual environment where users could explore and engage with a fully modeled vehicle production assembly line on Windows.",
        image: "/project-assembly-line.jpg",
        tags: &["C#", "Java", "DBMS", "3D Modeling", "VR Development"],
        achievements: &[
            "Secured First Prize from the Techno Spark Committee",
            "Innovative use of VR technology to enhance training efficiency",
            "Accurate simulation of complex manufacturing processes",
        ],
        demo: Some("#"),
        repo: Some("#"),
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
    pub color: &'static str,
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming Languages",
        skills: &["Java", "C++", "C#", "Python", "SQL"],
        color: ACCENT_BLUE,
    },
    SkillCategory {
        title: "Web Development",
        skills: &["HTML", "CSS", "Bootstrap", "JavaScript", "React"],
        color: ACCENT_CYAN,
    },
    SkillCategory {
        title: "Databases",
        skills: &["MongoDB", "MySQL", "PostgreSQL"],
        color: ACCENT_MAGENTA,
    },
    SkillCategory {
        title: "Cloud & DevOps",
        skills: &["AWS", "Azure", "Kubernetes", "Jenkins", "Docker", "CI/CD", "DevSecOps"],
        color: ACCENT_BLUE,
    },
    SkillCategory {
        title: "Tools & Technologies",
        skills: &["Linux", "Git", "Postman", "Maven", "Jira", "Confluence"],
        color: ACCENT_CYAN,
    },
    SkillCategory {
        title: "VR Development",
        skills: &["Unity", "C# for VR", "3D Modeling", "VR SDKs"],
        color: ACCENT_MAGENTA,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Proficiency {
    pub name: &'static str,
    pub level: u8,
}

pub const CORE_PROFICIENCIES: &[Proficiency] = &[
    Proficiency {
        name: "Cloud & DevOps",
        level: 95,
    },
    Proficiency {
        name: "API Development",
        level: 90,
    },
    Proficiency {
        name: "Database Management",
        level: 85,
    },
    Proficiency {
        name: "VR Development",
        level: 80,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub title: &'static str,
    pub org: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "First Prize - National Smart India Hackathon",
        org: "ISRO VR Project",
    },
    Certification {
        title: "First Prize - Techno Spark Committee",
        org: "Assembly Line Simulator",
    },
    Certification {
        title: "AWS Cloud Practitioner",
        org: "Amazon Web Services",
    },
    Certification {
        title: "DevOps Professional",
        org: "Industry Recognition",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "4+",
        label: "Years Experience",
        color: ACCENT_BLUE,
    },
    Stat {
        value: "15+",
        label: "Projects Completed",
        color: ACCENT_CYAN,
    },
    Stat {
        value: "20+",
        label: "Happy Clients",
        color: ACCENT_MAGENTA,
    },
    Stat {
        value: "2",
        label: "National Awards",
        color: ACCENT_BLUE,
    },
];

pub const ABOUT_TAGS: &[&str] = &["DevOps", "AWS", "Azure", "DevSecOps", "Data Analytics"];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/parthborate/",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/parthborate",
        icon: "devicon-github-plain",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: "pbora@uic.edu",
        href: "mailto:pbora@uic.edu",
        icon: "extra-email",
    },
    ContactChannel {
        label: "Phone",
        value: "+1 (773) 930-6989",
        href: "tel:+17739306989",
        icon: "extra-phone",
    },
    ContactChannel {
        label: "Location",
        value: "Chicago, IL",
        href: "#",
        icon: "extra-location",
    },
];

pub const PROFILE_IMAGE: &str = "/profile.jpg";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_paths_are_site_relative() {
        assert!(PROFILE_IMAGE.starts_with('/'));
        for project in PROJECTS {
            assert!(project.image.starts_with('/'), "{}", project.title);
        }
    }

    #[test]
    fn test_outbound_links_are_fixed_schemes() {
        assert!(CONTACT_CHANNELS[0].href.starts_with("mailto:"));
        assert!(CONTACT_CHANNELS[1].href.starts_with("tel:"));
        for social in SOCIAL_LINKS {
            assert!(social.href.starts_with("https://"), "{}", social.label);
        }
    }

    #[test]
    fn test_records_are_populated() {
        assert!(!JOBS.is_empty());
        assert!(!SCHOOLS.is_empty());
        assert!(!PROJECTS.is_empty());
        assert_eq!(SKILL_CATEGORIES.len(), 6);
        assert_eq!(STATS.len(), 4);
        for job in JOBS {
            assert!(!job.achievements.is_empty(), "{}", job.company);
        }
        for level in CORE_PROFICIENCIES {
            assert!(level.level <= 100, "{}", level.name);
        }
    }
}
