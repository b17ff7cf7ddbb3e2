//! Fixed content tables consumed read-only by the section views.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// A featured project card.
#[derive(Clone, Copy, Debug)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub tech_stack: &'static str,
    pub description: &'static str,
    /// Gradient modifier class applied to the card's hover wash.
    pub accent_gradient: &'static str,
}

/// A contact channel card.
#[derive(Clone, Copy, Debug)]
pub struct ContactMethod {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

/// Skill names for the about-section grid, in display order.
pub const SKILLS: [&str; 12] = [
    "React",
    "TypeScript",
    "Node.js",
    "Python",
    "AWS",
    "Docker",
    "GraphQL",
    "MongoDB",
    "PostgreSQL",
    "Redis",
    "Kubernetes",
    "CI/CD",
];

/// Featured projects, in display order. Titles are unique.
pub const PROJECTS: [ProjectRecord; 3] = [
    ProjectRecord {
        title: "AI-Powered Analytics Dashboard",
        tech_stack: "React, Python, TensorFlow",
        description: "Real-time data visualization with machine learning insights",
        accent_gradient: "project-card__wash--purple-pink",
    },
    ProjectRecord {
        title: "Blockchain Voting System",
        tech_stack: "Solidity, Web3.js, React",
        description: "Decentralized voting platform with smart contracts",
        accent_gradient: "project-card__wash--blue-cyan",
    },
    ProjectRecord {
        title: "Cloud Infrastructure Manager",
        tech_stack: "AWS, Docker, Kubernetes",
        description: "Automated deployment and scaling solution",
        accent_gradient: "project-card__wash--green-emerald",
    },
];

/// Contact channels, in display order.
pub const CONTACT_METHODS: [ContactMethod; 3] = [
    ContactMethod {
        icon: "\u{1F4E7}",
        label: "Email",
        value: "hello@yourname.com",
    },
    ContactMethod {
        icon: "\u{1F4BC}",
        label: "LinkedIn",
        value: "/in/yourname",
    },
    ContactMethod {
        icon: "\u{1F419}",
        label: "GitHub",
        value: "/yourusername",
    },
];
