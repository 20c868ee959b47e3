//! # Portfolio Content
//!
//! The data each section renders. Content is configuration: a `Portfolio`
//! is built once at startup — either the built-in default profile or a
//! TOML file named in the config — and handed to the section renderers as
//! read-only props. Nothing here is mutated at runtime.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub contact: Vec<ContactChannel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub location: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub period: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
}

impl Portfolio {
    /// Parse a portfolio from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

impl Default for Portfolio {
    /// The built-in profile shown when no portfolio file is configured.
    fn default() -> Self {
        Self {
            name: "Sakshi Khade".to_string(),
            tagline: "AI & Robotics Engineer | Building the future with data and intelligence"
                .to_string(),
            about: vec![
                "Graduate student in Robotics and Autonomous Systems (AI) at Arizona \
                 State University, working at the intersection of machine learning, \
                 perception, and software engineering."
                    .to_string(),
                "Previously shipped front-end work and managed ERP rollouts, so I'm \
                 comfortable anywhere between a sprint board and a training loop."
                    .to_string(),
            ],
            skills: vec![
                SkillGroup {
                    category: "AI / ML".to_string(),
                    items: vec![
                        "Python".into(),
                        "PyTorch".into(),
                        "scikit-learn".into(),
                        "Computer Vision".into(),
                    ],
                },
                SkillGroup {
                    category: "Web".to_string(),
                    items: vec![
                        "TypeScript".into(),
                        "React".into(),
                        "HTML/CSS".into(),
                        "Bootstrap".into(),
                    ],
                },
                SkillGroup {
                    category: "Tools".to_string(),
                    items: vec![
                        "Git".into(),
                        "Trello".into(),
                        "Excel".into(),
                        "Linux".into(),
                    ],
                },
            ],
            experience: vec![
                ExperienceEntry {
                    title: "Project Management Intern".to_string(),
                    company: "SRRS Software Solutions".to_string(),
                    period: "Mar 2024 – Aug 2024".to_string(),
                    location: "Remote".to_string(),
                    achievements: vec![
                        "Planned & executed ERP implementations for multiple clients".into(),
                        "Coordinated sprint planning using Excel and Trello".into(),
                        "Maintained comprehensive project documentation".into(),
                        "Facilitated cross-team communication and stakeholder alignment".into(),
                    ],
                },
                ExperienceEntry {
                    title: "Front-end Development Intern".to_string(),
                    company: "The Language Network".to_string(),
                    period: "Oct 2023 – Feb 2024".to_string(),
                    location: "Remote".to_string(),
                    achievements: vec![
                        "Built responsive UIs using HTML, CSS, JavaScript, and Bootstrap".into(),
                        "Integrated Git workflows for version control and collaboration".into(),
                        "Optimized application performance across multiple devices".into(),
                        "Collaborated on UI/UX fixes and enhancements".into(),
                    ],
                },
            ],
            projects: vec![
                Project {
                    name: "Autonomous Navigation Stack".to_string(),
                    description: "Perception and path-planning pipeline for a mobile robot, \
                                  with obstacle avoidance tuned on real sensor logs."
                        .to_string(),
                    stack: vec!["Python".into(), "ROS".into(), "OpenCV".into()],
                },
                Project {
                    name: "Portfolio Site".to_string(),
                    description: "Single-page portfolio with discrete full-viewport section \
                                  transitions driven by keyboard, scroll, and swipe."
                        .to_string(),
                    stack: vec!["React".into(), "TypeScript".into(), "Tailwind".into()],
                },
            ],
            education: vec![EducationEntry {
                degree: "M.S. Robotics and Autonomous Systems (AI)".to_string(),
                school: "Arizona State University".to_string(),
                period: "2024 – 2026".to_string(),
                details: vec![
                    "Focus: machine learning and perception".into(),
                    "Tempe, AZ".into(),
                ],
            }],
            contact: vec![
                ContactChannel {
                    label: "Email".to_string(),
                    value: "skhade5@asu.edu".to_string(),
                },
                ContactChannel {
                    label: "Phone".to_string(),
                    value: "+1 (480) 919-5150".to_string(),
                },
                ContactChannel {
                    label: "Location".to_string(),
                    value: "Tempe, AZ".to_string(),
                },
                ContactChannel {
                    label: "LinkedIn".to_string(),
                    value: "linkedin.com/in/SAKSHI-KHADE".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_complete() {
        let p = Portfolio::default();
        assert!(!p.name.is_empty());
        assert!(!p.about.is_empty());
        assert_eq!(p.experience.len(), 2);
        assert!(p.contact.iter().any(|c| c.label == "Email"));
    }

    #[test]
    fn test_portfolio_parses_from_sparse_toml() {
        let toml_str = r#"
name = "Ada Lovelace"
tagline = "Analyst"

[[skills]]
category = "Math"
items = ["analysis"]

[[contact]]
label = "Email"
value = "ada@example.org"
"#;
        let p = Portfolio::from_toml(toml_str).unwrap();
        assert_eq!(p.name, "Ada Lovelace");
        assert_eq!(p.skills[0].items, vec!["analysis"]);
        assert!(p.experience.is_empty());
    }

    #[test]
    fn test_portfolio_rejects_missing_name() {
        assert!(Portfolio::from_toml("tagline = \"x\"").is_err());
    }
}
