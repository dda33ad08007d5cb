//! Role roadmaps: six ordered learning steps for each of the five supported roles.

use serde::{ser::SerializeMap, Serialize, Serializer};
use thiserror::Error;

/// A named role and its ordered learning steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleRoadmap {
    pub role: &'static str,
    pub steps: &'static [&'static str],
}

/// Catalog order is the order roles are listed in responses.
pub const ROLE_ROADMAPS: &[RoleRoadmap] = &[
    RoleRoadmap {
        role: "AI Engineer",
        steps: &[
            "Learn Python, basic statistics, and linear algebra",
            "Study supervised learning (regression, classification) using scikit-learn",
            "Practice on Kaggle datasets (image, text, tabular)",
            "Learn deep learning basics (ANN, CNN, RNN) with PyTorch or TensorFlow",
            "Build 2–3 end-to-end AI projects and deploy with a simple web UI",
            "Explore MLOps basics: model monitoring, retraining, and CI/CD",
        ],
    },
    RoleRoadmap {
        role: "Data Scientist",
        steps: &[
            "Master Python, NumPy, Pandas, and data visualization",
            "Understand EDA, feature engineering, and hypothesis testing",
            "Learn classic ML models: Linear/Logistic Regression, Trees, Ensembles",
            "Work with real-world datasets (finance, healthcare, e-commerce)",
            "Learn SQL + basic dashboarding (Power BI / Tableau)",
            "Build a portfolio of 3–5 case studies with clear business impact",
        ],
    },
    RoleRoadmap {
        role: "Full-Stack Developer",
        steps: &[
            "Learn HTML, CSS, and modern JavaScript",
            "Pick a frontend framework (React, Vue, or Angular)",
            "Learn backend (Node.js/Express, Django, or Spring Boot)",
            "Practice building REST APIs and authentication",
            "Work with a database (PostgreSQL / MongoDB)",
            "Deploy full-stack apps to cloud (Render, Vercel, Azure, AWS)",
        ],
    },
    RoleRoadmap {
        role: "Cloud & DevOps",
        steps: &[
            "Understand OS, networking, and basic Linux commands",
            "Learn one cloud: Azure / AWS / GCP fundamentals",
            "Work with VMs, storage, networking, and IAM",
            "Study containers (Docker, Kubernetes basics)",
            "Automate with CI/CD tools (GitHub Actions, Azure DevOps)",
            "Prepare and clear at least one cloud certification",
        ],
    },
    RoleRoadmap {
        role: "Cybersecurity",
        steps: &[
            "Learn networking fundamentals and OS concepts",
            "Understand common vulnerabilities (OWASP Top 10)",
            "Practice using tools like Burp Suite, Wireshark, Nmap",
            "Participate in CTFs and follow ethical guidelines strictly",
            "Study basic cryptography and secure coding practices",
            "Build a small lab environment for practicing tools safely",
        ],
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Role '{role}' not found")]
pub struct RoleNotFound {
    pub role: String,
}

/// Case-insensitive lookup by role name. The returned roadmap carries the canonical name.
pub fn find_roadmap(role: &str) -> Result<&'static RoleRoadmap, RoleNotFound> {
    let wanted = role.to_lowercase();
    ROLE_ROADMAPS
        .iter()
        .find(|r| r.role.to_lowercase() == wanted)
        .ok_or_else(|| RoleNotFound {
            role: role.to_string(),
        })
}

/// Serializes the whole catalog as a `role -> steps` JSON object, keeping catalog order.
pub struct RoadmapIndex(pub &'static [RoleRoadmap]);

impl Serialize for RoadmapIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for roadmap in self.0 {
            map.serialize_entry(roadmap.role, roadmap.steps)?;
        }
        map.end()
    }
}
