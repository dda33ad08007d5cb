//! Recommendation composer — a level lead-in followed by the advice block for one interest.

use crate::catalog::{Interest, Level};

/// Four advice lines per interest.
fn advice_for(interest: Interest) -> [&'static str; 4] {
    match interest {
        Interest::ArtificialIntelligence => [
            "Complete Python + NumPy + Pandas basics.",
            "Study core ML algorithms (Regression, SVM, Trees, Ensembles).",
            "Learn at least one deep learning framework (PyTorch / TensorFlow).",
            "Build projects: image classifier, text sentiment model, recommendation system.",
        ],
        Interest::DataScience => [
            "Learn statistics, probability, and EDA thoroughly.",
            "Practice SQL queries on realistic datasets.",
            "Create dashboards with Power BI / Tableau.",
            "Work on case studies: churn prediction, sales forecasting, A/B testing.",
        ],
        Interest::WebDevelopment => [
            "Finish HTML, CSS, and modern JavaScript (ES6+).",
            "Learn React and build at least 3 responsive UIs.",
            "Connect frontend to a simple REST API backend.",
            "Deploy your apps to Vercel / Netlify / Render.",
        ],
        Interest::CloudDevOps => [
            "Understand Linux basics and shell scripting.",
            "Pick one cloud provider (Azure recommended for you 😉).",
            "Learn Docker and basics of CI/CD.",
            "Deploy at least one end-to-end project to the cloud.",
        ],
        Interest::Cybersecurity => [
            "Learn networking fundamentals and OS concepts.",
            "Understand common vulnerabilities (OWASP Top 10).",
            "Practice using tools like Burp Suite, Wireshark, Nmap.",
            "Participate in CTFs and follow ethical guidelines strictly.",
        ],
    }
}

pub fn lead_in(level: Level) -> &'static str {
    match level {
        Level::Beginner => "Start with strong fundamentals:",
        Level::Intermediate => "You already know basics, now focus on:",
        Level::Advanced => "You are at an advanced level, polish these areas:",
    }
}

/// Builds the ordered recommendation list: lead-in first, then the interest's advice.
pub fn compose_recommendations(interest: Interest, level: Level) -> Vec<String> {
    std::iter::once(lead_in(level))
        .chain(advice_for(interest))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pair_starts_with_level_lead_in() {
        for interest in Interest::ALL {
            for level in Level::ALL {
                let recs = compose_recommendations(interest, level);
                assert_eq!(recs.len(), 5);
                assert_eq!(recs[0], lead_in(level));
            }
        }
    }

    #[test]
    fn test_lead_in_text() {
        assert_eq!(lead_in(Level::Beginner), "Start with strong fundamentals:");
        assert_eq!(
            lead_in(Level::Intermediate),
            "You already know basics, now focus on:"
        );
        assert_eq!(
            lead_in(Level::Advanced),
            "You are at an advanced level, polish these areas:"
        );
    }

    #[test]
    fn test_ai_block_follows_lead_in() {
        let recs = compose_recommendations(Interest::ArtificialIntelligence, Level::Beginner);
        assert_eq!(recs[1], "Complete Python + NumPy + Pandas basics.");
        assert_eq!(
            recs[4],
            "Build projects: image classifier, text sentiment model, recommendation system."
        );
    }

    #[test]
    fn test_blocks_are_distinct_per_interest() {
        let blocks: Vec<Vec<String>> = Interest::ALL
            .into_iter()
            .map(|i| compose_recommendations(i, Level::Advanced))
            .collect();
        for (a, block_a) in blocks.iter().enumerate() {
            for block_b in blocks.iter().skip(a + 1) {
                assert_ne!(&block_a[1..], &block_b[1..]);
            }
        }
    }

    #[test]
    fn test_web_advice_differs_from_full_stack_roadmap() {
        let recs = compose_recommendations(Interest::WebDevelopment, Level::Intermediate);
        let roadmap = crate::catalog::find_roadmap("Full-Stack Developer").unwrap();
        assert!(recs[1..].iter().all(|r| !roadmap.steps.contains(&r.as_str())));
    }
}
