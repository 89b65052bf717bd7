//! Fixed catalogue of writing prompts with search and random picks.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::ValidationError;
use crate::records::contains_ci;

/// How many ideas a shuffle shows.
pub const SHUFFLE_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(ValidationError::InvalidValue {
                field: "difficulty".into(),
                message: format!("expected beginner, intermediate or advanced, got '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Idea {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub difficulty: Difficulty,
    pub tags: &'static [&'static str],
}

impl Idea {
    /// Plain-text block suitable for pasting into a document.
    pub fn to_text(&self) -> String {
        format!(
            "{}\n\n{}\n\nCategory: {}\nDifficulty: {}\nTags: {}",
            self.title,
            self.description,
            self.category,
            self.difficulty,
            self.tags.join(", ")
        )
    }
}

pub const IDEAS: &[Idea] = &[
    Idea {
        title: "How to Build a Morning Routine",
        description: "Create a comprehensive guide on establishing and maintaining a productive morning routine.",
        category: "lifestyle",
        difficulty: Difficulty::Beginner,
        tags: &["productivity", "health", "habits"],
    },
    Idea {
        title: "JavaScript ES6 Features Explained",
        description: "Deep dive into modern JavaScript features like arrow functions, destructuring, and async/await.",
        category: "programming",
        difficulty: Difficulty::Intermediate,
        tags: &["javascript", "es6", "web development"],
    },
    Idea {
        title: "The Psychology of Color in Design",
        description: "Explore how different colors affect user behavior and emotions in design.",
        category: "design",
        difficulty: Difficulty::Intermediate,
        tags: &["psychology", "ui/ux", "branding"],
    },
    Idea {
        title: "Investing for Beginners",
        description: "A complete guide to getting started with investing, including risk management and portfolio basics.",
        category: "finance",
        difficulty: Difficulty::Beginner,
        tags: &["investing", "money", "retirement"],
    },
    Idea {
        title: "Building Microservices with Node.js",
        description: "Learn how to architect and implement microservices using Node.js and Docker.",
        category: "programming",
        difficulty: Difficulty::Advanced,
        tags: &["microservices", "nodejs", "docker"],
    },
    Idea {
        title: "Content Marketing Strategy in 2024",
        description: "Latest trends and strategies for effective content marketing in the digital age.",
        category: "marketing",
        difficulty: Difficulty::Intermediate,
        tags: &["content marketing", "seo", "social media"],
    },
    Idea {
        title: "Home Organization Hacks",
        description: "Practical tips and tricks for organizing every room in your home efficiently.",
        category: "lifestyle",
        difficulty: Difficulty::Beginner,
        tags: &["organization", "home", "productivity"],
    },
    Idea {
        title: "Machine Learning Fundamentals",
        description: "Introduction to machine learning concepts, algorithms, and practical applications.",
        category: "programming",
        difficulty: Difficulty::Advanced,
        tags: &["machine learning", "ai", "python"],
    },
    Idea {
        title: "Sustainable Living Tips",
        description: "Easy ways to reduce your environmental impact and live more sustainably.",
        category: "lifestyle",
        difficulty: Difficulty::Beginner,
        tags: &["sustainability", "environment", "lifestyle"],
    },
    Idea {
        title: "React Performance Optimization",
        description: "Advanced techniques for optimizing React applications for better performance.",
        category: "programming",
        difficulty: Difficulty::Advanced,
        tags: &["react", "performance", "optimization"],
    },
    Idea {
        title: "Personal Branding on Social Media",
        description: "How to build and maintain a strong personal brand across social platforms.",
        category: "marketing",
        difficulty: Difficulty::Intermediate,
        tags: &["personal branding", "social media", "career"],
    },
    Idea {
        title: "Budget-Friendly Meal Planning",
        description: "Strategies for planning healthy, delicious meals on a tight budget.",
        category: "lifestyle",
        difficulty: Difficulty::Beginner,
        tags: &["meal planning", "budget", "cooking"],
    },
    Idea {
        title: "Cybersecurity Best Practices",
        description: "Essential security measures for protecting personal and business data online.",
        category: "technology",
        difficulty: Difficulty::Intermediate,
        tags: &["cybersecurity", "privacy", "data protection"],
    },
    Idea {
        title: "Freelancing Success Guide",
        description: "Complete guide to starting and scaling a successful freelance business.",
        category: "business",
        difficulty: Difficulty::Intermediate,
        tags: &["freelancing", "business", "career"],
    },
    Idea {
        title: "Minimalist Design Principles",
        description: "Understanding and applying minimalist design principles in digital and print media.",
        category: "design",
        difficulty: Difficulty::Beginner,
        tags: &["minimalism", "design principles", "ui/ux"],
    },
    Idea {
        title: "Cryptocurrency Explained",
        description: "Comprehensive guide to understanding blockchain technology and cryptocurrencies.",
        category: "finance",
        difficulty: Difficulty::Intermediate,
        tags: &["cryptocurrency", "blockchain", "investing"],
    },
    Idea {
        title: "Time Management Techniques",
        description: "Proven methods for managing time effectively and increasing productivity.",
        category: "productivity",
        difficulty: Difficulty::Beginner,
        tags: &["time management", "productivity", "work-life balance"],
    },
    Idea {
        title: "API Design Best Practices",
        description: "Guidelines for designing robust, scalable, and user-friendly APIs.",
        category: "programming",
        difficulty: Difficulty::Advanced,
        tags: &["api design", "rest", "backend development"],
    },
    Idea {
        title: "Digital Photography Basics",
        description: "Getting started with digital photography, from camera settings to composition.",
        category: "creative",
        difficulty: Difficulty::Beginner,
        tags: &["photography", "camera", "composition"],
    },
    Idea {
        title: "E-commerce Growth Strategies",
        description: "Proven strategies for growing and scaling an online store.",
        category: "business",
        difficulty: Difficulty::Intermediate,
        tags: &["e-commerce", "growth", "online business"],
    },
];

/// Distinct categories in catalogue order.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for idea in IDEAS {
        if !seen.contains(&idea.category) {
            seen.push(idea.category);
        }
    }
    seen
}

/// Ideas whose title, description or any tag contains `query`
/// case-insensitively. A category of `"all"` or `None` matches everything.
pub fn search(
    query: &str,
    category: Option<&str>,
    difficulty: Option<Difficulty>,
) -> Vec<&'static Idea> {
    let needle = query.trim().to_lowercase();
    IDEAS
        .iter()
        .filter(|idea| match category {
            None | Some("all") => true,
            Some(c) => idea.category == c,
        })
        .filter(|idea| difficulty.map_or(true, |d| idea.difficulty == d))
        .filter(|idea| {
            needle.is_empty()
                || contains_ci(idea.title, &needle)
                || contains_ci(idea.description, &needle)
                || idea.tags.iter().any(|t| contains_ci(t, &needle))
        })
        .collect()
}

/// Up to `count` distinct ideas picked with the thread RNG.
pub fn random(count: usize) -> Vec<&'static Idea> {
    shuffle(&mut rand::thread_rng(), count)
}

/// Up to `count` distinct ideas in random order.
pub fn shuffle<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<&'static Idea> {
    IDEAS.choose_multiple(rng, count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn categories_are_distinct_and_ordered() {
        let cats = categories();
        assert_eq!(cats[0], "lifestyle");
        assert_eq!(cats[1], "programming");
        assert!(cats.contains(&"creative"));
        let mut deduped = cats.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), cats.len());
    }

    #[test]
    fn search_looks_at_tags_and_text() {
        assert_eq!(search("DOCKER", None, None)[0].title, "Building Microservices with Node.js");
        assert_eq!(search("", None, None).len(), IDEAS.len());
        assert!(search("productivity", None, None).len() >= 3);
    }

    #[test]
    fn filters_combine() {
        let hits = search("", Some("programming"), Some(Difficulty::Advanced));
        assert!(!hits.is_empty());
        assert!(hits
            .iter()
            .all(|i| i.category == "programming" && i.difficulty == Difficulty::Advanced));
        assert_eq!(search("", Some("all"), None).len(), IDEAS.len());
        assert!(search("react", Some("finance"), None).is_empty());
    }

    #[test]
    fn shuffle_picks_distinct_ideas() {
        let picked = shuffle(&mut StdRng::seed_from_u64(3), SHUFFLE_COUNT);
        assert_eq!(picked.len(), SHUFFLE_COUNT);
        for (i, idea) in picked.iter().enumerate() {
            assert!(!picked[i + 1..].iter().any(|other| other.title == idea.title));
        }
        assert_eq!(shuffle(&mut StdRng::seed_from_u64(3), 100).len(), IDEAS.len());
    }

    #[test]
    fn text_block_lists_tags() {
        let text = IDEAS[0].to_text();
        assert!(text.starts_with("How to Build a Morning Routine\n\n"));
        assert!(text.ends_with("Difficulty: beginner\nTags: productivity, health, habits"));
    }

    #[test]
    fn difficulty_parses() {
        assert_eq!(" Advanced ".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
