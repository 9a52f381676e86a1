//! Query Matcher: routes free-text questions to structured profile answers.
//!
//! Rules are tried in table order and the first rule whose trigger list has
//! a substring in the lowercased query answers it. Order is behaviour: a
//! question mentioning both "work" and "project" is answered by the
//! experience rule because it comes first.
//!
//! When no rule fires, each whitespace-separated word is tried against the
//! keyword map. Confidence values are fixed per rule.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::profile::path::profile_path;
use crate::profile::store::ProfileStore;
use crate::query::format::{
    bullets, field_text, render_value, string_list, title_case, NOT_PROVIDED,
};

pub const NO_MATCH_ANSWER: &str =
    "I couldn't find specific information about that in the structured data. Let me search with AI...";

const KEYWORD_CONFIDENCE: f32 = 0.70;

/// One structured answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub answer: String,
    pub confidence: f32, // 0.0 – 1.0
    pub source: String,
}

impl QueryResult {
    fn new(answer: String, confidence: f32, source: &str) -> Self {
        Self {
            answer,
            confidence,
            source: source.to_string(),
        }
    }

    pub fn no_match() -> Self {
        Self::new(NO_MATCH_ANSWER.to_string(), 0.0, "no_match")
    }
}

type Handler = fn(&ProfileStore, &str) -> QueryResult;

struct Rule {
    name: &'static str,
    triggers: &'static [&'static str],
    answer: Handler,
}

impl Rule {
    fn fires(&self, query: &str) -> bool {
        mentions(query, self.triggers)
    }
}

fn mentions(query: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|t| query.contains(t))
}

const CURRENT_TRIGGERS: &[&str] = &["current", "now", "present", "today", "ongoing"];
const RESPONSIBILITY_TRIGGERS: &[&str] =
    &["responsibility", "duties", "role", "task", "work on"];

/// Evaluated top to bottom; the first rule that fires wins.
const RULES: &[Rule] = &[
    Rule {
        name: "skills",
        triggers: &[
            "skill",
            "technology",
            "tech",
            "stack",
            "know",
            "expert",
            "proficient",
            "language",
            "framework",
            "database",
            "tool",
        ],
        answer: answer_skills,
    },
    Rule {
        name: "experience",
        triggers: &[
            "experience",
            "work",
            "job",
            "year",
            "duration",
            "career",
            "employment",
        ],
        answer: answer_experience,
    },
    Rule {
        name: "education",
        triggers: &[
            "education",
            "degree",
            "study",
            "university",
            "college",
            "graduation",
        ],
        answer: answer_education,
    },
    Rule {
        name: "project",
        triggers: &["project", "built", "developed", "created", "worked on"],
        answer: answer_projects,
    },
    Rule {
        name: "contact",
        triggers: &["contact", "email", "linkedin", "github", "reach", "connect"],
        answer: answer_contact,
    },
    Rule {
        name: "achievement",
        triggers: &[
            "achieve",
            "accomplish",
            "success",
            "improve",
            "reduce",
            "impact",
            "result",
        ],
        answer: answer_achievements,
    },
];

/// Answers questions from a borrowed profile store.
pub struct QueryMatcher<'a> {
    store: &'a ProfileStore,
}

impl<'a> QueryMatcher<'a> {
    pub fn new(store: &'a ProfileStore) -> Self {
        Self { store }
    }

    pub fn process(&self, query: &str) -> QueryResult {
        let query = query.to_lowercase();

        if let Some(rule) = RULES.iter().find(|r| r.fires(&query)) {
            debug!("Query routed to '{}' rule", rule.name);
            return (rule.answer)(self.store, &query);
        }

        self.keyword_fallback(&query)
    }

    fn keyword_fallback(&self, query: &str) -> QueryResult {
        query
            .split_whitespace()
            .find_map(|word| self.store.search_by_keyword(word))
            .map(|found| {
                QueryResult::new(
                    format!("Found information: {}", render_value(found)),
                    KEYWORD_CONFIDENCE,
                    "keyword_search",
                )
            })
            .unwrap_or_else(QueryResult::no_match)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rule handlers
// ────────────────────────────────────────────────────────────────────────────

fn answer_skills(store: &ProfileStore, query: &str) -> QueryResult {
    let primary = string_list(store.get(&profile_path!["skills", "primary"]));
    let frameworks = string_list(store.get(&profile_path!["skills", "frameworks"]));
    let databases = string_list(store.get(&profile_path!["skills", "databases"]));
    let tools = string_list(store.get(&profile_path!["skills", "tools"]));

    let rated = primary
        .iter()
        .chain(&frameworks)
        .chain(&databases)
        .filter(|skill| query.contains(&skill.to_lowercase()))
        .find_map(|skill| {
            store
                .get(&profile_path!["skills", "proficiency", *skill])
                .and_then(Value::as_str)
                .filter(|rating| !rating.trim().is_empty())
                .map(|rating| (*skill, rating))
        });

    if let Some((skill, rating)) = rated {
        return QueryResult::new(
            format!("Proficiency in {skill}: {rating}"),
            0.95,
            "skills_proficiency",
        );
    }

    let specialization = field_text(store.get(&profile_path!["skills", "specialization"]), NOT_PROVIDED);
    QueryResult::new(
        format!(
            "Technical skills include:\n\
             - Languages: {}\n\
             - Frameworks: {}\n\
             - Databases: {}\n\
             - Tools: {}\n\
             - Specialization: {specialization}",
            primary.join(", "),
            frameworks.join(", "),
            databases.join(", "),
            tools.join(", "),
        ),
        0.95,
        "skills_database",
    )
}

fn answer_experience(store: &ProfileStore, query: &str) -> QueryResult {
    if mentions(query, CURRENT_TRIGGERS) {
        let role = field_text(store.get(&profile_path!["experience", "current", "role"]), NOT_PROVIDED);
        let company = field_text(
            store.get(&profile_path!["experience", "current", "company"]),
            NOT_PROVIDED,
        );
        let duration = field_text(
            store.get(&profile_path!["experience", "current", "duration"]),
            NOT_PROVIDED,
        );
        let achievements = string_list(store.get(&profile_path!["experience", "current", "achievements"]));

        return QueryResult::new(
            format!(
                "Currently working as {role} at {company} since {}.\n\nKey achievements:\n{}",
                start_of(&duration),
                bullets(&achievements)
            ),
            0.95,
            "experience_current",
        );
    }

    if mentions(query, RESPONSIBILITY_TRIGGERS) {
        let responsibilities = string_list(store.get(&profile_path![
            "experience",
            "current",
            "responsibilities"
        ]));
        return QueryResult::new(
            format!("Current responsibilities:\n{}", bullets(&responsibilities)),
            0.90,
            "responsibilities",
        );
    }

    let total = field_text(store.get(&profile_path!["experience", "total_years"]), NOT_PROVIDED);
    QueryResult::new(
        format!("Total professional experience: {total}"),
        0.90,
        "experience_total",
    )
}

/// The text before the first `-` of a free-text range: `"Sep 2022 - Present"` → `"Sep 2022"`.
fn start_of(duration: &str) -> &str {
    duration.split('-').next().unwrap_or(duration).trim()
}

fn answer_education(store: &ProfileStore, _query: &str) -> QueryResult {
    let degree = field_text(store.get(&profile_path!["education", "degree"]), NOT_PROVIDED);
    let field = field_text(store.get(&profile_path!["education", "field"]), NOT_PROVIDED);
    let year = field_text(store.get(&profile_path!["education", "graduation_year"]), NOT_PROVIDED);
    QueryResult::new(
        format!("Education: {degree} in {field}, graduated in {year}"),
        0.95,
        "education",
    )
}

fn answer_projects(store: &ProfileStore, _query: &str) -> QueryResult {
    let lines: Vec<String> = store
        .get(&profile_path!["projects"])
        .and_then(|p| p.as_object())
        .map(|projects| {
            projects
                .values()
                .map(|project| {
                    format!(
                        "- {}: {} (Impact: {})",
                        field_text(project.get("name"), NOT_PROVIDED),
                        field_text(project.get("description"), NOT_PROVIDED),
                        field_text(project.get("impact"), NOT_PROVIDED),
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    QueryResult::new(
        format!("Key projects:\n{}", lines.join("\n")),
        0.90,
        "projects",
    )
}

fn answer_contact(store: &ProfileStore, _query: &str) -> QueryResult {
    let email = field_text(store.get(&profile_path!["personal", "email"]), NOT_PROVIDED);
    let linkedin = field_text(store.get(&profile_path!["personal", "linkedin"]), NOT_PROVIDED);
    let github = field_text(store.get(&profile_path!["personal", "github"]), NOT_PROVIDED);
    QueryResult::new(
        format!(
            "Contact information:\n- Email: {email}\n- LinkedIn: {linkedin}\n- GitHub: {github}"
        ),
        0.95,
        "contact_info",
    )
}

fn answer_achievements(store: &ProfileStore, _query: &str) -> QueryResult {
    let lines: Vec<String> = store
        .get(&profile_path!["achievements"])
        .and_then(|a| a.as_object())
        .map(|achievements| {
            achievements
                .iter()
                .map(|(key, value)| format!("- {}: {}", title_case(key), render_value(value)))
                .collect()
        })
        .unwrap_or_default();

    QueryResult::new(
        format!("Key achievements:\n{}", lines.join("\n")),
        0.90,
        "achievements",
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::seed::default_profile;
    use serde_json::json;

    fn ask(query: &str) -> QueryResult {
        let store = ProfileStore::seeded();
        QueryMatcher::new(&store).process(query)
    }

    fn store_with(edit: impl FnOnce(&mut serde_json::Value)) -> ProfileStore {
        let mut data = default_profile();
        edit(&mut data);
        ProfileStore::new(data, vec![("python", profile_path!["skills", "primary"])]).unwrap()
    }

    #[test]
    fn test_technical_skills_summary() {
        let result = ask("What are your technical skills?");
        assert_eq!(result.source, "skills_database");
        assert_eq!(result.confidence, 0.95);
        assert!(result.answer.starts_with("Technical skills include:"));
        assert!(result
            .answer
            .contains("- Languages: Python, FastAPI, Redis, RabbitMQ, Elasticsearch"));
        assert!(result.answer.contains("- Tools: Docker, Git, RabbitMQ"));
        assert!(result
            .answer
            .contains("- Specialization: Backend development, IoT systems, API optimization"));
    }

    #[test]
    fn test_skill_proficiency_for_named_skill() {
        let result = ask("How expert are you in Python?");
        assert_eq!(result.source, "skills_proficiency");
        assert_eq!(result.answer, "Proficiency in Python: Expert");
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_skill_without_rating_falls_back_to_summary() {
        let result = ask("Do you know Django?");
        assert_eq!(result.source, "skills_database");
    }

    #[test]
    fn test_blank_or_null_rating_is_not_a_rating() {
        let store = store_with(|data| {
            data["skills"]["proficiency"]["Python"] = json!(null);
            data["skills"]["proficiency"]["FastAPI"] = json!("");
            data["skills"]["proficiency"]["Redis"] = json!("   ");
        });
        let matcher = QueryMatcher::new(&store);

        assert_eq!(matcher.process("How expert in Python?").source, "skills_database");
        assert_eq!(matcher.process("fastapi skill level").source, "skills_database");
        assert_eq!(matcher.process("redis skills?").source, "skills_database");
    }

    #[test]
    fn test_unrated_skill_falls_through_to_next_named_skill() {
        let store = store_with(|data| {
            data["skills"]["proficiency"]["Python"] = json!(null);
        });
        let result = QueryMatcher::new(&store).process("Python or PostgreSQL, which tool?");
        assert_eq!(result.source, "skills_proficiency");
        assert_eq!(result.answer, "Proficiency in PostgreSQL: Intermediate");
    }

    #[test]
    fn test_proficiency_lookup_checks_databases_too() {
        let result = ask("Which database tech: postgresql?");
        assert_eq!(result.answer, "Proficiency in PostgreSQL: Intermediate");
    }

    #[test]
    fn test_current_job() {
        let result = ask("Tell me about your current job");
        assert_eq!(result.source, "experience_current");
        assert_eq!(result.confidence, 0.95);
        assert!(result.answer.contains("DigitalPetro Private Limited"));
        assert!(result.answer.starts_with(
            "Currently working as Software Engineer at DigitalPetro Private Limited since Sep 2022."
        ));
        assert!(result
            .answer
            .contains("Key achievements:\n- Spearheaded IoT systems development in petrol stations"));
    }

    #[test]
    fn test_responsibilities() {
        let result = ask("What are your duties at work?");
        assert_eq!(result.source, "responsibilities");
        assert_eq!(result.confidence, 0.90);
        assert!(result
            .answer
            .starts_with("Current responsibilities:\n- Develop and maintain backend services"));
    }

    #[test]
    fn test_total_experience() {
        let result = ask("How many years of experience do you have?");
        assert_eq!(result.source, "experience_total");
        assert_eq!(result.answer, "Total professional experience: 2 years 9 months");
        assert_eq!(result.confidence, 0.90);
    }

    #[test]
    fn test_experience_rule_outranks_project_rule() {
        let result = ask("What projects have you worked on?");
        assert_eq!(result.source, "experience_total");
    }

    #[test]
    fn test_education() {
        let result = ask("What is your education background?");
        assert_eq!(result.source, "education");
        assert_eq!(
            result.answer,
            "Education: Bachelor of Technology in Computer Science and Engineering, graduated in 2022"
        );
    }

    #[test]
    fn test_projects() {
        let result = ask("Show me something you built");
        assert_eq!(result.source, "projects");
        assert_eq!(result.confidence, 0.90);
        let lines: Vec<&str> = result.answer.lines().collect();
        assert_eq!(lines[0], "Key projects:");
        assert_eq!(
            lines[1],
            "- IoT-Enabled Petrol Station Management: Developed backend for managing IoT devices in petrol stations (Impact: Improved operational efficiency by 40%)"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_contact() {
        let result = ask("contact");
        assert_eq!(result.source, "contact_info");
        assert_eq!(result.confidence, 0.95);
        assert_eq!(
            result.answer,
            "Contact information:\n- Email: aayush@example.com\n- LinkedIn: linkedin.com/in/aayush-kushwaha\n- GitHub: github.com/aayush"
        );
    }

    #[test]
    fn test_contact_substitutes_not_provided() {
        let store = store_with(|data| {
            let personal = data["personal"].as_object_mut().unwrap();
            personal.remove("email");
            personal.remove("github");
        });
        let result = QueryMatcher::new(&store).process("How can I reach you?");
        assert!(result.answer.contains("- Email: Not provided"));
        assert!(result.answer.contains("- GitHub: Not provided"));
        assert!(result.answer.contains("- LinkedIn: linkedin.com/in/aayush-kushwaha"));
    }

    #[test]
    fn test_achievements_in_insertion_order_with_title_case_keys() {
        let result = ask("What is your biggest achievement?");
        assert_eq!(result.source, "achievements");
        let lines: Vec<&str> = result.answer.lines().collect();
        assert_eq!(lines[0], "Key achievements:");
        assert!(lines[1].starts_with("- Performance: "));
        assert!(lines[2].starts_with("- Scale: "));
        assert!(lines[3].starts_with("- Technical: "));
        assert!(lines[4].starts_with("- Recognition: "));
    }

    #[test]
    fn test_keyword_fallback_python() {
        let result = ask("python");
        assert_eq!(result.source, "keyword_search");
        assert_eq!(result.confidence, 0.70);
        let expected = render_value(&json!(["Python", "FastAPI", "Redis", "RabbitMQ", "Elasticsearch"]));
        assert_eq!(result.answer, format!("Found information: {expected}"));
    }

    #[test]
    fn test_keyword_fallback_uses_first_matching_word() {
        let result = ask("bangalore or nepal");
        assert_eq!(result.answer, "Found information: Bengaluru, Karnataka, India");
    }

    #[test]
    fn test_gibberish_is_no_match() {
        let result = ask("asdkjasd");
        assert_eq!(result, QueryResult::no_match());
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.source, "no_match");
    }

    #[test]
    fn test_empty_query_is_no_match() {
        assert_eq!(ask("   ").source, "no_match");
    }

    #[test]
    fn test_broken_profile_degrades_without_panicking() {
        let store = store_with(|data| {
            data["skills"]["primary"] = json!("Python");
            data["experience"]["current"] = json!("n/a");
            data["projects"] = json!([]);
        });
        let matcher = QueryMatcher::new(&store);

        let skills = matcher.process("what tech do you use?");
        assert!(skills.answer.contains("- Languages: \n"));

        let current = matcher.process("current job?");
        assert!(current
            .answer
            .starts_with("Currently working as Not provided at Not provided since Not provided."));

        assert_eq!(matcher.process("something you built").answer, "Key projects:\n");
        assert_eq!(matcher.process("python").answer, "Found information: Python");
    }

    #[test]
    fn test_start_of_duration() {
        assert_eq!(start_of("Sep 2022 - Present"), "Sep 2022");
        assert_eq!(start_of("2020"), "2020");
        assert_eq!(start_of(""), "");
    }
}
