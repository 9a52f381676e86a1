use axum::Json;
use serde::Serialize;

const STRUCTURED_QUERIES: &[&str] = &[
    "What are your technical skills?",
    "Tell me about your current job",
    "Which companies have you worked at?",
    "What is your biggest achievement?",
    "Where are you located?",
    "How many years of experience do you have?",
    "What projects have you worked on?",
    "What is your education background?",
    "How can I contact you?",
];

const LLM_QUERIES: &[&str] = &[
    "What makes you passionate about backend development?",
    "How do you approach solving complex problems?",
    "What are your career goals?",
    "Tell me about a challenging project you've worked on",
    "Why did you choose to work with FastAPI?",
    "What's your experience with microservices?",
];

#[derive(Debug, Serialize)]
pub struct ExampleQueries {
    pub structured_queries: &'static [&'static str],
    pub llm_queries: &'static [&'static str],
}

/// GET /examples
/// Sample questions for trying out the chat endpoint.
pub async fn examples_handler() -> Json<ExampleQueries> {
    Json(ExampleQueries {
        structured_queries: STRUCTURED_QUERIES,
        llm_queries: LLM_QUERIES,
    })
}
