//! Built-in profile dataset and keyword map, used when no `PROFILE_PATH` is configured.

use serde_json::{json, Value};

use crate::profile::path::{profile_path, PathSegment};

/// Top-level categories every profile document must carry.
pub const CATEGORIES: [&str; 6] = [
    "personal",
    "skills",
    "experience",
    "education",
    "achievements",
    "projects",
];

pub fn default_profile() -> Value {
    json!({
        "personal": {
            "name": "Aayush Kushwaha",
            "title": "Backend Developer",
            "location": "Bengaluru, Karnataka, India",
            "email": "aayush@example.com",
            "linkedin": "linkedin.com/in/aayush-kushwaha",
            "github": "github.com/aayush",
            "summary": "A passionate backend developer with a strong drive for building efficient and scalable systems. Experienced in optimizing APIs, implementing caching solutions, and developing IoT systems."
        },
        "skills": {
            "primary": ["Python", "FastAPI", "Redis", "RabbitMQ", "Elasticsearch"],
            "frameworks": ["FastAPI", "Django"],
            "databases": ["Redis", "PostgreSQL", "MongoDB"],
            "tools": ["Docker", "Git", "RabbitMQ"],
            "specialization": "Backend development, IoT systems, API optimization",
            "proficiency": {
                "Python": "Expert",
                "FastAPI": "Advanced",
                "Redis": "Advanced",
                "PostgreSQL": "Intermediate",
                "Docker": "Intermediate"
            }
        },
        "experience": {
            "total_years": "2 years 9 months",
            "current": {
                "company": "DigitalPetro Private Limited",
                "role": "Software Engineer",
                "duration": "Sep 2022 - Present",
                "location": "Bengaluru, Karnataka, India",
                "type": "Full-time",
                "responsibilities": [
                    "Develop and maintain backend services for IoT-enabled petrol stations",
                    "Design and implement RESTful APIs using FastAPI",
                    "Optimize database queries and implement caching strategies",
                    "Integrate with message brokers for asynchronous processing"
                ],
                "achievements": [
                    "Spearheaded IoT systems development in petrol stations",
                    "Reduced API response time from 45 seconds to <1 second",
                    "Implemented Redis caching for high-performance solutions",
                    "Leveraged FastAPI, Redis, and RabbitMQ for scalable architecture"
                ],
                "technologies": ["Python", "FastAPI", "Redis", "RabbitMQ", "PostgreSQL", "Docker"]
            },
            "previous": [
                {
                    "company": "JSpiders - Training & Development Center",
                    "role": "Student Mentor",
                    "duration": "Jul 2022 - Sep 2022",
                    "period": "3 months",
                    "location": "Bengaluru, Karnataka, India",
                    "type": "Part-time",
                    "responsibilities": [
                        "Mentor students on Python programming and databases",
                        "Conduct mock interviews and career counseling",
                        "Develop curriculum for backend development courses"
                    ],
                    "achievements": [
                        "Mentored 200+ students on career goals",
                        "Provided Python and database guidance",
                        "Conducted mock interviews with 90% student satisfaction"
                    ]
                },
                {
                    "company": "DigiNirman",
                    "role": "Engineer Intern",
                    "duration": "Aug 2021 - Jun 2022",
                    "period": "11 months",
                    "location": "Biratnagar, Nepal",
                    "type": "Full-time",
                    "responsibilities": [
                        "Develop automation scripts for AI projects",
                        "Annotate and process video data using CVAT",
                        "Build CRUD applications for data management"
                    ],
                    "achievements": [
                        "Developed scripts for AI Robo Traffic project",
                        "Utilized CVAT for video data annotation",
                        "Built CRUD operation project with 95% accuracy in data processing"
                    ]
                }
            ]
        },
        "education": {
            "degree": "Bachelor of Technology",
            "field": "Computer Science and Engineering",
            "graduation_year": "2022",
            "coursework": ["Data Structures", "Algorithms", "Database Management", "Software Engineering"]
        },
        "achievements": {
            "performance": "Reduced API load times from 45 seconds to less than 1 second",
            "scale": "Mentored 200+ students successfully",
            "technical": "Implemented efficient Redis caching system reducing database load by 80%",
            "recognition": "Recognized for exceptional performance in IoT project delivery"
        },
        "projects": {
            "iot_petrol_station": {
                "name": "IoT-Enabled Petrol Station Management",
                "description": "Developed backend for managing IoT devices in petrol stations",
                "technologies": ["FastAPI", "Redis", "RabbitMQ", "PostgreSQL"],
                "impact": "Improved operational efficiency by 40%"
            },
            "api_optimization": {
                "name": "API Performance Optimization",
                "description": "Optimized legacy APIs reducing response time from 45s to <1s",
                "technologies": ["Python", "Redis", "Elasticsearch"],
                "impact": "Enhanced user experience for 10,000+ daily users"
            }
        }
    })
}

/// Keyword → profile path pairs. Multi-word keys are reachable through the
/// search endpoint but never through the matcher's whitespace split.
pub fn default_keywords() -> Vec<(&'static str, Vec<PathSegment>)> {
    vec![
        // skills
        ("python", profile_path!["skills", "primary"]),
        ("fastapi", profile_path!["skills", "frameworks"]),
        ("redis", profile_path!["skills", "databases"]),
        ("backend", profile_path!["personal", "title"]),
        ("docker", profile_path!["skills", "tools"]),
        ("postgresql", profile_path!["skills", "databases"]),
        ("mongodb", profile_path!["skills", "databases"]),
        ("rabbitmq", profile_path!["skills", "tools"]),
        // experience
        ("experience", profile_path!["experience", "total_years"]),
        ("current job", profile_path!["experience", "current"]),
        ("digitalpetro", profile_path!["experience", "current"]),
        ("jspiders", profile_path!["experience", "previous", 0usize]),
        ("diginirman", profile_path!["experience", "previous", 1usize]),
        ("responsibilities", profile_path!["experience", "current", "responsibilities"]),
        // achievements
        ("achievement", profile_path!["achievements"]),
        ("performance", profile_path!["achievements", "performance"]),
        ("api optimization", profile_path!["achievements", "performance"]),
        ("mentoring", profile_path!["achievements", "scale"]),
        // location
        ("location", profile_path!["personal", "location"]),
        ("bengaluru", profile_path!["personal", "location"]),
        ("bangalore", profile_path!["personal", "location"]),
        ("nepal", profile_path!["experience", "previous", 1usize, "location"]),
        // education
        ("education", profile_path!["education"]),
        ("degree", profile_path!["education", "degree"]),
        ("graduation", profile_path!["education", "graduation_year"]),
        // projects
        ("projects", profile_path!["projects"]),
        ("iot", profile_path!["projects", "iot_petrol_station"]),
        ("api", profile_path!["projects", "api_optimization"]),
        // contact
        ("contact", profile_path!["personal"]),
        ("email", profile_path!["personal", "email"]),
        ("linkedin", profile_path!["personal", "linkedin"]),
        ("github", profile_path!["personal", "github"]),
    ]
}
