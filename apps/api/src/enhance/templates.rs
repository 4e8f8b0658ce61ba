//! Enhancement template table — static, process-wide, read-only.
//!
//! Each recognized section maps to an ordered list of templates. Templates
//! for `summary` and `experience_description` carry the `{content}` marker
//! and weave the caller's text in; the `skills` templates are fixed lists
//! that discard the input entirely.

/// Substitution marker replaced with the caller's original content.
pub const CONTENT_MARKER: &str = "{content}";

pub const SUMMARY_TEMPLATES: &[&str] = &[
    "Results-driven professional with proven expertise in {content}. Demonstrated ability to \
     deliver high-impact solutions and drive organizational success through innovative \
     problem-solving and strategic thinking.",
    "Dynamic and accomplished {content} with a track record of exceeding expectations. Combines \
     technical expertise with strong leadership skills to mentor teams and deliver exceptional \
     results.",
    "Highly motivated professional specializing in {content}. Known for analytical thinking, \
     attention to detail, and the ability to transform complex challenges into streamlined \
     solutions.",
];

pub const EXPERIENCE_TEMPLATES: &[&str] = &[
    "• Spearheaded {content}, resulting in improved efficiency and measurable business impact\n\
     • Collaborated cross-functionally to implement best practices and drive continuous improvement\n\
     • Mentored junior team members and contributed to knowledge sharing initiatives",
    "• Led strategic initiatives in {content}, delivering exceptional results and exceeding performance targets\n\
     • Developed and implemented innovative solutions that enhanced operational effectiveness\n\
     • Built strong stakeholder relationships and facilitated successful project outcomes",
    "• Executed comprehensive {content} strategies, achieving significant improvements in key performance metrics\n\
     • Demonstrated expertise in problem-solving and process optimization\n\
     • Contributed to team success through effective communication and collaborative leadership",
];

pub const SKILLS_TEMPLATES: &[&str] = &[
    "JavaScript, TypeScript, React, Node.js, Python, AWS, Docker, MongoDB, PostgreSQL, Git, \
     Agile Methodologies, CI/CD, RESTful APIs, GraphQL, Microservices Architecture",
    "Full-Stack Development, Cloud Computing, DevOps, Machine Learning, Data Analysis, Project \
     Management, Team Leadership, System Design, Database Management, API Development",
    "React, Vue.js, Angular, Python, Java, C++, AWS, Azure, Kubernetes, Jenkins, Redis, \
     Elasticsearch, Apache Kafka, Terraform, Software Architecture",
];

/// Returns the template list for a section, or `None` for unrecognized names.
pub fn templates_for_section(section: &str) -> Option<&'static [&'static str]> {
    match section {
        "summary" => Some(SUMMARY_TEMPLATES),
        "experience_description" => Some(EXPERIENCE_TEMPLATES),
        "skills" => Some(SKILLS_TEMPLATES),
        _ => None,
    }
}
