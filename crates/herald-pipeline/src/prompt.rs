//! Fixed personas and user-turn templates for the two pipelines.
//!
//! Both prompts are constant for the life of the process; the only dynamic
//! part is the artifact content embedded in the user turn.

const REVIEW_SYSTEM_PROMPT: &str = "\
You are a strict senior Java reviewer.
Stack: Java 21, Spring Boot, JPA, microservices.

Response format:
1) Summary
2) Blocking Issues (P0/P1)
3) Improvements (P2)
4) Suggested Patch";

const AUDIT_SYSTEM_PROMPT: &str = "\
You are a senior Java architect.
Specialization: Spring Boot, JPA, microservices, Kafka, Eureka, Gateway.

Perform an architecture audit of the project.

Check:
1) Microservice boundaries
2) Layering violations (Controller/Service/Repository)
3) DTO vs Entity
4) Transactions
5) Potential N+1 queries
6) Dependencies between modules
7) Anti-patterns

Format:
1) Overall score (0-10)
2) Critical problems
3) Architectural risks
4) Improvements
5) Concrete recommendations";

/// System persona for the PR review pipeline.
///
/// # Examples
///
/// ```
/// use herald_pipeline::prompt::review_system_prompt;
///
/// let prompt = review_system_prompt();
/// assert!(prompt.contains("Blocking Issues"));
/// ```
pub fn review_system_prompt() -> String {
    REVIEW_SYSTEM_PROMPT.to_string()
}

/// User turn for the review pipeline, embedding the diff verbatim.
pub fn review_user_prompt(diff: &str) -> String {
    format!("Review this diff:\n\n{diff}")
}

/// System persona for the architecture audit pipeline.
pub fn audit_system_prompt() -> String {
    AUDIT_SYSTEM_PROMPT.to_string()
}

/// User turn for the audit pipeline: the snapshot itself, already capped to
/// the character budget by the caller.
pub fn audit_user_prompt(snapshot: &str) -> String {
    snapshot.to_string()
}
