//! Static candidate profile rendered into the LLM prompts

use std::fmt::Write;

pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub skills: &'static [(&'static str, &'static str)],
    pub highlights: &'static [&'static str],
}

pub static PROFILE: Profile = Profile {
    name: "Alex Navarro",
    title: "Senior Software Engineer",
    summary: "Backend-leaning full-stack engineer with a decade of experience \
              building and operating distributed web services, from early-stage \
              prototypes to platforms serving millions of requests a day.",
    skills: &[
        ("Languages", "Rust, TypeScript, Go, SQL"),
        ("Backend", "axum, tokio, gRPC, PostgreSQL, Redis"),
        ("Infrastructure", "Kubernetes, Terraform, AWS, observability tooling"),
    ],
    highlights: &[
        "Led the migration of a monolithic API to service-oriented Rust backends",
        "Cut p99 latency of a core checkout flow by 70% through cache redesign",
        "Built and ran an on-call culture for a 12-engineer platform team",
    ],
};

/// System prompt for the portfolio chat widget
#[must_use]
pub fn chat_system_prompt() -> String {
    let mut prompt = format!(
        "You are an assistant embedded in the portfolio website of {name}, {title}. \
         Answer questions about their background truthfully based on the profile \
         below, and decline questions unrelated to their professional background.\n\n\
         Summary: {summary}\n\nSkills:\n",
        name = PROFILE.name,
        title = PROFILE.title,
        summary = PROFILE.summary,
    );

    for (category, items) in PROFILE.skills {
        let _ = writeln!(prompt, "- {category}: {items}");
    }

    prompt.push_str("\nCareer highlights:\n");
    for highlight in PROFILE.highlights {
        let _ = writeln!(prompt, "- {highlight}");
    }

    prompt
}

/// Prompt asking for a JSON job-fit report
#[must_use]
pub fn fit_analysis_prompt(job_description: &str) -> String {
    let mut prompt = format!(
        "You are a career matching expert. Analyze how well this candidate \
         matches a job description.\n\n\
         CANDIDATE PROFILE:\n\
         Name: {name}\n\
         Title: {title}\n\
         Summary: {summary}\n\nSkills:\n",
        name = PROFILE.name,
        title = PROFILE.title,
        summary = PROFILE.summary,
    );

    for (category, items) in PROFILE.skills {
        let _ = writeln!(prompt, "{category}: {items}");
    }

    prompt.push_str("\nCareer Highlights:\n");
    for (index, highlight) in PROFILE.highlights.iter().enumerate() {
        let _ = writeln!(prompt, "{}. {highlight}", index + 1);
    }

    let _ = write!(
        prompt,
        "\nJOB DESCRIPTION TO ANALYZE:\n{job_description}\n\n\
         Respond with ONLY a JSON object of this exact shape, no markdown and \
         no explanation:\n\
         {{\n\
           \"matchScore\": <number 0-100>,\n\
           \"matchLevel\": \"<Excellent Match|Strong Match|Good Match|Moderate Match|Limited Match>\",\n\
           \"relevantExperience\": [\"<specific matching experience>\"],\n\
           \"keyStrengths\": [\"<short phrases>\"],\n\
           \"potentialGaps\": [\"<constructive discussion points>\"],\n\
           \"recommendation\": \"<1-2 sentence recommendation>\"\n\
         }}\n\
         Keep the arrays concise but meaningful (3-5 items each) and let the \
         score reflect genuine fit."
    );

    prompt
}
