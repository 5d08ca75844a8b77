//! Skill vocabulary: the fixed set of terms the extractor recognises.
//!
//! Terms are lowercase and may contain spaces ("machine learning") or
//! punctuation ("c++", "node.js"). Add new terms to the matching category;
//! the extractor builds its matchers from this slice at startup.

pub const SKILL_VOCABULARY: &[&str] = &[
    // Programming languages
    "python", "javascript", "java", "cpp", "c++", "csharp", "c#", "ruby", "php", "swift",
    "kotlin", "go", "rust", "typescript", "scala", "perl", "r", "matlab", "groovy",
    "dart", "elixir", "haskell", "clojure", "lua", "bash", "shell", "powershell",
    // Frontend
    "react", "angular", "vue", "html", "css", "sass", "less", "bootstrap", "tailwind",
    "jquery", "webpack", "gulp", "grunt", "npm", "yarn", "babel", "next.js", "nuxt",
    "svelte", "ember", "backbone",
    // Backend & frameworks
    "nodejs", "node.js", "express", "django", "flask", "spring", "laravel", "rails",
    "asp.net", "fastapi", "nestjs", "nest.js", "graphql", "rest", "api",
    // Databases
    "mongodb", "mysql", "postgresql", "oracle", "sql", "cassandra", "redis",
    "elasticsearch", "dynamodb", "firebase", "couchdb", "sqlite", "mariadb",
    // Cloud & DevOps
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "gitlab", "github",
    "circleci", "terraform", "ansible", "cloudformation", "lambda", "heroku",
    // Tools & methodologies
    "git", "linux", "unix", "windows", "agile", "scrum", "jira", "confluence",
    "selenium", "junit", "pytest", "mocha", "jest", "vite",
    // Data science & ML
    "machine learning", "deep learning", "tensorflow", "pytorch", "scikit-learn",
    "pandas", "numpy", "spark", "hadoop", "data analysis", "nlp", "computer vision",
    "big data", "etl", "data pipeline", "ml", "ai", "artificial intelligence",
];

/// Role-title fragments. A keyword counts as a role keyword when it contains one of these.
pub const ROLE_TITLES: &[&str] = &[
    "developer",
    "engineer",
    "architect",
    "manager",
    "analyst",
    "designer",
    "data scientist",
    "devops",
    "qa",
    "tester",
];

/// Word characters in the same sense as a regex `\w`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True for terms whose punctuation would be erased by normalization
/// ("c++" → "c  "), so they must be matched against the raw text instead.
pub fn requires_raw_match(term: &str) -> bool {
    term.chars().any(|c| !is_word_char(c) && !c.is_whitespace())
}

pub fn is_role_keyword(keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    ROLE_TITLES.iter().any(|role| keyword.contains(role))
}
