//! Known tags and languages used across the rule corpus

/// Tags used to categorize security rules.
///
/// Extend this list when a rule introduces a new category.
pub const KNOWN_TAGS: &[&str] = &[
    "authentication",
    "data-security",
    "infrastructure",
    "legal",
    "privacy",
    "secrets",
    "web",
];

/// Languages a rule may target.
pub const KNOWN_LANGUAGES: &[&str] = &[
    "agda", "astro", "c", "c++", "cairo", "clojure", "coq", "cpp", "cuda", "d", "dart", "docker",
    "elixir", "elm", "erlang", "fsharp", "glsl", "go", "handlebars", "hlsl", "html", "idris",
    "java", "javascript", "julia", "kotlin", "latex", "lean", "liquid", "lua", "markdown",
    "matlab", "mdx", "nim", "ocaml", "opencl", "perl", "php", "powershell", "purescript",
    "python", "r", "ruby", "rust", "scala", "shell", "solidity", "sql", "svelte", "sway", "swift",
    "typescript", "verilog", "vhdl", "vlang", "vue", "vyper", "wgsl", "xml", "yaml", "zig",
];

/// Tags compare case-insensitively.
pub fn is_known_tag(tag: &str) -> bool {
    let tag = tag.trim().to_lowercase();
    KNOWN_TAGS.contains(&tag.as_str())
}

pub fn is_known_language(language: &str) -> bool {
    KNOWN_LANGUAGES.contains(&language.trim())
}
