//! Renderer module
//!
//! Renders a repository list to different output formats: plain, json, jsonl

use crate::core::model::Repo;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Renderer for repository lists
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a repository list to a string
    pub fn render(&self, repos: &[Repo]) -> String {
        match self.format {
            OutputFormat::Plain => Self::render_plain(repos),
            OutputFormat::Json => Self::render_json(repos),
            OutputFormat::Jsonl => Self::render_jsonl(repos),
        }
    }

    /// Render to a writer, with a trailing newline when there is output
    pub fn render_to<W: Write>(&self, repos: &[Repo], mut writer: W) -> std::io::Result<()> {
        let output = self.render(repos);
        if output.is_empty() {
            return Ok(());
        }
        writeln!(writer, "{}", output)
    }

    /// One `short_name<TAB>full_path` line per repository
    fn render_plain(repos: &[Repo]) -> String {
        repos
            .iter()
            .map(|r| format!("{}\t{}", r.short_name, r.full_path))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Same layout as the cache file
    fn render_json(repos: &[Repo]) -> String {
        serde_json::to_string_pretty(repos).unwrap_or_else(|_| "[]".to_string())
    }

    fn render_jsonl(repos: &[Repo]) -> String {
        repos
            .iter()
            .filter_map(|r| serde_json::to_string(r).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repos() -> Vec<Repo> {
        vec![
            Repo {
                short_name: "org/api".to_string(),
                full_path: "/src/org/api".to_string(),
            },
            Repo {
                short_name: "org/web".to_string(),
                full_path: "/src/org/web".to_string(),
            },
        ]
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("plain".parse::<OutputFormat>(), Ok(OutputFormat::Plain));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("jsonl".parse::<OutputFormat>(), Ok(OutputFormat::Jsonl));
        assert!("md".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_plain() {
        let out = Renderer::new(OutputFormat::Plain).render(&repos());
        assert_eq!(out, "org/api\t/src/org/api\norg/web\t/src/org/web");
    }

    #[test]
    fn test_render_jsonl() {
        let out = Renderer::new(OutputFormat::Jsonl).render(&repos());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"short_name":"org/api","full_path":"/src/org/api"}"#
        );
    }

    #[test]
    fn test_render_json_parses_back() {
        let out = Renderer::new(OutputFormat::Json).render(&repos());
        let parsed: Vec<Repo> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, repos());
    }

    #[test]
    fn test_render_to_empty_plain_writes_nothing() {
        let mut buf = Vec::new();
        Renderer::new(OutputFormat::Plain)
            .render_to(&[], &mut buf)
            .unwrap();
        assert!(buf.is_empty());
    }
}
