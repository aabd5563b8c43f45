use std::path::Path;

/// Languages whose import statements the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    /// TypeScript and JavaScript in all their module flavours.
    EcmaScript,
    Python,
    Go,
    Rust,
}

impl Lang {
    #[must_use]
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext {
            "ts" | "tsx" | "js" | "jsx" | "mjs" | "cjs" | "mts" | "cts" => Some(Self::EcmaScript),
            "py" | "pyi" => Some(Self::Python),
            "go" => Some(Self::Go),
            "rs" => Some(Self::Rust),
            _ => None,
        }
    }

    /// Detects the language of a repository path from its extension.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let ext = Path::new(path).extension().and_then(|e| e.to_str())?;
        Self::from_ext(ext)
    }

    /// Extensions tried, in order, when a specifier names a file without one.
    #[must_use]
    pub fn probe_extensions(self) -> &'static [&'static str] {
        match self {
            Self::EcmaScript => &["ts", "tsx", "js", "jsx", "mjs", "cjs"],
            Self::Python => &["py"],
            Self::Go => &["go"],
            Self::Rust => &["rs"],
        }
    }

    /// Files that stand for a directory when a specifier names one.
    #[must_use]
    pub fn index_files(self) -> &'static [&'static str] {
        match self {
            Self::EcmaScript => &["index.ts", "index.tsx", "index.js", "index.jsx"],
            Self::Python => &["__init__.py"],
            Self::Go => &[],
            Self::Rust => &["mod.rs"],
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EcmaScript => "ecmascript",
            Self::Python => "python",
            Self::Go => "go",
            Self::Rust => "rust",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ext() {
        assert_eq!(Lang::from_ext("rs"), Some(Lang::Rust));
        assert_eq!(Lang::from_ext("tsx"), Some(Lang::EcmaScript));
        assert_eq!(Lang::from_ext("md"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Lang::from_path("pkg/server.go"), Some(Lang::Go));
        assert_eq!(Lang::from_path("src/app/__init__.py"), Some(Lang::Python));
        assert_eq!(Lang::from_path("Makefile"), None);
        assert_eq!(Lang::from_path("docs/README.md"), None);
    }
}
