use super::FrameworkId;

crate::define_id_enum! {
    /// Programming language identifier for the project profile
    LanguageId {
        Node => "node" : "Node.js" | "nodejs" | "node.js" | "javascript" | "js",
        Python => "python" : "Python" | "py",
    }
}

impl LanguageId {
    /// Toolchain version pinned into generated workflows and base images.
    pub fn version(&self) -> &'static str {
        match self {
            LanguageId::Node => "20",
            LanguageId::Python => "3.11",
        }
    }

    /// Conventional listen port applications of this language default to.
    pub fn default_port(&self) -> u16 {
        match self {
            LanguageId::Node => 3000,
            LanguageId::Python => 8000,
        }
    }

    /// The most common framework, used when no framework signal is present.
    pub fn default_framework(&self) -> FrameworkId {
        match self {
            LanguageId::Node => FrameworkId::Express,
            LanguageId::Python => FrameworkId::Flask,
        }
    }

    /// Frameworks that belong to this language.
    pub fn frameworks(&self) -> &'static [FrameworkId] {
        match self {
            LanguageId::Node => &[FrameworkId::Express, FrameworkId::NextJs, FrameworkId::NestJs],
            LanguageId::Python => &[FrameworkId::Django, FrameworkId::Flask, FrameworkId::FastApi],
        }
    }

    pub fn package_manager(&self) -> &'static str {
        match self {
            LanguageId::Node => "npm",
            LanguageId::Python => "pip",
        }
    }

    /// Dependency manifest consulted in generated troubleshooting docs.
    pub fn dependency_file(&self) -> &'static str {
        match self {
            LanguageId::Node => "package.json",
            LanguageId::Python => "requirements.txt",
        }
    }

    /// Clean-install command used in CI (reproducible installs).
    pub fn ci_install_command(&self) -> &'static str {
        match self {
            LanguageId::Node => "npm ci",
            LanguageId::Python => "pip install -r requirements.txt",
        }
    }

    /// Install command suggested for local development.
    pub fn install_command(&self) -> &'static str {
        match self {
            LanguageId::Node => "npm install",
            LanguageId::Python => "pip install -r requirements.txt",
        }
    }

    pub fn test_command(&self) -> &'static str {
        match self {
            LanguageId::Node => "npm test",
            LanguageId::Python => "pytest",
        }
    }

    pub fn lint_command(&self) -> &'static str {
        match self {
            LanguageId::Node => "npm run lint",
            LanguageId::Python => "ruff check .",
        }
    }

    pub fn build_command(&self) -> &'static str {
        match self {
            LanguageId::Node => "npm run build",
            LanguageId::Python => "python -m compileall .",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_id_serialization() {
        assert_eq!(serde_json::to_string(&LanguageId::Node).unwrap(), "\"node\"");
        assert_eq!(
            serde_json::to_string(&LanguageId::Python).unwrap(),
            "\"python\""
        );
    }

    #[test]
    fn test_language_id_deserialization() {
        assert_eq!(
            serde_json::from_str::<LanguageId>("\"node\"").unwrap(),
            LanguageId::Node
        );
        assert!(serde_json::from_str::<LanguageId>("\"cobol\"").is_err());
    }

    #[test]
    fn test_language_aliases() {
        assert_eq!(LanguageId::from_name("nodejs"), Some(LanguageId::Node));
        assert_eq!(LanguageId::from_name("Node.js"), Some(LanguageId::Node));
        assert_eq!(LanguageId::from_name("PY"), Some(LanguageId::Python));
        assert_eq!(LanguageId::from_name("ruby"), None);
    }

    #[test]
    fn test_default_framework_belongs_to_language() {
        for lang in LanguageId::all_variants() {
            assert_eq!(lang.default_framework().language(), *lang);
            assert!(lang.frameworks().contains(&lang.default_framework()));
        }
    }
}
