use super::LanguageId;

crate::define_id_enum! {
    /// Web framework identifier, scoped to exactly one language
    FrameworkId {
        Express => "express" : "Express" | "expressjs" | "express.js",
        NextJs => "nextjs" : "Next.js" | "next" | "next.js",
        NestJs => "nestjs" : "NestJS" | "nest" | "nest.js",
        Django => "django" : "Django",
        Flask => "flask" : "Flask",
        FastApi => "fastapi" : "FastAPI" | "fast-api",
    }
}

impl FrameworkId {
    /// The language this framework belongs to. A profile never pairs a
    /// framework with a different language.
    pub fn language(&self) -> LanguageId {
        match self {
            FrameworkId::Express | FrameworkId::NextJs | FrameworkId::NestJs => LanguageId::Node,
            FrameworkId::Django | FrameworkId::Flask | FrameworkId::FastApi => LanguageId::Python,
        }
    }

    /// Production start command, used for the Procfile and container CMD.
    pub fn start_command(&self) -> &'static str {
        match self {
            FrameworkId::Express => "node server.js",
            FrameworkId::NextJs => "npm start",
            FrameworkId::NestJs => "node dist/main.js",
            FrameworkId::Django => "gunicorn config.wsgi:application",
            FrameworkId::Flask => "gunicorn app:app",
            FrameworkId::FastApi => "uvicorn main:app --host 0.0.0.0 --port $PORT",
        }
    }

    /// Local development server command, surfaced in the setup docs.
    pub fn dev_command(&self) -> &'static str {
        match self {
            FrameworkId::Express | FrameworkId::NextJs | FrameworkId::NestJs => "npm run dev",
            FrameworkId::Django => "python manage.py runserver",
            FrameworkId::Flask => "flask run",
            FrameworkId::FastApi => "uvicorn main:app --reload",
        }
    }

    /// Importable top-level module, used by the Python workflow smoke check.
    pub fn main_module(&self) -> &'static str {
        match self {
            FrameworkId::Django => "django",
            FrameworkId::Flask => "app",
            FrameworkId::FastApi => "main",
            _ => "app",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_language_partition() {
        // Every framework belongs to exactly one language, and every
        // language's framework list round-trips back to that language.
        for fw in FrameworkId::all_variants() {
            assert!(fw.language().frameworks().contains(fw));
        }
    }

    #[test]
    fn test_framework_aliases() {
        assert_eq!(FrameworkId::from_name("next.js"), Some(FrameworkId::NextJs));
        assert_eq!(FrameworkId::from_name("Express"), Some(FrameworkId::Express));
        assert_eq!(FrameworkId::from_name("rails"), None);
    }

    #[test]
    fn test_framework_serialization() {
        assert_eq!(
            serde_json::to_string(&FrameworkId::FastApi).unwrap(),
            "\"fastapi\""
        );
        assert_eq!(
            serde_json::from_str::<FrameworkId>("\"nextjs\"").unwrap(),
            FrameworkId::NextJs
        );
    }
}
