crate::define_id_enum! {
    /// Deployment environment. Declaration order is promotion order: earlier
    /// stages deploy before later ones.
    EnvironmentId {
        Development => "development" : "Development" | "dev",
        Preview => "preview" : "Preview",
        Staging => "staging" : "Staging" | "stage",
        Production => "production" : "Production" | "prod",
    }
}

impl EnvironmentId {
    /// Uppercase form used to derive per-stage secret tokens
    /// (e.g. `HEROKU_APP_NAME_STAGING`).
    pub fn upper(&self) -> String {
        self.token().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_order() {
        assert!(EnvironmentId::Staging < EnvironmentId::Production);
        assert!(EnvironmentId::Development < EnvironmentId::Staging);
        assert!(EnvironmentId::Preview < EnvironmentId::Staging);
    }

    #[test]
    fn test_environment_aliases() {
        assert_eq!(
            EnvironmentId::from_name("prod"),
            Some(EnvironmentId::Production)
        );
        assert_eq!(
            EnvironmentId::from_name("stage"),
            Some(EnvironmentId::Staging)
        );
    }

    #[test]
    fn test_upper_token() {
        assert_eq!(EnvironmentId::Staging.upper(), "STAGING");
        assert_eq!(EnvironmentId::Production.upper(), "PRODUCTION");
    }
}
