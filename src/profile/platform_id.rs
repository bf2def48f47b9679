use super::DatastoreId;

crate::define_id_enum! {
    /// Deployment platform identifier
    PlatformId {
        Heroku => "heroku" : "Heroku",
        Aws => "aws" : "AWS" | "amazon",
        Gcp => "gcp" : "GCP" | "google" | "google-cloud",
        Azure => "azure" : "Azure" | "microsoft",
    }
}

impl PlatformId {
    /// Whether this platform conventionally deploys through separate staging
    /// and production apps. Single-stage platforms default to production only.
    pub fn multi_stage(&self) -> bool {
        match self {
            PlatformId::Heroku | PlatformId::Aws | PlatformId::Gcp => true,
            // Azure Web Apps stage through deployment slots inside one app.
            PlatformId::Azure => false,
        }
    }

    /// Managed datastores this platform can provision for the generated
    /// configuration. Checked at resolution time, not at render time.
    pub fn supported_datastores(&self) -> &'static [DatastoreId] {
        match self {
            // No first-party managed MongoDB offering on Heroku.
            PlatformId::Heroku => &[
                DatastoreId::Postgres,
                DatastoreId::Mysql,
                DatastoreId::Redis,
            ],
            PlatformId::Aws | PlatformId::Gcp | PlatformId::Azure => &[
                DatastoreId::Postgres,
                DatastoreId::Mysql,
                DatastoreId::Mongodb,
                DatastoreId::Redis,
            ],
        }
    }

    /// Whether deployments ship as container images (Dockerfile + ignore file
    /// are generated).
    pub fn uses_container_deploy(&self) -> bool {
        matches!(self, PlatformId::Aws | PlatformId::Gcp)
    }
}
