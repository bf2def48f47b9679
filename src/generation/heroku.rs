//! Heroku manifest renderers
//!
//! Procfile and `app.json` for the Heroku registry rows. The manifest is
//! assembled as a JSON value and pretty-printed, never string-spliced.

use super::context::RenderContext;
use crate::profile::LanguageId;
use serde_json::json;

const DEFAULT_DESCRIPTION: &str = "Application deployed via CI/CD pipeline";
const PLACEHOLDER_REPOSITORY: &str = "https://github.com/username/repo";

pub fn render_procfile(ctx: &RenderContext) -> String {
    format!("web: {}\n", ctx.profile.framework.start_command())
}

pub fn render_app_manifest(ctx: &RenderContext) -> String {
    let addons: Vec<&str> = ctx
        .services
        .iter()
        .filter_map(|s| s.id.heroku_addon())
        .collect();

    let buildpack = match ctx.profile.language {
        LanguageId::Node => "heroku/nodejs",
        LanguageId::Python => "heroku/python",
    };

    let env = match ctx.profile.language {
        LanguageId::Node => json!({ "NODE_ENV": { "value": "production" } }),
        LanguageId::Python => json!({}),
    };

    let manifest = json!({
        "name": ctx.profile.app_name,
        "description": DEFAULT_DESCRIPTION,
        "repository": PLACEHOLDER_REPOSITORY,
        "keywords": ["ci-cd", ctx.profile.language.token()],
        "env": env,
        "formation": {
            "web": {
                "quantity": 1,
                "size": "basic"
            }
        },
        "addons": addons,
        "buildpacks": [{ "url": buildpack }],
        "environments": {
            "test": {
                "scripts": {
                    "test": ctx.profile.language.test_command()
                }
            }
        }
    });

    let mut out = serde_json::to_string_pretty(&manifest)
        .expect("app manifest is always serializable");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{
        DatastoreId, EnvironmentId, FrameworkId, GenerateOptions, PlatformId, ProjectProfile,
    };

    fn profile() -> ProjectProfile {
        ProjectProfile {
            app_name: "shop-api".to_string(),
            language: LanguageId::Node,
            framework: FrameworkId::Express,
            platform: PlatformId::Heroku,
            datastores: [DatastoreId::Postgres, DatastoreId::Redis]
                .into_iter()
                .collect(),
            environments: vec![EnvironmentId::Staging, EnvironmentId::Production],
            options: GenerateOptions::default(),
        }
    }

    #[test]
    fn test_procfile_uses_framework_start_command() {
        let profile = profile();
        let ctx = RenderContext::new(&profile);
        assert_eq!(render_procfile(&ctx), "web: node server.js\n");
    }

    #[test]
    fn test_app_manifest_is_valid_json_with_addons() {
        let profile = profile();
        let ctx = RenderContext::new(&profile);
        let manifest = render_app_manifest(&ctx);

        let value: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(value["name"], "shop-api");
        assert_eq!(
            value["addons"],
            json!(["heroku-postgresql:mini", "heroku-redis:mini"])
        );
        assert_eq!(value["buildpacks"][0]["url"], "heroku/nodejs");
        assert_eq!(value["env"]["NODE_ENV"]["value"], "production");
    }

    #[test]
    fn test_python_manifest_has_no_node_env() {
        let mut profile = profile();
        profile.language = LanguageId::Python;
        profile.framework = FrameworkId::Flask;
        let ctx = RenderContext::new(&profile);
        let manifest = render_app_manifest(&ctx);

        let value: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(value["env"], json!({}));
        assert_eq!(value["buildpacks"][0]["url"], "heroku/python");
        assert_eq!(value["environments"]["test"]["scripts"]["test"], "pytest");
    }
}
