//! Container file renderers
//!
//! Dockerfile and .dockerignore for container-deploy platforms. Both use a
//! two-stage build so the runtime image carries no build toolchain.

use super::context::RenderContext;
use crate::profile::LanguageId;

pub fn render_dockerfile(ctx: &RenderContext) -> String {
    match ctx.profile.language {
        LanguageId::Node => node_dockerfile(ctx),
        LanguageId::Python => python_dockerfile(ctx),
    }
}

fn cmd_json(command: &str) -> String {
    let words: Vec<String> = command
        .split_whitespace()
        .map(|w| format!("\"{w}\""))
        .collect();
    format!("[{}]", words.join(", "))
}

fn node_dockerfile(ctx: &RenderContext) -> String {
    let version = ctx.profile.language.version();
    let install = ctx.profile.language.ci_install_command();
    let build = ctx.profile.language.build_command();
    let start = cmd_json(ctx.profile.framework.start_command());
    let port = ctx.app_port;

    format!(
        r#"# Build stage
FROM node:{version}-alpine AS builder

WORKDIR /app

COPY package*.json ./
RUN {install}

COPY . .
RUN {build}

# Production stage
FROM node:{version}-alpine AS production

WORKDIR /app

COPY package*.json ./
RUN npm ci --only=production

COPY --from=builder /app/dist ./dist

RUN addgroup -g 1001 -S nodejs && adduser -S nodejs -u 1001
USER nodejs

EXPOSE {port}

CMD {start}
"#
    )
}

fn python_dockerfile(ctx: &RenderContext) -> String {
    let version = ctx.profile.language.version();
    let start = cmd_json(ctx.profile.framework.start_command());
    let port = ctx.app_port;

    format!(
        r#"# Build stage
FROM python:{version}-slim AS builder

WORKDIR /app

RUN apt-get update && apt-get install -y --no-install-recommends \
    build-essential \
    && rm -rf /var/lib/apt/lists/*

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

# Production stage
FROM python:{version}-slim AS production

WORKDIR /app

COPY --from=builder /usr/local/lib/python{version}/site-packages /usr/local/lib/python{version}/site-packages
COPY --from=builder /usr/local/bin /usr/local/bin

COPY . .

RUN useradd -m -u 1001 appuser
USER appuser

EXPOSE {port}

CMD {start}
"#
    )
}

pub fn render_dockerignore() -> &'static str {
    "\
# Dependencies
node_modules/
__pycache__/
*.pyc
.venv/
venv/

# Build outputs
dist/
build/
*.egg-info/

# Test and coverage
coverage/
.coverage
htmlcov/
.pytest_cache/
.nyc_output/

# IDE and editor
.idea/
.vscode/
*.swp
*.swo

# OS files
.DS_Store
Thumbs.db

# Environment and secrets
.env
.env.*
*.pem
*.key

# Git
.git/
.gitignore

# Documentation
*.md
docs/

# CI/CD
.github/
.gitlab-ci.yml
"
}
