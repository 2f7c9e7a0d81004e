use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Library inventory REST service with file uploads.
#[derive(Parser, Debug, Clone)]
#[command(name = "bookshelf-rs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file.
    #[arg(short, long, env = "BOOKSHELF_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the server (default if no command given).
    Serve {
        /// Address to bind the server to.
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },

    /// Create a default config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Main configuration from TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Upload configuration.
    #[serde(default)]
    pub upload: UploadConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,

    /// Library title, reported by the info record.
    #[serde(default = "default_title")]
    pub title: String,

    /// Library author/maintainer, reported by the info record.
    #[serde(default = "default_author")]
    pub author: String,

    /// Service description, reported by the info record.
    #[serde(default = "default_description")]
    pub description: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            title: default_title(),
            author: default_author(),
            description: default_description(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::new(
        std::net::IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        3006,
    )
}

fn default_title() -> String {
    "Contoso Library".to_string()
}

fn default_author() -> String {
    "Graham K Katana".to_string()
}

fn default_description() -> String {
    "Welcome to the library API".to_string()
}

/// Upload configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory for single-file uploads.
    #[serde(default = "default_single_dir")]
    pub single_dir: PathBuf,

    /// Directory for multi-file uploads.
    #[serde(default = "default_multi_dir")]
    pub multi_dir: PathBuf,

    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            single_dir: default_single_dir(),
            multi_dir: default_multi_dir(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_single_dir() -> PathBuf {
    PathBuf::from("./tmp")
}

fn default_multi_dir() -> PathBuf {
    PathBuf::from("./temp")
}

fn default_max_body_bytes() -> usize {
    8 * 1024 * 1024
}

impl Config {
    /// Load configuration from file.
    pub fn load(path: &PathBuf) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::error::AppError::Config(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            crate::error::AppError::Config(format!("Failed to parse config file: {}", e))
        })
    }

    /// Find config file in default locations.
    pub fn find_config_file() -> Option<PathBuf> {
        let candidates = [
            PathBuf::from("config.toml"),
            PathBuf::from("bookshelf-rs.toml"),
            PathBuf::from("/etc/bookshelf-rs/config.toml"),
        ];

        candidates.into_iter().find(|p| p.exists())
    }

    /// Generate default config file content.
    pub fn generate_default() -> String {
        r#"# bookshelf-rs configuration

[server]
bind = "0.0.0.0:3006"
title = "Contoso Library"
author = "Graham K Katana"
description = "Welcome to the library API"

[upload]
# Directories must be writable; created at startup if missing.
single_dir = "./tmp"
multi_dir = "./temp"
# Maximum request body size in bytes (8 MiB)
max_body_bytes = 8388608
"#
        .to_string()
    }
}
