use clap::{Parser, Subcommand};
use install_deps::HostOptions;
use std::path::PathBuf;

/// Install the build dependencies for this host
#[derive(Parser)]
#[command(name = "install-deps")]
#[command(about = "Detect the host platform and install its build dependencies")]
#[command(version)]
pub struct Cli {
    /// Print the commands that would run without executing them.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// OS-release file to read instead of /etc/os-release
    #[arg(long, global = true, value_name = "PATH")]
    pub os_release: Option<PathBuf>,

    /// Arch marker file to check instead of /etc/arch-release
    #[arg(long, global = true, value_name = "PATH")]
    pub arch_marker: Option<PathBuf>,

    /// apt source list to append to instead of /etc/apt/sources.list
    #[arg(long, global = true, value_name = "PATH")]
    pub apt_sources: Option<PathBuf>,

    /// Environment variable whose presence marks a CI run
    #[arg(long, global = true, value_name = "NAME")]
    pub ci_env_var: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
pub enum Commands {
    /// Detect, resolve and run the install plan (default)
    Install,
    /// Print the detected platform signal
    Detect {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved plan without executing it
    Plan {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Host options with any path overrides applied.
    pub fn host_options(&self) -> HostOptions {
        let mut options = HostOptions::default();
        if let Some(path) = &self.os_release {
            options.os_release = path.clone();
        }
        if let Some(path) = &self.arch_marker {
            options.arch_marker = path.clone();
        }
        if let Some(path) = &self.apt_sources {
            options.apt_sources = path.clone();
        }
        if let Some(name) = &self.ci_env_var {
            options.ci_env_var = name.clone();
        }
        options
    }

    pub fn selected_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Install)
    }
}
